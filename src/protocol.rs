//! Command/snapshot protocol between the authoritative host and remote
//! seats.
//!
//! Clients never mutate state: they send a `MoveProposal` and apply the
//! `HostMessage::Sync` snapshot they receive back verbatim. The host drops
//! proposals whose proposer is not the current player before the core is
//! consulted, and relays the core's rejection otherwise. Transport (peer
//! discovery, relay connections) lives outside this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::{Move, PlayerId};
use crate::event::GameEvent;
use crate::game::Game;
use crate::state::GameSnapshot;

/// Client-to-host message proposing a move for a seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveProposal {
    pub proposer: PlayerId,
    pub mov: Move,
}

/// Host-to-client messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostMessage {
    /// Authoritative state after an accepted move, with the events the move
    /// produced for display.
    Sync {
        snapshot: GameSnapshot,
        events: Vec<GameEvent>,
    },
    /// The proposal was refused; no state changed.
    Rejected { proposer: PlayerId, reason: String },
}

/// Wire-encoding failures.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("failed to decode message: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

pub fn encode_proposal(proposal: &MoveProposal) -> Result<Vec<u8>, ProtocolError> {
    Ok(bincode::serde::encode_to_vec(
        proposal,
        bincode::config::standard(),
    )?)
}

pub fn decode_proposal(bytes: &[u8]) -> Result<MoveProposal, ProtocolError> {
    let (proposal, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(proposal)
}

pub fn encode_message(message: &HostMessage) -> Result<Vec<u8>, ProtocolError> {
    Ok(bincode::serde::encode_to_vec(
        message,
        bincode::config::standard(),
    )?)
}

pub fn decode_message(bytes: &[u8]) -> Result<HostMessage, ProtocolError> {
    let (message, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(message)
}

/// Authority wrapper around the single core instance a host runs.
pub struct Host {
    game: Game,
}

impl Host {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Validate and apply one proposal, producing the reply to broadcast
    /// (on accept) or return to the proposer (on reject).
    pub fn handle_proposal(&mut self, proposal: MoveProposal) -> HostMessage {
        if proposal.proposer != self.game.current_player() {
            return HostMessage::Rejected {
                proposer: proposal.proposer,
                reason: String::from("proposer is not the current player"),
            };
        }
        match self.game.apply_move(proposal.proposer, proposal.mov) {
            Ok(outcome) => HostMessage::Sync {
                snapshot: self.game.snapshot(),
                events: outcome.events,
            },
            Err(err) => HostMessage::Rejected {
                proposer: proposal.proposer,
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::game::GameBuilder;
    use crate::player::PlayerConfig;

    fn host_with_scripted_deck() -> Host {
        // Draw order is pop-from-end: burn, then one deal per seat, then the
        // first turn's draw.
        let deck = vec![
            Card::Guard,    // rest of deck
            Card::Prince,
            Card::Priest,   // player 0 draws
            Card::Baron,    // player 1 dealt
            Card::Guard,    // player 0 dealt
            Card::Handmaid, // face up
            Card::Handmaid, // face up
            Card::Guard,    // face up
            Card::Countess, // burned
        ];
        let players = vec![PlayerConfig::human("Host"), PlayerConfig::human("Guest")];
        let game = GameBuilder::new(players)
            .expect("valid player count")
            .with_deck(deck)
            .build()
            .expect("game builds");
        Host::new(game)
    }

    #[test]
    fn proposal_round_trips_through_the_wire() {
        let proposal = MoveProposal {
            proposer: 1,
            mov: Move::guessing(0, 2, 5),
        };
        let bytes = encode_proposal(&proposal).expect("encode");
        assert_eq!(decode_proposal(&bytes).expect("decode"), proposal);
    }

    #[test]
    fn wrong_proposer_is_rejected_without_consulting_the_core() {
        let mut host = host_with_scripted_deck();
        let before = host.game().snapshot();
        let reply = host.handle_proposal(MoveProposal {
            proposer: 1,
            mov: Move::untargeted(0),
        });
        assert!(matches!(reply, HostMessage::Rejected { proposer: 1, .. }));
        assert_eq!(host.game().snapshot(), before);
    }

    #[test]
    fn accepted_proposal_syncs_snapshot_and_events() {
        let mut host = host_with_scripted_deck();
        // Player 0 holds Guard + Priest; play the Priest at the guest.
        let reply = host.handle_proposal(MoveProposal {
            proposer: 0,
            mov: Move::targeted(1, 1),
        });
        let HostMessage::Sync { snapshot, events } = reply else {
            panic!("expected a sync reply");
        };
        assert_eq!(snapshot.current_player, 1);
        assert!(!events.is_empty());
        let bytes = encode_message(&HostMessage::Sync {
            snapshot: snapshot.clone(),
            events,
        })
        .expect("encode");
        assert!(matches!(
            decode_message(&bytes).expect("decode"),
            HostMessage::Sync { .. }
        ));
    }

    #[test]
    fn core_rejection_is_relayed_to_the_proposer() {
        let mut host = host_with_scripted_deck();
        let reply = host.handle_proposal(MoveProposal {
            proposer: 0,
            mov: Move::untargeted(5),
        });
        assert!(matches!(reply, HostMessage::Rejected { proposer: 0, .. }));
    }
}
