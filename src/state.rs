use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;
use crate::player::Controller;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub deck_size: usize,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 4",
            ));
        }
        Ok(Self {
            num_players,
            deck_size: DECK_SIZE,
        })
    }
}

/// Current phase of the round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    /// Round set up, active player has not drawn yet.
    Draw,
    /// Active player holds two cards and must play one.
    Play,
    GameOver,
}

/// Status of the entire game. A showdown that ends in an exact tie names
/// every tied player, so `winners` holds one id in all but that rare case.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winners: Vec<PlayerId> },
}

impl GameStatus {
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished { .. })
    }
}

/// Public portion of a seat's state that every player may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub controller: Controller,
    pub hand_size: usize,
    /// Discard piles are open information in this game.
    pub discard: Vec<Card>,
    pub protected: bool,
    pub out: bool,
    pub is_current: bool,
}

/// Game state snapshot from one seat's perspective: own hand visible,
/// opponents reduced to their public information.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub deck_count: usize,
    /// Whether the face-down burned card is still set aside.
    pub burned_remaining: bool,
    /// Face-up removed cards (two-player rounds only).
    pub face_up_removed: Vec<Card>,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}

impl GameStateView {
    /// Public state of the viewing seat itself.
    pub fn self_state(&self) -> &PlayerPublicState {
        &self.players[self.self_player]
    }

    /// Seats the viewer could aim a targeted card at right now.
    pub fn valid_targets(&self) -> impl Iterator<Item = &PlayerPublicState> {
        self.players
            .iter()
            .filter(|p| p.id != self.self_player && !p.out && !p.protected)
    }

    /// Copies of `card` not yet seen in any discard pile or the face-up
    /// removed set. Bots use this to weigh Guard guesses.
    pub fn unseen_copies(&self, card: Card) -> usize {
        let discarded: usize = self
            .players
            .iter()
            .map(|p| p.discard.iter().filter(|c| **c == card).count())
            .sum();
        let removed = self.face_up_removed.iter().filter(|c| **c == card).count();
        card.copies().saturating_sub(discarded + removed)
    }
}

/// Full-information state record the authoritative host broadcasts after
/// every transition. Hiding remote hands is an explicit non-goal; honest
/// clients render through per-seat `GameStateView`s instead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub current_player: PlayerId,
    pub deck_count: usize,
    pub burned_remaining: bool,
    pub face_up_removed: Vec<Card>,
    pub players: Vec<PlayerSnapshot>,
}

/// One seat inside a `GameSnapshot`, hand included.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub controller: Controller,
    pub hand: Vec<Card>,
    pub discard: Vec<Card>,
    pub protected: bool,
    pub out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_reject_out_of_range_player_counts() {
        assert!(GameSettings::new(1).is_err());
        assert!(GameSettings::new(5).is_err());
        assert!(GameSettings::new(2).is_ok());
        assert!(GameSettings::new(4).is_ok());
    }
}
