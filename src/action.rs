use serde::{Deserialize, Serialize};

/// Zero-based seat index of a player within the game.
pub type PlayerId = usize;

/// A single turn decision: which hand card to play, aimed at whom, and the
/// Guard guess when one applies.
///
/// `target` is `None` both for cards that never take a target and for plays
/// that fizzle because no legal target exists.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// Index into the active player's two-card hand.
    pub card_index: usize,
    /// Seat the effect is aimed at, when the card takes one.
    pub target: Option<PlayerId>,
    /// Guessed card value for a Guard play.
    pub guess: Option<u8>,
}

impl Move {
    /// A play with no target (Handmaid, Countess, Princess, or a fizzle).
    pub fn untargeted(card_index: usize) -> Self {
        Self {
            card_index,
            target: None,
            guess: None,
        }
    }

    /// A play aimed at a seat (Priest, Baron, Prince, King).
    pub fn targeted(card_index: usize, target: PlayerId) -> Self {
        Self {
            card_index,
            target: Some(target),
            guess: None,
        }
    }

    /// A Guard play naming a target and a guessed value.
    pub fn guessing(card_index: usize, target: PlayerId, guess: u8) -> Self {
        Self {
            card_index,
            target: Some(target),
            guess: Some(guess),
        }
    }
}
