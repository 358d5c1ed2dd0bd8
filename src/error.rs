use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    /// A player id that does not name a seat: a host programming error,
    /// not a recoverable game condition.
    #[error("player index {0} is out of range")]
    UnknownPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Moves rejected before any state mutation takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("the Countess must be played while holding the King or Prince")]
    MustPlayCountess,
    #[error("card takes no target")]
    UnexpectedTarget,
    #[error("card requires a target while valid targets exist")]
    TargetRequired,
    #[error("target player {0} is not in the game")]
    UnknownTarget(PlayerId),
    #[error("target player is protected by a Handmaid")]
    TargetProtected,
    #[error("target player is already out of the round")]
    TargetEliminated,
    #[error("cannot target yourself while an unprotected opponent remains")]
    SelfTarget,
    #[error("Guard play requires a guess")]
    GuessRequired,
    #[error("guess {0} is out of range; guess a value from 2 to 8")]
    GuessOutOfRange(u8),
}
