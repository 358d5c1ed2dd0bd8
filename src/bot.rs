use crate::action::Move;
use crate::event::GameEvent;
use crate::state::GameStateView;

/// Interface for seat controllers, bot or human driven.
pub trait Bot {
    fn select_move(&mut self, state: &GameStateView, legal_moves: &[Move]) -> Move;

    /// Fed the events of every accepted move so stateful bots can track
    /// revealed information. The default does nothing.
    fn observe(&mut self, _state: &GameStateView, _events: &[GameEvent]) {}
}
