use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Move;
use crate::bot::Bot;
use crate::card::Card;
use crate::state::GameStateView;

/// Easy-tier bot: uniformly random play, dodging the Princess when any
/// other card is legal.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, state: &GameStateView, legal_moves: &[Move]) -> Move {
        assert!(
            !legal_moves.is_empty(),
            "at least one legal move must be available"
        );
        let mut indices: Vec<usize> = legal_moves.iter().map(|m| m.card_index).collect();
        indices.sort_unstable();
        indices.dedup();

        let safe: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| state.hand.get(i) != Some(&Card::Princess))
            .collect();
        let pool = if safe.is_empty() { &indices } else { &safe };
        let card_index = *pool
            .choose(&mut self.rng)
            .expect("legal moves imply at least one playable card");

        // Uniform over the chosen card's moves is uniform over its legal
        // targets, and over guesses for a Guard.
        let candidates: Vec<Move> = legal_moves
            .iter()
            .copied()
            .filter(|m| m.card_index == card_index)
            .collect();
        *candidates
            .choose(&mut self.rng)
            .expect("chosen card index came from the legal move list")
    }
}
