use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Move;
use crate::bot::Bot;
use crate::card::Card;
use crate::state::GameStateView;

/// Medium-tier bot: random like the easy tier, but when choosing between
/// its two cards it favors banking Handmaid protection and never exposes
/// the Princess while an alternative exists.
pub struct CautiousBot<R: Rng> {
    rng: R,
}

impl<R: Rng> CautiousBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick_card_index(&mut self, state: &GameStateView, indices: &[usize]) -> usize {
        if let Some(&handmaid) = indices
            .iter()
            .find(|&&i| state.hand.get(i) == Some(&Card::Handmaid))
        {
            return handmaid;
        }
        let safe: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| state.hand.get(i) != Some(&Card::Princess))
            .collect();
        let pool = if safe.is_empty() { indices } else { &safe };
        *pool
            .choose(&mut self.rng)
            .expect("legal moves imply at least one playable card")
    }
}

impl<R: Rng> Bot for CautiousBot<R> {
    fn select_move(&mut self, state: &GameStateView, legal_moves: &[Move]) -> Move {
        assert!(
            !legal_moves.is_empty(),
            "at least one legal move must be available"
        );
        let mut indices: Vec<usize> = legal_moves.iter().map(|m| m.card_index).collect();
        indices.sort_unstable();
        indices.dedup();
        let card_index = self.pick_card_index(state, &indices);

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
