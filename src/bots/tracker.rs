use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::{Move, PlayerId};
use crate::bot::Bot;
use crate::card::{Card, MAX_GUESS, MIN_GUESS};
use crate::event::GameEvent;
use crate::state::GameStateView;

/// Hard-tier bot. Keeps a memory table of last-known opponent cards,
/// fed by Priest reveals and King swaps it takes part in, and spends that
/// knowledge on exact Guard guesses and safe Baron comparisons. Without
/// knowledge it guesses among the values still unaccounted for in the
/// public discards.
pub struct TrackerBot<R: Rng> {
    seat: PlayerId,
    rng: R,
    /// Seat id to the card that seat was last known to hold.
    memory: BTreeMap<PlayerId, Card>,
    /// Own hand at the previous observation, for swap bookkeeping.
    last_hand: Vec<Card>,
}

impl<R: Rng> TrackerBot<R> {
    pub fn new(seat: PlayerId, rng: R) -> Self {
        Self {
            seat,
            rng,
            memory: BTreeMap::new(),
            last_hand: Vec::new(),
        }
    }

    /// The card this bot would hand over in a King swap: the non-King half
    /// of its last seen hand.
    fn swap_given_card(&self) -> Option<Card> {
        self.last_hand.iter().copied().find(|c| *c != Card::King)
    }

    fn note_swap(&mut self, player: PlayerId, target: PlayerId) {
        if player == self.seat {
            if let Some(given) = self.swap_given_card() {
                self.memory.insert(target, given);
            }
        } else if target == self.seat {
            if let Some(previous) = self.last_hand.first().copied() {
                self.memory.insert(player, previous);
            }
        } else {
            // Two opponents traded; whatever was known about each hand
            // travels with it.
            let from_player = self.memory.remove(&player);
            let from_target = self.memory.remove(&target);
            if let Some(card) = from_player {
                self.memory.insert(target, card);
            }
            if let Some(card) = from_target {
                self.memory.insert(player, card);
            }
        }
    }

    /// A memory-backed move, when knowledge lines up with a legal play.
    fn informed_move(&self, state: &GameStateView, legal_moves: &[Move]) -> Option<Move> {
        // Exact Guard guess on a known hand.
        for (&target, &card) in &self.memory {
            if card == Card::Guard {
                continue;
            }
            let exact = legal_moves.iter().copied().find(|m| {
                state.hand.get(m.card_index) == Some(&Card::Guard)
                    && m.target == Some(target)
                    && m.guess == Some(card.value())
            });
            if let Some(mov) = exact {
                return Some(mov);
            }
        }
        // Baron against a hand known to be weaker than what we would keep.
        for (&target, &card) in &self.memory {
            let safe_baron = legal_moves.iter().copied().find(|m| {
                state.hand.get(m.card_index) == Some(&Card::Baron)
                    && m.target == Some(target)
                    && self.kept_value(state, m.card_index) > card.value()
            });
            if let Some(mov) = safe_baron {
                return Some(mov);
            }
        }
        None
    }

    /// Value of the card left in hand after playing `card_index`.
    fn kept_value(&self, state: &GameStateView, card_index: usize) -> u8 {
        state
            .hand
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != card_index)
            .map(|(_, c)| c.value())
            .max()
            .unwrap_or(0)
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

    /// Guess values still plausible given public discards, the face-up
    /// removed cards and this bot's own hand.
    fn plausible_guesses(&self, state: &GameStateView) -> Vec<u8> {
        (MIN_GUESS..=MAX_GUESS)
            .filter(|&value| {
                let Some(card) = Card::from_value(value) else {
                    return false;
                };
                let held = state.hand.iter().filter(|c| **c == card).count();
                state.unseen_copies(card) > held
            })
            .collect()
    }

    fn guard_guess(&mut self, state: &GameStateView, candidates: &[Move]) -> Move {
        let mut targets: Vec<PlayerId> = candidates.iter().filter_map(|m| m.target).collect();
        targets.sort_unstable();
        targets.dedup();
        let target = targets
            .choose(&mut self.rng)
            .copied()
            .expect("guard candidates always carry targets");

        let plausible = self.plausible_guesses(state);
        let guess = plausible
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(|| self.rng.gen_range(MIN_GUESS..=MAX_GUESS));
        candidates
            .iter()
            .copied()
            .find(|m| m.target == Some(target) && m.guess == Some(guess))
            .unwrap_or(candidates[0])
    }
}

impl<R: Rng> Bot for TrackerBot<R> {
    fn select_move(&mut self, state: &GameStateView, legal_moves: &[Move]) -> Move {
        assert!(
            !legal_moves.is_empty(),
            "at least one legal move must be available"
        );
        let chosen = if let Some(mov) = self.informed_move(state, legal_moves) {
            mov
        } else {
            let mut indices: Vec<usize> = legal_moves.iter().map(|m| m.card_index).collect();
            indices.sort_unstable();
            indices.dedup();
            let card_index = self.pick_card_index(state, &indices);

            let candidates: Vec<Move> = legal_moves
                .iter()
                .copied()
                .filter(|m| m.card_index == card_index)
                .collect();
            if state.hand.get(card_index) == Some(&Card::Guard) && candidates[0].target.is_some() {
                self.guard_guess(state, &candidates)
            } else {
                *candidates
                    .choose(&mut self.rng)
                    .expect("chosen card index came from the legal move list")
            }
        };
        self.last_hand = state.hand.clone();
        chosen
    }

    fn observe(&mut self, state: &GameStateView, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::PriestReveal {
                    player,
                    target,
                    card,
                } if player == self.seat => {
                    self.memory.insert(target, card);
                }
                GameEvent::HandsSwapped { player, target } => {
                    self.note_swap(player, target);
                }
                GameEvent::Eliminated { player, .. } => {
                    self.memory.remove(&player);
                }
                GameEvent::CardPlayed { player, card, .. }
                | GameEvent::Fizzled { player, card } => {
                    if self.memory.get(&player) == Some(&card) {
                        self.memory.remove(&player);
                    }
                }
                GameEvent::ForcedDiscard { target, .. } => {
                    // The old hand is public now and the new one is a blind
                    // draw; knowledge about that seat is stale either way.
                    self.memory.remove(&target);
                }
                _ => {}
            }
        }
        self.last_hand = state.hand.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_given_card_skips_the_king() {
        let mut bot = TrackerBot::new(0, rand::rngs::mock::StepRng::new(0, 1));
        bot.last_hand = vec![Card::King, Card::Priest];
        assert_eq!(bot.swap_given_card(), Some(Card::Priest));
        bot.last_hand = vec![Card::Baron, Card::King];
        assert_eq!(bot.swap_given_card(), Some(Card::Baron));
    }

    #[test]
    fn opponent_swap_moves_knowledge_with_the_cards() {
        let mut bot = TrackerBot::new(0, rand::rngs::mock::StepRng::new(0, 1));
        bot.memory.insert(1, Card::Princess);
        bot.note_swap(1, 2);
        assert_eq!(bot.memory.get(&2), Some(&Card::Princess));
        assert_eq!(bot.memory.get(&1), None);
    }
}
