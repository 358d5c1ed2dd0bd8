//! Showdown ranking for deck-exhausted rounds.
//!
//! Survivors are ranked by remaining hand value, highest first, with the
//! sum of discarded values as tie-break. An exact tie on both keys is an
//! explicit multi-winner outcome rather than an arbitrary pick.

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::Card;

/// One surviving seat's showdown line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub player: PlayerId,
    /// `None` for the rare seat whose Prince-forced discard found both deck
    /// and burned card spent; it ranks below every real card.
    pub hand: Option<Card>,
    pub discard_sum: u32,
}

impl ShowdownEntry {
    fn key(&self) -> (u8, u32) {
        (self.hand.map_or(0, |card| card.value()), self.discard_sum)
    }
}

/// Sort entries best first: hand value descending, then discard sum.
pub fn rank(mut entries: Vec<ShowdownEntry>) -> Vec<ShowdownEntry> {
    entries.sort_by(|a, b| b.key().cmp(&a.key()).then(a.player.cmp(&b.player)));
    entries
}

/// Every seat tied with the ranking leader.
pub fn winners(ranked: &[ShowdownEntry]) -> Vec<PlayerId> {
    let Some(best) = ranked.first() else {
        return Vec::new();
    };
    ranked
        .iter()
        .take_while(|entry| entry.key() == best.key())
        .map(|entry| entry.player)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: PlayerId, hand: Option<Card>, discard_sum: u32) -> ShowdownEntry {
        ShowdownEntry {
            player,
            hand,
            discard_sum,
        }
    }

    #[test]
    fn higher_hand_value_wins() {
        let ranked = rank(vec![
            entry(0, Some(Card::Priest), 9),
            entry(1, Some(Card::Prince), 2),
        ]);
        assert_eq!(winners(&ranked), vec![1]);
    }

    #[test]
    fn discard_sum_breaks_equal_hands() {
        let ranked = rank(vec![
            entry(0, Some(Card::Baron), 4),
            entry(1, Some(Card::Baron), 7),
        ]);
        assert_eq!(winners(&ranked), vec![1]);
    }

    #[test]
    fn exact_tie_names_every_leader() {
        let ranked = rank(vec![
            entry(0, Some(Card::Handmaid), 5),
            entry(1, Some(Card::Handmaid), 5),
            entry(2, Some(Card::Guard), 9),
        ]);
        assert_eq!(winners(&ranked), vec![0, 1]);
    }

    #[test]
    fn empty_hand_ranks_below_any_card() {
        let ranked = rank(vec![
            entry(0, None, 20),
            entry(1, Some(Card::Guard), 0),
        ]);
        assert_eq!(winners(&ranked), vec![1]);
    }
}
