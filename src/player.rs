use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Bot skill tier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(text)
    }
}

/// Who drives a seat: a person (local or remote) or a bot of a given tier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Bot(Difficulty),
}

impl Controller {
    #[inline]
    pub fn is_bot(&self) -> bool {
        matches!(self, Controller::Bot(_))
    }
}

/// Seat description supplied when starting a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub controller: Controller,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    pub fn bot(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Bot(difficulty),
        }
    }
}

/// Mutable per-round state of one seat. Owned by the game; the turn engine
/// and effect resolver mutate it through the game's registry accessors.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub name: String,
    pub controller: Controller,
    /// 0-2 cards; 2 only for the active player during the play phase.
    pub hand: Vec<Card>,
    /// Public, append-only within a round.
    pub discard: Vec<Card>,
    /// Set by Handmaid, cleared at the start of this seat's next turn.
    pub protected: bool,
    /// Terminal once set for the round.
    pub out: bool,
}

impl PlayerState {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            name: config.name,
            controller: config.controller,
            hand: Vec::with_capacity(2),
            discard: Vec::new(),
            protected: false,
            out: false,
        }
    }

    /// Wipe round-scoped state ahead of a fresh deal.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.discard.clear();
        self.protected = false;
        self.out = false;
    }

    /// The single held card outside the play phase.
    #[inline]
    pub fn hand_card(&self) -> Option<Card> {
        self.hand.first().copied()
    }

    /// Showdown tie-break: sum of discarded card values.
    pub fn discard_sum(&self) -> u32 {
        self.discard.iter().map(|card| u32::from(card.value())).sum()
    }

    /// Remove the chosen card from hand and expose it on the discard pile.
    /// Callers must have validated the index.
    pub fn move_card_to_discard(&mut self, hand_index: usize) -> Card {
        let card = self.hand.remove(hand_index);
        self.discard.push(card);
        card
    }

    /// Knock the seat out of the round. Any remaining hand card becomes
    /// public on the discard pile; the revealed card is returned.
    pub fn eliminate(&mut self) -> Option<Card> {
        self.out = true;
        self.hand.pop().inspect(|card| self.discard.push(*card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eliminate_reveals_remaining_hand_card() {
        let mut player = PlayerState::new(PlayerConfig::human("A"));
        player.hand.push(Card::Princess);
        let revealed = player.eliminate();
        assert!(player.out);
        assert_eq!(revealed, Some(Card::Princess));
        assert_eq!(player.discard, vec![Card::Princess]);
        assert!(player.hand.is_empty());
    }

    #[test]
    fn eliminate_with_empty_hand_reveals_nothing() {
        let mut player = PlayerState::new(PlayerConfig::bot("B", Difficulty::Easy));
        assert_eq!(player.eliminate(), None);
        assert!(player.out);
        assert!(player.discard.is_empty());
    }

    #[test]
    fn discard_sum_adds_card_values() {
        let mut player = PlayerState::new(PlayerConfig::human("A"));
        player.discard = vec![Card::Guard, Card::Prince, Card::Priest];
        assert_eq!(player.discard_sum(), 8);
    }
}
