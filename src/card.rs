use serde::{Deserialize, Serialize};

/// One of the eight Love Letter card kinds, ordered by value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Card {
    Guard,
    Priest,
    Baron,
    Handmaid,
    Prince,
    King,
    Countess,
    Princess,
}

pub const DECK_SIZE: usize = 16;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
/// Cards removed face up at round start when exactly two players sit down.
pub const TWO_PLAYER_FACE_UP: usize = 3;
/// Guard guesses must name a value in this range; guessing Guard is illegal.
pub const MIN_GUESS: u8 = 2;
pub const MAX_GUESS: u8 = 8;

/// Fixed catalog order, low to high.
pub const CATALOG: [Card; 8] = [
    Card::Guard,
    Card::Priest,
    Card::Baron,
    Card::Handmaid,
    Card::Prince,
    Card::King,
    Card::Countess,
    Card::Princess,
];

impl Card {
    /// Numeric strength, 1 (Guard) through 8 (Princess).
    #[inline]
    pub fn value(&self) -> u8 {
        match self {
            Card::Guard => 1,
            Card::Priest => 2,
            Card::Baron => 3,
            Card::Handmaid => 4,
            Card::Prince => 5,
            Card::King => 6,
            Card::Countess => 7,
            Card::Princess => 8,
        }
    }

    /// Copies of this kind in the 16-card deck.
    #[inline]
    pub fn copies(&self) -> usize {
        match self {
            Card::Guard => 5,
            Card::Priest | Card::Baron | Card::Handmaid | Card::Prince => 2,
            Card::King | Card::Countess | Card::Princess => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Card::Guard => "Guard",
            Card::Priest => "Priest",
            Card::Baron => "Baron",
            Card::Handmaid => "Handmaid",
            Card::Prince => "Prince",
            Card::King => "King",
            Card::Countess => "Countess",
            Card::Princess => "Princess",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Card::Guard => "Guess a player's hand (cannot guess Guard).",
            Card::Priest => "Look at another player's hand.",
            Card::Baron => "Compare hands; lower value is out.",
            Card::Handmaid => "Ignore all effects until your next turn.",
            Card::Prince => "Choose a player to discard their hand.",
            Card::King => "Trade hands with another player.",
            Card::Countess => "Must be played if you hold King or Prince.",
            Card::Princess => "If discarded, you lose.",
        }
    }

    /// Look up a card by its numeric value.
    pub fn from_value(value: u8) -> Option<Card> {
        CATALOG.iter().copied().find(|card| card.value() == value)
    }

    /// True for cards whose effect aims at a chosen player: an opponent for
    /// Guard, Priest, Baron and King, any player for the Prince.
    #[inline]
    pub fn needs_target(&self) -> bool {
        matches!(
            self,
            Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King
        )
    }

    /// Only the Prince may ever be aimed at its own player.
    #[inline]
    pub fn may_target_self(&self) -> bool {
        matches!(self, Card::Prince)
    }

    /// True for the royalty cards that force the Countess out of a hand.
    #[inline]
    pub fn is_royalty(&self) -> bool {
        matches!(self, Card::Prince | Card::King)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

/// Builds the full 16-card deck in catalog order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for card in CATALOG {
        deck.extend(std::iter::repeat(card).take(card.copies()));
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_sixteen_cards_with_catalog_counts() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for card in CATALOG {
            let copies = deck.iter().filter(|c| **c == card).count();
            assert_eq!(copies, card.copies(), "wrong count for {card}");
        }
    }

    #[test]
    fn values_are_unique_and_ordered() {
        for window in CATALOG.windows(2) {
            assert!(window[0].value() < window[1].value());
        }
        assert_eq!(Card::from_value(1), Some(Card::Guard));
        assert_eq!(Card::from_value(8), Some(Card::Princess));
        assert_eq!(Card::from_value(9), None);
    }

    #[test]
    fn targeting_classification() {
        assert!(Card::Guard.needs_target());
        assert!(Card::King.needs_target());
        assert!(!Card::Handmaid.needs_target());
        assert!(!Card::Countess.needs_target());
        assert!(!Card::Princess.needs_target());
        assert!(Card::Prince.may_target_self());
        assert!(!Card::Baron.may_target_self());
    }
}
