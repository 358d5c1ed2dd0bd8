use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::Card;
use crate::score::ShowdownEntry;

/// Why a seat was knocked out of the round.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum EliminationReason {
    PrincessDiscard,
    ForcedPrincessDiscard,
    BaronLoss,
    GuardGuess,
}

impl std::fmt::Display for EliminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EliminationReason::PrincessDiscard => "discarded the Princess",
            EliminationReason::ForcedPrincessDiscard => "forced Princess discard",
            EliminationReason::BaronLoss => "lost the Baron comparison",
            EliminationReason::GuardGuess => "Guard guess",
        };
        f.write_str(text)
    }
}

/// One notable state transition, emitted for display and broadcast.
///
/// `PriestReveal` carries the seen card; the shared round log is open
/// information here, while perspective views still hide live hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted {
        player: PlayerId,
    },
    CardPlayed {
        player: PlayerId,
        card: Card,
        target: Option<PlayerId>,
    },
    /// A targeted card was played with no legal target available.
    Fizzled {
        player: PlayerId,
        card: Card,
    },
    GuardGuess {
        player: PlayerId,
        target: PlayerId,
        guess: u8,
        correct: bool,
    },
    PriestReveal {
        player: PlayerId,
        target: PlayerId,
        card: Card,
    },
    BaronComparison {
        player: PlayerId,
        target: PlayerId,
        loser: Option<PlayerId>,
    },
    Protected {
        player: PlayerId,
    },
    /// Prince effect: `target` discarded `card` and drew a replacement from
    /// the deck or, when the deck was empty, the burned card.
    ForcedDiscard {
        target: PlayerId,
        card: Card,
        replacement_from_burned: bool,
    },
    HandsSwapped {
        player: PlayerId,
        target: PlayerId,
    },
    Eliminated {
        player: PlayerId,
        reason: EliminationReason,
        revealed: Option<Card>,
    },
    DeckExhausted,
    Showdown {
        ranking: Vec<ShowdownEntry>,
    },
    Winner {
        winners: Vec<PlayerId>,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnStarted { player } => {
                write!(f, "--- Player {player}'s turn ---")
            }
            GameEvent::CardPlayed {
                player,
                card,
                target,
            } => match target {
                Some(target) => {
                    write!(f, "Player {player} plays {card} targeting Player {target}")
                }
                None => write!(f, "Player {player} plays {card}"),
            },
            GameEvent::Fizzled { player, card } => {
                write!(f, "Player {player} plays {card} but has no valid targets")
            }
            GameEvent::GuardGuess {
                player,
                target,
                guess,
                correct,
            } => {
                let verdict = if *correct { "correct" } else { "wrong" };
                write!(
                    f,
                    "Player {player} guesses {guess} against Player {target}: {verdict}"
                )
            }
            GameEvent::PriestReveal {
                player,
                target,
                card,
            } => {
                write!(f, "Player {player} sees Player {target}'s {card}")
            }
            GameEvent::BaronComparison {
                player,
                target,
                loser,
            } => match loser {
                Some(loser) => write!(
                    f,
                    "Baron comparison between Player {player} and Player {target}: Player {loser} is out"
                ),
                None => write!(
                    f,
                    "Baron comparison between Player {player} and Player {target}: tie, no one is out"
                ),
            },
            GameEvent::Protected { player } => {
                write!(f, "Player {player} is protected until their next turn")
            }
            GameEvent::ForcedDiscard {
                target,
                card,
                replacement_from_burned,
            } => {
                if *replacement_from_burned {
                    write!(
                        f,
                        "Player {target} discards {card} and draws the burned card"
                    )
                } else {
                    write!(f, "Player {target} discards {card}")
                }
            }
            GameEvent::HandsSwapped { player, target } => {
                write!(f, "Player {player} and Player {target} trade hands")
            }
            GameEvent::Eliminated {
                player,
                reason,
                revealed,
            } => match revealed {
                Some(card) => {
                    write!(f, "Player {player} reveals {card} and is out ({reason})")
                }
                None => write!(f, "Player {player} is out ({reason})"),
            },
            GameEvent::DeckExhausted => f.write_str("Deck empty! Comparing hands"),
            GameEvent::Showdown { ranking } => {
                f.write_str("Showdown:")?;
                for entry in ranking {
                    match entry.hand {
                        Some(card) => write!(
                            f,
                            " Player {} holds {} (discards {});",
                            entry.player, card, entry.discard_sum
                        )?,
                        None => write!(
                            f,
                            " Player {} holds nothing (discards {});",
                            entry.player, entry.discard_sum
                        )?,
                    }
                }
                Ok(())
            }
            GameEvent::Winner { winners } => match winners.as_slice() {
                [single] => write!(f, "*** Player {single} wins the round! ***"),
                many => {
                    let ids: Vec<String> = many.iter().map(|id| id.to_string()).collect();
                    write!(f, "*** Players {} tie for the round! ***", ids.join(", "))
                }
            },
        }
    }
}
