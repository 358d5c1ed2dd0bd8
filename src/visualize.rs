use std::fmt::Write;

use crate::action::Move;
use crate::card::Card;
use crate::state::{GameStateView, GameStatus};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_discards: bool,
    pub show_face_up_removed: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_discards: true,
            show_face_up_removed: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match &state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winners } => match winners.as_slice() {
            [single] => format!("Finished (winner: Player {single})"),
            many => {
                let ids: Vec<String> = many.iter().map(|id| id.to_string()).collect();
                format!("Finished (tied winners: Players {})", ids.join(", "))
            }
        },
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Phase: {:?}", state.phase);
    let current_name = &state.players[state.current_player].name;
    let _ = writeln!(
        out,
        "Current player: {current_name}{}",
        if state.current_player == state.self_player {
            " (You)"
        } else {
            ""
        }
    );
    let _ = writeln!(
        out,
        "Deck: {}  |  Burned card {}",
        state.deck_count,
        if state.burned_remaining {
            "set aside"
        } else {
            "back in play"
        }
    );
    if options.show_face_up_removed && !state.face_up_removed.is_empty() {
        let removed: Vec<String> = state
            .face_up_removed
            .iter()
            .map(|card| card.to_string())
            .collect();
        let _ = writeln!(out, "Removed face up: {}", removed.join(", "));
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.id == state.self_player {
            " (You)"
        } else {
            ""
        };
        let mut flags = Vec::new();
        if player.is_current {
            flags.push("current");
        }
        if player.protected {
            flags.push("protected");
        }
        if player.out {
            flags.push("out");
        }
        let flag_display = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        let _ = writeln!(
            out,
            "  {}{} - cards {}{}",
            player.name, label_you, player.hand_size, flag_display
        );
        if options.show_discards {
            let discard = if player.discard.is_empty() {
                String::from("(empty)")
            } else {
                player
                    .discard
                    .iter()
                    .map(|card| card.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(out, "    Discards: {discard}");
        }
        if player.id == state.self_player {
            if state.hand.is_empty() {
                let _ = writeln!(out, "    Hand: (empty)");
            } else {
                let hand: Vec<String> = state
                    .hand
                    .iter()
                    .enumerate()
                    .map(|(idx, card)| format!("{idx}:{card}"))
                    .collect();
                let _ = writeln!(out, "    Hand: {}", hand.join("  "));
            }
        }
    }
    out
}

pub fn describe_move(state: &GameStateView, mov: &Move) -> String {
    let card_desc = state
        .hand
        .get(mov.card_index)
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let target_name = mov.target.and_then(|id| {
        state
            .players
            .get(id)
            .map(|p| if id == state.self_player { "yourself".to_string() } else { p.name.clone() })
    });
    match (target_name, mov.guess) {
        (Some(name), Some(guess)) => {
            let guessed = Card::from_value(guess)
                .map(|card| card.name().to_string())
                .unwrap_or_else(|| guess.to_string());
            format!("Play {card_desc} on {name}, guessing {guessed}")
        }
        (Some(name), None) => format!("Play {card_desc} on {name}"),
        (None, _) => {
            if state
                .hand
                .get(mov.card_index)
                .is_some_and(Card::needs_target)
            {
                format!("Play {card_desc} (no valid targets)")
            } else {
                format!("Play {card_desc}")
            }
        }
    }
}
