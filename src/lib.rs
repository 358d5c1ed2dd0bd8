//! Love Letter rules engine with bot opponents and a host-authoritative
//! command/snapshot protocol for multiplayer glue.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod player;
pub mod protocol;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Move, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::registry::{
    bot_for_difficulty, create_bot_from_spec, difficulty_for_spec, label_for_spec,
};
pub use crate::bots::{CautiousBot, HumanBot, RandomBot, TrackerBot};
pub use crate::card::Card;
pub use crate::error::{GameError, IllegalMove};
pub use crate::event::{EliminationReason, GameEvent};
pub use crate::game::{Game, GameBuilder, GameConfig, MoveOutcome};
pub use crate::player::{Controller, Difficulty, PlayerConfig};
pub use crate::protocol::{Host, HostMessage, MoveProposal};
pub use crate::score::ShowdownEntry;
pub use crate::state::{
    GameSettings, GameSnapshot, GameStateView, GameStatus, PlayerPublicState, PlayerSnapshot,
    TurnPhase,
};
pub use crate::visualize::{VisualOptions, describe_move, render_state};
