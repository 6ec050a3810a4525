//! Core value types: pieces, positions, players, configuration, actions.
//!
//! These carry no rules of their own. The board stores pieces, and the
//! engine in `rules` interprets actions against players and configuration.

pub mod piece;
pub mod position;
pub mod player;
pub mod config;
pub mod action;

pub use piece::PieceColor;
pub use position::Position;
pub use player::{Player, PlayerId, PlayerPair};
pub use config::{ConfigError, GameConfig};
pub use action::{Action, ActionRecord};
