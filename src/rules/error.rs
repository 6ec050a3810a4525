//! Rule violations and setup failures.
//!
//! A rejected move is a normal game outcome, not a fault: every engine
//! operation reports it as a `MoveError` and leaves the game untouched.

use crate::core::config::ConfigError;
use crate::core::piece::PieceColor;

/// Why a move or query was rejected.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Name matches neither registered player.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// A registered player tried to act on the other player's turn.
    #[error("it is {active}'s turn, not {player}'s")]
    OutOfTurn { player: String, active: String },

    /// Bad coordinates, shape or pile ownership.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Zero pieces, or more than the start pile holds.
    #[error("cannot move {requested} piece(s) from a pile of {available}")]
    IllegalPieceCount { requested: usize, available: usize },

    /// Reserve placement with an empty reserve.
    #[error("{0} has no pieces in reserve")]
    NoReserves(String),
}

/// Why a game could not be created.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("both players are named {0}")]
    DuplicateName(String),

    #[error("both players use color {0}")]
    DuplicateColor(PieceColor),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
