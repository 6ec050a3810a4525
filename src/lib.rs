//! # focus-engine
//!
//! Rules engine for Domination (also sold as Focus), a two-player
//! stacking game on a 6×6 board.
//!
//! ## Rules in brief
//!
//! - Every cell starts with one piece, colors laid out `A, A, B, B, ...`
//!   row by row.
//! - On a turn a player either moves the top `n` pieces of a pile they
//!   control exactly `n` cells in a straight line, or places a piece from
//!   their reserve on any cell.
//! - A pile taller than 5 loses its bottom piece for each excess arrival.
//!   Your own ejected pieces become reserves; opponent pieces become
//!   captures.
//! - The first player to 6 captures wins.
//!
//! ## Modules
//!
//! - `core`: piece colors, positions, players, configuration, actions
//! - `board`: tiles and the grid
//! - `rules`: the `FocusGame` engine and its error types
//!
//! ## Example
//!
//! ```
//! use focus_engine::core::PieceColor;
//! use focus_engine::rules::{FocusGame, MoveError, MoveOutcome};
//!
//! let mut game = FocusGame::new(("PlayerA", PieceColor::RED), ("PlayerB", PieceColor::GREEN))?;
//!
//! assert_eq!(game.move_piece("PlayerA", (0, 0), (0, 1), 1)?, MoveOutcome::Moved);
//! assert!(matches!(
//!     game.move_piece("PlayerA", (0, 1), (0, 3), 2),
//!     Err(MoveError::OutOfTurn { .. })
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, ConfigError, GameConfig, PieceColor, Player, PlayerId, PlayerPair, Position};

pub use crate::board::{Board, Tile};

pub use crate::rules::{FocusGame, FocusGameBuilder, MoveError, MoveOutcome, SetupError};
