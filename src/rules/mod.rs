//! The rules engine.
//!
//! `FocusGame` validates and applies moves:
//! - Stack moves: a straight-line move of the top `n` pieces of a pile
//!   exactly `n` cells
//! - Reserve moves: placing a previously ejected own-color piece
//! - Overflow: piles taller than the limit lose bottom pieces to the mover
//! - Win: reaching the capture threshold
//!
//! Rejections are `MoveError` values, never panics.

pub mod engine;
pub mod error;

pub use engine::{FocusGame, FocusGameBuilder, MoveOutcome};
pub use error::{MoveError, SetupError};
