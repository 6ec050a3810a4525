//! Action representation and history records.
//!
//! A turn is one of two actions:
//! - `Stack`: move the top `count` pieces of a pile `count` cells in a
//!   straight line
//! - `Reserve`: place one reserve piece on any tile
//!
//! Accepted actions are recorded as `ActionRecord`s in the game history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// A single turn's action.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{Action, Position};
///
/// let single = Action::stack((0, 0), (0, 1), 1);
/// let reserve = Action::reserve((3, 3));
///
/// assert_eq!(single.to_string(), "move 1 from (0, 0) to (0, 1)");
/// assert_eq!(reserve, Action::Reserve { location: Position::new(3, 3) });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move pieces from the top of `start` onto `destination`.
    Stack {
        start: Position,
        destination: Position,
        count: usize,
    },
    /// Place a reserve piece at `location`.
    Reserve { location: Position },
}

impl Action {
    /// Create a stack move.
    pub fn stack(start: impl Into<Position>, destination: impl Into<Position>, count: usize) -> Self {
        Action::Stack {
            start: start.into(),
            destination: destination.into(),
            count,
        }
    }

    /// Create a reserve placement.
    pub fn reserve(location: impl Into<Position>) -> Self {
        Action::Reserve {
            location: location.into(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Stack {
                start,
                destination,
                count,
            } => write!(f, "move {} from {} to {}", count, start, destination),
            Action::Reserve { location } => write!(f, "reserve to {}", location),
        }
    }
}

/// An accepted action with what it caused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Reserves gained through overflow during this action.
    pub reserves_gained: u32,

    /// Captures gained through overflow during this action.
    pub captures_gained: u32,

    /// Whether this action won the game.
    pub winning: bool,
}

impl ActionRecord {
    /// Create a record with no overflow gains.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
            reserves_gained: 0,
            captures_gained: 0,
            winning: false,
        }
    }

    /// Number of overflow resolutions this action triggered.
    #[must_use]
    pub fn overflows(&self) -> u32 {
        self.reserves_gained + self.captures_gained
    }
}
