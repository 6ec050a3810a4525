//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the board.
///
/// Components are signed so that off-board input such as `(0, -1)` can be
/// expressed by callers and rejected by the engine rather than by the type
/// system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if both components fall in `[0, side_length)`.
    #[must_use]
    pub fn in_bounds(self, side_length: usize) -> bool {
        let side = side_length as i64;
        (0..side).contains(&i64::from(self.row)) && (0..side).contains(&i64::from(self.col))
    }

    /// Row-major index into a `side_length` wide grid, if in bounds.
    #[must_use]
    pub fn index(self, side_length: usize) -> Option<usize> {
        if self.in_bounds(side_length) {
            Some(self.row as usize * side_length + self.col as usize)
        } else {
            None
        }
    }

    /// Absolute row and column differences.
    #[must_use]
    pub fn deltas(self, other: Position) -> (u32, u32) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Step `distance` cells in direction `(dr, dc)`.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32, distance: i32) -> Self {
        Self::new(self.row + dr * distance, self.col + dc * distance)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Position::new(0, 0).in_bounds(6));
        assert!(Position::new(5, 5).in_bounds(6));
        assert!(!Position::new(6, 0).in_bounds(6));
        assert!(!Position::new(0, -1).in_bounds(6));
        assert!(!Position::new(-1, 3).in_bounds(6));
    }

    #[test]
    fn test_index() {
        assert_eq!(Position::new(0, 0).index(6), Some(0));
        assert_eq!(Position::new(1, 2).index(6), Some(8));
        assert_eq!(Position::new(5, 5).index(6), Some(35));
        assert_eq!(Position::new(1, 6).index(6), None);
    }

    #[test]
    fn test_deltas() {
        let a = Position::new(4, 1);
        let b = Position::new(1, 3);
        assert_eq!(a.deltas(b), (3, 2));
        assert_eq!(b.deltas(a), (3, 2));
    }

    #[test]
    fn test_offset_and_tuple() {
        let p: Position = (2, 2).into();
        assert_eq!(p.offset(-1, 0, 2), Position::new(0, 2));
        assert_eq!(p.offset(0, 1, 3), Position::new(2, 5));
        assert_eq!(p.to_string(), "(2, 2)");
    }
}
