//! A single board cell holding an ordered pile of pieces.
//!
//! Piles are ordered bottom to top: index 0 is the oldest piece and the
//! last index is the top, which decides who may move the pile. Overflow
//! removes pieces from the bottom, so the order is load-bearing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::piece::PieceColor;
use crate::core::position::Position;

/// Inline pile storage. Piles rarely exceed the stack limit by more than one.
pub type Pile = SmallVec<[PieceColor; 8]>;

/// A board cell and its pile.
///
/// ## Usage
///
/// ```
/// use focus_engine::board::Tile;
/// use focus_engine::core::{PieceColor, Position};
///
/// let mut tile = Tile::new(Position::new(0, 0), &[PieceColor::RED]);
/// tile.push([PieceColor::GREEN, PieceColor::GREEN]);
///
/// assert_eq!(tile.height(), 3);
/// assert_eq!(tile.top(), Some(PieceColor::GREEN));
/// assert_eq!(tile.pop_bottom(), Some(PieceColor::RED));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    position: Position,
    pieces: Pile,
}

impl Tile {
    /// Create a tile holding `pieces`, bottom first.
    #[must_use]
    pub fn new(position: Position, pieces: &[PieceColor]) -> Self {
        Self {
            position,
            pieces: SmallVec::from_slice(pieces),
        }
    }

    /// Where this tile sits on the board.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The pile, bottom first.
    #[must_use]
    pub fn pieces(&self) -> &[PieceColor] {
        &self.pieces
    }

    /// Number of pieces in the pile.
    #[must_use]
    pub fn height(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Color of the topmost piece, or `None` for an empty tile.
    #[must_use]
    pub fn top(&self) -> Option<PieceColor> {
        self.pieces.last().copied()
    }

    /// Append pieces to the top, in the given order.
    pub fn push(&mut self, pieces: impl IntoIterator<Item = PieceColor>) {
        self.pieces.extend(pieces);
    }

    /// Remove and return the top piece.
    pub fn pop_top(&mut self) -> Option<PieceColor> {
        self.pieces.pop()
    }

    /// Remove and return the bottom (oldest) piece.
    pub fn pop_bottom(&mut self) -> Option<PieceColor> {
        if self.pieces.is_empty() {
            return None;
        }
        Some(self.pieces.remove(0))
    }

    /// Remove the top `count` pieces and return them bottom first.
    ///
    /// Takes the whole pile if `count` exceeds the height.
    pub fn take_top(&mut self, count: usize) -> Pile {
        let split = self.pieces.len().saturating_sub(count);
        self.pieces.drain(split..).collect()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", piece)?;
        }
        write!(f, "]")
    }
}
