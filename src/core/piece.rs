//! Piece colors.
//!
//! Every unit stacked on a tile belongs to exactly one player, identified
//! by that player's color. Colors are caller-chosen: the engine only ever
//! compares them for equality.

use serde::{Deserialize, Serialize};

/// Color of a single stacked piece.
///
/// ```
/// use focus_engine::core::PieceColor;
///
/// let red = PieceColor::new('R');
/// assert_eq!(red, PieceColor::RED);
/// assert_eq!(red.to_string(), "R");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceColor(pub char);

impl PieceColor {
    /// Conventional first-player color.
    pub const RED: PieceColor = PieceColor('R');

    /// Conventional second-player color.
    pub const GREEN: PieceColor = PieceColor('G');

    /// Create a color from its display symbol.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }
}

impl From<char> for PieceColor {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
