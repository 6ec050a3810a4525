//! The square grid of tiles.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::piece::PieceColor;
use crate::core::position::Position;

/// A `side_length × side_length` grid of tiles, stored row-major.
///
/// The board's shape never changes after construction; only tile piles
/// do. The board does no rule checking: lookups return `None` for
/// off-board positions and the engine decides what that means.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    side_length: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build the starting layout.
    ///
    /// Each tile gets one piece. Reading the grid row-major, the colors
    /// cycle `a, a, b, b, a, a, b, b, ...`.
    ///
    /// ```
    /// use focus_engine::board::Board;
    /// use focus_engine::core::{PieceColor, Position};
    ///
    /// let board = Board::new(6, PieceColor::RED, PieceColor::GREEN);
    /// let top_row: Vec<_> = (0..6)
    ///     .map(|c| board.tile(Position::new(0, c)).unwrap().top().unwrap())
    ///     .collect();
    /// assert_eq!(top_row, [PieceColor::RED, PieceColor::RED, PieceColor::GREEN,
    ///                      PieceColor::GREEN, PieceColor::RED, PieceColor::RED]);
    /// ```
    #[must_use]
    pub fn new(side_length: usize, color_a: PieceColor, color_b: PieceColor) -> Self {
        let pattern = [color_a, color_a, color_b, color_b];

        let positions = (0..side_length)
            .flat_map(|row| (0..side_length).map(move |col| Position::new(row as i32, col as i32)));
        let tiles = positions
            .zip(pattern.into_iter().cycle())
            .map(|(position, color)| Tile::new(position, &[color]))
            .collect();

        Self { side_length, tiles }
    }

    #[must_use]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Check if `position` is on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.in_bounds(self.side_length)
    }

    /// Get the tile at `position`.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        let idx = position.index(self.side_length)?;
        self.tiles.get(idx)
    }

    /// Get the tile at `position` for mutation.
    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        let idx = position.index(self.side_length)?;
        self.tiles.get_mut(idx)
    }

    /// Borrow two distinct tiles mutably at once.
    ///
    /// Returns `None` if either is off-board or both name the same tile.
    pub fn tile_pair_mut(&mut self, a: Position, b: Position) -> Option<(&mut Tile, &mut Tile)> {
        let ia = a.index(self.side_length)?;
        let ib = b.index(self.side_length)?;
        if ia == ib {
            return None;
        }

        if ia < ib {
            let (low, high) = self.tiles.split_at_mut(ib);
            Some((&mut low[ia], &mut high[0]))
        } else {
            let (low, high) = self.tiles.split_at_mut(ia);
            Some((&mut high[0], &mut low[ib]))
        }
    }

    /// Iterate over all tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Snapshot of every pile, as rows of piece lists.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Vec<PieceColor>>> {
        if self.side_length == 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(self.side_length)
            .map(|row| row.iter().map(|t| t.pieces().to_vec()).collect())
            .collect()
    }

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().map(Tile::height).sum()
    }

    /// Pieces on the board per color.
    #[must_use]
    pub fn census(&self) -> FxHashMap<PieceColor, usize> {
        let mut counts = FxHashMap::default();
        for piece in self.tiles.iter().flat_map(|t| t.pieces().iter()) {
            *counts.entry(*piece).or_insert(0) += 1;
        }
        counts
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.side_length == 0 {
            return Ok(());
        }
        for row in self.tiles.chunks(self.side_length) {
            let cells: Vec<String> = row.iter().map(Tile::to_string).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
