//! Board storage: tiles holding ordered piles, and the grid that owns them.
//!
//! Nothing here validates moves. `Tile` is a bottom-to-top stack and
//! `Board` maps positions to tiles; the rules live in `crate::rules`.

pub mod tile;
pub mod grid;

pub use tile::{Pile, Tile};
pub use grid::Board;
