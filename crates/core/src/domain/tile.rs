// Tile Domain Model

use serde::{Deserialize, Serialize};

/// One cell of the square grid laid over a material.
///
/// `column`/`row` index the grid, `x`/`y` are the cell origin in material
/// units, and `width`/`height` are the amount of material actually under the
/// cell (smaller than the square size along the right and bottom edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub column: i64,
    pub row: i64,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Tile {
    /// A tile is full when no edge remainder cut into it
    pub fn is_full(&self, square_size: i64) -> bool {
        self.width == square_size && self.height == square_size
    }
}
