// Rectangle Domain Model

use crate::domain::error::{CutError, Dimension, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with positive sides.
///
/// Used both for submitted material and for the squares the cutter produces
/// (where `width == height == square_size`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    width: i64,
    height: i64,
}

impl Rectangle {
    /// Create a rectangle, rejecting non-positive sides
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 {
            return Err(CutError::InvalidDimension {
                dimension: Dimension::Width,
                value: width,
            });
        }
        if height <= 0 {
            return Err(CutError::InvalidDimension {
                dimension: Dimension::Height,
                value: height,
            });
        }
        Ok(Self { width, height })
    }

    /// Create a `side` x `side` square
    pub fn square(side: i64) -> Result<Self> {
        Self::new(side, side)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Area in square units, widened so any two positive sides fit
    pub fn area(&self) -> u128 {
        u128::from(self.width.unsigned_abs()) * u128::from(self.height.unsigned_abs())
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
