// Tiling planner - lays the square grid over a material

use crate::domain::error::{CutError, Dimension, Result};
use crate::domain::Tile;

/// Check a submission in the order the errors are reported.
///
/// 1. width must be positive
/// 2. height must be positive
/// 3. the material must cover one square in both directions
/// 4. the square size must be positive
///
/// A non-positive square size passes check 3 for any positive material, so
/// check 4 is the one that reports it.
pub fn validate_material(width: i64, height: i64, square_size: i64) -> Result<()> {
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
    if height < square_size || width < square_size {
        return Err(CutError::MaterialTooSmall {
            width,
            height,
            square_size,
        });
    }
    if square_size <= 0 {
        return Err(CutError::NotConfigured { square_size });
    }
    Ok(())
}

/// Grid size `(columns, rows)` covering the material, partial tiles included
pub fn grid_extent(width: i64, height: i64, square_size: i64) -> Result<(i64, i64)> {
    validate_material(width, height, square_size)?;
    Ok(extent(width, height, square_size))
}

/// Number of full tiles a valid submission yields
pub fn full_tile_count(width: i64, height: i64, square_size: i64) -> Result<u64> {
    validate_material(width, height, square_size)?;
    let columns = (width / square_size).unsigned_abs();
    let rows = (height / square_size).unsigned_abs();
    Ok(columns.saturating_mul(rows))
}

/// Every tile of the grid, columns outer and rows inner.
///
/// The order is the order squares land in the ready queue.
pub fn plan_tiles(
    width: i64,
    height: i64,
    square_size: i64,
) -> Result<impl Iterator<Item = Tile>> {
    validate_material(width, height, square_size)?;
    let (columns, rows) = extent(width, height, square_size);

    Ok((0..columns).flat_map(move |column| {
        (0..rows).map(move |row| {
            let x = column * square_size;
            let y = row * square_size;
            Tile {
                column,
                row,
                x,
                y,
                width: square_size.min(width - x),
                height: square_size.min(height - y),
            }
        })
    }))
}

// validated operands only
fn extent(width: i64, height: i64, square_size: i64) -> (i64, i64) {
    (div_ceil(width, square_size), div_ceil(height, square_size))
}

fn div_ceil(value: i64, divisor: i64) -> i64 {
    value / divisor + i64::from(value % divisor != 0)
}
