// Cut Report

use serde::{Deserialize, Serialize};

/// Outcome of one accepted material submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutReport {
    /// Grid columns laid over the material (`ceil(width / square_size)`)
    pub columns: i64,
    /// Grid rows laid over the material (`ceil(height / square_size)`)
    pub rows: i64,
    /// Full squares appended to the ready queue
    pub squares_added: usize,
    /// Edge tiles thrown away because a remainder cut into them
    pub discarded_tiles: usize,
}
