// Square Factory Port (capability surface)

use crate::domain::{CutReport, Rectangle};
use crate::domain::error::Result;

/// Anything that turns submitted material into deliverable squares.
///
/// Three operations: submit, count, retrieve.
pub trait SquareFactory {
    /// Draining cursor handed out by [`SquareFactory::get_squares`]
    type Squares<'a>: Iterator<Item = Rectangle>
    where
        Self: 'a;

    /// Cut a `width` x `height` material into full squares and queue them
    fn submit_material(&mut self, width: i64, height: i64) -> Result<CutReport>;

    /// Number of queued, undelivered squares
    fn squares_ready_for_delivery(&self) -> usize;

    /// Hand out queued squares one at a time, removing each as it is yielded
    fn get_squares(&mut self) -> Self::Squares<'_>;
}
