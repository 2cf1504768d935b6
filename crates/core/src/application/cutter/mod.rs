// Square Cutter - Cuts material into full squares and queues them

pub mod constants;
mod squares;
pub mod tiling;

#[cfg(test)]
mod properties_test;

pub use squares::Squares;

use crate::domain::error::Result;
use crate::domain::{CutReport, CutterConfig, Rectangle};
use crate::port::{InMemorySquareQueue, SquareFactory, SquareQueue};
use constants::MAX_QUEUE_PREALLOCATION;
use tracing::{debug, warn};

/// Square cutter
///
/// Owns the configured square size and the ready queue. Each accepted
/// submission appends its full squares to the back of the queue; leftover
/// edge material is discarded.
///
/// # Example
/// ```
/// use besquare_core::application::SquareCutter;
///
/// let mut cutter = SquareCutter::new(10);
/// let report = cutter.submit_material(25, 15).unwrap();
/// assert_eq!(report.squares_added, 2);
/// assert_eq!(cutter.get_squares().count(), 2);
/// assert_eq!(cutter.squares_ready_for_delivery(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SquareCutter<Q: SquareQueue = InMemorySquareQueue> {
    square_size: i64,
    ready: Q,
}

impl SquareCutter {
    /// Create a cutter with an empty in-memory queue
    pub fn new(square_size: i64) -> Self {
        Self::with_queue(square_size, InMemorySquareQueue::new())
    }

    pub fn from_config(config: &CutterConfig) -> Self {
        Self::new(config.square_size)
    }
}

impl Default for SquareCutter {
    fn default() -> Self {
        Self::from_config(&CutterConfig::default())
    }
}

impl<Q: SquareQueue> SquareCutter<Q> {
    /// Create a cutter on top of a caller-supplied queue
    pub fn with_queue(square_size: i64, ready: Q) -> Self {
        Self { square_size, ready }
    }

    pub fn square_size(&self) -> i64 {
        self.square_size
    }

    /// Change the square size for later submissions.
    ///
    /// Not validated here. Already queued squares keep their size.
    pub fn set_square_size(&mut self, square_size: i64) {
        self.square_size = square_size;
    }

    /// Cut a `width` x `height` material.
    ///
    /// The grid is `ceil(width / size)` columns by `ceil(height / size)` rows,
    /// walked column by column. Full tiles are queued in that order, partial
    /// edge tiles are dropped. Validation runs to completion before anything
    /// is queued, so an error leaves the queue untouched.
    ///
    /// # Errors
    /// - [`CutError::InvalidDimension`](crate::domain::CutError::InvalidDimension)
    ///   if width or height is not positive
    /// - [`CutError::MaterialTooSmall`](crate::domain::CutError::MaterialTooSmall)
    ///   if either side is shorter than the square size
    /// - [`CutError::NotConfigured`](crate::domain::CutError::NotConfigured)
    ///   if the square size is not positive
    pub fn submit_material(&mut self, width: i64, height: i64) -> Result<CutReport> {
        let square_size = self.square_size;

        let tiles = tiling::plan_tiles(width, height, square_size).map_err(|err| {
            warn!(
                width = %width,
                height = %height,
                square_size = %square_size,
                kind = %err.kind(),
                error = %err,
                "Material rejected"
            );
            err
        })?;
        let square = Rectangle::square(square_size)?;
        let (columns, rows) = tiling::grid_extent(width, height, square_size)?;

        let expected = tiling::full_tile_count(width, height, square_size)?;
        let reservation = usize::try_from(expected)
            .unwrap_or(usize::MAX)
            .min(MAX_QUEUE_PREALLOCATION);
        self.ready.reserve(reservation);

        let mut squares_added = 0;
        let mut discarded_tiles = 0;
        for tile in tiles {
            if tile.is_full(square_size) {
                self.ready.enqueue(square);
                squares_added += 1;
            } else {
                discarded_tiles += 1;
            }
        }

        debug!(
            width = %width,
            height = %height,
            square_size = %square_size,
            columns = %columns,
            rows = %rows,
            squares_added = %squares_added,
            discarded_tiles = %discarded_tiles,
            queued = %self.ready.len(),
            "Material cut"
        );

        Ok(CutReport {
            columns,
            rows,
            squares_added,
            discarded_tiles,
        })
    }

    /// Number of queued, undelivered squares
    pub fn squares_ready_for_delivery(&self) -> usize {
        self.ready.len()
    }

    /// Lazily hand out queued squares, oldest first.
    ///
    /// Each square leaves the queue when the cursor yields it. Stop early and
    /// the rest stay queued for the next call.
    pub fn get_squares(&mut self) -> Squares<'_, Q> {
        Squares::new(&mut self.ready)
    }

    /// Remove every queued square at once, oldest first
    pub fn drain_squares(&mut self) -> Vec<Rectangle> {
        let squares: Vec<Rectangle> = self.get_squares().collect();
        debug!(delivered = %squares.len(), "Ready queue drained");
        squares
    }

    /// Queued squares, oldest first, without removing them
    pub fn peek_squares(&self) -> Vec<Rectangle> {
        self.ready.snapshot()
    }
}

impl<Q: SquareQueue> SquareFactory for SquareCutter<Q> {
    type Squares<'a>
        = Squares<'a, Q>
    where
        Self: 'a;

    fn submit_material(&mut self, width: i64, height: i64) -> Result<CutReport> {
        SquareCutter::submit_material(self, width, height)
    }

    fn squares_ready_for_delivery(&self) -> usize {
        SquareCutter::squares_ready_for_delivery(self)
    }

    fn get_squares(&mut self) -> Self::Squares<'_> {
        SquareCutter::get_squares(self)
    }
}
