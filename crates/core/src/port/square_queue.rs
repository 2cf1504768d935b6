// Square Queue Port (ready-queue storage)

use crate::domain::Rectangle;
use std::collections::VecDeque;

/// Storage for squares awaiting delivery (FIFO)
#[cfg_attr(test, mockall::automock)]
pub trait SquareQueue {
    /// Append a square at the back
    fn enqueue(&mut self, square: Rectangle);

    /// Remove and return the square at the front
    fn dequeue(&mut self) -> Option<Rectangle>;

    /// Number of queued squares
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserve room for `additional` squares ahead of a batch of enqueues
    fn reserve(&mut self, _additional: usize) {}

    /// Queued squares, front to back
    fn snapshot(&self) -> Vec<Rectangle>;
}

/// In-memory FIFO backed by a `VecDeque` (default)
#[derive(Debug, Default, Clone)]
pub struct InMemorySquareQueue {
    squares: VecDeque<Rectangle>,
}

impl InMemorySquareQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SquareQueue for InMemorySquareQueue {
    fn enqueue(&mut self, square: Rectangle) {
        self.squares.push_back(square);
    }

    fn dequeue(&mut self) -> Option<Rectangle> {
        self.squares.pop_front()
    }

    fn len(&self) -> usize {
        self.squares.len()
    }

    fn reserve(&mut self, additional: usize) {
        self.squares.reserve(additional);
    }

    fn snapshot(&self) -> Vec<Rectangle> {
        self.squares.iter().copied().collect()
    }
}
