// Draining cursor over the ready queue

use crate::domain::Rectangle;
use crate::port::SquareQueue;
use std::iter::FusedIterator;

/// Lazily drains squares from the front of a ready queue.
///
/// Each `next()` removes exactly one square. Dropping the cursor early
/// leaves the remaining squares queued.
pub struct Squares<'a, Q: SquareQueue> {
    queue: &'a mut Q,
}

impl<'a, Q: SquareQueue> Squares<'a, Q> {
    pub(crate) fn new(queue: &'a mut Q) -> Self {
        Self { queue }
    }
}

impl<Q: SquareQueue> Iterator for Squares<'_, Q> {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len();
        (remaining, Some(remaining))
    }
}

impl<Q: SquareQueue> ExactSizeIterator for Squares<'_, Q> {}

// The cursor holds the only borrow of the queue, nothing can refill it.
impl<Q: SquareQueue> FusedIterator for Squares<'_, Q> {}
