// Port Layer - Interfaces at the edges of the cutter

pub mod square_factory;
pub mod square_queue;

// Re-exports
pub use square_factory::SquareFactory;
pub use square_queue::{InMemorySquareQueue, SquareQueue};

#[cfg(test)]
pub use square_queue::MockSquareQueue;
