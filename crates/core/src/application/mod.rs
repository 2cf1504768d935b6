// Application Layer - Use Cases

pub mod cutter;

// Re-exports
pub use cutter::{SquareCutter, Squares};
