// Domain Layer - Pure cutting entities and rules

pub mod config;
pub mod error;
pub mod rectangle;
pub mod report;
pub mod tile;

// Re-exports
pub use config::CutterConfig;
pub use error::{CutError, CutErrorKind, Dimension};
pub use rectangle::Rectangle;
pub use report::CutReport;
pub use tile::Tile;
