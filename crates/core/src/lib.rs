// BeSquare Core - Cutting Logic & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{SquareCutter, Squares};
pub use domain::{CutError, CutReport, CutterConfig, Rectangle};
pub use error::{AppError, Result};
pub use port::SquareFactory;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
