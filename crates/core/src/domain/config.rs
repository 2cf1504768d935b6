// Cutter Configuration

use serde::{Deserialize, Serialize};

/// Square cutter configuration.
///
/// Not validated on construction: `square_size` is checked on every
/// submission, and the zero default means "not configured yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutterConfig {
    #[serde(default)]
    pub square_size: i64,
}

impl CutterConfig {
    pub fn new(square_size: i64) -> Self {
        Self { square_size }
    }
}
