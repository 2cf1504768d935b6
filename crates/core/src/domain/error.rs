// Domain Error Types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of a material a dimension error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

/// Reasons a material submission is rejected.
///
/// Every variant is raised before any tiling work starts, so a rejected
/// submission never leaves squares behind in the ready queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CutError {
    #[error("{dimension} must be positive (got {value})")]
    InvalidDimension { dimension: Dimension, value: i64 },

    #[error(
        "material must be at least as large as the square size in both dimensions \
         ({width}x{height} < {square_size})"
    )]
    MaterialTooSmall {
        width: i64,
        height: i64,
        square_size: i64,
    },

    #[error("square size must be a positive integer before cutting (got {square_size})")]
    NotConfigured { square_size: i64 },
}

/// Stable classification of [`CutError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CutErrorKind {
    InvalidDimension,
    MaterialTooSmall,
    NotConfigured,
}

impl std::fmt::Display for CutErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CutErrorKind::InvalidDimension => write!(f, "INVALID_DIMENSION"),
            CutErrorKind::MaterialTooSmall => write!(f, "MATERIAL_TOO_SMALL"),
            CutErrorKind::NotConfigured => write!(f, "NOT_CONFIGURED"),
        }
    }
}

impl CutError {
    pub fn kind(&self) -> CutErrorKind {
        match self {
            CutError::InvalidDimension { .. } => CutErrorKind::InvalidDimension,
            CutError::MaterialTooSmall { .. } => CutErrorKind::MaterialTooSmall,
            CutError::NotConfigured { .. } => CutErrorKind::NotConfigured,
        }
    }
}

pub type Result<T> = std::result::Result<T, CutError>;
