//! Error types for istaka.

use thiserror::Error;

/// Istaka error type
#[derive(Error, Debug)]
pub enum IstakaError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bond pattern name that matches no generator
    #[error("Unknown bond pattern '{name}', valid patterns: {valid}")]
    UnknownPattern {
        /// The requested key
        name: String,
        /// Comma-separated list of valid keys
        valid: &'static str,
    },

    /// The wall refused a generated brick
    #[error("Brick {id} at ({x:.1}, {y:.1}) rejected by wall: {reason}")]
    Placement {
        /// Id of the rejected brick
        id: usize,
        /// Bottom-left X of the rejected brick
        x: f64,
        /// Bottom-left Y of the rejected brick
        y: f64,
        /// Which placement check failed
        reason: PlacementReason,
    },

    /// Filesystem failure while reading config or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a brick placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementReason {
    /// Brick box extends beyond the wall bounds
    OutOfBounds,
    /// Brick box overlaps an already-inserted brick
    Overlap,
}

impl std::fmt::Display for PlacementReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementReason::OutOfBounds => write!(f, "outside wall bounds"),
            PlacementReason::Overlap => write!(f, "overlaps an existing brick"),
        }
    }
}

impl From<toml::de::Error> for IstakaError {
    fn from(e: toml::de::Error) -> Self {
        IstakaError::Config(e.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, IstakaError>;
