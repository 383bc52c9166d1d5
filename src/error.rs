//! Error types
//!
//! Geometry errors are raised by the pure core; config errors only by the
//! settings loader.

use crate::geom::GridKey;

/// Errors raised by grid key parsing, aiming and the bubble grid
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GeometryError {
    #[error("malformed grid key {key:?}: {reason}")]
    Parse { key: String, reason: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("position ({x}, {y}) is not on the half-unit grid lattice")]
    OffLattice { x: f64, y: f64 },
    #[error("no grid slot at {0}")]
    UnknownSlot(GridKey),
    #[error("cannot pick a color from an empty palette")]
    EmptyPalette,
}

impl GeometryError {
    pub(crate) fn parse(key: &str, reason: impl Into<String>) -> Self {
        GeometryError::Parse {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("can't read settings {0}")]
    Io(#[from] std::io::Error),
    #[error("can't parse settings {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid playground: {0}")]
    InvalidPlayground(String),
}
