//! Unified error types for oled_engine

use thiserror::Error;

use crate::{Position, Size};

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Grid Errors ===
    #[error("Pixel {pos} out of bounds for grid {size}")]
    OutOfBounds { pos: Position, size: Size },

    // === Import Errors ===
    #[error("No byte tokens (0xNN or 0b########) found in import text")]
    NoImportTokens,

    // === Stamp Errors ===
    #[error("No active pixels found, nothing to stamp")]
    EmptyPattern,

    // === Dimension Contract Errors ===
    #[error("Incompatible dimensions: source {source}, target {target}")]
    IncompatibleDimensions { source: Size, target: Size },

    #[error("Grid '{id}' has no upscale target")]
    NotScalable { id: String },

    #[error("Unknown grid id: {id}")]
    UnknownGridId { id: String },

    // === Catalog Errors ===
    #[error("Invalid grid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create a catalog validation error
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog { message: msg.into() }
    }
}
