//! Error types for bitquad-region

use thiserror::Error;

/// Errors that can occur during region classification and tree building
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error (empty or out-of-bounds rectangle)
    #[error("core error: {0}")]
    Core(#[from] bitquad_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A precomputed scanner was handed a bitmap it was not built for
    #[error("scanner built for another bitmap ({}x{}), got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ScannerMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
