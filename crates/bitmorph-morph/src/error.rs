//! Error types for bitmorph-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// Core library error (size preconditions, mismatched operands)
    #[error("core error: {0}")]
    Core(#[from] bitmorph_core::Error),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
