//! Error types for bitmorph-region

use thiserror::Error;

/// Errors that can occur during component labeling and extraction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bitmorph_core::Error),

    /// Morphology error from the isolation prefilter
    #[error("morphology error: {0}")]
    Morph(#[from] bitmorph_morph::MorphError),

    /// More runs than provisional labels
    #[error("image too large to label: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    /// Label map holds a label above the stated component count
    #[error("label {label} out of range for {count} components")]
    LabelOutOfRange { label: u32, count: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
