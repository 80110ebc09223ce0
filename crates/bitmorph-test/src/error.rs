//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture parameters out of range
    #[error("invalid fixture parameter: {0}")]
    InvalidFixture(String),

    /// Building a fixture image failed
    #[error("failed to build fixture: {0}")]
    Core(#[from] bitmorph_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
