//! bitmorph-test - Regression test framework for bitmorph
//!
//! This crate provides:
//!
//! - [`RegParams`] - indexed checks that record failures instead of
//!   panicking, reported once by [`RegParams::cleanup`]
//! - [`fixtures`] - ASCII pictures, seeded random images and patterns
//! - [`reference`] - pixel-by-pixel morphology and flood-fill labeling
//!
//! # Usage
//!
//! ```ignore
//! use bitmorph_test::RegParams;
//!
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(4.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
pub mod fixtures;
mod params;
pub mod reference;

pub use error::{TestError, TestResult};
pub use fixtures::{ascii, checkerboard, full_image, random_image};
pub use params::{RegParams, RegTestMode};
