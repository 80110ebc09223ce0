//! bitmorph-morph - Table-driven binary morphology
//!
//! This crate provides morphology on [`bitmorph_core::PackedImage`] with the
//! 5-pixel cross as structuring element:
//!
//! - Lookup tables for byte-local dilation and erosion, built once
//! - Dilation, erosion and isolated-pixel filtering, row-parallel
//! - Opening, closing, morphological gradient and top-hat

pub mod binary;
mod error;
pub mod table;

pub use error::{MorphError, MorphResult};
pub use table::{MorphTables, init_tables};

pub use binary::{
    RowBoundary, close, dilate, dilate_with, erode, erode_with, filter_isolated,
    filter_isolated_with, gradient, open, top_hat,
};
