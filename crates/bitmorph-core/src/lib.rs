//! Bitmorph Core - Packed binary images and label maps
//!
//! This crate provides the data structures shared by the morphology and
//! connected-component crates:
//!
//! - [`PackedImage`] - bit-packed binary image, 8 pixels per byte, MSB first
//! - [`LabelMap`] - one `u32` component label per pixel
//! - [`pack`] / [`unpack`] / [`to_label_seed`] - conversions between the two
//!   and plain boolean grids
//! - [`ExecutionStrategy`] - row-parallel or serial execution of
//!   row-independent phases

pub mod error;
pub mod label;
pub mod packed;
pub mod parallel;

pub use error::{Error, Result};
pub use label::{Connectivity, LabelMap};
pub use packed::{
    MIN_DIMENSION, PackedImage, RopOp, check_min_dimensions, pack, to_label_seed, unpack,
};
pub use parallel::{ExecutionStrategy, for_each_row, map_rows};
