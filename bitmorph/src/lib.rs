//! bitmorph - Binary morphology and connected component labeling
//!
//! Facade over the workspace crates:
//!
//! - [`bitmorph_core`] (re-exported at the root) - [`PackedImage`],
//!   [`LabelMap`], packing and raster operations
//! - [`morph`] - dilation, erosion, isolated-pixel filtering and their
//!   compositions
//! - [`region`] - 4-/8-connected component labeling and extraction
//!
//! # Examples
//!
//! ```
//! use bitmorph::{Connectivity, PackedImage, morph, region};
//!
//! let image = PackedImage::from_ascii("
//!     ........
//!     .###....
//!     .###..#.
//!     .###....
//!     ........
//! ").unwrap();
//!
//! // opening removes the lone pixel, keeps the block's cross-shaped core
//! let opened = morph::open(&image).unwrap();
//! let count = region::count_components(&opened, Connectivity::Four).unwrap();
//! assert_eq!(count, 1);
//!
//! // the top-hat holds what opening removed
//! let removed = morph::top_hat(&image).unwrap();
//! assert_eq!(region::count_components(&removed, Connectivity::Eight).unwrap(), 5);
//! ```

pub use bitmorph_core::*;
pub use bitmorph_morph as morph;
pub use bitmorph_region as region;
