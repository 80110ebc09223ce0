//! bitmorph-region - Connected component labeling
//!
//! This crate provides:
//!
//! - **Component labeling** - run-based labeling of packed binary images
//!   under 4- or 8-connectivity, with a deferred union-find algorithm and
//!   an eager online renumbering algorithm
//! - **Component extraction** - per-component bounding boxes, byte-aligned
//!   masks and pixel counts
//!
//! # Examples
//!
//! ```
//! use bitmorph_core::{Connectivity, PackedImage};
//! use bitmorph_region::{LabelAlgorithm, LabelOptions, find_components, label_components};
//!
//! let image = PackedImage::from_ascii("##......\n##...###\n........").unwrap();
//!
//! let options = LabelOptions::new(Connectivity::Four).with_algorithm(LabelAlgorithm::Eager);
//! let labeling = label_components(&image, &options).unwrap();
//! assert_eq!(labeling.count, 2);
//! assert_eq!(labeling.map.get(6, 1), Some(2));
//!
//! let boxes = find_components(&image, &options).unwrap();
//! assert_eq!(boxes[1].pixel_count, 3);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod relabel;

pub use bitmorph_core::Connectivity;
pub use conncomp::{
    LabelAlgorithm, LabelOptions, Labeling, PassTimings, count_components, find_components,
    label_components,
};
pub use error::{RegionError, RegionResult};
pub use label::{ComponentBox, component_sizes, extract_boxes};
pub use relabel::{DeferredTable, Equivalences, Relabeler};
