//! Connected component labeling
//!
//! Labeling runs in three passes over a [`LabelMap`] seeded from the packed
//! image:
//!
//! 1. **Seed** (row-parallel): every maximal horizontal run of set pixels
//!    gets its own provisional label, increasing in raster order.
//! 2. **Merge** (sequential): each run is compared with the runs in the
//!    row above that touch it and the equivalences are recorded, either in
//!    a union-find table compacted afterwards ([`LabelAlgorithm::Deferred`])
//!    or in a table kept dense throughout ([`LabelAlgorithm::Eager`]).
//! 3. **Resolve** (row-parallel): each provisional label is replaced by
//!    its final label.
//!
//! Final labels are `1..=N`, numbered in the raster order of each
//! component's first run. Both algorithms produce identical maps.

use crate::error::{RegionError, RegionResult};
use crate::label::{ComponentBox, extract_boxes};
use crate::relabel::{DeferredTable, Equivalences, Relabeler};
use bitmorph_core::{
    Connectivity, ExecutionStrategy, LabelMap, PackedImage, for_each_row, map_rows,
    to_label_seed,
};
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// How equivalences between runs are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelAlgorithm {
    /// Union-find during merging, one compaction at the end
    #[default]
    Deferred,
    /// Dense renumbering on every merge
    Eager,
}

/// Options for [`label_components`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelOptions {
    /// Pixel adjacency
    pub connectivity: Connectivity,
    /// Equivalence resolution strategy
    pub algorithm: LabelAlgorithm,
    /// Remove pixels without a set 4-neighbour before labeling
    pub filter_isolated: bool,
    /// Execution of the row-parallel passes
    pub strategy: ExecutionStrategy,
}

impl LabelOptions {
    /// Create default options with the specified connectivity
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            ..Self::default()
        }
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the labeling algorithm
    pub fn with_algorithm(mut self, algorithm: LabelAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Enable or disable isolated-pixel filtering
    pub fn with_filter_isolated(mut self, filter_isolated: bool) -> Self {
        self.filter_isolated = filter_isolated;
        self
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Wall time spent in each labeling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassTimings {
    /// Run detection and provisional labeling
    pub seed: Duration,
    /// Equivalence recording and compaction
    pub merge: Duration,
    /// Rewriting provisional labels
    pub resolve: Duration,
}

impl PassTimings {
    /// Sum of all passes
    pub fn total(&self) -> Duration {
        self.seed + self.merge + self.resolve
    }
}

/// Result of [`label_components`]
#[derive(Debug, Clone)]
pub struct Labeling {
    /// Final label map
    pub map: LabelMap,
    /// Number of components `N`; labels are `1..=N`
    pub count: u32,
    /// Per-pass wall time
    pub timings: PassTimings,
}

/// Label the connected components of a binary image.
///
/// # Errors
///
/// Returns an error if the image is smaller than 2x2, or
/// [`RegionError::ImageTooLarge`] if the image has more runs than fit in
/// a `u32` label.
///
/// # Examples
///
/// ```
/// use bitmorph_core::{Connectivity, PackedImage};
/// use bitmorph_region::{LabelOptions, label_components};
///
/// let image = PackedImage::from_ascii("
///     #...
///     .#..
///     ...#
///     ..##
/// ").unwrap();
/// let four = label_components(&image, &LabelOptions::new(Connectivity::Four)).unwrap();
/// assert_eq!(four.count, 3);
/// let eight = label_components(&image, &LabelOptions::new(Connectivity::Eight)).unwrap();
/// assert_eq!(eight.count, 2);
/// ```
pub fn label_components(image: &PackedImage, options: &LabelOptions) -> RegionResult<Labeling> {
    image.check_min_size()?;
    let strategy = options.strategy;

    let source: Cow<'_, PackedImage> = if options.filter_isolated {
        Cow::Owned(bitmorph_morph::filter_isolated_with(image, strategy)?)
    } else {
        Cow::Borrowed(image)
    };

    let start = Instant::now();
    let mut map = to_label_seed(&source);
    let runs = seed_runs(&mut map, strategy)?;
    let seed = start.elapsed();

    let start = Instant::now();
    let (table, count) = match options.algorithm {
        LabelAlgorithm::Deferred => {
            merge_runs(&map, options.connectivity, DeferredTable::new(runs, strategy))
        }
        LabelAlgorithm::Eager => {
            merge_runs(&map, options.connectivity, Relabeler::new(runs, strategy))
        }
    };
    let merge = start.elapsed();

    let start = Instant::now();
    let width = map.width() as usize;
    for_each_row(map.labels_mut(), width, strategy, |_, row| {
        for label in row.iter_mut() {
            *label = table[*label as usize];
        }
    });
    let resolve = start.elapsed();

    let timings = PassTimings {
        seed,
        merge,
        resolve,
    };
    log::debug!(
        "{:?} labeling of {}x{}: {} runs, {} components, seed {:?}, merge {:?}, resolve {:?}",
        options.algorithm,
        image.width(),
        image.height(),
        runs,
        count,
        timings.seed,
        timings.merge,
        timings.resolve
    );

    Ok(Labeling {
        map,
        count,
        timings,
    })
}

/// Count the connected components with default options.
pub fn count_components(image: &PackedImage, connectivity: Connectivity) -> RegionResult<u32> {
    Ok(label_components(image, &LabelOptions::new(connectivity))?.count)
}

/// Label the image and extract one [`ComponentBox`] per component.
pub fn find_components(
    image: &PackedImage,
    options: &LabelOptions,
) -> RegionResult<Vec<ComponentBox>> {
    let labeling = label_components(image, options)?;
    extract_boxes(&labeling.map, labeling.count)
}

/// Replace the `0/1` seed with one provisional label per run.
///
/// Returns the number of runs.
fn seed_runs(map: &mut LabelMap, strategy: ExecutionStrategy) -> RegionResult<u32> {
    let width = map.width() as usize;
    let per_row = map_rows(map.labels(), width, strategy, |row| {
        row.iter()
            .enumerate()
            .filter(|&(x, &v)| v != 0 && (x == 0 || row[x - 1] == 0))
            .count() as u64
    });

    // exclusive prefix sum: first label of each row is offset + 1
    let mut offsets = Vec::with_capacity(per_row.len());
    let mut total = 0u64;
    for n in per_row {
        offsets.push(total);
        total += n;
    }
    let runs = u32::try_from(total)
        .ok()
        .filter(|&r| r < u32::MAX)
        .ok_or(RegionError::ImageTooLarge {
            width: map.width(),
            height: map.height(),
        })?;

    for_each_row(map.labels_mut(), width, strategy, |y, row| {
        let mut next = offsets[y] as u32;
        let mut inside = false;
        for label in row.iter_mut() {
            if *label == 0 {
                inside = false;
                continue;
            }
            if !inside {
                next += 1;
                inside = true;
            }
            *label = next;
        }
    });
    Ok(runs)
}

/// Walk the runs top to bottom and record every touch with the row above.
fn merge_runs<E: Equivalences>(
    map: &LabelMap,
    connectivity: Connectivity,
    mut eq: E,
) -> (Vec<u32>, u32) {
    let width = map.width() as usize;
    for y in 0..map.height() as usize {
        let row = map.row(y);
        let above = if y == 0 { None } else { Some(map.row(y - 1)) };
        let mut x = 0;
        while x < width {
            let label = row[x];
            if label == 0 {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && row[x] == label {
                x += 1;
            }

            let mut joined = false;
            if let Some(above) = above {
                let (lo, hi) = match connectivity {
                    Connectivity::Four => (start, x),
                    Connectivity::Eight => (start.saturating_sub(1), (x + 1).min(width)),
                };
                let mut last = 0;
                for &up in &above[lo..hi] {
                    if up != 0 && up != last {
                        eq.join(label, up);
                        joined = true;
                    }
                    last = up;
                }
            }
            if !joined {
                eq.open(label);
            }
        }
    }
    eq.into_resolved()
}
