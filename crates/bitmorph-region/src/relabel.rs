//! Equivalence tracking for the merge pass
//!
//! Provisional labels are numbered `1..=runs`, one per horizontal run, in
//! raster order. The merge pass reports for every run either that it
//! starts a new component ([`Equivalences::open`]) or which labels above
//! it touches ([`Equivalences::join`]). Two strategies turn this into a
//! table mapping each provisional label to its final dense label:
//!
//! - [`DeferredTable`] keeps a union-find parent array and compacts once
//!   at the end.
//! - [`Relabeler`] keeps the table dense throughout: when two groups meet,
//!   the higher one folds into the lower and every larger index shifts
//!   down by one.
//!
//! Both number components in the order of their first run, so their
//! resolved tables are identical.

use bitmorph_core::ExecutionStrategy;
use rayon::prelude::*;

/// Eager renumbering scans at least this many slots before it is split
/// across the rayon pool.
const PARALLEL_SCAN_THRESHOLD: usize = 1 << 14;

/// Merge-pass bookkeeping shared by both labeling algorithms.
pub trait Equivalences {
    /// `label` starts a new component.
    fn open(&mut self, label: u32);

    /// `label` touches the already-processed label `other`.
    fn join(&mut self, label: u32, other: u32);

    /// Finish merging. Returns the table indexed by provisional label
    /// (entry 0 maps background to 0) and the number of components.
    fn into_resolved(self) -> (Vec<u32>, u32);
}

/// Union-find over provisional labels, compacted after merging.
///
/// The root of every set is its smallest label.
#[derive(Debug, Clone)]
pub struct DeferredTable {
    parent: Vec<u32>,
    strategy: ExecutionStrategy,
}

impl DeferredTable {
    /// Table for `runs` provisional labels, each its own set.
    pub fn new(runs: u32, strategy: ExecutionStrategy) -> Self {
        DeferredTable {
            parent: (0..=runs).collect(),
            strategy,
        }
    }

    /// Find with path halving.
    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }
}

/// Read-only root lookup, used from the parallel resolution.
fn find_root(parent: &[u32], mut label: u32) -> u32 {
    let mut steps = 0usize;
    while parent[label as usize] != label {
        label = parent[label as usize];
        steps += 1;
        debug_assert!(steps < parent.len(), "cycle in equivalence table");
    }
    label
}

impl Equivalences for DeferredTable {
    fn open(&mut self, label: u32) {
        debug_assert_eq!(self.parent[label as usize], label);
    }

    fn join(&mut self, label: u32, other: u32) {
        let a = self.find(label);
        let b = self.find(other);
        if a != b {
            let (keep, fold) = if a < b { (a, b) } else { (b, a) };
            log::trace!("deferred merge: {fold} -> {keep}");
            self.parent[fold as usize] = keep;
        }
    }

    fn into_resolved(self) -> (Vec<u32>, u32) {
        let parent = &self.parent;
        let roots: Vec<u32> = if self.strategy.is_parallel() {
            (0..parent.len() as u32)
                .into_par_iter()
                .map(|label| find_root(parent, label))
                .collect()
        } else {
            (0..parent.len() as u32)
                .map(|label| find_root(parent, label))
                .collect()
        };

        // roots are the smallest label of their set, so every root is
        // numbered before any label that refers to it
        let mut table = vec![0u32; roots.len()];
        let mut count = 0;
        for label in 1..roots.len() {
            let root = roots[label] as usize;
            if root == label {
                count += 1;
                table[label] = count;
            } else {
                debug_assert!(root < label);
                table[label] = table[root];
            }
        }
        (table, count)
    }
}

/// Online renumbering: provisional label to dense component index.
///
/// `table[l]` is 0 until label `l` has been opened or joined. Groups stay
/// numbered `1..=count` in the order of their first run.
#[derive(Debug, Clone)]
pub struct Relabeler {
    table: Vec<u32>,
    count: u32,
    assigned: usize,
    strategy: ExecutionStrategy,
}

impl Relabeler {
    /// Relabeler for `runs` provisional labels.
    pub fn new(runs: u32, strategy: ExecutionStrategy) -> Self {
        Relabeler {
            table: vec![0; runs as usize + 1],
            count: 0,
            assigned: 0,
            strategy,
        }
    }

    /// Number of distinct groups so far.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Current dense index of `label` (0 if not yet seen).
    pub fn resolve(&self, label: u32) -> u32 {
        self.table[label as usize]
    }

    /// Fold group `b` into group `a` (or the reverse), keeping the lower
    /// index and closing the gap left by the higher one.
    fn merge(&mut self, a: u32, b: u32) {
        let (keep, fold) = if a < b { (a, b) } else { (b, a) };
        log::trace!("eager merge: {fold} -> {keep}");
        let shift = |slot: &mut u32| {
            if *slot == fold {
                *slot = keep;
            } else if *slot > fold {
                *slot -= 1;
            }
        };
        let slots = &mut self.table[1..=self.assigned];
        if self.strategy.is_parallel() && slots.len() >= PARALLEL_SCAN_THRESHOLD {
            slots.par_iter_mut().for_each(shift);
        } else {
            slots.iter_mut().for_each(shift);
        }
        self.count -= 1;
    }
}

impl Equivalences for Relabeler {
    fn open(&mut self, label: u32) {
        debug_assert_eq!(self.table[label as usize], 0);
        self.count += 1;
        self.table[label as usize] = self.count;
        self.assigned = self.assigned.max(label as usize);
    }

    fn join(&mut self, label: u32, other: u32) {
        let target = self.table[other as usize];
        debug_assert!(target != 0, "joined label {other} was never seen");
        let current = self.table[label as usize];
        if current == 0 {
            self.table[label as usize] = target;
            self.assigned = self.assigned.max(label as usize);
        } else if current != target {
            self.merge(current, target);
        }
    }

    fn into_resolved(self) -> (Vec<u32>, u32) {
        (self.table, self.count)
    }
}
