//! Row-parallel execution helpers
//!
//! Every row-independent phase (packing, morphology, filtering, label
//! seeding and resolution) funnels through [`for_each_row`], so the choice
//! between the rayon global pool and the current thread is made in one
//! place.

use rayon::prelude::*;

/// Controls how row-independent phases are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Split rows across the global rayon thread pool.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging and timing comparisons.
    Serial,
}

impl ExecutionStrategy {
    /// Whether this strategy uses the rayon pool.
    #[inline]
    pub fn is_parallel(self) -> bool {
        self == ExecutionStrategy::Parallel
    }
}

/// Apply `f(y, row)` to every `row_len`-sized row of `dst`.
///
/// Each call owns exactly one destination row; anything read by `f` must
/// be immutable for the duration of the call.
///
/// # Panics
///
/// Panics if `row_len` is 0.
pub fn for_each_row<T, F>(dst: &mut [T], row_len: usize, strategy: ExecutionStrategy, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    match strategy {
        ExecutionStrategy::Parallel => dst
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row)),
        ExecutionStrategy::Serial => dst
            .chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row)),
    }
}

/// Map every `row_len`-sized row of `src` to a value, preserving row order.
///
/// # Panics
///
/// Panics if `row_len` is 0.
pub fn map_rows<T, R, F>(src: &[T], row_len: usize, strategy: ExecutionStrategy, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Send + Sync,
{
    match strategy {
        ExecutionStrategy::Parallel => src.par_chunks_exact(row_len).map(f).collect(),
        ExecutionStrategy::Serial => src.chunks_exact(row_len).map(f).collect(),
    }
}
