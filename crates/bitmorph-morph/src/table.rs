//! Byte-local lookup tables for the 3-pixel horizontal line
//!
//! `dilate[v]` sets every bit of `v` plus its left and right neighbours
//! inside the byte. `erode[v]` keeps a bit only if both in-byte neighbours
//! are set; the two edge bits treat their missing outer neighbour as set,
//! leaving the cross-byte decision to the row kernels.

use std::sync::OnceLock;

/// The pair of 256-entry tables used by the row kernels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphTables {
    /// Byte-local dilation
    pub dilate: [u8; 256],
    /// Byte-local erosion
    pub erode: [u8; 256],
}

static TABLES: OnceLock<MorphTables> = OnceLock::new();

impl MorphTables {
    /// Compute both tables.
    ///
    /// Shifts are done in `u32` and truncated, so bits shifted past
    /// either end of the byte are dropped.
    pub fn build() -> Self {
        let mut dilate = [0u8; 256];
        let mut erode = [0u8; 256];
        for i in 0..256u32 {
            dilate[i as usize] = (i | (i << 1) | (i >> 1)) as u8;
            erode[i as usize] = (i & ((i << 1) | 0x01) & ((i >> 1) | 0x80)) as u8;
        }
        MorphTables { dilate, erode }
    }

    /// Shared tables, built on first use.
    pub fn get() -> &'static MorphTables {
        TABLES.get_or_init(|| {
            log::debug!("building binary morphology lookup tables");
            Self::build()
        })
    }
}

/// Build the shared tables now rather than on the first operator call.
///
/// Idempotent; later calls return the same tables.
pub fn init_tables() -> &'static MorphTables {
    MorphTables::get()
}
