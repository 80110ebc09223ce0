//! LabelMap - one label per pixel
//!
//! `0` is background, any positive value identifies a component. Maps
//! returned by the labelers use the dense range `1..=N`.

use crate::error::{Error, Result};
use std::fmt::Write;

/// Pixel adjacency used by the labelers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Horizontal and vertical neighbours
    #[default]
    Four,
    /// Horizontal, vertical and diagonal neighbours
    Eight,
}

/// Row-major map of `width * height` component labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    /// Create an all-background map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self::from_parts(
            width,
            height,
            vec![0; width as usize * height as usize],
        ))
    }

    /// Wrap an existing row-major label buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSize`] if `labels.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, labels: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if labels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: labels.len(),
            });
        }
        Ok(Self::from_parts(width, height, labels))
    }

    pub(crate) fn from_parts(width: u32, height: u32, labels: Vec<u32>) -> Self {
        debug_assert_eq!(labels.len(), width as usize * height as usize);
        LabelMap {
            width,
            height,
            labels,
        }
    }

    /// Get the map width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the map height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get all labels in row-major order.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Get all labels mutably.
    #[inline]
    pub fn labels_mut(&mut self) -> &mut [u32] {
        &mut self.labels
    }

    /// Consume the map and return its label buffer.
    pub fn into_raw(self) -> Vec<u32> {
        self.labels
    }

    /// Get the labels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u32] {
        let w = self.width as usize;
        &self.labels[y * w..(y + 1) * w]
    }

    /// Get the label at (x, y), or `None` out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Largest label present (0 for an all-background map).
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Render as two hex digits per pixel, blanks for background.
    pub fn to_hex_string(&self) -> String {
        let w = self.width as usize;
        let mut out = String::with_capacity(self.labels.len() * 2 + self.height as usize);
        for row in self.labels.chunks_exact(w) {
            for &label in row {
                if label == 0 {
                    out.push_str("  ");
                } else {
                    let _ = write!(out, "{:02x}", label);
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        assert!(LabelMap::from_raw(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            LabelMap::from_raw(2, 2, vec![0; 3]),
            Err(Error::BufferSize { .. })
        ));
    }

    #[test]
    fn test_get_and_max() {
        let map = LabelMap::from_raw(3, 2, vec![0, 1, 1, 2, 0, 3]).unwrap();
        assert_eq!(map.get(2, 1), Some(3));
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.max_label(), 3);
        assert_eq!(map.row(1), &[2, 0, 3]);
    }

    #[test]
    fn test_hex_rendering() {
        let map = LabelMap::from_raw(3, 2, vec![0, 1, 1, 0x1f, 0, 0]).unwrap();
        assert_eq!(map.to_hex_string(), "  0101\n1f    \n");
    }
}
