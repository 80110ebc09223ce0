//! Pixel access functions
//!
//! Pixel `(x, y)` lives in byte `stride * y + x / 8` under the mask
//! `0x80 >> (x % 8)`.

use super::PackedImage;
use crate::error::{Error, Result};

#[inline]
fn bit_mask(x: u32) -> u8 {
    0x80 >> (x % 8)
}

impl PackedImage {
    #[inline]
    fn byte_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + (x / 8) as usize
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without coordinate validation.
    ///
    /// # Panics
    ///
    /// Panics if the byte index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> bool {
        self.data[self.byte_index(x, y)] & bit_mask(x) != 0
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: bool) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set a pixel value without coordinate validation.
    ///
    /// # Panics
    ///
    /// Panics if the byte index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: bool) {
        let idx = self.byte_index(x, y);
        if value {
            self.data[idx] |= bit_mask(x);
        } else {
            self.data[idx] &= !bit_mask(x);
        }
    }

    /// Number of foreground pixels.
    pub fn count_pixels(&self) -> u64 {
        self.data.iter().map(|b| u64::from(b.count_ones())).sum()
    }

    /// Whether the image has no foreground pixel.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order_msb_first() {
        let mut image = PackedImage::new(10, 2).unwrap();
        image.set_pixel(0, 0, true).unwrap();
        image.set_pixel(7, 0, true).unwrap();
        image.set_pixel(8, 1, true).unwrap();
        assert_eq!(image.data(), &[0x81, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut image = PackedImage::new(13, 3).unwrap();
        image.set_pixel(12, 2, true).unwrap();
        assert_eq!(image.get_pixel(12, 2), Some(true));
        assert_eq!(image.get_pixel(11, 2), Some(false));
        image.set_pixel(12, 2, false).unwrap();
        assert_eq!(image.get_pixel(12, 2), Some(false));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut image = PackedImage::new(4, 4).unwrap();
        assert_eq!(image.get_pixel(4, 0), None);
        assert_eq!(image.get_pixel(0, 4), None);
        assert!(image.set_pixel(4, 0, true).is_err());
        assert!(image.set_pixel(0, 4, true).is_err());
    }

    #[test]
    fn test_count_pixels() {
        let image = PackedImage::from_raw(16, 2, vec![0xff, 0x01, 0x10, 0x00]).unwrap();
        assert_eq!(image.count_pixels(), 10);
        assert!(!image.is_empty());
        assert!(image.create_template().is_empty());
    }
}
