//! PackedImage - the bit-packed binary image container
//!
//! # Pixel layout
//!
//! - Eight pixels per byte, most significant bit first: bit 7 of a byte is
//!   the leftmost pixel of its 8-pixel group, bit 0 the rightmost
//! - Every row starts on a byte boundary; `stride = ceil(width / 8)`
//! - Row-major storage: byte `stride * y + x_byte`
//! - Padding bits beyond `width` in the last byte of a row are always zero
//!   in images produced by this crate and by the operators built on it
//!
//! The container is a plain owned buffer. Operators take `&PackedImage`
//! and return a freshly allocated image; nothing keeps a reference across
//! calls.

mod access;
pub mod convert;
mod render;
pub mod rop;

pub use convert::{pack, to_label_seed, unpack};
pub use rop::RopOp;

use crate::error::{Error, Result};

/// Smallest width and height accepted by the morphology and labeling
/// operators.
pub const MIN_DIMENSION: u32 = 2;

/// Bit-packed binary image.
///
/// # Examples
///
/// ```
/// use bitmorph_core::PackedImage;
///
/// let image = PackedImage::new(12, 3).unwrap();
/// assert_eq!(image.stride(), 2);
/// assert_eq!(image.data().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row
    stride: usize,
    /// Row-major packed pixel data
    data: Vec<u8>,
}

impl PackedImage {
    /// Create a new all-background image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let stride = Self::stride_for(width);
        Ok(PackedImage {
            width,
            height,
            stride,
            data: vec![0u8; stride * height as usize],
        })
    }

    /// Wrap an existing packed buffer.
    ///
    /// The buffer must hold exactly `stride_for(width) * height` bytes.
    /// Padding bits beyond `width` are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSize`] if the buffer length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let stride = Self::stride_for(width);
        let expected = stride * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let mut image = PackedImage {
            width,
            height,
            stride,
            data,
        };
        image.clear_padding();
        Ok(image)
    }

    /// Number of bytes per row for a given pixel width.
    #[inline]
    pub fn stride_for(width: u32) -> usize {
        (width as usize).div_ceil(8)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get raw access to the packed data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the packed data.
    ///
    /// Callers writing through this slice must keep the padding bits zero
    /// (or call [`PackedImage::clear_padding`] afterwards); the operators
    /// rely on it.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its packed buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Get the packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Get the packed bytes of row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.data[start..start + self.stride]
    }

    /// Iterate over the packed rows from top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.stride)
    }

    /// Mask of the valid bits in the last byte of every row.
    ///
    /// `0xff` when the width is a multiple of 8.
    #[inline]
    pub fn padding_mask(&self) -> u8 {
        match self.width % 8 {
            0 => 0xff,
            extra => !(0xffu8 >> extra),
        }
    }

    /// Zero the padding bits beyond `width` in every row.
    pub fn clear_padding(&mut self) {
        let mask = self.padding_mask();
        if mask == 0xff {
            return;
        }
        let stride = self.stride;
        for row in self.data.chunks_exact_mut(stride) {
            row[stride - 1] &= mask;
        }
    }

    /// Create an all-background image with the same geometry.
    pub fn create_template(&self) -> Self {
        PackedImage {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: vec![0u8; self.data.len()],
        }
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &PackedImage) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Check that two images have the same width and height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_same_size(&self, other: &PackedImage) -> Result<()> {
        if self.sizes_equal(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            })
        }
    }

    /// Check the 2x2 minimum required by the operators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooSmall`] if either dimension is below
    /// [`MIN_DIMENSION`].
    pub fn check_min_size(&self) -> Result<()> {
        check_min_dimensions(self.width, self.height)
    }
}

/// Check the 2x2 minimum for raw dimensions.
///
/// # Errors
///
/// Returns [`Error::TooSmall`] if either dimension is below
/// [`MIN_DIMENSION`].
pub fn check_min_dimensions(width: u32, height: u32) -> Result<()> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(Error::TooSmall {
            width,
            height,
            min: MIN_DIMENSION,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_geometry() {
        let image = PackedImage::new(17, 4).unwrap();
        assert_eq!(image.stride(), 3);
        assert_eq!(image.data().len(), 12);
        assert!(image.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_zero_dimension() {
        assert!(matches!(
            PackedImage::new(0, 4),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(PackedImage::new(4, 0).is_err());
    }

    #[test]
    fn test_padding_mask() {
        assert_eq!(PackedImage::new(8, 2).unwrap().padding_mask(), 0xff);
        assert_eq!(PackedImage::new(5, 2).unwrap().padding_mask(), 0xf8);
        assert_eq!(PackedImage::new(9, 2).unwrap().padding_mask(), 0x80);
        assert_eq!(PackedImage::new(15, 2).unwrap().padding_mask(), 0xfe);
    }

    #[test]
    fn test_from_raw_clears_padding() {
        let image = PackedImage::from_raw(5, 2, vec![0xff, 0xff]).unwrap();
        assert_eq!(image.data(), &[0xf8, 0xf8]);
    }

    #[test]
    fn test_from_raw_size_mismatch() {
        let err = PackedImage::from_raw(9, 2, vec![0; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_min_size() {
        assert!(PackedImage::new(2, 2).unwrap().check_min_size().is_ok());
        assert!(matches!(
            PackedImage::new(1, 5).unwrap().check_min_size(),
            Err(Error::TooSmall { .. })
        ));
    }

    #[test]
    fn test_check_same_size() {
        let a = PackedImage::new(8, 3).unwrap();
        let b = PackedImage::new(8, 4).unwrap();
        assert!(a.check_same_size(&a.create_template()).is_ok());
        assert!(matches!(
            a.check_same_size(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
