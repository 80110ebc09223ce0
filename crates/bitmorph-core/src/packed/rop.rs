//! Raster operations (ROP)
//!
//! Bytewise boolean combination of two equally sized images, plus the
//! unary complement. Both operands share the same stride, so each output
//! row depends only on the matching input rows.

use super::PackedImage;
use crate::error::Result;
use crate::parallel::{ExecutionStrategy, for_each_row};

/// Raster operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopOp {
    /// `a AND b`
    And,
    /// `a OR b`
    Or,
    /// `a XOR b`
    Xor,
    /// `a AND (NOT b)`
    Subtract,
}

impl RopOp {
    #[inline]
    fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            RopOp::And => a & b,
            RopOp::Or => a | b,
            RopOp::Xor => a ^ b,
            RopOp::Subtract => a & !b,
        }
    }
}

impl PackedImage {
    /// Combine two images pixel by pixel with `op`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if the sizes differ.
    pub fn rop(&self, other: &PackedImage, op: RopOp) -> Result<PackedImage> {
        self.check_same_size(other)?;
        let mut out = self.create_template();
        let stride = self.stride;
        for_each_row(
            out.data_mut(),
            stride,
            ExecutionStrategy::default(),
            |y, row| {
                let a = self.row(y);
                let b = other.row(y);
                for ((d, &sa), &sb) in row.iter_mut().zip(a).zip(b) {
                    *d = op.apply(sa, sb);
                }
            },
        );
        Ok(out)
    }

    /// Bitwise AND of two images.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn and(&self, other: &PackedImage) -> Result<PackedImage> {
        self.rop(other, RopOp::And)
    }

    /// Bitwise OR of two images.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn or(&self, other: &PackedImage) -> Result<PackedImage> {
        self.rop(other, RopOp::Or)
    }

    /// Bitwise XOR of two images.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn xor(&self, other: &PackedImage) -> Result<PackedImage> {
        self.rop(other, RopOp::Xor)
    }

    /// Pixels set in `self` and clear in `other`.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn subtract(&self, other: &PackedImage) -> Result<PackedImage> {
        self.rop(other, RopOp::Subtract)
    }

    /// Complement every pixel. Padding bits stay zero.
    pub fn invert(&self) -> PackedImage {
        let mut out = self.create_template();
        let stride = self.stride;
        let mask = self.padding_mask();
        for_each_row(
            out.data_mut(),
            stride,
            ExecutionStrategy::default(),
            |y, row| {
                for (d, &s) in row.iter_mut().zip(self.row(y)) {
                    *d = !s;
                }
                row[stride - 1] &= mask;
            },
        );
        out
    }

    /// Whether every foreground pixel of `self` is also set in `other`.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn is_subset_of(&self, other: &PackedImage) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| a & !b == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn pair() -> (PackedImage, PackedImage) {
        let a = PackedImage::from_raw(12, 2, vec![0b1100_1010, 0xf0, 0x0f, 0x30]).unwrap();
        let b = PackedImage::from_raw(12, 2, vec![0b1010_0110, 0x30, 0xff, 0x00]).unwrap();
        (a, b)
    }

    #[test]
    fn test_binary_ops() {
        let (a, b) = pair();
        assert_eq!(a.and(&b).unwrap().data(), &[0b1000_0010, 0x30, 0x0f, 0x00]);
        assert_eq!(a.or(&b).unwrap().data(), &[0b1110_1110, 0xf0, 0xff, 0x30]);
        assert_eq!(a.xor(&b).unwrap().data(), &[0b0110_1100, 0xc0, 0xf0, 0x30]);
        assert_eq!(
            a.subtract(&b).unwrap().data(),
            &[0b0100_1000, 0xc0, 0x00, 0x30]
        );
    }

    #[test]
    fn test_invert_keeps_padding_clear() {
        let image = PackedImage::new(12, 2).unwrap();
        let inv = image.invert();
        assert_eq!(inv.data(), &[0xff, 0xf0, 0xff, 0xf0]);
        assert_eq!(inv.count_pixels(), 24);
        assert_eq!(inv.invert(), image);
    }

    #[test]
    fn test_subset() {
        let (a, b) = pair();
        let both = a.and(&b).unwrap();
        assert!(both.is_subset_of(&a).unwrap());
        assert!(both.is_subset_of(&b).unwrap());
        assert!(!a.is_subset_of(&b).unwrap());
    }

    #[test]
    fn test_size_mismatch() {
        let a = PackedImage::new(12, 2).unwrap();
        let b = PackedImage::new(12, 3).unwrap();
        assert!(matches!(a.and(&b), Err(Error::DimensionMismatch { .. })));
        assert!(a.is_subset_of(&b).is_err());
    }
}
