//! Conversions between boolean grids, packed images and label seeds
//!
//! All three conversions are row-independent and run on the rayon pool.

use super::{PackedImage, check_min_dimensions};
use crate::error::{Error, Result};
use crate::label::LabelMap;
use crate::parallel::{ExecutionStrategy, for_each_row};

/// Pack a row-major boolean grid, 8 pixels per byte, MSB first.
///
/// The last byte of each row is zero-padded.
///
/// # Errors
///
/// Returns [`Error::TooSmall`] if `width` or `height` is below 2, and
/// [`Error::BufferSize`] if `bits.len() != width * height`.
///
/// # Examples
///
/// ```
/// use bitmorph_core::pack;
///
/// let bits = [true, false, true, false, false, true];
/// let image = pack(&bits, 3, 2).unwrap();
/// assert_eq!(image.stride(), 1);
/// assert_eq!(image.data(), &[0b1010_0000, 0b0010_0000]);
/// ```
pub fn pack(bits: &[bool], width: u32, height: u32) -> Result<PackedImage> {
    check_min_dimensions(width, height)?;
    let w = width as usize;
    let expected = w * height as usize;
    if bits.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: bits.len(),
        });
    }

    let mut image = PackedImage::new(width, height)?;
    let stride = image.stride();
    for_each_row(
        image.data_mut(),
        stride,
        ExecutionStrategy::default(),
        |y, row| {
            let src = &bits[y * w..(y + 1) * w];
            for (dst, group) in row.iter_mut().zip(src.chunks(8)) {
                *dst = group
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << (7 - i)));
            }
        },
    );
    Ok(image)
}

/// Unpack an image into a row-major boolean grid of `width * height`.
///
/// Exact inverse of [`pack`].
pub fn unpack(image: &PackedImage) -> Vec<bool> {
    let w = image.width() as usize;
    let mut bits = vec![false; w * image.height() as usize];
    for_each_row(&mut bits, w, ExecutionStrategy::default(), |y, row| {
        let src = image.row(y);
        for (x, bit) in row.iter_mut().enumerate() {
            *bit = src[x / 8] & (0x80 >> (x % 8)) != 0;
        }
    });
    bits
}

/// Expand an image into a `0/1` label grid, the labeler's initial input.
pub fn to_label_seed(image: &PackedImage) -> LabelMap {
    let w = image.width() as usize;
    let mut labels = vec![0u32; w * image.height() as usize];
    for_each_row(&mut labels, w, ExecutionStrategy::default(), |y, row| {
        let src = image.row(y);
        for (x, label) in row.iter_mut().enumerate() {
            *label = u32::from((src[x / 8] >> (7 - x % 8)) & 1);
        }
    });
    LabelMap::from_parts(image.width(), image.height(), labels)
}
