//! Deterministic fixture images

use crate::error::{TestError, TestResult};
use bitmorph_core::{PackedImage, pack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random image with each pixel set with probability `density`.
///
/// The same `seed` always yields the same image.
pub fn random_image(width: u32, height: u32, density: f64, seed: u64) -> TestResult<PackedImage> {
    if !(0.0..=1.0).contains(&density) {
        return Err(TestError::InvalidFixture(format!(
            "density {density} outside [0, 1]"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let bits: Vec<bool> = (0..width as usize * height as usize)
        .map(|_| rng.random_bool(density))
        .collect();
    Ok(pack(&bits, width, height)?)
}

/// Image with every pixel set.
pub fn full_image(width: u32, height: u32) -> TestResult<PackedImage> {
    Ok(PackedImage::new(width, height)?.invert())
}

/// Checkerboard of `cell x cell` squares, the top-left cell set.
///
/// Under 4-connectivity every cell is its own component; under
/// 8-connectivity all set cells touch diagonally.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> TestResult<PackedImage> {
    if cell == 0 {
        return Err(TestError::InvalidFixture("cell size must be positive".into()));
    }
    let mut image = PackedImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            if ((x / cell) + (y / cell)) % 2 == 0 {
                image.set_pixel_unchecked(x, y, true);
            }
        }
    }
    Ok(image)
}

/// Image from an ASCII picture, panicking on malformed input.
///
/// Intended for literal pictures in tests.
pub fn ascii(text: &str) -> PackedImage {
    match PackedImage::from_ascii(text) {
        Ok(image) => image,
        Err(e) => panic!("bad fixture picture: {e}"),
    }
}
