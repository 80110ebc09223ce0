//! Pixel-by-pixel reference implementations
//!
//! Slow and obviously correct. The packed operators and both labelers are
//! checked against these on fixtures and random images.

use bitmorph_core::{Connectivity, LabelMap, PackedImage};
use std::collections::VecDeque;

fn pixel(image: &PackedImage, x: i64, y: i64) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    image.get_pixel(x as u32, y as u32).unwrap_or(false)
}

const CROSS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const RING: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn map_pixels(image: &PackedImage, f: impl Fn(i64, i64) -> bool) -> PackedImage {
    let mut out = image.create_template();
    for y in 0..image.height() {
        for x in 0..image.width() {
            if f(x as i64, y as i64) {
                out.set_pixel_unchecked(x, y, true);
            }
        }
    }
    out
}

/// Dilation by the 5-pixel cross; outside pixels are background.
pub fn dilate(image: &PackedImage) -> PackedImage {
    map_pixels(image, |x, y| {
        pixel(image, x, y) || CROSS.iter().any(|&(dx, dy)| pixel(image, x + dx, y + dy))
    })
}

/// Erosion by the 5-pixel cross; outside pixels are background, so the
/// image border is always cleared.
pub fn erode(image: &PackedImage) -> PackedImage {
    map_pixels(image, |x, y| {
        pixel(image, x, y) && CROSS.iter().all(|&(dx, dy)| pixel(image, x + dx, y + dy))
    })
}

/// Keep pixels with at least one set 4-neighbour.
pub fn filter_isolated(image: &PackedImage) -> PackedImage {
    map_pixels(image, |x, y| {
        pixel(image, x, y) && CROSS.iter().any(|&(dx, dy)| pixel(image, x + dx, y + dy))
    })
}

fn neighbours(connectivity: Connectivity) -> &'static [(i64, i64)] {
    match connectivity {
        Connectivity::Four => &CROSS,
        Connectivity::Eight => &RING,
    }
}

/// Breadth-first flood-fill labeling.
///
/// Components are numbered `1..=N` in the raster order of their first
/// pixel. Returns the label buffer and `N`.
pub fn flood_fill_labels(image: &PackedImage, connectivity: Connectivity) -> (Vec<u32>, u32) {
    let w = image.width() as i64;
    let h = image.height() as i64;
    let mut labels = vec![0u32; (w * h) as usize];
    let mut count = 0;
    let mut queue = VecDeque::new();

    for start in 0..(w * h) {
        let (sx, sy) = (start % w, start / w);
        if labels[start as usize] != 0 || !pixel(image, sx, sy) {
            continue;
        }
        count += 1;
        labels[start as usize] = count;
        queue.push_back((sx, sy));
        while let Some((x, y)) = queue.pop_front() {
            for &(dx, dy) in neighbours(connectivity) {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let idx = (ny * w + nx) as usize;
                if labels[idx] == 0 && pixel(image, nx, ny) {
                    labels[idx] = count;
                    queue.push_back((nx, ny));
                }
            }
        }
    }
    (labels, count)
}

/// Check that `map` labels exactly the foreground of `image` and that its
/// labels are the connected components under `connectivity`.
///
/// Returns a description of the first violation found.
pub fn check_partition(
    image: &PackedImage,
    map: &LabelMap,
    connectivity: Connectivity,
) -> Result<(), String> {
    if map.width() != image.width() || map.height() != image.height() {
        return Err("label map and image sizes differ".into());
    }
    for y in 0..image.height() {
        for x in 0..image.width() {
            let set = image.get_pixel_unchecked(x, y);
            let label = map.get(x, y).unwrap_or(0);
            if set != (label != 0) {
                return Err(format!("pixel ({x}, {y}) set={set} but label={label}"));
            }
        }
    }
    let (reference, _) = flood_fill_labels(image, connectivity);
    if same_partition(&reference, map.labels()) {
        Ok(())
    } else {
        Err("labels do not match the connected components".into())
    }
}

/// Whether two label buffers group the pixels identically, up to a
/// renaming of the labels. Background must match exactly.
pub fn same_partition(a: &[u32], b: &[u32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut forward = std::collections::HashMap::new();
    let mut backward = std::collections::HashMap::new();
    for (&la, &lb) in a.iter().zip(b) {
        if (la == 0) != (lb == 0) {
            return false;
        }
        if la == 0 {
            continue;
        }
        if *forward.entry(la).or_insert(lb) != lb || *backward.entry(lb).or_insert(la) != la {
            return false;
        }
    }
    true
}
