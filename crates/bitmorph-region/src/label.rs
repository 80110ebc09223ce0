//! Component extraction from a label map
//!
//! Each component is cut out as a packed mask whose first column is the
//! first pixel of the source byte containing the component's leftmost
//! pixel, so mask bytes line up with source bytes.

use crate::error::{RegionError, RegionResult};
use bitmorph_core::{LabelMap, PackedImage};

/// One extracted connected component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentBox {
    /// Final label of the component
    pub label: u32,
    /// Leftmost pixel column
    pub x: u32,
    /// Topmost pixel row
    pub y: u32,
    /// Source byte column containing `x` (`x / 8`)
    pub x_byte: u32,
    /// Bounding box width in pixels
    pub width: u32,
    /// Bounding box height in pixels
    pub height: u32,
    /// Number of pixels in the component
    pub pixel_count: u64,
    /// Component pixels, starting at source column `x_byte * 8` and row
    /// `y`, through the right edge of the bounding box
    pub mask: PackedImage,
}

impl ComponentBox {
    /// Whether source pixel (x, y) belongs to this component.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let x0 = self.x_byte * 8;
        if x < x0 || y < self.y {
            return false;
        }
        self.mask.get_pixel(x - x0, y - self.y).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    pixels: u64,
}

impl Extent {
    const EMPTY: Extent = Extent {
        min_x: u32::MAX,
        min_y: u32::MAX,
        max_x: 0,
        max_y: 0,
        pixels: 0,
    };

    fn add(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixels += 1;
    }
}

fn check_label(label: u32, count: u32) -> RegionResult<()> {
    if label > count {
        return Err(RegionError::LabelOutOfRange { label, count });
    }
    Ok(())
}

/// Pixel count of every component, indexed by `label - 1`.
///
/// # Errors
///
/// Returns [`RegionError::LabelOutOfRange`] if the map holds a label
/// above `count`.
pub fn component_sizes(map: &LabelMap, count: u32) -> RegionResult<Vec<u64>> {
    let mut sizes = vec![0u64; count as usize];
    for &label in map.labels() {
        if label == 0 {
            continue;
        }
        check_label(label, count)?;
        sizes[label as usize - 1] += 1;
    }
    Ok(sizes)
}

/// Extract one [`ComponentBox`] per label `1..=count`, in label order.
///
/// Labels with no pixels are skipped.
///
/// # Errors
///
/// Returns [`RegionError::LabelOutOfRange`] if the map holds a label
/// above `count`.
pub fn extract_boxes(map: &LabelMap, count: u32) -> RegionResult<Vec<ComponentBox>> {
    let width = map.width() as usize;
    let mut extents = vec![Extent::EMPTY; count as usize];
    for (y, row) in map.labels().chunks_exact(width).enumerate() {
        for (x, &label) in row.iter().enumerate() {
            if label == 0 {
                continue;
            }
            check_label(label, count)?;
            extents[label as usize - 1].add(x as u32, y as u32);
        }
    }

    let mut boxes = Vec::with_capacity(extents.len());
    let mut slot = vec![usize::MAX; extents.len()];
    for (i, e) in extents.iter().enumerate() {
        if e.pixels == 0 {
            continue;
        }
        let x_byte = e.min_x / 8;
        let mask_width = e.max_x + 1 - x_byte * 8;
        let height = e.max_y - e.min_y + 1;
        slot[i] = boxes.len();
        boxes.push(ComponentBox {
            label: i as u32 + 1,
            x: e.min_x,
            y: e.min_y,
            x_byte,
            width: e.max_x - e.min_x + 1,
            height,
            pixel_count: e.pixels,
            mask: PackedImage::new(mask_width, height)?,
        });
    }

    for (y, row) in map.labels().chunks_exact(width).enumerate() {
        for (x, &label) in row.iter().enumerate() {
            if label == 0 {
                continue;
            }
            let b = &mut boxes[slot[label as usize - 1]];
            b.mask
                .set_pixel_unchecked(x as u32 - b.x_byte * 8, y as u32 - b.y, true);
        }
    }

    log::debug!("extracted {} component boxes", boxes.len());
    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(width: u32, labels: &[u32]) -> LabelMap {
        let height = labels.len() as u32 / width;
        LabelMap::from_raw(width, height, labels.to_vec()).unwrap()
    }

    #[test]
    fn test_sizes() {
        let m = map(4, &[1, 1, 0, 2, 0, 0, 0, 2]);
        assert_eq!(component_sizes(&m, 2).unwrap(), vec![2, 2]);
        assert!(matches!(
            component_sizes(&m, 1),
            Err(RegionError::LabelOutOfRange { label: 2, count: 1 })
        ));
    }

    #[test]
    fn test_box_geometry() {
        // component 1 spans columns 10..=12 of a 16-wide map
        let mut labels = vec![0u32; 16 * 3];
        labels[16 + 10] = 1;
        labels[16 + 11] = 1;
        labels[2 * 16 + 12] = 1;
        labels[0] = 2;
        let boxes = extract_boxes(&map(16, &labels), 2).unwrap();
        assert_eq!(boxes.len(), 2);

        let b = &boxes[0];
        assert_eq!(b.label, 1);
        assert_eq!((b.x, b.y, b.x_byte), (10, 1, 1));
        assert_eq!((b.width, b.height), (3, 2));
        assert_eq!(b.pixel_count, 3);
        assert_eq!((b.mask.width(), b.mask.height()), (5, 2));
        assert_eq!(b.mask.data(), &[0b0011_0000, 0b0000_1000]);
        assert!(b.contains(11, 1));
        assert!(!b.contains(12, 1));
        assert!(!b.contains(0, 0));

        assert_eq!(boxes[1].label, 2);
        assert_eq!(boxes[1].mask.count_pixels(), 1);
    }

    #[test]
    fn test_empty_labels_skipped() {
        let m = map(2, &[0, 3, 0, 0]);
        let boxes = extract_boxes(&m, 3).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].label, 3);
    }
}
