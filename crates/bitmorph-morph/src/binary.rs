//! Binary morphology with the 5-pixel cross
//!
//! Every operator works a byte at a time: the byte-local table result is
//! combined with the same byte of the rows above and below, then patched
//! with the edge bit of the horizontally adjacent byte (bit 7 of the byte
//! to the right feeds bit 0, bit 0 of the byte to the left feeds bit 7).
//!
//! Edge policy:
//!
//! - Dilation treats pixels outside the image as background.
//! - Erosion treats them the same way, so the first and last row and the
//!   first and last column are always cleared.
//! - Padding bits beyond the image width are zero in every output.
//!
//! Each output row depends on input rows `y - 1`, `y` and `y + 1` only, so
//! rows are computed independently under the chosen
//! [`ExecutionStrategy`].

use crate::MorphResult;
use crate::table::MorphTables;
use bitmorph_core::{ExecutionStrategy, PackedImage, for_each_row};

/// Position of a row relative to the top and bottom image borders.
///
/// Images are at least two rows tall, so no row is both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBoundary {
    /// First row, nothing above
    Top,
    /// Rows with a neighbour on both sides
    Interior,
    /// Last row, nothing below
    Bottom,
}

impl RowBoundary {
    /// Classify row `y` of an image `height` rows tall.
    pub fn of(y: usize, height: usize) -> Self {
        if y == 0 {
            RowBoundary::Top
        } else if y + 1 == height {
            RowBoundary::Bottom
        } else {
            RowBoundary::Interior
        }
    }

    /// The rows above and below `y`, `None` where the image ends.
    fn neighbours(self, image: &PackedImage, y: usize) -> (Option<&[u8]>, Option<&[u8]>) {
        match self {
            RowBoundary::Top => (None, Some(image.row(y + 1))),
            RowBoundary::Interior => (Some(image.row(y - 1)), Some(image.row(y + 1))),
            RowBoundary::Bottom => (Some(image.row(y - 1)), None),
        }
    }
}

/// Input rows seen by a row kernel.
struct RowContext<'a> {
    boundary: RowBoundary,
    above: Option<&'a [u8]>,
    current: &'a [u8],
    below: Option<&'a [u8]>,
}

impl RowContext<'_> {
    /// Bit 0 carried in from the byte to the right.
    #[inline]
    fn carry_from_right(&self, x: usize) -> u8 {
        match self.current.get(x + 1) {
            Some(&next) => next >> 7,
            None => 0,
        }
    }

    /// Bit 7 carried in from the byte to the left.
    #[inline]
    fn carry_from_left(&self, x: usize) -> u8 {
        if x == 0 { 0 } else { (self.current[x - 1] & 0x01) << 7 }
    }
}

/// Run `kernel` over every row and mask the padding of the result.
fn apply_rows<F>(image: &PackedImage, strategy: ExecutionStrategy, kernel: F) -> PackedImage
where
    F: Fn(&RowContext<'_>, &mut [u8]) + Send + Sync,
{
    let height = image.height() as usize;
    let stride = image.stride();
    let mask = image.padding_mask();
    let mut out = image.create_template();
    for_each_row(out.data_mut(), stride, strategy, |y, dst| {
        let boundary = RowBoundary::of(y, height);
        let (above, below) = boundary.neighbours(image, y);
        let ctx = RowContext {
            boundary,
            above,
            current: image.row(y),
            below,
        };
        kernel(&ctx, dst);
        dst[stride - 1] &= mask;
    });
    out
}

fn dilate_row(table: &[u8; 256], ctx: &RowContext<'_>, dst: &mut [u8]) {
    for (x, d) in dst.iter_mut().enumerate() {
        let mut p = table[ctx.current[x] as usize];
        if let Some(up) = ctx.above {
            p |= up[x];
        }
        if let Some(down) = ctx.below {
            p |= down[x];
        }
        *d = p | ctx.carry_from_right(x) | ctx.carry_from_left(x);
    }
}

fn erode_row(table: &[u8; 256], ctx: &RowContext<'_>, dst: &mut [u8]) {
    let (RowBoundary::Interior, Some(up), Some(down)) = (ctx.boundary, ctx.above, ctx.below) else {
        // border rows lose every pixel; dst is already zero
        return;
    };
    let last = dst.len() - 1;
    for (x, d) in dst.iter_mut().enumerate() {
        let mut p = table[ctx.current[x] as usize] & up[x] & down[x];
        if ctx.carry_from_left(x) == 0 {
            p &= 0x7f;
        }
        if x == last || ctx.carry_from_right(x) == 0 {
            p &= 0xfe;
        }
        *d = p;
    }
}

fn isolated_row(ctx: &RowContext<'_>, dst: &mut [u8]) {
    for (x, d) in dst.iter_mut().enumerate() {
        let v = ctx.current[x];
        let mut n = (v << 1) | (v >> 1) | ctx.carry_from_right(x) | ctx.carry_from_left(x);
        if let Some(up) = ctx.above {
            n |= up[x];
        }
        if let Some(down) = ctx.below {
            n |= down[x];
        }
        *d = v & n;
    }
}

/// Dilate by the 5-pixel cross.
///
/// A pixel is set in the output iff it or one of its in-image
/// 4-neighbours is set in the input.
///
/// # Errors
///
/// Returns an error if the image is smaller than 2x2.
///
/// # Examples
///
/// ```
/// use bitmorph_core::PackedImage;
/// use bitmorph_morph::dilate;
///
/// let image = PackedImage::from_ascii("...\n.#.\n...").unwrap();
/// let grown = dilate(&image).unwrap();
/// assert_eq!(grown, PackedImage::from_ascii(".#.\n###\n.#.").unwrap());
/// ```
pub fn dilate(image: &PackedImage) -> MorphResult<PackedImage> {
    dilate_with(image, ExecutionStrategy::default())
}

/// [`dilate`] with an explicit execution strategy.
pub fn dilate_with(image: &PackedImage, strategy: ExecutionStrategy) -> MorphResult<PackedImage> {
    image.check_min_size()?;
    let table = &MorphTables::get().dilate;
    Ok(apply_rows(image, strategy, |ctx, dst| {
        dilate_row(table, ctx, dst)
    }))
}

/// Erode by the 5-pixel cross.
///
/// A pixel survives iff it and all four of its 4-neighbours are set.
/// Neighbours outside the image count as background, so the image border
/// is always cleared.
///
/// # Errors
///
/// Returns an error if the image is smaller than 2x2.
pub fn erode(image: &PackedImage) -> MorphResult<PackedImage> {
    erode_with(image, ExecutionStrategy::default())
}

/// [`erode`] with an explicit execution strategy.
pub fn erode_with(image: &PackedImage, strategy: ExecutionStrategy) -> MorphResult<PackedImage> {
    image.check_min_size()?;
    let table = &MorphTables::get().erode;
    Ok(apply_rows(image, strategy, |ctx, dst| {
        erode_row(table, ctx, dst)
    }))
}

/// Remove pixels that have no set 4-neighbour.
///
/// # Errors
///
/// Returns an error if the image is smaller than 2x2.
pub fn filter_isolated(image: &PackedImage) -> MorphResult<PackedImage> {
    filter_isolated_with(image, ExecutionStrategy::default())
}

/// [`filter_isolated`] with an explicit execution strategy.
pub fn filter_isolated_with(
    image: &PackedImage,
    strategy: ExecutionStrategy,
) -> MorphResult<PackedImage> {
    image.check_min_size()?;
    Ok(apply_rows(image, strategy, isolated_row))
}

/// Open a binary image
///
/// Opening = Erosion followed by Dilation.
/// Removes foreground features thinner than the cross.
pub fn open(image: &PackedImage) -> MorphResult<PackedImage> {
    let eroded = erode(image)?;
    dilate(&eroded)
}

/// Close a binary image
///
/// Closing = Dilation followed by Erosion.
/// Fills single-pixel gaps and notches.
pub fn close(image: &PackedImage) -> MorphResult<PackedImage> {
    let dilated = dilate(image)?;
    erode(&dilated)
}

/// Morphological gradient (dilation - erosion)
///
/// Outlines both sides of every foreground edge.
pub fn gradient(image: &PackedImage) -> MorphResult<PackedImage> {
    let dilated = dilate(image)?;
    let eroded = erode(image)?;
    Ok(dilated.subtract(&eroded)?)
}

/// Top-hat transform (original - opening)
///
/// Keeps the foreground detail that opening removes.
pub fn top_hat(image: &PackedImage) -> MorphResult<PackedImage> {
    let opened = open(image)?;
    Ok(image.subtract(&opened)?)
}
