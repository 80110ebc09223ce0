//! Text rendering for debugging and test fixtures
//!
//! `to_bit_string` dumps the raw packed bytes, padding included, so the
//! bit order can be inspected directly. `to_ascii` and `from_ascii` work
//! on pixels only.

use super::{PackedImage, pack};
use crate::error::{Error, Result};
use std::fmt::Write;

impl PackedImage {
    /// Render every packed byte as 8 binary digits, one row per line.
    pub fn to_bit_string(&self) -> String {
        let mut out = String::with_capacity(self.data.len() * 9 + self.height as usize);
        for row in self.rows() {
            for (i, byte) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{:08b}", byte);
            }
            out.push('\n');
        }
        out
    }

    /// Render pixels as `##` (foreground) and `..` (background), each row
    /// prefixed with its index.
    pub fn to_ascii(&self) -> String {
        let digits = (self.height.max(1) - 1).to_string().len();
        let mut out = String::new();
        for y in 0..self.height {
            let _ = write!(out, "{:>digits$} ", y);
            for x in 0..self.width {
                out.push_str(if self.get_pixel_unchecked(x, y) {
                    "##"
                } else {
                    ".."
                });
            }
            out.push('\n');
        }
        out
    }

    /// Parse a picture where `#`, `1` or `x` mark foreground and `.` or
    /// `0` mark background.
    ///
    /// Blank lines are skipped and whitespace inside a line is ignored,
    /// so pictures may be indented.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for unknown characters or rows
    /// of unequal length, and [`Error::TooSmall`] for pictures below 2x2.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitmorph_core::PackedImage;
    ///
    /// let image = PackedImage::from_ascii("
    ///     #..
    ///     .##
    /// ").unwrap();
    /// assert_eq!((image.width(), image.height()), (3, 2));
    /// assert_eq!(image.get_pixel(2, 1), Some(true));
    /// ```
    pub fn from_ascii(text: &str) -> Result<PackedImage> {
        let mut bits = Vec::new();
        let mut width = None;
        let mut height = 0u32;
        for (line_no, line) in text.lines().enumerate() {
            let row: Vec<bool> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '#' | '1' | 'x' | 'X' => Ok(true),
                    '.' | '0' => Ok(false),
                    other => Err(Error::InvalidParameter(format!(
                        "unexpected character {other:?} on line {}",
                        line_no + 1
                    ))),
                })
                .collect::<Result<_>>()?;
            if row.is_empty() {
                continue;
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(Error::InvalidParameter(format!(
                        "line {} has {} pixels, expected {w}",
                        line_no + 1,
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            bits.extend(row);
            height += 1;
        }
        let width = u32::try_from(width.unwrap_or(0))
            .map_err(|_| Error::InvalidParameter("picture too wide".into()))?;
        pack(&bits, width, height)
    }
}
