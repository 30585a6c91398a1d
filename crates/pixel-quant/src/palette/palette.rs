//! The read-only `Palette` used for quantization.

use crate::color::ColorVec;
use crate::error::QuantError;
use crate::nearest::nearest_index;

/// An ordered, non-empty set of representative colors.
///
/// A `Palette` is built once (usually from [`build_palette`](crate::build_palette))
/// and never changes afterwards, so it can be shared by reference across
/// worker threads without synchronization.
///
/// # Example
///
/// ```
/// use pixel_quant::{ColorVec, Palette};
///
/// let palette = Palette::new(vec![
///     ColorVec::from_u8(0, 0, 0),
///     ColorVec::from_u8(255, 255, 255),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.quantize(ColorVec::from_u8(30, 30, 30)), ColorVec::from_u8(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<ColorVec>,
}

impl Palette {
    /// Wrap `colors` as a palette.
    ///
    /// # Errors
    ///
    /// [`QuantError::EmptyCandidateSet`] if `colors` is empty.
    pub fn new(colors: Vec<ColorVec>) -> Result<Self, QuantError> {
        if colors.is_empty() {
            return Err(QuantError::EmptyCandidateSet);
        }
        Ok(Self { colors })
    }

    /// Number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette entries, in the order they were learned.
    #[inline]
    pub fn colors(&self) -> &[ColorVec] {
        &self.colors
    }

    /// Index of the entry nearest to `color`.
    #[inline]
    pub fn nearest_index(&self, color: ColorVec) -> usize {
        // Non-empty by construction, so the lookup cannot fail.
        nearest_index(color, &self.colors, |c| *c).unwrap_or(0)
    }

    /// The entry nearest to `color`.
    #[inline]
    pub fn quantize(&self, color: ColorVec) -> ColorVec {
        self.colors[self.nearest_index(color)]
    }
}
