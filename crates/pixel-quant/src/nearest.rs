//! Nearest-match lookup shared by palette quantization and tile selection.
//!
//! A plain linear scan: palettes are tens of entries and tile libraries a few
//! hundred, so a spatial index would not pay for itself.

use crate::color::ColorVec;
use crate::error::QuantError;

/// Index of the candidate whose color is closest to `query`.
///
/// Ties resolve to the first minimum encountered (strict `<`).
///
/// # Errors
///
/// [`QuantError::EmptyCandidateSet`] when `candidates` is empty.
pub fn nearest_index<T, F>(
    query: ColorVec,
    candidates: &[T],
    color_of: F,
) -> Result<usize, QuantError>
where
    F: Fn(&T) -> ColorVec,
{
    let mut iter = candidates.iter().enumerate();
    let (_, first) = iter.next().ok_or(QuantError::EmptyCandidateSet)?;

    let mut best = 0;
    let mut best_dist = query.dist_sq(color_of(first));
    for (i, candidate) in iter {
        let d = query.dist_sq(color_of(candidate));
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    Ok(best)
}

/// The candidate whose color is closest to `query`.
///
/// # Example
///
/// ```
/// use pixel_quant::{nearest, ColorVec};
///
/// let palette = [ColorVec::from_u8(0, 0, 0), ColorVec::from_u8(255, 255, 255)];
/// let hit = nearest(ColorVec::from_u8(200, 200, 200), &palette, |c| *c).unwrap();
/// assert_eq!(*hit, ColorVec::from_u8(255, 255, 255));
/// ```
pub fn nearest<'a, T, F>(
    query: ColorVec,
    candidates: &'a [T],
    color_of: F,
) -> Result<&'a T, QuantError>
where
    F: Fn(&T) -> ColorVec,
{
    nearest_index(query, candidates, color_of).map(|i| &candidates[i])
}
