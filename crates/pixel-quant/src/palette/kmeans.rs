//! Lloyd's k-means over RGB samples.

use rand::seq::index;
use rand::Rng;

use crate::color::ColorVec;

/// Learn `k` representative colors from `samples`.
///
/// - Empty `samples` or `k == 0` yields an empty list.
/// - `k >= samples.len()` returns the samples unchanged, in order.
/// - Otherwise runs Lloyd's algorithm for at most `max_iterations` rounds,
///   starting from `k` distinct random samples. A centroid that loses all its
///   samples is moved to a random sample. Iteration stops early once a round
///   leaves every assignment unchanged.
///
/// Centroids come back in initialization order, not sorted. All randomness is
/// drawn from `rng`, so a seeded generator makes the result repeatable.
///
/// # Example
///
/// ```
/// use pixel_quant::{build_palette, ColorVec};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let samples = vec![
///     ColorVec::from_u8(0, 0, 0),
///     ColorVec::from_u8(2, 2, 2),
///     ColorVec::from_u8(250, 250, 250),
///     ColorVec::from_u8(254, 254, 254),
/// ];
/// let palette = build_palette(&samples, 2, 10, &mut StdRng::seed_from_u64(7));
/// assert_eq!(palette.len(), 2);
/// ```
pub fn build_palette<R>(
    samples: &[ColorVec],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Vec<ColorVec>
where
    R: Rng + ?Sized,
{
    let n = samples.len();
    if n == 0 || k == 0 {
        return Vec::new();
    }
    if k >= n {
        return samples.to_vec();
    }

    let mut centroids: Vec<ColorVec> = index::sample(rng, n, k)
        .into_iter()
        .map(|i| samples[i])
        .collect();

    let mut labels = vec![0usize; n];
    let mut sums = vec![ColorVec::default(); k];
    let mut counts = vec![0usize; k];

    for iter in 0..max_iterations {
        let mut changed = false;
        for (label, &sample) in labels.iter_mut().zip(samples) {
            let best = closest_centroid(sample, &centroids);
            if *label != best {
                *label = best;
                changed = true;
            }
        }
        if !changed && iter > 0 {
            break;
        }

        sums.fill(ColorVec::default());
        counts.fill(0);
        for (&label, &sample) in labels.iter().zip(samples) {
            sums[label] += sample;
            counts[label] += 1;
        }

        for (j, centroid) in centroids.iter_mut().enumerate() {
            *centroid = if counts[j] > 0 {
                sums[j] / counts[j] as f64
            } else {
                samples[rng.gen_range(0..n)]
            };
        }
    }

    centroids
}

/// Lowest-index centroid at minimum squared distance.
#[inline]
fn closest_centroid(sample: ColorVec, centroids: &[ColorVec]) -> usize {
    let mut best = 0;
    let mut best_dist = sample.dist_sq(centroids[0]);
    for (j, &c) in centroids.iter().enumerate().skip(1) {
        let d = sample.dist_sq(c);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }
    best
}
