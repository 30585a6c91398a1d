use pixel_quant::{build_palette, sample_colors, ColorVec, Palette};
use rand::Rng;
use std::path::Path;

use crate::error::CorpusError;
use crate::services::codec::decode_image;
use crate::services::corpus::scan_images;

/// Learn a palette of `palette_size` colors from the images under `dir`.
///
/// At most `max_images` corpus files are read (0 = all), in path order, and
/// each contributes up to `samples_per_image` colors (0 = every pixel).
/// Undecodable files are logged and skipped.
pub fn build_palette_from_dir<R: Rng + ?Sized>(
    dir: &Path,
    palette_size: usize,
    samples_per_image: usize,
    max_images: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<Palette, CorpusError> {
    let mut paths = scan_images(dir);
    if paths.is_empty() {
        return Err(CorpusError::CorpusEmpty(dir.to_path_buf()));
    }
    if max_images > 0 && paths.len() > max_images {
        tracing::debug!(found = paths.len(), max_images, "Limiting palette corpus");
        paths.truncate(max_images);
    }

    let mut samples: Vec<ColorVec> = Vec::new();
    let mut images_used = 0usize;
    for path in &paths {
        match decode_image(path) {
            Ok(image) => {
                samples.extend(sample_colors(&image, samples_per_image));
                images_used += 1;
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping corpus image"),
        }
    }

    if samples.is_empty() {
        return Err(CorpusError::NoSamplesCollected(dir.to_path_buf()));
    }

    let colors = build_palette(&samples, palette_size, iterations, rng);
    let palette = Palette::new(colors)?;

    tracing::info!(
        images = images_used,
        samples = samples.len(),
        colors = palette.len(),
        "Palette built"
    );

    Ok(palette)
}
