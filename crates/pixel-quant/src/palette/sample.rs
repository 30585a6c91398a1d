//! Grid subsampling of image colors.

use image::{GenericImageView, Rgba};

use crate::color::ColorVec;

/// Sample up to `max_samples` colors from `image` on a regular grid.
///
/// The stride is `ceil(sqrt(area / max_samples))` (at least 1) in both
/// directions, so sampling density adapts to the image size. The scan is
/// row-major and stops as soon as `max_samples` colors are collected.
/// `max_samples == 0` samples every pixel.
///
/// Deterministic: the same image always yields the same samples.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pixel_quant::sample_colors;
///
/// let img = RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 255]));
/// let samples = sample_colors(&img, 50);
/// assert!(samples.len() <= 50);
/// ```
pub fn sample_colors<I>(image: &I, max_samples: usize) -> Vec<ColorVec>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let area = width as usize * height as usize;
    if area == 0 {
        return Vec::new();
    }

    let max_samples = if max_samples == 0 { area } else { max_samples };
    let step = ((area as f64 / max_samples as f64).sqrt().ceil() as u32).max(1);

    let mut out = Vec::with_capacity(max_samples.min(area));
    for y in (0..height).step_by(step as usize) {
        for x in (0..width).step_by(step as usize) {
            out.push(ColorVec::from_rgba(image.get_pixel(x, y)));
            if out.len() >= max_samples {
                return out;
            }
        }
    }
    out
}
