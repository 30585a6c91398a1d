//! Palette (pixel-art) mode.

use image::{GenericImageView, Rgba, RgbaImage};

use super::grid::{downsample, grid_dimensions, scaled, upscale_blocks};
use crate::error::QuantError;
use crate::palette::Palette;

/// Render `source` as pixel art.
///
/// 1. Downsample to `cells_wide × cells_high` (smooth filter); a zero
///    `cells_high` keeps the source aspect ratio.
/// 2. Replace every cell with its nearest palette color.
/// 3. Upscale by `upscale` with flat blocks.
///
/// The output is exactly `cells_wide * upscale × cells_high * upscale`.
///
/// # Errors
///
/// [`QuantError::InvalidDimensions`] for a zero-area source, zero
/// `cells_wide`, zero `upscale`, or an output size that overflows `u32`.
pub fn render_pixel_art<I>(
    source: &I,
    palette: &Palette,
    cells_wide: u32,
    cells_high: u32,
    upscale: u32,
) -> Result<RgbaImage, QuantError>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (gw, gh) = grid_dimensions(source, cells_wide, cells_high)?;
    scaled(gw, upscale, "upscale factor")?;
    scaled(gh, upscale, "upscale factor")?;

    let quantized = downsample(source, gw, gh).map(|c| palette.quantize(c));
    Ok(upscale_blocks(&quantized, upscale))
}
