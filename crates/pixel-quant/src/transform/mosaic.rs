//! Mosaic mode.

use image::imageops;
use image::{GenericImageView, Rgba, RgbaImage};

use super::grid::{downsample, grid_dimensions, scaled};
use crate::error::QuantError;
use crate::tile::TileLibrary;

/// Render `source` as a photo-mosaic built from `library`.
///
/// The source is downsampled to `grid_wide × grid_high` target colors (a
/// zero `grid_high` keeps the aspect ratio). Each cell picks the tile with
/// the nearest average color and that tile's thumbnail is copied, pixel for
/// pixel, into the cell's `tile_size × tile_size` region of the output.
///
/// `on_cell(done, total)` is called after every composited cell.
///
/// # Errors
///
/// [`QuantError::InvalidDimensions`] for a zero-area source, zero
/// `grid_wide`, or an output size that overflows `u32`.
pub fn render_mosaic<I, F>(
    source: &I,
    library: &TileLibrary,
    grid_wide: u32,
    grid_high: u32,
    mut on_cell: F,
) -> Result<RgbaImage, QuantError>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
    F: FnMut(usize, usize),
{
    let tile_size = library.tile_size();
    let (gw, gh) = grid_dimensions(source, grid_wide, grid_high)?;
    let out_w = scaled(gw, tile_size, "tile size")?;
    let out_h = scaled(gh, tile_size, "tile size")?;

    let choices = downsample(source, gw, gh).map(|c| library.nearest_index(c));

    let total = choices.cells().len();
    let mut out = RgbaImage::new(out_w, out_h);
    for (i, &tile_idx) in choices.cells().iter().enumerate() {
        let x = (i as u32 % gw) * tile_size;
        let y = (i as u32 / gw) * tile_size;
        let tile = &library.tiles()[tile_idx];
        imageops::replace(&mut out, tile.image(), i64::from(x), i64::from(y));
        on_cell(i + 1, total);
    }
    Ok(out)
}
