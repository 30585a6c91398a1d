//! Working grid: downsampling into cells and block upscaling out of them.

use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgba, RgbaImage};

use crate::color::ColorVec;
use crate::error::QuantError;

/// A row-major 2D array of cells, one per output block.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingGrid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> WorkingGrid<T> {
    /// Wrap `cells` (row-major, `width * height` long).
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<T>) -> Self {
        debug_assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cells length must match grid {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Cell at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> &T {
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Apply `f` to every cell, keeping the grid shape.
    pub fn map<U, F>(self, f: F) -> WorkingGrid<U>
    where
        F: FnMut(T) -> U,
    {
        WorkingGrid {
            width: self.width,
            height: self.height,
            cells: self.cells.into_iter().map(f).collect(),
        }
    }
}

/// Resolve the grid height for a source image.
///
/// A non-zero `cells_high` is used as given. Zero derives it from the
/// source aspect ratio: `max(1, round(cells_wide * height / width))`.
pub fn resolve_grid_height(
    cells_wide: u32,
    cells_high: u32,
    src_width: u32,
    src_height: u32,
) -> u32 {
    if cells_high != 0 {
        return cells_high;
    }
    let ratio = f64::from(src_height) / f64::from(src_width);
    ((f64::from(cells_wide) * ratio).round() as u32).max(1)
}

/// Validate the grid request against the source and return the final
/// `(cells_wide, cells_high)`.
pub(crate) fn grid_dimensions<I>(
    source: &I,
    cells_wide: u32,
    cells_high: u32,
) -> Result<(u32, u32), QuantError>
where
    I: GenericImageView,
{
    let (w, h) = source.dimensions();
    if w == 0 || h == 0 {
        return Err(QuantError::InvalidDimensions(format!(
            "source image is {w}x{h}"
        )));
    }
    if cells_wide == 0 {
        return Err(QuantError::InvalidDimensions("grid width is zero".into()));
    }
    Ok((cells_wide, resolve_grid_height(cells_wide, cells_high, w, h)))
}

/// Multiply a grid extent by a block size, rejecting zero and overflow.
pub(crate) fn scaled(extent: u32, factor: u32, what: &str) -> Result<u32, QuantError> {
    if factor == 0 {
        return Err(QuantError::InvalidDimensions(format!("{what} is zero")));
    }
    extent.checked_mul(factor).ok_or_else(|| {
        QuantError::InvalidDimensions(format!("{extent} cells x {what} {factor} overflows"))
    })
}

/// Downsample `source` to a `width × height` grid of colors with a smooth
/// (triangle / bilinear) filter. Cells are premultiplied by alpha, so
/// transparency reads as black.
pub fn downsample<I>(source: &I, width: u32, height: u32) -> WorkingGrid<ColorVec>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let small = imageops::resize(source, width, height, FilterType::Triangle);
    let cells = small.pixels().map(|p| ColorVec::from_rgba(*p)).collect();
    WorkingGrid::new(width, height, cells)
}

/// Nearest-neighbor upscale: each cell becomes a flat `factor × factor`
/// opaque block.
pub fn upscale_blocks(grid: &WorkingGrid<ColorVec>, factor: u32) -> RgbaImage {
    let pixels: Vec<Rgba<u8>> = grid.cells().iter().map(|c| c.to_rgba()).collect();
    let width = grid.width();
    RgbaImage::from_fn(width * factor, grid.height() * factor, |x, y| {
        pixels[(y / factor) as usize * width as usize + (x / factor) as usize]
    })
}
