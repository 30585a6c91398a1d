//! Renderer builders -- the ergonomic entry points for the crate.
//!
//! [`PixelArtRenderer`] and [`MosaicRenderer`] bundle a read-only palette or
//! tile library with grid settings behind a fluent builder API.

use image::{GenericImageView, Rgba, RgbaImage};

use crate::error::QuantError;
use crate::palette::Palette;
use crate::tile::TileLibrary;
use crate::transform::{render_mosaic, render_pixel_art};

/// Default grid width in cells.
pub const DEFAULT_CELLS_WIDE: u32 = 64;

/// Default pixel-art upscale factor.
pub const DEFAULT_UPSCALE: u32 = 8;

/// High-level pixel-art renderer.
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so one renderer can be shared
///   by many worker threads
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pixel_quant::{ColorVec, Palette, PixelArtRenderer};
///
/// let black_white = vec![ColorVec::from_u8(0, 0, 0), ColorVec::from_u8(255, 255, 255)];
/// let palette = Palette::new(black_white).unwrap();
/// let renderer = PixelArtRenderer::new(palette).cells(4, 0).upscale(2);
///
/// let source = RgbaImage::from_pixel(40, 20, Rgba([200, 200, 200, 255]));
/// let out = renderer.render(&source).unwrap();
/// assert_eq!(out.dimensions(), (8, 4));
/// ```
#[derive(Debug, Clone)]
pub struct PixelArtRenderer {
    palette: Palette,
    cells_wide: u32,
    cells_high: u32,
    upscale: u32,
}

impl PixelArtRenderer {
    /// Create a renderer with default grid settings: 64 cells wide, height
    /// from the source aspect ratio, upscale 8.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            cells_wide: DEFAULT_CELLS_WIDE,
            cells_high: 0,
            upscale: DEFAULT_UPSCALE,
        }
    }

    /// Set the grid size. A zero `high` derives it from each source image.
    #[inline]
    pub fn cells(mut self, wide: u32, high: u32) -> Self {
        self.cells_wide = wide;
        self.cells_high = high;
        self
    }

    /// Set the block size of each output cell.
    #[inline]
    pub fn upscale(mut self, factor: u32) -> Self {
        self.upscale = factor;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize `source` into a pixel-art raster.
    pub fn render<I>(&self, source: &I) -> Result<RgbaImage, QuantError>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        render_pixel_art(
            source,
            &self.palette,
            self.cells_wide,
            self.cells_high,
            self.upscale,
        )
    }
}

/// High-level photo-mosaic renderer.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pixel_quant::{MosaicRenderer, Tile, TileLibrary};
///
/// let tile = Tile::from_thumbnail(RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255])));
/// let library = TileLibrary::new(vec![tile]).unwrap();
/// let renderer = MosaicRenderer::new(library).grid(3, 2);
///
/// let source = RgbaImage::from_pixel(30, 20, Rgba([0, 0, 0, 255]));
/// let out = renderer.render(&source).unwrap();
/// assert_eq!(out.dimensions(), (12, 8));
/// ```
#[derive(Debug, Clone)]
pub struct MosaicRenderer {
    library: TileLibrary,
    grid_wide: u32,
    grid_high: u32,
}

impl MosaicRenderer {
    /// Create a renderer 64 tiles wide with aspect-derived height.
    pub fn new(library: TileLibrary) -> Self {
        Self {
            library,
            grid_wide: DEFAULT_CELLS_WIDE,
            grid_high: 0,
        }
    }

    /// Set the mosaic grid in tiles. A zero `high` derives it from each
    /// source image.
    #[inline]
    pub fn grid(mut self, wide: u32, high: u32) -> Self {
        self.grid_wide = wide;
        self.grid_high = high;
        self
    }

    #[inline]
    pub fn library(&self) -> &TileLibrary {
        &self.library
    }

    /// Compose a mosaic of `source`.
    pub fn render<I>(&self, source: &I) -> Result<RgbaImage, QuantError>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        self.render_with_progress(source, |_, _| {})
    }

    /// Compose a mosaic, reporting `(done, total)` after every cell.
    pub fn render_with_progress<I, F>(
        &self,
        source: &I,
        on_cell: F,
    ) -> Result<RgbaImage, QuantError>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
        F: FnMut(usize, usize),
    {
        render_mosaic(source, &self.library, self.grid_wide, self.grid_high, on_cell)
    }
}
