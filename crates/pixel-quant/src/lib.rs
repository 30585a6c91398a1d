#![allow(clippy::module_inception)]

//! pixel-quant: palette learning and pixel-art / photo-mosaic transforms
//!
//! This library turns photographs into blocky pixel art quantized to a
//! learned palette, or into photo-mosaics assembled from thumbnail tiles.
//! It does no file I/O: callers hand it decoded images and get owned
//! [`image::RgbaImage`] rasters back.
//!
//! # Quick Start
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use pixel_quant::{build_palette, sample_colors, Palette, PixelArtRenderer};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // 1. Learn a palette from a corpus image
//! let corpus = RgbaImage::from_fn(32, 32, |x, _| {
//!     if x < 16 { Rgba([20, 40, 200, 255]) } else { Rgba([240, 200, 30, 255]) }
//! });
//! let samples = sample_colors(&corpus, 500);
//! let colors = build_palette(&samples, 2, 40, &mut StdRng::seed_from_u64(1));
//! let palette = Palette::new(colors).unwrap();
//!
//! // 2. Render any image with it
//! let renderer = PixelArtRenderer::new(palette).cells(8, 0).upscale(4);
//! let photo = RgbaImage::from_pixel(64, 32, Rgba([30, 50, 180, 255]));
//! let art = renderer.render(&photo).unwrap();
//!
//! assert_eq!(art.dimensions(), (32, 16));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! corpus images --sample_colors--> samples --build_palette--> Palette
//! corpus images --Tile::from_image-------------------------> TileLibrary
//!
//! source --downsample--> grid --nearest palette color--> upscale_blocks --> pixel art
//! source --downsample--> grid --nearest tile-----------> tile copies   --> mosaic
//! ```
//!
//! # Color Distance
//!
//! Every lookup (k-means assignment, palette quantization, tile selection)
//! uses squared Euclidean distance in plain RGB, and every minimum search
//! resolves ties to the first candidate seen.
//!
//! # Randomness
//!
//! [`build_palette`] draws centroid initialization and empty-cluster
//! resets from the `rand::Rng` it is given. Pass a seeded generator for
//! repeatable palettes; with an entropy-seeded one, two runs over the same
//! input can return different (but equally representative) palettes.
//!
//! # Sharing
//!
//! [`Palette`], [`TileLibrary`] and the renderers are immutable after
//! construction and `Send + Sync`; render many images in parallel from one
//! shared instance.

pub mod api;
pub mod color;
pub mod error;
pub mod nearest;
pub mod palette;
pub mod tile;
pub mod transform;

#[cfg(test)]
mod domain_tests;

pub use api::{MosaicRenderer, PixelArtRenderer};
pub use color::ColorVec;
pub use error::QuantError;
pub use nearest::{nearest, nearest_index};
pub use palette::{build_palette, sample_colors, Palette};
pub use tile::{average_color, Tile, TileLibrary};
pub use transform::{render_mosaic, render_pixel_art, WorkingGrid};
