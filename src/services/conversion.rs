//! Per-image conversion: decode, render, encode, write.

use image::RgbaImage;
use pixel_quant::{MosaicRenderer, PixelArtRenderer, QuantError};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ConvertError, CorpusError};
use crate::models::{AppConfig, RenderMode};
use crate::services::codec::{decode_image, save_png};
use crate::services::palette_builder::build_palette_from_dir;
use crate::services::tile_loader::build_tile_library;

/// A configured renderer for one of the two output modes.
#[derive(Debug, Clone)]
pub enum Renderer {
    PixelArt(PixelArtRenderer),
    Mosaic(MosaicRenderer),
}

impl Renderer {
    pub fn mode(&self) -> RenderMode {
        match self {
            Self::PixelArt(_) => RenderMode::PixelArt,
            Self::Mosaic(_) => RenderMode::Mosaic,
        }
    }

    /// Render one decoded image. `path` only labels progress logs.
    pub fn render(&self, image: &RgbaImage, path: &Path) -> Result<RgbaImage, QuantError> {
        match self {
            Self::PixelArt(renderer) => renderer.render(image),
            Self::Mosaic(renderer) => renderer.render_with_progress(image, |done, total| {
                // Roughly every tenth of the grid
                if done == total || done * 10 / total != (done - 1) * 10 / total {
                    tracing::trace!(path = %path.display(), done, total, "Mosaic progress");
                }
            }),
        }
    }
}

/// Shared conversion state handed to every worker.
///
/// Cloning is cheap: the renderer (and its palette or tile library) sits
/// behind an `Arc` and is never mutated.
#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    renderer: Arc<Renderer>,
    input_root: PathBuf,
    output_root: PathBuf,
}

impl ConversionPipeline {
    pub fn new(
        renderer: Renderer,
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer: Arc::new(renderer),
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Build the palette (or tile library) described by `config` and wrap it
    /// in a pipeline. `rng` drives palette learning only.
    pub fn from_config<R: Rng + ?Sized>(
        config: &AppConfig,
        rng: &mut R,
    ) -> Result<Self, CorpusError> {
        let renderer = match config.mode() {
            RenderMode::PixelArt => {
                let palette = build_palette_from_dir(
                    &config.corpus_dir,
                    config.palette_size,
                    config.samples_per_image,
                    config.max_palette_images,
                    config.kmeans_iterations,
                    rng,
                )?;
                Renderer::PixelArt(
                    PixelArtRenderer::new(palette)
                        .cells(config.cells_wide, config.cells_high)
                        .upscale(config.upscale),
                )
            }
            RenderMode::Mosaic => {
                let library = build_tile_library(&config.corpus_dir, config.tile_size)?;
                Renderer::Mosaic(
                    MosaicRenderer::new(library).grid(config.cells_wide, config.cells_high),
                )
            }
        };

        Ok(Self::new(renderer, &config.input_dir, &config.output_dir))
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn mode(&self) -> RenderMode {
        self.renderer.mode()
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Where the conversion of `input` is written.
    ///
    /// The path relative to the input root is mirrored under the output
    /// root, with the extension replaced by the mode suffix and `.png`.
    /// Inputs outside the input root land directly in the output root.
    ///
    /// The mapping is not injective: `a.png` and `a.jpg` in one directory
    /// both map to `a_pixel.png`. [`BatchRunner`](crate::services::BatchRunner)
    /// converts only the first input claiming an output.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let rel = match input.strip_prefix(&self.input_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => PathBuf::from(input.file_name().unwrap_or_default()),
        };
        let stem = rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{stem}{}.png", self.mode().suffix());
        self.output_root.join(rel.with_file_name(file_name))
    }

    /// Convert one input file and return the path written.
    pub fn convert_one(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let image = decode_image(input)?;
        let rendered = self.renderer.render(&image, input)?;

        let output = self.output_path(input);
        let bytes = save_png(&rendered, &output)?;

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            width = rendered.width(),
            height = rendered.height(),
            bytes,
            "Converted image"
        );
        Ok(output)
    }
}
