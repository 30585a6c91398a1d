use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::RenderMode;

/// Run configuration loaded from a YAML file, then overridden from the CLI.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory of corpus images (palette samples or mosaic tiles)
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: PathBuf,

    /// Directory of images to convert, walked recursively
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Output root; the input tree is mirrored underneath
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Number of palette colors (k)
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,

    /// Color samples taken from each corpus image (0 = every pixel)
    #[serde(default = "default_samples_per_image")]
    pub samples_per_image: usize,

    /// Corpus images used for palette learning (0 = all)
    #[serde(default = "default_max_palette_images")]
    pub max_palette_images: usize,

    #[serde(default = "default_kmeans_iterations")]
    pub kmeans_iterations: usize,

    /// Output grid width in cells (tiles in mosaic mode)
    #[serde(default = "default_cells_wide")]
    pub cells_wide: u32,

    /// Output grid height in cells; 0 follows the source aspect ratio
    #[serde(default)]
    pub cells_high: u32,

    /// Edge length in output pixels of one pixel-art block
    #[serde(default = "default_upscale")]
    pub upscale: u32,

    /// Edge length in pixels of one mosaic tile thumbnail
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Render photo-mosaics instead of pixel art
    #[serde(default)]
    pub mosaic: bool,

    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Seed for palette learning; unset draws one from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("./palette_images")
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("./input")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./out")
}

fn default_palette_size() -> usize {
    32
}

fn default_samples_per_image() -> usize {
    500
}

fn default_max_palette_images() -> usize {
    200
}

fn default_kmeans_iterations() -> usize {
    40
}

fn default_cells_wide() -> u32 {
    64
}

fn default_upscale() -> u32 {
    8
}

fn default_tile_size() -> u32 {
    16
}

fn default_workers() -> usize {
    4
}

/// Command-line values that take precedence over the config file.
///
/// `None` leaves the file (or default) value in place.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub corpus_dir: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub palette_size: Option<usize>,
    pub samples_per_image: Option<usize>,
    pub max_palette_images: Option<usize>,
    pub kmeans_iterations: Option<usize>,
    pub cells_wide: Option<u32>,
    pub cells_high: Option<u32>,
    pub upscale: Option<u32>,
    pub tile_size: Option<u32>,
    pub mosaic: bool,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Read and parse a YAML config file.
    ///
    /// The result is not validated; call [`validate`](Self::validate) after
    /// applying CLI overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.corpus_dir {
            self.corpus_dir = v;
        }
        if let Some(v) = overrides.input_dir {
            self.input_dir = v;
        }
        if let Some(v) = overrides.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = overrides.palette_size {
            self.palette_size = v;
        }
        if let Some(v) = overrides.samples_per_image {
            self.samples_per_image = v;
        }
        if let Some(v) = overrides.max_palette_images {
            self.max_palette_images = v;
        }
        if let Some(v) = overrides.kmeans_iterations {
            self.kmeans_iterations = v;
        }
        if let Some(v) = overrides.cells_wide {
            self.cells_wide = v;
        }
        if let Some(v) = overrides.cells_high {
            self.cells_high = v;
        }
        if let Some(v) = overrides.upscale {
            self.upscale = v;
        }
        if let Some(v) = overrides.tile_size {
            self.tile_size = v;
        }
        // A flag can only switch mosaic mode on
        if overrides.mosaic {
            self.mosaic = true;
        }
        if let Some(v) = overrides.workers {
            self.workers = v;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Reject settings that would fail every conversion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.palette_size == 0, "palette_size must be at least 1"),
            (self.cells_wide == 0, "cells_wide must be at least 1"),
            (self.upscale == 0, "upscale must be at least 1"),
            (self.tile_size == 0, "tile_size must be at least 1"),
            (self.workers == 0, "workers must be at least 1"),
        ];
        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, message)) => Err(ConfigError::Invalid((*message).to_string())),
            None => Ok(()),
        }
    }

    pub fn mode(&self) -> RenderMode {
        if self.mosaic {
            RenderMode::Mosaic
        } else {
            RenderMode::PixelArt
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            palette_size: default_palette_size(),
            samples_per_image: default_samples_per_image(),
            max_palette_images: default_max_palette_images(),
            kmeans_iterations: default_kmeans_iterations(),
            cells_wide: default_cells_wide(),
            cells_high: 0,
            upscale: default_upscale(),
            tile_size: default_tile_size(),
            mosaic: false,
            workers: default_workers(),
            seed: None,
        }
    }
}
