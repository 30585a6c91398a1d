use std::path::PathBuf;

use pixel_quant::QuantError;
use thiserror::Error;

/// Failures building the shared palette or tile library.
///
/// All variants are fatal: nothing useful can be converted without a
/// palette or tile library, so the run stops before any image is processed.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("No images found in corpus directory {}", .0.display())]
    CorpusEmpty(PathBuf),

    #[error("No color samples collected from {}", .0.display())]
    NoSamplesCollected(PathBuf),

    #[error("No valid tiles found in {}", .0.display())]
    NoValidTiles(PathBuf),

    #[error("Engine error: {0}")]
    Quant(#[from] QuantError),
}

/// Failures converting a single input image.
///
/// Recoverable: the batch logs the error, skips the image and carries on.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Render error: {0}")]
    Render(#[from] QuantError),

    #[error("PNG encode error for {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output {} is already written by {}", output.display(), first.display())]
    DuplicateOutput { output: PathBuf, first: PathBuf },
}

/// Failures loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
