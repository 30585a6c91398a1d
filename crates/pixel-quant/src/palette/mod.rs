//! Palette learning
//!
//! Colors are first subsampled from each corpus image with
//! [`sample_colors`], then pooled and clustered by [`build_palette`]
//! (Lloyd's k-means). The resulting centroids are wrapped in a [`Palette`]
//! for quantization.

mod kmeans;
mod palette;
mod sample;

pub use kmeans::build_palette;
pub use palette::Palette;
pub use sample::sample_colors;
