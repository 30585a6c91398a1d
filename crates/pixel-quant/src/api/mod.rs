//! Public builder API.
//!
//! [`PixelArtRenderer`] and [`MosaicRenderer`] are the recommended entry
//! points; the free functions in [`transform`](crate::transform) are the
//! building blocks underneath.

mod builder;

pub use builder::{MosaicRenderer, PixelArtRenderer, DEFAULT_CELLS_WIDE, DEFAULT_UPSCALE};
