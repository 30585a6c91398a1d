//! Image transforms
//!
//! Both output modes share one shape:
//!
//! ```text
//! source image
//!     |
//!     v
//! downsample (triangle filter)  ->  WorkingGrid<ColorVec>
//!     |
//!     +--> palette mode: nearest palette color per cell
//!     |        |
//!     |     upscale_blocks (nearest-neighbor, flat blocks)
//!     |
//!     +--> mosaic mode: nearest tile per cell
//!              |
//!           copy tile thumbnail into each cell's region
//! ```
//!
//! The downsample is smooth so every cell carries the average look of the
//! area it covers; the upscale is nearest-neighbor so cells stay hard-edged.

mod grid;
mod mosaic;
mod pixel_art;

pub use grid::{downsample, resolve_grid_height, upscale_blocks, WorkingGrid};
pub use mosaic::render_mosaic;
pub use pixel_art::render_pixel_art;
