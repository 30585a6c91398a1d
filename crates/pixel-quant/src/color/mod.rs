//! Color representation and arithmetic
//!
//! All color math in the engine happens on plain sRGB byte values lifted to
//! `f64`. There is one color space and one metric: squared Euclidean
//! distance in RGB.
//!
//! # Example
//!
//! ```
//! use pixel_quant::ColorVec;
//!
//! let sample = ColorVec::from_u8(200, 10, 10);
//! let red = ColorVec::from_u8(255, 0, 0);
//! let black = ColorVec::from_u8(0, 0, 0);
//!
//! assert!(sample.dist_sq(red) < sample.dist_sq(black));
//! ```

mod vector;

pub use vector::ColorVec;
