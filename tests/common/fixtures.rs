//! Test fixtures and constants.

use image::{Rgba, RgbaImage};
use std::path::Path;

/// Corpus colors used across scenarios
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];

    /// The four-color corpus used by the palette scenarios
    pub const PRIMARY_FOUR: [[u8; 3]; 4] = [RED, GREEN, BLUE, YELLOW];
}

/// Opaque solid-color image
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Smooth gradient, so downsampling has something to average
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ])
    })
}

/// Write `image` as PNG at `path`, creating parents
pub fn write_png(path: &Path, image: &RgbaImage) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image.save(path).unwrap();
}

/// Write bytes that no decoder accepts under an image extension
pub fn write_garbage(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"this is not an image").unwrap();
}
