//! Assertion helpers for tests.

use image::{Rgba, RgbaImage};
use pixel_quant::ColorVec;
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert the file at `path` is a PNG and decode it
pub fn assert_png_file(path: &Path) -> RgbaImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output file {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(&bytes).unwrap().into_rgba8()
}

/// Assert image dimensions
pub fn assert_dimensions(image: &RgbaImage, width: u32, height: u32) {
    assert_eq!(
        image.dimensions(),
        (width, height),
        "Unexpected output dimensions"
    );
}

/// Assert every `block × block` region is a single color from `allowed`
pub fn assert_flat_blocks(image: &RgbaImage, block: u32, allowed: &[Rgba<u8>]) {
    let (w, h) = image.dimensions();
    assert_eq!((w % block, h % block), (0, 0), "Image not a whole number of blocks");

    for by in 0..h / block {
        for bx in 0..w / block {
            let first = *image.get_pixel(bx * block, by * block);
            assert!(
                allowed.contains(&first),
                "Block ({bx},{by}) has color {first:?}, not in palette"
            );
            for dy in 0..block {
                for dx in 0..block {
                    assert_eq!(
                        *image.get_pixel(bx * block + dx, by * block + dy),
                        first,
                        "Block ({bx},{by}) is not flat"
                    );
                }
            }
        }
    }
}

/// Assert two color lists hold the same colors, ignoring order
pub fn assert_same_colors(actual: &[ColorVec], expected: &[[u8; 3]]) {
    let mut actual: Vec<[u8; 3]> = actual.iter().map(|c| c.to_bytes()).collect();
    let mut expected = expected.to_vec();
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected);
}
