//! Mosaic tiles and the tile library
//!
//! A [`Tile`] is a square thumbnail keyed by its average color. A
//! [`TileLibrary`] is the read-only set of tiles a mosaic is assembled from;
//! like [`Palette`](crate::Palette) it is built once and shared.

use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgba, RgbaImage};

use crate::color::ColorVec;
use crate::error::QuantError;
use crate::nearest::nearest_index;

/// A fixed-size thumbnail plus its average color.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    image: RgbaImage,
    average: ColorVec,
}

impl Tile {
    /// Resize `source` to exactly `tile_size × tile_size` (triangle filter)
    /// and key it by the average color of the result.
    ///
    /// # Errors
    ///
    /// [`QuantError::InvalidDimensions`] if `tile_size` is zero or `source`
    /// has no pixels.
    pub fn from_image<I>(source: &I, tile_size: u32) -> Result<Self, QuantError>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        if tile_size == 0 {
            return Err(QuantError::InvalidDimensions("tile size is zero".into()));
        }
        let (w, h) = source.dimensions();
        if w == 0 || h == 0 {
            return Err(QuantError::InvalidDimensions(format!(
                "tile source is {w}x{h}"
            )));
        }

        let image = imageops::resize(source, tile_size, tile_size, FilterType::Triangle);
        Ok(Self::from_thumbnail(image))
    }

    /// Use an already-sized thumbnail as a tile.
    pub fn from_thumbnail(image: RgbaImage) -> Self {
        let average = average_color(&image);
        Self { image, average }
    }

    /// The tile thumbnail.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The lookup key: mean color of the thumbnail.
    #[inline]
    pub fn average(&self) -> ColorVec {
        self.average
    }
}

/// Mean RGB color of every pixel in `image` (black for an empty image).
pub fn average_color(image: &RgbaImage) -> ColorVec {
    ColorVec::mean(image.pixels().map(|p| ColorVec::from_rgba(*p))).unwrap_or_default()
}

/// An ordered, non-empty set of same-sized tiles.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
    tile_size: u32,
}

impl TileLibrary {
    /// Build a library from `tiles`.
    ///
    /// # Errors
    ///
    /// - [`QuantError::EmptyCandidateSet`] if `tiles` is empty
    /// - [`QuantError::InvalidDimensions`] if the tiles are not all the same
    ///   square size
    pub fn new(tiles: Vec<Tile>) -> Result<Self, QuantError> {
        let first = tiles.first().ok_or(QuantError::EmptyCandidateSet)?;
        let tile_size = first.image.width();

        if let Some((i, bad)) = tiles
            .iter()
            .enumerate()
            .find(|(_, t)| t.image.dimensions() != (tile_size, tile_size))
        {
            let (w, h) = bad.image.dimensions();
            return Err(QuantError::InvalidDimensions(format!(
                "tile {i} is {w}x{h}, expected {tile_size}x{tile_size}"
            )));
        }
        if tile_size == 0 {
            return Err(QuantError::InvalidDimensions("tile size is zero".into()));
        }

        Ok(Self { tiles, tile_size })
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; empty libraries are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Edge length shared by every tile.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// All tiles, in insertion order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Index of the tile whose average color is nearest to `color`.
    #[inline]
    pub fn nearest_index(&self, color: ColorVec) -> usize {
        nearest_index(color, &self.tiles, Tile::average).unwrap_or(0)
    }

    /// The tile whose average color is nearest to `color`.
    #[inline]
    pub fn nearest(&self, color: ColorVec) -> &Tile {
        &self.tiles[self.nearest_index(color)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(size: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }

    #[test]
    fn test_average_color_solid() {
        assert_eq!(
            average_color(&solid(4, [10, 20, 30])),
            ColorVec::from_u8(10, 20, 30)
        );
    }

    #[test]
    fn test_average_color_halves() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([100, 200, 50, 255])
            }
        });
        assert_eq!(average_color(&img), ColorVec::new(50.0, 100.0, 25.0));
    }

    #[test]
    fn test_average_color_transparent_half_darkens() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([255, 255, 255, 0])
            } else {
                Rgba([100, 200, 50, 255])
            }
        });
        assert_eq!(average_color(&img), ColorVec::new(50.0, 100.0, 25.0));
    }

    #[test]
    fn test_average_color_empty_is_black() {
        assert_eq!(average_color(&RgbaImage::new(0, 0)), ColorVec::default());
    }

    #[test]
    fn test_from_image_resizes() {
        let tile = Tile::from_image(&solid(40, [200, 100, 0]), 8).unwrap();
        assert_eq!(tile.image().dimensions(), (8, 8));
        assert_eq!(tile.average(), ColorVec::from_u8(200, 100, 0));
    }

    #[test]
    fn test_from_image_non_square_source() {
        let src = RgbaImage::from_pixel(30, 7, Rgba([1, 2, 3, 255]));
        let tile = Tile::from_image(&src, 5).unwrap();
        assert_eq!(tile.image().dimensions(), (5, 5));
    }

    #[test]
    fn test_from_image_zero_size() {
        assert!(matches!(
            Tile::from_image(&solid(4, [0, 0, 0]), 0),
            Err(QuantError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Tile::from_image(&RgbaImage::new(0, 3), 4),
            Err(QuantError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_library_rejects_empty() {
        assert!(matches!(
            TileLibrary::new(Vec::new()),
            Err(QuantError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn test_library_rejects_mixed_sizes() {
        let tiles = vec![
            Tile::from_thumbnail(solid(4, [0, 0, 0])),
            Tile::from_thumbnail(solid(5, [0, 0, 0])),
        ];
        assert!(matches!(
            TileLibrary::new(tiles),
            Err(QuantError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_library_nearest() {
        let library = TileLibrary::new(vec![
            Tile::from_thumbnail(solid(3, [0, 0, 0])),
            Tile::from_thumbnail(solid(3, [255, 0, 0])),
            Tile::from_thumbnail(solid(3, [0, 0, 255])),
        ])
        .unwrap();

        assert_eq!(library.len(), 3);
        assert_eq!(library.tile_size(), 3);
        assert_eq!(library.nearest_index(ColorVec::from_u8(220, 30, 10)), 1);
        assert_eq!(
            library.nearest(ColorVec::from_u8(5, 5, 200)).average(),
            ColorVec::from_u8(0, 0, 255)
        );
    }
}
