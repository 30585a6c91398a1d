use pixel_quant::{Tile, TileLibrary};
use std::path::Path;

use crate::error::CorpusError;
use crate::services::codec::decode_image;
use crate::services::corpus::scan_images;

/// Build a mosaic tile library from every decodable image under `dir`.
///
/// Each image is resized to a `tile_size` square thumbnail and keeps its
/// average color as the match key. Files that fail to decode or resize
/// are logged and skipped.
pub fn build_tile_library(dir: &Path, tile_size: u32) -> Result<TileLibrary, CorpusError> {
    let tiles: Vec<Tile> = scan_images(dir)
        .iter()
        .filter_map(|path| {
            let skip = |e: &dyn std::fmt::Display| {
                tracing::warn!(path = %path.display(), error = %e, "Skipping tile image");
            };
            let image = decode_image(path).map_err(|e| skip(&e)).ok()?;
            Tile::from_image(&image, tile_size).map_err(|e| skip(&e)).ok()
        })
        .collect();

    if tiles.is_empty() {
        return Err(CorpusError::NoValidTiles(dir.to_path_buf()));
    }

    let library = TileLibrary::new(tiles)?;
    tracing::info!(tiles = library.len(), tile_size, "Tile library built");
    Ok(library)
}
