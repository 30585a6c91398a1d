use image::{ImageError, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::error::ConvertError;

/// Decode any supported image file into RGBA8.
///
/// The format is detected from the file content; the extension is only a
/// fallback when the content is not recognized.
pub fn decode_image(path: &Path) -> Result<RgbaImage, ConvertError> {
    let decode_err = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::from(e)))?
        .decode()
        .map_err(decode_err)?;
    Ok(image.into_rgba8())
}

/// Encode an RGBA8 raster as PNG bytes.
///
/// `path` only labels the error.
pub fn encode_png(image: &RgbaImage, path: &Path) -> Result<Vec<u8>, ConvertError> {
    let encode_err = |message: String| ConvertError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let (width, height) = image.dimensions();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);

        let mut writer = encoder
            .write_header()
            .map_err(|e| encode_err(format!("Failed to write PNG header: {e}")))?;

        writer
            .write_image_data(image.as_raw())
            .map_err(|e| encode_err(format!("Failed to write PNG data: {e}")))?;
    }

    Ok(buf.into_inner())
}

/// Encode `image` and write it to `path`, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<usize, ConvertError> {
    let bytes = encode_png(image, path)?;

    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, &bytes).map_err(write_err)?;

    Ok(bytes.len())
}
