//! Source raster ingestion.
//!
//! The generation service hands back encoded PNG or JPEG bytes; this
//! module turns them into a [`Raster`] the edit session can own. Decoding
//! failures and degenerate dimensions surface as [`LoadError`] and no
//! session is created.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::raster::Raster;

/// Failure to produce a usable source raster.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source raster has zero width or height.
    #[error("Source raster has zero width or height")]
    EmptyRaster,

    /// The bytes could not be decoded as a supported image format.
    #[error("Could not decode source image: {0}")]
    Undecodable(String),
}

/// Decode service-returned image bytes (PNG or JPEG) into a raster.
///
/// # Errors
///
/// Returns [`LoadError::Undecodable`] if the bytes are not a decodable
/// image, or [`LoadError::EmptyRaster`] if decoding produced a
/// zero-dimension image.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::Undecodable(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| LoadError::Undecodable(e.to_string()))?;

    let raster = Raster::from_rgb_image(img.into_rgb8());
    if raster.is_empty() {
        return Err(LoadError::EmptyRaster);
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;

    #[test]
    fn test_decode_jpeg_round_trip() {
        // Encode a small gray raster, then decode it back
        let pixels = vec![128u8; 16 * 8 * 3];
        let jpeg = encode_jpeg(&pixels, 16, 8, 92).unwrap();

        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!(decoded.width, 16);
        assert_eq!(decoded.height, 8);
        assert_eq!(decoded.byte_size(), pixels.len());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(LoadError::Undecodable(_))));
    }

    #[test]
    fn test_decode_empty_input_fails() {
        let result = decode_image(&[]);
        assert!(matches!(result, Err(LoadError::Undecodable(_))));
    }

    #[test]
    fn test_decode_truncated_jpeg_fails() {
        let pixels = vec![128u8; 16 * 16 * 3];
        let jpeg = encode_jpeg(&pixels, 16, 16, 92).unwrap();

        // Keep only the header
        let result = decode_image(&jpeg[..8]);
        assert!(matches!(result, Err(LoadError::Undecodable(_))));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoadError::EmptyRaster.to_string(),
            "Source raster has zero width or height"
        );
    }
}
