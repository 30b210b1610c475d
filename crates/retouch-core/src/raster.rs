//! Owned RGB pixel buffer shared across the edit pipeline.

/// A raster image with RGB pixel data.
///
/// This is the only pixel container that crosses module boundaries: the
/// source raster handed to a session, every intermediate stage of the
/// render pipeline, and the rendered preview are all `Raster` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new Raster with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a Raster from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let raster = Raster::new(100, 50, pixels);

        assert_eq!(raster.width, 100);
        assert_eq!(raster.height, 50);
        assert_eq!(raster.pixel_count(), 5000);
        assert_eq!(raster.byte_size(), 15000);
        assert!(!raster.is_empty());
    }

    #[test]
    fn test_raster_empty() {
        let raster = Raster::new(0, 0, vec![]);
        assert!(raster.is_empty());
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let pixels: Vec<u8> = (0..4 * 2 * 3).map(|i| i as u8).collect();
        let raster = Raster::new(4, 2, pixels.clone());

        let img = raster.to_rgb_image().unwrap();
        let back = Raster::from_rgb_image(img);

        assert_eq!(back.width, 4);
        assert_eq!(back.height, 2);
        assert_eq!(back.pixels, pixels);
    }
}
