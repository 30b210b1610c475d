//! Raster resizing for preview surfaces and gallery thumbnails.
//!
//! The host downscales rendered previews for the edit dialog and the
//! gallery grid with these helpers. They are not part of the render
//! pipeline and never feed back into it.

use image::imageops;
use thiserror::Error;

use crate::raster::Raster;

/// Interpolation filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    fn to_image_filter(self) -> imageops::FilterType {
        match self {
            FilterType::Nearest => imageops::FilterType::Nearest,
            FilterType::Bilinear => imageops::FilterType::Triangle,
            FilterType::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// A resize request that cannot be satisfied.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Target dimensions must be non-zero")]
    ZeroTarget,

    #[error("Source raster buffer does not match its dimensions")]
    MalformedSource,
}

/// Resize a raster to exact dimensions.
pub fn resize(
    image: &Raster,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Raster, ResizeError> {
    if width == 0 || height == 0 {
        return Err(ResizeError::ZeroTarget);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image().ok_or(ResizeError::MalformedSource)?;
    let resized = imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(Raster::from_rgb_image(resized))
}

/// Resize a raster to fit within a maximum edge length, preserving aspect
/// ratio. Rasters already within the bound are returned unchanged.
pub fn resize_to_fit(image: &Raster, max_edge: u32, filter: FilterType) -> Result<Raster, ResizeError> {
    if max_edge == 0 {
        return Err(ResizeError::ZeroTarget);
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, new_width, new_height, filter)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
