//! Crop window and output bounding box computation.
//!
//! Pure geometry: given source dimensions, a requested crop ratio, and the
//! cumulative rotation, compute the centered crop window and the final
//! output bounding box. No pixels are touched here.

use crate::CropRatio;

/// A crop window in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropWindow {
    /// Full-frame window for a source of the given size.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Resolved geometry for one render: where to crop and how big the
/// rotated output surface is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGeometry {
    pub crop: CropWindow,
    pub output_width: u32,
    pub output_height: u32,
}

/// True if the rotation reorients the bounding box (90/270 cases).
///
/// Snaps to the nearest quarter turn the same way the rotation transform
/// does, so the resolved bounds always match the rotated output.
#[inline]
pub fn swaps_dimensions(rotation_degrees: i32) -> bool {
    ((rotation_degrees.rem_euclid(360) + 45) / 90) % 2 == 1
}

/// Compute the crop window and output bounding box.
///
/// The crop window is always centered on the constrained axis:
/// - Source relatively wider than the target ratio: full height, width
///   trimmed and horizontally centered.
/// - Otherwise: full width, height trimmed and vertically centered.
///
/// The output bounding box swaps the crop's width/height when the
/// cumulative rotation is an odd number of quarter turns.
pub fn resolve_geometry(
    width: u32,
    height: u32,
    ratio: CropRatio,
    rotation_degrees: i32,
) -> ResolvedGeometry {
    let crop = match ratio.components() {
        None => CropWindow::full(width, height),
        Some((rw, rh)) => {
            // Compare W/H to rw/rh without dividing: W*rh > H*rw
            if (width as u64) * (rh as u64) > (height as u64) * (rw as u64) {
                // Source relatively wider: full height, centered horizontally
                let crop_width = ((height as f64) * (rw as f64) / (rh as f64)).round() as u32;
                let crop_width = crop_width.clamp(1, width);
                CropWindow {
                    x: (width - crop_width) / 2,
                    y: 0,
                    width: crop_width,
                    height,
                }
            } else {
                // Source relatively taller (or exact): full width, centered vertically
                let crop_height = ((width as f64) * (rh as f64) / (rw as f64)).round() as u32;
                let crop_height = crop_height.clamp(1, height);
                CropWindow {
                    x: 0,
                    y: (height - crop_height) / 2,
                    width,
                    height: crop_height,
                }
            }
        }
    };

    let (output_width, output_height) = if swaps_dimensions(rotation_degrees) {
        (crop.height, crop.width)
    } else {
        (crop.width, crop.height)
    };

    ResolvedGeometry {
        crop,
        output_width,
        output_height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
