//! Rect crop against a resolved crop window.

use crate::geometry::CropWindow;
use crate::raster::Raster;

/// Copy the given window out of a raster.
///
/// The window is expected to come from `geometry::resolve_geometry` and
/// therefore lie inside the source; out-of-range windows are clamped to
/// the source bounds rather than panicking.
///
/// # Returns
///
/// A new `Raster` containing only the windowed region. A full-frame
/// window returns a copy of the source.
pub fn crop_to_window(image: &Raster, window: &CropWindow) -> Raster {
    // Fast path: full-frame window
    if window.x == 0 && window.y == 0 && window.width >= image.width && window.height >= image.height
    {
        return image.clone();
    }

    let x = window.x.min(image.width.saturating_sub(1));
    let y = window.y.min(image.height.saturating_sub(1));
    let out_width = window.width.clamp(1, image.width - x);
    let out_height = window.height.clamp(1, image.height - y);

    let src_stride = (image.width * 3) as usize;
    let out_stride = (out_width * 3) as usize;
    let mut output = vec![0u8; out_stride * out_height as usize];

    // Copy row by row
    for row in 0..out_height as usize {
        let src_start = (y as usize + row) * src_stride + (x * 3) as usize;
        let dst_start = row * out_stride;
        output[dst_start..dst_start + out_stride]
            .copy_from_slice(&image.pixels[src_start..src_start + out_stride]);
    }

    Raster::new(out_width, out_height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
