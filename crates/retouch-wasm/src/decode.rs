//! Source raster ingestion WASM bindings.
//!
//! The host hands the generation service's PNG/JPEG bytes to
//! [`decode_image`] and gets back a raster it can open a session over, or
//! downscale with [`preview_to_fit`] for swatches and grid thumbnails.

use crate::types::JsRaster;
use retouch_core::resize::FilterType;
use retouch_core::{decode_image as core_decode, resize_to_fit};
use wasm_bindgen::prelude::*;

/// Decode service-returned image bytes (PNG or JPEG) into a raster.
///
/// # Arguments
///
/// * `bytes` - The encoded image bytes as a `Uint8Array`
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image or decode to a
/// zero-dimension raster.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await response.arrayBuffer());
/// const raster = decode_image(bytes);
/// console.log(`Decoded ${raster.width}x${raster.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    core_decode(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Downscale a raster to fit within a maximum edge length, preserving
/// aspect ratio.
///
/// Used by the host for preview surfaces and the gallery grid. Rasters
/// already within the bound come back unchanged.
///
/// # Example
///
/// ```typescript
/// const thumb = preview_to_fit(raster, 256);
/// ```
#[wasm_bindgen]
pub fn preview_to_fit(raster: &JsRaster, max_edge: u32) -> Result<JsRaster, JsValue> {
    resize_to_fit(&raster.to_raster(), max_edge, FilterType::Bilinear)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
