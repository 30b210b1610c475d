//! Retouch WASM - WebAssembly bindings for the Retouch edit engine
//!
//! This crate exposes the retouch-core editing session to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - The editing session (live updates, commits, undo/redo, export)
//! - `types` - WASM-compatible wrapper types for raster data
//! - `decode` - Source raster ingestion and preview scaling
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsEditSession } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode the raster returned by the generation service
//! const bytes = new Uint8Array(await response.arrayBuffer());
//! const raster = decode_image(bytes);
//!
//! // Open an editing session
//! const session = JsEditSession.begin(raster);
//! session.live_update({ brightness: 120 });
//! session.commit({ filter_preset: 'sepia' });
//! const jpeg = session.export_jpeg();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, preview_to_fit};
pub use session::JsEditSession;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
