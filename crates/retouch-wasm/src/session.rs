//! Editing session WASM bindings.
//!
//! Wraps [`retouch_core::EditSession`] for the browser host. Patches
//! arrive as plain JS objects (`{ brightness: 120 }`,
//! `{ filter_preset: 'sepia' }`) and are deserialized into
//! [`retouch_core::EditPatch`]; unknown preset or crop-ratio strings are
//! rejected at that boundary without committing or rendering.
//!
//! Every mutating call returns the re-rendered preview so the host can
//! paint it directly.

use crate::types::JsRaster;
use js_sys::Uint8Array;
use retouch_core::{EditPatch, EditSession};
use wasm_bindgen::prelude::*;

/// An open editing session over one source raster.
///
/// `close()` is idempotent; every other method on a closed session
/// returns an error.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: Option<EditSession>,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Open a session over a decoded source raster.
    ///
    /// # Errors
    ///
    /// Returns an error if the raster has zero width or height; no
    /// session is created.
    pub fn begin(source: &JsRaster) -> Result<JsEditSession, JsValue> {
        let inner = EditSession::begin(source.to_raster())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsEditSession { inner: Some(inner) })
    }

    /// Preview an in-progress edit (e.g. a slider drag) without recording
    /// it in history.
    pub fn live_update(&mut self, patch: JsValue) -> Result<JsRaster, JsValue> {
        let patch = parse_patch(patch)?;
        let session = self.session_mut()?;
        let preview = session
            .live_update(&patch)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRaster::from_raster(preview.clone()))
    }

    /// Record an edit as a new history entry, discarding any redo tail.
    ///
    /// Pass a patch for discrete interactions (filter click, crop-ratio
    /// button); pass `undefined` at the end of a drag to commit the last
    /// previewed value.
    pub fn commit(&mut self, patch: JsValue) -> Result<JsRaster, JsValue> {
        let patch = if patch.is_undefined() || patch.is_null() {
            None
        } else {
            Some(parse_patch(patch)?)
        };
        let session = self.session_mut()?;
        let preview = session
            .commit_current(patch.as_ref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRaster::from_raster(preview.clone()))
    }

    /// Step back one committed snapshot. A no-op at the beginning.
    pub fn undo(&mut self) -> Result<JsRaster, JsValue> {
        let session = self.session_mut()?;
        let preview = session
            .undo()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRaster::from_raster(preview.clone()))
    }

    /// Step forward one committed snapshot. A no-op at the end.
    pub fn redo(&mut self) -> Result<JsRaster, JsValue> {
        let session = self.session_mut()?;
        let preview = session
            .redo()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRaster::from_raster(preview.clone()))
    }

    /// The rotate button: commit a quarter turn clockwise.
    pub fn rotate_cw(&mut self) -> Result<JsRaster, JsValue> {
        let session = self.session_mut()?;
        let preview = session
            .rotate_cw()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRaster::from_raster(preview.clone()))
    }

    /// Encode the committed state as JPEG bytes (fixed quality 92).
    ///
    /// Any in-progress live state is ignored: export reflects history.
    pub fn export_jpeg(&self) -> Result<Uint8Array, JsValue> {
        let session = self.session_ref()?;
        let bytes = session
            .export_current()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Uint8Array::from(bytes.as_slice()))
    }

    /// The committed edit state at the cursor, as a JS object.
    pub fn current_state(&self) -> Result<JsValue, JsValue> {
        let session = self.session_ref()?;
        serde_wasm_bindgen::to_value(session.current_state())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn can_undo(&self) -> Result<bool, JsValue> {
        Ok(self.session_ref()?.can_undo())
    }

    pub fn can_redo(&self) -> Result<bool, JsValue> {
        Ok(self.session_ref()?.can_redo())
    }

    /// Discard the session and its pixel buffers. Idempotent.
    pub fn close(&mut self) {
        self.inner = None;
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl JsEditSession {
    fn session_ref(&self) -> Result<&EditSession, JsValue> {
        self.inner.as_ref().ok_or_else(closed_error)
    }

    fn session_mut(&mut self) -> Result<&mut EditSession, JsValue> {
        self.inner.as_mut().ok_or_else(closed_error)
    }
}

fn closed_error() -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str("retouch: session is closed"));
    JsValue::from_str("Session is closed")
}

fn parse_patch(value: JsValue) -> Result<EditPatch, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
