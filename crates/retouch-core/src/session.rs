//! One open editing session over a single source raster.
//!
//! The session owns the committed history (via [`ParameterStore`]) and a
//! separate transient live slot for in-progress interactions. The two
//! never alias: a live state is always derived by overlaying a patch onto
//! the committed snapshot at the cursor, and committing always re-derives
//! from that snapshot rather than trusting the live slot.
//!
//! Every mutation re-renders synchronously before returning, so the
//! caller always sees a preview that matches the effective state.

use thiserror::Error;

use crate::decode::LoadError;
use crate::encode::{encode_jpeg, EncodeError, EXPORT_JPEG_QUALITY};
use crate::history::ParameterStore;
use crate::raster::Raster;
use crate::render::{render, RenderError};
use crate::{EditPatch, EditState};

/// Export failure: either the render or the encode half.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An open editing session: source raster, committed history, and the
/// transient live overlay.
///
/// Dropping the session is closing it; nothing persists.
#[derive(Debug)]
pub struct EditSession {
    source: Raster,
    store: ParameterStore,
    live: Option<EditState>,
    preview: Raster,
}

impl EditSession {
    /// Open a session over a source raster.
    ///
    /// Renders the initial preview from the default state. Fails with
    /// [`LoadError::EmptyRaster`] for zero-dimension sources; no partial
    /// session is created.
    pub fn begin(source: Raster) -> Result<Self, LoadError> {
        if source.is_empty() {
            return Err(LoadError::EmptyRaster);
        }

        let store = ParameterStore::new();
        let preview = render(&source, store.current())
            .map_err(|e| LoadError::Undecodable(e.to_string()))?;

        Ok(Self {
            source,
            store,
            live: None,
            preview,
        })
    }

    /// Preview an in-progress edit without recording it.
    ///
    /// The patch is merged onto the committed snapshot at the cursor into
    /// the live slot; history and cursor are untouched. Used for
    /// continuous interactions (slider drags) where every intermediate
    /// value should preview but only the final one becomes history.
    pub fn live_update(&mut self, patch: &EditPatch) -> Result<&Raster, RenderError> {
        let next = patch.apply_to(self.store.current());
        self.preview = render(&self.source, &next)?;
        self.live = Some(next);
        Ok(&self.preview)
    }

    /// Record an edit as a new history entry.
    ///
    /// With a patch, the committed state is the patch merged onto the
    /// snapshot at the cursor (never onto the stale live state). Without
    /// one, the pending live state is committed as-is (the end-of-drag
    /// case). Any redo tail is discarded and the live slot is cleared.
    pub fn commit_current(&mut self, patch: Option<&EditPatch>) -> Result<&Raster, RenderError> {
        let next = match patch {
            Some(p) => p.apply_to(self.store.current()),
            None => self
                .live
                .take()
                .unwrap_or_else(|| self.store.current().clone()),
        };
        self.live = None;
        self.store.commit(next);
        self.preview = render(&self.source, self.store.current())?;
        Ok(&self.preview)
    }

    /// Step back one committed snapshot, discarding any live state.
    pub fn undo(&mut self) -> Result<&Raster, RenderError> {
        self.live = None;
        let state = self.store.undo().clone();
        self.preview = render(&self.source, &state)?;
        Ok(&self.preview)
    }

    /// Step forward one committed snapshot, discarding any live state.
    pub fn redo(&mut self) -> Result<&Raster, RenderError> {
        self.live = None;
        let state = self.store.redo().clone();
        self.preview = render(&self.source, &state)?;
        Ok(&self.preview)
    }

    /// The rotate button: commit a quarter turn over the current snapshot.
    pub fn rotate_cw(&mut self) -> Result<&Raster, RenderError> {
        let patch = EditPatch {
            rotation_degrees: Some(self.store.current().rotation_degrees + 90),
            ..Default::default()
        };
        self.commit_current(Some(&patch))
    }

    /// Encode the committed state at the cursor as JPEG bytes.
    ///
    /// Any transient live state is ignored: export reflects history, not
    /// the in-progress preview. Quality is fixed at
    /// [`EXPORT_JPEG_QUALITY`].
    pub fn export_current(&self) -> Result<Vec<u8>, ExportError> {
        let rendered = render(&self.source, self.store.current())?;
        let bytes = encode_jpeg(
            &rendered.pixels,
            rendered.width,
            rendered.height,
            EXPORT_JPEG_QUALITY,
        )?;
        Ok(bytes)
    }

    /// The committed snapshot at the cursor.
    pub fn current_state(&self) -> &EditState {
        self.store.current()
    }

    /// The transient live state, if an interaction is in progress.
    pub fn live_state(&self) -> Option<&EditState> {
        self.live.as_ref()
    }

    /// The state the latest preview was rendered from.
    pub fn effective_state(&self) -> &EditState {
        self.live.as_ref().unwrap_or_else(|| self.store.current())
    }

    /// The most recently rendered preview.
    pub fn preview(&self) -> &Raster {
        &self.preview
    }

    /// The immutable source raster.
    pub fn source(&self) -> &Raster {
        &self.source
    }

    pub fn history_len(&self) -> usize {
        self.store.len()
    }

    pub fn history_cursor(&self) -> usize {
        self.store.cursor()
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CropRatio, FilterPreset};

    fn gradient_source(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width.max(1)) as u8);
                pixels.push((y * 255 / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        Raster::new(width, height, pixels)
    }

    fn brightness_patch(value: f32) -> EditPatch {
        EditPatch {
            brightness: Some(value),
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_renders_default_preview() {
        let session = EditSession::begin(gradient_source(20, 10)).unwrap();
        assert_eq!(session.preview().width, 20);
        assert_eq!(session.preview().height, 10);
        assert!(session.current_state().is_default());
        assert!(session.live_state().is_none());
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_begin_rejects_empty_source() {
        let result = EditSession::begin(Raster::new(0, 0, vec![]));
        assert!(matches!(result, Err(LoadError::EmptyRaster)));
    }

    #[test]
    fn test_live_update_previews_without_committing() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        let neutral = session.preview().clone();

        session.live_update(&brightness_patch(120.0)).unwrap();

        // Preview changed, history did not
        assert_ne!(session.preview().pixels, neutral.pixels);
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.history_cursor(), 0);
        assert!(session.current_state().is_default());
        assert_eq!(session.live_state().unwrap().brightness, 120.0);
    }

    #[test]
    fn test_undo_discards_live_state() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        let neutral = session.preview().clone();

        session.live_update(&brightness_patch(120.0)).unwrap();
        session.undo().unwrap();

        // Undo at index 0 is a cursor no-op but still clears the overlay
        assert!(session.live_state().is_none());
        assert_eq!(session.preview().pixels, neutral.pixels);
        assert!(session.current_state().is_default());
    }

    #[test]
    fn test_commit_records_history() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();

        session.commit_current(Some(&brightness_patch(110.0))).unwrap();
        session.commit_current(Some(&brightness_patch(120.0))).unwrap();

        assert_eq!(session.history_len(), 3);
        assert_eq!(session.history_cursor(), 2);
        assert_eq!(session.current_state().brightness, 120.0);
        assert!(session.live_state().is_none());
    }

    #[test]
    fn test_commit_merges_onto_snapshot_not_live() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();

        // A drag leaves a stale live brightness behind
        session.live_update(&brightness_patch(140.0)).unwrap();

        // A discrete preset commit must not absorb the stale overlay
        let patch = EditPatch {
            filter_preset: Some(FilterPreset::Sepia),
            ..Default::default()
        };
        session.commit_current(Some(&patch)).unwrap();

        assert_eq!(session.current_state().brightness, 100.0);
        assert_eq!(session.current_state().filter_preset, FilterPreset::Sepia);
    }

    #[test]
    fn test_commit_without_patch_lands_live_state() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();

        // End of drag: the last previewed value becomes the history entry
        session.live_update(&brightness_patch(130.0)).unwrap();
        session.commit_current(None).unwrap();

        assert_eq!(session.history_len(), 2);
        assert_eq!(session.current_state().brightness, 130.0);
        assert!(session.live_state().is_none());
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        session.commit_current(Some(&brightness_patch(110.0))).unwrap();
        session.commit_current(Some(&brightness_patch(120.0))).unwrap();

        session.undo().unwrap();
        assert_eq!(session.current_state().brightness, 110.0);

        session.redo().unwrap();
        assert_eq!(session.current_state().brightness, 120.0);
    }

    #[test]
    fn test_branch_truncation() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        for i in 1..=5 {
            session
                .commit_current(Some(&brightness_patch(100.0 + i as f32)))
                .unwrap();
        }

        session.undo().unwrap();
        session.undo().unwrap();
        assert_eq!(session.current_state().brightness, 103.0);

        session.commit_current(Some(&brightness_patch(106.0))).unwrap();
        assert_eq!(session.history_len(), 5);

        // Redo after truncation is a no-op
        session.redo().unwrap();
        assert_eq!(session.current_state().brightness, 106.0);
        assert!(!session.can_redo());
    }

    #[test]
    fn test_boundary_undo_redo_are_noops() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        session.undo().unwrap();
        assert_eq!(session.history_cursor(), 0);
        session.redo().unwrap();
        assert_eq!(session.history_cursor(), 0);
    }

    #[test]
    fn test_rotate_cw_accumulates() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        session.rotate_cw().unwrap();
        assert_eq!(session.current_state().rotation_degrees, 90);
        assert_eq!((session.preview().width, session.preview().height), (10, 20));

        session.rotate_cw().unwrap();
        session.rotate_cw().unwrap();
        session.rotate_cw().unwrap();
        assert_eq!(session.current_state().rotation_degrees, 360);
        assert_eq!((session.preview().width, session.preview().height), (20, 10));
        assert_eq!(session.history_len(), 5);
    }

    #[test]
    fn test_live_update_clamps() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        let patch = EditPatch {
            saturation: Some(500.0),
            ..Default::default()
        };
        session.live_update(&patch).unwrap();
        assert_eq!(session.live_state().unwrap().saturation, 200.0);
    }

    #[test]
    fn test_export_ignores_live_state() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        let committed_bytes = session.export_current().unwrap();

        session.live_update(&brightness_patch(150.0)).unwrap();
        let with_live = session.export_current().unwrap();

        assert_eq!(committed_bytes, with_live);
    }

    #[test]
    fn test_export_is_deterministic_jpeg() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        session
            .commit_current(Some(&EditPatch {
                filter_preset: Some(FilterPreset::Dramatic),
                crop_ratio: Some(CropRatio::Square),
                ..Default::default()
            }))
            .unwrap();

        let a = session.export_current().unwrap();
        let b = session.export_current().unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_effective_state_prefers_live() {
        let mut session = EditSession::begin(gradient_source(20, 10)).unwrap();
        assert!(session.effective_state().is_default());

        session.live_update(&brightness_patch(125.0)).unwrap();
        assert_eq!(session.effective_state().brightness, 125.0);

        session.commit_current(None).unwrap();
        assert_eq!(session.effective_state().brightness, 125.0);
        assert!(session.live_state().is_none());
    }

    #[test]
    fn test_source_is_never_mutated() {
        let source = gradient_source(20, 10);
        let original = source.pixels.clone();
        let mut session = EditSession::begin(source).unwrap();

        session.live_update(&brightness_patch(150.0)).unwrap();
        session
            .commit_current(Some(&EditPatch {
                filter_preset: Some(FilterPreset::Invert),
                ..Default::default()
            }))
            .unwrap();
        session.rotate_cw().unwrap();
        session.undo().unwrap();

        assert_eq!(session.source().pixels, original);
    }
}
