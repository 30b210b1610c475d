//! The deterministic render pipeline.
//!
//! One pure function from `(source raster, edit state)` to an output
//! raster. The stages run in a fixed order:
//! 1. Resolve geometry (crop window + output bounding box)
//! 2. Crop the source to the window
//! 3. Base tonal stage (brightness, contrast, saturation)
//! 4. Preset op list
//! 5. Quarter-turn rotation into the output bounding box
//!
//! Identical inputs produce byte-identical output across calls and across
//! process restarts: every stage is plain integer/float arithmetic with
//! no randomness or time dependence.

use thiserror::Error;

use crate::adjustments::apply_tonal_adjustments;
use crate::geometry::resolve_geometry;
use crate::preset::apply_preset;
use crate::raster::Raster;
use crate::transform::{crop_to_window, rotate_quarter};
use crate::EditState;

/// A render-time failure, fatal to the owning session.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The source raster has no pixels to sample.
    #[error("Source raster is empty")]
    EmptySource,

    /// The source raster's buffer does not match its dimensions.
    #[error("Source raster is malformed: expected {expected} bytes, got {actual}")]
    MalformedSource { expected: usize, actual: usize },
}

/// Render an edit state against a source raster.
///
/// The source is only sampled, never mutated.
pub fn render(source: &Raster, state: &EditState) -> Result<Raster, RenderError> {
    if source.is_empty() {
        return Err(RenderError::EmptySource);
    }
    let expected = (source.width as usize) * (source.height as usize) * 3;
    if source.pixels.len() != expected {
        return Err(RenderError::MalformedSource {
            expected,
            actual: source.pixels.len(),
        });
    }

    let geometry = resolve_geometry(
        source.width,
        source.height,
        state.crop_ratio,
        state.rotation_degrees,
    );

    let mut working = crop_to_window(source, &geometry.crop);
    apply_tonal_adjustments(&mut working.pixels, state);
    apply_preset(&mut working.pixels, state.filter_preset);

    let output = rotate_quarter(&working, state.rotation_degrees);

    debug_assert_eq!(output.width, geometry.output_width);
    debug_assert_eq!(output.height, geometry.output_height);

    Ok(output)
}
