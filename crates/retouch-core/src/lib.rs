//! Retouch Core - Image edit engine
//!
//! This crate provides the image edit engine for Retouch: the edit state
//! model, undo/redo history, crop/rotation geometry, the deterministic
//! render pipeline, and JPEG export.

pub mod adjustments;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod history;
pub mod preset;
pub mod raster;
pub mod render;
pub mod resize;
pub mod session;
pub mod transform;

pub use decode::{decode_image, LoadError};
pub use encode::{encode_jpeg, EncodeError, EXPORT_JPEG_QUALITY};
pub use geometry::{resolve_geometry, CropWindow, ResolvedGeometry};
pub use history::ParameterStore;
pub use preset::PresetOp;
pub use raster::Raster;
pub use render::{render, RenderError};
pub use resize::{resize, resize_to_fit, FilterType, ResizeError};
pub use session::{EditSession, ExportError};
pub use transform::{crop_to_window, rotate_quarter};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target width:height ratio for the centered crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CropRatio {
    /// Keep the full source frame.
    #[default]
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    FourThree,
    #[serde(rename = "16:9")]
    SixteenNine,
}

impl CropRatio {
    /// The (width, height) components of the target ratio.
    /// `None` means no cropping (full frame).
    pub fn components(self) -> Option<(u32, u32)> {
        match self {
            CropRatio::Original => None,
            CropRatio::Square => Some((1, 1)),
            CropRatio::FourThree => Some((4, 3)),
            CropRatio::SixteenNine => Some((16, 9)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CropRatio::Original => "original",
            CropRatio::Square => "1:1",
            CropRatio::FourThree => "4:3",
            CropRatio::SixteenNine => "16:9",
        }
    }
}

impl FromStr for CropRatio {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(CropRatio::Original),
            "1:1" => Ok(CropRatio::Square),
            "4:3" => Ok(CropRatio::FourThree),
            "16:9" => Ok(CropRatio::SixteenNine),
            other => Err(ValidationError::UnknownCropRatio(other.to_string())),
        }
    }
}

impl fmt::Display for CropRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named filter preset: a fixed combination of secondary tonal operations
/// layered over the base brightness/contrast/saturation stage.
///
/// The op list for each preset lives in [`FilterPreset::ops`] in the
/// `preset` module and is the single source of truth for preset behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPreset {
    #[default]
    None,
    Grayscale,
    Sepia,
    Invert,
    Warm,
    Cool,
    Vintage,
    BwFilm,
    NeoNoir,
    Polaroid,
    Dramatic,
}

impl FilterPreset {
    /// Every preset, in UI display order.
    pub const ALL: [FilterPreset; 11] = [
        FilterPreset::None,
        FilterPreset::Grayscale,
        FilterPreset::Sepia,
        FilterPreset::Invert,
        FilterPreset::Warm,
        FilterPreset::Cool,
        FilterPreset::Vintage,
        FilterPreset::BwFilm,
        FilterPreset::NeoNoir,
        FilterPreset::Polaroid,
        FilterPreset::Dramatic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterPreset::None => "none",
            FilterPreset::Grayscale => "grayscale",
            FilterPreset::Sepia => "sepia",
            FilterPreset::Invert => "invert",
            FilterPreset::Warm => "warm",
            FilterPreset::Cool => "cool",
            FilterPreset::Vintage => "vintage",
            FilterPreset::BwFilm => "bw-film",
            FilterPreset::NeoNoir => "neo-noir",
            FilterPreset::Polaroid => "polaroid",
            FilterPreset::Dramatic => "dramatic",
        }
    }
}

impl FromStr for FilterPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterPreset::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected enumerant in an update coming from the host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown filter preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown crop ratio: {0}")]
    UnknownCropRatio(String),
}

/// One immutable set of tonal/geometric edit parameters.
///
/// Field ranges:
/// - `brightness`: 50-150 (percent, 100 = neutral)
/// - `contrast`: 50-150 (percent, 100 = neutral)
/// - `saturation`: 0-200 (percent, 100 = neutral)
/// - `rotation_degrees`: cumulative multiples of 90, not normalized in
///   storage (720 is a valid stored value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditState {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub rotation_degrees: i32,
    pub crop_ratio: CropRatio,
    pub filter_preset: FilterPreset,
}

impl Default for EditState {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            rotation_degrees: 0,
            crop_ratio: CropRatio::Original,
            filter_preset: FilterPreset::None,
        }
    }
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when the tonal stage is a no-op for this state.
    pub fn is_tonal_neutral(&self) -> bool {
        self.brightness == 100.0 && self.contrast == 100.0 && self.saturation == 100.0
    }

    /// Clamp every field to its documented range.
    ///
    /// Out-of-range values are clamped rather than rejected; rotation is
    /// snapped to the nearest multiple of 90 while staying cumulative.
    pub fn sanitized(mut self) -> Self {
        self.brightness = self.brightness.clamp(50.0, 150.0);
        self.contrast = self.contrast.clamp(50.0, 150.0);
        self.saturation = self.saturation.clamp(0.0, 200.0);
        self.rotation_degrees = snap_to_quarter_turn(self.rotation_degrees);
        self
    }
}

/// Round a rotation to the nearest multiple of 90 degrees.
fn snap_to_quarter_turn(degrees: i32) -> i32 {
    ((degrees as f64 / 90.0).round() as i32) * 90
}

/// A partial edit: only the fields the interaction touched.
///
/// Merged onto a committed snapshot with [`EditPatch::apply_to`]; a live
/// state is always formed this way, never by mutating history in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditPatch {
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub saturation: Option<f32>,
    pub rotation_degrees: Option<i32>,
    pub crop_ratio: Option<CropRatio>,
    pub filter_preset: Option<FilterPreset>,
}

impl EditPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this patch onto `base`, clamping every touched field.
    pub fn apply_to(&self, base: &EditState) -> EditState {
        EditState {
            brightness: self.brightness.unwrap_or(base.brightness),
            contrast: self.contrast.unwrap_or(base.contrast),
            saturation: self.saturation.unwrap_or(base.saturation),
            rotation_degrees: self.rotation_degrees.unwrap_or(base.rotation_degrees),
            crop_ratio: self.crop_ratio.unwrap_or(base.crop_ratio),
            filter_preset: self.filter_preset.unwrap_or(base.filter_preset),
        }
        .sanitized()
    }
}
