//! Filter preset stage of the render pipeline.
//!
//! Each named preset maps to a fixed, ordered list of secondary tonal
//! operations layered on top of the base brightness/contrast/saturation
//! stage. Preset behavior is data: the lookup table in
//! [`FilterPreset::ops`] is enumerated once and never altered at runtime,
//! so each preset can be unit-tested independent of the rendering backend.

use crate::adjustments::{
    apply_brightness, apply_contrast, apply_saturation, calculate_luminance,
};
use crate::FilterPreset;

/// A composable secondary tonal operation.
///
/// Amount-style ops (`Grayscale`, `Sepia`, `Invert`, `Fade`) take a mix
/// factor in 0.0-1.0; percent-style ops (`Brightness`, `Contrast`,
/// `Saturate`) take a percentage where 100 is neutral; `HueRotate` takes
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresetOp {
    Brightness(f32),
    Contrast(f32),
    Saturate(f32),
    Grayscale(f32),
    Sepia(f32),
    Invert(f32),
    HueRotate(f32),
    /// Opacity against the (black) canvas backing the frame is drawn onto.
    Fade(f32),
}

impl FilterPreset {
    /// The fixed op list for this preset, applied in order after the base
    /// tonal stage.
    pub fn ops(self) -> &'static [PresetOp] {
        match self {
            FilterPreset::None => &[],
            FilterPreset::Grayscale => &[PresetOp::Grayscale(1.0)],
            FilterPreset::Sepia => &[PresetOp::Sepia(1.0)],
            FilterPreset::Invert => &[PresetOp::Invert(1.0)],
            FilterPreset::Warm => &[
                PresetOp::Sepia(0.4),
                PresetOp::Saturate(140.0),
                PresetOp::HueRotate(-10.0),
            ],
            FilterPreset::Cool => &[PresetOp::HueRotate(180.0), PresetOp::Fade(0.9)],
            FilterPreset::Vintage => &[
                PresetOp::Sepia(0.5),
                PresetOp::Contrast(85.0),
                PresetOp::Brightness(110.0),
                PresetOp::Saturate(75.0),
            ],
            FilterPreset::BwFilm => &[
                PresetOp::Grayscale(1.0),
                PresetOp::Contrast(120.0),
                PresetOp::Brightness(105.0),
            ],
            FilterPreset::NeoNoir => &[
                PresetOp::Grayscale(1.0),
                PresetOp::Contrast(150.0),
                PresetOp::Brightness(90.0),
            ],
            FilterPreset::Polaroid => &[
                PresetOp::Sepia(0.25),
                PresetOp::Contrast(90.0),
                PresetOp::Brightness(115.0),
                PresetOp::Saturate(85.0),
            ],
            FilterPreset::Dramatic => &[
                PresetOp::Contrast(140.0),
                PresetOp::Saturate(120.0),
                PresetOp::Brightness(95.0),
            ],
        }
    }
}

/// Apply a preset's op list to RGB pixel data in place.
pub fn apply_preset(pixels: &mut [u8], preset: FilterPreset) {
    let ops = preset.ops();
    if ops.is_empty() {
        return;
    }

    for chunk in pixels.chunks_exact_mut(3) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        for op in ops {
            (r, g, b) = apply_op(r, g, b, *op);
        }

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0) as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0) as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0) as u8;
    }
}

/// Evaluate a single op on one pixel.
#[inline]
fn apply_op(r: f32, g: f32, b: f32, op: PresetOp) -> (f32, f32, f32) {
    match op {
        PresetOp::Brightness(pct) => apply_brightness(r, g, b, pct),
        PresetOp::Contrast(pct) => apply_contrast(r, g, b, pct),
        PresetOp::Saturate(pct) => apply_saturation(r, g, b, pct),
        PresetOp::Grayscale(amount) => apply_grayscale(r, g, b, amount),
        PresetOp::Sepia(amount) => apply_sepia(r, g, b, amount),
        PresetOp::Invert(amount) => apply_invert(r, g, b, amount),
        PresetOp::HueRotate(degrees) => apply_hue_rotate(r, g, b, degrees),
        PresetOp::Fade(alpha) => apply_fade(r, g, b, alpha),
    }
}

/// Mix each channel toward luminance.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    let gray = calculate_luminance(r, g, b);
    (mix(r, gray, amount), mix(g, gray, amount), mix(b, gray, amount))
}

/// Sepia tone mapping via the reference sepia matrix, mixed by `amount`.
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    (mix(r, sr, amount), mix(g, sg, amount), mix(b, sb, amount))
}

/// Mix each channel toward its complement.
#[inline]
fn apply_invert(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    (
        mix(r, 1.0 - r, amount),
        mix(g, 1.0 - g, amount),
        mix(b, 1.0 - b, amount),
    )
}

/// Rotate hue by the given angle using the reference hue-rotation matrix
/// (luminance-preserving, coefficients 0.213/0.715/0.072).
#[inline]
fn apply_hue_rotate(r: f32, g: f32, b: f32, degrees: f32) -> (f32, f32, f32) {
    let rad = degrees.to_radians();
    let cos = rad.cos();
    let sin = rad.sin();

    let nr = (0.213 + cos * 0.787 - sin * 0.213) * r
        + (0.715 - cos * 0.715 - sin * 0.715) * g
        + (0.072 - cos * 0.072 + sin * 0.928) * b;
    let ng = (0.213 - cos * 0.213 + sin * 0.143) * r
        + (0.715 + cos * 0.285 + sin * 0.140) * g
        + (0.072 - cos * 0.072 - sin * 0.283) * b;
    let nb = (0.213 - cos * 0.213 - sin * 0.787) * r
        + (0.715 - cos * 0.715 + sin * 0.715) * g
        + (0.072 + cos * 0.928 + sin * 0.072) * b;

    (nr, ng, nb)
}

/// Fade toward the black canvas backing (premultiplied opacity).
#[inline]
fn apply_fade(r: f32, g: f32, b: f32, alpha: f32) -> (f32, f32, f32) {
    (r * alpha, g * alpha, b * alpha)
}

#[inline]
fn mix(from: f32, to: f32, amount: f32) -> f32 {
    from + (to - from) * amount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(pixels: &[u8], preset: FilterPreset) -> Vec<u8> {
        let mut result = pixels.to_vec();
        apply_preset(&mut result, preset);
        result
    }

    #[test]
    fn test_none_is_identity() {
        let pixels = vec![37, 142, 219];
        assert_eq!(apply(&pixels, FilterPreset::None), pixels);
    }

    #[test]
    fn test_every_preset_has_fixed_ops() {
        // The table is data: repeated lookups return the same list
        for preset in FilterPreset::ALL {
            assert_eq!(preset.ops(), preset.ops());
        }
        assert!(FilterPreset::None.ops().is_empty());
        assert!(!FilterPreset::Vintage.ops().is_empty());
    }

    #[test]
    fn test_grayscale_removes_chroma() {
        let result = apply(&[200, 40, 90], FilterPreset::Grayscale);
        assert_eq!(result[0], result[1]);
        assert_eq!(result[1], result[2]);
    }

    #[test]
    fn test_grayscale_uses_luminance_weighting() {
        // Pure green carries far more luminance than pure blue
        let green = apply(&[0, 255, 0], FilterPreset::Grayscale);
        let blue = apply(&[0, 0, 255], FilterPreset::Grayscale);
        assert!(green[0] > blue[0]);
    }

    #[test]
    fn test_sepia_tones_gray_input() {
        let result = apply(&[128, 128, 128], FilterPreset::Sepia);
        // Sepia pushes toward warm brown: R > G > B
        assert!(result[0] > result[1]);
        assert!(result[1] > result[2]);
    }

    #[test]
    fn test_invert_complements() {
        let result = apply(&[0, 128, 255], FilterPreset::Invert);
        assert_eq!(result[0], 255);
        assert!((result[1] as i32 - 127).abs() <= 1);
        assert_eq!(result[2], 0);
    }

    #[test]
    fn test_invert_twice_restores() {
        let pixels = vec![10, 100, 240];
        let twice = apply(&apply(&pixels, FilterPreset::Invert), FilterPreset::Invert);
        for (a, b) in pixels.iter().zip(twice.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 2);
        }
    }

    #[test]
    fn test_hue_rotate_preserves_gray() {
        // Gray has no hue; the luminance-preserving matrix leaves it alone
        let result = apply(&[128, 128, 128], FilterPreset::Cool);
        // Cool also fades by 0.9, so expect ~115 on all channels
        let expected = (128.0 * 0.9) as i32;
        for channel in &result {
            assert!((*channel as i32 - expected).abs() <= 2);
        }
    }

    #[test]
    fn test_cool_shifts_red_toward_cyan() {
        let result = apply(&[255, 0, 0], FilterPreset::Cool);
        // A 180-degree hue rotation moves red's energy into green/blue
        assert!(result[1] > result[0]);
        assert!(result[2] > result[0]);
    }

    #[test]
    fn test_warm_warms_neutral_gray() {
        let result = apply(&[128, 128, 128], FilterPreset::Warm);
        assert!(result[0] > result[2], "Warm should favor red over blue");
    }

    #[test]
    fn test_bw_film_is_monochrome() {
        let result = apply(&[180, 70, 130], FilterPreset::BwFilm);
        assert_eq!(result[0], result[1]);
        assert_eq!(result[1], result[2]);
    }

    #[test]
    fn test_neo_noir_darker_than_bw_film() {
        let pixels = vec![100, 100, 100];
        let film = apply(&pixels, FilterPreset::BwFilm);
        let noir = apply(&pixels, FilterPreset::NeoNoir);
        assert!(noir[0] < film[0]);
    }

    #[test]
    fn test_all_presets_produce_valid_output() {
        let pixels: Vec<u8> = vec![
            0, 0, 0, 255, 255, 255, 128, 128, 128, 255, 0, 0, 0, 255, 0, 0, 0, 255,
        ];
        for preset in FilterPreset::ALL {
            let result = apply(&pixels, preset);
            assert_eq!(result.len(), pixels.len(), "preset {preset}");
        }
    }

    #[test]
    fn test_preset_application_is_deterministic() {
        let pixels: Vec<u8> = (0..30).map(|i| (i * 8) as u8).collect();
        for preset in FilterPreset::ALL {
            assert_eq!(apply(&pixels, preset), apply(&pixels, preset));
        }
    }
}
