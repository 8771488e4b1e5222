// SPDX-License-Identifier: MIT
//
// WCAG contrast ratios expressed on tone.
//
// The WCAG 2.1 ratio is (Y_light + 5) / (Y_dark + 5) with Y the relative
// luminance on a 0–100 scale. Tone is L*, and L* maps to Y one-to-one, so
// every question here ("what ratio do these two tones make", "what is the
// lightest tone that still reaches 4.5:1 against T") is answered exactly
// on the tone axis without looking at hue or chroma.
//
// The `lighter` / `darker` searches return `None` when the target can't be
// reached inside [0, 100]. The `_unsafe` variants fall back to the tone
// extreme in that direction instead, which always gives the best ratio
// available even when it falls short.

use crate::argb::Argb;
use crate::convert::{lstar_from_y, xyz_from_argb, y_from_lstar};

/// Smallest possible ratio (a color against itself).
pub const RATIO_MIN: f64 = 1.0;

/// Largest possible ratio (black against white).
pub const RATIO_MAX: f64 = 21.0;

/// Slack allowed between the requested and realized ratio.
const RATIO_EPSILON: f64 = 0.04;

/// Nudge applied to search results so rounding to 8-bit sRGB can't pull the
/// realized ratio back below the requested one.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// Contrast ratio of two relative luminances (0–100).
#[inline]
#[must_use]
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// Contrast ratio of two tones, clamped to [0, 100] first.
///
/// Symmetric, and always within [`RATIO_MIN`, `RATIO_MAX`].
#[must_use]
pub fn ratio_of_tones(t1: f64, t2: f64) -> f64 {
    ratio_of_ys(y_from_lstar(t1.clamp(0.0, 100.0)), y_from_lstar(t2.clamp(0.0, 100.0)))
}

/// Contrast ratio of two ARGB colors, by their luminance.
#[must_use]
pub fn ratio_of_argb(a: Argb, b: Argb) -> f64 {
    ratio_of_ys(xyz_from_argb(a).y, xyz_from_argb(b).y)
}

/// A tone at least as light as `tone` that reaches `ratio` against it.
///
/// Returns `None` if `tone` is outside [0, 100] or no tone up to 100 is
/// light enough.
#[must_use]
pub fn lighter(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let dark_y = y_from_lstar(tone);
    let light_y = ratio.mul_add(dark_y + 5.0, -5.0);
    if !(0.0..=100.0).contains(&light_y) {
        return None;
    }
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > RATIO_EPSILON {
        return None;
    }
    let result = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&result).then_some(result)
}

/// A tone at least as dark as `tone` that reaches `ratio` against it.
///
/// Returns `None` if `tone` is outside [0, 100] or no tone down to 0 is
/// dark enough.
#[must_use]
pub fn darker(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let light_y = y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    if !(0.0..=100.0).contains(&dark_y) {
        return None;
    }
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > RATIO_EPSILON {
        return None;
    }
    let result = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&result).then_some(result)
}

/// [`lighter`], falling back to 100 when the ratio is out of reach.
#[must_use]
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// [`darker`], falling back to 0 when the ratio is out of reach.
#[must_use]
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ----- ratios -----

    #[test]
    fn black_on_white_is_max() {
        assert!(approx_eq(ratio_of_tones(0.0, 100.0), RATIO_MAX, 1e-9));
        assert!(approx_eq(ratio_of_argb(Argb::BLACK, Argb::WHITE), RATIO_MAX, 0.01));
    }

    #[test]
    fn same_tone_is_min() {
        for t in [0.0, 33.0, 50.0, 100.0] {
            assert!(approx_eq(ratio_of_tones(t, t), RATIO_MIN, 1e-12));
        }
    }

    #[test]
    fn ratio_is_symmetric() {
        assert!(approx_eq(ratio_of_tones(20.0, 70.0), ratio_of_tones(70.0, 20.0), 1e-12));
    }

    #[test]
    fn out_of_range_tones_are_clamped() {
        assert!(approx_eq(ratio_of_tones(-50.0, 150.0), RATIO_MAX, 1e-9));
    }

    #[test]
    fn tone_gap_of_fifty_is_readable() {
        for t in [0.0, 10.0, 25.0, 40.0, 50.0] {
            assert!(ratio_of_tones(t, t + 50.0) >= 4.5 - 0.05, "tone {t}");
        }
    }

    // ----- searches -----

    #[test]
    fn lighter_reaches_ratio() {
        let t = lighter(20.0, 4.5).unwrap();
        assert!(t > 20.0);
        assert!(ratio_of_tones(20.0, t) >= 4.5);
    }

    #[test]
    fn darker_reaches_ratio() {
        let t = darker(80.0, 4.5).unwrap();
        assert!(t < 80.0);
        assert!(ratio_of_tones(80.0, t) >= 4.5);
    }

    #[test]
    fn unreachable_targets_are_none() {
        assert_eq!(lighter(90.0, 10.0), None);
        assert_eq!(darker(10.0, 10.0), None);
    }

    #[test]
    fn out_of_range_inputs_are_none() {
        assert_eq!(darker(-10.0, 2.0), None);
        assert_eq!(lighter(110.0, 2.0), None);
    }

    #[test]
    fn unsafe_variants_fall_back_to_extremes() {
        assert!(approx_eq(lighter_unsafe(90.0, 10.0), 100.0, 1e-12));
        assert!(approx_eq(darker_unsafe(10.0, 10.0), 0.0, 1e-12));
        let reachable = lighter_unsafe(20.0, 3.0);
        assert!(reachable < 100.0);
    }

    #[test]
    fn ratio_of_one_stays_close() {
        let t = lighter(50.0, 1.0).unwrap();
        assert!(approx_eq(t, 50.4, 1e-6));
    }
}
