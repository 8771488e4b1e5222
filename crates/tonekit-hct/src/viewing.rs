// SPDX-License-Identifier: MIT
//
// CAM16 viewing conditions.
//
// A color appearance model needs to know how a color is being looked at:
// the white point, how bright the surroundings are, what lies behind the
// color. All of that collapses into a handful of constants that are
// computed once here and then read by every forward/inverse transform.

use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::cam16::XYZ_TO_CAM16RGB;
use crate::convert::{WHITE_POINT_D65, y_from_lstar};
use crate::math::{Vec3, lerp};

/// Precomputed constants for a fixed observing context.
///
/// Use [`ViewingConditions::standard`] for sRGB on a typical display; build
/// others with [`ViewingConditions::make`] to ask how a color looks against
/// a different background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    /// Background luminance relative to the white point.
    pub n: f64,
    /// Achromatic response of the white point.
    pub aw: f64,
    /// Background induction factor.
    pub nbb: f64,
    /// Chromatic induction factor.
    pub ncb: f64,
    /// Exponential nonlinearity from the surround.
    pub c: f64,
    /// Chromatic induction factor from the surround.
    pub nc: f64,
    /// Per-channel degree-of-adaptation discount.
    pub rgb_d: Vec3,
    /// Luminance-level adaptation factor.
    pub fl: f64,
    /// `fl^0.25`, used by the colorfulness terms.
    pub fl_root: f64,
    /// Base exponential nonlinearity.
    pub z: f64,
}

static STANDARD: LazyLock<ViewingConditions> =
    LazyLock::new(|| ViewingConditions::with_background_lstar(50.0));

impl ViewingConditions {
    /// sRGB-like viewing: D65 white, ~11.7 cd/m² adapting luminance, a mid
    /// gray (L* 50) background, average surround.
    ///
    /// Shared process-wide; computed on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Standard conditions with a custom background lightness.
    #[must_use]
    pub fn with_background_lstar(lstar: f64) -> Self {
        Self::make(
            WHITE_POINT_D65,
            200.0 / PI * y_from_lstar(50.0) / 100.0,
            lstar,
            2.0,
            false,
        )
    }

    /// Derive viewing conditions from physical parameters.
    ///
    /// - `white_point`: XYZ of the adopted white, Y = 100
    /// - `adapting_luminance`: cd/m², usually 20% of the white's luminance
    /// - `background_lstar`: L* of the background (clamped to at least 0.1)
    /// - `surround`: 0 = dark, 1 = dim, 2 = average
    /// - `discounting_illuminant`: whether the eye fully adapts to the white
    #[must_use]
    pub fn make(
        white_point: Vec3,
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let rgb_w = XYZ_TO_CAM16RGB.apply(white_point);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d: f64 = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = Vec3::new(
            d * (100.0 / rgb_w.x) + 1.0 - d,
            d * (100.0 / rgb_w.y) + 1.0 - d,
            d * (100.0 / rgb_w.z) + 1.0 - d,
        );

        let k = 1.0 / 5.0f64.mul_add(adapting_luminance, 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = (0.1 * k4f * k4f).mul_add((5.0 * adapting_luminance).cbrt(), k4 * adapting_luminance);

        let n = y_from_lstar(background_lstar) / white_point.y;
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let factors = rgb_d.scale(rgb_w).map(|v| (fl * v / 100.0).powf(0.42));
        let rgb_a = factors.map(|v| 400.0 * v / (v + 27.13));
        let aw = 0.05f64.mul_add(rgb_a.z, 2.0f64.mul_add(rgb_a.x, rgb_a.y)) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
