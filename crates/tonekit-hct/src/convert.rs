// SPDX-License-Identifier: MIT
//
// Standard color-space conversions: sRGB ↔ linear RGB ↔ XYZ ↔ L*a*b*, and
// the L* ↔ Y relation that tone and contrast are defined on.
//
// Conversion pipeline:
//
//   ARGB (8-bit, gamma) ↔ linear RGB (0–100) ↔ XYZ (D65, Y in 0–100) ↔ L*a*b*
//
// Linear RGB and XYZ are scaled to 0–100 rather than 0–1 so that Y is
// directly the "relative luminance percentage" used by the contrast math.

use crate::argb::Argb;
use crate::math::{Mat3, Vec3};

/// sRGB (linear, 0–100) to CIE XYZ under D65.
pub const SRGB_TO_XYZ: Mat3 = Mat3::new([
    [0.412_338_95, 0.357_620_64, 0.180_510_42],
    [0.2126, 0.7152, 0.0722],
    [0.019_321_41, 0.119_163_82, 0.950_344_78],
]);

/// CIE XYZ under D65 to linear sRGB (0–100).
pub const XYZ_TO_SRGB: Mat3 = Mat3::new([
    [3.241_377_479_238_868_5, -1.537_665_240_285_185_1, -0.498_853_668_462_680_53],
    [-0.969_145_251_300_532_1, 1.875_885_345_106_787_2, 0.041_565_856_169_120_61],
    [0.055_620_936_896_913_05, -0.203_955_245_647_421_23, 1.057_179_911_122_033_5],
]);

/// D65 reference white, Y normalized to 100.
pub const WHITE_POINT_D65: Vec3 = Vec3::new(95.047, 100.0, 108.883);

const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

// ─── Transfer Function ───────────────────────────────────────────────────────

/// Linearize an 8-bit sRGB channel into 0–100.
#[inline]
#[must_use]
pub fn linearized(channel: u8) -> f64 {
    let normalized = f64::from(channel) / 255.0;
    if normalized <= 0.040_449_936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Delinearize a 0–100 linear channel into 0–255 without rounding.
#[inline]
#[must_use]
pub fn true_delinearized(linear: f64) -> f64 {
    let normalized = linear / 100.0;
    let encoded = if normalized <= 0.003_130_8 {
        normalized * 12.92
    } else {
        1.055f64.mul_add(normalized.powf(1.0 / 2.4), -0.055)
    };
    encoded * 255.0
}

/// Delinearize a 0–100 linear channel into a clamped, rounded 8-bit value.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn delinearized(linear: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    true_delinearized(linear).round().clamp(0.0, 255.0) as u8
}

// ─── ARGB ↔ Linear RGB ↔ XYZ ─────────────────────────────────────────────────

/// Linear RGB (0–100 per channel) of an ARGB color.
#[must_use]
pub fn linrgb_from_argb(argb: Argb) -> Vec3 {
    Vec3::new(
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    )
}

/// Opaque ARGB from linear RGB (0–100 per channel), clamping out-of-range channels.
#[must_use]
pub fn argb_from_linrgb(linrgb: Vec3) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb.x),
        delinearized(linrgb.y),
        delinearized(linrgb.z),
    )
}

/// CIE XYZ of an ARGB color.
#[must_use]
pub fn xyz_from_argb(argb: Argb) -> Vec3 {
    SRGB_TO_XYZ.apply(linrgb_from_argb(argb))
}

/// ARGB from CIE XYZ, clamping out-of-gamut channels.
#[must_use]
pub fn argb_from_xyz(xyz: Vec3) -> Argb {
    argb_from_linrgb(XYZ_TO_SRGB.apply(xyz))
}

// ─── L*a*b* ──────────────────────────────────────────────────────────────────

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA.mul_add(t, 16.0) / 116.0
    }
}

#[inline]
fn lab_inv_f(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > LAB_EPSILON {
        ft3
    } else {
        116.0f64.mul_add(ft, -16.0) / LAB_KAPPA
    }
}

/// CIE L*a*b* of an ARGB color, as `(l, a, b)`.
#[must_use]
pub fn lab_from_argb(argb: Argb) -> Vec3 {
    let xyz = xyz_from_argb(argb);
    let fx = lab_f(xyz.x / WHITE_POINT_D65.x);
    let fy = lab_f(xyz.y / WHITE_POINT_D65.y);
    let fz = lab_f(xyz.z / WHITE_POINT_D65.z);
    Vec3::new(116.0f64.mul_add(fy, -16.0), 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// ARGB from CIE L*a*b*.
#[must_use]
pub fn argb_from_lab(lab: Vec3) -> Argb {
    let fy = (lab.x + 16.0) / 116.0;
    let fx = lab.y / 500.0 + fy;
    let fz = fy - lab.z / 200.0;
    let xyz = Vec3::new(lab_inv_f(fx), lab_inv_f(fy), lab_inv_f(fz)).scale(WHITE_POINT_D65);
    argb_from_xyz(xyz)
}

// ─── L* ↔ Y ──────────────────────────────────────────────────────────────────

/// Relative luminance Y (0–100) for a given L* (0–100).
#[inline]
#[must_use]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// L* (0–100) for a given relative luminance Y (0–100).
#[inline]
#[must_use]
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0).mul_add(116.0, -16.0)
}

/// L* of an ARGB color, which is its HCT tone.
#[must_use]
pub fn lstar_from_argb(argb: Argb) -> f64 {
    lstar_from_y(xyz_from_argb(argb).y)
}

/// The neutral gray whose L* is `lstar`.
#[must_use]
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
