// SPDX-License-Identifier: MIT
//
// CAM16 color appearance model.
//
// CAM16 predicts how a color *looks* (its hue, colorfulness and lightness)
// given the viewing conditions around it. HCT borrows hue and
// chroma from here and pairs them with L* for tone.
//
// Forward:  ARGB → linear RGB → XYZ → cone response → adapted, compressed
//           responses → (a, b) opponent plane → hue, J, C, M, s, UCS
// Inverse:  (J, C, h) → opponent plane → compressed responses → cone
//           response → XYZ → ARGB

use crate::argb::Argb;
use crate::convert::{argb_from_xyz, xyz_from_argb};
use crate::math::{Mat3, Vec3, sanitize_degrees, signum};
use crate::viewing::ViewingConditions;

/// CIE XYZ to the CAM16 cone-response space.
pub const XYZ_TO_CAM16RGB: Mat3 = Mat3::new([
    [0.401_288, 0.650_173, -0.051_461],
    [-0.250_268, 1.204_414, 0.045_854],
    [-0.002_079, 0.048_952, 0.953_127],
]);

/// CAM16 cone-response space back to CIE XYZ.
pub const CAM16RGB_TO_XYZ: Mat3 = Mat3::new([
    [1.862_067_86, -1.011_254_63, 0.149_186_77],
    [0.387_526_54, 0.621_447_44, -0.008_973_98],
    [-0.015_841_50, -0.034_122_94, 1.049_964_44],
]);

/// Exponent of the post-adaptation compression.
pub(crate) const COMPRESSION_EXPONENT: f64 = 0.42;

/// Saturation constant of the post-adaptation compression.
pub(crate) const COMPRESSION_DIVISOR: f64 = 27.13;

const UCS_C1: f64 = 0.007;
const UCS_C2: f64 = 0.0228;

/// Perceptual attributes of a color under some viewing conditions.
///
/// Immutable: derived from a color and recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, [0, 360).
    pub hue: f64,
    /// Chroma: colorfulness relative to a similarly lit white.
    pub chroma: f64,
    /// Lightness.
    pub j: f64,
    /// Brightness.
    pub q: f64,
    /// Colorfulness.
    pub m: f64,
    /// Saturation.
    pub s: f64,
    /// CAM16-UCS J*.
    pub jstar: f64,
    /// CAM16-UCS a*.
    pub astar: f64,
    /// CAM16-UCS b*.
    pub bstar: f64,
}

impl Cam16 {
    /// CAM16 of `argb` under standard viewing conditions.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in(argb, ViewingConditions::standard())
    }

    /// CAM16 of `argb` under the given viewing conditions.
    #[must_use]
    pub fn from_argb_in(argb: Argb, vc: &ViewingConditions) -> Self {
        Self::from_xyz_in(xyz_from_argb(argb), vc)
    }

    /// CAM16 of an XYZ color under the given viewing conditions.
    #[must_use]
    pub fn from_xyz_in(xyz: Vec3, vc: &ViewingConditions) -> Self {
        // Discount the illuminant, then compress each cone response.
        let rgb_d = XYZ_TO_CAM16RGB.apply(xyz).scale(vc.rgb_d);
        let rgb_a = rgb_d.map(|v| {
            let af = (vc.fl * v.abs() / 100.0).powf(COMPRESSION_EXPONENT);
            signum(v) * 400.0 * af / (af + COMPRESSION_DIVISOR)
        });
        let (r_a, g_a, b_a) = (rgb_a.x, rgb_a.y, rgb_a.z);

        // Opponent dimensions.
        let a = (11.0f64.mul_add(r_a, -12.0 * g_a) + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        // Auxiliary components for chroma.
        let u = (20.0f64.mul_add(r_a, 20.0 * g_a) + 21.0 * b_a) / 20.0;
        let p2 = (40.0f64.mul_add(r_a, 20.0 * g_a) + b_a) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n)).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        let (jstar, astar, bstar) = ucs_coordinates(j, m, hue_radians);
        Self { hue, chroma, j, q, m, s, jstar, astar, bstar }
    }

    /// CAM16 from lightness J, chroma C and hue h under standard conditions.
    #[must_use]
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in(j, chroma, hue, ViewingConditions::standard())
    }

    /// CAM16 from lightness J, chroma C and hue h.
    #[must_use]
    pub fn from_jch_in(j: f64, chroma: f64, hue: f64, vc: &ViewingConditions) -> Self {
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let alpha = chroma / (j / 100.0).sqrt();
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();
        let (jstar, astar, bstar) = ucs_coordinates(j, m, hue.to_radians());
        Self { hue, chroma, j, q, m, s, jstar, astar, bstar }
    }

    /// CAM16 from CAM16-UCS coordinates under standard conditions.
    #[must_use]
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in(jstar, astar, bstar, ViewingConditions::standard())
    }

    /// CAM16 from CAM16-UCS coordinates.
    #[must_use]
    pub fn from_ucs_in(jstar: f64, astar: f64, bstar: f64, vc: &ViewingConditions) -> Self {
        let m = astar.hypot(bstar);
        let m2 = (m * UCS_C2).exp_m1() / UCS_C2;
        let chroma = m2 / vc.fl_root;
        let hue = sanitize_degrees(bstar.atan2(astar).to_degrees());
        let j = jstar / (1.0 - (jstar - 100.0) * UCS_C1);
        Self::from_jch_in(j, chroma, hue, vc)
    }

    /// Perceptual distance in CAM16-UCS (ΔE').
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = db.mul_add(db, dj.mul_add(dj, da * da)).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// The ARGB this appearance corresponds to under standard conditions.
    #[must_use]
    pub fn to_argb(&self) -> Argb {
        self.viewed(ViewingConditions::standard())
    }

    /// The ARGB this appearance corresponds to under `vc`.
    #[must_use]
    pub fn viewed(&self, vc: &ViewingConditions) -> Argb {
        argb_from_xyz(self.xyz_in(vc))
    }

    /// Reconstruct the XYZ color that has this appearance under `vc`.
    #[must_use]
    pub fn xyz_in(&self, vc: &ViewingConditions) -> Vec3 {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let (h_sin, h_cos) = h_rad.sin_cos();
        let gamma = 23.0 * (p2 + 0.305) * t
            / (108.0 * t).mul_add(h_sin, (11.0 * t).mul_add(h_cos, 23.0 * p1));
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let rgb_a = opponent_to_compressed(p2, a, b);
        let rgb_c = rgb_a.map(|v| inverse_compression(v) * 100.0 / vc.fl);
        let rgb_f = Vec3::new(rgb_c.x / vc.rgb_d.x, rgb_c.y / vc.rgb_d.y, rgb_c.z / vc.rgb_d.z);
        CAM16RGB_TO_XYZ.apply(rgb_f)
    }
}

/// CAM16-UCS (J*, a*, b*) from J, M and hue in radians.
fn ucs_coordinates(j: f64, m: f64, hue_radians: f64) -> (f64, f64, f64) {
    let jstar = (1.0 + 100.0 * UCS_C1) * j / UCS_C1.mul_add(j, 1.0);
    let mstar = 1.0 / UCS_C2 * (UCS_C2 * m).ln_1p();
    (jstar, mstar * hue_radians.cos(), mstar * hue_radians.sin())
}

/// Undo the opponent transform: (p2, a, b) → compressed cone responses.
pub(crate) fn opponent_to_compressed(p2: f64, a: f64, b: f64) -> Vec3 {
    Vec3::new(
        288.0f64.mul_add(b, 460.0f64.mul_add(p2, 451.0 * a)) / 1403.0,
        (-261.0f64).mul_add(b, 460.0f64.mul_add(p2, -891.0 * a)) / 1403.0,
        (-6300.0f64).mul_add(b, 460.0f64.mul_add(p2, -220.0 * a)) / 1403.0,
    )
}

/// Forward post-adaptation compression of an already scaled response.
#[inline]
pub(crate) fn compression(component: f64) -> f64 {
    let af = component.abs().powf(COMPRESSION_EXPONENT);
    signum(component) * 400.0 * af / (af + COMPRESSION_DIVISOR)
}

/// Inverse of [`compression`].
#[inline]
pub(crate) fn inverse_compression(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (COMPRESSION_DIVISOR * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / COMPRESSION_EXPONENT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn channel_delta(a: Argb, b: Argb) -> u8 {
        a.red()
            .abs_diff(b.red())
            .max(a.green().abs_diff(b.green()))
            .max(a.blue().abs_diff(b.blue()))
    }

    #[test]
    fn red_attributes() {
        let cam = Cam16::from_argb(Argb(0xffff_0000));
        assert!(approx_eq(cam.hue, 27.408, 0.01), "hue: {}", cam.hue);
        assert!(approx_eq(cam.chroma, 113.358, 0.01), "chroma: {}", cam.chroma);
        assert!(approx_eq(cam.j, 46.445, 0.01), "j: {}", cam.j);
    }

    #[test]
    fn blue_attributes() {
        let cam = Cam16::from_argb(Argb(0xff00_00ff));
        assert!(approx_eq(cam.hue, 282.788, 0.01), "hue: {}", cam.hue);
        assert!(approx_eq(cam.chroma, 87.230, 0.01), "chroma: {}", cam.chroma);
    }

    #[test]
    fn white_is_achromatic_and_full_lightness() {
        let cam = Cam16::from_argb(Argb::WHITE);
        assert!(cam.chroma < 3.0, "chroma: {}", cam.chroma);
        assert!(approx_eq(cam.j, 100.0, 0.01), "j: {}", cam.j);
    }

    #[test]
    fn hue_is_normalized() {
        for argb in [0xffff_0000, 0xff00_ff00, 0xff00_00ff, 0xffff_00ff, 0xff80_0040] {
            let cam = Cam16::from_argb(Argb(argb));
            assert!((0.0..360.0).contains(&cam.hue), "hue {} for {argb:08x}", cam.hue);
        }
    }

    #[test]
    fn argb_roundtrip_within_quantization() {
        for argb in [
            0xffff_0000u32, 0xff00_ff00, 0xff00_00ff, 0xff67_50a4, 0xff12_3456,
            0xfffe_dcba, 0xff80_8080, 0xff01_0101, 0xffff_ffff,
        ] {
            let c = Argb(argb);
            let back = Cam16::from_argb(c).to_argb();
            assert!(channel_delta(c, back) <= 1, "{c:?} came back as {back:?}");
        }
    }

    #[test]
    fn jch_reconstructs_attributes() {
        let original = Cam16::from_argb(Argb(0xff67_50a4));
        let rebuilt = Cam16::from_jch(original.j, original.chroma, original.hue);
        assert!(approx_eq(rebuilt.m, original.m, 1e-9));
        assert!(approx_eq(rebuilt.jstar, original.jstar, 1e-9));
        assert!(approx_eq(rebuilt.astar, original.astar, 1e-6));
    }

    #[test]
    fn ucs_roundtrip() {
        let original = Cam16::from_argb(Argb(0xff00_88cc));
        let back = Cam16::from_ucs(original.jstar, original.astar, original.bstar);
        assert!(approx_eq(back.j, original.j, 1e-6), "j: {} vs {}", back.j, original.j);
        assert!(approx_eq(back.chroma, original.chroma, 1e-6));
        assert!(approx_eq(back.hue, original.hue, 1e-6));
    }

    #[test]
    fn distance_is_zero_to_self_and_symmetric() {
        let a = Cam16::from_argb(Argb(0xff33_6699));
        let b = Cam16::from_argb(Argb(0xff99_6633));
        assert!(approx_eq(a.distance(&a), 0.0, 1e-12));
        assert!(approx_eq(a.distance(&b), b.distance(&a), 1e-12));
        assert!(a.distance(&b) > 10.0);
    }

    #[test]
    fn compression_inverts() {
        for v in [-80.0, -1.0, 0.0, 0.5, 12.0, 95.0] {
            assert!(approx_eq(inverse_compression(compression(v)), v, 1e-9), "{v}");
        }
    }

    #[test]
    fn viewing_conditions_change_appearance() {
        let dark_bg = ViewingConditions::with_background_lstar(10.0);
        let std_cam = Cam16::from_argb(Argb(0xff80_8080));
        let dark_cam = Cam16::from_argb_in(Argb(0xff80_8080), &dark_bg);
        // Same gray looks lighter against a dark background.
        assert!(dark_cam.j > std_cam.j, "{} vs {}", dark_cam.j, std_cam.j);
    }
}
