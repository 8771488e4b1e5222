// SPDX-License-Identifier: MIT
//
// Inverse HCT: (hue, chroma, tone) → the in-gamut sRGB color that honors
// hue and tone exactly and gets as close to the requested chroma as sRGB
// allows.
//
// Tone fixes relative luminance Y, so every candidate lives on one plane
// of constant Y through the linear-RGB cube. Two stages:
//
//   1. Newton iteration on CAM16 lightness J (at most 5 rounds). If the
//      requested chroma is reachable, this lands on it directly.
//   2. Otherwise, walk the polygon where the Y-plane cuts the cube: find
//      the two edge vertices whose hues bracket the target, then bisect
//      along each axis between 8-bit rounding boundaries ("critical
//      planes") until the bracket collapses. The midpoint is the most
//      chromatic in-gamut color at that hue and tone.
//
// Both stages run a fixed number of steps.

use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::argb::Argb;
use crate::cam16::{XYZ_TO_CAM16RGB, compression, inverse_compression, opponent_to_compressed};
use crate::convert::{
    SRGB_TO_XYZ, argb_from_linrgb, argb_from_lstar, true_delinearized, y_from_lstar,
};
use crate::math::{Mat3, Vec3, sanitize_degrees};
use crate::viewing::ViewingConditions;

/// Luminance weights of linear sRGB (the Y row of `SRGB_TO_XYZ`).
const Y_FROM_LINRGB: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Linear RGB → illuminant-discounted, luminance-scaled cone responses
/// ready for compression, and its inverse. Derived from the standard
/// viewing conditions so forward and inverse transforms agree exactly.
struct SolverMatrices {
    scaled_discount_from_linrgb: Mat3,
    linrgb_from_scaled_discount: Mat3,
}

static MATRICES: LazyLock<SolverMatrices> = LazyLock::new(|| {
    let vc = ViewingConditions::standard();
    let scale = Mat3::diagonal(vc.rgb_d * (vc.fl / 100.0));
    let forward = scale.compose(&XYZ_TO_CAM16RGB).compose(&SRGB_TO_XYZ);
    // The product of three well-conditioned color matrices is never singular.
    let inverse = forward.inverse().unwrap_or(forward);
    SolverMatrices {
        scaled_discount_from_linrgb: forward,
        linrgb_from_scaled_discount: inverse,
    }
});

/// Linear-RGB values (0–100) at which the rounded 8-bit sRGB channel
/// steps from `i` to `i + 1`.
static CRITICAL_PLANES: LazyLock<[f64; 255]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let encoded = (i as f64 + 0.5) / 255.0;
        if encoded <= 0.040_449_936 {
            encoded / 12.92 * 100.0
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4) * 100.0
        }
    })
});

/// Solve HCT → ARGB. See the module comment for the method.
///
/// Degenerate requests short-circuit: tone at or below 0 is black, tone at
/// or above 100 is white, and a chroma of (nearly) 0 is the neutral gray of
/// that tone, whatever the hue.
#[must_use]
pub fn solve_to_argb(hue_degrees: f64, chroma: f64, lstar: f64) -> Argb {
    if chroma < 0.0001 || lstar < 0.0001 || lstar > 99.9999 {
        return argb_from_lstar(lstar.clamp(0.0, 100.0));
    }
    let hue_radians = sanitize_degrees(hue_degrees).to_radians();
    let y = y_from_lstar(lstar);
    if let Some(exact) = find_result_by_j(hue_radians, chroma, y) {
        return exact;
    }
    argb_from_linrgb(bisect_to_limit(y, hue_radians))
}

/// Newton's method on J for an exact (hue, chroma, Y) hit.
///
/// Returns `None` when the solution leaves the sRGB cube, meaning the
/// requested chroma is out of gamut at this hue and tone.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    let vc = ViewingConditions::standard();
    let matrices = &*MATRICES;

    // Initial estimate of J.
    let mut j = y.sqrt() * 11.0;

    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let (h_sin, h_cos) = hue_radians.sin_cos();

    for round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t
            / (108.0 * t).mul_add(h_sin, (11.0 * t).mul_add(h_cos, 23.0 * p1));
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let scaled = opponent_to_compressed(p2, a, b).map(inverse_compression);
        let linrgb = matrices.linrgb_from_scaled_discount.apply(scaled);
        if linrgb.x < 0.0 || linrgb.y < 0.0 || linrgb.z < 0.0 {
            return None;
        }

        let fnj = Y_FROM_LINRGB.dot(linrgb);
        if fnj <= 0.0 {
            return None;
        }
        if round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.x > 100.01 || linrgb.y > 100.01 || linrgb.z > 100.01 {
                return None;
            }
            return Some(argb_from_linrgb(linrgb));
        }
        // Newton step, approximating fn'(j) by 2·fn(j)/j.
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

// ─── Hue Geometry on the Linear-RGB Cube ─────────────────────────────────────

/// Wrap an angle in radians to [0, 2π).
#[inline]
fn sanitize_radians(angle: f64) -> f64 {
    (angle + PI * 8.0) % (PI * 2.0)
}

/// CAM16 hue (radians) of a linear-RGB point.
fn hue_of(linrgb: Vec3) -> f64 {
    let scaled = MATRICES.scaled_discount_from_linrgb.apply(linrgb);
    let r_a = compression(scaled.x);
    let g_a = compression(scaled.y);
    let b_a = compression(scaled.z);
    let a = (11.0f64.mul_add(r_a, -12.0 * g_a) + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

/// Whether `b` lies strictly between `a` and `c` going counter-clockwise.
#[inline]
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Interpolate from `source` toward `target` until `axis` equals `coordinate`.
fn set_coordinate(source: Vec3, coordinate: f64, target: Vec3, axis: usize) -> Vec3 {
    let t = (coordinate - source[axis]) / (target[axis] - source[axis]);
    source.lerp(t, target)
}

#[inline]
fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// The `n`th of the 12 points where the plane `Y = y` can cross a cube edge.
///
/// Returns `None` when that edge doesn't intersect the plane.
fn nth_vertex(y: f64, n: usize) -> Option<Vec3> {
    let Vec3 { x: k_r, y: k_g, z: k_b } = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    let vertex = if n < 4 {
        let (g, b) = (coord_a, coord_b);
        Vec3::new((y - g * k_g - b * k_b) / k_r, g, b)
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        Vec3::new(r, (y - r * k_r - b * k_b) / k_g, b)
    } else {
        let (r, g) = (coord_a, coord_b);
        Vec3::new(r, g, (y - r * k_r - g * k_g) / k_b)
    };
    let free = match n {
        0..=3 => vertex.x,
        4..=7 => vertex.y,
        _ => vertex.z,
    };
    is_bounded(free).then_some(vertex)
}

/// The two polygon vertices whose hues bracket `target_hue`.
fn bisect_to_segment(y: f64, target_hue: f64) -> (Vec3, Vec3) {
    let mut bracket: Option<(Vec3, f64, Vec3, f64)> = None;
    let mut uncut = true;
    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else { continue };
        let mid_hue = hue_of(mid);
        let Some((left, left_hue, right, right_hue)) = bracket.as_mut() else {
            bracket = Some((mid, mid_hue, mid, mid_hue));
            continue;
        };
        if uncut || are_in_cyclic_order(*left_hue, mid_hue, *right_hue) {
            uncut = false;
            if are_in_cyclic_order(*left_hue, target_hue, mid_hue) {
                *right = mid;
                *right_hue = mid_hue;
            } else {
                *left = mid;
                *left_hue = mid_hue;
            }
        }
    }
    bracket.map_or((Vec3::splat(y), Vec3::splat(y)), |(l, _, r, _)| (l, r))
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

#[inline]
#[allow(clippy::cast_sign_loss)]
fn critical_plane(index: i32) -> f64 {
    CRITICAL_PLANES[index.clamp(0, 254) as usize]
}

/// Most chromatic in-gamut linear-RGB point at luminance `y` and the given hue.
fn bisect_to_limit(y: f64, target_hue: f64) -> Vec3 {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);

    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }
        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                critical_plane_below(true_delinearized(left[axis])),
                critical_plane_above(true_delinearized(right[axis])),
            )
        } else {
            (
                critical_plane_above(true_delinearized(left[axis])),
                critical_plane_below(true_delinearized(right[axis])),
            )
        };
        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }
            let m_plane = (l_plane + r_plane).div_euclid(2);
            let mid = set_coordinate(left, critical_plane(m_plane), right, axis);
            let mid_hue = hue_of(mid);
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }
    left.midpoint(right)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cam16::Cam16;
    use crate::convert::{linearized, lstar_from_argb};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn critical_planes_match_channel_midpoints() {
        for i in [0usize, 1, 63, 127, 200, 254] {
            let lo = linearized(i as u8);
            let hi = linearized(i as u8 + 1);
            let plane = CRITICAL_PLANES[i];
            assert!(lo < plane && plane < hi, "plane {i}: {lo} < {plane} < {hi}");
        }
        assert!(approx_eq(CRITICAL_PLANES[0], 0.015_176_349_177_441_876, 1e-12));
    }

    #[test]
    fn solver_matrices_invert() {
        let m = &*MATRICES;
        let v = Vec3::new(12.0, 55.0, 80.0);
        let back = m.linrgb_from_scaled_discount.apply(m.scaled_discount_from_linrgb.apply(v));
        assert!(approx_eq(back.x, v.x, 1e-9));
        assert!(approx_eq(back.y, v.y, 1e-9));
        assert!(approx_eq(back.z, v.z, 1e-9));
    }

    #[test]
    fn hue_of_agrees_with_cam16() {
        let argb = Argb(0xff33_99cc);
        let cam = Cam16::from_argb(argb);
        let linrgb = crate::convert::linrgb_from_argb(argb);
        let h = sanitize_degrees(hue_of(linrgb).to_degrees());
        assert!(approx_eq(h, cam.hue, 1e-6), "{h} vs {}", cam.hue);
    }

    #[test]
    fn degenerate_tones() {
        assert_eq!(solve_to_argb(120.0, 50.0, 0.0), Argb::BLACK);
        assert_eq!(solve_to_argb(120.0, 50.0, 100.0), Argb::WHITE);
    }

    #[test]
    fn zero_chroma_is_gray() {
        for hue in [0.0, 90.0, 200.0, 359.0] {
            let c = solve_to_argb(hue, 0.0, 50.0);
            assert_eq!(c.red(), c.green());
            assert_eq!(c.green(), c.blue());
        }
    }

    #[test]
    fn in_gamut_request_is_exact() {
        let source = Cam16::from_argb(Argb(0xff67_50a4));
        let tone = lstar_from_argb(Argb(0xff67_50a4));
        let solved = solve_to_argb(source.hue, source.chroma, tone);
        let cam = Cam16::from_argb(solved);
        assert!(approx_eq(cam.hue, source.hue, 1.0));
        assert!(approx_eq(cam.chroma, source.chroma, 1.5));
        assert!(approx_eq(lstar_from_argb(solved), tone, 0.5));
    }

    #[test]
    fn out_of_gamut_reduces_chroma_keeps_hue_and_tone() {
        for hue in [0.0, 27.0, 90.0, 149.0, 210.0, 282.0, 330.0] {
            for tone in [20.0, 50.0, 80.0] {
                let solved = solve_to_argb(hue, 200.0, tone);
                let cam = Cam16::from_argb(solved);
                assert!(cam.chroma < 200.0);
                assert!(
                    approx_eq(lstar_from_argb(solved), tone, 0.5),
                    "tone drifted at h={hue} t={tone}"
                );
                let dh = crate::math::difference_degrees(cam.hue, hue);
                assert!(dh < 4.0, "hue drifted by {dh} at h={hue} t={tone}");
            }
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(solve_to_argb(45.0, 60.0, 70.0), solve_to_argb(45.0, 60.0, 70.0));
    }
}
