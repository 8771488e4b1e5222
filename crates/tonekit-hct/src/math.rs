// SPDX-License-Identifier: MIT
//
// Small numeric toolkit shared by the color-space transforms.
//
// Every transform in this crate is a 3×3 matrix applied to a 3-vector,
// followed by some per-channel nonlinearity. `Vec3` and `Mat3` keep those
// products readable without pulling in a linear-algebra crate, and the
// angle helpers keep hue arithmetic in one place.

use std::ops::{Add, Index, Mul, Sub};

// ─── Vec3 ────────────────────────────────────────────────────────────────────

/// A 3-component vector (a color in some tristimulus space).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Splat one value into all three components.
    #[inline]
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.z.mul_add(other.z, self.x.mul_add(other.x, self.y * other.y))
    }

    /// Component-wise product.
    #[inline]
    #[must_use]
    pub fn scale(self, factors: Self) -> Self {
        Self::new(self.x * factors.x, self.y * factors.y, self.z * factors.z)
    }

    /// Apply `f` to each component.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Linear interpolation from `self` toward `target`.
    #[inline]
    #[must_use]
    pub fn lerp(self, t: f64, target: Self) -> Self {
        Self::new(
            lerp(self.x, target.x, t),
            lerp(self.y, target.y, t),
            lerp(self.z, target.z, t),
        )
    }

    /// Midpoint of two points.
    #[inline]
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(0.5, other)
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 axis out of range: {axis}"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// ─── Mat3 ────────────────────────────────────────────────────────────────────

/// A row-major 3×3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub rows: [Vec3; 3],
}

impl Mat3 {
    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self {
            rows: [
                Vec3::new(rows[0][0], rows[0][1], rows[0][2]),
                Vec3::new(rows[1][0], rows[1][1], rows[1][2]),
                Vec3::new(rows[2][0], rows[2][1], rows[2][2]),
            ],
        }
    }

    /// A diagonal matrix with `d` on the diagonal.
    #[must_use]
    pub const fn diagonal(d: Vec3) -> Self {
        Self::new([[d.x, 0.0, 0.0], [0.0, d.y, 0.0], [0.0, 0.0, d.z]])
    }

    /// `self · v`.
    #[inline]
    #[must_use]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }

    /// `self · other`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let col = |i: usize| Vec3::new(other.rows[0][i], other.rows[1][i], other.rows[2][i]);
        let (c0, c1, c2) = (col(0), col(1), col(2));
        let row = |r: Vec3| [r.dot(c0), r.dot(c1), r.dot(c2)];
        Self::new([row(self.rows[0]), row(self.rows[1]), row(self.rows[2])])
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [a, b, c] = self.rows;
        a.x * b.y.mul_add(c.z, -(b.z * c.y)) - a.y * b.x.mul_add(c.z, -(b.z * c.x))
            + a.z * b.x.mul_add(c.y, -(b.y * c.x))
    }

    /// Matrix inverse via the adjugate. Returns `None` for singular input.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return None;
        }
        let [a, b, c] = self.rows;
        let inv = 1.0 / det;
        Some(Self::new([
            [
                b.y.mul_add(c.z, -(b.z * c.y)) * inv,
                a.z.mul_add(c.y, -(a.y * c.z)) * inv,
                a.y.mul_add(b.z, -(a.z * b.y)) * inv,
            ],
            [
                b.z.mul_add(c.x, -(b.x * c.z)) * inv,
                a.x.mul_add(c.z, -(a.z * c.x)) * inv,
                a.z.mul_add(b.x, -(a.x * b.z)) * inv,
            ],
            [
                b.x.mul_add(c.y, -(b.y * c.x)) * inv,
                a.y.mul_add(c.x, -(a.x * c.y)) * inv,
                a.x.mul_add(b.y, -(a.y * b.x)) * inv,
            ],
        ]))
    }
}

// ─── Scalars and Angles ──────────────────────────────────────────────────────

/// Linear interpolation: `start` at `t = 0`, `stop` at `t = 1`.
#[inline]
#[must_use]
pub fn lerp(start: f64, stop: f64, t: f64) -> f64 {
    (stop - start).mul_add(t, start)
}

/// Sign of `x` as -1, 0 or 1 (zero maps to zero, unlike `f64::signum`).
#[inline]
#[must_use]
pub fn signum(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Normalize an angle in degrees to [0, 360).
#[inline]
#[must_use]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Normalize an integer angle in degrees to [0, 360).
#[inline]
#[must_use]
pub const fn sanitize_degrees_int(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Shortest arc between two hues, in degrees ([0, 180]).
#[inline]
#[must_use]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// +1 if the shortest path from `from` to `to` runs counter-clockwise
/// (increasing degrees), -1 otherwise.
#[inline]
#[must_use]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    if sanitize_degrees(to - from) <= 180.0 { 1.0 } else { -1.0 }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
