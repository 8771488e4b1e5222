//! Contrast targets that scale with the user's contrast preference.
//!
//! A curve holds four ratios, one for each anchor of the contrast level:
//! -1 (reduced), 0 (standard), 0.5 (medium) and 1 (high). Levels between
//! anchors interpolate linearly; levels outside [-1, 1] clamp to the ends.

use tonekit_hct::math::lerp;

/// Minimum contrast ratio a role must reach, as a function of contrast level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    /// Ratio at level -1.
    pub low: f64,
    /// Ratio at level 0.
    pub normal: f64,
    /// Ratio at level 0.5.
    pub medium: f64,
    /// Ratio at level 1.
    pub high: f64,
}

impl ContrastCurve {
    #[must_use]
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// The target ratio at `contrast_level`.
    #[must_use]
    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, contrast_level + 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, contrast_level / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
