// SPDX-License-Identifier: MIT
//
// HCT: hue and chroma from CAM16, tone from L*.
//
// Tone is the axis contrast is measured on, so two HCT colors with a tone
// gap of 40 or more always read as 3:1 against each other, and 50 or more
// as 4.5:1, whatever their hue and chroma. Hue and chroma come from CAM16
// so that "same hue" looks like the same hue.
//
// An `Hct` is always a realized sRGB color. Constructing one from a
// requested (hue, chroma, tone) goes through the gamut solver, and the
// stored fields are measured back from the resulting ARGB, so `chroma`
// may come out lower than requested.

use std::fmt;

use crate::argb::Argb;
use crate::cam16::Cam16;
use crate::convert::{lstar_from_argb, lstar_from_y};
use crate::solver::solve_to_argb;
use crate::viewing::ViewingConditions;

/// A color in the HCT space.
///
/// Immutable: the `with_*` methods return new values.
#[derive(Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Nearest in-gamut color to the requested hue, chroma and tone.
    ///
    /// Hue is wrapped into [0, 360). Tone is honored to within rounding;
    /// chroma is reduced if sRGB cannot reach it at this hue and tone.
    #[must_use]
    pub fn from(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Measure an ARGB color.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone (L*), [0, 100].
    #[inline]
    #[must_use]
    pub const fn tone(&self) -> f64 {
        self.tone
    }

    #[inline]
    #[must_use]
    pub const fn to_argb(&self) -> Argb {
        self.argb
    }

    #[must_use]
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::from(hue, self.chroma, self.tone)
    }

    #[must_use]
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::from(self.hue, chroma, self.tone)
    }

    #[must_use]
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::from(self.hue, self.chroma, tone)
    }

    /// The color that, seen under `vc`, looks like this color does under
    /// standard conditions.
    ///
    /// Against a dark background colors look lighter, so the result for
    /// `ViewingConditions::with_background_lstar(10.0)` is darker.
    #[must_use]
    pub fn in_viewing_conditions(&self, vc: &ViewingConditions) -> Self {
        let cam = Cam16::from_argb(self.argb);
        let xyz = cam.xyz_in(vc);
        let recast = Cam16::from_xyz_in(xyz, ViewingConditions::standard());
        Self::from(recast.hue, recast.chroma, lstar_from_y(xyz.y))
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.argb
    }
}

impl fmt::Debug for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hct(h={:.2}, c={:.2}, t={:.2}, {})",
            self.hue, self.chroma, self.tone, self.argb
        )
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{:.0} C{:.0} T{:.0}", self.hue, self.chroma, self.tone)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
