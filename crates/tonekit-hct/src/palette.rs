// SPDX-License-Identifier: MIT
//
// Tonal palettes: one hue and one chroma, every tone from 0 to 100.
//
// A palette is the unit a scheme draws from. Roles pick a palette and a
// tone; the palette asks the gamut solver for the color and remembers the
// answer for integer tones.
//
// The key color is the palette's most representative member: the tone
// closest to 50 that can actually carry the requested chroma. It is found
// by a binary search over integer tones on the solver's maximum chroma,
// which rises from black to a peak and falls again toward white.

use std::collections::HashMap;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::argb::Argb;
use crate::error::{ColorError, Result};
use crate::hct::Hct;

/// Chroma asked of the solver when probing how much chroma a tone can hold.
/// Higher than anything sRGB reaches, so the solver returns the maximum.
const MAX_CHROMA_VALUE: f64 = 200.0;

/// A hue/chroma pair expanded into tones on demand.
///
/// Thread-safe: the tone memo sits behind an `RwLock` and the key color is
/// computed once.
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: OnceLock<Hct>,
    memo: RwLock<HashMap<u8, Argb>>,
}

impl TonalPalette {
    /// Palette for the given hue and chroma. The key color is searched for
    /// on first use.
    #[must_use]
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue,
            chroma,
            key_color: OnceLock::new(),
            memo: RwLock::new(HashMap::new()),
        }
    }

    /// Palette with the hue and chroma of `hct`, which is also its key color.
    #[must_use]
    pub fn from_hct(hct: Hct) -> Self {
        Self {
            hue: hct.hue(),
            chroma: hct.chroma(),
            key_color: OnceLock::from(hct),
            memo: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Requested chroma. Individual tones may fall short of it.
    #[inline]
    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    /// The color at an integer tone.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ToneOutOfRange`] if `tone > 100`.
    pub fn tone(&self, tone: u8) -> Result<Argb> {
        if tone > 100 {
            return Err(ColorError::ToneOutOfRange(f64::from(tone)));
        }
        let cached = self.memo.read().ok().and_then(|memo| memo.get(&tone).copied());
        if let Some(argb) = cached {
            return Ok(argb);
        }
        let argb = Hct::from(self.hue, self.chroma, f64::from(tone)).to_argb();
        // A poisoned lock only loses the memo; the value is still correct.
        if let Ok(mut memo) = self.memo.write() {
            memo.insert(tone, argb);
        }
        Ok(argb)
    }

    /// The color at any tone, fractional ones included. Not memoized.
    #[must_use]
    pub fn hct(&self, tone: f64) -> Hct {
        Hct::from(self.hue, self.chroma, tone)
    }

    /// The tone nearest 50 that carries the palette's chroma, or the most
    /// chromatic tone if none can.
    #[must_use]
    pub fn key_color(&self) -> Hct {
        *self
            .key_color
            .get_or_init(|| KeyColor::new(self.hue, self.chroma).create())
    }
}

impl Clone for TonalPalette {
    fn clone(&self) -> Self {
        let memo = self.memo.read().map(|m| m.clone()).unwrap_or_default();
        Self {
            hue: self.hue,
            chroma: self.chroma,
            key_color: self.key_color.clone(),
            memo: RwLock::new(memo),
        }
    }
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("hue", &self.hue)
            .field("chroma", &self.chroma)
            .field("key_color", &self.key_color.get())
            .finish_non_exhaustive()
    }
}

// ─── Key Color Search ────────────────────────────────────────────────────────

struct KeyColor {
    hue: f64,
    requested_chroma: f64,
    chroma_cache: HashMap<i32, f64>,
}

impl KeyColor {
    const PIVOT_TONE: i32 = 50;
    const TONE_STEP: i32 = 1;
    const EPSILON: f64 = 0.01;

    fn new(hue: f64, requested_chroma: f64) -> Self {
        Self {
            hue,
            requested_chroma,
            chroma_cache: HashMap::new(),
        }
    }

    fn create(mut self) -> Hct {
        let mut lower = 0;
        let mut upper = 100;
        while lower < upper {
            let mid = (lower + upper) / 2;
            let is_ascending = self.max_chroma(mid) < self.max_chroma(mid + Self::TONE_STEP);
            let sufficient = self.max_chroma(mid) >= self.requested_chroma - Self::EPSILON;

            if sufficient {
                // Narrow toward whichever bound is closer to the pivot.
                if (lower - Self::PIVOT_TONE).abs() < (upper - Self::PIVOT_TONE).abs() {
                    upper = mid;
                } else {
                    if lower == mid {
                        return self.finish(lower);
                    }
                    lower = mid;
                }
            } else if is_ascending {
                lower = mid + Self::TONE_STEP;
            } else {
                upper = mid;
            }
        }
        self.finish(lower)
    }

    fn finish(&self, tone: i32) -> Hct {
        let hct = Hct::from(self.hue, self.requested_chroma, f64::from(tone));
        #[cfg(feature = "tracing")]
        tracing::trace!(
            hue = self.hue,
            requested = self.requested_chroma,
            achieved = hct.chroma(),
            tone,
            "key color chosen"
        );
        hct
    }

    fn max_chroma(&mut self, tone: i32) -> f64 {
        let hue = self.hue;
        *self
            .chroma_cache
            .entry(tone)
            .or_insert_with(|| Hct::from(hue, MAX_CHROMA_VALUE, f64::from(tone)).chroma())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
