//! Tone separation constraints between two roles.
//!
//! A container and the accent drawn on top of it, or a fixed color and its
//! dim variant, need to stay visibly apart even after each has been pushed
//! around to meet contrast against the surface. A [`ToneDeltaPair`] states
//! the minimum gap and which side each role sits on.

use std::fmt;

use crate::dynamic_color::DynamicColor;

/// Which way `role_a` sits relative to `role_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TonePolarity {
    /// `role_a` is darker than `role_b`.
    Darker,
    /// `role_a` is lighter than `role_b`.
    Lighter,
    /// `role_a` is closer to the surface tone than `role_b`.
    Nearer,
    /// `role_a` is further from the surface tone than `role_b`.
    Farther,
}

/// Minimum tone gap between two roles.
#[derive(Clone, Copy)]
pub struct ToneDeltaPair {
    pub role_a: &'static DynamicColor,
    pub role_b: &'static DynamicColor,
    /// Minimum absolute tone difference.
    pub delta: f64,
    pub polarity: TonePolarity,
    /// When one side lands in the 50–59 band, move both out of it on the same
    /// side instead of just that one.
    pub stay_together: bool,
}

impl ToneDeltaPair {
    #[must_use]
    pub const fn new(
        role_a: &'static DynamicColor,
        role_b: &'static DynamicColor,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
        }
    }

    /// Whether `role_a` is the one nearer the surface in this mode.
    #[must_use]
    pub const fn a_is_nearer(&self, is_dark: bool) -> bool {
        match self.polarity {
            TonePolarity::Nearer => true,
            TonePolarity::Farther => false,
            TonePolarity::Lighter => !is_dark,
            TonePolarity::Darker => is_dark,
        }
    }

    /// `(nearer, farther)` for this mode.
    #[must_use]
    pub const fn nearer_farther(
        &self,
        is_dark: bool,
    ) -> (&'static DynamicColor, &'static DynamicColor) {
        if self.a_is_nearer(is_dark) {
            (self.role_a, self.role_b)
        } else {
            (self.role_b, self.role_a)
        }
    }

    /// Whether `role` is one of the two members.
    #[must_use]
    pub fn contains(&self, role: &DynamicColor) -> bool {
        std::ptr::eq(self.role_a, role) || std::ptr::eq(self.role_b, role)
    }
}

impl fmt::Debug for ToneDeltaPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToneDeltaPair")
            .field("role_a", &self.role_a.name())
            .field("role_b", &self.role_b.name())
            .field("delta", &self.delta)
            .field("polarity", &self.polarity)
            .field("stay_together", &self.stay_together)
            .finish()
    }
}
