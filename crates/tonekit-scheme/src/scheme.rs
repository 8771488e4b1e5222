//! A resolved color scheme: seed, variant, mode and contrast level.
//!
//! The scheme owns the six palettes and a memo of resolved roles. It is
//! cheap to query repeatedly and safe to share between threads.

use std::fmt;

use tonekit_hct::{Argb, Hct, TonalPalette};

use crate::cache::StripedCache;
use crate::dynamic_color::{DynamicColor, PaletteRole};
use crate::error::{Result, SchemeError};
use crate::registry::RoleRegistry;
use crate::variant::{Palettes, Variant};

/// Everything a role needs to resolve itself.
pub struct DynamicScheme {
    source_color_hct: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    palettes: Palettes,
    tone_cache: StripedCache<f64>,
    hct_cache: StripedCache<Hct>,
}

impl DynamicScheme {
    /// Build a scheme from a seed color.
    ///
    /// `contrast_level` runs from -1 (reduced) through 0 (standard) to 1
    /// (high).
    ///
    /// # Errors
    ///
    /// [`SchemeError::ContrastLevel`] if the level is outside [-1, 1] or not
    /// finite.
    pub fn new(source: Hct, variant: Variant, is_dark: bool, contrast_level: f64) -> Result<Self> {
        if !contrast_level.is_finite() || !(-1.0..=1.0).contains(&contrast_level) {
            return Err(SchemeError::ContrastLevel(contrast_level));
        }
        let palettes = variant.palettes(source)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %variant,
            is_dark,
            contrast_level,
            seed = %source.to_argb(),
            "scheme constructed"
        );

        Ok(Self {
            source_color_hct: source,
            variant,
            is_dark,
            contrast_level,
            palettes,
            tone_cache: StripedCache::new(),
            hct_cache: StripedCache::new(),
        })
    }

    /// Shorthand for [`DynamicScheme::new`] from a packed seed.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicScheme::new`].
    pub fn from_argb(seed: Argb, variant: Variant, is_dark: bool, contrast_level: f64) -> Result<Self> {
        Self::new(Hct::from_argb(seed), variant, is_dark, contrast_level)
    }

    // -- accessors --

    #[must_use]
    pub const fn source_color_hct(&self) -> Hct {
        self.source_color_hct
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub const fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// The palette a role tag refers to.
    #[must_use]
    pub const fn palette(&self, role: PaletteRole) -> &TonalPalette {
        match role {
            PaletteRole::Primary => &self.palettes.primary,
            PaletteRole::Secondary => &self.palettes.secondary,
            PaletteRole::Tertiary => &self.palettes.tertiary,
            PaletteRole::Neutral => &self.palettes.neutral,
            PaletteRole::NeutralVariant => &self.palettes.neutral_variant,
            PaletteRole::Error => &self.palettes.error,
        }
    }

    #[must_use]
    pub const fn primary_palette(&self) -> &TonalPalette {
        &self.palettes.primary
    }

    #[must_use]
    pub const fn secondary_palette(&self) -> &TonalPalette {
        &self.palettes.secondary
    }

    #[must_use]
    pub const fn tertiary_palette(&self) -> &TonalPalette {
        &self.palettes.tertiary
    }

    #[must_use]
    pub const fn neutral_palette(&self) -> &TonalPalette {
        &self.palettes.neutral
    }

    #[must_use]
    pub const fn neutral_variant_palette(&self) -> &TonalPalette {
        &self.palettes.neutral_variant
    }

    #[must_use]
    pub const fn error_palette(&self) -> &TonalPalette {
        &self.palettes.error
    }

    // -- resolution --

    /// Resolve a role in this scheme.
    #[must_use]
    pub fn argb(&self, role: &'static DynamicColor) -> Argb {
        role.get_argb(self)
    }

    /// Resolve a built-in role by name.
    ///
    /// # Errors
    ///
    /// [`SchemeError::UnknownRole`] if no built-in role has that name.
    pub fn argb_of(&self, name: &str) -> Result<Argb> {
        Ok(RoleRegistry::builtin().get(name)?.get_argb(self))
    }

    /// Every built-in role, resolved, in registry order.
    pub fn resolved(&self) -> impl Iterator<Item = (&'static str, Argb)> + '_ {
        RoleRegistry::builtin()
            .iter()
            .map(move |role| (role.name(), role.get_argb(self)))
    }

    /// Forget every memoized role. Results don't change; they are just
    /// recomputed on the next query.
    pub fn clear_cache(&self) {
        self.tone_cache.clear();
        self.hct_cache.clear();
    }

    pub(crate) const fn tone_cache(&self) -> &StripedCache<f64> {
        &self.tone_cache
    }

    pub(crate) const fn hct_cache(&self) -> &StripedCache<Hct> {
        &self.hct_cache
    }
}

impl fmt::Debug for DynamicScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicScheme")
            .field("source", &self.source_color_hct)
            .field("variant", &self.variant)
            .field("is_dark", &self.is_dark)
            .field("contrast_level", &self.contrast_level)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
