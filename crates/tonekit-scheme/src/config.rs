//! Scheme configuration loaded from TOML.
//!
//! ```toml
//! seed = "#6750a4"
//! variant = "tonal-spot"
//! dark = false
//! contrast = 0.0
//! ```
//!
//! Only `seed` is required.

use serde::{Deserialize, Serialize};
use tonekit_hct::Argb;

use crate::error::Result;
use crate::scheme::DynamicScheme;
use crate::variant::Variant;

/// Inputs for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SchemeConfig {
    /// Seed color as a hex string (`#rgb`, `#rrggbb` or `#aarrggbb`).
    pub seed: String,
    /// Variant name
    #[serde(default)]
    pub variant: Variant,
    /// Dark scheme
    #[serde(default)]
    pub dark: bool,
    /// Contrast level in [-1, 1]
    #[serde(default)]
    pub contrast: f64,
}

impl SchemeConfig {
    /// Config with default variant, light mode and standard contrast.
    #[must_use]
    pub fn new(seed: Argb) -> Self {
        Self {
            seed: seed.to_hex(),
            variant: Variant::default(),
            dark: false,
            contrast: 0.0,
        }
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`SchemeError::Config`](crate::SchemeError::Config) on malformed TOML,
    /// a missing seed, an unknown variant name or an unknown key.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            seed = %config.seed,
            variant = %config.variant,
            dark = config.dark,
            contrast = config.contrast,
            "scheme config loaded"
        );

        Ok(config)
    }

    /// The seed as a packed color.
    ///
    /// # Errors
    ///
    /// [`SchemeError::Color`](crate::SchemeError::Color) if the hex string
    /// is malformed.
    pub fn seed_argb(&self) -> Result<Argb> {
        Ok(self.seed.parse()?)
    }

    /// Build the scheme this config describes.
    ///
    /// # Errors
    ///
    /// A malformed seed, or a contrast level outside [-1, 1].
    pub fn build(&self) -> Result<DynamicScheme> {
        DynamicScheme::from_argb(self.seed_argb()?, self.variant, self.dark, self.contrast)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemeError;
    use pretty_assertions::assert_eq;
    use tonekit_hct::ColorError;

    #[test]
    fn full_config() {
        let config = SchemeConfig::from_toml_str(
            r##"
            seed = "#418bd2"
            variant = "fruit-salad"
            dark = true
            contrast = 0.5
            "##,
        )
        .unwrap();
        assert_eq!(
            config,
            SchemeConfig {
                seed: "#418bd2".to_string(),
                variant: Variant::FruitSalad,
                dark: true,
                contrast: 0.5,
            }
        );
        let scheme = config.build().unwrap();
        assert_eq!(scheme.variant(), Variant::FruitSalad);
        assert!(scheme.is_dark());
    }

    #[test]
    fn defaults_fill_in() {
        let config = SchemeConfig::from_toml_str(r##"seed = "#6750a4""##).unwrap();
        assert_eq!(config, SchemeConfig::new(Argb(0xff67_50a4)));
    }

    #[test]
    fn missing_seed_is_config_error() {
        let err = SchemeConfig::from_toml_str("dark = true").unwrap_err();
        assert!(matches!(err, SchemeError::Config(_)));
    }

    #[test]
    fn unknown_variant_is_config_error() {
        let err = SchemeConfig::from_toml_str("seed = \"#fff\"\nvariant = \"pastel\"").unwrap_err();
        assert!(matches!(err, SchemeError::Config(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = SchemeConfig::from_toml_str("seed = \"#fff\"\ncolour = 1").unwrap_err();
        assert!(matches!(err, SchemeError::Config(_)));
    }

    #[test]
    fn bad_seed_fails_at_build() {
        let config = SchemeConfig::from_toml_str(r##"seed = "#12345""##).unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, SchemeError::Color(ColorError::InvalidLength(_))));
    }

    #[test]
    fn contrast_out_of_range_fails_at_build() {
        let config = SchemeConfig::from_toml_str("seed = \"#fff\"\ncontrast = 2.0").unwrap();
        assert!(matches!(config.build(), Err(SchemeError::ContrastLevel(_))));
    }
}
