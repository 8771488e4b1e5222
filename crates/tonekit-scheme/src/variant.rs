//! Scheme variants: how a seed color becomes six tonal palettes.
//!
//! Every variant keeps the error palette fixed at a red (hue 25, chroma 84).
//! The other five palettes take their hue from the seed, rotated or not,
//! and a chroma that sets the variant's character: from fully gray
//! (monochrome) to the seed's own chroma (content, fidelity).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonekit_hct::dislike::fix_if_disliked;
use tonekit_hct::math::sanitize_degrees;
use tonekit_hct::{ColorError, Hct, TemperatureCache, TonalPalette};

use crate::error::{Result, SchemeError};

/// Stylistic family of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Grayscale; every palette has chroma 0.
    Monochrome,
    /// Near-grayscale with a hint of the seed hue.
    Neutral,
    /// Calm, low chroma palettes around the seed hue.
    #[default]
    TonalSpot,
    /// Maximum primary chroma; secondary and tertiary rotated by hue band.
    Vibrant,
    /// Primary pushed away from the seed hue for a playful look.
    Expressive,
    /// Primary is the seed itself; tertiary is an analogous color.
    Content,
    /// Like content, with a complementary tertiary.
    Fidelity,
    /// Colorful accents on gray surfaces.
    Rainbow,
    /// Primary and secondary rotated away from the seed.
    FruitSalad,
}

/// The six palettes a scheme draws from.
#[derive(Debug, Clone)]
pub struct Palettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

// ---------------------------------------------------------------------------
// Hue rotation tables
// ---------------------------------------------------------------------------

const VIBRANT_HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [f64; 9] = [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [f64; 9] = [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// Rotate the source hue by the amount assigned to the band it falls in.
///
/// `hues` are ascending band edges; `rotations[i]` applies to sources
/// strictly between `hues[i]` and `hues[i + 1]`. A single rotation applies
/// to every hue. A source on a band edge keeps its hue.
///
/// # Errors
///
/// [`ColorError::RotationTableMismatch`] when the two tables differ in
/// length.
pub fn rotated_hue(source: Hct, hues: &[f64], rotations: &[f64]) -> tonekit_hct::Result<f64> {
    if hues.len() != rotations.len() {
        return Err(ColorError::RotationTableMismatch {
            hues: hues.len(),
            rotations: rotations.len(),
        });
    }
    let source_hue = source.hue();
    if let [rotation] = rotations {
        return Ok(sanitize_degrees(source_hue + rotation));
    }
    let rotated = hues
        .windows(2)
        .zip(rotations)
        .find(|(band, _)| band[0] < source_hue && source_hue < band[1])
        .map_or(source_hue, |(_, rotation)| sanitize_degrees(source_hue + rotation));
    Ok(rotated)
}

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

impl Variant {
    /// Kebab-case name, as used in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Neutral => "neutral",
            Self::TonalSpot => "tonal-spot",
            Self::Vibrant => "vibrant",
            Self::Expressive => "expressive",
            Self::Content => "content",
            Self::Fidelity => "fidelity",
            Self::Rainbow => "rainbow",
            Self::FruitSalad => "fruit-salad",
        }
    }

    /// All variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochrome, Self::Neutral, Self::TonalSpot,
            Self::Vibrant, Self::Expressive, Self::Content,
            Self::Fidelity, Self::Rainbow, Self::FruitSalad,
        ]
    }

    /// Build the six palettes for a seed.
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError::RotationTableMismatch`] from the hue
    /// rotation tables.
    pub fn palettes(self, source: Hct) -> Result<Palettes> {
        let hue = source.hue();
        let chroma = source.chroma();
        let hc = TonalPalette::from_hue_and_chroma;

        let [primary, secondary, tertiary, neutral, neutral_variant] = match self {
            Self::Monochrome => [hc(hue, 0.0), hc(hue, 0.0), hc(hue, 0.0), hc(hue, 0.0), hc(hue, 0.0)],
            Self::Neutral => [
                hc(hue, 12.0),
                hc(hue, 8.0),
                hc(sanitize_degrees(hue + 60.0), 16.0),
                hc(hue, 2.0),
                hc(hue, 2.0),
            ],
            Self::TonalSpot => [
                hc(hue, 36.0),
                hc(hue, 16.0),
                hc(sanitize_degrees(hue + 60.0), 24.0),
                hc(hue, 6.0),
                hc(hue, 8.0),
            ],
            Self::Vibrant => [
                hc(hue, 200.0),
                hc(rotated_hue(source, &VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS)?, 24.0),
                hc(rotated_hue(source, &VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS)?, 32.0),
                hc(hue, 10.0),
                hc(hue, 12.0),
            ],
            Self::Expressive => [
                hc(sanitize_degrees(hue + 240.0), 40.0),
                hc(rotated_hue(source, &EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS)?, 24.0),
                hc(rotated_hue(source, &EXPRESSIVE_HUES, &EXPRESSIVE_TERTIARY_ROTATIONS)?, 32.0),
                hc(sanitize_degrees(hue + 15.0), 8.0),
                hc(sanitize_degrees(hue + 15.0), 12.0),
            ],
            Self::Content => {
                let analogous = TemperatureCache::new(source).analogous(3, 6);
                let tertiary = analogous.last().copied().unwrap_or(source);
                [
                    hc(hue, chroma),
                    hc(hue, (chroma - 32.0).max(chroma * 0.5)),
                    TonalPalette::from_hct(fix_if_disliked(tertiary)),
                    hc(hue, chroma / 8.0),
                    hc(hue, chroma / 8.0 + 4.0),
                ]
            }
            Self::Fidelity => {
                let complement = TemperatureCache::new(source).complement();
                [
                    hc(hue, chroma),
                    hc(hue, (chroma - 32.0).max(chroma * 0.5)),
                    TonalPalette::from_hct(fix_if_disliked(complement)),
                    hc(hue, chroma / 8.0),
                    hc(hue, chroma / 8.0 + 4.0),
                ]
            }
            Self::Rainbow => [
                hc(hue, 48.0),
                hc(hue, 16.0),
                hc(sanitize_degrees(hue + 60.0), 24.0),
                hc(hue, 0.0),
                hc(hue, 0.0),
            ],
            Self::FruitSalad => [
                hc(sanitize_degrees(hue - 50.0), 48.0),
                hc(sanitize_degrees(hue - 50.0), 36.0),
                hc(hue, 36.0),
                hc(hue, 10.0),
                hc(hue, 16.0),
            ],
        };

        Ok(Palettes {
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
            error: hc(25.0, 84.0),
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SchemeError;

    /// Case-insensitive; underscores are accepted in place of hyphens.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .find(|v| v.name() == wanted)
            .copied()
            .ok_or_else(|| SchemeError::UnknownVariant(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
