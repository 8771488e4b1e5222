//! The built-in color roles.
//!
//! Every role is a `static` [`DynamicColor`]. Tones are chosen per scheme:
//! most roles have one tone for light schemes and one for dark, some change
//! for the monochrome variant, and the container roles follow the seed
//! more closely in the fidelity variants.
//!
//! Surfaces that aren't plain background or surface scale with the contrast
//! level, so that containers spread further apart at higher contrast.
//!
//! Foreground roles sit on the "highest surface": the brightest surface in
//! dark schemes and the dimmest in light ones, which is the one they are
//! hardest to read on.

use tonekit_hct::dislike::fix_if_disliked;
use tonekit_hct::Hct;

use crate::contrast_curve::ContrastCurve;
use crate::dynamic_color::{foreground_tone, DynamicColor, PaletteRole};
use crate::scheme::DynamicScheme;
use crate::tone_delta::{ToneDeltaPair, TonePolarity};
use crate::variant::Variant;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[inline]
fn dark_light(s: &DynamicScheme, dark: f64, light: f64) -> f64 {
    if s.is_dark() { dark } else { light }
}

#[inline]
fn is_monochrome(s: &DynamicScheme) -> bool {
    s.variant() == Variant::Monochrome
}

/// Content and Fidelity keep containers close to the seed.
#[inline]
fn is_fidelity(s: &DynamicScheme) -> bool {
    matches!(s.variant(), Variant::Fidelity | Variant::Content)
}

#[inline]
fn curve(s: &DynamicScheme, low: f64, normal: f64, medium: f64, high: f64) -> f64 {
    ContrastCurve::new(low, normal, medium, high).get(s.contrast_level())
}

/// The surface foregrounds are measured against.
#[must_use]
pub fn highest_surface(s: &DynamicScheme) -> &'static DynamicColor {
    if s.is_dark() {
        &SURFACE_BRIGHT
    } else {
        &SURFACE_DIM
    }
}

/// Starting at `tone`, step toward black (or white) until the palette can
/// hold `chroma`, stopping early at a chroma peak or when close enough.
#[must_use]
pub fn find_desired_chroma_by_tone(hue: f64, chroma: f64, tone: f64, by_decreasing_tone: bool) -> f64 {
    let mut answer = tone;
    let mut closest = Hct::from(hue, chroma, tone);
    if closest.chroma() >= chroma {
        return answer;
    }
    let mut chroma_peak = closest.chroma();
    let step = if by_decreasing_tone { -1.0 } else { 1.0 };
    while closest.chroma() < chroma && (0.0..=100.0).contains(&(answer + step)) {
        answer += step;
        let potential = Hct::from(hue, chroma, answer);
        if chroma_peak > potential.chroma() {
            break;
        }
        if (potential.chroma() - chroma).abs() < 0.4 {
            break;
        }
        if (potential.chroma() - chroma).abs() < (closest.chroma() - chroma).abs() {
            closest = potential;
        }
        chroma_peak = chroma_peak.max(potential.chroma());
    }
    answer
}

// ---------------------------------------------------------------------------
// Palette key colors
// ---------------------------------------------------------------------------

pub static PRIMARY_PALETTE_KEY_COLOR: DynamicColor = DynamicColor::new(
    "primary_palette_key_color",
    PaletteRole::Primary,
    |s| s.primary_palette().key_color().tone(),
);

pub static SECONDARY_PALETTE_KEY_COLOR: DynamicColor = DynamicColor::new(
    "secondary_palette_key_color",
    PaletteRole::Secondary,
    |s| s.secondary_palette().key_color().tone(),
);

pub static TERTIARY_PALETTE_KEY_COLOR: DynamicColor = DynamicColor::new(
    "tertiary_palette_key_color",
    PaletteRole::Tertiary,
    |s| s.tertiary_palette().key_color().tone(),
);

pub static NEUTRAL_PALETTE_KEY_COLOR: DynamicColor = DynamicColor::new(
    "neutral_palette_key_color",
    PaletteRole::Neutral,
    |s| s.neutral_palette().key_color().tone(),
);

pub static NEUTRAL_VARIANT_PALETTE_KEY_COLOR: DynamicColor = DynamicColor::new(
    "neutral_variant_palette_key_color",
    PaletteRole::NeutralVariant,
    |s| s.neutral_variant_palette().key_color().tone(),
);

// ---------------------------------------------------------------------------
// Surfaces
// ---------------------------------------------------------------------------

pub static BACKGROUND: DynamicColor =
    DynamicColor::new("background", PaletteRole::Neutral, |s| dark_light(s, 6.0, 98.0))
        .as_background();

pub static ON_BACKGROUND: DynamicColor =
    DynamicColor::new("on_background", PaletteRole::Neutral, |s| dark_light(s, 90.0, 10.0))
        .on(|_| &BACKGROUND)
        .with_contrast_curve(ContrastCurve::new(3.0, 3.0, 4.5, 7.0));

pub static SURFACE: DynamicColor =
    DynamicColor::new("surface", PaletteRole::Neutral, |s| dark_light(s, 6.0, 98.0))
        .as_background();

pub static SURFACE_DIM: DynamicColor = DynamicColor::new("surface_dim", PaletteRole::Neutral, |s| {
    if s.is_dark() { 6.0 } else { curve(s, 87.0, 87.0, 80.0, 75.0) }
})
.as_background();

pub static SURFACE_BRIGHT: DynamicColor =
    DynamicColor::new("surface_bright", PaletteRole::Neutral, |s| {
        if s.is_dark() { curve(s, 24.0, 24.0, 29.0, 34.0) } else { 98.0 }
    })
    .as_background();

pub static SURFACE_CONTAINER_LOWEST: DynamicColor =
    DynamicColor::new("surface_container_lowest", PaletteRole::Neutral, |s| {
        if s.is_dark() { curve(s, 4.0, 4.0, 2.0, 0.0) } else { 100.0 }
    })
    .as_background();

pub static SURFACE_CONTAINER_LOW: DynamicColor =
    DynamicColor::new("surface_container_low", PaletteRole::Neutral, |s| {
        if s.is_dark() {
            curve(s, 10.0, 10.0, 11.0, 12.0)
        } else {
            curve(s, 96.0, 96.0, 96.0, 95.0)
        }
    })
    .as_background();

pub static SURFACE_CONTAINER: DynamicColor =
    DynamicColor::new("surface_container", PaletteRole::Neutral, |s| {
        if s.is_dark() {
            curve(s, 12.0, 12.0, 16.0, 20.0)
        } else {
            curve(s, 94.0, 94.0, 92.0, 90.0)
        }
    })
    .as_background();

pub static SURFACE_CONTAINER_HIGH: DynamicColor =
    DynamicColor::new("surface_container_high", PaletteRole::Neutral, |s| {
        if s.is_dark() {
            curve(s, 17.0, 17.0, 21.0, 25.0)
        } else {
            curve(s, 92.0, 92.0, 88.0, 85.0)
        }
    })
    .as_background();

pub static SURFACE_CONTAINER_HIGHEST: DynamicColor =
    DynamicColor::new("surface_container_highest", PaletteRole::Neutral, |s| {
        if s.is_dark() {
            curve(s, 22.0, 22.0, 26.0, 30.0)
        } else {
            curve(s, 90.0, 90.0, 84.0, 80.0)
        }
    })
    .as_background();

pub static ON_SURFACE: DynamicColor =
    DynamicColor::new("on_surface", PaletteRole::Neutral, |s| dark_light(s, 90.0, 10.0))
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0));

pub static SURFACE_VARIANT: DynamicColor =
    DynamicColor::new("surface_variant", PaletteRole::NeutralVariant, |s| {
        dark_light(s, 30.0, 90.0)
    })
    .as_background();

pub static ON_SURFACE_VARIANT: DynamicColor =
    DynamicColor::new("on_surface_variant", PaletteRole::NeutralVariant, |s| {
        dark_light(s, 80.0, 30.0)
    })
    .on(highest_surface)
    .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0));

pub static INVERSE_SURFACE: DynamicColor =
    DynamicColor::new("inverse_surface", PaletteRole::Neutral, |s| dark_light(s, 90.0, 20.0));

pub static INVERSE_ON_SURFACE: DynamicColor =
    DynamicColor::new("inverse_on_surface", PaletteRole::Neutral, |s| dark_light(s, 20.0, 95.0))
        .on(|_| &INVERSE_SURFACE)
        .with_contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0));

pub static OUTLINE: DynamicColor =
    DynamicColor::new("outline", PaletteRole::NeutralVariant, |s| dark_light(s, 60.0, 50.0))
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(1.5, 3.0, 4.5, 7.0));

pub static OUTLINE_VARIANT: DynamicColor =
    DynamicColor::new("outline_variant", PaletteRole::NeutralVariant, |s| {
        dark_light(s, 30.0, 80.0)
    })
    .on(highest_surface)
    .with_contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5));

pub static SHADOW: DynamicColor = DynamicColor::new("shadow", PaletteRole::Neutral, |_| 0.0);

pub static SCRIM: DynamicColor = DynamicColor::new("scrim", PaletteRole::Neutral, |_| 0.0);

pub static SURFACE_TINT: DynamicColor =
    DynamicColor::new("surface_tint", PaletteRole::Primary, |s| dark_light(s, 80.0, 40.0))
        .as_background();

// ---------------------------------------------------------------------------
// Primary
// ---------------------------------------------------------------------------

fn primary_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&PRIMARY_CONTAINER, &PRIMARY, 10.0, TonePolarity::Nearer, false)
}

fn primary_container_tone(s: &DynamicScheme) -> f64 {
    if is_fidelity(s) {
        s.source_color_hct().tone()
    } else if is_monochrome(s) {
        dark_light(s, 85.0, 25.0)
    } else {
        dark_light(s, 30.0, 90.0)
    }
}

pub static PRIMARY: DynamicColor = DynamicColor::new("primary", PaletteRole::Primary, |s| {
    if is_monochrome(s) {
        dark_light(s, 100.0, 0.0)
    } else {
        dark_light(s, 80.0, 40.0)
    }
})
.as_background()
.on(highest_surface)
.with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
.with_tone_delta_pair(primary_pair);

pub static ON_PRIMARY: DynamicColor = DynamicColor::new("on_primary", PaletteRole::Primary, |s| {
    if is_monochrome(s) {
        dark_light(s, 10.0, 90.0)
    } else {
        dark_light(s, 20.0, 100.0)
    }
})
.on(|_| &PRIMARY)
.with_contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0));

pub static PRIMARY_CONTAINER: DynamicColor =
    DynamicColor::new("primary_container", PaletteRole::Primary, primary_container_tone)
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
        .with_tone_delta_pair(primary_pair);

pub static ON_PRIMARY_CONTAINER: DynamicColor =
    DynamicColor::new("on_primary_container", PaletteRole::Primary, |s| {
        if is_fidelity(s) {
            foreground_tone(primary_container_tone(s), 4.5)
        } else if is_monochrome(s) {
            dark_light(s, 0.0, 100.0)
        } else {
            dark_light(s, 90.0, 30.0)
        }
    })
    .on(|_| &PRIMARY_CONTAINER)
    .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0));

pub static INVERSE_PRIMARY: DynamicColor =
    DynamicColor::new("inverse_primary", PaletteRole::Primary, |s| dark_light(s, 40.0, 80.0))
        .on(|_| &INVERSE_SURFACE)
        .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0));

// ---------------------------------------------------------------------------
// Secondary
// ---------------------------------------------------------------------------

fn secondary_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&SECONDARY_CONTAINER, &SECONDARY, 10.0, TonePolarity::Nearer, false)
}

fn secondary_container_tone(s: &DynamicScheme) -> f64 {
    let initial = dark_light(s, 30.0, 90.0);
    if is_monochrome(s) {
        dark_light(s, 30.0, 85.0)
    } else if is_fidelity(s) {
        let palette = s.secondary_palette();
        find_desired_chroma_by_tone(palette.hue(), palette.chroma(), initial, !s.is_dark())
    } else {
        initial
    }
}

pub static SECONDARY: DynamicColor =
    DynamicColor::new("secondary", PaletteRole::Secondary, |s| dark_light(s, 80.0, 40.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .with_tone_delta_pair(secondary_pair);

pub static ON_SECONDARY: DynamicColor =
    DynamicColor::new("on_secondary", PaletteRole::Secondary, |s| {
        if is_monochrome(s) {
            dark_light(s, 10.0, 100.0)
        } else {
            dark_light(s, 20.0, 100.0)
        }
    })
    .on(|_| &SECONDARY)
    .with_contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0));

pub static SECONDARY_CONTAINER: DynamicColor =
    DynamicColor::new("secondary_container", PaletteRole::Secondary, secondary_container_tone)
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
        .with_tone_delta_pair(secondary_pair);

pub static ON_SECONDARY_CONTAINER: DynamicColor =
    DynamicColor::new("on_secondary_container", PaletteRole::Secondary, |s| {
        if is_monochrome(s) {
            dark_light(s, 90.0, 10.0)
        } else if is_fidelity(s) {
            foreground_tone(secondary_container_tone(s), 4.5)
        } else {
            dark_light(s, 90.0, 30.0)
        }
    })
    .on(|_| &SECONDARY_CONTAINER)
    .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0));

// ---------------------------------------------------------------------------
// Tertiary
// ---------------------------------------------------------------------------

fn tertiary_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&TERTIARY_CONTAINER, &TERTIARY, 10.0, TonePolarity::Nearer, false)
}

fn tertiary_container_tone(s: &DynamicScheme) -> f64 {
    if is_monochrome(s) {
        dark_light(s, 60.0, 49.0)
    } else if is_fidelity(s) {
        let proposed = s.tertiary_palette().hct(s.source_color_hct().tone());
        fix_if_disliked(proposed).tone()
    } else {
        dark_light(s, 30.0, 90.0)
    }
}

pub static TERTIARY: DynamicColor = DynamicColor::new("tertiary", PaletteRole::Tertiary, |s| {
    if is_monochrome(s) {
        dark_light(s, 90.0, 25.0)
    } else {
        dark_light(s, 80.0, 40.0)
    }
})
.as_background()
.on(highest_surface)
.with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
.with_tone_delta_pair(tertiary_pair);

pub static ON_TERTIARY: DynamicColor =
    DynamicColor::new("on_tertiary", PaletteRole::Tertiary, |s| {
        if is_monochrome(s) {
            dark_light(s, 10.0, 90.0)
        } else {
            dark_light(s, 20.0, 100.0)
        }
    })
    .on(|_| &TERTIARY)
    .with_contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0));

pub static TERTIARY_CONTAINER: DynamicColor =
    DynamicColor::new("tertiary_container", PaletteRole::Tertiary, tertiary_container_tone)
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
        .with_tone_delta_pair(tertiary_pair);

pub static ON_TERTIARY_CONTAINER: DynamicColor =
    DynamicColor::new("on_tertiary_container", PaletteRole::Tertiary, |s| {
        if is_monochrome(s) {
            dark_light(s, 0.0, 100.0)
        } else if is_fidelity(s) {
            foreground_tone(tertiary_container_tone(s), 4.5)
        } else {
            dark_light(s, 90.0, 30.0)
        }
    })
    .on(|_| &TERTIARY_CONTAINER)
    .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0));

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

fn error_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&ERROR_CONTAINER, &ERROR, 10.0, TonePolarity::Nearer, false)
}

pub static ERROR: DynamicColor =
    DynamicColor::new("error", PaletteRole::Error, |s| dark_light(s, 80.0, 40.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .with_tone_delta_pair(error_pair);

pub static ON_ERROR: DynamicColor =
    DynamicColor::new("on_error", PaletteRole::Error, |s| dark_light(s, 20.0, 100.0))
        .on(|_| &ERROR)
        .with_contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0));

pub static ERROR_CONTAINER: DynamicColor =
    DynamicColor::new("error_container", PaletteRole::Error, |s| dark_light(s, 30.0, 90.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
        .with_tone_delta_pair(error_pair);

pub static ON_ERROR_CONTAINER: DynamicColor =
    DynamicColor::new("on_error_container", PaletteRole::Error, |s| {
        if is_monochrome(s) {
            dark_light(s, 90.0, 10.0)
        } else {
            dark_light(s, 90.0, 30.0)
        }
    })
    .on(|_| &ERROR_CONTAINER)
    .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0));

// ---------------------------------------------------------------------------
// Fixed
//
// Fixed colors keep the same tone in light and dark schemes, so content
// built on them doesn't change between modes.
// ---------------------------------------------------------------------------

const FIXED_CURVE: ContrastCurve = ContrastCurve::new(1.0, 1.0, 3.0, 4.5);
const ON_FIXED_CURVE: ContrastCurve = ContrastCurve::new(4.5, 7.0, 11.0, 21.0);
const ON_FIXED_VARIANT_CURVE: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);

#[inline]
fn mono_or(s: &DynamicScheme, monochrome: f64, other: f64) -> f64 {
    if is_monochrome(s) { monochrome } else { other }
}

fn primary_fixed_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&PRIMARY_FIXED, &PRIMARY_FIXED_DIM, 10.0, TonePolarity::Lighter, true)
}

pub static PRIMARY_FIXED: DynamicColor =
    DynamicColor::new("primary_fixed", PaletteRole::Primary, |s| mono_or(s, 40.0, 90.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(FIXED_CURVE)
        .with_tone_delta_pair(primary_fixed_pair);

pub static PRIMARY_FIXED_DIM: DynamicColor =
    DynamicColor::new("primary_fixed_dim", PaletteRole::Primary, |s| mono_or(s, 30.0, 80.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(FIXED_CURVE)
        .with_tone_delta_pair(primary_fixed_pair);

pub static ON_PRIMARY_FIXED: DynamicColor =
    DynamicColor::new("on_primary_fixed", PaletteRole::Primary, |s| mono_or(s, 100.0, 10.0))
        .on(|_| &PRIMARY_FIXED_DIM)
        .also_on(|_| &PRIMARY_FIXED)
        .with_contrast_curve(ON_FIXED_CURVE);

pub static ON_PRIMARY_FIXED_VARIANT: DynamicColor =
    DynamicColor::new("on_primary_fixed_variant", PaletteRole::Primary, |s| {
        mono_or(s, 90.0, 30.0)
    })
    .on(|_| &PRIMARY_FIXED_DIM)
    .also_on(|_| &PRIMARY_FIXED)
    .with_contrast_curve(ON_FIXED_VARIANT_CURVE);

fn secondary_fixed_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&SECONDARY_FIXED, &SECONDARY_FIXED_DIM, 10.0, TonePolarity::Lighter, true)
}

pub static SECONDARY_FIXED: DynamicColor =
    DynamicColor::new("secondary_fixed", PaletteRole::Secondary, |s| mono_or(s, 80.0, 90.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(FIXED_CURVE)
        .with_tone_delta_pair(secondary_fixed_pair);

pub static SECONDARY_FIXED_DIM: DynamicColor =
    DynamicColor::new("secondary_fixed_dim", PaletteRole::Secondary, |s| mono_or(s, 70.0, 80.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(FIXED_CURVE)
        .with_tone_delta_pair(secondary_fixed_pair);

pub static ON_SECONDARY_FIXED: DynamicColor =
    DynamicColor::new("on_secondary_fixed", PaletteRole::Secondary, |_| 10.0)
        .on(|_| &SECONDARY_FIXED_DIM)
        .also_on(|_| &SECONDARY_FIXED)
        .with_contrast_curve(ON_FIXED_CURVE);

pub static ON_SECONDARY_FIXED_VARIANT: DynamicColor =
    DynamicColor::new("on_secondary_fixed_variant", PaletteRole::Secondary, |s| {
        mono_or(s, 25.0, 30.0)
    })
    .on(|_| &SECONDARY_FIXED_DIM)
    .also_on(|_| &SECONDARY_FIXED)
    .with_contrast_curve(ON_FIXED_VARIANT_CURVE);

fn tertiary_fixed_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(&TERTIARY_FIXED, &TERTIARY_FIXED_DIM, 10.0, TonePolarity::Lighter, true)
}

pub static TERTIARY_FIXED: DynamicColor =
    DynamicColor::new("tertiary_fixed", PaletteRole::Tertiary, |s| mono_or(s, 40.0, 90.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(FIXED_CURVE)
        .with_tone_delta_pair(tertiary_fixed_pair);

pub static TERTIARY_FIXED_DIM: DynamicColor =
    DynamicColor::new("tertiary_fixed_dim", PaletteRole::Tertiary, |s| mono_or(s, 30.0, 80.0))
        .as_background()
        .on(highest_surface)
        .with_contrast_curve(FIXED_CURVE)
        .with_tone_delta_pair(tertiary_fixed_pair);

pub static ON_TERTIARY_FIXED: DynamicColor =
    DynamicColor::new("on_tertiary_fixed", PaletteRole::Tertiary, |s| mono_or(s, 100.0, 10.0))
        .on(|_| &TERTIARY_FIXED_DIM)
        .also_on(|_| &TERTIARY_FIXED)
        .with_contrast_curve(ON_FIXED_CURVE);

pub static ON_TERTIARY_FIXED_VARIANT: DynamicColor =
    DynamicColor::new("on_tertiary_fixed_variant", PaletteRole::Tertiary, |s| {
        mono_or(s, 90.0, 30.0)
    })
    .on(|_| &TERTIARY_FIXED_DIM)
    .also_on(|_| &TERTIARY_FIXED)
    .with_contrast_curve(ON_FIXED_VARIANT_CURVE);

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Every built-in role, in display order.
pub static ALL: [&DynamicColor; 54] = [
    &PRIMARY_PALETTE_KEY_COLOR,
    &SECONDARY_PALETTE_KEY_COLOR,
    &TERTIARY_PALETTE_KEY_COLOR,
    &NEUTRAL_PALETTE_KEY_COLOR,
    &NEUTRAL_VARIANT_PALETTE_KEY_COLOR,
    &BACKGROUND,
    &ON_BACKGROUND,
    &SURFACE,
    &SURFACE_DIM,
    &SURFACE_BRIGHT,
    &SURFACE_CONTAINER_LOWEST,
    &SURFACE_CONTAINER_LOW,
    &SURFACE_CONTAINER,
    &SURFACE_CONTAINER_HIGH,
    &SURFACE_CONTAINER_HIGHEST,
    &ON_SURFACE,
    &SURFACE_VARIANT,
    &ON_SURFACE_VARIANT,
    &INVERSE_SURFACE,
    &INVERSE_ON_SURFACE,
    &OUTLINE,
    &OUTLINE_VARIANT,
    &SHADOW,
    &SCRIM,
    &SURFACE_TINT,
    &PRIMARY,
    &ON_PRIMARY,
    &PRIMARY_CONTAINER,
    &ON_PRIMARY_CONTAINER,
    &INVERSE_PRIMARY,
    &SECONDARY,
    &ON_SECONDARY,
    &SECONDARY_CONTAINER,
    &ON_SECONDARY_CONTAINER,
    &TERTIARY,
    &ON_TERTIARY,
    &TERTIARY_CONTAINER,
    &ON_TERTIARY_CONTAINER,
    &ERROR,
    &ON_ERROR,
    &ERROR_CONTAINER,
    &ON_ERROR_CONTAINER,
    &PRIMARY_FIXED,
    &PRIMARY_FIXED_DIM,
    &ON_PRIMARY_FIXED,
    &ON_PRIMARY_FIXED_VARIANT,
    &SECONDARY_FIXED,
    &SECONDARY_FIXED_DIM,
    &ON_SECONDARY_FIXED,
    &ON_SECONDARY_FIXED_VARIANT,
    &TERTIARY_FIXED,
    &TERTIARY_FIXED_DIM,
    &ON_TERTIARY_FIXED,
    &ON_TERTIARY_FIXED_VARIANT,
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
