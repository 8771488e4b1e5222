//! Color roles and the contrast-aware tone resolver.
//!
//! A [`DynamicColor`] doesn't hold a color. It describes how to pick one
//! from a scheme: which palette, which tone it would like, what it sits on,
//! how much contrast it needs against that, and which other role it must
//! stay apart from. Resolving a role against a [`DynamicScheme`] walks those
//! constraints and lands on a tone:
//!
//! ```text
//! nominal tone (role's preference for this scheme)
//!     │
//!     ▼
//! contrast against background(s)   ── too low? ──► foreground_tone()
//!     │
//!     ▼
//! tone delta pair                  ── too close? ─► expand, then contract
//!     │
//!     ▼
//! awkward zone [50, 60)            ──────────────► 49 or 60
//!     │
//!     ▼
//! tone ──► palette.hct(tone) ──► Argb
//! ```
//!
//! Roles are `static` descriptors made of plain function pointers, shared by
//! every scheme. Results are memoized per scheme, keyed by the descriptor's
//! address, so resolution takes `&'static self`.

use std::fmt;

use tonekit_hct::contrast::{
    darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones, RATIO_MIN,
};
use tonekit_hct::{Argb, Hct};

use crate::cache::RoleId;
use crate::contrast_curve::ContrastCurve;
use crate::scheme::DynamicScheme;
use crate::tone_delta::ToneDeltaPair;

/// Nominal tone of a role in a scheme.
pub type ToneFn = fn(&DynamicScheme) -> f64;

/// A role another role is drawn on.
pub type BackgroundFn = fn(&DynamicScheme) -> &'static DynamicColor;

/// The tone separation constraint a role takes part in.
pub type ToneDeltaPairFn = fn(&DynamicScheme) -> ToneDeltaPair;

/// Which of the scheme's palettes a role draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

// ---------------------------------------------------------------------------
// DynamicColor
// ---------------------------------------------------------------------------

/// A named color role.
///
/// Built with `const fn`s so roles can live in `static`s:
///
/// ```
/// use tonekit_scheme::{ContrastCurve, DynamicColor, PaletteRole, roles};
///
/// static ACCENT: DynamicColor = DynamicColor::new("accent", PaletteRole::Tertiary, |s| {
///     if s.is_dark() { 80.0 } else { 40.0 }
/// })
/// .on(|_| &roles::SURFACE)
/// .with_contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0));
/// ```
#[derive(Clone, Copy)]
pub struct DynamicColor {
    name: &'static str,
    palette: PaletteRole,
    tone: ToneFn,
    is_background: bool,
    background: Option<BackgroundFn>,
    second_background: Option<BackgroundFn>,
    contrast_curve: Option<ContrastCurve>,
    tone_delta_pair: Option<ToneDeltaPairFn>,
}

impl DynamicColor {
    /// A role with a name, a palette and a nominal tone. With nothing else
    /// attached it resolves to exactly its nominal tone.
    #[must_use]
    pub const fn new(name: &'static str, palette: PaletteRole, tone: ToneFn) -> Self {
        Self {
            name,
            palette,
            tone,
            is_background: false,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
        }
    }

    /// Mark this role as something other roles are drawn on.
    #[must_use]
    pub const fn as_background(mut self) -> Self {
        self.is_background = true;
        self
    }

    /// The role this one is drawn on.
    #[must_use]
    pub const fn on(mut self, background: BackgroundFn) -> Self {
        self.background = Some(background);
        self
    }

    /// A second surface this role must also read against.
    #[must_use]
    pub const fn also_on(mut self, second_background: BackgroundFn) -> Self {
        self.second_background = Some(second_background);
        self
    }

    #[must_use]
    pub const fn with_contrast_curve(mut self, curve: ContrastCurve) -> Self {
        self.contrast_curve = Some(curve);
        self
    }

    #[must_use]
    pub const fn with_tone_delta_pair(mut self, pair: ToneDeltaPairFn) -> Self {
        self.tone_delta_pair = Some(pair);
        self
    }

    // -- accessors --

    /// Role name, the key for registry lookups.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Identity of this descriptor: its address.
    #[must_use]
    pub fn id(&self) -> RoleId {
        std::ptr::from_ref(self).addr()
    }

    #[must_use]
    pub const fn palette_role(&self) -> PaletteRole {
        self.palette
    }

    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.is_background
    }

    #[must_use]
    pub const fn contrast_curve(&self) -> Option<ContrastCurve> {
        self.contrast_curve
    }

    #[must_use]
    pub fn background(&self, scheme: &DynamicScheme) -> Option<&'static Self> {
        self.background.map(|f| f(scheme))
    }

    #[must_use]
    pub fn second_background(&self, scheme: &DynamicScheme) -> Option<&'static Self> {
        self.second_background.map(|f| f(scheme))
    }

    #[must_use]
    pub fn tone_delta_pair(&self, scheme: &DynamicScheme) -> Option<ToneDeltaPair> {
        self.tone_delta_pair.map(|f| f(scheme))
    }

    /// The tone this role would pick with no constraints applied.
    #[must_use]
    pub fn nominal_tone(&self, scheme: &DynamicScheme) -> f64 {
        (self.tone)(scheme)
    }

    /// Contrast this role must reach at the scheme's contrast level.
    fn desired_ratio(&self, scheme: &DynamicScheme) -> f64 {
        self.contrast_curve
            .map_or(RATIO_MIN, |c| c.get(scheme.contrast_level()))
    }

    // -- resolution --

    /// The role as a packed color in `scheme`.
    #[must_use]
    pub fn get_argb(&'static self, scheme: &DynamicScheme) -> Argb {
        self.get_hct(scheme).to_argb()
    }

    /// The role as an HCT color in `scheme`.
    #[must_use]
    pub fn get_hct(&'static self, scheme: &DynamicScheme) -> Hct {
        if let Some(hct) = scheme.hct_cache().get(self.id()) {
            return hct;
        }
        let hct = scheme.palette(self.palette).hct(self.get_tone(scheme));
        scheme.hct_cache().insert(self.id(), hct);
        hct
    }

    /// The role's tone in `scheme`, after every contrast constraint.
    ///
    /// Never fails: a target that can't be met resolves to the best tone
    /// available. The result is always within [0, 100].
    #[must_use]
    pub fn get_tone(&'static self, scheme: &DynamicScheme) -> f64 {
        if let Some(tone) = scheme.tone_cache().get(self.id()) {
            return tone;
        }
        let tone = self.resolve_tone(scheme).clamp(0.0, 100.0);
        scheme.tone_cache().insert(self.id(), tone);
        tone
    }

    fn resolve_tone(&self, scheme: &DynamicScheme) -> f64 {
        let decreasing_contrast = scheme.contrast_level() < 0.0;

        if let Some(pair) = self.tone_delta_pair(scheme) {
            return self.resolve_paired(scheme, &pair, decreasing_contrast);
        }

        let mut answer = self.nominal_tone(scheme);
        let Some(background) = self.background(scheme) else {
            return answer;
        };

        let bg_tone = background.get_tone(scheme);
        let desired = self.desired_ratio(scheme);
        if ratio_of_tones(bg_tone, answer) < desired || decreasing_contrast {
            answer = foreground_tone(bg_tone, desired);
        }

        if self.is_background && (50.0..60.0).contains(&answer) {
            answer = if ratio_of_tones(49.0, bg_tone) >= desired {
                49.0
            } else {
                60.0
            };
        }

        if let Some(second) = self.second_background(scheme) {
            let bg_tone_2 = second.get_tone(scheme);
            let upper = bg_tone.max(bg_tone_2);
            let lower = bg_tone.min(bg_tone_2);
            if ratio_of_tones(upper, answer) >= desired && ratio_of_tones(lower, answer) >= desired
            {
                return answer;
            }

            // Go past both surfaces, lighter than the light one or darker
            // than the dark one.
            let light_option = lighter(upper, desired);
            let dark_option = darker(lower, desired);
            let prefers_light =
                tone_prefers_light_foreground(bg_tone) || tone_prefers_light_foreground(bg_tone_2);
            #[cfg(feature = "tracing")]
            if light_option.is_none() || dark_option.is_none() {
                tracing::trace!(
                    role = self.name,
                    upper,
                    lower,
                    desired,
                    light = ?light_option,
                    dark = ?dark_option,
                    "contrast against both backgrounds degraded"
                );
            }
            if prefers_light {
                return light_option.unwrap_or(100.0);
            }
            return match (light_option, dark_option) {
                (Some(only), None) | (None, Some(only)) => only,
                (_, dark) => dark.unwrap_or(0.0),
            };
        }

        answer
    }

    fn resolve_paired(
        &self,
        scheme: &DynamicScheme,
        pair: &ToneDeltaPair,
        decreasing_contrast: bool,
    ) -> f64 {
        let is_dark = scheme.is_dark();
        let (nearer, farther) = pair.nearer_farther(is_dark);
        let am_nearer = std::ptr::eq(self, nearer);
        let expansion_dir = if is_dark { 1.0 } else { -1.0 };
        let delta = pair.delta;

        let bg_tone = self.background(scheme).map_or(50.0, |bg| bg.get_tone(scheme));
        let n_contrast = nearer.desired_ratio(scheme);
        let f_contrast = farther.desired_ratio(scheme);

        let meet = |role: &Self, ratio: f64| {
            let nominal = role.nominal_tone(scheme);
            if !decreasing_contrast && ratio_of_tones(bg_tone, nominal) >= ratio {
                nominal
            } else {
                foreground_tone(bg_tone, ratio)
            }
        };
        let mut n_tone = meet(nearer, n_contrast);
        let mut f_tone = meet(farther, f_contrast);

        if (f_tone - n_tone) * expansion_dir < delta {
            // Push the farther one out first; if the gamut edge stops it,
            // pull the nearer one in.
            f_tone = delta.mul_add(expansion_dir, n_tone).clamp(0.0, 100.0);
            if (f_tone - n_tone) * expansion_dir < delta {
                n_tone = (-delta).mul_add(expansion_dir, f_tone).clamp(0.0, 100.0);
            }
        }

        let awkward = 50.0..60.0;
        let move_both_out = |n: &mut f64, f: &mut f64| {
            if expansion_dir > 0.0 {
                *n = 60.0;
                *f = f.max(delta.mul_add(expansion_dir, *n));
            } else {
                *n = 49.0;
                *f = f.min(delta.mul_add(expansion_dir, *n));
            }
        };
        if awkward.contains(&n_tone) {
            move_both_out(&mut n_tone, &mut f_tone);
        } else if awkward.contains(&f_tone) {
            if pair.stay_together {
                move_both_out(&mut n_tone, &mut f_tone);
            } else {
                f_tone = if expansion_dir > 0.0 { 60.0 } else { 49.0 };
            }
        }

        if am_nearer { n_tone } else { f_tone }
    }
}

impl PartialEq for DynamicColor {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for DynamicColor {}

impl fmt::Debug for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicColor")
            .field("name", &self.name)
            .field("palette", &self.palette)
            .field("is_background", &self.is_background)
            .field("contrast_curve", &self.contrast_curve)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Foreground helpers
// ---------------------------------------------------------------------------

/// A tone that reaches `ratio` against `bg_tone`, or comes as close as
/// possible.
///
/// Goes lighter on backgrounds that prefer a light foreground and darker on
/// the rest, switching sides when the other side does strictly better.
#[must_use]
pub fn foreground_tone(bg_tone: f64, ratio: f64) -> f64 {
    let light_tone = lighter_unsafe(bg_tone, ratio);
    let dark_tone = darker_unsafe(bg_tone, ratio);
    let light_ratio = ratio_of_tones(light_tone, bg_tone);
    let dark_ratio = ratio_of_tones(dark_tone, bg_tone);

    if tone_prefers_light_foreground(bg_tone) {
        // Both sides fall short and are about equal: stay light.
        let negligible_difference =
            (light_ratio - dark_ratio).abs() < 0.1 && light_ratio < ratio && dark_ratio < ratio;
        if light_ratio >= ratio || light_ratio >= dark_ratio || negligible_difference {
            light_tone
        } else {
            dark_tone
        }
    } else if dark_ratio >= ratio || dark_ratio >= light_ratio {
        dark_tone
    } else {
        light_tone
    }
}

/// Whether text on this tone should be light. Mid tones up to 59 still
/// prefer light text because it reads better there in practice.
#[must_use]
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Whether this tone is dark enough for light text to reach contrast.
#[must_use]
pub fn tone_allows_light_foreground(tone: f64) -> bool {
    tone.round() <= 49.0
}

/// Drop a tone that prefers light text but can't support it down to 49.
#[must_use]
pub fn enable_light_foreground(tone: f64) -> f64 {
    if tone_prefers_light_foreground(tone) && !tone_allows_light_foreground(tone) {
        49.0
    } else {
        tone
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;
    use crate::tone_delta::TonePolarity;
    use crate::variant::Variant;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn scheme(is_dark: bool, level: f64) -> DynamicScheme {
        DynamicScheme::new(Hct::from_argb(Argb(0xff67_50a4)), Variant::TonalSpot, is_dark, level)
            .unwrap()
    }

    // ----- light foreground helpers -----

    #[test]
    fn light_foreground_thresholds() {
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.6));
        assert!(tone_allows_light_foreground(49.4));
        assert!(!tone_allows_light_foreground(49.6));
        assert!(approx_eq(enable_light_foreground(55.0), 49.0, 1e-12));
        assert!(approx_eq(enable_light_foreground(70.0), 70.0, 1e-12));
        assert!(approx_eq(enable_light_foreground(30.0), 30.0, 1e-12));
    }

    #[test]
    fn foreground_tone_goes_light_on_dark() {
        let t = foreground_tone(10.0, 4.5);
        assert!(t > 10.0);
        assert!(ratio_of_tones(t, 10.0) >= 4.5);
    }

    #[test]
    fn foreground_tone_goes_dark_on_light() {
        let t = foreground_tone(90.0, 4.5);
        assert!(t < 90.0);
        assert!(ratio_of_tones(t, 90.0) >= 4.5);
    }

    #[test]
    fn foreground_tone_best_effort_when_unreachable() {
        // 21:1 is only possible between black and white.
        let t = foreground_tone(50.0, 21.0);
        assert!(approx_eq(t, 0.0, 1e-9) || approx_eq(t, 100.0, 1e-9));
    }

    // ----- resolution -----

    #[test]
    fn backgroundless_role_keeps_nominal_tone() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(roles::BACKGROUND.get_tone(&s), 98.0, 1e-9));
        assert!(approx_eq(roles::SURFACE.get_tone(&s), 98.0, 1e-9));
    }

    #[test]
    fn on_surface_reads_on_surface() {
        for is_dark in [false, true] {
            let s = scheme(is_dark, 0.0);
            let fg = roles::ON_SURFACE.get_tone(&s);
            let bg = roles::highest_surface(&s).get_tone(&s);
            assert!(ratio_of_tones(fg, bg) >= 4.5, "dark={is_dark}: {fg} on {bg}");
        }
    }

    #[test]
    fn nominal_tone_kept_when_contrast_is_enough() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(roles::ON_PRIMARY.get_tone(&s), 100.0, 1e-9));
        assert!(approx_eq(roles::PRIMARY.get_tone(&s), 40.0, 1e-9));
    }

    #[test]
    fn delta_pair_is_honored() {
        for is_dark in [false, true] {
            for level in [-1.0, 0.0, 1.0] {
                let s = scheme(is_dark, level);
                let a = roles::PRIMARY_CONTAINER.get_tone(&s);
                let b = roles::PRIMARY.get_tone(&s);
                assert!((a - b).abs() >= 10.0 - 0.5, "dark={is_dark} level={level}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn background_roles_avoid_awkward_zone() {
        for level in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            for is_dark in [false, true] {
                let s = scheme(is_dark, level);
                for role in [&roles::PRIMARY, &roles::PRIMARY_CONTAINER, &roles::SECONDARY_CONTAINER] {
                    let t = role.get_tone(&s);
                    assert!(!(50.0..60.0).contains(&t), "{} = {t}", role.name());
                }
            }
        }
    }

    #[test]
    fn dual_background_role_reads_on_both() {
        for is_dark in [false, true] {
            let s = scheme(is_dark, 0.0);
            let fg = roles::ON_PRIMARY_FIXED.get_tone(&s);
            let a = roles::PRIMARY_FIXED.get_tone(&s);
            let b = roles::PRIMARY_FIXED_DIM.get_tone(&s);
            assert!(ratio_of_tones(fg, a) >= 4.5);
            assert!(ratio_of_tones(fg, b) >= 4.5);
        }
    }

    #[test]
    fn resolution_is_memoized() {
        let s = scheme(true, 0.0);
        let first = roles::ON_PRIMARY_CONTAINER.get_argb(&s);
        assert!(s.tone_cache().get(roles::ON_PRIMARY_CONTAINER.id()).is_some());
        s.clear_cache();
        assert_eq!(roles::ON_PRIMARY_CONTAINER.get_argb(&s), first);
    }

    #[test]
    fn hct_comes_from_role_palette() {
        let s = scheme(false, 0.0);
        let hct = roles::PRIMARY.get_hct(&s);
        let expected = s.primary_palette().hct(roles::PRIMARY.get_tone(&s));
        assert_eq!(hct.to_argb(), expected.to_argb());
    }

    // ----- identity -----

    // Same name as the built-in, different palette and tone.
    static OTHER_PRIMARY: DynamicColor =
        DynamicColor::new("primary", PaletteRole::Tertiary, |_| 10.0);

    #[test]
    fn identity_is_by_address() {
        assert_eq!(roles::PRIMARY, roles::PRIMARY);
        assert!(roles::PRIMARY != roles::SECONDARY);
        assert!(OTHER_PRIMARY != roles::PRIMARY);
        assert!(OTHER_PRIMARY.id() != roles::PRIMARY.id());
    }

    #[test]
    fn same_name_roles_keep_separate_memo_entries() {
        let s = scheme(false, 0.0);
        let builtin = roles::PRIMARY.get_argb(&s);
        let other = OTHER_PRIMARY.get_argb(&s);
        assert_eq!(other, s.tertiary_palette().hct(10.0).to_argb());
        assert!(other != builtin);
        assert!(approx_eq(OTHER_PRIMARY.get_tone(&s), 10.0, 1e-12));
        assert!(approx_eq(roles::PRIMARY.get_tone(&s), 40.0, 1e-9));
    }

    // ----- fixed-tone fixtures -----

    const ANY_RATIO: ContrastCurve = ContrastCurve::new(1.0, 1.0, 1.0, 1.0);
    const MAX_RATIO: ContrastCurve = ContrastCurve::new(21.0, 21.0, 21.0, 21.0);
    const TEXT: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 7.0);

    static WHITE: DynamicColor = DynamicColor::new("white", PaletteRole::Neutral, |_| 100.0);
    static TONE_90: DynamicColor = DynamicColor::new("tone_90", PaletteRole::Neutral, |_| 90.0);
    static TONE_80: DynamicColor = DynamicColor::new("tone_80", PaletteRole::Neutral, |_| 80.0);
    static TONE_40: DynamicColor = DynamicColor::new("tone_40", PaletteRole::Neutral, |_| 40.0);
    static TONE_30: DynamicColor = DynamicColor::new("tone_30", PaletteRole::Neutral, |_| 30.0);

    // ----- delta pair branches -----

    static NEAR_62: DynamicColor = DynamicColor::new("near_62", PaletteRole::Primary, |_| 62.0)
        .on(|_| &WHITE)
        .with_contrast_curve(ANY_RATIO)
        .with_tone_delta_pair(|_| {
            ToneDeltaPair::new(&NEAR_62, &FAR_52, 10.0, TonePolarity::Nearer, true)
        });
    static FAR_52: DynamicColor = DynamicColor::new("far_52", PaletteRole::Primary, |_| 52.0)
        .on(|_| &WHITE)
        .with_contrast_curve(ANY_RATIO)
        .with_tone_delta_pair(|_| {
            ToneDeltaPair::new(&NEAR_62, &FAR_52, 10.0, TonePolarity::Nearer, true)
        });

    static LOOSE_NEAR_62: DynamicColor =
        DynamicColor::new("loose_near_62", PaletteRole::Primary, |_| 62.0)
            .on(|_| &WHITE)
            .with_contrast_curve(ANY_RATIO)
            .with_tone_delta_pair(|_| {
                ToneDeltaPair::new(&LOOSE_NEAR_62, &LOOSE_FAR_52, 10.0, TonePolarity::Nearer, false)
            });
    static LOOSE_FAR_52: DynamicColor =
        DynamicColor::new("loose_far_52", PaletteRole::Primary, |_| 52.0)
            .on(|_| &WHITE)
            .with_contrast_curve(ANY_RATIO)
            .with_tone_delta_pair(|_| {
                ToneDeltaPair::new(&LOOSE_NEAR_62, &LOOSE_FAR_52, 10.0, TonePolarity::Nearer, false)
            });

    static NEAR_8: DynamicColor = DynamicColor::new("near_8", PaletteRole::Primary, |_| 8.0)
        .on(|_| &WHITE)
        .with_contrast_curve(ANY_RATIO)
        .with_tone_delta_pair(|_| {
            ToneDeltaPair::new(&NEAR_8, &FAR_5, 10.0, TonePolarity::Nearer, false)
        });
    static FAR_5: DynamicColor = DynamicColor::new("far_5", PaletteRole::Primary, |_| 5.0)
        .on(|_| &WHITE)
        .with_contrast_curve(ANY_RATIO)
        .with_tone_delta_pair(|_| {
            ToneDeltaPair::new(&NEAR_8, &FAR_5, 10.0, TonePolarity::Nearer, false)
        });

    #[test]
    fn awkward_farther_pushes_both_when_staying_together() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(NEAR_62.get_tone(&s), 49.0, 1e-12));
        assert!(approx_eq(FAR_52.get_tone(&s), 39.0, 1e-12));
    }

    #[test]
    fn awkward_farther_moves_alone_otherwise() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(LOOSE_NEAR_62.get_tone(&s), 62.0, 1e-12));
        assert!(approx_eq(LOOSE_FAR_52.get_tone(&s), 49.0, 1e-12));
    }

    #[test]
    fn nearer_gives_way_when_farther_hits_black() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(NEAR_8.get_tone(&s), 10.0, 1e-12));
        assert!(approx_eq(FAR_5.get_tone(&s), 0.0, 1e-12));
    }

    // ----- reduced contrast -----

    // Black already reads on white at every level.
    static BLACK_TEXT: DynamicColor = DynamicColor::new("black_text", PaletteRole::Neutral, |_| 0.0)
        .on(|_| &WHITE)
        .with_contrast_curve(TEXT);

    #[test]
    fn reduced_contrast_settles_on_minimum_ratio() {
        let reduced = scheme(false, -1.0);
        let tone = BLACK_TEXT.get_tone(&reduced);
        let expected = darker(100.0, 3.0).unwrap();
        assert!(approx_eq(tone, expected, 1e-9), "{tone}");
        let ratio = ratio_of_tones(tone, 100.0);
        assert!((3.0 - 0.04..=3.2).contains(&ratio), "{ratio}");

        let standard = scheme(false, 0.0);
        assert!(approx_eq(BLACK_TEXT.get_tone(&standard), 0.0, 1e-12));
    }

    // ----- dual background fallbacks -----

    static ON_DARK_PAIR: DynamicColor =
        DynamicColor::new("on_dark_pair", PaletteRole::Neutral, |_| 50.0)
            .on(|_| &TONE_40)
            .also_on(|_| &TONE_30)
            .with_contrast_curve(MAX_RATIO);
    static ON_LIGHT_PAIR: DynamicColor =
        DynamicColor::new("on_light_pair", PaletteRole::Neutral, |_| 50.0)
            .on(|_| &TONE_90)
            .also_on(|_| &TONE_80)
            .with_contrast_curve(MAX_RATIO);
    static TEXT_ON_LIGHT_PAIR: DynamicColor =
        DynamicColor::new("text_on_light_pair", PaletteRole::Neutral, |_| 50.0)
            .on(|_| &TONE_90)
            .also_on(|_| &TONE_80)
            .with_contrast_curve(TEXT);

    #[test]
    fn unreachable_on_dark_backgrounds_falls_back_to_white() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(ON_DARK_PAIR.get_tone(&s), 100.0, 1e-12));
    }

    #[test]
    fn unreachable_on_light_backgrounds_falls_back_to_black() {
        let s = scheme(false, 0.0);
        assert!(approx_eq(ON_LIGHT_PAIR.get_tone(&s), 0.0, 1e-12));
    }

    #[test]
    fn single_reachable_side_is_taken() {
        let s = scheme(false, 0.0);
        let tone = TEXT_ON_LIGHT_PAIR.get_tone(&s);
        // Nothing is light enough against 90; darker than 80 works.
        assert!(lighter(90.0, 4.5).is_none());
        assert!(approx_eq(tone, darker(80.0, 4.5).unwrap(), 1e-9), "{tone}");
        assert!(tone < 42.0, "{tone}");
        assert!(ratio_of_tones(tone, 90.0) >= 4.5);
        assert!(ratio_of_tones(tone, 80.0) >= 4.5 - 0.04);
    }
}
