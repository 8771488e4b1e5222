//! Property-based invariant tests for scheme resolution.
//!
//! 1. Every tone delta pair keeps its members `delta` apart.
//! 2. Every on-color reads on its background(s): 4.5:1 at standard contrast
//!    and above, 3:1 below.
//! 3. Resolved tones stay within [0, 100] and don't depend on the memo.
//! 4. The monochrome dark scheme lands on black and white accents.

use proptest::prelude::*;
use tonekit_hct::contrast::ratio_of_tones;
use tonekit_hct::{Argb, Hct};
use tonekit_scheme::{roles, DynamicColor, DynamicScheme, Variant};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Slack for the ±0.4 tone nudges and float rounding in the contrast math.
const RATIO_SLACK: f64 = 0.05;

const LEVELS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::all().to_vec())
}

fn level_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![prop::sample::select(LEVELS.to_vec()), -1.0f64..=1.0]
}

fn seed_strategy() -> impl Strategy<Value = Argb> {
    any::<u32>().prop_map(|v| Argb(v | 0xff00_0000))
}

fn build(seed: Argb, variant: Variant, is_dark: bool, level: f64) -> DynamicScheme {
    DynamicScheme::from_argb(seed, variant, is_dark, level).unwrap()
}

fn on_colors() -> impl Iterator<Item = &'static DynamicColor> {
    // on_background deliberately targets 3:1 at standard contrast.
    roles::ALL
        .iter()
        .copied()
        .filter(|r| r.name().starts_with("on_") && r.name() != "on_background")
        .chain([&roles::INVERSE_ON_SURFACE])
}

fn check_delta_pairs(s: &DynamicScheme) -> Result<(), TestCaseError> {
    for role in roles::ALL {
        let Some(pair) = role.tone_delta_pair(s) else {
            continue;
        };
        let a = pair.role_a.get_tone(s);
        let b = pair.role_b.get_tone(s);
        prop_assert!(
            (a - b).abs() >= pair.delta - 0.5,
            "{:?}: {} = {}, {} = {}",
            s,
            pair.role_a.name(),
            a,
            pair.role_b.name(),
            b
        );
    }
    Ok(())
}

fn check_on_colors(s: &DynamicScheme) -> Result<(), TestCaseError> {
    let minimum = if s.contrast_level() < 0.0 { 3.0 } else { 4.5 };
    for role in on_colors() {
        let fg = role.get_tone(s);
        for bg in [role.background(s), role.second_background(s)].into_iter().flatten() {
            let bg_tone = bg.get_tone(s);
            let ratio = ratio_of_tones(fg, bg_tone);
            prop_assert!(
                ratio >= minimum - RATIO_SLACK,
                "{:?}: {} ({}) on {} ({}) = {}",
                s,
                role.name(),
                fg,
                bg.name(),
                bg_tone,
                ratio
            );
        }
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Tone delta pairs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn delta_pairs_hold(
        seed in seed_strategy(),
        variant in variant_strategy(),
        is_dark in any::<bool>(),
        level in level_strategy(),
    ) {
        check_delta_pairs(&build(seed, variant, is_dark, level))?;
    }
}

#[test]
fn delta_pairs_hold_on_grid() {
    for hue in [0.0, 90.0, 180.0, 270.0, 320.0] {
        let seed = Hct::from(hue, 48.0, 50.0);
        for level in LEVELS {
            for is_dark in [false, true] {
                let s = DynamicScheme::new(seed, Variant::TonalSpot, is_dark, level).unwrap();
                check_delta_pairs(&s).unwrap();
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. On-colors meet contrast
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn on_colors_read(
        seed in seed_strategy(),
        variant in variant_strategy(),
        is_dark in any::<bool>(),
        level in level_strategy(),
    ) {
        check_on_colors(&build(seed, variant, is_dark, level))?;
    }
}

#[test]
fn on_colors_read_for_every_variant() {
    for seed in [0xff67_50a4, 0xff41_8bd2, 0xffb3_261e, 0xff00_6e1c] {
        for &variant in Variant::all() {
            for level in LEVELS {
                for is_dark in [false, true] {
                    check_on_colors(&build(Argb(seed), variant, is_dark, level)).unwrap();
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Range and memo independence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tones_in_range_and_stable(
        seed in seed_strategy(),
        variant in variant_strategy(),
        is_dark in any::<bool>(),
        level in level_strategy(),
    ) {
        let s = build(seed, variant, is_dark, level);
        let first: Vec<f64> = roles::ALL.iter().map(|r| r.get_tone(&s)).collect();
        for (role, tone) in roles::ALL.iter().zip(&first) {
            prop_assert!((0.0..=100.0).contains(tone), "{} = {}", role.name(), tone);
        }
        s.clear_cache();
        // Reverse order exercises a different memo fill sequence.
        for (role, tone) in roles::ALL.iter().zip(&first).rev() {
            prop_assert_eq!(role.get_tone(&s).to_bits(), tone.to_bits(), "{}", role.name());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Monochrome
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn monochrome_dark_accents() {
    let s = build(Argb(0xff00_00ff), Variant::Monochrome, true, 0.0);
    let near = |role: &'static DynamicColor, expected: f64| {
        let tone = role.get_tone(&s);
        assert!((tone - expected).abs() <= 1.0, "{} = {tone}, expected {expected}", role.name());
    };
    near(&roles::PRIMARY, 100.0);
    near(&roles::ON_PRIMARY, 10.0);
    near(&roles::PRIMARY_CONTAINER, 85.0);
    near(&roles::ON_PRIMARY_CONTAINER, 0.0);
}
