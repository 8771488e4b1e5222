//! Property-based invariant tests for the HCT color layer.
//!
//! 1. Contrast ratios are bounded to [1, 21].
//! 2. Contrast ratios are symmetric.
//! 3. `Hct::from` honors the requested tone within 0.5.
//! 4. `Hct::from` never exceeds the requested chroma by more than rounding.
//! 5. Every ARGB color survives a trip through its HCT coordinates.
//! 6. `lighter` / `darker` results reach the requested ratio.
//! 7. Palette tones are monotonic in luminance.
//! 8. Hex formatting and parsing agree.

use proptest::prelude::*;
use tonekit_hct::contrast::{darker, lighter, ratio_of_tones, RATIO_MAX, RATIO_MIN};
use tonekit_hct::{Argb, Hct, TonalPalette};

// ── Helpers ─────────────────────────────────────────────────────────────

fn tone_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

fn hue_strategy() -> impl Strategy<Value = f64> {
    0.0f64..360.0
}

fn opaque_argb_strategy() -> impl Strategy<Value = Argb> {
    any::<u32>().prop_map(|v| Argb(v | 0xff00_0000))
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Ratio bounds and symmetry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ratio_is_bounded(a in -20.0f64..120.0, b in -20.0f64..120.0) {
        let r = ratio_of_tones(a, b);
        prop_assert!((RATIO_MIN..=RATIO_MAX + 1e-9).contains(&r), "ratio {} for {} / {}", r, a, b);
    }

    #[test]
    fn ratio_is_symmetric(a in tone_strategy(), b in tone_strategy()) {
        prop_assert!((ratio_of_tones(a, b) - ratio_of_tones(b, a)).abs() < 1e-12);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Solver honors tone, caps chroma
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn solved_tone_matches(h in hue_strategy(), c in 0.0f64..150.0, t in tone_strategy()) {
        let hct = Hct::from(h, c, t);
        prop_assert!((hct.tone() - t).abs() < 0.5, "h={} c={} t={} got tone {}", h, c, t, hct.tone());
    }

    #[test]
    fn solved_chroma_is_not_inflated(h in hue_strategy(), c in 10.0f64..150.0, t in 5.0f64..95.0) {
        let hct = Hct::from(h, c, t);
        prop_assert!(hct.chroma() <= c + 2.5, "asked {} got {}", c, hct.chroma());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. ARGB → HCT → ARGB
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn argb_roundtrips(argb in opaque_argb_strategy()) {
        let hct = Hct::from_argb(argb);
        let back = Hct::from(hct.hue(), hct.chroma(), hct.tone()).to_argb();
        let close = |x: u8, y: u8| x.abs_diff(y) <= 1;
        prop_assert!(
            close(back.red(), argb.red()) && close(back.green(), argb.green()) && close(back.blue(), argb.blue()),
            "{} came back as {}", argb, back
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Contrast searches reach their target
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lighter_meets_ratio(t in tone_strategy(), ratio in 1.0f64..21.0) {
        if let Some(light) = lighter(t, ratio) {
            prop_assert!(light >= t);
            prop_assert!(ratio_of_tones(t, light) >= ratio - 0.04);
        }
    }

    #[test]
    fn darker_meets_ratio(t in tone_strategy(), ratio in 1.0f64..21.0) {
        if let Some(dark) = darker(t, ratio) {
            prop_assert!(dark <= t);
            prop_assert!(ratio_of_tones(t, dark) >= ratio - 0.04);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Palettes get lighter with tone
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn palette_tones_are_monotonic(h in hue_strategy(), c in 0.0f64..120.0) {
        let palette = TonalPalette::from_hue_and_chroma(h, c);
        let mut last = -1.0;
        for tone in (0u8..=100).step_by(5) {
            let measured = Hct::from_argb(palette.tone(tone).unwrap()).tone();
            prop_assert!(measured > last, "tone {} measured {} after {}", tone, measured, last);
            last = measured;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Hex text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_roundtrips(argb in any::<u32>().prop_map(Argb)) {
        let parsed: Argb = argb.to_hex().parse().unwrap();
        prop_assert_eq!(parsed, argb);
    }
}
