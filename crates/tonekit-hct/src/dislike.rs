// SPDX-License-Identifier: MIT
//
// Dark yellow-greens ("bile") are consistently rated the least pleasant
// colors in preference studies. Schemes that derive a color from the seed
// rather than choosing it from a palette run it through `fix_if_disliked`.

use crate::hct::Hct;

/// Whether `hct` is a dark, saturated yellow-green.
#[must_use]
pub fn is_disliked(hct: Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lighten a disliked color to tone 70; anything else is returned as is.
#[must_use]
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(hct) {
        Hct::from(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argb::Argb;
    use pretty_assertions::assert_eq;

    #[test]
    fn olive_is_disliked_and_fixed() {
        let olive = Hct::from(100.0, 24.0, 40.0);
        assert!(is_disliked(olive));
        let fixed = fix_if_disliked(olive);
        assert!(!is_disliked(fixed));
        assert!((fixed.tone() - 70.0).abs() < 0.5);
    }

    #[test]
    fn light_or_muted_yellow_green_is_fine() {
        assert!(!is_disliked(Hct::from(100.0, 40.0, 80.0)));
        assert!(!is_disliked(Hct::from(100.0, 10.0, 40.0)));
    }

    #[test]
    fn other_hues_pass_through() {
        let blue = Hct::from_argb(Argb(0xff00_00ff));
        assert!(!is_disliked(blue));
        assert_eq!(fix_if_disliked(blue), blue);
    }
}
