// SPDX-License-Identifier: MIT
//
// Color temperature: warm vs. cool, and hue relationships built on it.
//
// Raw temperature is an empirical fit on L*a*b*: orange (Lab hue ~50°)
// is warmest, its opposite coolest, and saturated colors are more extreme
// than muted ones. Relative temperature rescales that to 0–1 across every
// hue at the input's chroma and tone, which is what the complement and
// analogous searches walk along.
//
// A cache is built for one input color. Constructing it samples all 361
// integer hues through the gamut solver, so build it once and ask it
// several questions.

use std::cmp::Ordering;

use crate::convert::lab_from_argb;
use crate::hct::Hct;
use crate::math::{sanitize_degrees, sanitize_degrees_int};

/// Warm/cool analysis of one color against all hues at its chroma and tone.
#[derive(Debug, Clone)]
pub struct TemperatureCache {
    input: Hct,
    input_temp: f64,
    /// Index `h` holds the color at integer hue `h`, 0 through 360.
    hcts_by_hue: Vec<Hct>,
    temps_by_hue: Vec<f64>,
    coldest: (Hct, f64),
    warmest: (Hct, f64),
}

impl TemperatureCache {
    #[must_use]
    pub fn new(input: Hct) -> Self {
        let hcts_by_hue: Vec<Hct> = (0..=360)
            .map(|h| Hct::from(f64::from(h), input.chroma(), input.tone()))
            .collect();
        let temps_by_hue: Vec<f64> = hcts_by_hue.iter().map(|&h| raw_temperature(h)).collect();
        let input_temp = raw_temperature(input);

        let by_temp = hcts_by_hue
            .iter()
            .copied()
            .zip(temps_by_hue.iter().copied())
            .chain(std::iter::once((input, input_temp)));
        let cmp = |a: &(Hct, f64), b: &(Hct, f64)| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        let coldest = by_temp.clone().min_by(cmp).unwrap_or((input, input_temp));
        let warmest = by_temp.max_by(cmp).unwrap_or((input, input_temp));

        Self {
            input,
            input_temp,
            hcts_by_hue,
            temps_by_hue,
            coldest,
            warmest,
        }
    }

    #[inline]
    #[must_use]
    pub const fn input(&self) -> Hct {
        self.input
    }

    /// Coldest color at the input's chroma and tone.
    #[must_use]
    pub const fn coldest(&self) -> Hct {
        self.coldest.0
    }

    /// Warmest color at the input's chroma and tone.
    #[must_use]
    pub const fn warmest(&self) -> Hct {
        self.warmest.0
    }

    /// Where `hct` falls between the coldest (0) and warmest (1) colors.
    /// Returns 0.5 when every hue has the same temperature.
    #[must_use]
    pub fn relative_temperature(&self, hct: Hct) -> f64 {
        self.relative(raw_temperature(hct))
    }

    fn relative(&self, temp: f64) -> f64 {
        let range = self.warmest.1 - self.coldest.1;
        if range == 0.0 {
            return 0.5;
        }
        (temp - self.coldest.1) / range
    }

    /// The color whose relative temperature mirrors the input's, searched
    /// on the arc of the hue wheel opposite the input.
    #[must_use]
    pub fn complement(&self) -> Hct {
        let coldest_hue = self.coldest.0.hue();
        let warmest_hue = self.warmest.0.hue();
        let range = self.warmest.1 - self.coldest.1;

        let start_is_cold_to_warm = is_between(self.input.hue(), coldest_hue, warmest_hue);
        let (start_hue, end_hue) = if start_is_cold_to_warm {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let target = 1.0 - self.relative(self.input_temp);
        let mut answer = self.hcts_by_hue[hue_index(self.input.hue())];
        let mut smallest_error = 1000.0;
        for addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + f64::from(addend));
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }
            let index = hue_index(hue);
            let relative = if range == 0.0 {
                0.5
            } else {
                (self.temps_by_hue[index] - self.coldest.1) / range
            };
            let error = (target - relative).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = self.hcts_by_hue[index];
            }
        }
        answer
    }

    /// `count` colors analogous to the input, the input included.
    ///
    /// The wheel is cut into `divisions` slices of equal temperature change
    /// (not equal hue); the input sits in the middle of the result with
    /// cooler/warmer neighbors on either side.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let start_hue = hue_index(self.input.hue()) as i32;
        let start = self.hcts_by_hue[start_hue as usize];
        let start_temp = self.relative(self.temps_by_hue[start_hue as usize]);
        let relative_at = |hue: i32| -> (Hct, f64) {
            let index = sanitize_degrees_int(hue) as usize;
            (self.hcts_by_hue[index], self.relative(self.temps_by_hue[index]))
        };

        let mut last_temp = start_temp;
        let mut absolute_total = 0.0;
        for i in 0..360 {
            let (_, temp) = relative_at(start_hue + i);
            absolute_total += (temp - last_temp).abs();
            last_temp = temp;
        }

        let divisions = divisions.max(1);
        let temp_step = absolute_total / divisions as f64;
        let mut all_colors = vec![start];
        let mut total = 0.0;
        let mut last_temp = start_temp;
        let mut hue_addend = 1;
        while all_colors.len() < divisions {
            let (hct, temp) = relative_at(start_hue + hue_addend);
            total += (temp - last_temp).abs();

            let mut index_addend = 1;
            let mut satisfied = total >= all_colors.len() as f64 * temp_step;
            while satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                satisfied = total >= (all_colors.len() + index_addend) as f64 * temp_step;
                index_addend += 1;
            }

            last_temp = temp;
            hue_addend += 1;
            if hue_addend > 360 {
                all_colors.resize(divisions, hct);
                break;
            }
        }

        let len = all_colors.len();
        let increase = count.saturating_sub(1) / 2;
        let decrease = count.saturating_sub(increase + 1);
        let mut answers = Vec::with_capacity(count);
        for i in (1..=increase).rev() {
            answers.push(all_colors[(len - i % len) % len]);
        }
        answers.push(self.input);
        for i in 1..=decrease {
            answers.push(all_colors[i % len]);
        }
        answers
    }
}

/// Warmth of a color; higher is warmer. Neutrals sit at −0.5.
#[must_use]
pub fn raw_temperature(color: Hct) -> f64 {
    let lab = lab_from_argb(color.to_argb());
    let hue = sanitize_degrees(lab.z.atan2(lab.y).to_degrees());
    let chroma = lab.y.hypot(lab.z);
    0.02f64.mul_add(
        chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos(),
        -0.5,
    )
}

/// Whether `angle` lies on the arc from `a` to `b` going counter-clockwise.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hue_index(hue: f64) -> usize {
    hue.round().clamp(0.0, 360.0) as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argb::Argb;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn raw_temperature_orders_warm_and_cool() {
        let blue = raw_temperature(Hct::from_argb(Argb(0xff00_00ff)));
        let red = raw_temperature(Hct::from_argb(Argb(0xffff_0000)));
        let gray = raw_temperature(Hct::from_argb(Argb(0xff80_8080)));
        assert!(blue < 0.0, "blue {blue}");
        assert!(red > 1.0, "red {red}");
        assert!(approx_eq(gray, -0.5, 0.05), "gray {gray}");
    }

    #[test]
    fn relative_temperature_is_normalized() {
        let cache = TemperatureCache::new(Hct::from_argb(Argb(0xff00_00ff)));
        assert!(approx_eq(cache.relative_temperature(cache.coldest()), 0.0, 1e-9));
        assert!(approx_eq(cache.relative_temperature(cache.warmest()), 1.0, 1e-9));
        let r = cache.relative_temperature(cache.input());
        assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn complement_flips_temperature() {
        let cache = TemperatureCache::new(Hct::from_argb(Argb(0xff00_00ff)));
        let input_rel = cache.relative_temperature(cache.input());
        let complement_rel = cache.relative_temperature(cache.complement());
        assert!(input_rel < 0.5);
        assert!(complement_rel > 0.5, "complement {complement_rel}");
    }

    #[test]
    fn analogous_places_input_in_the_middle() {
        let input = Hct::from_argb(Argb(0xff67_50a4));
        let cache = TemperatureCache::new(input);
        let colors = cache.analogous(5, 12);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[2], input);
        for c in &colors {
            assert!(approx_eq(c.tone(), input.tone(), 1.0));
        }
    }

    #[test]
    fn analogous_three_of_six() {
        let cache = TemperatureCache::new(Hct::from_argb(Argb(0xff41_8bd2)));
        let colors = cache.analogous(3, 6);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], cache.input());
        assert!(crate::math::difference_degrees(colors[2].hue(), colors[0].hue()) > 10.0);
    }

    #[test]
    fn arc_membership_wraps() {
        assert!(is_between(10.0, 350.0, 20.0));
        assert!(!is_between(180.0, 350.0, 20.0));
        assert!(is_between(90.0, 20.0, 350.0));
    }
}
