// SPDX-License-Identifier: MIT
//
// tonekit-hct: color science for tonekit.
//
// HCT pairs CAM16 hue and chroma with L* tone. Hue and chroma follow
// perception; tone follows luminance, which is what contrast is defined
// on. Keeping them separate lets a scheme move a color along the tone axis
// to hit a contrast target without its hue drifting.
//
// Layers, bottom up:
//
//   math, argb      small vector/matrix toolkit, packed 8-bit colors
//   convert         sRGB ↔ linear ↔ XYZ ↔ L*a*b*, L* ↔ Y
//   viewing, cam16  the appearance model
//   solver, hct     HCT ↔ sRGB with gamut mapping that preserves hue and tone
//   contrast        WCAG ratios and searches on the tone axis
//   palette         one hue/chroma at every tone, plus its key color
//   temperature     warm/cool analysis, complements, analogous colors
//   dislike         the yellow-green fix
//
// Everything is pure computation on `f64`. Nothing here allocates per
// color except the palette memo and temperature cache.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Loop indices and tone integers become floats all over the place.
#![allow(clippy::cast_precision_loss)]
// j/jstar, a/astar and friends are the names the model uses.
#![allow(clippy::similar_names)]
// Exact float comparisons guard divisions and degenerate inputs.
#![allow(clippy::float_cmp)]

pub mod argb;
pub mod cam16;
pub mod contrast;
pub mod convert;
pub mod dislike;
pub mod error;
pub mod hct;
pub mod math;
pub mod palette;
pub mod solver;
pub mod temperature;
pub mod viewing;

pub use argb::Argb;
pub use cam16::Cam16;
pub use error::{ColorError, Result};
pub use hct::Hct;
pub use palette::TonalPalette;
pub use temperature::TemperatureCache;
pub use viewing::ViewingConditions;
