// SPDX-License-Identifier: MIT
//
// tonekit: accessible dynamic color schemes from a single seed color.
//
// This crate wires the two layers together:
//
//   tonekit-hct    → CAM16/HCT color science, gamut solver, contrast,
//                    tonal palettes, temperature and dislike heuristics
//   tonekit-scheme → color roles, contrast-aware tone resolution,
//                    scheme variants, registry, config and snapshots
//
// A request flows through:
//
//   seed → Variant::palettes → DynamicScheme → role.get_tone → palette.hct
//        → Argb

//! Accessible dynamic color schemes from a single seed color.
//!
//! ```
//! use tonekit::prelude::*;
//!
//! let scheme = tonekit::scheme_from_toml(r##"
//!     seed = "#6750a4"
//!     variant = "vibrant"
//!     dark = true
//! "##)?;
//! let snapshot = SchemeSnapshot::capture(&scheme);
//! assert!(snapshot.color("on_primary").is_some());
//! assert_eq!(scheme.argb(&roles::SCRIM), Argb::BLACK);
//! # Ok::<(), SchemeError>(())
//! ```

pub use tonekit_hct as hct;
pub use tonekit_scheme as scheme;

/// The types most callers need.
pub mod prelude {
    pub use tonekit_hct::{Argb, ColorError, Hct, TonalPalette};
    pub use tonekit_scheme::{
        roles, DynamicColor, DynamicScheme, RoleRegistry, SchemeConfig, SchemeError,
        SchemeSnapshot, Variant,
    };
}

/// Parse a TOML scheme config and build the scheme it describes.
///
/// # Errors
///
/// Malformed TOML, an unknown variant, a malformed seed or a contrast level
/// outside [-1, 1].
pub fn scheme_from_toml(text: &str) -> tonekit_scheme::Result<tonekit_scheme::DynamicScheme> {
    tonekit_scheme::SchemeConfig::from_toml_str(text)?.build()
}
