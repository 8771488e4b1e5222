//! # tonekit-scheme: contrast-aware color roles
//!
//! Turns one seed color into a full set of UI color roles (primary, surface,
//! outline, error, their containers and on-colors, fixed colors) that meet
//! contrast targets at any contrast level, in light and dark modes.
//!
//! # Architecture
//!
//! ```text
//! seed Hct + Variant + is_dark + contrast_level
//!     │
//!     ▼
//! variant.rs:        six tonal palettes (hue/chroma per variant)
//!     │
//!     ▼
//! scheme.rs:         DynamicScheme (palettes + role memo)
//!     │
//!     ▼
//! roles.rs:          static DynamicColor descriptors
//!     │
//!     ▼
//! dynamic_color.rs:  resolve tone against backgrounds, curves, pairs
//!     │
//!     ▼
//! registry.rs / snapshot.rs: lookup by name, flat export
//! ```
//!
//! ```
//! use tonekit_hct::Argb;
//! use tonekit_scheme::{roles, DynamicScheme, Variant};
//!
//! let scheme = DynamicScheme::from_argb(Argb(0xff67_50a4), Variant::TonalSpot, false, 0.0)?;
//! let primary = scheme.argb(&roles::PRIMARY);
//! let on_primary = scheme.argb_of("on_primary")?;
//! assert_ne!(primary, on_primary);
//! # Ok::<(), tonekit_scheme::SchemeError>(())
//! ```

// Role tables are long lists of statics.
#![allow(clippy::too_many_lines)]
// Tone tables compare against exact anchors.
#![allow(clippy::float_cmp)]

pub mod cache;
pub mod config;
pub mod contrast_curve;
pub mod dynamic_color;
pub mod error;
pub mod registry;
pub mod roles;
pub mod scheme;
pub mod snapshot;
pub mod tone_delta;
pub mod variant;

pub use config::SchemeConfig;
pub use contrast_curve::ContrastCurve;
pub use dynamic_color::{DynamicColor, PaletteRole};
pub use error::{Result, SchemeError};
pub use registry::RoleRegistry;
pub use scheme::DynamicScheme;
pub use snapshot::SchemeSnapshot;
pub use tone_delta::{ToneDeltaPair, TonePolarity};
pub use variant::{Palettes, Variant};
