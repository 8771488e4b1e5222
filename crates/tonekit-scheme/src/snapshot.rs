//! A flat, serializable view of a resolved scheme.
//!
//! Downstream tools (theme exporters, CSS generators) want plain data, not a
//! resolver. A snapshot resolves every built-in role once and keeps the
//! hex strings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::scheme::DynamicScheme;
use crate::variant::Variant;

/// Every built-in role of one scheme, as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeSnapshot {
    pub seed: String,
    pub variant: Variant,
    pub dark: bool,
    pub contrast: f64,
    /// Role name to hex color, sorted by name.
    pub colors: BTreeMap<&'static str, String>,
}

impl SchemeSnapshot {
    #[must_use]
    pub fn capture(scheme: &DynamicScheme) -> Self {
        Self {
            seed: scheme.source_color_hct().to_argb().to_hex(),
            variant: scheme.variant(),
            dark: scheme.is_dark(),
            contrast: scheme.contrast_level(),
            colors: scheme
                .resolved()
                .map(|(name, argb)| (name, argb.to_hex()))
                .collect(),
        }
    }

    /// Hex color of a role, if captured.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }
}

impl From<&DynamicScheme> for SchemeSnapshot {
    fn from(scheme: &DynamicScheme) -> Self {
        Self::capture(scheme)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
