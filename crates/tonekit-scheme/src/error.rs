//! Errors raised while building schemes and role registries.
//!
//! A role that can't reach its contrast target is not an error; it resolves
//! to the best tone available. These variants cover inputs that are wrong
//! before any resolution starts.

use thiserror::Error;
use tonekit_hct::ColorError;

/// Scheme-level error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemeError {
    /// Contrast level outside [-1, 1], or not a finite number.
    #[error("contrast level {0} is outside [-1, 1]")]
    ContrastLevel(f64),

    /// No role with this name in the registry.
    #[error("unknown color role '{0}'")]
    UnknownRole(String),

    /// Two roles share a name.
    #[error("duplicate color role '{0}'")]
    DuplicateRole(&'static str),

    /// Following background links from a role leads back to it.
    #[error("background cycle: {}", .0.join(" -> "))]
    BackgroundCycle(Vec<&'static str>),

    /// A role is paired with another but has no background to measure against.
    #[error("role '{0}' has a tone delta pair but no background")]
    PairWithoutBackground(&'static str),

    /// A role has a background but no contrast curve to meet against it.
    #[error("role '{0}' has a background but no contrast curve")]
    BackgroundWithoutCurve(&'static str),

    /// A role's tone delta pair doesn't list that role as either member.
    #[error("role '{role}' declares a pair of '{role_a}' and '{role_b}' that doesn't include it")]
    PairMissingRole {
        role: &'static str,
        role_a: &'static str,
        role_b: &'static str,
    },

    /// Unknown variant name.
    #[error("unknown scheme variant '{0}'")]
    UnknownVariant(String),

    /// Config file could not be parsed.
    #[error("failed to parse scheme config: {0}")]
    Config(#[from] toml::de::Error),

    /// Color-layer error (hex parsing, tone range, rotation tables).
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, SchemeError>;
