// SPDX-License-Identifier: MIT
//
// Validation errors for the color-science layer.
//
// Unreachable contrast targets and out-of-gamut requests are not errors:
// they degrade to the nearest achievable color. What fails here is input
// that cannot mean anything (a malformed hex string, a tone of 140, a
// rotation table that doesn't line up with its hue table).

use thiserror::Error;

/// Error type for color construction and palette lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Input string was empty.
    #[error("empty color string")]
    Empty,
    /// Contains a non-hex character.
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// Wrong number of hex digits.
    #[error("invalid color length {0}, expected 3, 6, or 8 hex digits")]
    InvalidLength(usize),
    /// A tone argument outside [0, 100].
    #[error("tone {0} is outside [0, 100]")]
    ToneOutOfRange(f64),
    /// A hue breakpoint table and its rotation table disagree in length.
    #[error("hue table has {hues} entries but rotation table has {rotations}")]
    RotationTableMismatch { hues: usize, rotations: usize },
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, ColorError>;
