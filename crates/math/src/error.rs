//! Conversion errors for the float and text helpers
//!
//! The numeric kernels never fail; they report domain errors through in-band
//! sentinel values (see the crate docs). Only the peripheral conversions into
//! [`Q16`](crate::Q16) from `f32`, `f64` and strings can be rejected.

use core::fmt;
use core::num::ParseFloatError;

/// Error returned by the strict `TryFrom` and `FromStr` conversions into `Q16`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The input was NaN or infinite.
    NotFinite,
    /// The input lies outside `[-32768.0, 32767.99998]`.
    OutOfRange(f64),
    /// The text was not a decimal number.
    Parse(ParseFloatError),
}

impl ConversionError {
    /// Short machine-friendly identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFinite => "not-finite",
            Self::OutOfRange(_) => "out-of-range",
            Self::Parse(_) => "parse",
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => write!(f, "value is not finite"),
            Self::OutOfRange(value) => write!(
                f,
                "{} is outside the Q16.16 range [-32768, 32767.99998]",
                value
            ),
            Self::Parse(err) => write!(f, "invalid decimal number: {}", err),
        }
    }
}

impl core::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
