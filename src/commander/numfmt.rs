//! Numeric formatting for console output
//!
//! Every floating-point value the commander prints goes through [`Fixed`]
//! so the whole console shares one precision, configured at construction.
//! Integer values (the encoder position counter) print as plain integers.

use core::fmt;

/// Display adapter rendering a float in fixed-point notation with exactly
/// `places` fractional digits. Trailing zeros are kept, scientific notation
/// is never used.
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    value: f32,
    places: usize,
}

impl Fixed {
    /// Wrap `value` for display with `places` digits after the point.
    pub const fn new(value: f32, places: usize) -> Self {
        Self { value, places }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.places, self.value)
    }
}
