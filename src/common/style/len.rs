use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::unit::{EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_PT, inches_to_emu};

/// Length measurement with units.
///
/// Represents a measurement value used for slide dimensions and shape
/// geometry. Stored in EMUs (English Metric Units), the native unit of
/// PresentationML.
///
/// # Examples
///
/// ```rust
/// use sheetdeck::common::Length;
///
/// let width = Length::from_inches(10.0);
/// assert_eq!(width.emus(), 9_144_000);
/// assert_eq!(width.inches(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length {
    /// Value in EMUs
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: inches_to_emu(inches),
        }
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: (cm * EMUS_PER_CM as f64) as i64,
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let len = Length::from_inches(1.0);
        assert_eq!(len.emus(), 914_400);
        assert!((len.cm() - 2.54).abs() < 1e-9);
        assert_eq!(len.points(), 72.0);
        assert_eq!(Length::from_cm(2.54), len);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::from_inches(7.5).to_string(), "7.50\"");
    }
}
