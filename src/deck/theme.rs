//! Named theme colors offered for the title slide background.

use crate::common::{Error, RGBColor, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeColor {
    #[default]
    Blue,
    Green,
    Red,
    Purple,
    Orange,
}

impl ThemeColor {
    /// Every palette entry, in menu order.
    pub const ALL: [ThemeColor; 5] = [
        ThemeColor::Blue,
        ThemeColor::Green,
        ThemeColor::Red,
        ThemeColor::Purple,
        ThemeColor::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
        }
    }

    pub const fn rgb(&self) -> RGBColor {
        match self {
            Self::Blue => RGBColor::new(31, 119, 180),
            Self::Green => RGBColor::new(44, 160, 44),
            Self::Red => RGBColor::new(214, 39, 40),
            Self::Purple => RGBColor::new(148, 103, 189),
            Self::Orange => RGBColor::new(255, 127, 14),
        }
    }
}

impl FromStr for ThemeColor {
    type Err = Error;

    /// Parse a palette name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Other(format!("Unknown theme color '{}'", s)))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ThemeColor> for RGBColor {
    fn from(theme: ThemeColor) -> Self {
        theme.rgb()
    }
}
