//! Slide background fills.

use crate::common::RGBColor;
use serde::{Deserialize, Serialize};

/// Slide background configuration.
///
/// A slide without a background inherits the master background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlideBackground {
    /// Solid color fill
    Solid {
        /// Fill color
        color: RGBColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid { color }
    }

    /// The fill color of a solid background.
    pub fn solid_color(&self) -> Option<RGBColor> {
        match self {
            Self::Solid { color } => Some(*color),
        }
    }
}
