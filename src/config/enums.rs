//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a hex string, a named color, or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color
/// default_color = "#FF0000"
///
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#RRGGBB`, `#RGB`, or a named color: red, green, blue, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, `None` when the string is neither hex nor a known name.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) if name.trim().starts_with('#') => Color::from_hex(name),
            ColorSpec::Name(name) => crate::util::name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`], using `fallback` with
    /// a warning when it cannot be resolved.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.resolve().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback.to_hex());
            fallback
        })
    }

    /// Converts the color specification, defaulting to black.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}
