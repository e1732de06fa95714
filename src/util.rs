//! Color name helpers shared by configuration and the status readout.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Matching is exact on the 8-bit channels, so a color picked as `#FF0000`
/// reads back as "Red". Returns `None` for anything else.
pub fn color_to_name(color: &Color) -> Option<&'static str> {
    let rgba = color.to_rgba8();
    match (rgba.r, rgba.g, rgba.b) {
        (255, 0, 0) => Some("Red"),
        (0, 255, 0) => Some("Green"),
        (0, 0, 255) => Some("Blue"),
        (255, 255, 255) => Some("White"),
        (0, 0, 0) => Some("Black"),
        _ => None,
    }
}

/// Label used by status displays: the color name when known, else its hex.
pub fn color_label(color: &Color) -> String {
    match color_to_name(color) {
        Some(name) => name.to_string(),
        None => color.to_hex(),
    }
}
