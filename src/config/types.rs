//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::surface::DEFAULT_MINIMUM_HEIGHT;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and style the canvas starts with. Users can change these
/// values at runtime from the toolbar or with keybindings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool active on startup (pencil, brush, eraser, rectangle-select, oval-select)
    #[serde(default)]
    pub default_tool: Tool,

    /// Default stroke color - a hex string like `"#FF0000"`, a named color
    /// (red, green, blue, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush diameter in pixels (valid range: 1 - 50)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: default_color(),
            default_brush_size: default_brush_size(),
        }
    }
}

/// Canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Fill color of fresh, cleared, cut and eraser-touched areas
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,

    /// Smallest canvas height in pixels, whatever space the viewport leaves
    /// below the toolbar (valid range: 1 - 4096)
    #[serde(default = "default_minimum_height")]
    pub minimum_height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: default_background(),
            minimum_height: default_minimum_height(),
        }
    }
}

/// Presentation hints handed to the host.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// How long a notification stays visible, in milliseconds (valid range: 500 - 10000)
    #[serde(default = "default_notification_duration")]
    pub notification_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration_ms: default_notification_duration(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#FFFFFF".to_string())
}

fn default_minimum_height() -> u32 {
    DEFAULT_MINIMUM_HEIGHT
}

fn default_notification_duration() -> u64 {
    2000
}
