//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the starting tool and
//! style, the canvas background, notification timing and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, UiConfig};

use crate::draw::color::{BLACK, WHITE};
use crate::input::modifiers::Platform;
use crate::input::state::EngineSettings;
use crate::input::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Style};
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "brush"
/// default_color = "#FF0000"
/// default_brush_size = 12
///
/// [canvas]
/// background_color = "white"
/// minimum_height = 200
///
/// [ui]
/// notification_duration_ms = 2000
///
/// [keybindings]
/// cancel_paste = ["Escape", "Backspace"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool, color and brush size
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas background and layout
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Presentation hints for the host
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1 - 50
    /// - `minimum_height`: 1 - 4096
    /// - `notification_duration_ms`: 500 - 10000
    pub fn validate_and_clamp(&mut self) {
        let brush_range = MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE;
        if !brush_range.contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to {}-{} range",
                self.drawing.default_brush_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.drawing.default_brush_size = self
                .drawing
                .default_brush_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }

        if !(1..=4096).contains(&self.canvas.minimum_height) {
            log::warn!(
                "Invalid minimum_height {}, clamping to 1-4096 range",
                self.canvas.minimum_height
            );
            self.canvas.minimum_height = self.canvas.minimum_height.clamp(1, 4096);
        }

        if !(500..=10_000).contains(&self.ui.notification_duration_ms) {
            log::warn!(
                "Invalid notification_duration_ms {}, clamping to 500-10000 range",
                self.ui.notification_duration_ms
            );
            self.ui.notification_duration_ms = self.ui.notification_duration_ms.clamp(500, 10_000);
        }

        if self.drawing.default_color.resolve().is_none() {
            log::warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name(BLACK.to_hex());
        }

        if self.canvas.background_color.resolve().is_none() {
            log::warn!(
                "Invalid background_color {:?}, falling back to white",
                self.canvas.background_color
            );
            self.canvas.background_color = ColorSpec::Name(WHITE.to_hex());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Resolves this configuration into the settings an engine is built from.
    ///
    /// # Errors
    /// Returns an error when a keybinding is malformed or bound twice.
    pub fn engine_settings(&self, platform: Platform) -> Result<EngineSettings> {
        let action_map = self
            .keybindings
            .build_action_map(platform)
            .map_err(|e| anyhow!(e))
            .context("Invalid [keybindings] section")?;

        Ok(EngineSettings {
            tool: self.drawing.default_tool,
            style: Style::new(
                self.drawing.default_color.to_color(),
                self.drawing.default_brush_size,
            ),
            background: self.canvas.background_color.to_color_or(WHITE),
            minimum_height: self.canvas.minimum_height,
            platform,
            action_map,
        })
    }

    /// JSON schema of the configuration file.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Pencil);
        assert_eq!(config.drawing.default_brush_size, 5);
        assert_eq!(config.canvas.minimum_height, 200);
        assert_eq!(config.ui.notification_duration_ms, 2000);
        assert_eq!(config.keybindings.copy, vec!["Primary+C".to_string()]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r##"
            [drawing]
            default_brush_size = 400
            default_color = "not-a-color"

            [ui]
            notification_duration_ms = 1
            "##,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_brush_size, 50);
        assert_eq!(config.ui.notification_duration_ms, 500);
        assert_eq!(config.drawing.default_color.resolve(), Some(BLACK));
    }

    #[test]
    fn load_from_reads_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
            [drawing]
            default_tool = "oval-select"
            default_color = [255, 0, 0]

            [canvas]
            background_color = "#000"
            "##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let settings = config.engine_settings(Platform::Other).unwrap();
        assert_eq!(settings.tool, Tool::OvalSelect);
        assert_eq!(settings.style.color, crate::draw::RED);
        assert_eq!(settings.background, BLACK);
    }

    #[test]
    fn invalid_keybinding_is_reported() {
        let mut config = Config::default();
        config.keybindings.paste = vec!["Ctrl+Shift".to_string()];
        let err = config.engine_settings(Platform::Other).unwrap_err();
        assert!(format!("{:#}", err).contains("keybindings"));
    }
}
