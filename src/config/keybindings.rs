//! Keybinding configuration types and parsing.
//!
//! Shortcuts are global: they apply regardless of which part of the window
//! has focus. The `Primary` modifier token resolves to Command on macOS and
//! Control everywhere else, so one config file works on every platform.

use crate::input::modifiers::{Modifiers, Platform};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Clipboard
    Copy,
    Cut,
    Paste,
    CancelPaste,

    // Canvas
    ClearCanvas,
    Snapshot,

    // Tool selection
    SelectPencil,
    SelectBrush,
    SelectEraser,
    SelectRectangle,
    SelectOval,

    // Brush size
    IncreaseBrushSize,
    DecreaseBrushSize,
}

/// A single keybinding: a key with the exact modifier set it needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Primary+Shift+S" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// `Primary` (alias `CmdOrCtrl`) is resolved for `platform`.
    pub fn parse(s: &str, platform: Platform) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut meta = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" | "option" => alt = true,
                "meta" | "cmd" | "command" | "super" => meta = true,
                "primary" | "cmdorctrl" => match platform {
                    Platform::MacOs => meta = true,
                    Platform::Other => ctrl = true,
                },
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Primary+]" splits cleanly, but a '+' key leaves empty parts behind.
        let key = key_parts.join("+");
        let key = if key.is_empty() || key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Check if this keybinding matches the pressed key and modifier state.
    pub fn matches(&self, key: &str, modifiers: &Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.ctrl
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
            && self.meta == modifiers.meta
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// copy = ["Primary+C"]
/// cancel_paste = ["Escape"]
/// select_pencil = ["P"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_copy")]
    pub copy: Vec<String>,

    #[serde(default = "default_cut")]
    pub cut: Vec<String>,

    #[serde(default = "default_paste")]
    pub paste: Vec<String>,

    #[serde(default = "default_cancel_paste")]
    pub cancel_paste: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_snapshot")]
    pub snapshot: Vec<String>,

    #[serde(default = "default_select_pencil")]
    pub select_pencil: Vec<String>,

    #[serde(default = "default_select_brush")]
    pub select_brush: Vec<String>,

    #[serde(default = "default_select_eraser")]
    pub select_eraser: Vec<String>,

    #[serde(default = "default_select_rectangle")]
    pub select_rectangle: Vec<String>,

    #[serde(default = "default_select_oval")]
    pub select_oval: Vec<String>,

    #[serde(default = "default_increase_brush_size")]
    pub increase_brush_size: Vec<String>,

    #[serde(default = "default_decrease_brush_size")]
    pub decrease_brush_size: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            copy: default_copy(),
            cut: default_cut(),
            paste: default_paste(),
            cancel_paste: default_cancel_paste(),
            clear_canvas: default_clear_canvas(),
            snapshot: default_snapshot(),
            select_pencil: default_select_pencil(),
            select_brush: default_select_brush(),
            select_eraser: default_select_eraser(),
            select_rectangle: default_select_rectangle(),
            select_oval: default_select_oval(),
            increase_brush_size: default_increase_brush_size(),
            decrease_brush_size: default_decrease_brush_size(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for `platform`.
    ///
    /// Returns an error if any keybinding string is invalid or if two actions
    /// resolve to the same binding.
    pub fn build_action_map(&self, platform: Platform) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 13] = [
            (&self.copy, Action::Copy),
            (&self.cut, Action::Cut),
            (&self.paste, Action::Paste),
            (&self.cancel_paste, Action::CancelPaste),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.snapshot, Action::Snapshot),
            (&self.select_pencil, Action::SelectPencil),
            (&self.select_brush, Action::SelectBrush),
            (&self.select_eraser, Action::SelectEraser),
            (&self.select_rectangle, Action::SelectRectangle),
            (&self.select_oval, Action::SelectOval),
            (&self.increase_brush_size, Action::IncreaseBrushSize),
            (&self.decrease_brush_size, Action::DecreaseBrushSize),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str, platform)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_copy() -> Vec<String> {
    vec!["Primary+C".to_string()]
}

fn default_cut() -> Vec<String> {
    vec!["Primary+X".to_string()]
}

fn default_paste() -> Vec<String> {
    vec!["Primary+V".to_string()]
}

fn default_cancel_paste() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Primary+Shift+Delete".to_string()]
}

fn default_snapshot() -> Vec<String> {
    vec!["Primary+Shift+S".to_string()]
}

fn default_select_pencil() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_select_brush() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_select_eraser() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_select_rectangle() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_select_oval() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_increase_brush_size() -> Vec<String> {
    vec!["]".to_string()]
}

fn default_decrease_brush_size() -> Vec<String> {
    vec!["[".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(ctrl: bool, shift: bool, meta: bool) -> Modifiers {
        Modifiers {
            ctrl,
            shift,
            alt: false,
            meta,
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape", Platform::Other).unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl && !binding.shift && !binding.alt && !binding.meta);
    }

    #[test]
    fn test_primary_resolves_per_platform() {
        let other = KeyBinding::parse("Primary+C", Platform::Other).unwrap();
        assert!(other.ctrl);
        assert!(!other.meta);

        let mac = KeyBinding::parse("Primary+C", Platform::MacOs).unwrap();
        assert!(mac.meta);
        assert!(!mac.ctrl);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Shift + Primary + S", Platform::Other).unwrap();
        let b = KeyBinding::parse("Ctrl+Shift+S", Platform::Other).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++", Platform::Other).unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift", Platform::Other).is_err());
        assert!(KeyBinding::parse("  ", Platform::Other).is_err());
    }

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let binding = KeyBinding::parse("Primary+V", Platform::Other).unwrap();
        assert!(binding.matches("v", &held(true, false, false)));
        assert!(!binding.matches("v", &held(true, true, false)));
        assert!(!binding.matches("v", &held(false, false, true)));
        assert!(!binding.matches("c", &held(true, false, false)));
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default()
            .build_action_map(Platform::MacOs)
            .unwrap();

        let escape = KeyBinding::parse("Escape", Platform::MacOs).unwrap();
        assert_eq!(map.get(&escape), Some(&Action::CancelPaste));

        let cmd_x = KeyBinding::parse("Cmd+X", Platform::MacOs).unwrap();
        assert_eq!(map.get(&cmd_x), Some(&Action::Cut));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.copy = vec!["Primary+C".to_string()];
        config.cut = vec!["Ctrl+C".to_string()];

        let err = config.build_action_map(Platform::Other).unwrap_err();
        assert!(err.contains("Duplicate keybinding"));

        // On macOS Primary is Cmd, so the two no longer collide.
        assert!(config.build_action_map(Platform::MacOs).is_ok());
    }
}
