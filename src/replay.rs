//! Headless playback of recorded input.
//!
//! A replay script is a JSON document listing host events in order:
//!
//! ```json
//! {
//!   "events": [
//!     { "type": "resize", "width": 320, "height": 240 },
//!     { "type": "select_tool", "tool": "rectangle-select" },
//!     { "type": "pointer_down", "x": 10, "y": 10 },
//!     { "type": "pointer_move", "x": 40, "y": 30, "shift": true },
//!     { "type": "pointer_up", "x": 40, "y": 30 },
//!     { "type": "key_down", "key": "Ctrl" },
//!     { "type": "key_down", "key": "c" }
//!   ]
//! }
//! ```
//!
//! Pointer coordinates are absolute; `origin` gives the surface's on-screen
//! top-left corner and defaults to `(0, 0)`.

use crate::geometry::Point;
use crate::input::events::{Key, PointerEvent, PointerId, PointerType, SurfaceBounds};
use crate::input::{InputState, Tool};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A complete replay script.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// On-screen position of the drawing surface
    #[serde(default)]
    pub origin: Point,
    pub events: Vec<ReplayEvent>,
}

/// Pointer fields shared by down/move/up.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub shift: bool,
    #[serde(default = "default_pointer")]
    pub pointer: PointerId,
    #[serde(default)]
    pub pointer_type: PointerType,
}

impl PointerSample {
    fn event(&self) -> PointerEvent {
        PointerEvent::mouse(self.x, self.y)
            .with_pointer(self.pointer, self.pointer_type)
            .with_shift(self.shift)
    }
}

fn default_pointer() -> PointerId {
    1
}

/// One host event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Viewport size
    Resize { width: u32, height: u32 },
    /// Toolbar height
    Toolbar { height: u32 },
    SelectTool { tool: Tool },
    SetColor { color: String },
    SetBrushSize { size: i64 },
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    PointerLeave {
        #[serde(default = "default_pointer")]
        pointer: PointerId,
    },
    PointerCancel {
        #[serde(default = "default_pointer")]
        pointer: PointerId,
    },
    KeyDown { key: String },
    KeyUp { key: String },
    Copy,
    Cut,
    Paste,
    CancelPaste,
    Clear,
}

impl Script {
    /// Parses a script from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid replay script")
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Feeds every event to `state` in order.
    pub fn run(&self, state: &mut InputState) {
        let mut bounds = SurfaceBounds::new(self.origin.x, self.origin.y, 0.0, 0.0);

        for (index, event) in self.events.iter().enumerate() {
            log::debug!("Replay event {}: {:?}", index, event);
            match event {
                ReplayEvent::Resize { width, height } => {
                    state.on_viewport_resize(*width, *height);
                }
                ReplayEvent::Toolbar { height } => state.on_toolbar_resize(*height),
                ReplayEvent::SelectTool { tool } => state.select_tool(*tool),
                ReplayEvent::SetColor { color } => {
                    state.set_color(color);
                }
                ReplayEvent::SetBrushSize { size } => state.set_brush_size(*size),
                ReplayEvent::PointerDown(sample) => state.on_pointer_down(bounds, &sample.event()),
                ReplayEvent::PointerMove(sample) => state.on_pointer_move(bounds, &sample.event()),
                ReplayEvent::PointerUp(sample) => state.on_pointer_up(bounds, &sample.event()),
                ReplayEvent::PointerLeave { pointer } => state.on_pointer_leave(*pointer),
                ReplayEvent::PointerCancel { pointer } => state.on_pointer_cancel(*pointer),
                ReplayEvent::KeyDown { key } => state.on_key_press(Key::from_name(key)),
                ReplayEvent::KeyUp { key } => state.on_key_release(Key::from_name(key)),
                ReplayEvent::Copy => {
                    state.copy();
                }
                ReplayEvent::Cut => {
                    state.cut();
                }
                ReplayEvent::Paste => {
                    state.paste();
                }
                ReplayEvent::CancelPaste => {
                    state.cancel_paste();
                }
                ReplayEvent::Clear => state.clear(),
            }

            let size = state.canvas_size();
            bounds.width = size.width as f64;
            bounds.height = size.height as f64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        let script = Script::parse(
            r##"{
                "origin": { "x": 5, "y": 7 },
                "events": [
                    { "type": "resize", "width": 100, "height": 100 },
                    { "type": "toolbar", "height": 20 },
                    { "type": "select_tool", "tool": "oval-select" },
                    { "type": "set_color", "color": "#00FF00" },
                    { "type": "set_brush_size", "size": 9 },
                    { "type": "pointer_down", "x": 1, "y": 2, "pointer_type": "pen", "pointer": 4 },
                    { "type": "pointer_move", "x": 3, "y": 4, "shift": true },
                    { "type": "pointer_up", "x": 3, "y": 4 },
                    { "type": "pointer_leave" },
                    { "type": "pointer_cancel", "pointer": 2 },
                    { "type": "key_down", "key": "Escape" },
                    { "type": "key_up", "key": "Shift" },
                    { "type": "copy" }, { "type": "cut" }, { "type": "paste" },
                    { "type": "cancel_paste" }, { "type": "clear" }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(script.origin, Point::new(5.0, 7.0));
        assert_eq!(script.events.len(), 17);
        match &script.events[5] {
            ReplayEvent::PointerDown(sample) => {
                assert_eq!(sample.pointer, 4);
                assert_eq!(sample.pointer_type, PointerType::Pen);
                assert!(!sample.shift);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            script.events[8],
            ReplayEvent::PointerLeave { pointer: 1 }
        ));
    }

    #[test]
    fn rejects_unknown_event() {
        let err = Script::parse(r#"{ "events": [ { "type": "undo" } ] }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid replay script"));
    }
}
