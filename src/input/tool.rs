//! Drawing tool selection and per-tool compositing rules.

use crate::draw::{Blend, Color, StrokeStyle};
use crate::geometry::SelectionShape;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest brush diameter in pixels.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest brush diameter in pixels.
pub const MAX_BRUSH_SIZE: u32 = 50;
/// Per-segment opacity of the soft brush
pub const BRUSH_OPACITY: f64 = 0.15;
/// Halo radius of the soft brush relative to its size
pub const BRUSH_SOFTNESS: f64 = 0.3;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. Freehand tools paint straight onto
/// the paint surface; selection tools drag out a region on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Hard, fully opaque line
    Pencil,
    /// Soft, low-opacity stroke that builds up with overlap
    Brush,
    /// Removes paint where it passes
    Eraser,
    /// Rectangular marquee selection
    RectangleSelect,
    /// Elliptical marquee selection
    OvalSelect,
}

impl Default for Tool {
    fn default() -> Self {
        Self::Pencil
    }
}

impl Tool {
    /// Human-readable label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::RectangleSelect => "Rectangle Select",
            Tool::OvalSelect => "Oval Select",
        }
    }

    /// Selection outline produced by this tool, `None` for freehand tools.
    pub fn selection_shape(&self) -> Option<SelectionShape> {
        match self {
            Tool::RectangleSelect => Some(SelectionShape::Rectangle),
            Tool::OvalSelect => Some(SelectionShape::Oval),
            Tool::Pencil | Tool::Brush | Tool::Eraser => None,
        }
    }

    /// Resolves the compositing rule for a freehand stroke.
    ///
    /// | Tool   | Color      | Blend  | Opacity | Extra                 |
    /// |--------|------------|--------|---------|-----------------------|
    /// | pencil | style      | normal | 1.0     |                       |
    /// | brush  | style      | normal | 0.15    | halo of 0.3 × size    |
    /// | eraser | background | erase  | 1.0     |                       |
    pub fn stroke_style(&self, style: &Style, background: Color) -> Option<StrokeStyle> {
        let width = style.brush_size as f64;
        match self {
            Tool::Pencil => Some(StrokeStyle {
                color: style.color,
                width,
                blend: Blend::Normal,
                opacity: 1.0,
                soft_edge: None,
            }),
            Tool::Brush => Some(StrokeStyle {
                color: style.color,
                width,
                blend: Blend::Normal,
                opacity: BRUSH_OPACITY,
                soft_edge: Some(width * BRUSH_SOFTNESS),
            }),
            Tool::Eraser => Some(StrokeStyle {
                color: background,
                width,
                blend: Blend::Erase,
                opacity: 1.0,
                soft_edge: None,
            }),
            Tool::RectangleSelect | Tool::OvalSelect => None,
        }
    }
}

/// Color and brush size shared by the freehand tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Stroke color; kept but unused while the eraser is active
    pub color: Color,
    /// Brush diameter in pixels (1-50)
    pub brush_size: u32,
}

impl Style {
    pub fn new(color: Color, brush_size: u32) -> Self {
        Self {
            color,
            brush_size: clamp_brush_size(brush_size as i64),
        }
    }
}

/// Clamps any requested size into the supported brush range.
pub fn clamp_brush_size(size: i64) -> u32 {
    size.clamp(MIN_BRUSH_SIZE as i64, MAX_BRUSH_SIZE as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn compositing_rules_per_tool() {
        let style = Style::new(RED, 10);

        let pencil = Tool::Pencil.stroke_style(&style, WHITE).unwrap();
        assert_eq!(pencil.opacity, 1.0);
        assert_eq!(pencil.blend, Blend::Normal);
        assert_eq!(pencil.color, RED);
        assert!(pencil.soft_edge.is_none());

        let brush = Tool::Brush.stroke_style(&style, WHITE).unwrap();
        assert_eq!(brush.opacity, BRUSH_OPACITY);
        assert_eq!(brush.soft_edge, Some(3.0));

        let eraser = Tool::Eraser.stroke_style(&style, WHITE).unwrap();
        assert_eq!(eraser.blend, Blend::Erase);
        assert_eq!(eraser.color, WHITE);
        assert_eq!(eraser.width, 10.0);

        assert!(Tool::OvalSelect.stroke_style(&style, WHITE).is_none());
    }

    #[test]
    fn brush_size_is_clamped() {
        assert_eq!(Style::new(RED, 0).brush_size, 1);
        assert_eq!(Style::new(RED, 80).brush_size, 50);
        assert_eq!(clamp_brush_size(-4), 1);
    }

    #[test]
    fn selection_shapes() {
        assert_eq!(
            Tool::RectangleSelect.selection_shape(),
            Some(SelectionShape::Rectangle)
        );
        assert!(Tool::Brush.selection_shape().is_none());
    }

    #[test]
    fn tool_names_use_kebab_case() {
        let tool: Tool = serde_json::from_str("\"rectangle-select\"").unwrap();
        assert_eq!(tool, Tool::RectangleSelect);
    }
}
