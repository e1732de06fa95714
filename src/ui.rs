/// Status readout: what a status bar shows about the engine
use crate::draw::{CanvasSize, Color};
use crate::input::{PointerType, Tool};
use std::fmt;

/// Snapshot of everything a status bar displays.
///
/// Rebuilt by the engine after every relevant transition and handed to
/// [`CanvasHost::status_changed`](crate::host::CanvasHost::status_changed).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReadout {
    pub tool: Tool,
    /// "Pencil", "Brush", ...
    pub tool_label: &'static str,
    /// Color name or hex; reads "Eraser <background>" while erasing
    pub color_label: String,
    pub brush_size: u32,
    /// `None` until the first layout pass has sized the canvas
    pub canvas: Option<CanvasSize>,
    pub pointer_type: PointerType,
    /// A pointer interaction is in progress
    pub drawing: bool,
    pub paste_mode: bool,
    /// Copy and cut are available (a selection exists)
    pub can_modify_selection: bool,
    /// Paste is available (the clipboard holds pixels)
    pub can_paste: bool,
}

impl StatusReadout {
    pub(crate) fn build(
        tool: Tool,
        color: Color,
        background: Color,
        brush_size: u32,
        canvas: CanvasSize,
        pointer_type: PointerType,
    ) -> Self {
        let color_label = match tool {
            Tool::Eraser => format!(
                "Eraser {}",
                crate::util::color_label(&background).to_lowercase()
            ),
            _ => crate::util::color_label(&color),
        };

        Self {
            tool,
            tool_label: tool.label(),
            color_label,
            brush_size,
            canvas: (!canvas.is_empty()).then_some(canvas),
            pointer_type,
            drawing: false,
            paste_mode: false,
            can_modify_selection: false,
            can_paste: false,
        }
    }

    pub fn dimensions_label(&self) -> String {
        match self.canvas {
            Some(size) => format!("{}×{}", size.width, size.height),
            None => "Sizing…".to_string(),
        }
    }

    pub fn state_label(&self) -> &'static str {
        if self.drawing { "Drawing" } else { "Ready" }
    }
}

impl fmt::Display for StatusReadout {
    /// One-line rendering, e.g. `[Pencil] [Red] [5px] [800×600] [Mouse] Ready`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}px] [{}] [{}] {}",
            self.tool_label,
            self.color_label,
            self.brush_size,
            self.dimensions_label(),
            self.pointer_type.label(),
            self.state_label()
        )?;
        if self.paste_mode {
            write!(f, " (Paste mode active)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn eraser_reports_background_instead_of_color() {
        let status = StatusReadout::build(
            Tool::Eraser,
            RED,
            WHITE,
            12,
            CanvasSize::new(0, 0),
            PointerType::Pen,
        );
        assert_eq!(status.color_label, "Eraser white");
        assert!(status.canvas.is_none());
        assert_eq!(status.dimensions_label(), "Sizing…");
    }

    #[test]
    fn display_line() {
        let mut status = StatusReadout::build(
            Tool::Pencil,
            RED,
            WHITE,
            5,
            CanvasSize::new(800, 600),
            PointerType::Mouse,
        );
        assert_eq!(status.to_string(), "[Pencil] [Red] [5px] [800×600] [Mouse] Ready");

        status.paste_mode = true;
        status.drawing = true;
        assert!(status.to_string().ends_with("Drawing (Paste mode active)"));
    }
}
