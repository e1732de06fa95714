//! Pointer cursor previews for the active tool.
//!
//! Freehand tools get a round image the size of the brush so users can see
//! exactly what a stroke will cover. Selection tools and paste mode use stock
//! host cursors.

use crate::draw::color::{Color, OUTLINE};
use crate::draw::surface::{Snapshot, SurfaceError};
use crate::input::tool::{BRUSH_OPACITY, Style, Tool};
use cairo::{Context, Format, ImageSurface};

/// Smallest drawn circle, so 1px brushes remain visible
const MIN_CURSOR_BRUSH: u32 = 6;
/// Largest drawn circle; hosts tend to reject bigger cursors
const MAX_CURSOR_BRUSH: u32 = 64;
/// Added to the clamped brush size to leave room for the outline
const CURSOR_RING: u32 = 6;
const OUTLINE_WIDTH: f64 = 1.0;

/// What the host should show as the pointer cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorPreview {
    /// Custom image; `hotspot` is the pixel that tracks the pointer
    Brush { image: Snapshot, hotspot: (u32, u32) },
    Crosshair,
    /// Copy-style cursor shown while a paste is being positioned
    Copy,
}

/// Inputs a cursor is derived from. Two equal keys render equal cursors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CursorKey {
    tool: Tool,
    brush_size: u32,
    color: Color,
    background: Color,
    paste_mode: bool,
}

impl CursorKey {
    pub(crate) fn new(tool: Tool, style: &Style, background: Color, paste_mode: bool) -> Self {
        Self {
            tool,
            brush_size: style.brush_size,
            color: style.color,
            background,
            paste_mode,
        }
    }
}

/// Diameter of the filled circle drawn for `brush_size`.
pub fn cursor_diameter(brush_size: u32) -> u32 {
    brush_size.clamp(MIN_CURSOR_BRUSH, MAX_CURSOR_BRUSH) + CURSOR_RING
}

/// Builds the cursor for the given tool and style.
pub fn render_cursor(
    tool: Tool,
    style: &Style,
    background: Color,
    paste_mode: bool,
) -> Result<CursorPreview, SurfaceError> {
    if paste_mode {
        return Ok(CursorPreview::Copy);
    }

    let fill = match tool {
        Tool::RectangleSelect | Tool::OvalSelect => return Ok(CursorPreview::Crosshair),
        Tool::Pencil => style.color,
        Tool::Brush => style.color.with_alpha(BRUSH_OPACITY),
        Tool::Eraser => background,
    };

    let diameter = cursor_diameter(style.brush_size);
    let side = diameter + 2;
    let mut surface = ImageSurface::create(Format::ARgb32, side as i32, side as i32)?;
    {
        let ctx = Context::new(&surface)?;
        let center = side as f64 / 2.0;
        let radius = diameter as f64 / 2.0;

        ctx.arc(center, center, radius, 0.0, 2.0 * std::f64::consts::PI);
        fill.apply(&ctx);
        ctx.fill_preserve()?;
        ctx.set_line_width(OUTLINE_WIDTH);
        OUTLINE.apply(&ctx);
        ctx.stroke()?;
    }

    let image = Snapshot::from_surface(&mut surface)?;
    Ok(CursorPreview::Brush {
        image,
        hotspot: (side / 2, side / 2),
    })
}
