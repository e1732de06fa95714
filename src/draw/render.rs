//! Cairo-based rendering primitives for strokes, marquees and paste previews.

use super::color::{Color, OUTLINE, WHITE};
use crate::geometry::{Point, Rectangle, SelectionShape};
use cairo::{Context, ImageSurface, LineCap, LineJoin, Operator};

/// Dash pattern for marquees and paste borders.
const MARQUEE_DASH: [f64; 2] = [6.0, 4.0];
/// Marquee line width in pixels
const MARQUEE_WIDTH: f64 = 1.0;
/// Number of widening passes used to fake a blurred edge
const SOFT_EDGE_PASSES: u32 = 3;
/// Opacity of the floating clipboard image while positioning a paste
pub const PASTE_PREVIEW_OPACITY: f64 = 0.7;

/// How a stroke combines with what is already on the paint surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// Paint over the destination.
    Normal,
    /// Remove destination coverage where the stroke lands.
    Erase,
}

/// Fully resolved parameters for stroking one freehand segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub blend: Blend,
    pub opacity: f64,
    /// Radius of the soft halo drawn under the stroke, if any.
    pub soft_edge: Option<f64>,
}

/// Strokes the segment `from → to` onto `ctx`.
///
/// All context state is restored afterwards, so every segment starts from
/// default opacity, operator and line settings.
pub fn stroke_segment(
    ctx: &Context,
    from: Point,
    to: Point,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_line_cap(LineCap::Round);
    ctx.set_line_join(LineJoin::Round);

    let result = match style.blend {
        Blend::Erase => {
            ctx.set_operator(Operator::DestOut);
            ctx.set_source_rgba(0.0, 0.0, 0.0, style.opacity);
            trace_segment(ctx, from, to, style.width)
        }
        Blend::Normal => {
            ctx.set_operator(Operator::Over);
            if let Some(radius) = style.soft_edge.filter(|r| *r > 0.0) {
                render_soft_edge(ctx, from, to, style, radius)?;
            }
            style.color.with_alpha(style.opacity).apply(ctx);
            trace_segment(ctx, from, to, style.width)
        }
    };

    ctx.restore()?;
    result
}

fn trace_segment(ctx: &Context, from: Point, to: Point, width: f64) -> Result<(), cairo::Error> {
    ctx.new_path();
    ctx.set_line_width(width);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke()
}

/// Approximates a shadow blur with progressively wider, fainter strokes.
fn render_soft_edge(
    ctx: &Context,
    from: Point,
    to: Point,
    style: &StrokeStyle,
    radius: f64,
) -> Result<(), cairo::Error> {
    let pass_alpha = style.opacity / (SOFT_EDGE_PASSES as f64 + 1.0);
    for pass in (1..=SOFT_EDGE_PASSES).rev() {
        let spread = radius * pass as f64 / SOFT_EDGE_PASSES as f64;
        style.color.with_alpha(pass_alpha).apply(ctx);
        trace_segment(ctx, from, to, style.width + spread * 2.0)?;
    }
    Ok(())
}

/// Draws the dashed outline of a (possibly un-normalized) region.
///
/// Used both for the live drag preview and for the committed selection marquee.
pub fn render_selection_outline(
    ctx: &Context,
    region: Rectangle,
    shape: SelectionShape,
) -> Result<(), cairo::Error> {
    let rect = region.normalize();
    ctx.save()?;
    ctx.set_line_width(MARQUEE_WIDTH);

    // Light underlay first so the dashes read on dark artwork too.
    for (color, dashed) in [(WHITE, false), (OUTLINE, true)] {
        ctx.new_path();
        if !trace_outline(ctx, rect, shape)? {
            break;
        }
        if dashed {
            ctx.set_dash(&MARQUEE_DASH, 0.0);
        } else {
            ctx.set_dash(&[], 0.0);
        }
        color.apply(ctx);
        ctx.stroke()?;
    }

    ctx.restore()
}

/// Adds the outline path; returns `false` when there is nothing to trace.
fn trace_outline(ctx: &Context, rect: Rectangle, shape: SelectionShape) -> Result<bool, cairo::Error> {
    match shape {
        SelectionShape::Rectangle => {
            // Half-pixel offset keeps 1px lines crisp on integer coordinates.
            ctx.rectangle(rect.x + 0.5, rect.y + 0.5, rect.width, rect.height);
            Ok(true)
        }
        SelectionShape::Oval => {
            if rect.width <= 0.0 || rect.height <= 0.0 {
                return Ok(false);
            }
            let center = rect.center();
            ctx.save()?;
            ctx.translate(center.x, center.y);
            ctx.scale(rect.width / 2.0, rect.height / 2.0);
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
            ctx.restore()?;
            Ok(true)
        }
    }
}

/// Draws the floating clipboard image at `origin` plus its dashed border.
pub fn render_paste_preview(
    ctx: &Context,
    buffer: &ImageSurface,
    origin: (i32, i32),
) -> Result<(), cairo::Error> {
    let (x, y) = (origin.0 as f64, origin.1 as f64);
    let (w, h) = (buffer.width() as f64, buffer.height() as f64);

    ctx.save()?;
    ctx.rectangle(x, y, w, h);
    ctx.clip();
    ctx.set_source_surface(buffer, x, y)?;
    ctx.paint_with_alpha(PASTE_PREVIEW_OPACITY)?;
    ctx.restore()?;

    render_selection_outline(ctx, Rectangle::new(x, y, w, h), SelectionShape::Rectangle)
}
