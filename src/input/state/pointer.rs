use crate::clipboard::Selection;
use crate::draw::render::{render_selection_outline, stroke_segment};
use crate::geometry::{Point, Rectangle};
use crate::input::coords;
use crate::input::events::{PointerEvent, PointerId, SurfaceBounds};
use crate::input::tool::Tool;
use crate::notification::Notice;
use log::debug;

use super::core::log_surface_error;
use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Paste mode: commits the paste centered on the pointer; no interaction starts
    /// - Freehand tools: starts a stroke at the pointer (paint begins on the first move)
    /// - Selection tools: drops the current selection and anchors a new drag
    ///
    /// A press from a second pointer while one interaction is running is ignored.
    pub fn on_pointer_down(&mut self, bounds: SurfaceBounds, event: &PointerEvent) {
        if self.state.is_active() {
            debug!(
                "Ignoring pointer {} while pointer {:?} is active",
                event.pointer_id, self.pointer.active
            );
            return;
        }

        let point = coords::map(bounds, event);
        self.pointer.pointer_type = event.pointer_type;

        if self.clipboard.is_paste_mode() {
            match self.clipboard.commit_paste(&self.surfaces, point) {
                Ok(true) => {
                    self.needs_redraw = true;
                    self.notify(Notice::Pasted);
                }
                Ok(false) => {}
                Err(e) => log_surface_error("paste", e),
            }
            self.refresh_cursor();
            self.publish_status();
            return;
        }

        if !self.surfaces.is_ready() {
            debug!("Pointer down before layout, ignoring");
            return;
        }

        self.acquire_pointer(event.pointer_id);
        self.pointer.is_down = true;
        self.pointer.active = Some(event.pointer_id);

        let tool = self.tool;
        self.state = match tool.selection_shape() {
            None => DrawingState::Stroking {
                tool,
                pointer: event.pointer_id,
                last: point,
            },
            Some(shape) => {
                self.clipboard.invalidate_selection();
                if let Err(e) = self.surfaces.clear_overlay() {
                    log_surface_error("selection start", e);
                }
                self.needs_redraw = true;
                DrawingState::Selecting {
                    shape,
                    pointer: event.pointer_id,
                    anchor: point,
                }
            }
        };
        debug!("{} started at ({:.1}, {:.1})", tool.label(), point.x, point.y);
        self.publish_status();
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Stroking: paints the segment from the previous point and restarts there
    /// - Selecting: redraws the dashed preview; Shift constrains it to a square/circle
    /// - Idle in paste mode: moves the floating paste image
    pub fn on_pointer_move(&mut self, bounds: SurfaceBounds, event: &PointerEvent) {
        let point = coords::map(bounds, event);

        match self.state {
            DrawingState::Idle => {
                if self.clipboard.is_paste_mode() {
                    match self.clipboard.update_paste_preview(&self.surfaces, point) {
                        Ok(_) => self.needs_redraw = true,
                        Err(e) => log_surface_error("paste preview", e),
                    }
                    if self.pointer.pointer_type != event.pointer_type {
                        self.pointer.pointer_type = event.pointer_type;
                        self.publish_status();
                    }
                }
            }
            DrawingState::Stroking {
                tool,
                pointer,
                last,
            } => {
                if pointer != event.pointer_id {
                    return;
                }
                self.stroke(tool, last, point);
                self.state = DrawingState::Stroking {
                    tool,
                    pointer,
                    last: point,
                };
            }
            DrawingState::Selecting {
                shape,
                pointer,
                anchor,
            } => {
                if pointer != event.pointer_id {
                    return;
                }
                let constrain = event.shift || self.modifiers.shift;
                let live = Rectangle::from_drag(anchor, point, constrain);
                let drawn = self.surfaces.clear_overlay().and_then(|()| {
                    self.surfaces
                        .with_overlay(|ctx| render_selection_outline(ctx, live, shape))
                });
                if let Err(e) = drawn {
                    log_surface_error("selection preview", e);
                }
                self.needs_redraw = true;
            }
        }
    }

    /// Processes a pointer release.
    ///
    /// # Behavior
    /// - Stroking: paints the last segment and ends the stroke
    /// - Selecting: commits the normalized region as the selection and shows its marquee
    pub fn on_pointer_up(&mut self, bounds: SurfaceBounds, event: &PointerEvent) {
        if self.state.pointer() != Some(event.pointer_id) {
            return;
        }
        let point = coords::map(bounds, event);

        match self.state {
            DrawingState::Idle => {}
            DrawingState::Stroking { tool, last, .. } => {
                if last != point {
                    self.stroke(tool, last, point);
                }
            }
            DrawingState::Selecting { shape, anchor, .. } => {
                let constrain = event.shift || self.modifiers.shift;
                let region = Rectangle::from_drag(anchor, point, constrain).normalize();
                let committed = if region.width > 0.0 && region.height > 0.0 {
                    self.clipboard
                        .set_selection(&self.surfaces, Selection::new(region, shape))
                } else {
                    debug!("Empty selection discarded");
                    self.surfaces.clear_overlay()
                };
                if let Err(e) = committed {
                    log_surface_error("selection commit", e);
                }
                self.needs_redraw = true;
            }
        }

        self.end_interaction();
        self.publish_status();
    }

    /// The pointer left the surface.
    ///
    /// Ends the interaction without committing a selection; paint already laid
    /// down by a stroke stays. In paste mode the floating image is hidden but
    /// paste mode stays armed.
    pub fn on_pointer_leave(&mut self, pointer: PointerId) {
        self.abort_interaction(pointer, "leave");
    }

    /// The host cancelled the pointer sequence. Same semantics as leave.
    pub fn on_pointer_cancel(&mut self, pointer: PointerId) {
        self.abort_interaction(pointer, "cancel");
    }

    fn abort_interaction(&mut self, pointer: PointerId, reason: &str) {
        match self.state {
            DrawingState::Idle => {
                if self.clipboard.is_paste_mode() {
                    if let Err(e) = self.clipboard.hide_paste_preview(&self.surfaces) {
                        log_surface_error("paste preview", e);
                    }
                    self.needs_redraw = true;
                }
                return;
            }
            DrawingState::Stroking { pointer: owner, .. } => {
                if owner != pointer {
                    return;
                }
            }
            DrawingState::Selecting { pointer: owner, .. } => {
                if owner != pointer {
                    return;
                }
                if let Err(e) = self.surfaces.clear_overlay() {
                    log_surface_error("selection abort", e);
                }
                self.needs_redraw = true;
            }
        }

        debug!("Pointer {} {}, interaction ended", pointer, reason);
        self.end_interaction();
        self.publish_status();
    }

    /// Paints one segment with the compositing rule of `tool`.
    fn stroke(&mut self, tool: Tool, from: Point, to: Point) {
        let Some(style) = tool.stroke_style(&self.style, self.surfaces.background()) else {
            return;
        };
        match self
            .surfaces
            .with_paint(|ctx| stroke_segment(ctx, from, to, &style))
        {
            Ok(()) => self.needs_redraw = true,
            Err(e) => log_surface_error("stroke", e),
        }
    }
}
