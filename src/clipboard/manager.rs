//! Copy, cut and paste over the paint surface.

use super::types::{ClipboardBuffer, PastePreview, Selection};
use crate::draw::render::{render_paste_preview, render_selection_outline};
use crate::draw::surface::{SurfaceError, SurfacePair};
use crate::geometry::{PixelRect, Point};
use log::{debug, info};

/// Owns the selection, the clipboard buffer and the paste state.
///
/// Operations return `Ok(false)` when their precondition is not met; the
/// caller treats that as a silent no-op.
#[derive(Debug, Default)]
pub struct Clipboard {
    selection: Option<Selection>,
    buffer: Option<ClipboardBuffer>,
    paste_mode: bool,
    preview: Option<PastePreview>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn buffer(&self) -> Option<&ClipboardBuffer> {
        self.buffer.as_ref()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut ClipboardBuffer> {
        self.buffer.as_mut()
    }

    pub fn preview(&self) -> Option<&PastePreview> {
        self.preview.as_ref()
    }

    pub fn is_paste_mode(&self) -> bool {
        self.paste_mode
    }

    /// Copy and cut are possible.
    pub fn can_modify_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Paste is possible.
    pub fn has_clipboard(&self) -> bool {
        self.buffer.is_some()
    }

    /// Stores a freshly committed selection and draws its marquee.
    pub fn set_selection(
        &mut self,
        surfaces: &SurfacePair,
        selection: Selection,
    ) -> Result<(), SurfaceError> {
        debug!("Selection committed: {:?}", selection);
        self.selection = Some(selection);
        self.redraw_overlay(surfaces)
    }

    /// Forgets the selection without touching any surface.
    pub fn invalidate_selection(&mut self) {
        if self.selection.take().is_some() {
            debug!("Selection cleared");
        }
    }

    /// Captures the selection's bounding pixels into the buffer.
    pub fn copy(&mut self, surfaces: &SurfacePair) -> Result<bool, SurfaceError> {
        let Some(region) = self.capture_region(surfaces) else {
            debug!("Nothing to copy");
            return Ok(false);
        };

        let image = surfaces.read_region(region)?;
        self.buffer = Some(ClipboardBuffer::new(image));
        info!(
            "Copied {}x{} region at ({}, {})",
            region.width, region.height, region.x, region.y
        );
        Ok(true)
    }

    /// Copies, then fills the region with the background and drops the selection.
    ///
    /// A failed capture leaves the paint surface untouched.
    pub fn cut(&mut self, surfaces: &SurfacePair) -> Result<bool, SurfaceError> {
        let Some(region) = self.capture_region(surfaces) else {
            debug!("Nothing to cut");
            return Ok(false);
        };

        let image = surfaces.read_region(region)?;
        surfaces.fill_background(region)?;
        self.buffer = Some(ClipboardBuffer::new(image));
        self.selection = None;
        surfaces.clear_overlay()?;
        info!(
            "Cut {}x{} region at ({}, {})",
            region.width, region.height, region.x, region.y
        );
        Ok(true)
    }

    /// Arms paste mode: the next pointer down commits the buffer.
    pub fn enter_paste_mode(&mut self, surfaces: &SurfacePair) -> Result<bool, SurfaceError> {
        if self.buffer.is_none() {
            debug!("Clipboard empty, not entering paste mode");
            return Ok(false);
        }
        surfaces.clear_overlay()?;
        self.selection = None;
        self.preview = None;
        self.paste_mode = true;
        debug!("Paste mode active");
        Ok(true)
    }

    /// Moves the floating paste image so it is centered at `point`.
    pub fn update_paste_preview(
        &mut self,
        surfaces: &SurfacePair,
        point: Point,
    ) -> Result<bool, SurfaceError> {
        if !self.paste_mode {
            return Ok(false);
        }
        self.preview = Some(PastePreview { anchor: point });
        self.redraw_overlay(surfaces)?;
        Ok(true)
    }

    /// Writes the buffer centered at `point` onto the paint surface, replacing
    /// the pixels underneath, and leaves paste mode.
    pub fn commit_paste(&mut self, surfaces: &SurfacePair, point: Point) -> Result<bool, SurfaceError> {
        if !self.paste_mode {
            return Ok(false);
        }
        let Some(buffer) = &self.buffer else {
            return Ok(false);
        };

        let (x, y) = buffer.origin_centered_at(point);
        surfaces.write_region(buffer.image(), x, y)?;
        info!(
            "Pasted {}x{} buffer at ({}, {})",
            buffer.width(),
            buffer.height(),
            x,
            y
        );

        self.paste_mode = false;
        self.preview = None;
        surfaces.clear_overlay()?;
        Ok(true)
    }

    /// Leaves paste mode without touching the paint surface.
    pub fn cancel_paste(&mut self, surfaces: &SurfacePair) -> Result<bool, SurfaceError> {
        if !self.paste_mode {
            return Ok(false);
        }
        self.paste_mode = false;
        self.preview = None;
        debug!("Paste cancelled");
        // Leave the state consistent even if the overlay is already gone.
        match surfaces.clear_overlay() {
            Ok(()) | Err(SurfaceError::Unavailable) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Hides the floating image while the pointer is away; paste mode stays armed.
    pub fn hide_paste_preview(&mut self, surfaces: &SurfacePair) -> Result<(), SurfaceError> {
        if self.preview.take().is_some() {
            surfaces.clear_overlay()?;
        }
        Ok(())
    }

    /// Repaints the overlay from the current state: the paste image if one is
    /// floating, else the selection marquee, else nothing.
    pub fn redraw_overlay(&self, surfaces: &SurfacePair) -> Result<(), SurfaceError> {
        surfaces.clear_overlay()?;

        if let (true, Some(preview), Some(buffer)) = (self.paste_mode, &self.preview, &self.buffer) {
            let origin = buffer.origin_centered_at(preview.anchor);
            return surfaces.with_overlay(|ctx| render_paste_preview(ctx, buffer.image(), origin));
        }

        if let Some(selection) = &self.selection {
            return surfaces
                .with_overlay(|ctx| render_selection_outline(ctx, selection.region(), selection.shape));
        }

        Ok(())
    }

    /// Drops the selection and any floating preview after a canvas clear.
    ///
    /// Paste mode and the buffer survive; the buffer belongs to the user.
    pub(crate) fn on_canvas_cleared(&mut self) {
        self.selection = None;
        self.preview = None;
    }

    /// The part of the selection's bounding box that lies on the canvas.
    fn capture_region(&self, surfaces: &SurfacePair) -> Option<PixelRect> {
        let selection = self.selection.as_ref()?;
        let size = surfaces.size();
        let canvas = PixelRect::new(0, 0, size.width as i32, size.height as i32)?;
        selection.region().to_pixel_rect()?.intersect(&canvas)
    }
}
