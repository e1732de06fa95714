//! Types owned by the clipboard subsystem.

use crate::draw::color::Rgba;
use crate::draw::surface::{SurfaceError, read_pixel};
use crate::geometry::{Point, Rectangle, SelectionShape};
use cairo::ImageSurface;
use std::fmt;

/// A committed selection. The region is always normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    region: Rectangle,
    pub shape: SelectionShape,
}

impl Selection {
    /// Creates a selection from any drag rectangle, normalizing it.
    pub fn new(region: Rectangle, shape: SelectionShape) -> Self {
        Self {
            region: region.normalize(),
            shape,
        }
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }
}

/// Pixels captured by the last copy or cut.
///
/// Premultiplied ARGB32, exactly the size of the captured region.
pub struct ClipboardBuffer {
    image: ImageSurface,
}

impl ClipboardBuffer {
    pub(crate) fn new(image: ImageSurface) -> Self {
        Self { image }
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub(crate) fn image(&self) -> &ImageSurface {
        &self.image
    }

    /// Top-left draw position that centers the buffer on `point`.
    ///
    /// Floored to whole pixels so pasted content stays pixel-exact.
    pub fn origin_centered_at(&self, point: Point) -> (i32, i32) {
        (
            (point.x - self.width() as f64 / 2.0).floor() as i32,
            (point.y - self.height() as f64 / 2.0).floor() as i32,
        )
    }

    /// Reads one buffered pixel (straight alpha).
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        read_pixel(&mut self.image, x, y)
    }
}

impl fmt::Debug for ClipboardBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Where the floating paste image follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PastePreview {
    pub anchor: Point,
}
