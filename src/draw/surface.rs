//! Paint/overlay surface pair with content-preserving resize.
//!
//! Both surfaces are ARGB32 Cairo image surfaces that always share the same
//! dimensions. The paint surface holds committed artwork; the overlay holds
//! transient previews and starts transparent. The host composites the paint
//! surface below the overlay.

use super::color::{Color, Rgba};
use crate::geometry::PixelRect;
use cairo::{Context, Format, ImageSurface, Operator};
use thiserror::Error;

/// Smallest canvas height the layout will produce.
pub const DEFAULT_MINIMUM_HEIGHT: u32 = 200;

/// Errors raised while touching the pixel surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// No surfaces exist yet (before the first layout pass) or a zero size was requested.
    #[error("drawing surfaces are not available")]
    Unavailable,

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface pixel data is busy: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Dimensions shared by both surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Computes the canvas height from the viewport and the toolbar above it.
pub fn layout_height(viewport_height: u32, toolbar_height: u32, minimum_height: u32) -> u32 {
    viewport_height
        .saturating_sub(toolbar_height)
        .max(minimum_height)
}

struct Surfaces {
    paint: ImageSurface,
    overlay: ImageSurface,
}

/// Owns the paint and overlay surfaces.
pub struct SurfacePair {
    surfaces: Option<Surfaces>,
    size: CanvasSize,
    background: Color,
}

impl SurfacePair {
    /// Creates an empty pair. Surfaces are allocated by the first [`resize`](Self::resize).
    pub fn new(background: Color) -> Self {
        Self {
            surfaces: None,
            size: CanvasSize::default(),
            background,
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether the surfaces have been allocated.
    pub fn is_ready(&self) -> bool {
        self.surfaces.is_some()
    }

    /// Resizes both surfaces, keeping painted content anchored at the top-left.
    ///
    /// Returns `Ok(false)` when the size is unchanged; nothing is reallocated
    /// or cleared in that case. Content beyond the new bounds is clipped.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool, SurfaceError> {
        let target = CanvasSize::new(width, height);
        if target.is_empty() {
            return Err(SurfaceError::Unavailable);
        }
        if self.surfaces.is_some() && target == self.size {
            return Ok(false);
        }

        let w = i32::try_from(width).map_err(|_| cairo::Error::InvalidSize)?;
        let h = i32::try_from(height).map_err(|_| cairo::Error::InvalidSize)?;

        let paint = ImageSurface::create(Format::ARgb32, w, h)?;
        {
            let ctx = Context::new(&paint)?;
            ctx.set_operator(Operator::Source);
            self.background.apply(&ctx);
            ctx.paint()?;

            if let Some(old) = &self.surfaces {
                // Erased pixels are transparent and must stay that way, so the
                // old content replaces rather than blends over the fill.
                ctx.rectangle(0.0, 0.0, old.paint.width() as f64, old.paint.height() as f64);
                ctx.clip();
                ctx.set_source_surface(&old.paint, 0.0, 0.0)?;
                ctx.paint()?;
            }
        }
        let overlay = ImageSurface::create(Format::ARgb32, w, h)?;

        log::debug!(
            "Resized surfaces from {}x{} to {}x{}",
            self.size.width,
            self.size.height,
            width,
            height
        );
        self.surfaces = Some(Surfaces { paint, overlay });
        self.size = target;
        Ok(true)
    }

    /// Fills the paint surface with the background and clears the overlay.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let surfaces = self.surfaces.as_ref().ok_or(SurfaceError::Unavailable)?;
        let ctx = Context::new(&surfaces.paint)?;
        ctx.set_operator(Operator::Source);
        self.background.apply(&ctx);
        ctx.paint()?;
        drop(ctx);
        self.clear_overlay()
    }

    /// Makes the overlay fully transparent.
    pub fn clear_overlay(&self) -> Result<(), SurfaceError> {
        let surfaces = self.surfaces.as_ref().ok_or(SurfaceError::Unavailable)?;
        let ctx = Context::new(&surfaces.overlay)?;
        ctx.set_operator(Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Runs `draw` against a fresh context on the paint surface.
    ///
    /// The context is dropped before returning so pixel read-back stays possible.
    pub fn with_paint<R>(
        &self,
        draw: impl FnOnce(&Context) -> Result<R, cairo::Error>,
    ) -> Result<R, SurfaceError> {
        let surfaces = self.surfaces.as_ref().ok_or(SurfaceError::Unavailable)?;
        let ctx = Context::new(&surfaces.paint)?;
        Ok(draw(&ctx)?)
    }

    /// Runs `draw` against a fresh context on the overlay surface.
    pub fn with_overlay<R>(
        &self,
        draw: impl FnOnce(&Context) -> Result<R, cairo::Error>,
    ) -> Result<R, SurfaceError> {
        let surfaces = self.surfaces.as_ref().ok_or(SurfaceError::Unavailable)?;
        let ctx = Context::new(&surfaces.overlay)?;
        Ok(draw(&ctx)?)
    }

    /// Copies a region of the paint surface into a new surface of the region's size.
    ///
    /// Parts of the region outside the canvas come back transparent.
    pub fn read_region(&self, region: PixelRect) -> Result<ImageSurface, SurfaceError> {
        let surfaces = self.surfaces.as_ref().ok_or(SurfaceError::Unavailable)?;
        let buffer = ImageSurface::create(Format::ARgb32, region.width, region.height)?;
        {
            let ctx = Context::new(&buffer)?;
            ctx.set_operator(Operator::Source);
            ctx.set_source_surface(&surfaces.paint, -region.x as f64, -region.y as f64)?;
            ctx.paint()?;
        }
        buffer.flush();
        Ok(buffer)
    }

    /// Overwrites paint-surface pixels with `source` placed at `(x, y)`; no blending.
    pub fn write_region(&self, source: &ImageSurface, x: i32, y: i32) -> Result<(), SurfaceError> {
        self.with_paint(|ctx| {
            ctx.set_operator(Operator::Source);
            ctx.rectangle(
                x as f64,
                y as f64,
                source.width() as f64,
                source.height() as f64,
            );
            ctx.set_source_surface(source, x as f64, y as f64)?;
            ctx.fill()
        })
    }

    /// Fills a paint-surface region with the background color.
    pub fn fill_background(&self, region: PixelRect) -> Result<(), SurfaceError> {
        let background = self.background;
        self.with_paint(|ctx| {
            ctx.set_operator(Operator::Source);
            background.apply(ctx);
            ctx.rectangle(
                region.x as f64,
                region.y as f64,
                region.width as f64,
                region.height as f64,
            );
            ctx.fill()
        })
    }

    /// Reads one paint-surface pixel (straight alpha). `None` outside the canvas.
    pub fn paint_pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        let surfaces = self.surfaces.as_mut().ok_or(SurfaceError::Unavailable)?;
        read_pixel(&mut surfaces.paint, x, y)
    }

    /// Reads one overlay pixel (straight alpha). `None` outside the canvas.
    pub fn overlay_pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        let surfaces = self.surfaces.as_mut().ok_or(SurfaceError::Unavailable)?;
        read_pixel(&mut surfaces.overlay, x, y)
    }

    /// Returns an immutable copy of the paint surface flattened over the background.
    pub fn snapshot(&self) -> Result<Snapshot, SurfaceError> {
        let surfaces = self.surfaces.as_ref().ok_or(SurfaceError::Unavailable)?;
        let mut flat = ImageSurface::create(
            Format::ARgb32,
            surfaces.paint.width(),
            surfaces.paint.height(),
        )?;
        {
            let ctx = Context::new(&flat)?;
            self.background.apply(&ctx);
            ctx.paint()?;
            ctx.set_source_surface(&surfaces.paint, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Snapshot::from_surface(&mut flat)
    }

    /// Drops both surfaces; the pair returns to the unavailable state.
    pub fn release(&mut self) {
        self.surfaces = None;
        self.size = CanvasSize::default();
    }
}

/// Reads a single pixel from an image surface.
///
/// The surface must not be the target of a live context.
pub fn read_pixel(surface: &mut ImageSurface, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return Ok(None);
    }
    let stride = surface.stride() as usize;
    surface.flush();
    let data = surface.data()?;
    let offset = y as usize * stride + x as usize * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    Ok(Some(Rgba::from_argb32_premultiplied(word)))
}

/// Immutable RGBA8 copy of the artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    /// Row-major straight-alpha RGBA bytes, `width * 4` per row.
    pub pixels: Vec<u8>,
}

impl Snapshot {
    /// Converts an image surface's contents into straight-alpha RGBA bytes.
    pub fn from_surface(surface: &mut ImageSurface) -> Result<Self, SurfaceError> {
        let width = surface.width().max(0) as usize;
        let height = surface.height().max(0) as usize;
        let stride = surface.stride() as usize;
        surface.flush();
        let data = surface.data()?;

        let mut pixels = Vec::with_capacity(width * height * 4);
        for row in data.chunks(stride).take(height) {
            for px in row[..width * 4].chunks_exact(4) {
                let rgba =
                    Rgba::from_argb32_premultiplied(u32::from_ne_bytes([px[0], px[1], px[2], px[3]]));
                pixels.extend_from_slice(&[rgba.r, rgba.g, rgba.b, rgba.a]);
            }
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[offset..offset + 4];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }
}
