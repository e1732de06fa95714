//! Pixel surfaces and rendering primitives (Cairo-based).
//!
//! This module defines the drawing layer of the engine:
//! - [`Color`] / [`Rgba`]: floating-point colors and 8-bit pixel read-back
//! - [`SurfacePair`]: the paint and overlay surfaces with content-preserving resize
//! - Rendering functions for strokes, marquees and paste previews

pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, Rgba};
pub use render::{Blend, StrokeStyle, render_paste_preview, render_selection_outline, stroke_segment};
pub use surface::{CanvasSize, Snapshot, SurfaceError, SurfacePair, layout_height};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, OUTLINE, RED, WHITE};
