//! Selection geometry: points, signed drag rectangles and pixel-grid snapping.
//!
//! Rectangles produced while dragging carry the drag direction in the sign of
//! their width/height. Anything stored as a selection goes through
//! [`Rectangle::normalize`] first.

use serde::{Deserialize, Serialize};

/// Surface-local coordinates of a single input sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle anchored at `(x, y)` whose width/height may be negative mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the live drag rectangle from the anchor to the current pointer.
    ///
    /// With `constrain` set, the rectangle becomes a square of side
    /// `max(|dx|, |dy|)` that keeps the direction of the drag on each axis.
    pub fn from_drag(anchor: Point, current: Point, constrain: bool) -> Self {
        let dx = current.x - anchor.x;
        let dy = current.y - anchor.y;
        if constrain {
            let (width, height) = constrain_to_square(dx, dy);
            Self::new(anchor.x, anchor.y, width, height)
        } else {
            Self::new(anchor.x, anchor.y, dx, dy)
        }
    }

    /// Returns the canonical form: `(x, y)` is the top-left corner and the
    /// size is non-negative. Idempotent.
    pub fn normalize(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle, valid for either orientation.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Snaps a rectangle onto whole pixels by rounding both edges.
    ///
    /// Edges are clamped to `i32`; a span wider than `i32::MAX` saturates.
    /// Returns `None` when nothing remains after snapping.
    pub fn to_pixel_rect(&self) -> Option<PixelRect> {
        let norm = self.normalize();
        // Float-to-int `as` casts saturate and map NaN to 0.
        let edge = |v: f64| v.round() as i32 as i64;
        PixelRect::from_edges(
            edge(norm.x),
            edge(norm.y),
            edge(norm.x + norm.width),
            edge(norm.y + norm.height),
        )
    }
}

/// Outline of a selection region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionShape {
    Rectangle,
    Oval,
}

/// Applies the square/circle constraint to a signed drag delta.
///
/// Each axis keeps its sign; a zero delta counts as positive so the result
/// never collapses onto the anchor.
pub fn constrain_to_square(dx: f64, dy: f64) -> (f64, f64) {
    let size = dx.abs().max(dy.abs());
    let sign_x = if dx < 0.0 { -1.0 } else { 1.0 };
    let sign_y = if dy < 0.0 { -1.0 } else { 1.0 };
    (size * sign_x, size * sign_y)
}

/// Axis-aligned integer rectangle used for pixel transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max edges (inclusive min, exclusive max).
    ///
    /// Edge arithmetic runs in `i64`; extents beyond `i32::MAX` saturate.
    fn from_edges(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Option<Self> {
        let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        Self::new(
            clamp(min_x),
            clamp(min_y),
            clamp(max_x - min_x),
            clamp(max_y - min_y),
        )
    }

    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Overlap of two rectangles, `None` if they do not touch.
    pub fn intersect(&self, other: &PixelRect) -> Option<PixelRect> {
        Self::from_edges(
            self.x.max(other.x) as i64,
            self.y.max(other.y) as i64,
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_flips_negative_extents() {
        let rect = Rectangle::new(25.0, 15.0, -20.0, -10.0).normalize();
        assert_eq!(rect, Rectangle::new(5.0, 5.0, 20.0, 10.0));
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            Rectangle::new(0.0, 0.0, 10.0, 10.0),
            Rectangle::new(10.0, 3.0, -4.5, 8.0),
            Rectangle::new(-2.0, -2.0, 3.0, -7.25),
            Rectangle::new(1.0, 1.0, 0.0, -0.0),
        ];
        for rect in samples {
            let once = rect.normalize();
            assert!(once.width >= 0.0 && once.height >= 0.0);
            assert_eq!(once.normalize(), once);
        }
    }

    #[test]
    fn shift_constrain_takes_larger_axis() {
        let rect = Rectangle::from_drag(Point::new(0.0, 0.0), Point::new(30.0, 10.0), true);
        assert_eq!(rect.width, 30.0);
        assert_eq!(rect.height, 30.0);
    }

    #[test]
    fn shift_constrain_keeps_drag_direction() {
        let rect = Rectangle::from_drag(Point::new(50.0, 50.0), Point::new(40.0, 70.0), true);
        assert_eq!((rect.width, rect.height), (-20.0, 20.0));
    }

    #[test]
    fn shift_constrain_treats_zero_as_positive() {
        assert_eq!(constrain_to_square(0.0, -12.0), (12.0, -12.0));
        assert_eq!(constrain_to_square(8.0, 0.0), (8.0, 8.0));
        assert_eq!(constrain_to_square(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn pixel_rect_rounds_edges() {
        let px = Rectangle::new(5.4, 5.6, 19.8, 10.0).to_pixel_rect().unwrap();
        assert_eq!(px, PixelRect::new(5, 6, 20, 10).unwrap());
        assert!(Rectangle::new(3.0, 3.0, 0.2, 9.0).to_pixel_rect().is_none());
    }

    #[test]
    fn pixel_rect_saturates_huge_spans() {
        let huge = Rectangle::new(-2e9, -2e9, 4e9, 4e9).to_pixel_rect().unwrap();
        assert_eq!((huge.x, huge.y), (-2_000_000_000, -2_000_000_000));
        assert_eq!((huge.width, huge.height), (i32::MAX, i32::MAX));

        let canvas = PixelRect::new(0, 0, 200, 100).unwrap();
        assert_eq!(huge.intersect(&canvas), Some(canvas));

        let far = Rectangle::new(1e12, 0.0, 5.0, 5.0).to_pixel_rect();
        assert!(far.is_none());
    }

    #[test]
    fn pixel_rect_intersection() {
        let canvas = PixelRect::new(0, 0, 100, 50).unwrap();
        let region = PixelRect::new(90, -10, 20, 30).unwrap();
        assert_eq!(canvas.intersect(&region), PixelRect::new(90, 0, 10, 20));
        let outside = PixelRect::new(200, 0, 5, 5).unwrap();
        assert!(canvas.intersect(&outside).is_none());
    }
}
