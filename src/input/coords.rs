//! Maps absolute pointer positions into surface-local coordinates.

use super::events::{PointerEvent, SurfaceBounds};
use crate::geometry::Point;

/// Converts a raw pointer sample into surface-local coordinates.
///
/// Called for every down/move/up so the paint and overlay surfaces always
/// agree on the coordinate space, wherever the surface is placed or scrolled.
pub fn map(bounds: SurfaceBounds, event: &PointerEvent) -> Point {
    Point::new(event.x - bounds.left, event.y - bounds.top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_surface_origin() {
        let bounds = SurfaceBounds::new(12.0, 80.5, 640.0, 480.0);
        let point = map(bounds, &PointerEvent::mouse(112.0, 100.5));
        assert_eq!(point, Point::new(100.0, 20.0));
    }

    #[test]
    fn positions_outside_the_surface_go_negative() {
        let bounds = SurfaceBounds::new(50.0, 50.0, 10.0, 10.0);
        let point = map(bounds, &PointerEvent::mouse(40.0, 45.0));
        assert_eq!(point, Point::new(-10.0, -5.0));
    }
}
