//! In-process clipboard: selection, captured pixels and paste placement.
//!
//! The buffer lives in memory only. It is overwritten by every copy or cut
//! and outlives the selection it came from.

pub mod manager;
pub mod types;

pub use manager::Clipboard;
pub use types::{ClipboardBuffer, PastePreview, Selection};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, Rgba, WHITE};
    use crate::draw::surface::SurfacePair;
    use crate::geometry::{Point, Rectangle, SelectionShape};

    const WHITE_PX: Rgba = Rgba::new(255, 255, 255, 255);
    const RED_PX: Rgba = Rgba::new(255, 0, 0, 255);

    fn canvas() -> SurfacePair {
        let mut pair = SurfacePair::new(WHITE);
        pair.resize(100, 100).unwrap();
        pair
    }

    fn fill(pair: &SurfacePair, x: f64, y: f64, w: f64, h: f64, color: crate::draw::Color) {
        pair.with_paint(|ctx| {
            color.apply(ctx);
            ctx.rectangle(x, y, w, h);
            ctx.fill()
        })
        .unwrap();
    }

    fn select(clipboard: &mut Clipboard, pair: &SurfacePair, rect: Rectangle) {
        clipboard
            .set_selection(pair, Selection::new(rect, SelectionShape::Rectangle))
            .unwrap();
    }

    #[test]
    fn copy_without_selection_is_a_noop() {
        let pair = canvas();
        let mut clipboard = Clipboard::new();
        assert!(!clipboard.copy(&pair).unwrap());
        assert!(!clipboard.cut(&pair).unwrap());
        assert!(!clipboard.has_clipboard());
    }

    #[test]
    fn selection_is_stored_normalized() {
        let pair = canvas();
        let mut clipboard = Clipboard::new();
        select(&mut clipboard, &pair, Rectangle::new(30.0, 20.0, -10.0, -5.0));
        assert_eq!(
            clipboard.selection().unwrap().region(),
            Rectangle::new(20.0, 15.0, 10.0, 5.0)
        );
        assert!(clipboard.can_modify_selection());
    }

    #[test]
    fn copy_then_paste_reproduces_pixels() {
        let mut pair = canvas();
        fill(&pair, 10.0, 10.0, 10.0, 10.0, RED);
        let mut clipboard = Clipboard::new();
        select(&mut clipboard, &pair, Rectangle::new(10.0, 10.0, 10.0, 10.0));

        assert!(clipboard.copy(&pair).unwrap());
        assert!(clipboard.selection().is_some());
        assert!(clipboard.enter_paste_mode(&pair).unwrap());
        assert!(clipboard.selection().is_none());
        assert!(clipboard.commit_paste(&pair, Point::new(70.0, 70.0)).unwrap());
        assert!(!clipboard.is_paste_mode());

        // Centered on (70, 70): covers 65..75 on both axes.
        assert_eq!(pair.paint_pixel(65, 65).unwrap(), Some(RED_PX));
        assert_eq!(pair.paint_pixel(74, 74).unwrap(), Some(RED_PX));
        assert_eq!(pair.paint_pixel(75, 75).unwrap(), Some(WHITE_PX));
        assert_eq!(pair.paint_pixel(64, 70).unwrap(), Some(WHITE_PX));
        // Source untouched by copy.
        assert_eq!(pair.paint_pixel(15, 15).unwrap(), Some(RED_PX));
    }

    #[test]
    fn paste_overwrites_instead_of_blending() {
        let mut pair = canvas();
        let mut clipboard = Clipboard::new();
        // Copy a plain white patch, paste it over blue.
        fill(&pair, 50.0, 50.0, 20.0, 20.0, BLUE);
        select(&mut clipboard, &pair, Rectangle::new(0.0, 0.0, 4.0, 4.0));
        clipboard.copy(&pair).unwrap();
        clipboard.enter_paste_mode(&pair).unwrap();
        clipboard.commit_paste(&pair, Point::new(60.0, 60.0)).unwrap();
        assert_eq!(pair.paint_pixel(59, 59).unwrap(), Some(WHITE_PX));
    }

    #[test]
    fn cut_clears_region_and_selection() {
        let mut pair = canvas();
        fill(&pair, 0.0, 0.0, 100.0, 100.0, RED);
        let mut clipboard = Clipboard::new();
        select(&mut clipboard, &pair, Rectangle::new(10.0, 10.0, 20.0, 20.0));

        assert!(clipboard.cut(&pair).unwrap());
        assert!(clipboard.selection().is_none());
        assert_eq!(pair.paint_pixel(20, 20).unwrap(), Some(WHITE_PX));
        assert_eq!(pair.paint_pixel(31, 31).unwrap(), Some(RED_PX));
        assert_eq!(pair.overlay_pixel(10, 10).unwrap(), Some(Rgba::TRANSPARENT));

        let buffer = clipboard.buffer_mut().unwrap();
        assert_eq!((buffer.width(), buffer.height()), (20, 20));
        assert_eq!(buffer.pixel(0, 0).unwrap(), Some(RED_PX));
    }

    #[test]
    fn selection_beyond_canvas_is_clipped() {
        let pair = canvas();
        let mut clipboard = Clipboard::new();
        select(&mut clipboard, &pair, Rectangle::new(90.0, 90.0, 30.0, 30.0));
        clipboard.copy(&pair).unwrap();
        let buffer = clipboard.buffer().unwrap();
        assert_eq!((buffer.width(), buffer.height()), (10, 10));
    }

    #[test]
    fn paste_requires_buffer_and_mode() {
        let pair = canvas();
        let mut clipboard = Clipboard::new();
        assert!(!clipboard.enter_paste_mode(&pair).unwrap());
        assert!(!clipboard.update_paste_preview(&pair, Point::new(1.0, 1.0)).unwrap());
        assert!(!clipboard.commit_paste(&pair, Point::new(1.0, 1.0)).unwrap());
        assert!(!clipboard.cancel_paste(&pair).unwrap());
    }

    #[test]
    fn preview_draws_translucent_image_and_cancel_leaves_paint() {
        let mut pair = canvas();
        fill(&pair, 0.0, 0.0, 10.0, 10.0, RED);
        let mut clipboard = Clipboard::new();
        select(&mut clipboard, &pair, Rectangle::new(0.0, 0.0, 10.0, 10.0));
        clipboard.copy(&pair).unwrap();
        clipboard.enter_paste_mode(&pair).unwrap();

        assert!(clipboard.update_paste_preview(&pair, Point::new(50.0, 50.0)).unwrap());
        let preview = pair.overlay_pixel(50, 50).unwrap().unwrap();
        assert_eq!(preview.r, 255);
        assert!((170..=190).contains(&preview.a), "alpha was {}", preview.a);

        assert!(clipboard.cancel_paste(&pair).unwrap());
        assert_eq!(pair.overlay_pixel(50, 50).unwrap(), Some(Rgba::TRANSPARENT));
        assert_eq!(pair.paint_pixel(50, 50).unwrap(), Some(WHITE_PX));
        assert!(clipboard.has_clipboard());
    }

    #[test]
    fn odd_sized_buffer_centers_with_floor() {
        let pair = canvas();
        let mut clipboard = Clipboard::new();
        select(&mut clipboard, &pair, Rectangle::new(0.0, 0.0, 5.0, 3.0));
        clipboard.copy(&pair).unwrap();
        let origin = clipboard
            .buffer()
            .unwrap()
            .origin_centered_at(Point::new(10.0, 10.0));
        assert_eq!(origin, (7, 8));
    }
}
