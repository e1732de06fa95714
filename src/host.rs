//! Bridge between the drawing engine and whatever embeds it.
//!
//! The engine never talks to a window system directly. Everything it needs
//! from the outside world, and everything it reports back, goes through a
//! [`CanvasHost`] handed to [`InputState::new`](crate::input::InputState::new).

use crate::cursor::CursorPreview;
use crate::input::events::PointerId;
use crate::notification::Notice;
use crate::ui::StatusReadout;
use thiserror::Error;

/// Pointer capture could not be acquired or released.
#[derive(Debug, Error)]
pub enum PointerCaptureError {
    #[error("pointer {0} is not known to the host")]
    UnknownPointer(PointerId),
    #[error("pointer capture unsupported: {0}")]
    Unsupported(String),
}

/// Callbacks the engine invokes on its host. Every method defaults to a no-op.
pub trait CanvasHost {
    /// A short-lived message for the user; dismiss timing is up to the host.
    fn notify(&mut self, _notice: &Notice) {}

    /// Called after every transition that changes what a status bar would show.
    fn status_changed(&mut self, _status: &StatusReadout) {}

    /// Called when the pointer cursor should change.
    fn cursor_changed(&mut self, _cursor: &CursorPreview) {}

    /// Route all further events of `pointer` to the canvas until released.
    fn capture_pointer(&mut self, _pointer: PointerId) -> Result<(), PointerCaptureError> {
        Ok(())
    }

    fn release_pointer(&mut self, _pointer: PointerId) -> Result<(), PointerCaptureError> {
        Ok(())
    }
}

/// Host that records everything it is told.
///
/// Used by the replay driver and by tests to observe the engine.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub notices: Vec<Notice>,
    pub statuses: Vec<StatusReadout>,
    pub cursors: Vec<CursorPreview>,
    pub captured: Vec<PointerId>,
    pub released: Vec<PointerId>,
    /// When set, capture requests fail with `Unsupported`
    pub refuse_capture: bool,
}

impl RecordingHost {
    pub fn last_status(&self) -> Option<&StatusReadout> {
        self.statuses.last()
    }

    pub fn last_cursor(&self) -> Option<&CursorPreview> {
        self.cursors.last()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.notices.iter().map(Notice::message).collect()
    }
}

impl CanvasHost for RecordingHost {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(*notice);
    }

    fn status_changed(&mut self, status: &StatusReadout) {
        self.statuses.push(status.clone());
    }

    fn cursor_changed(&mut self, cursor: &CursorPreview) {
        self.cursors.push(cursor.clone());
    }

    fn capture_pointer(&mut self, pointer: PointerId) -> Result<(), PointerCaptureError> {
        if self.refuse_capture {
            return Err(PointerCaptureError::Unsupported(
                "recording host refuses capture".to_string(),
            ));
        }
        self.captured.push(pointer);
        Ok(())
    }

    fn release_pointer(&mut self, pointer: PointerId) -> Result<(), PointerCaptureError> {
        if self.refuse_capture {
            return Err(PointerCaptureError::UnknownPointer(pointer));
        }
        self.released.push(pointer);
        Ok(())
    }
}

/// Shared handle so a test can keep inspecting a host the engine owns.
impl<H: CanvasHost> CanvasHost for std::rc::Rc<std::cell::RefCell<H>> {
    fn notify(&mut self, notice: &Notice) {
        self.borrow_mut().notify(notice);
    }

    fn status_changed(&mut self, status: &StatusReadout) {
        self.borrow_mut().status_changed(status);
    }

    fn cursor_changed(&mut self, cursor: &CursorPreview) {
        self.borrow_mut().cursor_changed(cursor);
    }

    fn capture_pointer(&mut self, pointer: PointerId) -> Result<(), PointerCaptureError> {
        self.borrow_mut().capture_pointer(pointer)
    }

    fn release_pointer(&mut self, pointer: PointerId) -> Result<(), PointerCaptureError> {
        self.borrow_mut().release_pointer(pointer)
    }
}
