use crate::config::Action;
use crate::input::events::Key;
use crate::input::tool::Tool;
use crate::notification::Notice;
use log::debug;

use super::core::log_surface_error;
use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Every other key is looked
    /// up in the keybinding map together with the held modifiers. While a
    /// pointer interaction is running only `cancel_paste` is honored.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            Key::Meta => {
                self.modifiers.meta = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };
        let Some(action) = self.find_action(&key_str) else {
            return;
        };

        if self.state.is_active() && action != Action::CancelPaste {
            debug!("Ignoring {:?} during an active interaction", action);
            return;
        }
        self.handle_action(action);
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            Key::Meta => self.modifiers.meta = false,
            _ => {}
        }
    }

    /// Look up an action for the given key and current modifiers.
    pub(crate) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| binding.matches(key_str, &self.modifiers))
            .map(|(_, action)| *action)
    }

    /// Runs a bound action.
    pub fn handle_action(&mut self, action: Action) {
        debug!("Action: {:?}", action);
        match action {
            Action::Copy => {
                self.copy();
            }
            Action::Cut => {
                self.cut();
            }
            Action::Paste => {
                self.paste();
            }
            Action::CancelPaste => {
                self.cancel_paste();
            }
            Action::ClearCanvas => self.clear(),
            Action::Snapshot => {
                self.pending_snapshot = self.snapshot();
            }
            Action::SelectPencil => self.select_tool(Tool::Pencil),
            Action::SelectBrush => self.select_tool(Tool::Brush),
            Action::SelectEraser => self.select_tool(Tool::Eraser),
            Action::SelectRectangle => self.select_tool(Tool::RectangleSelect),
            Action::SelectOval => self.select_tool(Tool::OvalSelect),
            Action::IncreaseBrushSize => self.adjust_brush_size(1),
            Action::DecreaseBrushSize => self.adjust_brush_size(-1),
        }
    }

    /// Copies the selection's pixels into the clipboard.
    ///
    /// Returns `false` when nothing was copied (no selection, or a pointer
    /// interaction is in progress).
    pub fn copy(&mut self) -> bool {
        if self.state.is_active() {
            return false;
        }
        match self.clipboard.copy(&self.surfaces) {
            Ok(true) => {
                self.notify(Notice::Copied);
                self.publish_status();
                true
            }
            Ok(false) => false,
            Err(e) => {
                log_surface_error("copy", e);
                false
            }
        }
    }

    /// Copies the selection, then fills it with the background.
    pub fn cut(&mut self) -> bool {
        if self.state.is_active() {
            return false;
        }
        match self.clipboard.cut(&self.surfaces) {
            Ok(true) => {
                self.needs_redraw = true;
                self.notify(Notice::Cut);
                self.publish_status();
                true
            }
            Ok(false) => false,
            Err(e) => {
                log_surface_error("cut", e);
                false
            }
        }
    }

    /// Enters paste mode; the next pointer down places the clipboard.
    pub fn paste(&mut self) -> bool {
        if self.state.is_active() {
            debug!("Ignoring paste during an active interaction");
            return false;
        }
        match self.clipboard.enter_paste_mode(&self.surfaces) {
            Ok(true) => {
                self.needs_redraw = true;
                self.notify(Notice::ClickToPaste);
                self.refresh_cursor();
                self.publish_status();
                true
            }
            Ok(false) => false,
            Err(e) => {
                log_surface_error("paste", e);
                false
            }
        }
    }

    /// Leaves paste mode without changing the artwork.
    pub fn cancel_paste(&mut self) -> bool {
        match self.clipboard.cancel_paste(&self.surfaces) {
            Ok(true) => {
                self.needs_redraw = true;
                self.refresh_cursor();
                self.publish_status();
                true
            }
            Ok(false) => false,
            Err(e) => {
                log_surface_error("cancel paste", e);
                false
            }
        }
    }
}
