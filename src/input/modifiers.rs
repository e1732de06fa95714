//! Keyboard modifier state tracking.

/// Host platform family, used to pick the primary shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Command is the primary modifier
    MacOs,
    /// Control is the primary modifier
    Other,
}

impl Platform {
    /// Platform the binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt, Meta) are currently pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt/Option key pressed
    pub alt: bool,
    /// Meta/Command key pressed
    pub meta: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases every modifier, e.g. after focus loss swallowed the key-ups.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
