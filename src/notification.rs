//! User-facing notifications emitted by clipboard operations.

use std::fmt;

/// A short-lived status message for the presentation layer.
///
/// Each notice is emitted exactly once per event; showing and dismissing it
/// (see `ui.notification_duration_ms`) is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Copied,
    Cut,
    /// Paste mode entered, waiting for a click
    ClickToPaste,
    Pasted,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Copied => "Copied to clipboard",
            Notice::Cut => "Cut to clipboard",
            Notice::ClickToPaste => "Click to paste",
            Notice::Pasted => "Pasted successfully",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
