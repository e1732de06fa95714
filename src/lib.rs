//! Raster drawing engine with a selection clipboard.
//!
//! The engine owns two pixel surfaces (artwork and a transparent overlay for
//! marquees and paste previews), a tool state machine fed by host pointer and
//! key events, and a clipboard that copies, cuts and pastes rectangular
//! regions. Everything user-visible flows back through a [`CanvasHost`].

pub mod clipboard;
pub mod config;
pub mod cursor;
pub mod draw;
pub mod geometry;
pub mod host;
pub mod input;
pub mod notification;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
pub use host::{CanvasHost, RecordingHost};
pub use input::{EngineSettings, InputState};
pub use notification::Notice;
pub use ui::StatusReadout;
