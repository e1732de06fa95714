mod actions;
mod core;
mod pointer;

pub use core::{DrawingState, EngineSettings, InputState, PointerSession};
