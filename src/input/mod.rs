//! Input handling and tool state machine.
//!
//! This module translates host pointer and keyboard events into drawing
//! operations. It maintains the current tool, the style (color, brush size),
//! the pointer session and the interaction phase (idle, stroking, selecting).

pub mod coords;
pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, PointerEvent, PointerId, PointerType, SurfaceBounds};
pub use modifiers::{Modifiers, Platform};
pub use state::{DrawingState, EngineSettings, InputState, PointerSession};
pub use tool::{Style, Tool};
