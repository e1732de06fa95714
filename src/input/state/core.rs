//! Drawing state machine and input state management.

use crate::clipboard::Clipboard;
use crate::config::{Action, KeyBinding, KeybindingsConfig};
use crate::cursor::{CursorKey, render_cursor};
use crate::draw::color::{BLACK, Rgba, WHITE};
use crate::draw::surface::{
    CanvasSize, DEFAULT_MINIMUM_HEIGHT, Snapshot, SurfaceError, SurfacePair, layout_height,
};
use crate::draw::Color;
use crate::geometry::{Point, SelectionShape};
use crate::host::CanvasHost;
use crate::input::events::{PointerId, PointerType};
use crate::input::modifiers::{Modifiers, Platform};
use crate::input::tool::{Style, Tool, clamp_brush_size};
use crate::notification::Notice;
use crate::ui::StatusReadout;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Current interaction phase.
///
/// An interaction starts on pointer down and ends on up, leave or cancel. It
/// remembers the tool it started with, so switching tools mid-drag only takes
/// effect for the next interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No pointer is down
    Idle,
    /// A freehand tool is painting onto the paint surface
    Stroking {
        tool: Tool,
        pointer: PointerId,
        /// Where the previous segment ended
        last: Point,
    },
    /// A selection tool is dragging out a region on the overlay
    Selecting {
        shape: SelectionShape,
        pointer: PointerId,
        anchor: Point,
    },
}

impl DrawingState {
    pub fn is_active(&self) -> bool {
        !matches!(self, DrawingState::Idle)
    }

    /// Pointer that owns the interaction, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        match self {
            DrawingState::Idle => None,
            DrawingState::Stroking { pointer, .. } | DrawingState::Selecting { pointer, .. } => {
                Some(*pointer)
            }
        }
    }
}

/// Most recent input device and whether it is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSession {
    pub pointer_type: PointerType,
    pub is_down: bool,
    /// Pointer that started the current interaction
    pub active: Option<PointerId>,
}

/// Everything an engine instance is configured with.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub tool: Tool,
    pub style: Style,
    /// Fill for new, cleared and cut areas
    pub background: Color,
    /// Lower bound for the canvas height
    pub minimum_height: u32,
    pub platform: Platform,
    pub action_map: HashMap<KeyBinding, Action>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let platform = Platform::current();
        let action_map = KeybindingsConfig::default()
            .build_action_map(platform)
            .unwrap_or_else(|e| {
                warn!("Default keybindings rejected: {}", e);
                HashMap::new()
            });

        Self {
            tool: Tool::default(),
            style: Style::new(BLACK, 5),
            background: WHITE,
            minimum_height: DEFAULT_MINIMUM_HEIGHT,
            platform,
            action_map,
        }
    }
}

/// Main input state containing the whole drawing session.
///
/// Owns both pixel surfaces, the clipboard, and the tool/style/pointer state.
/// Every host event goes through one of the `on_*` handlers or a command
/// method; all of them run synchronously and never panic on surface errors.
pub struct InputState {
    /// Paint and overlay surfaces
    pub(crate) surfaces: SurfacePair,
    /// Selection, clipboard buffer and paste mode
    pub(crate) clipboard: Clipboard,
    /// Tool chosen by the user (an active interaction may still use the previous one)
    pub(crate) tool: Tool,
    /// Color and brush size
    pub(crate) style: Style,
    pub(crate) pointer: PointerSession,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current interaction phase
    pub state: DrawingState,
    /// Whether the host should recomposite the surfaces
    pub needs_redraw: bool,
    platform: Platform,
    /// Keybinding action map for efficient lookup
    pub(crate) action_map: HashMap<KeyBinding, Action>,
    /// Snapshot requested from the keyboard, waiting for the host to collect it
    pub(crate) pending_snapshot: Option<Snapshot>,
    pub(crate) host: Box<dyn CanvasHost>,
    /// Inputs of the cursor last pushed to the host
    cursor_key: Option<CursorKey>,
    viewport: CanvasSize,
    toolbar_height: u32,
    minimum_height: u32,
}

impl InputState {
    /// Creates a new engine. Surfaces are allocated by the first layout pass
    /// (see [`on_viewport_resize`](Self::on_viewport_resize)).
    pub fn new(settings: EngineSettings, host: Box<dyn CanvasHost>) -> Self {
        let mut state = Self {
            surfaces: SurfacePair::new(settings.background),
            clipboard: Clipboard::new(),
            tool: settings.tool,
            style: settings.style,
            pointer: PointerSession::default(),
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            needs_redraw: false,
            platform: settings.platform,
            action_map: settings.action_map,
            pending_snapshot: None,
            host,
            cursor_key: None,
            viewport: CanvasSize::default(),
            toolbar_height: 0,
            minimum_height: settings.minimum_height,
        };
        state.refresh_cursor();
        state.publish_status();
        state
    }

    /// Ends any interaction, releases pointer capture and drops the surfaces
    /// and clipboard. The instance can be reused after a new layout pass.
    pub fn teardown(&mut self) {
        self.end_interaction();
        self.surfaces.release();
        self.clipboard = Clipboard::new();
        self.pending_snapshot = None;
        self.cursor_key = None;
        self.modifiers.reset();
        info!("Drawing engine torn down");
        self.refresh_cursor();
        self.publish_status();
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn pointer_session(&self) -> PointerSession {
        self.pointer
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.surfaces.size()
    }

    pub fn surfaces(&self) -> &SurfacePair {
        &self.surfaces
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn is_paste_mode(&self) -> bool {
        self.clipboard.is_paste_mode()
    }

    /// Copy/cut enabled predicate.
    pub fn can_modify_selection(&self) -> bool {
        self.clipboard.can_modify_selection()
    }

    /// Paste enabled predicate.
    pub fn has_clipboard(&self) -> bool {
        self.clipboard.has_clipboard()
    }

    pub fn paint_pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        self.surfaces.paint_pixel(x, y)
    }

    pub fn overlay_pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        self.surfaces.overlay_pixel(x, y)
    }

    /// Builds the status readout for the current state.
    pub fn status(&self) -> StatusReadout {
        let mut status = StatusReadout::build(
            self.tool,
            self.style.color,
            self.surfaces.background(),
            self.style.brush_size,
            self.surfaces.size(),
            self.pointer.pointer_type,
        );
        status.drawing = self.state.is_active();
        status.paste_mode = self.clipboard.is_paste_mode();
        status.can_modify_selection = self.clipboard.can_modify_selection();
        status.can_paste = self.clipboard.has_clipboard();
        status
    }

    // ------------------------------------------------------------------
    // Tool and style commands
    // ------------------------------------------------------------------

    /// Switches the active tool. An interaction in progress keeps its own tool.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        debug!("Tool: {} -> {}", self.tool.label(), tool.label());
        self.tool = tool;
        self.refresh_cursor();
        self.publish_status();
    }

    /// Sets the stroke color from a `#RRGGBB`/`#RGB` string or a color name.
    ///
    /// Returns `false` (and keeps the old color) when the string does not parse.
    pub fn set_color(&mut self, spec: &str) -> bool {
        let Some(color) = Color::from_hex(spec).or_else(|| crate::util::name_to_color(spec)) else {
            warn!("Ignoring invalid color '{}'", spec);
            return false;
        };
        self.set_color_value(color);
        true
    }

    pub fn set_color_value(&mut self, color: Color) {
        if self.style.color == color {
            return;
        }
        self.style.color = color;
        self.refresh_cursor();
        self.publish_status();
    }

    /// Sets the brush size, clamped to 1-50.
    pub fn set_brush_size(&mut self, size: i64) {
        let size = clamp_brush_size(size);
        if self.style.brush_size == size {
            return;
        }
        self.style.brush_size = size;
        self.refresh_cursor();
        self.publish_status();
    }

    pub fn adjust_brush_size(&mut self, delta: i64) {
        self.set_brush_size(self.style.brush_size as i64 + delta);
    }

    // ------------------------------------------------------------------
    // Canvas commands
    // ------------------------------------------------------------------

    /// Fills the paint surface with the background and drops the selection.
    ///
    /// Paste mode and the clipboard buffer survive a clear.
    pub fn clear(&mut self) {
        if self.state.is_active() {
            debug!("Ignoring clear during an active interaction");
            return;
        }
        match self.surfaces.clear() {
            Ok(()) => {
                self.clipboard.on_canvas_cleared();
                self.needs_redraw = true;
                info!("Canvas cleared");
                self.publish_status();
            }
            Err(e) => log_surface_error("clear", e),
        }
    }

    /// Flattened copy of the artwork, `None` before the first layout pass.
    pub fn snapshot(&self) -> Option<Snapshot> {
        match self.surfaces.snapshot() {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log_surface_error("snapshot", e);
                None
            }
        }
    }

    /// Takes the snapshot produced by the snapshot keybinding, if any.
    pub fn take_pending_snapshot(&mut self) -> Option<Snapshot> {
        self.pending_snapshot.take()
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// The viewport changed size. Canvas width follows it; height is what the
    /// toolbar leaves over, but never less than the configured minimum.
    pub fn on_viewport_resize(&mut self, width: u32, height: u32) {
        self.viewport = CanvasSize::new(width, height);
        self.apply_layout();
    }

    /// The toolbar above the canvas changed height.
    pub fn on_toolbar_resize(&mut self, height: u32) {
        self.toolbar_height = height;
        self.apply_layout();
    }

    fn apply_layout(&mut self) {
        if self.viewport.width == 0 {
            debug!("Viewport not laid out yet");
            return;
        }
        let height = layout_height(self.viewport.height, self.toolbar_height, self.minimum_height);

        match self.surfaces.resize(self.viewport.width, height) {
            Ok(true) => {
                if let Err(e) = self.clipboard.redraw_overlay(&self.surfaces) {
                    log_surface_error("overlay redraw after resize", e);
                }
                self.needs_redraw = true;
                self.publish_status();
            }
            Ok(false) => {}
            Err(e) => log_surface_error("resize", e),
        }
    }

    // ------------------------------------------------------------------
    // Host plumbing
    // ------------------------------------------------------------------

    pub(crate) fn notify(&mut self, notice: Notice) {
        info!("{}", notice);
        self.host.notify(&notice);
    }

    pub(crate) fn publish_status(&mut self) {
        let status = self.status();
        self.host.status_changed(&status);
    }

    /// Regenerates the cursor if anything it depends on changed.
    pub(crate) fn refresh_cursor(&mut self) {
        let key = CursorKey::new(
            self.tool,
            &self.style,
            self.surfaces.background(),
            self.clipboard.is_paste_mode(),
        );
        if self.cursor_key == Some(key) {
            return;
        }

        match render_cursor(
            self.tool,
            &self.style,
            self.surfaces.background(),
            self.clipboard.is_paste_mode(),
        ) {
            Ok(cursor) => {
                self.host.cursor_changed(&cursor);
                self.cursor_key = Some(key);
            }
            Err(e) => warn!("Failed to render cursor: {}", e),
        }
    }

    pub(crate) fn acquire_pointer(&mut self, pointer: PointerId) {
        if let Err(e) = self.host.capture_pointer(pointer) {
            debug!("Pointer capture failed for {}: {}", pointer, e);
        }
    }

    /// Returns to idle, releasing capture of the pointer that owned the interaction.
    pub(crate) fn end_interaction(&mut self) {
        if let Some(pointer) = self.pointer.active.take() {
            if let Err(e) = self.host.release_pointer(pointer) {
                debug!("Pointer release failed for {}: {}", pointer, e);
            }
        }
        self.pointer.is_down = false;
        self.state = DrawingState::Idle;
    }
}

/// Logs a surface failure; a missing surface is expected before layout.
pub(crate) fn log_surface_error(operation: &str, err: SurfaceError) {
    match err {
        SurfaceError::Unavailable => debug!("Skipping {}: surfaces unavailable", operation),
        e => warn!("{} failed: {}", operation, e),
    }
}
