use sketchpad::draw::Rgba;
use sketchpad::input::{Key, Platform, PointerEvent, SurfaceBounds, Tool};
use sketchpad::replay::Script;
use sketchpad::{Config, InputState, Notice, RecordingHost};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

const BOUNDS: SurfaceBounds = SurfaceBounds::new(0.0, 0.0, 120.0, 120.0);
const RED: Rgba = Rgba::new(255, 0, 0, 255);
const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

fn engine_from_toml(toml: &str, platform: Platform) -> (InputState, Rc<RefCell<RecordingHost>>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, toml).unwrap();

    let config = Config::load_from(&path).unwrap();
    let settings = config.engine_settings(platform).unwrap();
    let host = Rc::new(RefCell::new(RecordingHost::default()));
    let mut state = InputState::new(settings, Box::new(host.clone()));
    state.on_viewport_resize(120, 120);
    (state, host)
}

fn drag(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.on_pointer_down(BOUNDS, &PointerEvent::mouse(from.0, from.1));
    state.on_pointer_move(BOUNDS, &PointerEvent::mouse(to.0, to.1));
    state.on_pointer_up(BOUNDS, &PointerEvent::mouse(to.0, to.1));
}

fn chord(state: &mut InputState, modifier: Key, c: char) {
    state.on_key_press(modifier);
    state.on_key_press(Key::Char(c));
    state.on_key_release(Key::Char(c));
    state.on_key_release(modifier);
}

fn artwork(state: &InputState, x: u32, y: u32) -> Rgba {
    state.snapshot().unwrap().pixel(x, y).unwrap()
}

const RED_PENCIL: &str = r#"
[drawing]
default_tool = "pencil"
default_color = "red"
default_brush_size = 8
"#;

#[test]
fn configured_shortcuts_follow_platform_primary_modifier() {
    let (mut state, host) = engine_from_toml(RED_PENCIL, Platform::MacOs);
    drag(&mut state, (10.0, 20.0), (30.0, 20.0));
    state.select_tool(Tool::RectangleSelect);
    drag(&mut state, (5.0, 10.0), (35.0, 30.0));

    // Control is not the primary modifier on macOS.
    chord(&mut state, Key::Ctrl, 'c');
    assert!(!state.has_clipboard());

    chord(&mut state, Key::Meta, 'c');
    assert!(state.has_clipboard());
    chord(&mut state, Key::Meta, 'v');
    assert!(state.is_paste_mode());

    state.on_pointer_down(BOUNDS, &PointerEvent::mouse(80.0, 90.0));
    assert!(!state.is_paste_mode());
    // Region is 30x20, so its centre (20, 20) lands on (80, 90).
    assert_eq!(artwork(&state, 80, 90), RED);
    assert_eq!(artwork(&state, 80, 100), WHITE);

    assert_eq!(
        host.borrow().notices,
        vec![Notice::Copied, Notice::ClickToPaste, Notice::Pasted]
    );
}

#[test]
fn rebound_cancel_key_leaves_artwork_untouched() {
    let (mut state, host) = engine_from_toml(
        "[keybindings]\ncancel_paste = [\"Backspace\"]\n",
        Platform::Other,
    );
    state.set_color("#FF0000");
    drag(&mut state, (10.0, 10.0), (50.0, 10.0));
    let before = state.snapshot().unwrap();

    state.select_tool(Tool::OvalSelect);
    drag(&mut state, (0.0, 0.0), (60.0, 20.0));
    assert!(state.copy());
    assert!(state.paste());

    state.on_pointer_move(BOUNDS, &PointerEvent::mouse(60.0, 60.0));
    state.on_key_press(Key::Escape);
    assert!(state.is_paste_mode());
    state.on_key_press(Key::Backspace);
    assert!(!state.is_paste_mode());

    assert_eq!(state.snapshot().unwrap(), before);
    assert_eq!(
        host.borrow().messages(),
        vec!["Copied to clipboard", "Click to paste"]
    );
}

#[test]
fn cut_survives_a_resize_and_pastes_into_the_new_area() {
    let (mut state, _host) = engine_from_toml(RED_PENCIL, Platform::Other);
    drag(&mut state, (20.0, 20.0), (40.0, 20.0));
    state.select_tool(Tool::RectangleSelect);
    drag(&mut state, (10.0, 10.0), (50.0, 30.0));
    assert!(state.cut());
    assert_eq!(artwork(&state, 30, 20), WHITE);

    state.on_viewport_resize(300, 250);
    let size = state.canvas_size();
    assert_eq!((size.width, size.height), (300, 250));
    assert!(state.has_clipboard());

    assert!(state.paste());
    let wide = SurfaceBounds::new(0.0, 0.0, 300.0, 250.0);
    state.on_pointer_down(wide, &PointerEvent::mouse(250.0, 200.0));
    assert_eq!(artwork(&state, 250, 200), RED);
    assert_eq!(artwork(&state, 30, 20), WHITE);
}

#[test]
fn replayed_script_matches_direct_calls() {
    let script = Script::parse(
        r#"{
            "origin": { "x": 100, "y": 50 },
            "events": [
                { "type": "resize", "width": 120, "height": 120 },
                { "type": "set_color", "color": "red" },
                { "type": "set_brush_size", "size": 6 },
                { "type": "pointer_down", "x": 110, "y": 60 },
                { "type": "pointer_move", "x": 150, "y": 60 },
                { "type": "pointer_up", "x": 150, "y": 60 }
            ]
        }"#,
    )
    .unwrap();

    let host = Rc::new(RefCell::new(RecordingHost::default()));
    let settings = Config::default().engine_settings(Platform::Other).unwrap();
    let mut replayed = InputState::new(settings, Box::new(host));
    script.run(&mut replayed);

    let (mut direct, _host) = engine_from_toml("", Platform::Other);
    direct.set_color("red");
    direct.set_brush_size(6);
    drag(&mut direct, (10.0, 10.0), (50.0, 10.0));

    assert_eq!(replayed.snapshot(), direct.snapshot());
    assert_eq!(artwork(&replayed, 30, 10), RED);
}

#[test]
fn teardown_then_relayout_starts_fresh() {
    let (mut state, _host) = engine_from_toml(RED_PENCIL, Platform::Other);
    drag(&mut state, (10.0, 10.0), (50.0, 10.0));
    state.select_tool(Tool::RectangleSelect);
    drag(&mut state, (0.0, 0.0), (60.0, 20.0));
    assert!(state.copy());

    state.teardown();
    assert!(state.snapshot().is_none());
    assert!(!state.has_clipboard());
    assert!(state.clipboard().selection().is_none());

    state.on_viewport_resize(120, 120);
    assert_eq!(artwork(&state, 30, 10), WHITE);
    assert!(!state.paste());
}
