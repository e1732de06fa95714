use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

const COPY_PASTE_SCRIPT: &str = r##"{
    "events": [
        { "type": "resize", "width": 200, "height": 200 },
        { "type": "set_color", "color": "#FF0000" },
        { "type": "set_brush_size", "size": 10 },
        { "type": "select_tool", "tool": "pencil" },
        { "type": "pointer_down", "x": 20, "y": 20 },
        { "type": "pointer_move", "x": 60, "y": 20 },
        { "type": "pointer_up", "x": 60, "y": 20 },
        { "type": "select_tool", "tool": "rectangle-select" },
        { "type": "pointer_down", "x": 10, "y": 10 },
        { "type": "pointer_move", "x": 70, "y": 30 },
        { "type": "pointer_up", "x": 70, "y": 30 },
        { "type": "copy" },
        { "type": "paste" },
        { "type": "pointer_move", "x": 100, "y": 120 },
        { "type": "pointer_down", "x": 100, "y": 120 },
        { "type": "pointer_up", "x": 100, "y": 120 }
    ]
}"##;

fn write_script(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn help_prints_about() {
    let home = TempDir::new().unwrap();
    sketchpad_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Raster drawing engine with a selection clipboard",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let home = TempDir::new().unwrap();
    sketchpad_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchpad --replay <SCRIPT>"));
}

#[test]
fn replay_reports_notices_status_and_pixels() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, COPY_PASTE_SCRIPT);

    sketchpad_cmd(&home)
        .arg("--replay")
        .arg(&script)
        .args(["--probe", "40,20", "--probe", "100,120", "--probe", "5,150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notice: Copied to clipboard"))
        .stdout(predicate::str::contains("notice: Click to paste"))
        .stdout(predicate::str::contains("notice: Pasted successfully"))
        .stdout(predicate::str::contains("200×200"))
        .stdout(predicate::str::contains("Ready"))
        .stdout(predicate::str::contains("pixel 40,20: #FF0000FF"))
        .stdout(predicate::str::contains("pixel 100,120: #FF0000FF"))
        .stdout(predicate::str::contains("pixel 5,150: #FFFFFFFF"));
}

#[test]
fn probe_outside_canvas_is_reported() {
    let home = TempDir::new().unwrap();
    let script = write_script(
        &home,
        r#"{ "events": [ { "type": "resize", "width": 50, "height": 50 } ] }"#,
    );

    sketchpad_cmd(&home)
        .arg("--replay")
        .arg(&script)
        .args(["--probe", "500,500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixel 500,500: outside canvas"));
}

#[test]
fn missing_script_fails() {
    let home = TempDir::new().unwrap();
    sketchpad_cmd(&home)
        .args(["--replay", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read replay script"));
}

#[test]
fn malformed_probe_is_rejected() {
    let home = TempDir::new().unwrap();
    sketchpad_cmd(&home)
        .args(["--replay", "script.json", "--probe", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}

#[test]
fn explicit_config_sets_background() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[canvas]\nbackground_color = \"#000000\"\n").unwrap();
    let script = write_script(
        &home,
        r#"{ "events": [ { "type": "resize", "width": 40, "height": 40 } ] }"#,
    );

    sketchpad_cmd(&home)
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&script)
        .args(["--probe", "3,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixel 3,3: #000000FF"));
}

#[test]
fn invalid_keybinding_config_fails() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("sketchpad");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[keybindings]\ncopy = [\"Ctrl+Shift\"]\n").unwrap();
    let script = write_script(&home, r#"{ "events": [] }"#);

    sketchpad_cmd(&home)
        .arg("--replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid [keybindings] section"));
}
