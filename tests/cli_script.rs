use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_script(name: &str, contents: &str) -> std::path::PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("scribe3d_{name}_{timestamp}.json"));
    std::fs::write(&path, contents).expect("write script");
    path
}

#[test]
fn script_mode_prints_saved_entries() {
    let bin = env!("CARGO_BIN_EXE_scribe3d");
    let output = Command::new(bin)
        .args([
            "--config",
            "config/editor.toml",
            "--script",
            "scripts/erase_and_save.json",
            "--print-saved",
        ])
        .env("RUST_LOG", "off")
        .output()
        .expect("run scribe3d");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {stdout}");

    let entry: serde_json::Value = serde_json::from_str(lines[0]).expect("json line");
    assert_eq!(entry["text"], "Hello World?");
    assert_eq!(entry["meta"]["font"], "System Default");
    assert_eq!(entry["meta"]["mode"], "3D");
    assert_eq!(entry["meta"]["color"], "#00ffff");
    assert_eq!(entry["meta"]["fontSize"], 1.1);
}

#[test]
fn initial_flag_overrides_config() {
    let script = temp_script(
        "initial",
        r#"{"steps":[
            {"action":"click","control":"edit_toggle"},
            {"action":"click","control":"save"}
        ]}"#,
    );
    let bin = env!("CARGO_BIN_EXE_scribe3d");
    let output = Command::new(bin)
        .args(["--initial", "draft", "--print-saved", "--script"])
        .arg(&script)
        .env("RUST_LOG", "off")
        .output()
        .expect("run scribe3d");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let entry: serde_json::Value =
        serde_json::from_str(stdout.trim_end()).expect("one json line");
    assert_eq!(entry["text"], "draft");

    let _ = std::fs::remove_file(&script);
}

#[test]
fn failing_script_exits_with_error() {
    let script = temp_script(
        "hidden",
        r#"{"steps":[{"action":"click","control":"cancel"}]}"#,
    );
    let bin = env!("CARGO_BIN_EXE_scribe3d");
    let output = Command::new(bin)
        .arg("--script")
        .arg(&script)
        .env("RUST_LOG", "off")
        .output()
        .expect("run scribe3d");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not on screen"));

    let _ = std::fs::remove_file(&script);
}

#[test]
fn write_config_dumps_resolved_settings() {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("scribe3d_written_{timestamp}.toml"));
    let bin = env!("CARGO_BIN_EXE_scribe3d");
    let output = Command::new(bin)
        .args(["--initial", "from flag", "--max-chars", "64", "--write-config"])
        .arg(&path)
        .env("RUST_LOG", "off")
        .output()
        .expect("run scribe3d");
    assert!(output.status.success());

    let config = scribe3d::EditorConfig::load_from_path(&path);
    assert_eq!(config.initial_text, "from flag");
    assert_eq!(config.max_chars, Some(64));
    assert_eq!(config.blink_interval_ms, 500);

    let _ = std::fs::remove_file(&path);
}
