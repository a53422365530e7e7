//! Integration tests for static export.

mod common;

use common::{TestDir, assert_html_contains};
use vibegen::{Builder, Config, Templates};

fn export(config: &Config, dir: &TestDir) -> String {
    let page = config.page().expect("Invalid page configuration");
    let templates = Templates::new(None).expect("Failed to load templates");
    let out = dir.path().join("dist");
    Builder::new(page, templates, out.clone())
        .build()
        .expect("Export failed");
    std::fs::read_to_string(out.join("index.html")).expect("index.html missing")
}

#[test]
fn test_export_writes_single_index() {
    let dir = TestDir::new();
    let html = export(&Config::default(), &dir);

    assert_html_contains(&html, "<!DOCTYPE html>");
    assert_html_contains(&html, r#"src="https://vibegen.elpeef.com/""#);

    let entries: Vec<_> = std::fs::read_dir(dir.path().join("dist"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("index.html")]);
}

#[test]
fn test_export_matches_direct_render() {
    let dir = TestDir::new();
    let config = Config::default();
    let exported = export(&config, &dir);

    let templates = Templates::new(None).unwrap();
    let rendered = config.page().unwrap().render(&templates).unwrap();
    assert_eq!(exported, rendered);
}

#[test]
fn test_export_is_deterministic() {
    let first = export(&Config::default(), &TestDir::new());
    let second = export(&Config::default(), &TestDir::new());
    assert_eq!(first, second);
}

#[test]
fn test_config_file_drives_export() {
    let dir = TestDir::new();
    let config_path = dir.create_file(
        "vibegen.toml",
        r#"
title = "Exported"
iframe_url = "https://example.com/embedded"
iframe_height = 720
"#,
    );
    let config = Config::read(Some(&config_path)).expect("Failed to read config");
    let html = export(&config, &dir);

    assert_html_contains(&html, "<title>Exported</title>");
    assert_html_contains(&html, "height:720px;");
    assert_html_contains(&html, r#"src="https://example.com/embedded""#);
}

fn run_binary(dir: &TestDir, args: &[&str]) -> std::process::Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_vibegen"));
    cmd.args(args).current_dir(dir.path());
    for (key, _) in std::env::vars().filter(|(k, _)| k.starts_with("VIBEGEN_")) {
        cmd.env_remove(key);
    }
    let output = cmd.output().expect("Failed to run vibegen");
    assert!(
        output.status.success(),
        "vibegen {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn test_stdout_mode_matches_export_byte_for_byte() {
    let dir = TestDir::new();
    let stdout = run_binary(&dir, &["--stdout"]).stdout;
    run_binary(&dir, &["--export", "dist"]);

    let exported = std::fs::read(dir.path().join("dist").join("index.html"))
        .expect("index.html missing");
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(exported).unwrap()
    );
}
