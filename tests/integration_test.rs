use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "metadata": {"title": "CLI Deck", "author": "Robin", "creationDate": "2024-03-04", "theme": "dark"},
    "slides": [
        {"id": 1, "content": {"type": "titleSlide", "data": {"title": "Welcome"}}},
        {"id": 2, "content": {"type": "singleColumn", "data": {"title": "Points", "bullets": ["one", "two"]}}}
    ]
}"#;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_json-slides"))
        .args(args)
        .env_remove("SLIDES_EXTRA_CSS")
        .env_remove("SLIDES_DOCUMENT_LANG")
        .env_remove("SLIDES_NAVIGATION")
        .output()
        .expect("Failed to execute command")
}

fn write_manifest(dir: &Path, content: &str) -> String {
    let path = dir.join("deck.json");
    fs::write(&path, content).expect("Failed to write manifest");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_export_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manifest_path = write_manifest(temp_dir.path(), MANIFEST);

    let css_path = temp_dir.path().join("extra.css");
    fs::write(&css_path, ".slide-title { color: teal; }").expect("Failed to write CSS file");

    let output_path = temp_dir.path().join("out").join("deck.html");

    let output = run_command(&[
        "export",
        "-i",
        &manifest_path,
        "-o",
        output_path.to_str().unwrap(),
        "--css",
        css_path.to_str().unwrap(),
        "--lang",
        "es",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "Output file was not created");

    let html_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html_content.contains("<html lang=\"es\">"));
    assert!(html_content.contains("id=\"slide-1\""));
    assert!(html_content.contains("id=\"slide-2\""));
    assert!(html_content.contains(".slide-title { color: teal; }"));
    assert!(html_content.contains("background: #1a1a1a"));
}

#[test]
fn test_preview_command_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manifest_path = write_manifest(temp_dir.path(), MANIFEST);

    let output = run_command(&["preview", "-i", &manifest_path]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Preview (slide 1 of 2)"));
    assert!(stdout.contains("Welcome"));
}

#[test]
fn test_preview_command_json_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manifest_path = write_manifest(temp_dir.path(), "{not json");

    let output = run_command(&["preview", "-i", &manifest_path, "--json"]);

    assert!(!output.status.success());
    let response: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(response["success"], serde_json::json!(false));
    assert_eq!(response["code"], serde_json::json!("INVALID_JSON"));
}

#[test]
fn test_check_command_reports_unknown_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manifest_path = write_manifest(
        temp_dir.path(),
        r#"{"metadata": {"title": "T"}, "slides": [{"id": 5, "content": {"type": "triColumn", "data": {}}}]}"#,
    );

    let output = run_command(&["check", "-i", &manifest_path]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Slide 5"), "stderr was: {}", stderr);
    assert!(stderr.contains("triColumn"));
}

#[test]
fn test_missing_input_file() {
    let output = run_command(&["check", "-i", "/no/such/deck.json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Path not found"), "stderr was: {}", stderr);
}
