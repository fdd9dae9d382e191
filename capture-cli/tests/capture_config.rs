use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const NOTE: &str = r#"{
  "runs": [
    {
      "text": "Title",
      "attributes": {
        "flavor": "semantic",
        "block": { "kind": { "type": "header", "level": 2 }, "identity": 1 }
      }
    }
  ]
}"#;

#[test]
fn convert_respects_dialect_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("note.json");
    fs::write(&input_path, NOTE).unwrap();

    let config_path = dir.path().join("capture.toml");
    fs::write(
        &config_path,
        r#"[capture]
dialect = "markdown"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout, "## Title\n");
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("note.json"), NOTE).unwrap();
    fs::write(
        dir.path().join("capture.toml"),
        "[capture]\ndialect = \"md\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("capture");
    cmd.current_dir(dir.path()).arg("note.json");

    cmd.assert().success().stdout("## Title\n");
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("note.json");
    fs::write(&input_path, NOTE).unwrap();

    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(dir.path().join("absent.toml").as_os_str());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn invalid_config_value_fails() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("note.json");
    fs::write(&input_path, NOTE).unwrap();
    let config_path = dir.path().join("capture.toml");
    fs::write(&config_path, "[capture]\nprotocol = \"roam\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert().failure();
}
