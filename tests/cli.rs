#![cfg(feature = "cli")]
use assert_cmd::Command;
use insta::assert_snapshot;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run_fixture(stem: &str, dir: &Path, flags: &[&str]) -> serde_json::Value {
    let input_path = dir.join(format!("{stem}.json"));
    let output_path = dir.join(format!("{stem}.avsc"));

    // Load descriptor and copy into tmpdir
    let descriptor = fs::read_to_string(format!("tests/fixtures/descriptors/{stem}.json")).unwrap();
    fs::write(&input_path, descriptor).unwrap();

    // Run CLI
    Command::cargo_bin("types2avro")
        .unwrap()
        .arg(input_path.to_str().unwrap())
        .arg(output_path.to_str().unwrap())
        .args(flags)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path).unwrap();
    serde_json::from_str(&output).unwrap()
}

fn expected(stem: &str) -> serde_json::Value {
    let text = fs::read_to_string(format!("tests/fixtures/avro/{stem}.avsc")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[rstest]
#[case("order", &[])]
#[case("nested_containers", &["--wrap-into-records"])]
#[case("patch", &["--mark-non-total", "--namespace", "shop"])]
fn cli_fixtures(#[case] stem: &str, #[case] flags: &[&str]) {
    let dir = tempdir().unwrap();
    assert_eq!(run_fixture(stem, dir.path(), flags), expected(stem));
}

#[test]
fn cli_doc_flag() {
    let dir = tempdir().unwrap();
    let avro = run_fixture("order", dir.path(), &["--doc"]);
    assert_eq!(avro["doc"], "A customer order");
}

#[test]
fn cli_config_and_aliases_files() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("options.json");
    fs::write(&config, r#"{"flags": ["INT_32"], "namespace": "shop"}"#).unwrap();
    let aliases = dir.path().join("aliases.json");
    fs::write(&aliases, r#"{"shop.Order": ["shop.Purchase"]}"#).unwrap();

    let avro = run_fixture(
        "order",
        dir.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "--aliases",
            aliases.to_str().unwrap(),
        ],
    );
    assert_eq!(avro["namespace"], "shop");
    assert_eq!(avro["aliases"], serde_json::json!(["shop.Purchase"]));
    assert_eq!(avro["fields"][0]["type"], "int");
    // Named types share the configured namespace, so references are qualified.
    assert_eq!(avro["fields"][5]["type"], serde_json::json!(["shop.Order", "null"]));
}

#[test]
fn cli_reports_translation_errors() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("int_keys.json");
    let output_path = dir.path().join("int_keys.avsc");
    fs::copy("tests/fixtures/descriptors/int_keys.json", &input_path).unwrap();

    let assert = Command::cargo_bin("types2avro")
        .unwrap()
        .arg(input_path.to_str().unwrap())
        .arg(output_path.to_str().unwrap())
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_snapshot!(
        stderr.trim_end(),
        @"Error: Cannot generate Avro mapping schema for dict[int, str] with non-string keys"
    );
    assert!(!output_path.exists());
}

#[test]
fn cli_missing_input() {
    let dir = tempdir().unwrap();
    let assert = Command::cargo_bin("types2avro")
        .unwrap()
        .arg(dir.path().join("absent.json").to_str().unwrap())
        .arg(dir.path().join("absent.avsc").to_str().unwrap())
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.starts_with("Error: I/O error"), "{stderr}");
}
