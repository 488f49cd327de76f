//! End-to-end runs of the `brandkit` binary against a temporary store.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn brandkit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_brandkit"))
        .args(args)
        .current_dir(dir)
        .env_remove("BRANDKIT_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("brandkit should run")
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn save_args<'a>(store: &'a str, name: &'a str) -> Vec<&'a str> {
    vec![
        "--format",
        "raw",
        "--store",
        store,
        "generate",
        "--name",
        name,
        "--category",
        "food_beverage",
        "--price-point",
        "premium",
        "--budget",
        "high",
        "--target",
        "health-conscious",
        "--save",
    ]
}

#[test]
fn generate_saves_and_reports_receipt() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("out/strategies.csv");
    let store = store.to_str().unwrap();

    let value = json_stdout(&brandkit(dir.path(), &save_args(store, "Harvest")));
    assert_eq!(
        value["strategy"]["framework"]["positioning"],
        "Premium quality, artisanal products"
    );
    assert_eq!(value["strategy"]["campaign"]["campaign_duration"], "12 months");
    assert_eq!(value["saved"]["header_written"], true);
    assert_eq!(value["saved"]["record"]["Business Name"], "Harvest");

    let contents = std::fs::read_to_string(store).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.starts_with("Business Name,Category,Target Audience,"));
}

#[test]
fn generate_without_save_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("strategies.csv");

    let value = json_stdout(&brandkit(
        dir.path(),
        &[
            "--format",
            "json",
            "--store",
            store.to_str().unwrap(),
            "generate",
            "-n",
            "Acme",
            "-t",
            "families",
        ],
    ));
    assert!(value.get("saved").is_none());
    assert_eq!(value["strategy"]["framework"]["category"], "food_beverage");
    assert!(!store.exists());
}

#[test]
fn generate_rejects_empty_target_selection() {
    let dir = TempDir::new().unwrap();
    let output = brandkit(dir.path(), &["generate", "--name", "Acme"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("brandkit error: Validation error: Please select at least one target market"));
}

#[test]
fn generate_rejects_empty_name() {
    let dir = TempDir::new().unwrap();
    let output = brandkit(dir.path(), &["generate", "--name", "", "-t", "18-24"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter a business name"));
}

#[test]
fn failed_save_still_prints_the_strategy() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    let output = brandkit(
        dir.path(),
        &[
            "--store",
            "blocker/strategies.csv",
            "generate",
            "--name",
            "Harvest",
            "--target",
            "families",
            "--save",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Brand Strategy Analysis: Harvest"));
    assert!(stdout.contains("Marketing Campaign:"));
    assert!(!stdout.contains("Strategy saved to"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("brandkit error: Error exporting strategy to CSV:"));
}

#[test]
fn failed_save_in_json_mode_omits_the_receipt() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    let output = brandkit(
        dir.path(),
        &[
            "--format",
            "json",
            "--store",
            "blocker/strategies.csv",
            "generate",
            "-n",
            "Harvest",
            "-t",
            "families",
            "--save",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["strategy"]["name"], "Harvest");
    assert!(value.get("saved").is_none());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error exporting strategy to CSV:"));
}

#[test]
fn history_reads_back_saved_rows() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("strategies.csv");
    let store = store.to_str().unwrap();

    for name in ["First", "Second", "Third"] {
        json_stdout(&brandkit(dir.path(), &save_args(store, name)));
    }

    let value = json_stdout(&brandkit(
        dir.path(),
        &["--format", "json", "--store", store, "history", "--limit", "2"],
    ));
    assert_eq!(value["total_rows"], 3);
    let names = value["strategies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["Business Name"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Second".to_string(), "Third".to_string()]);
}

#[test]
fn history_of_missing_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(&brandkit(
        dir.path(),
        &["--format", "json", "--store", "none.csv", "history"],
    ));
    assert_eq!(value["total_rows"], 0);
    assert_eq!(value["strategies"], Value::Array(Vec::new()));
}

#[test]
fn options_lists_every_choice() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(&brandkit(dir.path(), &["--format", "json", "options"]));

    assert_eq!(
        value["categories"],
        serde_json::json!(["food_beverage", "personal_care", "household"])
    );
    assert_eq!(
        value["price_points"],
        serde_json::json!(["budget", "mid-range", "premium"])
    );
    assert_eq!(value["target_markets"][0], "18-24");
}

#[test]
fn analyze_name_flags_long_names() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(&brandkit(
        dir.path(),
        &["--format", "json", "analyze-name", "The Very Long Business Name Co"],
    ));
    assert_eq!(value["memorable"], false);
    assert_eq!(value["length"], 30);
}

#[test]
fn schema_dumps_json_and_rejects_unknown_types() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(&brandkit(dir.path(), &["schema", "record"]));
    assert!(value["properties"].get("Business Name").is_some());

    let output = brandkit(dir.path(), &["schema", "invoice"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown schema type: invoice"));
}
