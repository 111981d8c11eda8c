//! Integration tests for CLI commands.

use chainline_core::EventBuilder;
use chainline_model::EventType;
use chainline_store::{StoreWriter, StreamBackendWriter, WriteOptions};
use serde_json::json;
use std::process::Command;
use tempfile::TempDir;

const STREAM: &str = "test-events";
const BTC: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
const ETH: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

/// Writes a stream with a created+accepted BTC address and a created-only
/// ETH address.
fn create_test_stream() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let stream_path = temp_dir.path().join("test-events.ael");

    let builder = EventBuilder::new().unwrap();
    let mut writer =
        StreamBackendWriter::open(&stream_path, STREAM, WriteOptions::default()).unwrap();
    for event in [
        builder
            .build(BTC, EventType::AddressCreated, json!({}))
            .unwrap(),
        builder
            .build(ETH, EventType::AddressCreated, json!({}))
            .unwrap(),
        builder
            .build(BTC, EventType::AddressVerified, json!({"status": "accepted"}))
            .unwrap(),
    ] {
        writer.append(&serde_json::to_value(&event).unwrap()).unwrap();
    }
    writer.finish().unwrap();

    (temp_dir, stream_path.to_string_lossy().to_string())
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "chainline", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

#[test]
fn test_mint_command() {
    let (success, stdout, _) = run_cli(&["mint", "--count", "3"]);
    assert!(success);
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 3);
    for id in ids {
        assert_eq!(id.len(), 36);
    }
}

#[test]
fn test_mint_random_json() {
    let (success, stdout, _) = run_cli(&["mint", "--count", "2", "--random", "--json"]);
    assert!(success);
    let ids: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_list_command() {
    let (_temp_dir, stream_path) = create_test_stream();

    let (success, stdout, _) = run_cli(&["list", &stream_path]);
    assert!(success);
    assert!(stdout.contains("EVENT_ID"));
    assert!(stdout.contains("address_created"));
    assert!(stdout.contains(BTC));
}

#[test]
fn test_list_with_type_filter() {
    let (_temp_dir, stream_path) = create_test_stream();

    let (success, stdout, _) = run_cli(&["list", &stream_path, "--type", "address_verified"]);
    assert!(success);
    assert!(!stdout.contains("address_created"));
    assert!(stdout.contains("address_verified"));
}

#[test]
fn test_list_with_address_filter() {
    let (_temp_dir, stream_path) = create_test_stream();

    let (success, stdout, _) = run_cli(&["list", &stream_path, "--address", ETH]);
    assert!(success);
    assert!(stdout.contains(ETH));
    assert!(!stdout.contains(BTC));
}

#[test]
fn test_list_json_output() {
    let (_temp_dir, stream_path) = create_test_stream();

    let (success, stdout, _) = run_cli(&["list", &stream_path, "--json"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        serde_json::from_str::<serde_json::Value>(line).expect("Invalid JSON");
    }
}

#[test]
fn test_append_command() {
    let temp_dir = TempDir::new().unwrap();
    let stream_path = temp_dir.path().join("test-events.ael");
    let stream_path = stream_path.to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&[
        "append",
        &stream_path,
        "--address",
        BTC,
        "--type",
        "address_created",
    ]);
    assert!(success);
    assert!(stdout.contains("Appended"));

    let (success, stdout, _) = run_cli(&["list", &stream_path, "--json"]);
    assert!(success);
    let record: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(record["address"], BTC);
    assert_eq!(record["type"], "address_created");
}

#[test]
fn test_append_rejects_unknown_event_type() {
    let temp_dir = TempDir::new().unwrap();
    let stream_path = temp_dir.path().join("test-events.ael");
    let stream_path = stream_path.to_string_lossy().to_string();

    let (success, _, stderr) = run_cli(&[
        "append",
        &stream_path,
        "--address",
        BTC,
        "--type",
        "address_deleted",
    ]);
    assert!(!success);
    assert!(stderr.contains("unknown event type"));
}

#[test]
fn test_status_command() {
    let (_temp_dir, stream_path) = create_test_stream();

    let (success, stdout, _) = run_cli(&["status", BTC, &stream_path]);
    assert!(success);
    assert!(stdout.contains("accepted"));

    let (success, stdout, _) = run_cli(&["status", ETH, &stream_path, "--json"]);
    assert!(success);
    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["address"], ETH);
    assert_eq!(view["status"], "pending");
}

#[test]
fn test_verify_command() {
    let (_temp_dir, stream_path) = create_test_stream();

    let (success, stdout, _) = run_cli(&["verify", &stream_path]);
    assert!(success);
    assert!(stdout.contains("VERDICT"));
    assert!(stdout.contains("ok"));
}

#[test]
fn test_verify_strict_fails_on_bad_record() {
    let temp_dir = TempDir::new().unwrap();
    let stream_path = temp_dir.path().join("test-events.ael");

    {
        let mut writer =
            StreamBackendWriter::open(&stream_path, STREAM, WriteOptions::default()).unwrap();
        writer
            .append(&json!({
                "address": BTC,
                "event_id": "not-an-identifier",
                "type": "address_created",
                "timestamp": "2024-01-01T00:00:00Z",
                "data": {}
            }))
            .unwrap();
        writer.finish().unwrap();
    }

    let stream_path = stream_path.to_string_lossy().to_string();
    let (success, _, _) = run_cli(&["verify", &stream_path, "--strict"]);
    assert!(!success);
}
