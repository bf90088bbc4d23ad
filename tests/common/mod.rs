use std::path::Path;
use std::process::{Command, Output};

use log_fixture_gen::generator::{COUNT_MAX, EVENTS, MESSAGES, TS_BASE, TS_MAX_OFFSET};
use serde_json::Value;

/// Execute the log-fixture-gen binary in `dir` and return the output
pub fn execute_log_fixture_gen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_log-fixture-gen"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "log_fixture_populate=debug")
        .output()
        .expect("failed to spawn log-fixture-gen")
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Parse every line of an NDJSON fixture, checking each against the record schema
pub fn read_records(path: &Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).expect("fixture file should exist");
    content
        .lines()
        .map(|line| {
            let record: Value = serde_json::from_str(line).expect("line should be valid JSON");
            assert_record_schema(&record);
            record
        })
        .collect()
}

fn assert_record_schema(record: &Value) {
    let obj = record.as_object().expect("record should be an object");
    assert_eq!(obj.len(), 2);

    let int = obj["int"].as_object().expect("int group");
    assert!(int.keys().all(|k| k == "ts" || k == "count"));
    let ts = int["ts"].as_i64().expect("ts should be an integer");
    assert!((TS_BASE..=TS_BASE + TS_MAX_OFFSET).contains(&ts));
    if let Some(count) = int.get("count") {
        let count = count.as_u64().expect("count should be a non-negative integer");
        assert!(count <= u64::from(COUNT_MAX));
    }

    let strs = obj["str"].as_object().expect("str group");
    assert!(strs.keys().all(|k| k == "event" || k == "message"));
    let event = strs["event"].as_str().expect("event should be a string");
    assert!(EVENTS.contains(&event));
    if let Some(message) = strs.get("message") {
        let message = message.as_str().expect("message should be a string");
        assert!(MESSAGES.contains(&message));
    }
}
