//! Verify command implementation.

use crate::output;
use crate::path;
use chainline_core::{check_lifecycle_order, verify_record, Verdict};
use chainline_model::columns;
use chainline_store::{ReadMode, StoreReader, StreamBackendReader};
use serde_json::json;

pub fn run(
    stream: Option<String>,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream_path = path::resolve_existing_stream(stream)?;

    let mut reader = StreamBackendReader::open(&stream_path, ReadMode::Strict)
        .map_err(|e| format!("failed to open stream file: {}", e))?;

    // First pass: collect all records (the lifecycle audit needs stream order).
    let mut records = Vec::new();
    while let Some(record) = reader.read_next()? {
        records.push(record);
    }

    let mut all_ok = true;
    let mut results = Vec::new();
    for record in &records {
        let event_id = record
            .get(columns::EVENT_ID)
            .and_then(|v| v.as_str())
            .unwrap_or("?")
            .to_string();
        let event_type = record
            .get(columns::TYPE)
            .and_then(|v| v.as_str())
            .unwrap_or("?")
            .to_string();

        let verdict = verify_record(record);
        all_ok = all_ok && verdict.is_ok();
        results.push((event_id, event_type, verdict));
    }

    let violations = check_lifecycle_order(records.iter());
    all_ok = all_ok && violations.is_empty();

    if json_output {
        let record_results: Vec<_> = results
            .iter()
            .map(|(id, ty, verdict)| {
                json!({
                    "event_id": id,
                    "type": ty,
                    "verdict": match verdict {
                        Verdict::Ok => json!("ok"),
                        Verdict::Invalid(reason) => json!({"invalid": reason}),
                    }
                })
            })
            .collect();
        let violation_results: Vec<_> = violations
            .iter()
            .map(|v| {
                json!({
                    "address": v.address,
                    "event_id": v.event_id.map(|id| id.to_string()),
                    "reason": v.reason,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "records": record_results,
                "violations": violation_results,
            }))?
        );
    } else {
        println!("{:<36} {:<17} {}", "EVENT_ID", "TYPE", "VERDICT");
        println!("{}", "-".repeat(70));
        for (id, ty, verdict) in &results {
            let verdict_text = match verdict {
                Verdict::Ok => "ok".to_string(),
                Verdict::Invalid(reason) => format!("invalid: {}", reason),
            };
            println!(
                "{:<36} {:<17} {}",
                output::truncate(id, 36),
                ty,
                verdict_text
            );
        }
        for violation in &violations {
            println!("violation: {} ({})", violation.address, violation.reason);
        }
    }

    if strict && !all_ok {
        std::process::exit(1);
    }

    Ok(())
}
