//! Append command implementation.

use crate::path;
use chainline_core::EventBuilder;
use chainline_store::{StoreWriter, StreamBackendWriter, WriteOptions};
use serde_json::{json, Value};

pub fn run(
    stream: Option<String>,
    address: String,
    event_type: String,
    data: Option<String>,
    sync: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (stream_path, stream_name) = path::resolve_stream(stream)?;

    let data: Value = match data {
        Some(text) => {
            serde_json::from_str(&text).map_err(|e| format!("invalid data JSON: {}", e))?
        }
        None => json!({}),
    };

    let builder = EventBuilder::new()?;
    let event = builder.build_from_parts(&address, &event_type, data)?;

    let options = WriteOptions {
        sync,
        ..WriteOptions::default()
    };
    let mut writer = StreamBackendWriter::open(&stream_path, &stream_name, options)
        .map_err(|e| format!("failed to open stream for writing: {}", e))?;
    writer.append(&serde_json::to_value(&event)?)?;
    writer.finish()?;

    println!("Appended {} to {}", event.event_id, stream_path.display());
    Ok(())
}
