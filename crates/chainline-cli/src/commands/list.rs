//! List command implementation.

use crate::output;
use crate::path;
use chainline_model::Address;
use chainline_store::{
    AddressFilter, AndFilter, EventTypeFilter, FilteredReader, ReadMode, RecordFilter,
    StoreReader, StreamBackendReader,
};

pub fn run(
    stream: Option<String>,
    address: Option<String>,
    event_type: Option<String>,
    json: bool,
    max_events: Option<u64>,
    max_size: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream_path = path::resolve_existing_stream(stream)?;

    // Check stream size if a limit is set
    if let Some(max_bytes) = max_size {
        let metadata = std::fs::metadata(&stream_path)?;
        if metadata.len() > max_bytes {
            return Err(format!(
                "Stream size {} exceeds maximum {} bytes",
                metadata.len(),
                max_bytes
            )
            .into());
        }
    }

    let reader = StreamBackendReader::open(&stream_path, ReadMode::Strict)
        .map_err(|e| format!("failed to open stream file: {}", e))?;

    let mut filters: Vec<Box<dyn RecordFilter>> = Vec::new();
    if let Some(address) = address {
        filters.push(Box::new(AddressFilter {
            address: Address::parse(address)?,
        }));
    }
    if let Some(event_type) = event_type {
        filters.push(Box::new(EventTypeFilter {
            event_type: event_type.parse()?,
        }));
    }
    let mut reader = FilteredReader::new(reader, AndFilter { filters });

    if !json {
        output::print_table_header();
    }

    let mut record_count: u64 = 0;
    while let Some(record) = reader.read_next()? {
        if let Some(max) = max_events {
            if record_count >= max {
                break;
            }
        }

        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{}", output::format_table_row(&record));
        }
        record_count += 1;
    }

    Ok(())
}
