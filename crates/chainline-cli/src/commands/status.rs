//! Status command implementation.

use crate::path;
use chainline_model::Address;
use chainline_store::{address_view, ReadMode, StreamBackendReader};

pub fn run(
    address: String,
    stream: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream_path = path::resolve_existing_stream(stream)?;
    let address = Address::parse(address)?;

    let mut reader = StreamBackendReader::open(&stream_path, ReadMode::Strict)
        .map_err(|e| format!("failed to open stream file: {}", e))?;
    let view = address_view(&mut reader, &address)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{} {}", view.address, view.status);
    }

    Ok(())
}
