use chainline_core::EventBuilder;
use chainline_model::{Address, AddressStatus, EventType};
use chainline_store::{
    address_view, history_for, latest_status, AddressFilter, EventTypeFilter, FilteredReader,
    ReadMode, StoreReader, StoreWriter, StreamBackendReader, StreamBackendWriter, WriteOptions,
};
use serde_json::json;
use tempfile::TempDir;

const STREAM: &str = "test-events";
const BTC: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
const ETH: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

struct Fixture {
    _temp_dir: TempDir,
    path: std::path::PathBuf,
}

/// Writes a stream where the BTC address is created then accepted, and
/// the ETH address is only created.
fn create_test_stream() -> Fixture {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test-events.ael");

    let builder = EventBuilder::new().unwrap();
    let mut writer = StreamBackendWriter::open(&path, STREAM, WriteOptions::default()).unwrap();

    let records = [
        builder
            .build(BTC, EventType::AddressCreated, json!({}))
            .unwrap(),
        builder
            .build(ETH, EventType::AddressCreated, json!({}))
            .unwrap(),
        builder
            .build(BTC, EventType::AddressVerified, json!({"status": "accepted"}))
            .unwrap(),
    ];
    for record in &records {
        writer.append(&serde_json::to_value(record).unwrap()).unwrap();
    }
    writer.finish().unwrap();

    Fixture {
        _temp_dir: temp_dir,
        path,
    }
}

#[test]
fn round_trip_through_backend() {
    let fixture = create_test_stream();
    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();
    assert_eq!(reader.stream_name(), STREAM);

    let mut count = 0;
    while let Some(record) = reader.read_next().unwrap() {
        assert_eq!(record.as_object().unwrap().len(), 5);
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn filtered_reader_by_address() {
    let fixture = create_test_stream();
    let reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();
    let mut filtered = FilteredReader::new(
        reader,
        AddressFilter {
            address: Address::parse(ETH).unwrap(),
        },
    );

    let record = filtered.read_next().unwrap().unwrap();
    assert_eq!(record["address"], ETH);
    assert!(filtered.read_next().unwrap().is_none());
}

#[test]
fn filtered_reader_by_event_type() {
    let fixture = create_test_stream();
    let reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();
    let mut filtered = FilteredReader::new(
        reader,
        EventTypeFilter {
            event_type: EventType::AddressVerified,
        },
    );

    let record = filtered.read_next().unwrap().unwrap();
    assert_eq!(record["type"], "address_verified");
    assert!(filtered.read_next().unwrap().is_none());
}

#[test]
fn history_collects_only_the_requested_address() {
    let fixture = create_test_stream();
    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();

    let history = history_for(&mut reader, &Address::parse(BTC).unwrap()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].event_type, EventType::AddressCreated);
    assert_eq!(history[1].event_type, EventType::AddressVerified);
}

#[test]
fn status_projects_in_stream_order() {
    let fixture = create_test_stream();

    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();
    let accepted = latest_status(&mut reader, &Address::parse(BTC).unwrap()).unwrap();
    assert_eq!(accepted, AddressStatus::Accepted);

    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();
    let pending = latest_status(&mut reader, &Address::parse(ETH).unwrap()).unwrap();
    assert_eq!(pending, AddressStatus::Pending);
}

#[test]
fn status_of_unseen_address_is_unknown() {
    let fixture = create_test_stream();
    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();

    let other = Address::parse("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy").unwrap();
    assert_eq!(
        latest_status(&mut reader, &other).unwrap(),
        AddressStatus::Unknown
    );
}

#[test]
fn verified_record_without_usable_status_leaves_projection_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test-events.ael");

    let builder = EventBuilder::new().unwrap();
    let mut writer = StreamBackendWriter::open(&path, STREAM, WriteOptions::default()).unwrap();
    for record in [
        builder
            .build(BTC, EventType::AddressCreated, json!({}))
            .unwrap(),
        builder
            .build(BTC, EventType::AddressVerified, json!({"note": "no outcome"}))
            .unwrap(),
    ] {
        writer.append(&serde_json::to_value(&record).unwrap()).unwrap();
    }
    writer.finish().unwrap();

    let mut reader = StreamBackendReader::open(&path, ReadMode::Strict).unwrap();
    assert_eq!(
        latest_status(&mut reader, &Address::parse(BTC).unwrap()).unwrap(),
        AddressStatus::Pending
    );
}

#[test]
fn address_view_serializes_the_two_exposed_fields() {
    let fixture = create_test_stream();
    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();

    let view = address_view(&mut reader, &Address::parse(BTC).unwrap()).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json, json!({"address": BTC, "status": "accepted"}));
}

#[test]
fn event_ids_replay_in_chronological_order() {
    let fixture = create_test_stream();
    let mut reader = StreamBackendReader::open(&fixture.path, ReadMode::Strict).unwrap();

    let mut ids = Vec::new();
    while let Some(record) = reader.read_next().unwrap() {
        ids.push(record["event_id"].as_str().unwrap().to_string());
    }
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "ordered event_ids should sort like the stream");
}
