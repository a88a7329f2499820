// File: crates/chart-core/tests/provider.rs
// Purpose: Typed decoding of provider payloads (chunked JSON, CSV) into validated bars.

use chart_core::{decode_chunked_json, decode_csv, Bar, BarError, BarProvider, JsonFileProvider, ParseError, ProviderError};

const PAYLOAD: &str = r#"[
  {"Symbol": "USDJPY", "Bars": [
    {"Open": 1.0, "High": 2.0, "Low": 0.5, "Close": 1.5, "Time": 100, "Volume": 10},
    {"Open": 1.5, "High": 1.8, "Low": 1.1, "Close": 1.2, "Time": 160}
  ]},
  {"Bars": [
    {"Open": 1.2, "High": 1.3, "Low": 1.0, "Close": 1.3, "Time": 220}
  ]}
]"#;

#[test]
fn chunked_json_concatenates_chunks_in_order() {
    let bars = decode_chunked_json(PAYLOAD).expect("decode");
    assert_eq!(bars.len(), 3);
    assert_eq!(bars.iter().map(|b| b.time).collect::<Vec<_>>(), [100, 160, 220]);
    assert_eq!(bars[1].close, 1.2);
}

#[test]
fn chunked_json_rejects_invariant_violation() {
    let text = r#"[{"Bars": [
        {"Open": 1.0, "High": 2.0, "Low": 0.5, "Close": 1.5, "Time": 1},
        {"Open": 1.0, "High": 1.2, "Low": 0.5, "Close": 1.5, "Time": 2}
    ]}]"#;
    match decode_chunked_json(text) {
        Err(ParseError::InvalidBar { index: 1, source: BarError::HighBelowBody { .. } }) => {}
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn chunked_json_rejects_out_of_order_bars() {
    let text = r#"[{"Bars": [
        {"Open": 1.0, "High": 1.0, "Low": 1.0, "Close": 1.0, "Time": 5},
        {"Open": 1.0, "High": 1.0, "Low": 1.0, "Close": 1.0, "Time": 4}
    ]}]"#;
    assert!(matches!(decode_chunked_json(text), Err(ParseError::NonChronological { index: 1 })));
}

#[test]
fn chunked_json_rejects_empty_and_malformed() {
    assert!(matches!(decode_chunked_json("[]"), Err(ParseError::Empty)));
    assert!(matches!(decode_chunked_json(r#"{"Bars": []}"#), Err(ParseError::Json(_))));
    assert!(matches!(decode_chunked_json(r#"[{"Bars": [{"Open": "x"}]}]"#), Err(ParseError::Json(_))));
}

#[test]
fn csv_matches_header_aliases_and_normalizes_millis() {
    let text = "Open_Time,O,H,L,C,Volume\n1700000000000,1,2,0.5,1.5,3\n1700000060000,1.5,1.6,1.4,1.4,1\n";
    let bars = decode_csv(text.as_bytes()).expect("decode");
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].time, 1_700_000_000);
    assert_eq!(bars[1].time, 1_700_000_060);
    assert_eq!(bars[1].low, 1.4);
}

#[test]
fn csv_without_time_column_uses_row_index() {
    let text = "open,high,low,close\n1,2,0.5,1.5\n1,2,0.5,1.5\n1,2,0.5,1.5\n";
    let bars = decode_csv(text.as_bytes()).expect("decode");
    assert_eq!(bars.iter().map(|b| b.time).collect::<Vec<_>>(), [0, 1, 2]);
}

#[test]
fn csv_reports_missing_column_and_bad_numbers() {
    assert!(matches!(decode_csv("open,high,low\n1,2,0\n".as_bytes()), Err(ParseError::MissingColumn("close"))));

    let text = "time,open,high,low,close\n1,1,2,0.5,1.5\n2,1,abc,0.5,1.5\n";
    match decode_csv(text.as_bytes()) {
        Err(ParseError::InvalidRecord { line: 3, reason }) => assert!(reason.contains("high")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn file_provider_surfaces_io_errors() {
    let provider = JsonFileProvider::new("target/test_out/does-not-exist.json");
    assert!(matches!(provider.fetch(), Err(ProviderError::Io(_))));
}

#[test]
fn file_provider_decodes_payload_from_disk() {
    let path = std::path::PathBuf::from("target/test_out/provider_payload.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, PAYLOAD).unwrap();
    let bars = JsonFileProvider::new(&path).fetch().expect("fetch");
    assert_eq!(bars.len(), 3);
}

#[test]
fn bar_literal_is_checked_by_validate() {
    let wick_inside_body = Bar { open: 1.0, high: 1.2, low: 0.5, close: 1.5, time: 0 };
    assert!(matches!(wick_inside_body.validate(), Err(BarError::HighBelowBody { .. })));
    let nan = Bar { open: f64::NAN, high: 1.0, low: 0.0, close: 0.5, time: 0 };
    assert_eq!(nan.validate(), Err(BarError::NonFinite));
    assert!(Bar::try_new(1.0, 2.0, 0.5, 1.5, 0).expect("bar").validate().is_ok());
}
