use chrono::{TimeZone, Utc};

use label_sorcerer::layout::layout_model::{ElementMode, ElementType};
use label_sorcerer::mapping::mapping_model::{MappingStatus, ResolvedVariable};
use label_sorcerer::payload::builder::{build_label_payload, format_timestamp, resolved_map};
use label_sorcerer::payload::payload_model::LabelPayload;

use crate::common::fixtures::{asset_layout, fixed_payload, resolved, wide_format};

mod common;

// =========================================================================
// resolved_map
// =========================================================================

#[test]
fn resolved_map_keeps_values_by_key() {
    let variables = vec![
        ResolvedVariable {
            key: "title".into(),
            value: "Laptop".into(),
            selector_matches: vec!["Laptop".into()],
            status: MappingStatus::Mapped,
        },
        ResolvedVariable {
            key: "location".into(),
            value: String::new(),
            selector_matches: vec![],
            status: MappingStatus::Missing,
        },
    ];

    let map = resolved_map(&variables);
    assert_eq!(map.get("title").map(String::as_str), Some("Laptop"));
    assert_eq!(map.get("location").map(String::as_str), Some(""));
    assert_eq!(map.len(), 2);
}

// =========================================================================
// build_label_payload
// =========================================================================

#[test]
fn payload_keeps_layout_element_order() {
    let payload = fixed_payload();
    let ids: Vec<i64> = payload.elements.iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn payload_identifies_layout_format_and_source() {
    let payload = fixed_payload();

    assert_eq!(payload.layout.id, 7);
    assert_eq!(payload.layout.name, "Asset Tag");
    assert_eq!(payload.layout.label_format_id, 1);
    assert_eq!(payload.format, Some(wide_format()));
    assert_eq!(payload.data_source_id, Some(3));
    assert_eq!(payload.data_source_name, "Inventory");
}

#[test]
fn printed_at_is_utc_with_milliseconds() {
    assert_eq!(fixed_payload().printed_at, "2024-05-01T12:00:00.000Z");

    let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()
        + chrono::Duration::milliseconds(250);
    assert_eq!(format_timestamp(instant), "2023-12-31T23:59:59.250Z");
}

#[test]
fn element_values_follow_bindings() {
    let payload = fixed_payload();
    let values: Vec<&str> = payload.elements.iter().map(|e| e.value.as_str()).collect();

    assert_eq!(values, vec!["Laptop", "SKU 42", " 42 ", "Property of ACME"]);
}

#[test]
fn element_font_size_takes_binding_override() {
    let payload = fixed_payload();

    assert_eq!(payload.elements[0].font_size, Some(18.0));
    assert_eq!(payload.elements[1].font_size, Some(20.0));
    assert_eq!(payload.elements[2].font_size, None);
}

#[test]
fn element_carries_type_mode_geometry_and_variable_key() {
    let payload = fixed_payload();

    let qr = &payload.elements[2];
    assert_eq!(qr.element_type, ElementType::QrCode);
    assert_eq!(qr.mode, ElementMode::Dynamic);
    assert_eq!(qr.variable_key.as_deref(), Some("sku"));
    assert_eq!((qr.position_x, qr.position_y), (400.0, 10.0));
    assert_eq!((qr.width, qr.height), (120.0, 120.0));

    let footer = &payload.elements[3];
    assert_eq!(footer.mode, ElementMode::Static);
    assert_eq!(footer.variable_key, None);
}

#[test]
fn resolved_variables_are_copied_untouched() {
    let payload = fixed_payload();

    assert_eq!(payload.variable("sku"), Some(" 42 "));
    assert_eq!(payload.variable("title"), Some("Laptop"));
    assert_eq!(payload.variable("location"), None);
}

#[test]
fn payload_without_format_or_source_id() {
    let payload = build_label_payload(&asset_layout(), None, &resolved(&[]), None, "");

    assert_eq!(payload.format, None);
    assert_eq!(payload.data_source_id, None);
    assert_eq!(payload.elements[0].value, "");
    assert_eq!(payload.elements[1].value, "SKU ");
    assert!(payload.printed_at.ends_with('Z'));
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn payload_serializes_with_camel_case_keys() {
    let json = fixed_payload().to_value().unwrap();

    assert_eq!(json["dataSourceId"], 3);
    assert_eq!(json["dataSourceName"], "Inventory");
    assert_eq!(json["layout"]["labelFormatId"], 1);
    assert_eq!(json["format"]["widthPx"], 620.0);
    assert_eq!(json["resolvedVariables"]["title"], "Laptop");
    assert_eq!(json["printedAt"], "2024-05-01T12:00:00.000Z");

    let sku = &json["elements"][1];
    assert_eq!(sku["type"], "text");
    assert_eq!(sku["mode"], "dynamic");
    assert_eq!(sku["positionX"], 10.0);
    assert_eq!(sku["fontSize"], 20.0);
    assert_eq!(sku["variableKey"], "sku");
    assert_eq!(sku["value"], "SKU 42");

    assert!(json["elements"][3].get("variableKey").is_none());
}

#[test]
fn payload_json_parses_back() {
    let payload = fixed_payload();
    let back: LabelPayload = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

    assert_eq!(back, payload);
}
