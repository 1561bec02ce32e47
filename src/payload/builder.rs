use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::layout::binding::{ResolvedMap, resolve_element_value};
use crate::layout::layout_model::{LabelFormat, LabelLayout, LayoutElement};
use crate::mapping::mapping_model::ResolvedVariable;
use crate::payload::payload_model::{LabelPayload, LayoutSummary, PayloadElement};

/// Collapse resolved variables into the key → value map elements read from.
/// Later entries win when a key repeats.
pub fn resolved_map(resolved: &[ResolvedVariable]) -> ResolvedMap {
    resolved
        .iter()
        .map(|r| (r.key.clone(), r.value.clone()))
        .collect()
}

/// Build the payload for a print happening now.
pub fn build_label_payload(
    layout: &LabelLayout,
    format: Option<&LabelFormat>,
    resolved: &ResolvedMap,
    data_source_id: Option<i64>,
    data_source_name: &str,
) -> LabelPayload {
    build_label_payload_at(
        layout,
        format,
        resolved,
        data_source_id,
        data_source_name,
        Utc::now(),
    )
}

/// Build the payload stamped with `printed_at`.
pub fn build_label_payload_at(
    layout: &LabelLayout,
    format: Option<&LabelFormat>,
    resolved: &ResolvedMap,
    data_source_id: Option<i64>,
    data_source_name: &str,
    printed_at: DateTime<Utc>,
) -> LabelPayload {
    let elements = layout
        .elements
        .iter()
        .map(|element| payload_element(element, resolved))
        .collect();

    let payload = LabelPayload {
        data_source_id,
        data_source_name: data_source_name.to_string(),
        layout: LayoutSummary {
            id: layout.id,
            name: layout.name.clone(),
            label_format_id: layout.label_format_id,
        },
        format: format.cloned(),
        elements,
        resolved_variables: resolved.clone(),
        printed_at: format_timestamp(printed_at),
    };

    info!(
        layout = %payload.layout.name,
        data_source = %payload.data_source_name,
        elements = payload.elements.len(),
        "built label payload"
    );
    payload
}

fn payload_element(element: &LayoutElement, resolved: &ResolvedMap) -> PayloadElement {
    PayloadElement {
        id: element.id,
        name: element.name.clone(),
        element_type: element.element_type.clone(),
        mode: element.mode(),
        position_x: element.position_x,
        position_y: element.position_y,
        width: element.width,
        height: element.height,
        rotation: element.rotation,
        font_size: element.effective_font_size(),
        variable_key: element.binding().map(|b| b.variable_key.clone()),
        value: resolve_element_value(element, resolved),
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
