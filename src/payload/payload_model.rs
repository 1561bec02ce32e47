use serde::{Deserialize, Serialize};

use crate::layout::binding::ResolvedMap;
use crate::layout::layout_model::{ElementMode, ElementType, LabelFormat};

// ============================================================================
// Label payload: snapshot of a completed print
// ============================================================================

/// Identifying fields of the layout that was printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub id: i64,
    pub name: String,
    pub label_format_id: i64,
}

/// One element as it was drawn: geometry, type and the computed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadElement {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub mode: ElementMode,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: Option<f64>,
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_key: Option<String>,
    pub value: String,
}

/// Immutable record of what was printed, handed to webhook templates and
/// the print log.
///
/// Elements keep the layout's authored order. `resolved_variables` is a sorted
/// map, so its serialized order is stable but carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPayload {
    pub data_source_id: Option<i64>,
    pub data_source_name: String,
    pub layout: LayoutSummary,
    pub format: Option<LabelFormat>,
    pub elements: Vec<PayloadElement>,
    pub resolved_variables: ResolvedMap,
    pub printed_at: String,
}

impl LabelPayload {
    /// Value of a resolved variable, if the print carried one.
    pub fn variable(&self, key: &str) -> Option<&str> {
        self.resolved_variables.get(key).map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
