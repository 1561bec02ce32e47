use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::layout::layout_model::LabelLayout;
use crate::mapping::evaluator::evaluate_mapping;
use crate::mapping::mapping_model::{MappingStatus, ResolvedVariable};
use crate::source::source_model::DataSource;

/// Value shown for a layout variable the data source does not map.
pub const NOT_MAPPED: &str = "Not mapped";

/// One row of the editor preview: a layout variable and what it resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewVariable {
    pub key: String,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    pub multiple: bool,
    pub status: MappingStatus,
}

/// Pair every layout variable with the data source's view of it.
///
/// Without a live evaluation for a key, the mapping is run against its own
/// selector text (or the key) so the formatting rules can still be previewed.
pub fn build_preview_context(
    layout: &LabelLayout,
    data_source: &DataSource,
    resolved: Option<&[ResolvedVariable]>,
) -> Vec<PreviewVariable> {
    let resolved_by_key: HashMap<&str, &ResolvedVariable> = resolved
        .unwrap_or_default()
        .iter()
        .map(|r| (r.key.as_str(), r))
        .collect();

    layout
        .variables
        .iter()
        .map(|variable| {
            let mapping = data_source.mapping(&variable.key);

            if let Some(live) = resolved_by_key.get(variable.key.as_str()) {
                let status = if live.selector_matches.is_empty() {
                    MappingStatus::Missing
                } else {
                    MappingStatus::Mapped
                };
                return PreviewVariable {
                    key: variable.key.clone(),
                    label: variable.label.clone(),
                    value: live.value.clone(),
                    selector: mapping.map(|m| m.css_selector.clone()),
                    multiple: mapping.map_or(variable.multiple, |m| m.multiple),
                    status,
                };
            }

            let Some(mapping) = mapping else {
                return PreviewVariable {
                    key: variable.key.clone(),
                    label: variable.label.clone(),
                    value: NOT_MAPPED.to_string(),
                    selector: None,
                    multiple: variable.multiple,
                    status: MappingStatus::Missing,
                };
            };

            let placeholder = if mapping.css_selector.is_empty() {
                variable.key.clone()
            } else {
                mapping.css_selector.clone()
            };
            let evaluation = evaluate_mapping(&[placeholder], mapping);

            PreviewVariable {
                key: variable.key.clone(),
                label: variable.label.clone(),
                value: evaluation.value,
                selector: Some(mapping.css_selector.clone()),
                multiple: mapping.multiple,
                status: evaluation.status,
            }
        })
        .collect()
}
