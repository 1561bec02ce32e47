use serde::{Deserialize, Serialize};

use crate::mapping::mapping_model::VariableMapping;

/// A named bundle of mappings for one kind of page, selected by URL pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: i64,
    pub name: String,

    /// `*` glob matched against the page URL
    pub url_pattern: String,

    /// Layout to print with when none is chosen explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_layout_id: Option<i64>,

    #[serde(default)]
    pub variable_mappings: Vec<VariableMapping>,
}

impl DataSource {
    pub fn mapping(&self, key: &str) -> Option<&VariableMapping> {
        self.variable_mappings.iter().find(|m| m.key == key)
    }
}
