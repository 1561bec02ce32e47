use serde::{Deserialize, Serialize};

/// Separator used when a `multiple` mapping joins several captures.
pub const MULTI_VALUE_SEPARATOR: &str = " | ";

/// How one data source derives a single variable's value from the page.
///
/// `key` binds to a layout variable by convention only: a mapping whose key no
/// layout declares is legal, it simply never feeds an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMapping {
    pub key: String,

    /// DOM selector for this view
    #[serde(default)]
    pub css_selector: String,

    /// Attribute to read instead of text content ("textContent" means text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    /// Join every capture instead of keeping only the first
    #[serde(default)]
    pub multiple: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_match_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default)]
    pub trim_whitespace: bool,
}

impl VariableMapping {
    /// A text-content mapping with every transform switched off.
    pub fn new(key: &str, css_selector: &str) -> Self {
        Self {
            key: key.to_string(),
            css_selector: css_selector.to_string(),
            attribute_name: None,
            multiple: false,
            regex_pattern: None,
            regex_match_index: None,
            prefix: None,
            suffix: None,
            trim_whitespace: false,
        }
    }

    /// The attribute to capture, or `None` when the node's text is wanted.
    pub fn capture_attribute(&self) -> Option<&str> {
        match self.attribute_name.as_deref() {
            None | Some("") | Some("textContent") => None,
            Some(attr) => Some(attr),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    Mapped,
    Missing,
}

/// Output of evaluating one mapping against its raw captures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEvaluation {
    pub value: String,
    pub selector_matches: Vec<String>,
    pub status: MappingStatus,
}

/// A mapping evaluation tagged with the variable key it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVariable {
    pub key: String,
    pub value: String,
    pub selector_matches: Vec<String>,
    pub status: MappingStatus,
}

impl ResolvedVariable {
    pub fn from_evaluation(key: &str, evaluation: MappingEvaluation) -> Self {
        Self {
            key: key.to_string(),
            value: evaluation.value,
            selector_matches: evaluation.selector_matches,
            status: evaluation.status,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.status == MappingStatus::Mapped
    }
}
