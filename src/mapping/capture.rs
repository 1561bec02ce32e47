use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Supplies the raw strings a page agent captured for a selector.
///
/// DOM querying happens outside this crate; implementations only hand back what
/// was already extracted, one string per matched node.
pub trait CaptureSource {
    fn capture(&self, selector: &str, attribute: Option<&str>) -> Vec<String>;
}

/// One selector's captured values as written by the page agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorCapture {
    pub selector: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    #[serde(default)]
    pub values: Vec<String>,
}

/// JSON snapshot of a page's captures.
///
/// ```json
/// { "url": "https://jira.example.com/assets/42",
///   "captures": [ { "selector": ".asset-name", "values": ["  Laptop  "] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageCapture {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub captures: Vec<SelectorCapture>,
}

impl PageCapture {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            captures: Vec::new(),
        }
    }

    /// Record text captures for a selector.
    pub fn with_text(mut self, selector: &str, values: &[&str]) -> Self {
        self.captures.push(SelectorCapture {
            selector: selector.to_string(),
            attribute: None,
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    /// Record attribute captures for a selector.
    pub fn with_attribute(mut self, selector: &str, attribute: &str, values: &[&str]) -> Self {
        self.captures.push(SelectorCapture {
            selector: selector.to_string(),
            attribute: Some(attribute.to_string()),
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    pub fn from_json(content: &str) -> Result<Self, LabelError> {
        serde_json::from_str(content).map_err(|source| LabelError::Json {
            context: "page capture".into(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, LabelError> {
        let content = std::fs::read_to_string(path).map_err(|source| LabelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

fn normalize_attribute(attribute: Option<&str>) -> Option<&str> {
    match attribute {
        None | Some("") | Some("textContent") => None,
        Some(a) => Some(a),
    }
}

impl CaptureSource for PageCapture {
    fn capture(&self, selector: &str, attribute: Option<&str>) -> Vec<String> {
        let wanted = normalize_attribute(attribute);
        self.captures
            .iter()
            .find(|c| c.selector == selector && normalize_attribute(c.attribute.as_deref()) == wanted)
            .map(|c| c.values.clone())
            .unwrap_or_default()
    }
}
