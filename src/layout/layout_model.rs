use serde::{Deserialize, Serialize};

// ============================================================================
// Layout model: label templates and the elements drawn on them
// ============================================================================

/// Conceptual variable a layout expects a data source to provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutVariable {
    /// Unique across the layout
    pub key: String,

    /// Human readable name for editors
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub multiple: bool,
}

impl LayoutVariable {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: None,
            multiple: false,
        }
    }
}

/// What an element draws. Unrecognised tags are kept verbatim in `Other` and
/// handled like text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    Text,
    QrCode,
    Image,
    Shape,
    Other(String),
}

impl ElementType {
    pub fn as_str(&self) -> &str {
        match self {
            ElementType::Text => "text",
            ElementType::QrCode => "qrcode",
            ElementType::Image => "image",
            ElementType::Shape => "shape",
            ElementType::Other(tag) => tag,
        }
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => ElementType::Text,
            "qrcode" => ElementType::QrCode,
            "image" => ElementType::Image,
            "shape" => ElementType::Shape,
            _ => ElementType::Other(tag),
        }
    }
}

impl From<ElementType> for String {
    fn from(element_type: ElementType) -> Self {
        element_type.as_str().to_string()
    }
}

/// Reference from an element to a variable, plus presentation-only overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicBinding {
    pub variable_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_suffix: Option<String>,

    #[serde(default)]
    pub override_trim_whitespace: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_font_size: Option<f64>,
}

impl DynamicBinding {
    pub fn new(variable_key: &str) -> Self {
        Self {
            variable_key: variable_key.to_string(),
            override_prefix: None,
            override_suffix: None,
            override_trim_whitespace: false,
            override_font_size: None,
        }
    }
}

/// Element content, tagged by `mode`. A binding exists exactly when the
/// element is dynamic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ElementContent {
    Static {
        #[serde(rename = "staticContent", default, skip_serializing_if = "Option::is_none")]
        static_content: Option<String>,
    },
    Dynamic {
        #[serde(rename = "dynamicBinding")]
        dynamic_binding: DynamicBinding,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementMode {
    Static,
    Dynamic,
}

impl ElementContent {
    pub fn mode(&self) -> ElementMode {
        match self {
            ElementContent::Static { .. } => ElementMode::Static,
            ElementContent::Dynamic { .. } => ElementMode::Dynamic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawLayoutElement")]
pub struct LayoutElement {
    pub id: i64,
    pub name: String,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,

    #[serde(default)]
    pub rotation: Option<f64>,

    #[serde(default)]
    pub font_size: Option<f64>,

    #[serde(flatten)]
    pub content: ElementContent,
}

/// Stored element shape, before `mode` and the binding are reconciled.
///
/// A missing mode reads as static. A dynamic element stored without a binding
/// keeps its mode and binds to no variable, so it displays nothing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayoutElement {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    element_type: ElementType,
    position_x: f64,
    position_y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation: Option<f64>,
    #[serde(default)]
    font_size: Option<f64>,
    #[serde(default)]
    mode: Option<ElementMode>,
    #[serde(default)]
    static_content: Option<String>,
    #[serde(default)]
    dynamic_binding: Option<DynamicBinding>,
}

impl From<RawLayoutElement> for LayoutElement {
    fn from(raw: RawLayoutElement) -> Self {
        let content = match (raw.mode, raw.dynamic_binding) {
            (Some(ElementMode::Dynamic), Some(binding)) => ElementContent::Dynamic {
                dynamic_binding: binding,
            },
            (Some(ElementMode::Dynamic), None) => ElementContent::Dynamic {
                dynamic_binding: DynamicBinding::new(""),
            },
            _ => ElementContent::Static {
                static_content: raw.static_content,
            },
        };

        LayoutElement {
            id: raw.id,
            name: raw.name,
            element_type: raw.element_type,
            position_x: raw.position_x,
            position_y: raw.position_y,
            width: raw.width,
            height: raw.height,
            rotation: raw.rotation,
            font_size: raw.font_size,
            content,
        }
    }
}

impl LayoutElement {
    /// A text element at the origin showing `static_content`.
    pub fn static_text(id: i64, name: &str, static_content: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            element_type: ElementType::Text,
            position_x: 0.0,
            position_y: 0.0,
            width: 100.0,
            height: 20.0,
            rotation: None,
            font_size: None,
            content: ElementContent::Static {
                static_content: static_content.map(|s| s.to_string()),
            },
        }
    }

    /// A text element at the origin bound to `binding`.
    pub fn dynamic_text(id: i64, name: &str, binding: DynamicBinding) -> Self {
        Self {
            id,
            name: name.to_string(),
            element_type: ElementType::Text,
            position_x: 0.0,
            position_y: 0.0,
            width: 100.0,
            height: 20.0,
            rotation: None,
            font_size: None,
            content: ElementContent::Dynamic {
                dynamic_binding: binding,
            },
        }
    }

    pub fn with_type(mut self, element_type: ElementType) -> Self {
        self.element_type = element_type;
        self
    }

    pub fn at(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.position_x = x;
        self.position_y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn mode(&self) -> ElementMode {
        self.content.mode()
    }

    pub fn binding(&self) -> Option<&DynamicBinding> {
        match &self.content {
            ElementContent::Dynamic { dynamic_binding } => Some(dynamic_binding),
            ElementContent::Static { .. } => None,
        }
    }

    /// Font size after applying the binding's override.
    pub fn effective_font_size(&self) -> Option<f64> {
        self.binding()
            .and_then(|b| b.override_font_size)
            .or(self.font_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelLayout {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub variables: Vec<LayoutVariable>,

    /// Label size/margins this design assumes
    pub label_format_id: i64,

    #[serde(default)]
    pub elements: Vec<LayoutElement>,
}

/// Physical label size and margins, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFormat {
    pub id: i64,
    pub name: String,
    pub width_px: f64,
    pub height_px: f64,
    #[serde(default)]
    pub margin_top_px: f64,
    #[serde(default)]
    pub margin_bottom_px: f64,
    #[serde(default)]
    pub margin_left_px: f64,
    #[serde(default)]
    pub margin_right_px: f64,
    #[serde(default)]
    pub description: Option<String>,
}
