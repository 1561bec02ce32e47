use crate::layout::layout_model::{
    DynamicBinding, LabelFormat, LabelLayout, LayoutElement, LayoutVariable,
};
use crate::mapping::mapping_model::VariableMapping;
use crate::source::source_model::DataSource;

// ============================================================================
// Sample catalog: what a fresh install starts with
// ============================================================================

pub fn sample_formats() -> Vec<LabelFormat> {
    vec![
        LabelFormat {
            id: 1,
            name: "62 x 29 mm".into(),
            width_px: 620.0,
            height_px: 290.0,
            margin_top_px: 10.0,
            margin_bottom_px: 10.0,
            margin_left_px: 10.0,
            margin_right_px: 10.0,
            description: Some("Sample wide label".into()),
        },
        LabelFormat {
            id: 2,
            name: "57 x 32 mm".into(),
            width_px: 570.0,
            height_px: 320.0,
            margin_top_px: 10.0,
            margin_bottom_px: 10.0,
            margin_left_px: 10.0,
            margin_right_px: 10.0,
            description: Some("Compact QR label".into()),
        },
    ]
}

pub fn sample_layouts() -> Vec<LabelLayout> {
    vec![LabelLayout {
        id: 1,
        name: "Asset Snapshot".into(),
        label_format_id: 1,
        variables: vec![
            LayoutVariable::new("asset_name", "Asset Name"),
            LayoutVariable::new("asset_key", "Asset Key"),
            LayoutVariable::new("location", "Location"),
        ],
        elements: vec![
            LayoutElement::dynamic_text(1, "Asset Name", DynamicBinding::new("asset_name"))
                .at(12.0, 12.0, 220.0, 32.0)
                .with_font_size(18.0),
            LayoutElement::dynamic_text(2, "Asset Key", DynamicBinding::new("asset_key"))
                .at(12.0, 52.0, 200.0, 26.0)
                .with_font_size(14.0),
            LayoutElement::dynamic_text(3, "Location", DynamicBinding::new("location"))
                .at(12.0, 84.0, 200.0, 24.0)
                .with_font_size(12.0),
        ],
    }]
}

fn trimmed(key: &str, selector: &str) -> VariableMapping {
    VariableMapping {
        trim_whitespace: true,
        ..VariableMapping::new(key, selector)
    }
}

pub fn sample_data_sources() -> Vec<DataSource> {
    vec![
        DataSource {
            id: 1,
            name: "Jira Asset List".into(),
            url_pattern: "https://jira.example.com/assets/*".into(),
            default_layout_id: Some(1),
            variable_mappings: vec![
                trimmed("asset_name", ".asset-row .asset-name"),
                trimmed("asset_key", ".asset-row .asset-key"),
                trimmed("location", ".asset-row .asset-location"),
            ],
        },
        DataSource {
            id: 2,
            name: "Jira Asset Detail".into(),
            url_pattern: "https://jira.example.com/asset/*".into(),
            default_layout_id: Some(1),
            variable_mappings: vec![
                trimmed("asset_name", "h1.asset-title"),
                trimmed("asset_key", "[data-asset-key]"),
                trimmed("location", ".asset-location-detail"),
            ],
        },
    ]
}
