use chrono::{TimeZone, Utc};

use label_sorcerer::catalog::catalog_model::Catalog;
use label_sorcerer::layout::binding::ResolvedMap;
use label_sorcerer::layout::layout_model::{
    DynamicBinding, ElementType, LabelFormat, LabelLayout, LayoutElement, LayoutVariable,
};
use label_sorcerer::mapping::capture::PageCapture;
use label_sorcerer::mapping::mapping_model::VariableMapping;
use label_sorcerer::payload::builder::build_label_payload_at;
use label_sorcerer::payload::payload_model::LabelPayload;
use label_sorcerer::source::source_model::DataSource;

pub fn captures(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn name_mapping() -> VariableMapping {
    VariableMapping {
        trim_whitespace: true,
        prefix: Some("Name: ".into()),
        suffix: Some("!".into()),
        regex_pattern: Some(r"NAME-(\w+)".into()),
        regex_match_index: Some(1),
        ..VariableMapping::new("asset_name", ".asset-name")
    }
}

pub fn resolved(pairs: &[(&str, &str)]) -> ResolvedMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn wide_format() -> LabelFormat {
    LabelFormat {
        id: 1,
        name: "62 x 29 mm".into(),
        width_px: 620.0,
        height_px: 290.0,
        margin_top_px: 10.0,
        margin_bottom_px: 10.0,
        margin_left_px: 10.0,
        margin_right_px: 10.0,
        description: None,
    }
}

/// Title, SKU (dynamic, with overrides), QR code of the SKU, static footer.
pub fn asset_layout() -> LabelLayout {
    let sku_binding = DynamicBinding {
        override_prefix: Some("SKU ".into()),
        override_trim_whitespace: true,
        override_font_size: Some(20.0),
        ..DynamicBinding::new("sku")
    };

    LabelLayout {
        id: 7,
        name: "Asset Tag".into(),
        label_format_id: 1,
        variables: vec![
            LayoutVariable::new("title", "Title"),
            LayoutVariable::new("sku", "SKU"),
        ],
        elements: vec![
            LayoutElement::dynamic_text(1, "Title", DynamicBinding::new("title"))
                .at(10.0, 10.0, 300.0, 30.0)
                .with_font_size(18.0),
            LayoutElement::dynamic_text(2, "SKU", sku_binding)
                .at(10.0, 50.0, 200.0, 24.0)
                .with_font_size(12.0),
            LayoutElement::dynamic_text(3, "QR", DynamicBinding::new("sku"))
                .with_type(ElementType::QrCode)
                .at(400.0, 10.0, 120.0, 120.0),
            LayoutElement::static_text(4, "Footer", Some("Property of ACME")),
        ],
    }
}

/// Payload of `asset_layout` printed at 2024-05-01T12:00:00Z.
pub fn fixed_payload() -> LabelPayload {
    build_label_payload_at(
        &asset_layout(),
        Some(&wide_format()),
        &resolved(&[("title", "Laptop"), ("sku", " 42 ")]),
        Some(3),
        "Inventory",
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    )
}

pub fn inventory_source() -> DataSource {
    DataSource {
        id: 3,
        name: "Inventory".into(),
        url_pattern: "https://inventory.example.com/items/*".into(),
        default_layout_id: Some(7),
        variable_mappings: vec![
            VariableMapping {
                trim_whitespace: true,
                ..VariableMapping::new("title", "h1.item-title")
            },
            VariableMapping {
                attribute_name: Some("data-sku".into()),
                ..VariableMapping::new("sku", "[data-sku]")
            },
        ],
    }
}

pub fn inventory_catalog() -> Catalog {
    let mut catalog = Catalog::empty();
    catalog.save_label_format(wide_format());
    catalog.save_layout(asset_layout());
    catalog.save_data_source(inventory_source());
    catalog
}

pub fn inventory_page() -> PageCapture {
    PageCapture::new("https://inventory.example.com/items/42")
        .with_text("h1.item-title", &["  Laptop  "])
        .with_attribute("[data-sku]", "data-sku", &["42"])
}
