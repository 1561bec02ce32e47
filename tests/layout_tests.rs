use label_sorcerer::layout::binding::resolve_element_value;
use label_sorcerer::layout::layout_model::{
    DynamicBinding, ElementContent, ElementMode, ElementType, LabelLayout, LayoutElement,
};

use crate::common::fixtures::{asset_layout, resolved};

mod common;

// =========================================================================
// Static elements
// =========================================================================

#[test]
fn static_element_shows_its_content() {
    let element = LayoutElement::static_text(1, "Footer", Some("Property of ACME"));

    assert_eq!(resolve_element_value(&element, &resolved(&[])), "Property of ACME");
}

#[test]
fn static_element_without_content_shows_its_name() {
    let element = LayoutElement::static_text(1, "Heading", None);

    assert_eq!(resolve_element_value(&element, &resolved(&[])), "Heading");
}

#[test]
fn static_element_ignores_resolved_variables() {
    let element = LayoutElement::static_text(1, "title", Some("Fixed"));

    assert_eq!(
        resolve_element_value(&element, &resolved(&[("title", "Laptop")])),
        "Fixed"
    );
}

// =========================================================================
// Dynamic elements
// =========================================================================

#[test]
fn dynamic_element_shows_the_resolved_value() {
    let element = LayoutElement::dynamic_text(1, "Title", DynamicBinding::new("title"));

    assert_eq!(
        resolve_element_value(&element, &resolved(&[("title", "Laptop")])),
        "Laptop"
    );
}

#[test]
fn dynamic_element_with_unresolved_variable_is_empty() {
    let element = LayoutElement::dynamic_text(1, "Title", DynamicBinding::new("title"));

    assert_eq!(resolve_element_value(&element, &resolved(&[])), "");
}

#[test]
fn overrides_trim_then_wrap() {
    let binding = DynamicBinding {
        override_prefix: Some("[".into()),
        override_suffix: Some("]".into()),
        override_trim_whitespace: true,
        ..DynamicBinding::new("sku")
    };
    let element = LayoutElement::dynamic_text(2, "SKU", binding);

    assert_eq!(resolve_element_value(&element, &resolved(&[("sku", "  42 ")])), "[42]");
}

#[test]
fn overrides_apply_even_to_a_missing_value() {
    let binding = DynamicBinding {
        override_prefix: Some("SKU ".into()),
        override_suffix: Some("!".into()),
        ..DynamicBinding::new("sku")
    };
    let element = LayoutElement::dynamic_text(2, "SKU", binding);

    assert_eq!(resolve_element_value(&element, &resolved(&[])), "SKU !");
}

#[test]
fn whitespace_is_kept_without_trim_override() {
    let element = LayoutElement::dynamic_text(1, "Title", DynamicBinding::new("title"));

    assert_eq!(
        resolve_element_value(&element, &resolved(&[("title", " padded ")])),
        " padded "
    );
}

// =========================================================================
// Element accessors
// =========================================================================

#[test]
fn binding_exists_only_for_dynamic_elements() {
    let layout = asset_layout();

    let title = &layout.elements[0];
    assert_eq!(title.mode(), ElementMode::Dynamic);
    assert_eq!(title.binding().map(|b| b.variable_key.as_str()), Some("title"));

    let footer = &layout.elements[3];
    assert_eq!(footer.mode(), ElementMode::Static);
    assert!(footer.binding().is_none());
}

#[test]
fn font_size_override_wins_over_element_font_size() {
    let layout = asset_layout();

    assert_eq!(layout.elements[0].effective_font_size(), Some(18.0));
    assert_eq!(layout.elements[1].effective_font_size(), Some(20.0));
    assert_eq!(layout.elements[3].effective_font_size(), None);
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn dynamic_element_deserializes_with_mode_tag() {
    let element: LayoutElement = serde_json::from_str(
        r#"{
            "id": 5,
            "name": "Key",
            "type": "qrcode",
            "mode": "dynamic",
            "positionX": 10,
            "positionY": 20,
            "width": 80,
            "height": 80,
            "dynamicBinding": { "variableKey": "asset_key", "overridePrefix": "K-" }
        }"#,
    )
    .unwrap();

    assert_eq!(element.element_type, ElementType::QrCode);
    assert_eq!(element.position_x, 10.0);
    assert_eq!(element.rotation, None);
    let binding = element.binding().unwrap();
    assert_eq!(binding.variable_key, "asset_key");
    assert_eq!(binding.override_prefix.as_deref(), Some("K-"));
    assert!(!binding.override_trim_whitespace);
}

#[test]
fn static_element_deserializes_without_content() {
    let element: LayoutElement = serde_json::from_str(
        r#"{
            "id": 1,
            "name": "Logo",
            "type": "image",
            "mode": "static",
            "positionX": 0,
            "positionY": 0,
            "width": 50,
            "height": 50
        }"#,
    )
    .unwrap();

    assert_eq!(element.element_type, ElementType::Image);
    assert_eq!(
        element.content,
        ElementContent::Static {
            static_content: None
        }
    );
}

#[test]
fn dynamic_element_without_binding_displays_nothing() {
    let element: LayoutElement = serde_json::from_str(
        r#"{
            "id": 1,
            "name": "Unbound",
            "type": "text",
            "mode": "dynamic",
            "staticContent": "ignored",
            "positionX": 0,
            "positionY": 0,
            "width": 50,
            "height": 20
        }"#,
    )
    .unwrap();

    assert_eq!(element.mode(), ElementMode::Dynamic);
    assert_eq!(resolve_element_value(&element, &resolved(&[("title", "Laptop")])), "");
}

#[test]
fn missing_mode_reads_as_static() {
    let element: LayoutElement = serde_json::from_str(
        r#"{
            "id": 2,
            "name": "Legacy",
            "type": "text",
            "staticContent": "Hello",
            "dynamicBinding": { "variableKey": "title" },
            "positionX": 0,
            "positionY": 0,
            "width": 50,
            "height": 20
        }"#,
    )
    .unwrap();

    assert_eq!(element.mode(), ElementMode::Static);
    assert!(element.binding().is_none());
    assert_eq!(resolve_element_value(&element, &resolved(&[("title", "Laptop")])), "Hello");
}

#[test]
fn unknown_element_type_keeps_its_tag() {
    let element: LayoutElement = serde_json::from_str(
        r#"{
            "id": 9,
            "name": "Barcode",
            "type": "barcode",
            "mode": "static",
            "staticContent": "123",
            "positionX": 0,
            "positionY": 0,
            "width": 50,
            "height": 20
        }"#,
    )
    .unwrap();

    assert_eq!(element.element_type, ElementType::Other("barcode".into()));
    assert_eq!(resolve_element_value(&element, &resolved(&[])), "123");

    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json["type"], "barcode");
}

#[test]
fn known_element_types_use_lowercase_tags() {
    assert_eq!(ElementType::from("qrcode".to_string()), ElementType::QrCode);
    assert_eq!(ElementType::QrCode.as_str(), "qrcode");
    assert_eq!(ElementType::Other("barcode".into()).as_str(), "barcode");
}

#[test]
fn element_serializes_with_flat_mode_fields() {
    let element = LayoutElement::dynamic_text(3, "QR", DynamicBinding::new("sku"))
        .with_type(ElementType::QrCode);
    let json = serde_json::to_value(&element).unwrap();

    assert_eq!(json["type"], "qrcode");
    assert_eq!(json["mode"], "dynamic");
    assert_eq!(json["dynamicBinding"]["variableKey"], "sku");
    assert!(json.get("staticContent").is_none());
    assert!(json.get("content").is_none());
}

#[test]
fn layout_survives_yaml() {
    let layout = asset_layout();
    let yaml = serde_yaml::to_string(&layout).unwrap();
    let back: LabelLayout = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(back, layout);
}
