use crate::layout::layout_model::ElementType;
use crate::mapping::mapping_model::{MappingStatus, ResolvedVariable};
use crate::payload::payload_model::{LabelPayload, PayloadElement};

// ============================================================================
// Console reporter: text rendering of a print for the terminal
// ============================================================================

/// Format a printed label for terminal output.
///
/// Produces output like:
/// ```text
/// === Label: Asset Snapshot (62 x 29 mm) ===
/// Data source: Jira Asset List
///
///   [1] Asset Name     Laptop 42
///   [4] QR             [qr] https://jira.example.com/asset/42
///
/// === Printed at 2024-05-01T12:00:00.000Z ===
/// ```
pub fn format_label_preview(payload: &LabelPayload) -> String {
    let mut out = String::new();

    let format_name = payload
        .format
        .as_ref()
        .map(|f| format!(" ({})", f.name))
        .unwrap_or_default();
    out.push_str(&format!("=== Label: {}{} ===\n", payload.layout.name, format_name));
    out.push_str(&format!("Data source: {}\n\n", payload.data_source_name));

    let name_width = payload
        .elements
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    for element in &payload.elements {
        out.push_str(&format!(
            "  [{}] {:<width$}  {}\n",
            element.id,
            element.name,
            render_element(element),
            width = name_width
        ));
    }

    out.push_str(&format!("\n=== Printed at {} ===\n", payload.printed_at));
    out
}

/// What the canvas would draw for one element, by element type.
pub fn render_element(element: &PayloadElement) -> String {
    match element.element_type {
        ElementType::Text => render_text(&element.value),
        ElementType::QrCode => render_qr_code(&element.value),
        ElementType::Image => render_image(&element.value),
        ElementType::Shape => render_shape(),
        ElementType::Other(_) => render_text(&element.value),
    }
}

fn render_text(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// An empty QR value still produces a code, of a single space.
fn render_qr_code(value: &str) -> String {
    let encoded = if value.is_empty() { " " } else { value };
    format!("[qr] {}", encoded)
}

fn render_image(value: &str) -> String {
    format!("[image] {}", value)
}

fn render_shape() -> String {
    "[shape]".to_string()
}

/// Format resolved variables as an aligned status table.
///
/// ```text
/// ✓ asset_name  Laptop 42      (1 match)
/// ✗ location                   (missing)
/// ```
pub fn format_resolved_variables(resolved: &[ResolvedVariable]) -> String {
    let key_width = resolved
        .iter()
        .map(|r| r.key.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for variable in resolved {
        let (marker, detail) = match variable.status {
            MappingStatus::Mapped => {
                let count = variable.selector_matches.len();
                let noun = if count == 1 { "match" } else { "matches" };
                ("\u{2713}", format!("({} {})", count, noun))
            }
            MappingStatus::Missing => ("\u{2717}", "(missing)".to_string()),
        };
        out.push_str(&format!(
            "{} {:<width$}  {}  {}\n",
            marker,
            variable.key,
            variable.value,
            detail,
            width = key_width
        ));
    }

    let mapped = resolved.iter().filter(|r| r.is_mapped()).count();
    out.push_str(&format!(
        "\n=== {} mapped, {} missing ({} total) ===\n",
        mapped,
        resolved.len() - mapped,
        resolved.len()
    ));
    out
}
