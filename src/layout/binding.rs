use std::collections::BTreeMap;

use crate::layout::layout_model::{DynamicBinding, ElementContent, LayoutElement};

/// Variable key → resolved value, as produced by mapping evaluation.
pub type ResolvedMap = BTreeMap<String, String>;

/// What `element` displays given the resolved variables.
///
/// Static elements show their authored text, falling back to the element name.
/// Dynamic elements look up their variable (empty when unresolved) and apply
/// the binding overrides.
pub fn resolve_element_value(element: &LayoutElement, resolved: &ResolvedMap) -> String {
    match &element.content {
        ElementContent::Static { static_content } => static_content
            .clone()
            .unwrap_or_else(|| element.name.clone()),
        ElementContent::Dynamic { dynamic_binding } => {
            apply_binding_overrides(dynamic_binding, resolved)
        }
    }
}

/// Prefix and suffix are applied even to an empty value: the element layer has
/// no notion of a missing match.
fn apply_binding_overrides(binding: &DynamicBinding, resolved: &ResolvedMap) -> String {
    let base = resolved
        .get(&binding.variable_key)
        .map(String::as_str)
        .unwrap_or("");
    let base = if binding.override_trim_whitespace {
        base.trim()
    } else {
        base
    };

    format!(
        "{}{}{}",
        binding.override_prefix.as_deref().unwrap_or(""),
        base,
        binding.override_suffix.as_deref().unwrap_or("")
    )
}
