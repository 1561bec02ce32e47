use fancy_regex::Regex;
use tracing::{debug, warn};

use crate::mapping::capture::CaptureSource;
use crate::mapping::mapping_model::{
    MULTI_VALUE_SEPARATOR, MappingEvaluation, MappingStatus, ResolvedVariable, VariableMapping,
};

/// Turn the raw captures for one selector into a single formatted value.
///
/// Empty captures are dropped first. Prefix and suffix are only applied when at
/// least one real capture exists, so an absent field never shows decoration.
pub fn evaluate_mapping(raw_captures: &[String], mapping: &VariableMapping) -> MappingEvaluation {
    let selector_matches: Vec<String> = raw_captures
        .iter()
        .filter(|capture| !capture.is_empty())
        .cloned()
        .collect();
    let has_matches = !selector_matches.is_empty();

    let mut base = if mapping.multiple && selector_matches.len() > 1 {
        selector_matches.join(MULTI_VALUE_SEPARATOR)
    } else {
        selector_matches.first().cloned().unwrap_or_default()
    };

    if let Some(pattern) = mapping.regex_pattern.as_deref().filter(|p| !p.is_empty()) {
        if !base.is_empty() {
            base = apply_regex(&base, pattern, mapping.regex_match_index, &mapping.key);
        }
    }

    let trimmed = if mapping.trim_whitespace {
        base.trim()
    } else {
        base.as_str()
    };

    let value = if has_matches {
        format!(
            "{}{}{}",
            mapping.prefix.as_deref().unwrap_or(""),
            trimmed,
            mapping.suffix.as_deref().unwrap_or("")
        )
    } else {
        String::new()
    };

    let status = if has_matches {
        MappingStatus::Mapped
    } else {
        MappingStatus::Missing
    };

    MappingEvaluation {
        value,
        selector_matches,
        status,
    }
}

/// Run the mapping's regex over `base`.
///
/// Patterns follow browser `RegExp` syntax: lookaround and backreferences are
/// accepted, and `\d`/`\w` only match ASCII. A pattern that fails to compile
/// leaves `base` untouched. A pattern that does not match empties it. An
/// out-of-range group index falls back to the whole match.
fn apply_regex(base: &str, pattern: &str, index: Option<usize>, key: &str) -> String {
    let regex = match Regex::new(&ascii_classes(pattern)) {
        Ok(r) => r,
        Err(e) => {
            warn!(key, pattern, error = %e, "invalid regex pattern, skipping");
            return base.to_string();
        }
    };

    match regex.captures(base) {
        Ok(Some(caps)) => {
            let index = index.unwrap_or(0);
            caps.get(index)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        }
        Ok(None) => String::new(),
        Err(e) => {
            warn!(key, pattern, error = %e, "regex gave up while matching");
            String::new()
        }
    }
}

/// Rewrite `\d`, `\D`, `\w` and `\W` to explicit ASCII classes.
///
/// Inside a bracket class only the positive forms can be spliced in; negated
/// ones are left as written.
pub fn ascii_classes(pattern: &str) -> String {
    const DIGIT: &str = "0-9";
    const WORD: &str = "0-9A-Za-z_";

    let mut out = String::with_capacity(pattern.len() + 16);
    let mut in_class = false;
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('d') if in_class => out.push_str(DIGIT),
                Some('w') if in_class => out.push_str(WORD),
                Some('d') => out.push_str(&format!("[{}]", DIGIT)),
                Some('D') if !in_class => out.push_str(&format!("[^{}]", DIGIT)),
                Some('w') => out.push_str(&format!("[{}]", WORD)),
                Some('W') if !in_class => out.push_str(&format!("[^{}]", WORD)),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Evaluate every mapping of a data source against a page's captures.
pub fn evaluate_mappings(
    mappings: &[VariableMapping],
    source: &dyn CaptureSource,
) -> Vec<ResolvedVariable> {
    mappings
        .iter()
        .map(|mapping| {
            let captures = if mapping.css_selector.is_empty() {
                Vec::new()
            } else {
                source.capture(&mapping.css_selector, mapping.capture_attribute())
            };

            let evaluation = evaluate_mapping(&captures, mapping);
            debug!(
                key = %mapping.key,
                selector = %mapping.css_selector,
                matches = evaluation.selector_matches.len(),
                status = ?evaluation.status,
                "evaluated mapping"
            );
            ResolvedVariable::from_evaluation(&mapping.key, evaluation)
        })
        .collect()
}
