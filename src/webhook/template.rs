use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::payload::payload_model::LabelPayload;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").expect("placeholder pattern is valid"));

/// Token that expands to the whole JSON payload.
const PAYLOAD_TOKEN: &str = "payload";

pub fn has_placeholder(template: &str) -> bool {
    PLACEHOLDER.is_match(template)
}

/// Expand `{{ token }}` placeholders in a body template.
pub fn interpolate(template: &str, payload: &LabelPayload, payload_json: &str) -> String {
    let value = payload.to_value().unwrap_or_default();
    interpolate_value(template, &value, payload_json, |s| Cow::Borrowed(s))
}

/// Expand placeholders in a URL template, percent-encoding each substitution.
pub fn interpolate_url(template: &str, payload: &LabelPayload, payload_json: &str) -> String {
    let value = payload.to_value().unwrap_or_default();
    interpolate_value(template, &value, payload_json, urlencoding::encode)
}

/// Expand placeholders against an already-serialized payload.
///
/// `{{payload}}` becomes `payload_json`. Any other token is a dot path into
/// `payload`, with an optional leading `payload.`. Paths that run into a
/// missing key, a null or a scalar expand to the empty string.
pub fn interpolate_value<F>(
    template: &str,
    payload: &Value,
    payload_json: &str,
    encode: F,
) -> String
where
    F: for<'s> Fn(&'s str) -> Cow<'s, str>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let token = caps.get(1).map_or("", |m| m.as_str()).trim();
            if token == PAYLOAD_TOKEN {
                return encode(payload_json).into_owned();
            }
            let path = token.strip_prefix("payload.").unwrap_or(token);
            let resolved = lookup_path(payload, path)
                .map(stringify)
                .unwrap_or_default();
            encode(&resolved).into_owned()
        })
        .into_owned()
}

/// Walk `path` through objects (and arrays, by numeric segment).
pub fn lookup_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
