use regex::Regex;

use crate::source::source_model::DataSource;

/// Compile a `*` glob into an anchored regex. Everything other than `*` is
/// matched literally.
pub fn pattern_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("^{}$", body))
}

/// A pattern too large to compile matches nothing.
pub fn matches_url_pattern(url: &str, pattern: &str) -> bool {
    pattern_to_regex(pattern).is_ok_and(|re| re.is_match(url))
}

/// First data source whose pattern matches `url`, in catalog order.
pub fn find_matching_data_source<'a>(url: &str, sources: &'a [DataSource]) -> Option<&'a DataSource> {
    if url.trim().is_empty() {
        return None;
    }
    sources
        .iter()
        .find(|ds| matches_url_pattern(url, &ds.url_pattern))
}
