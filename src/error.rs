use thiserror::Error;

/// Errors raised outside the pure pipeline: loading files, talking HTTP,
/// and looking up catalog entries that do not exist.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        source: serde_yaml::Error,
    },

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("layout {0} not found")]
    LayoutNotFound(i64),

    #[error("data source {0} not found")]
    DataSourceNotFound(i64),

    #[error("no data source matches URL '{0}'")]
    NoDataSourceForUrl(String),

    #[error("no layout selected for data source '{0}' and it has no default layout")]
    NoLayoutSelected(String),
}
