use std::path::Path;

use tracing::debug;

use crate::catalog::catalog_model::Catalog;
use crate::error::LabelError;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "label-catalog.yaml";

pub fn parse_catalog(content: &str) -> Result<Catalog, LabelError> {
    serde_yaml::from_str(content).map_err(|source| LabelError::Yaml {
        context: "catalog".into(),
        source,
    })
}

/// Load the catalog at `path`. A missing file yields the sample catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, LabelError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_catalog(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "catalog file missing, using sample catalog");
            Ok(Catalog::default())
        }
        Err(source) => Err(LabelError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Write the whole catalog back to `path`.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), LabelError> {
    let yaml = serde_yaml::to_string(catalog).map_err(|source| LabelError::Yaml {
        context: "catalog".into(),
        source,
    })?;
    std::fs::write(path, yaml).map_err(|source| LabelError::Io {
        path: path.display().to_string(),
        source,
    })
}
