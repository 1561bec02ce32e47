use serde::{Deserialize, Serialize};

use crate::catalog::samples::{sample_data_sources, sample_formats, sample_layouts};
use crate::error::LabelError;
use crate::layout::layout_model::{LabelFormat, LabelLayout, LayoutElement, LayoutVariable};
use crate::source::source_model::DataSource;
use crate::source::url_pattern::find_matching_data_source;
use crate::webhook::webhook_model::WebhookConfig;

/// Anything stored in the catalog under an auto-incremented numeric id.
pub trait CatalogRecord: Clone {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

impl CatalogRecord for LabelLayout {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl CatalogRecord for LabelFormat {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl CatalogRecord for DataSource {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// The persisted configuration: layouts, formats, data sources and the
/// post-print webhook.
///
/// Deserializing fills any missing section with the sample catalog and any
/// missing id counter with `len + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawCatalog")]
pub struct Catalog {
    pub layouts: Vec<LabelLayout>,
    pub label_formats: Vec<LabelFormat>,
    pub data_sources: Vec<DataSource>,
    pub next_layout_id: i64,
    pub next_label_format_id: i64,
    pub next_data_source_id: i64,
    pub post_print_webhook: Option<WebhookConfig>,
}

/// On-disk shape before defaults are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    layouts: Option<Vec<LabelLayout>>,
    label_formats: Option<Vec<LabelFormat>>,
    data_sources: Option<Vec<DataSource>>,
    next_layout_id: Option<i64>,
    next_label_format_id: Option<i64>,
    next_data_source_id: Option<i64>,
    post_print_webhook: Option<WebhookConfig>,
}

impl From<RawCatalog> for Catalog {
    fn from(raw: RawCatalog) -> Self {
        let layouts = raw.layouts.unwrap_or_else(sample_layouts);
        let label_formats = raw.label_formats.unwrap_or_else(sample_formats);
        let data_sources = raw.data_sources.unwrap_or_else(sample_data_sources);
        Catalog {
            next_layout_id: raw.next_layout_id.unwrap_or(layouts.len() as i64 + 1),
            next_label_format_id: raw
                .next_label_format_id
                .unwrap_or(label_formats.len() as i64 + 1),
            next_data_source_id: raw
                .next_data_source_id
                .unwrap_or(data_sources.len() as i64 + 1),
            layouts,
            label_formats,
            data_sources,
            post_print_webhook: raw.post_print_webhook,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::from(RawCatalog::default())
    }
}

/// Insert or replace `record`, assigning a fresh id when it has none.
fn upsert<T: CatalogRecord>(records: &mut Vec<T>, next_id: &mut i64, mut record: T) -> T {
    if record.id() <= 0 {
        record.set_id(*next_id);
        *next_id += 1;
    }

    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(existing) => *existing = record.clone(),
        None => records.push(record.clone()),
    }

    *next_id = (*next_id).max(record.id() + 1);
    record
}

fn remove<T: CatalogRecord>(records: &mut Vec<T>, id: i64) {
    records.retain(|r| r.id() != id);
}

impl Catalog {
    /// A catalog with no records at all, ids starting at 1.
    pub fn empty() -> Self {
        Catalog {
            layouts: Vec::new(),
            label_formats: Vec::new(),
            data_sources: Vec::new(),
            next_layout_id: 1,
            next_label_format_id: 1,
            next_data_source_id: 1,
            post_print_webhook: None,
        }
    }

    // ---- Layouts ----

    pub fn layout(&self, id: i64) -> Option<LabelLayout> {
        self.layouts.iter().find(|l| l.id == id).cloned()
    }

    pub fn save_layout(&mut self, layout: LabelLayout) -> LabelLayout {
        upsert(&mut self.layouts, &mut self.next_layout_id, layout)
    }

    pub fn delete_layout(&mut self, id: i64) {
        remove(&mut self.layouts, id);
    }

    pub fn update_layout_variables(
        &mut self,
        layout_id: i64,
        variables: Vec<LayoutVariable>,
    ) -> Result<LabelLayout, LabelError> {
        let layout = self
            .layouts
            .iter_mut()
            .find(|l| l.id == layout_id)
            .ok_or(LabelError::LayoutNotFound(layout_id))?;
        layout.variables = variables;
        Ok(layout.clone())
    }

    pub fn update_layout_elements(
        &mut self,
        layout_id: i64,
        elements: Vec<LayoutElement>,
    ) -> Result<LabelLayout, LabelError> {
        let layout = self
            .layouts
            .iter_mut()
            .find(|l| l.id == layout_id)
            .ok_or(LabelError::LayoutNotFound(layout_id))?;
        layout.elements = elements;
        Ok(layout.clone())
    }

    // ---- Label formats ----

    pub fn label_format(&self, id: i64) -> Option<LabelFormat> {
        self.label_formats.iter().find(|f| f.id == id).cloned()
    }

    pub fn save_label_format(&mut self, format: LabelFormat) -> LabelFormat {
        upsert(&mut self.label_formats, &mut self.next_label_format_id, format)
    }

    pub fn delete_label_format(&mut self, id: i64) {
        remove(&mut self.label_formats, id);
    }

    // ---- Data sources ----

    pub fn data_source(&self, id: i64) -> Option<DataSource> {
        self.data_sources.iter().find(|d| d.id == id).cloned()
    }

    pub fn save_data_source(&mut self, data_source: DataSource) -> DataSource {
        upsert(&mut self.data_sources, &mut self.next_data_source_id, data_source)
    }

    pub fn delete_data_source(&mut self, id: i64) {
        remove(&mut self.data_sources, id);
    }

    pub fn find_data_source_for_url(&self, url: &str) -> Option<DataSource> {
        find_matching_data_source(url, &self.data_sources).cloned()
    }
}
