use tracing::{info, warn};

use crate::{
    catalog::catalog_model::Catalog,
    error::LabelError,
    layout::layout_model::LabelLayout,
    mapping::{
        capture::CaptureSource, evaluator::evaluate_mappings, mapping_model::ResolvedVariable,
    },
    payload::{
        builder::{build_label_payload, resolved_map},
        payload_model::LabelPayload,
    },
    source::source_model::DataSource,
    trace::{logger::PrintLog, trace::PrintRecord},
    webhook::{
        sender::{WebhookSender, notify_print},
        webhook_model::{WebhookConfig, WebhookOutcome},
    },
};

pub mod catalog;
pub mod cli;
pub mod error;
pub mod layout;
pub mod mapping;
pub mod payload;
pub mod report;
pub mod source;
pub mod trace;
pub mod webhook;

/// Everything a single print produced.
#[derive(Debug, Clone)]
pub struct PrintOutcome {
    pub data_source: DataSource,
    pub resolved: Vec<ResolvedVariable>,
    pub payload: LabelPayload,
    pub webhook: WebhookOutcome,

    /// Whether the print reached the print log
    pub logged: bool,
}

/// Pick the data source by explicit id, or by matching the page URL.
pub fn select_data_source(
    catalog: &Catalog,
    data_source_id: Option<i64>,
    page_url: &str,
) -> Result<DataSource, LabelError> {
    match data_source_id {
        Some(id) => catalog
            .data_source(id)
            .ok_or(LabelError::DataSourceNotFound(id)),
        None => catalog
            .find_data_source_for_url(page_url)
            .ok_or_else(|| LabelError::NoDataSourceForUrl(page_url.to_string())),
    }
}

/// Pick the layout by explicit id, or the data source's default.
pub fn select_layout(
    catalog: &Catalog,
    data_source: &DataSource,
    layout_id: Option<i64>,
) -> Result<LabelLayout, LabelError> {
    let id = layout_id
        .or(data_source.default_layout_id)
        .ok_or_else(|| LabelError::NoLayoutSelected(data_source.name.clone()))?;
    catalog.layout(id).ok_or(LabelError::LayoutNotFound(id))
}

/// Resolve every variable the data source maps on the captured page.
pub fn resolve_page(data_source: &DataSource, captures: &dyn CaptureSource) -> Vec<ResolvedVariable> {
    evaluate_mappings(&data_source.variable_mappings, captures)
}

/// Run the whole print pipeline: resolve, build the payload, notify, log.
///
/// Webhook and print-log failures are recorded in the outcome; only catalog
/// lookups can fail the print.
pub fn print_label(
    catalog: &Catalog,
    captures: &dyn CaptureSource,
    page_url: &str,
    data_source_id: Option<i64>,
    layout_id: Option<i64>,
    webhook: Option<&WebhookConfig>,
    sender: &dyn WebhookSender,
    print_log: &PrintLog,
) -> Result<PrintOutcome, LabelError> {
    let data_source = select_data_source(catalog, data_source_id, page_url)?;
    let layout = select_layout(catalog, &data_source, layout_id)?;
    let format = catalog.label_format(layout.label_format_id);

    let resolved = resolve_page(&data_source, captures);
    let payload = build_label_payload(
        &layout,
        format.as_ref(),
        &resolved_map(&resolved),
        Some(data_source.id),
        &data_source.name,
    );

    let webhook_outcome = notify_print(sender, webhook, &payload);

    let logged = match record_print(print_log, &payload, &webhook_outcome) {
        Ok(logged) => logged,
        Err(e) => {
            warn!(error = %e, "failed to append to print log");
            false
        }
    };

    info!(
        data_source = %data_source.name,
        layout = %layout.name,
        webhook = ?webhook_outcome,
        logged,
        "label printed"
    );

    Ok(PrintOutcome {
        data_source,
        resolved,
        payload,
        webhook: webhook_outcome,
        logged,
    })
}

fn record_print(
    print_log: &PrintLog,
    payload: &LabelPayload,
    webhook: &WebhookOutcome,
) -> Result<bool, LabelError> {
    if !print_log.is_enabled() {
        return Ok(false);
    }
    let json = payload.to_json().map_err(|source| LabelError::Json {
        context: "print record".into(),
        source,
    })?;
    print_log.append(&PrintRecord::now(payload, &json).with_webhook(webhook.clone()))
}
