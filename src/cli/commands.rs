use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::catalog::catalog_model::Catalog;
use crate::catalog::store::load_catalog;
use crate::cli::config::{AppConfig, resolve_catalog_path, resolve_webhook};
use crate::mapping::capture::PageCapture;
use crate::print_label;
use crate::report::console::{format_label_preview, format_resolved_variables};
use crate::resolve_page;
use crate::select_data_source;
use crate::source::url_pattern::find_matching_data_source;
use crate::trace::logger::PrintLog;
use crate::webhook::sender::HttpWebhookSender;

fn open_catalog(cli_catalog: Option<&str>, config: &AppConfig) -> Result<Catalog, Box<dyn std::error::Error>> {
    let path = resolve_catalog_path(cli_catalog, config);
    Ok(load_catalog(Path::new(&path))?)
}

// ============================================================================
// match subcommand
// ============================================================================

/// Print the data source matching `url`. Returns whether one matched.
pub fn cmd_match(
    url: &str,
    cli_catalog: Option<&str>,
    config: &AppConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    let catalog = open_catalog(cli_catalog, config)?;

    match find_matching_data_source(url, &catalog.data_sources) {
        Some(ds) => {
            println!("[{}] {} ({})", ds.id, ds.name, ds.url_pattern);
            Ok(true)
        }
        None => {
            println!("No data source matches {}", url);
            Ok(false)
        }
    }
}

// ============================================================================
// evaluate subcommand
// ============================================================================

pub fn cmd_evaluate(
    captures_path: &str,
    data_source_id: Option<i64>,
    format: &str,
    cli_catalog: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(cli_catalog, config)?;
    let captures = PageCapture::load(Path::new(captures_path))?;
    let data_source = select_data_source(&catalog, data_source_id, &captures.url)?;

    if verbose > 0 {
        eprintln!(
            "Evaluating {} mappings of '{}'...",
            data_source.variable_mappings.len(),
            data_source.name
        );
    }

    let resolved = resolve_page(&data_source, &captures);

    let output = match format {
        "json" => serde_json::to_string_pretty(&resolved)? + "\n",
        _ => format_resolved_variables(&resolved),
    };
    print!("{}", output);
    Ok(())
}

// ============================================================================
// print subcommand
// ============================================================================

pub fn cmd_print(
    captures_path: &str,
    data_source_id: Option<i64>,
    layout_id: Option<i64>,
    format: &str,
    output: Option<&str>,
    no_webhook: bool,
    cli_catalog: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(cli_catalog, config)?;
    let captures = PageCapture::load(Path::new(captures_path))?;

    let webhook = if no_webhook {
        None
    } else {
        resolve_webhook(config, catalog.post_print_webhook.as_ref())
    };
    let sender = HttpWebhookSender::new(Duration::from_secs(config.http.timeout_secs))?;
    let print_log = match &config.print_log {
        Some(path) => PrintLog::open(Path::new(path)).unwrap_or_else(|e| {
            warn!(error = %e, "print log disabled");
            PrintLog::disabled()
        }),
        None => PrintLog::disabled(),
    };

    let outcome = print_label(
        &catalog,
        &captures,
        &captures.url,
        data_source_id,
        layout_id,
        webhook,
        &sender,
        &print_log,
    )?;

    let output_content = match format {
        "json" => serde_json::to_string_pretty(&outcome.payload)? + "\n",
        _ => format!(
            "{}\n{}",
            format_label_preview(&outcome.payload),
            format_resolved_variables(&outcome.resolved)
        ),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// catalog subcommand
// ============================================================================

pub fn cmd_catalog(
    cli_catalog: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(cli_catalog, config)?;
    print!("{}", format_catalog_summary(&catalog));
    Ok(())
}

/// One section per record kind, one line per record.
pub fn format_catalog_summary(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str(&format!("Layouts ({}):\n", catalog.layouts.len()));
    for layout in &catalog.layouts {
        out.push_str(&format!(
            "  [{}] {} ({} variables, {} elements, format {})\n",
            layout.id,
            layout.name,
            layout.variables.len(),
            layout.elements.len(),
            layout.label_format_id
        ));
    }

    out.push_str(&format!("Label formats ({}):\n", catalog.label_formats.len()));
    for format in &catalog.label_formats {
        out.push_str(&format!(
            "  [{}] {}: {}x{} px\n",
            format.id, format.name, format.width_px, format.height_px
        ));
    }

    out.push_str(&format!("Data sources ({}):\n", catalog.data_sources.len()));
    for ds in &catalog.data_sources {
        out.push_str(&format!(
            "  [{}] {}: {} ({} mappings)\n",
            ds.id,
            ds.name,
            ds.url_pattern,
            ds.variable_mappings.len()
        ));
    }

    match &catalog.post_print_webhook {
        Some(w) if w.is_enabled() => {
            out.push_str(&format!("Webhook: {} {}\n", w.method.as_str(), w.url))
        }
        _ => out.push_str("Webhook: none\n"),
    }

    out
}
