use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::catalog::store::DEFAULT_CATALOG_PATH;
use crate::webhook::sender::DEFAULT_TIMEOUT_SECS;
use crate::webhook::webhook_model::WebhookConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "label-sorcerer",
    version,
    about = "Resolve page captures into printable labels and post-print webhooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: label-sorcerer.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the catalog of layouts, formats and data sources
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which data source applies to a URL
    Match {
        /// Page URL to match against data source patterns
        #[arg(long)]
        url: String,
    },

    /// Resolve a data source's variables from a capture file
    Evaluate {
        /// JSON file with the page captures
        #[arg(long)]
        captures: String,

        /// Data source id (default: matched from the capture URL)
        #[arg(long)]
        data_source: Option<i64>,

        /// Output format: table or json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Resolve, build the label payload and send the post-print webhook
    Print {
        /// JSON file with the page captures
        #[arg(long)]
        captures: String,

        /// Data source id (default: matched from the capture URL)
        #[arg(long)]
        data_source: Option<i64>,

        /// Layout id (default: the data source's default layout)
        #[arg(long)]
        layout: Option<i64>,

        /// Output format: preview or json
        #[arg(long, default_value = "preview")]
        format: String,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Skip the post-print webhook
        #[arg(long, default_value_t = false)]
        no_webhook: bool,
    },

    /// Summarize the catalog
    Catalog,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `label-sorcerer.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog_path: Option<String>,

    /// JSONL file every print is appended to
    pub print_log: Option<String>,

    /// Overrides the catalog's post-print webhook
    pub webhook: Option<WebhookConfig>,

    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Serde default helpers
fn default_timeout() -> u64 { DEFAULT_TIMEOUT_SECS }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("label-sorcerer.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config file > catalog)
// ============================================================================

pub fn resolve_catalog_path(cli_catalog: Option<&str>, config: &AppConfig) -> String {
    cli_catalog
        .or(config.catalog_path.as_deref())
        .unwrap_or(DEFAULT_CATALOG_PATH)
        .to_string()
}

/// The webhook to use: the config file's, else the catalog's.
pub fn resolve_webhook<'a>(
    config: &'a AppConfig,
    catalog_webhook: Option<&'a WebhookConfig>,
) -> Option<&'a WebhookConfig> {
    config.webhook.as_ref().or(catalog_webhook)
}

/// Default `tracing` filter for a `-v` count; `RUST_LOG` takes precedence.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
