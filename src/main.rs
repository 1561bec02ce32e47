use clap::Parser;
use label_sorcerer::cli::commands::{cmd_catalog, cmd_evaluate, cmd_match, cmd_print};
use label_sorcerer::cli::config::{Cli, Commands, load_config, log_filter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());
    let catalog = cli.catalog.as_deref();

    match cli.command {
        Commands::Match { url } => {
            if !cmd_match(&url, catalog, &config)? {
                std::process::exit(1);
            }
        }
        Commands::Evaluate {
            captures,
            data_source,
            format,
        } => {
            cmd_evaluate(&captures, data_source, &format, catalog, &config, cli.verbose)?;
        }
        Commands::Print {
            captures,
            data_source,
            layout,
            format,
            output,
            no_webhook,
        } => {
            cmd_print(
                &captures,
                data_source,
                layout,
                &format,
                output.as_deref(),
                no_webhook,
                catalog,
                &config,
            )?;
        }
        Commands::Catalog => {
            cmd_catalog(catalog, &config)?;
        }
    }

    Ok(())
}
