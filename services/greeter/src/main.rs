//! Greeter CLI
//!
//! Fetches the backend hello greeting once and prints it, or serves it as a
//! welcome page.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use greeter::{load_config, Config, Outcome};
use tracing::Level;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Fetches and renders the backend welcome greeting")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hello endpoint URL (overrides config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Serve the welcome page instead of printing once
    #[arg(long)]
    serve: bool,

    /// Welcome page port (overrides config file)
    #[arg(long)]
    page_port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, endpoint={:?}, serve={}, page_port={:?}, log_level={:?}",
        args.config,
        args.endpoint,
        args.serve,
        args.page_port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(endpoint) = args.endpoint {
        config.request.endpoint = endpoint;
    }
    if args.serve {
        config.page.enabled = true;
    }
    if let Some(page_port) = args.page_port {
        config.page.port = page_port;
    }

    tracing::info!("Contacting backend at {}", config.request.endpoint);

    let code = match greeter::run(config).await? {
        Some(Outcome::Success { .. }) => ExitCode::SUCCESS,
        Some(_) => ExitCode::FAILURE,
        None => {
            tracing::info!("Stopped before the greeting settled");
            ExitCode::FAILURE
        }
    };

    Ok(code)
}
