//! syncdeps - propose version corrections for a go.sum against a baseline

use clap::Parser;
use std::process::ExitCode;
use syncdeps::cli::CliArgs;
use syncdeps::config::{FileConfig, RunConfig};
use syncdeps::orchestrator::Orchestrator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when neither RUST_LOG nor a verbosity flag is given
const DEFAULT_LOG_FILTER: &str = "syncdeps=warn";

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    // Run the main logic and handle errors
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber; stdout is reserved for output
fn init_tracing(args: &CliArgs) {
    // Verbosity flags override RUST_LOG
    let filter = match args.log_filter() {
        Some(forced) => EnvFilter::new(forced),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    // Print version info in verbose mode
    tracing::debug!("syncdeps v{}", env!("CARGO_PKG_VERSION"));

    // Load the config file and merge it with CLI options
    let file_config = FileConfig::load(args.config.as_deref())?;
    let config = RunConfig::resolve(&args, file_config)?;
    tracing::debug!(
        baseline = %config.baseline.display(),
        target = %config.target.display(),
        sink = ?config.sink,
        format = ?config.format,
        "resolved configuration"
    );

    // Create and run the orchestrator
    let orchestrator = Orchestrator::new(config);
    let corrections = orchestrator.run()?;

    // Output results
    orchestrator.emit(&corrections)?;

    Ok(())
}
