//! CLI entry point - the composition root.
//!
//! Configuration is resolved here, the navigator is wired via bootstrap, and
//! command dispatch routes to handlers.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wayfinder_cli::handlers::{listen, rooms, route};
use wayfinder_cli::{Cli, CliConfig, CliContext, CliError, Commands};
use wayfinder_core::UnsupportedRecognizer;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli).map_err(|e| CliError::Config(format!("{e:#}")))?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Rooms { filter, floor } => {
            let mut ctx = CliContext::bootstrap(&config, Arc::new(UnsupportedRecognizer))?;
            rooms::execute(&mut ctx, filter.as_deref(), floor, &mut stdout).await
        }
        Commands::Route { from, to, svg } => {
            let mut ctx = CliContext::bootstrap(&config, Arc::new(UnsupportedRecognizer))?;
            route::execute(&mut ctx, &from, &to, svg.as_deref(), &mut stdout).await
        }
        Commands::Listen {
            field,
            heard,
            deny_microphone,
        } => {
            let recognizer = listen::recognizer_for(&heard, deny_microphone);
            let mut ctx = CliContext::bootstrap(&config, recognizer)?;
            listen::execute(&mut ctx, field, &mut stdout).await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before clap reads WAYFINDER_API_BASE_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.needs_report() {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
