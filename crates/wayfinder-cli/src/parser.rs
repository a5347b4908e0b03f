//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the wayfinder navigation assistant.
#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "Find your way between rooms on the floor plan")]
#[command(version)]
pub struct Cli {
    /// Base URL of the navigation backend
    #[arg(long = "api-base-url", env = "WAYFINDER_API_BASE_URL", global = true)]
    pub api_base_url: Option<String>,

    /// JSON file with navigator settings (grid, surface, timeouts, speech)
    #[arg(long = "settings", global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
