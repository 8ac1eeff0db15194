//! Command-line arguments for the stock agent.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use stock_common::net::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Answer this request and exit instead of starting the interactive loop.
    /// May be given several times.
    #[clap(long)]
    pub query: Vec<String>,

    /// Chart API endpoint used by the data provider.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Provider request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}
