//! Command-line arguments for the stock tool server.
use clap::Parser;
use stock_common::net::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use stock_common::tickers::DEFAULT_SYMBOL;
use stock_common::tool::QUOTE_TOOL;

/// Invoke one tool against the live provider and print the JSON result.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Tool to invoke.
    #[clap(long, default_value = QUOTE_TOOL)]
    pub tool: String,

    /// Ticker symbol passed as the `symbol` argument.
    #[clap(long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Period token (`1d`, `5d`, `1mo`, `3mo`, `6mo`, `1y`, `2y`, `5y`, `10y`, `ytd`, `max`).
    #[clap(long)]
    pub period: Option<String>,

    /// Interval token (`1m`, `5m`, `15m`, `30m`, `1h`, `1d`, `1wk`, `1mo`).
    #[clap(long)]
    pub interval: Option<String>,

    /// Print the registered tool descriptors and exit.
    #[clap(long)]
    pub list_tools: bool,

    /// Chart API endpoint.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Provider request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}
