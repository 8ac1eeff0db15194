//! Stock Agent: a terminal front-end that answers free-text stock requests such as
//! `quote MSFT` or `NVDA 1 year historical data`. It builds the in-process stock tool
//! server once, then either answers the `--query` arguments or runs an interactive loop
//! until `exit`/`quit` or end of input.
//!
//! Usage example (CLI):
//! ```bash
//! stock_agent
//! stock_agent --query "TSLA past 5 days" --query "quote AAPL"
//! RUST_LOG=debug stock_agent --timeout-secs 5
//! ```
#![warn(missing_docs)]
mod args;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::info;
use stock_agent::StockAgent;
use stock_agent::session;
use stock_common::Result;
use stock_server::{StockServer, YahooConfig, YahooProvider};

use crate::args::Args;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let provider = YahooProvider::new(YahooConfig {
        base_url: args.base_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    })?;
    let server = StockServer::new(Arc::new(provider));
    let agent = StockAgent::new(&server);
    info!("Agent connected to {}", server.name());

    if !args.query.is_empty() {
        for query in &args.query {
            println!("\nQuerying: '{}'", query);
            println!("Result:\n{}", agent.handle_request(query));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run(&agent, stdin.lock(), &mut stdout)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
