//! Stock tool server, standalone mode.
//!
//! Builds the `StockServer` against the live Yahoo Finance provider, invokes a single tool
//! and prints its JSON result (record fields on success, `{"symbol", "error"}` otherwise).
//! Useful for checking the tool contract without going through the agent.
//!
//! Usage example (CLI):
//! ```bash
//! stock_server --tool get_historical_data --symbol MSFT --period 3mo --interval 1wk
//! stock_server --list-tools
//! ```
mod args;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::info;
use serde_json::Value;
use stock_common::tool::result_to_json;
use stock_common::{Arguments, Result};
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

    if args.list_tools {
        println!("{}", serde_json::to_string_pretty(&server.list_tools())?);
        return Ok(());
    }

    let arguments = build_arguments(&args);
    info!("[{}] Calling {}({})", server.name(), args.tool, Value::Object(arguments.clone()));
    let result = server.call_tool(&args.tool, &arguments);
    println!("{}", serde_json::to_string_pretty(&result_to_json(&result)?)?);
    Ok(())
}

fn build_arguments(args: &Args) -> Arguments {
    let mut arguments = Arguments::new();
    arguments.insert("symbol".to_string(), Value::from(args.symbol.trim()));
    if let Some(period) = &args.period {
        arguments.insert("period".to_string(), Value::from(period.trim()));
    }
    if let Some(interval) = &args.interval {
        arguments.insert("interval".to_string(), Value::from(interval.trim()));
    }
    arguments
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
