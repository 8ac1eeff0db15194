//! `get_stock_quote`: the most recent trading day for a symbol.
use std::sync::Arc;

use log::warn;
use serde::Deserialize;
use stock_common::{
    Arguments, Interval, Period, QuoteRecord, ToolError, ToolInfo, ToolOutput, ToolResult,
};

use super::{Tool, decode, default_symbol, normalize_symbol};
use crate::provider::MarketDataProvider;

#[derive(Deserialize)]
struct QuoteArgs {
    #[serde(default = "default_symbol")]
    symbol: String,
}

/// Fetches one day of bars and reports the latest one.
pub struct QuoteTool {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteTool {
    /// Create a quote tool backed by `provider`.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        QuoteTool { provider }
    }
}

impl Tool for QuoteTool {
    fn call(&self, arguments: &Arguments) -> ToolResult {
        let args: QuoteArgs = decode(arguments)?;
        let symbol = normalize_symbol(&args.symbol);

        let bars = self
            .provider
            .fetch(&symbol, Period::Day1, Interval::Day1)
            .map_err(|source| {
                warn!("Quote fetch for {} failed: {}", symbol, source);
                ToolError::Provider {
                    symbol: symbol.clone(),
                    source,
                }
            })?;

        let latest = bars.last().ok_or_else(|| ToolError::NoData {
            symbol: symbol.clone(),
            scope: String::new(),
        })?;

        Ok(ToolOutput::Quote(QuoteRecord::from_bar(&symbol, latest)))
    }

    fn describe(&self) -> Option<ToolInfo> {
        Some(ToolInfo::quote())
    }
}
