//! `get_historical_data`: a period/interval series for a symbol.
use std::sync::Arc;

use log::warn;
use serde::Deserialize;
use stock_common::{
    Arguments, HistoricalRecord, Interval, Period, ToolError, ToolInfo, ToolOutput, ToolResult,
};

use super::{Tool, decode, default_symbol, normalize_symbol};
use crate::provider::MarketDataProvider;

#[derive(Deserialize)]
struct HistoricalArgs {
    #[serde(default = "default_symbol")]
    symbol: String,
    #[serde(default)]
    period: Period,
    #[serde(default)]
    interval: Interval,
}

/// Fetches a whole series and normalizes every row.
pub struct HistoricalTool {
    provider: Arc<dyn MarketDataProvider>,
}

impl HistoricalTool {
    /// Create a historical tool backed by `provider`.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        HistoricalTool { provider }
    }
}

impl Tool for HistoricalTool {
    fn call(&self, arguments: &Arguments) -> ToolResult {
        let args: HistoricalArgs = decode(arguments)?;
        let symbol = normalize_symbol(&args.symbol);

        let bars = self
            .provider
            .fetch(&symbol, args.period, args.interval)
            .map_err(|source| {
                warn!("History fetch for {} failed: {}", symbol, source);
                ToolError::Provider {
                    symbol: symbol.clone(),
                    source,
                }
            })?;

        if bars.is_empty() {
            return Err(ToolError::NoData {
                symbol,
                scope: format!(" (period={}, interval={})", args.period, args.interval),
            });
        }

        Ok(ToolOutput::Historical(HistoricalRecord::from_bars(
            &symbol,
            args.period,
            args.interval,
            &bars,
        )))
    }

    fn describe(&self) -> Option<ToolInfo> {
        Some(ToolInfo::historical())
    }
}
