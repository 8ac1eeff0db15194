//! OHLCV bars and the normalized records returned by tools.
//!
//! Records are produced fresh for every request and serialized with `serde_json` at the
//! tool boundary. `ToolOutput` is untagged, so a quote serializes as the flat quote
//! fields and a history as the flat history fields.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timeframe::{Interval, Period};

/// One provider row, in exchange-local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Start of the bar.
    pub time: NaiveDateTime,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
}

impl Bar {
    /// Date label used in records: `YYYY-MM-DD`, plus `HH:MM` for intraday bars.
    pub fn label(&self, interval: Interval) -> String {
        if interval.is_intraday() {
            self.time.format("%Y-%m-%d %H:%M").to_string()
        } else {
            self.time.format("%Y-%m-%d").to_string()
        }
    }
}

/// Most recent trading day for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Ticker symbol (e.g., `AAPL`).
    pub symbol: String,
    /// Trading day, `YYYY-MM-DD`.
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
}

impl QuoteRecord {
    /// Build a quote from the given bar.
    pub fn from_bar(symbol: &str, bar: &Bar) -> Self {
        QuoteRecord {
            symbol: symbol.to_string(),
            date: bar.label(Interval::Day1),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }
}

/// One row of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRow {
    /// Bar label, see [`Bar::label`].
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
}

/// Historical series for a symbol, oldest row first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Ticker symbol.
    pub symbol: String,
    /// Requested span.
    pub period: Period,
    /// Requested granularity.
    pub interval: Interval,
    /// Number of rows in `data`.
    pub data_points: usize,
    /// Rows in provider order.
    pub data: Vec<HistoricalRow>,
}

impl HistoricalRecord {
    /// Normalize provider bars, keeping their order.
    pub fn from_bars(symbol: &str, period: Period, interval: Interval, bars: &[Bar]) -> Self {
        let data: Vec<HistoricalRow> = bars
            .iter()
            .map(|bar| HistoricalRow {
                date: bar.label(interval),
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
            })
            .collect();

        HistoricalRecord {
            symbol: symbol.to_string(),
            period,
            interval,
            data_points: data.len(),
            data,
        }
    }
}

/// Successful tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// Result of the quote tool.
    Quote(QuoteRecord),
    /// Result of the historical tool.
    Historical(HistoricalRecord),
}

/// Shape every failure takes at the tool boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Symbol the request was about, when known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbol: Option<String>,
    /// Human-readable failure message.
    pub error: String,
}
