//!
//! Common types and utilities shared by the stock tool server and the stock agent.
//!
//! This crate aggregates:
//! - `error` — typed provider/tool errors and the binary-level `AppError`.
//! - `result` — handy `Result<T, AppError>` alias.
//! - `tickers` — known ticker symbols used as a fallback allow-list.
//! - `timeframe` — period and interval tokens understood by the data provider.
//! - `records` — OHLCV bars and the normalized records returned by tools.
//! - `tool` — tool names, invocation arguments and descriptors.
//! - `net` — provider endpoint constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod records;
pub mod result;
pub mod tickers;
pub mod timeframe;
pub mod tool;

pub use error::{AppError, ProviderError, ToolError};
pub use records::{Bar, ErrorPayload, HistoricalRecord, HistoricalRow, QuoteRecord, ToolOutput};
pub use result::Result;
pub use timeframe::{Interval, Period};
pub use tool::{Arguments, ToolCall, ToolInfo, ToolResult};
