//! Natural-language front-end over the stock tool server.
//!
//! A phrase such as `"MSFT historical data 1 month"` goes through:
//!
//! - `interpreter` — extracts symbol, intent, period and interval.
//! - `client` — forwards the resulting tool call to a `StockServer`.
//! - `formatter` — renders the quote, the (truncated) series or the error line.
//!
//! `agent` wires the three together and `session` runs the interactive loop around it.
#![warn(missing_docs)]
pub mod agent;
pub mod client;
pub mod formatter;
pub mod interpreter;
pub mod session;

pub use agent::StockAgent;
pub use client::ToolClient;
pub use formatter::ResponseFormatter;
pub use interpreter::{ParsedRequest, RequestInterpreter};
