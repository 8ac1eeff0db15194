//! Tools served by the registry.
//!
//! - `quote` — latest trading day for a symbol (`get_stock_quote`).
//! - `historical` — period/interval series for a symbol (`get_historical_data`).
//!
//! Anything implementing [`Tool`] can be registered, including plain closures of type
//! `Fn(&Arguments) -> ToolResult`.
use serde::de::DeserializeOwned;
use serde_json::Value;
use stock_common::tickers::DEFAULT_SYMBOL;
use stock_common::{Arguments, ToolError, ToolInfo, ToolResult};

pub mod historical;
pub mod quote;

pub use historical::HistoricalTool;
pub use quote::QuoteTool;

/// A callable registered under a name.
pub trait Tool: Send + Sync {
    /// Run the tool.
    fn call(&self, arguments: &Arguments) -> ToolResult;

    /// Descriptor listed by the registry; `None` for ad-hoc tools.
    fn describe(&self) -> Option<ToolInfo> {
        None
    }
}

impl<F> Tool for F
where
    F: Fn(&Arguments) -> ToolResult + Send + Sync,
{
    fn call(&self, arguments: &Arguments) -> ToolResult {
        self(arguments)
    }
}

/// Decode the arguments object into a typed struct.
pub(crate) fn decode<T: DeserializeOwned>(arguments: &Arguments) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

pub(crate) fn default_symbol() -> String {
    DEFAULT_SYMBOL.to_string()
}

/// Upper-case and trim a requested symbol, falling back to the default when blank.
pub(crate) fn normalize_symbol(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_symbol()
    } else {
        trimmed.to_uppercase()
    }
}
