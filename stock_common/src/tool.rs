//! Tool names, invocation arguments and descriptors.
//!
//! A `ToolCall` is the in-process stand-in for a JSON-RPC style request: a tool name and
//! a JSON object of arguments. Results come back as a `ToolResult` and are turned into
//! JSON with [`result_to_json`], which yields either the record fields or an
//! [`ErrorPayload`](crate::records::ErrorPayload).
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::ToolError;
use crate::records::ToolOutput;
use crate::timeframe::{Interval, Period};

/// Name of the quote tool.
pub const QUOTE_TOOL: &str = "get_stock_quote";
/// Name of the historical-data tool.
pub const HISTORICAL_TOOL: &str = "get_historical_data";

/// Invocation arguments: a JSON object.
pub type Arguments = Map<String, Value>;

/// Outcome of a tool invocation.
pub type ToolResult = Result<ToolOutput, ToolError>;

/// A single tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Registered tool name.
    pub name: String,
    /// Arguments passed to the tool.
    pub arguments: Arguments,
}

impl ToolCall {
    /// Creates a call to the quote tool.
    pub fn quote(symbol: &str) -> Self {
        let mut arguments = Arguments::new();
        arguments.insert("symbol".to_string(), Value::from(symbol));
        ToolCall {
            name: String::from(QUOTE_TOOL),
            arguments,
        }
    }

    /// Creates a call to the historical-data tool.
    pub fn historical(symbol: &str, period: Period, interval: Interval) -> Self {
        let mut arguments = Arguments::new();
        arguments.insert("symbol".to_string(), Value::from(symbol));
        arguments.insert("period".to_string(), Value::from(period.to_string()));
        arguments.insert("interval".to_string(), Value::from(interval.to_string()));
        ToolCall {
            name: String::from(HISTORICAL_TOOL),
            arguments,
        }
    }
}

/// Descriptor of a registered tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name used for invocation.
    pub name: String,
    /// What the tool does.
    pub description: String,
    /// JSON schema of the arguments object.
    pub parameters: Value,
}

impl ToolInfo {
    /// Descriptor of the quote tool.
    pub fn quote() -> Self {
        ToolInfo {
            name: QUOTE_TOOL.to_string(),
            description: "Latest daily OHLCV data for a stock symbol".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string", "description": "Ticker symbol, e.g. 'AAPL'" }
                }
            }),
        }
    }

    /// Descriptor of the historical-data tool.
    pub fn historical() -> Self {
        ToolInfo {
            name: HISTORICAL_TOOL.to_string(),
            description: "Historical OHLCV series for a stock symbol".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string", "description": "Ticker symbol, e.g. 'AAPL'" },
                    "period": {
                        "type": "string",
                        "enum": ["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max"],
                        "default": "1mo"
                    },
                    "interval": {
                        "type": "string",
                        "enum": ["1m", "5m", "15m", "30m", "1h", "1d", "1wk", "1mo"],
                        "default": "1d"
                    }
                }
            }),
        }
    }
}

/// JSON form of a tool result: the record fields on success, the error payload otherwise.
pub fn result_to_json(result: &ToolResult) -> Result<Value, serde_json::Error> {
    match result {
        Ok(output) => serde_json::to_value(output),
        Err(err) => serde_json::to_value(err.to_payload()),
    }
}
