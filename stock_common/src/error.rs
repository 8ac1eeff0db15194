//! Error types shared between the tool server and the agent.
//!
//! Failures stay typed while they travel through the server: the data provider reports a
//! `ProviderError`, tools wrap it (or their own failure) into a `ToolError`, and only at the
//! tool boundary is a `ToolError` flattened into an [`ErrorPayload`]. `AppError` covers what
//! the binaries themselves can run into (terminal I/O, JSON encoding, provider setup).
use std::io;

use thiserror::Error;

use crate::records::ErrorPayload;

/// Failure reported by a market-data provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport failure: connection refused, timeout or a non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The provider does not know the requested symbol.
    #[error("Symbol not found: {0}")]
    NotFound(String),

    /// The provider answered with an error of its own.
    #[error("Provider error: {0}")]
    Api(String),
}

/// Failure produced while invoking a tool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Tool '{0}' not found.")]
    UnknownTool(String),

    /// Arguments could not be decoded into what the tool expects.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The provider answered successfully but returned no rows.
    #[error("No data found for symbol '{symbol}'{scope}.")]
    NoData {
        /// Requested symbol.
        symbol: String,
        /// Extra request context appended to the message, may be empty.
        scope: String,
    },

    /// The provider call itself failed.
    #[error("Failed to fetch data: {source}")]
    Provider {
        /// Requested symbol.
        symbol: String,
        /// Underlying provider failure.
        source: ProviderError,
    },

    /// The tool panicked; the panic message is preserved.
    #[error("Tool execution failed: {0}")]
    Panicked(String),
}

impl ToolError {
    /// Symbol the failed request was about, when known.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            ToolError::NoData { symbol, .. } | ToolError::Provider { symbol, .. } => Some(symbol),
            _ => None,
        }
    }

    /// Flatten into the payload shape exposed at the tool boundary.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            symbol: self.symbol().map(str::to_string),
            error: self.to_string(),
        }
    }
}

/// Errors surfaced by the binaries outside of tool invocation.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O error while talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The data provider could not be set up.
    #[error("Provider setup failed: {0}")]
    Provider(#[from] ProviderError),
}
