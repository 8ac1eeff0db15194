//! In-process stock tool server.
//!
//! The server is a dispatch table rather than a network service: callers hold a
//! `StockServer` and invoke tools by name. The pieces:
//!
//! - `provider` — the `MarketDataProvider` seam and its Yahoo Finance implementation.
//! - `tools` — `get_stock_quote` and `get_historical_data`, which turn provider bars into
//!   normalized records and provider failures into typed `ToolError`s.
//! - `registry` — name → tool mapping; unknown names and panicking tools become error
//!   values instead of escaping the call.
//! - `server` — `StockServer`, the registry with both stock tools installed.
#![warn(missing_docs)]
pub mod provider;
pub mod registry;
pub mod server;
pub mod tools;

pub use provider::{MarketDataProvider, YahooConfig, YahooProvider};
pub use registry::ToolRegistry;
pub use server::{SERVER_NAME, StockServer};
pub use tools::Tool;
