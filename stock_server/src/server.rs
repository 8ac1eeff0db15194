//! `StockServer`: the tool registry with the stock tools installed.

use std::sync::Arc;

use log::info;
use stock_common::tool::{HISTORICAL_TOOL, QUOTE_TOOL};
use stock_common::{Arguments, ToolInfo, ToolResult};

use crate::provider::MarketDataProvider;
use crate::registry::ToolRegistry;
use crate::tools::{HistoricalTool, QuoteTool};

/// Name the stock tool server announces itself with.
pub const SERVER_NAME: &str = "stock-mcp";

/// A named registry with the stock tools installed.
///
/// Built once at start-up and handed out by reference to whatever dispatches requests.
pub struct StockServer {
    name: String,
    registry: ToolRegistry,
}

impl StockServer {
    /// Create the server with `get_stock_quote` and `get_historical_data` backed by `provider`.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        let mut registry = ToolRegistry::new();
        registry.register(QUOTE_TOOL, QuoteTool::new(Arc::clone(&provider)));
        registry.register(HISTORICAL_TOOL, HistoricalTool::new(provider));
        info!("[{}] Server ready with {} tools", SERVER_NAME, registry.tools().len());
        StockServer {
            name: SERVER_NAME.to_string(),
            registry,
        }
    }

    /// Server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying registry, for registering extra tools.
    pub fn registry_mut(&mut self) -> &mut ToolRegistry {
        &mut self.registry
    }

    /// Descriptors of the registered tools.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.registry.tools()
    }

    /// Invoke a registered tool.
    pub fn call_tool(&self, name: &str, arguments: &Arguments) -> ToolResult {
        self.registry.invoke(name, arguments)
    }
}
