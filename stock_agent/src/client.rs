//! Forwarding tool calls to the stock tool server.
//!
//! The server lives in the same process, so a call is a direct registry lookup. This
//! type is where a real transport (JSON-RPC over stdio or HTTP) would plug in.
use log::info;
use serde_json::Value;
use stock_common::{ToolCall, ToolResult};
use stock_server::StockServer;

/// Client bound to one server instance.
pub struct ToolClient<'a> {
    server: &'a StockServer,
}

impl<'a> ToolClient<'a> {
    /// Bind a client to `server`.
    pub fn new(server: &'a StockServer) -> Self {
        ToolClient { server }
    }

    /// Name of the server this client talks to.
    pub fn server_name(&self) -> &str {
        self.server.name()
    }

    /// Invoke `call` on the server.
    pub fn call(&self, call: &ToolCall) -> ToolResult {
        info!(
            "Calling {} -> {}({})",
            self.server_name(),
            call.name,
            Value::Object(call.arguments.clone())
        );
        self.server.call_tool(&call.name, &call.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use stock_common::{Bar, Interval, Period, ProviderError, ToolError};
    use stock_server::MarketDataProvider;

    struct Offline;

    impl MarketDataProvider for Offline {
        fn fetch(&self, _: &str, _: Period, _: Interval) -> Result<Vec<Bar>, ProviderError> {
            Err(ProviderError::Network("offline".to_string()))
        }
    }

    #[test]
    fn forwards_to_bound_server() {
        let server = StockServer::new(Arc::new(Offline));
        let client = ToolClient::new(&server);
        assert_eq!(client.server_name(), "stock-mcp");
        assert_eq!(
            client.call(&ToolCall::quote("ibm")),
            Err(ToolError::Provider {
                symbol: "IBM".to_string(),
                source: ProviderError::Network("offline".to_string()),
            })
        );
    }
}
