//! `StockAgent`: interpreter, tool client and formatter behind one call.

use log::debug;
use stock_server::StockServer;

use crate::client::ToolClient;
use crate::formatter::ResponseFormatter;
use crate::interpreter::RequestInterpreter;

/// Answers free-text stock requests.
///
/// Each request is interpreted, dispatched to `get_stock_quote` or `get_historical_data`
/// and rendered as text. Failures come back as an `Error fetching ...` line, never as an
/// error value.
pub struct StockAgent<'a> {
    client: ToolClient<'a>,
}

impl<'a> StockAgent<'a> {
    /// Create an agent that uses the tools of `server`.
    pub fn new(server: &'a StockServer) -> Self {
        StockAgent {
            client: ToolClient::new(server),
        }
    }

    /// Answer one request.
    pub fn handle_request(&self, user_input: &str) -> String {
        let request = RequestInterpreter::interpret(user_input);
        debug!("Interpreted {:?} as {:?}", user_input, request);

        let result = self.client.call(&request.to_tool_call());
        ResponseFormatter::format(&result, &request.symbol, request.is_historical)
    }
}
