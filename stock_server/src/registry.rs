//! Name → tool dispatch table.
//!
//! The registry is populated once at start-up and read afterwards. Invocation never
//! panics past this boundary: unknown names become `ToolError::UnknownTool` and a
//! panicking tool becomes `ToolError::Panicked` carrying the panic message. The process
//! panic hook still runs first, so the usual `thread '...' panicked at` report reaches
//! stderr.
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use log::{error, info, warn};
use serde_json::json;
use stock_common::{Arguments, ToolError, ToolInfo, ToolResult};

use crate::tools::Tool;

/// Registered tools keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tool` under `name`, replacing any previous registration.
    pub fn register<T: Tool + 'static>(&mut self, name: &str, tool: T) {
        if self.tools.insert(name.to_string(), Box::new(tool)).is_some() {
            warn!("Tool '{}' re-registered; previous registration replaced", name);
        } else {
            info!("Registered tool: {}", name);
        }
    }

    /// `true` if a tool is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Descriptors of all registered tools, sorted by name.
    pub fn tools(&self) -> Vec<ToolInfo> {
        let mut infos: Vec<ToolInfo> = self
            .tools
            .iter()
            .map(|(name, tool)| {
                let mut info = tool.describe().unwrap_or_else(|| ToolInfo {
                    name: name.clone(),
                    description: String::new(),
                    parameters: json!({ "type": "object" }),
                });
                // The registration name is authoritative.
                info.name = name.clone();
                info
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Invoke the tool registered under `name`.
    pub fn invoke(&self, name: &str, arguments: &Arguments) -> ToolResult {
        let Some(tool) = self.tools.get(name) else {
            warn!("Call to unregistered tool '{}'", name);
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        match panic::catch_unwind(AssertUnwindSafe(|| tool.call(arguments))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Tool '{}' panicked: {}", name, message);
                Err(ToolError::Panicked(message))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_common::{QuoteRecord, ToolOutput};

    fn fixed_quote(close: f64) -> impl Fn(&Arguments) -> ToolResult {
        move |_: &Arguments| {
            Ok(ToolOutput::Quote(QuoteRecord {
                symbol: "TEST".to_string(),
                date: "2025-01-10".to_string(),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1,
            }))
        }
    }

    fn close_of(result: ToolResult) -> f64 {
        match result {
            Ok(ToolOutput::Quote(q)) => q.close,
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_tool_is_an_error_value() {
        let registry = ToolRegistry::new();
        let result = registry.invoke("get_weather", &Arguments::new());
        assert_eq!(result, Err(ToolError::UnknownTool("get_weather".to_string())));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ToolRegistry::new();
        registry.register("quote", fixed_quote(1.0));
        registry.register("quote", fixed_quote(2.0));
        assert_eq!(close_of(registry.invoke("quote", &Arguments::new())), 2.0);
        assert_eq!(registry.tools().len(), 1);
    }

    #[test]
    fn panicking_tool_becomes_error() {
        let mut registry = ToolRegistry::new();
        registry.register("explode", |_: &Arguments| -> ToolResult {
            panic!("division by zero")
        });
        let result = registry.invoke("explode", &Arguments::new());
        assert_eq!(result, Err(ToolError::Panicked("division by zero".to_string())));
        assert_eq!(
            result.unwrap_err().to_payload().error,
            "Tool execution failed: division by zero"
        );
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let mut registry = ToolRegistry::new();
        registry.register("explode", |_: &Arguments| -> ToolResult {
            panic!("bad index {}", 7)
        });
        assert_eq!(
            registry.invoke("explode", &Arguments::new()),
            Err(ToolError::Panicked("bad index 7".to_string()))
        );
    }

    #[test]
    fn ad_hoc_tools_get_a_generic_descriptor() {
        let mut registry = ToolRegistry::new();
        registry.register("zeta", fixed_quote(1.0));
        registry.register("alpha", fixed_quote(1.0));
        let names: Vec<String> = registry.tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
        assert!(registry.contains("zeta"));
        assert!(!registry.contains("beta"));
    }
}
