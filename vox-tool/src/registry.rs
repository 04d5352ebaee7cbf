//! The tool registry and dispatch boundary.
//!
//! Dispatch never returns `Err` and never panics: unknown tool names,
//! malformed arguments and executor failures all come back as structured
//! `{"error": ...}` envelopes so the conversation can continue.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use vox_core::{Tool, ToolDefinition, ToolOutput};

/// Deserialize a tool argument object into its typed request struct,
/// mapping failure to a structured error envelope.
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolOutput> {
    serde_json::from_value(args).map_err(|e| ToolOutput::error(format!("invalid arguments: {e}")))
}

/// A fixed name-to-tool map built once at startup.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. Re-registering a name replaces
    /// the previous tool.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Wire-format definitions for session configuration, sorted by name
    /// so the advertised list is deterministic.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool by name and return its output as a JSON envelope.
    pub async fn dispatch(&self, name: &str, args: Value) -> Value {
        let Some(tool) = self.tools.get(name) else {
            warn!(tool = name, "dispatch to unknown tool");
            return envelope(ToolOutput::error(format!("unknown tool: {name}")));
        };

        debug!(tool = name, "dispatching tool call");
        match tool.execute(args).await {
            Ok(output) => envelope(output),
            Err(e) => {
                warn!(tool = name, error = %e, "tool execution failed");
                envelope(ToolOutput::error(e.to_string()))
            }
        }
    }
}

fn envelope(output: ToolOutput) -> Value {
    // ToolOutput serializes to {"result": ..., "visual": ...?}; falling back
    // to an error envelope here is unreachable for tree-shaped values.
    serde_json::to_value(&output)
        .unwrap_or_else(|e| serde_json::json!({ "result": {"error": e.to_string()} }))
}
