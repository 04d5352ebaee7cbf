use crate::{Result, ToolOutput};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A callable capability exposed to the LLM tool-calling loop.
///
/// Implementations receive the raw JSON argument object produced by the
/// model and return a [`ToolOutput`]. Business failures (unknown ids,
/// malformed fields) should be returned as structured error envelopes via
/// [`ToolOutput::error`]; `Err` is reserved for failures the dispatch layer
/// converts to an error envelope on the caller's behalf.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// JSON-Schema-like description of the tool's parameters.
    fn parameters_schema(&self) -> Value;

    async fn execute(&self, args: Value) -> Result<ToolOutput>;

    /// Wire-format definition advertised to the realtime session.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            kind: "function".to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// Tool/function definition as advertised in a session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    /// Definition kind, always "function".
    #[serde(rename = "type")]
    pub kind: String,
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for parameters.
    pub parameters: Value,
}
