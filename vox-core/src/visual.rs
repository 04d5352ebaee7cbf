//! Tool output envelope and presentation hints.
//!
//! A tool produces two explicit values: the domain result the model reasons
//! over, and an optional [`VisualHint`] describing how a caller-side UI
//! should render that result. The hint is pure data derived from the result;
//! it never carries information absent from the result itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A side-channel payload describing suggested UI rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisualHint {
    /// Rendering kind, e.g. "deal_grid", "cart_drawer", "empty_state".
    pub kind: String,
    /// Kind-specific payload.
    pub data: Value,
}

impl VisualHint {
    /// Create a new hint.
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self { kind: kind.into(), data }
    }
}

/// The result of a tool execution: domain result plus optional hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// JSON-serializable domain result. Business errors appear here as an
    /// `"error"` field, never as a raised error crossing the dispatch
    /// boundary.
    pub result: Value,
    /// Optional presentation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<VisualHint>,
}

impl ToolOutput {
    /// A result with no presentation hint.
    pub fn new(result: Value) -> Self {
        Self { result, visual: None }
    }

    /// A result with a presentation hint.
    pub fn with_visual(result: Value, visual: VisualHint) -> Self {
        Self { result, visual: Some(visual) }
    }

    /// A structured business error, e.g. a not-found lookup.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(serde_json::json!({ "error": message.into() }))
    }

    /// Whether the result carries a structured error field.
    pub fn is_error(&self) -> bool {
        self.result.get("error").is_some()
    }
}
