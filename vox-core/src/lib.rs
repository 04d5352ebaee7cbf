//! # vox-core
//!
//! Core traits and types for the Vox voice-agent demo backend:
//!
//! - [`Tool`] / [`ToolDefinition`] - the capability surface exposed to the
//!   LLM tool-calling loop
//! - [`ToolOutput`] / [`VisualHint`] - domain result and presentation hint
//!   as two explicit values
//! - [`VoxError`] / [`Result`] - unified error handling
//!
//! Business-logic errors are values by the time they reach the tool
//! dispatch boundary; only unexpected failures (bad JSON, IO) travel as
//! `Err` and are converted to error envelopes at the outermost layer.

pub mod error;
pub mod tool;
pub mod visual;

pub use error::{Result, VoxError};
pub use tool::{Tool, ToolDefinition};
pub use visual::{ToolOutput, VisualHint};
