//! # vox-server
//!
//! The webhook server for the Vox demo backend: callback handling for the
//! telephony control plane (subscription validation, call lifecycle
//! events), a health endpoint, and the system prompt loader. Call
//! disconnects drop the matching per-call session bucket.

pub mod callback;
pub mod config;
pub mod prompt;
pub mod routes;

pub use callback::{AppState, CallbackKind};
pub use config::ServerConfig;
pub use prompt::{format_customer_profile, load_prompt, load_prompt_for_account};
pub use routes::create_app;
