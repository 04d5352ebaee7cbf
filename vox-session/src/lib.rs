//! # vox-session
//!
//! Ephemeral per-session state for the Vox demo backend: shopping carts,
//! bet slips and saved preferences, keyed by an opaque session id. State
//! lives in process memory for the duration of a call and is dropped on
//! disconnect; nothing is persisted.

pub mod cart;
pub mod slip;
pub mod store;

pub use cart::{CartItem, CartSummary};
pub use slip::{BetSelection, SlipSummary};
pub use store::{DEFAULT_SESSION, SessionStore};
