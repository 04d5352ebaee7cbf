//! # vox-bridge
//!
//! The protocol bridge between an ACS (Azure Communication Services)
//! telephony media stream and the realtime LLM API. Both sides speak JSON
//! over websockets but with different envelopes; this crate models the two
//! vocabularies as closed enums and translates between them:
//!
//! - inbound: stream metadata becomes the session configuration, caller
//!   audio becomes buffer appends
//! - outbound: agent audio deltas become ACS audio chunks, and a detected
//!   barge-in becomes a `StopAudio` message
//!
//! The bridge is stateless apart from the per-call lifecycle machine in
//! [`call`]; audio payloads cross it unchanged.

pub mod acs;
pub mod call;
pub mod error;
pub mod realtime;
pub mod translate;

pub use acs::{AcsMessage, AudioMetadata, AudioPayload};
pub use call::{CallPhase, CallState};
pub use error::{BridgeError, Result};
pub use realtime::{ClientEvent, ServerEvent, SessionConfig};
pub use translate::{acs_to_realtime, realtime_to_acs};
