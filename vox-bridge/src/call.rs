//! Call lifecycle state machine.
//!
//! A call moves `Init -> Active -> Ended` and never backwards. Repeating
//! the transition a state is already in is a no-op; transitions the
//! machine forbids are reported as errors, never panics.

use crate::error::{BridgeError, Result};

/// Lifecycle phase of one telephone call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallPhase {
    #[default]
    Init,
    Active,
    Ended,
}

impl CallPhase {
    fn name(self) -> &'static str {
        match self {
            CallPhase::Init => "init",
            CallPhase::Active => "active",
            CallPhase::Ended => "ended",
        }
    }
}

/// State for one call, keyed by the ACS call connection id once known.
#[derive(Debug, Clone, Default)]
pub struct CallState {
    phase: CallPhase,
    call_connection_id: Option<String>,
}

impl CallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CallPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == CallPhase::Active
    }

    pub fn call_connection_id(&self) -> Option<&str> {
        self.call_connection_id.as_deref()
    }

    /// Call-connected: `Init -> Active`. Re-connecting an active call is a
    /// no-op; an ended call cannot come back.
    pub fn on_connected(&mut self, call_connection_id: impl Into<String>) -> Result<()> {
        match self.phase {
            CallPhase::Init => {
                self.phase = CallPhase::Active;
                self.call_connection_id = Some(call_connection_id.into());
                Ok(())
            }
            CallPhase::Active => Ok(()),
            CallPhase::Ended => {
                Err(BridgeError::invalid_transition(self.phase.name(), "active"))
            }
        }
    }

    /// Call-disconnected: `Active -> Ended`. Disconnecting twice is a
    /// no-op; a call that never connected cannot end.
    pub fn on_disconnected(&mut self) -> Result<()> {
        match self.phase {
            CallPhase::Active => {
                self.phase = CallPhase::Ended;
                Ok(())
            }
            CallPhase::Ended => Ok(()),
            CallPhase::Init => Err(BridgeError::invalid_transition(self.phase.name(), "ended")),
        }
    }

    /// Participant roster changes carry no lifecycle meaning.
    pub fn on_participants_updated(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut call = CallState::new();
        assert_eq!(call.phase(), CallPhase::Init);

        call.on_connected("conn-1").unwrap();
        assert!(call.is_active());
        assert_eq!(call.call_connection_id(), Some("conn-1"));

        call.on_disconnected().unwrap();
        assert_eq!(call.phase(), CallPhase::Ended);
    }

    #[test]
    fn test_repeated_transitions_are_noops() {
        let mut call = CallState::new();
        call.on_connected("conn-1").unwrap();
        // A second connected event keeps the original connection id.
        call.on_connected("conn-2").unwrap();
        assert_eq!(call.call_connection_id(), Some("conn-1"));

        call.on_disconnected().unwrap();
        call.on_disconnected().unwrap();
        assert_eq!(call.phase(), CallPhase::Ended);
    }

    #[test]
    fn test_invalid_transitions_reported() {
        let mut call = CallState::new();
        assert!(call.on_disconnected().is_err());

        call.on_connected("conn-1").unwrap();
        call.on_disconnected().unwrap();
        let err = call.on_connected("conn-2").unwrap_err();
        assert!(err.to_string().contains("ended"));
    }

    #[test]
    fn test_participants_updated_never_transitions() {
        let mut call = CallState::new();
        call.on_participants_updated();
        assert_eq!(call.phase(), CallPhase::Init);

        call.on_connected("conn-1").unwrap();
        call.on_participants_updated();
        assert!(call.is_active());
    }
}
