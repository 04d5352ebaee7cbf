//! The two translation directions between the ACS stream and the realtime
//! API.
//!
//! Both directions are total functions returning `Option`: a message that
//! has no counterpart on the other protocol maps to `None` and is dropped
//! by the caller. Audio payloads cross the bridge unchanged.

use tracing::debug;
use vox_core::ToolDefinition;

use crate::acs::AcsMessage;
use crate::realtime::{ClientEvent, ServerEvent, SessionConfig};

/// Translate an inbound ACS message into a realtime client event.
///
/// The initial `AudioMetadata` message becomes the session configuration:
/// the registry's tool definitions, `tool_choice` of `"auto"` when any tool
/// is advertised (`"none"` otherwise), and the system instructions if
/// present. Audio chunks become buffer appends. Everything else is dropped.
pub fn acs_to_realtime(
    msg: &AcsMessage,
    tools: &[ToolDefinition],
    instructions: Option<&str>,
) -> Option<ClientEvent> {
    match msg {
        AcsMessage::AudioMetadata { .. } => {
            let tool_choice = if tools.is_empty() { "none" } else { "auto" };
            Some(ClientEvent::SessionUpdate {
                session: SessionConfig {
                    kind: "realtime".to_string(),
                    tool_choice: tool_choice.to_string(),
                    tools: tools.to_vec(),
                    instructions: instructions.map(str::to_string),
                },
            })
        }
        AcsMessage::AudioData { audio_data } => {
            Some(ClientEvent::AudioAppend { audio: audio_data.data.clone() })
        }
        other => {
            debug!(?other, "dropping ACS message with no realtime counterpart");
            None
        }
    }
}

/// Translate a realtime server event into an outbound ACS message.
///
/// Audio deltas pass through unchanged. `speech_started` always maps to
/// `StopAudio`: the bridge holds no audio buffer of its own, so barge-in is
/// delegated to the telephony side dropping its unplayed audio.
pub fn realtime_to_acs(event: &ServerEvent) -> Option<AcsMessage> {
    match event {
        ServerEvent::AudioDelta { delta } => Some(AcsMessage::audio(delta.clone())),
        ServerEvent::SpeechStarted => Some(AcsMessage::stop_audio()),
        ServerEvent::Unknown => {
            debug!("dropping realtime event with no ACS counterpart");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool(name: &str) -> ToolDefinition {
        ToolDefinition {
            kind: "function".to_string(),
            name: name.to_string(),
            description: format!("{name} tool"),
            parameters: json!({"type": "object", "properties": {}}),
        }
    }

    fn metadata() -> AcsMessage {
        serde_json::from_value(json!({
            "kind": "AudioMetadata",
            "audioMetadata": {"encoding": "PCM", "sampleRate": 24000}
        }))
        .unwrap()
    }

    #[test]
    fn test_metadata_becomes_session_update_with_tools() {
        let tools = vec![tool("search_deals"), tool("view_cart")];
        let event = acs_to_realtime(&metadata(), &tools, Some("You are a travel agent."));

        let Some(ClientEvent::SessionUpdate { session }) = event else {
            panic!("expected session.update");
        };
        assert_eq!(session.kind, "realtime");
        assert_eq!(session.tools.len(), 2);
        assert_eq!(session.tool_choice, "auto");
        assert_eq!(session.instructions.as_deref(), Some("You are a travel agent."));
    }

    #[test]
    fn test_empty_tool_set_means_tool_choice_none() {
        let Some(ClientEvent::SessionUpdate { session }) = acs_to_realtime(&metadata(), &[], None)
        else {
            panic!("expected session.update");
        };
        assert_eq!(session.tool_choice, "none");
        assert!(session.tools.is_empty());
        assert!(session.instructions.is_none());
    }

    #[test]
    fn test_audio_passes_through_inbound() {
        let msg = AcsMessage::audio(vec![7u8; 640]);
        let Some(ClientEvent::AudioAppend { audio }) = acs_to_realtime(&msg, &[], None) else {
            panic!("expected audio append");
        };
        assert_eq!(audio, vec![7u8; 640]);
    }

    #[test]
    fn test_unhandled_inbound_is_dropped() {
        assert!(acs_to_realtime(&AcsMessage::stop_audio(), &[], None).is_none());
        assert!(acs_to_realtime(&AcsMessage::Unknown, &[], None).is_none());
    }

    #[test]
    fn test_audio_delta_passes_through_outbound() {
        let event = ServerEvent::AudioDelta { delta: b"pcm".to_vec() };
        let Some(AcsMessage::AudioData { audio_data }) = realtime_to_acs(&event) else {
            panic!("expected audio data");
        };
        assert_eq!(audio_data.data, b"pcm");
    }

    #[test]
    fn test_speech_started_always_stops_audio() {
        let wire: ServerEvent = serde_json::from_value(json!({
            "type": "input_audio_buffer.speech_started",
            "audio_start_ms": 1234
        }))
        .unwrap();
        let Some(msg) = realtime_to_acs(&wire) else {
            panic!("expected stop audio");
        };
        assert!(matches!(msg, AcsMessage::StopAudio { .. }));
    }

    #[test]
    fn test_unknown_outbound_is_dropped() {
        assert!(realtime_to_acs(&ServerEvent::Unknown).is_none());
    }
}
