//! Realtime LLM API event types, discriminated by a `type` field.
//!
//! Only the events the bridge actually translates are modeled as variants;
//! every other server event lands in [`ServerEvent::Unknown`] and is
//! ignored upstream.

use base64::Engine;
use serde::{Deserialize, Serialize};
use vox_core::ToolDefinition;

fn deserialize_audio_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
}

fn serialize_audio_bytes<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let s = base64::engine::general_purpose::STANDARD.encode(bytes);
    serializer.serialize_str(&s)
}

/// Events sent to the realtime server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    /// Configure the session: tools, tool choice, instructions.
    #[serde(rename = "session.update")]
    SessionUpdate { session: SessionConfig },

    /// Append caller audio to the input buffer.
    #[serde(rename = "input_audio_buffer.append")]
    AudioAppend {
        #[serde(
            serialize_with = "serialize_audio_bytes",
            deserialize_with = "deserialize_audio_bytes"
        )]
        audio: Vec<u8>,
    },
}

/// The session configuration sent once the stream opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session kind, always "realtime".
    #[serde(rename = "type")]
    pub kind: String,
    /// "auto" when at least one tool is advertised, otherwise "none".
    pub tool_choice: String,
    pub tools: Vec<ToolDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Events received from the realtime server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// A chunk of synthesized agent audio.
    #[serde(rename = "response.output_audio.delta")]
    AudioDelta {
        #[serde(
            serialize_with = "serialize_audio_bytes",
            deserialize_with = "deserialize_audio_bytes"
        )]
        delta: Vec<u8>,
    },

    /// The caller started speaking over the agent.
    #[serde(rename = "input_audio_buffer.speech_started")]
    SpeechStarted,

    /// Any event type the bridge does not translate.
    #[serde(other)]
    Unknown,
}
