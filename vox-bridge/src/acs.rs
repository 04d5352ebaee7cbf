//! ACS media-stream message types.
//!
//! The telephony side speaks JSON messages discriminated by a `kind` field.
//! Audio is transported as raw bytes internally and base64 on the wire.
//! Unrecognized kinds deserialize to [`AcsMessage::Unknown`] instead of
//! failing, so new upstream message kinds never break the stream loop.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

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

/// A message on the ACS bidirectional media websocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AcsMessage {
    /// First message of a stream, describing the audio format.
    AudioMetadata {
        #[serde(rename = "audioMetadata", default, skip_serializing_if = "Option::is_none")]
        audio_metadata: Option<AudioMetadata>,
    },

    /// A chunk of caller or agent audio.
    AudioData {
        #[serde(rename = "audioData")]
        audio_data: AudioPayload,
    },

    /// Ask the telephony side to drop its unplayed audio buffer (barge-in).
    StopAudio {
        #[serde(rename = "audioData", default)]
        audio_data: Option<Value>,
        #[serde(rename = "stopAudio")]
        stop_audio: Value,
    },

    /// Any kind this bridge does not handle.
    #[serde(other)]
    Unknown,
}

impl AcsMessage {
    /// An outbound audio chunk with no participant or timing metadata.
    pub fn audio(data: Vec<u8>) -> Self {
        Self::AudioData {
            audio_data: AudioPayload { data, timestamp: None, participant: None, silent: None },
        }
    }

    /// The barge-in message in the exact shape ACS expects.
    pub fn stop_audio() -> Self {
        Self::StopAudio { audio_data: None, stop_audio: Value::Object(Default::default()) }
    }
}

/// Stream format advertised in the initial metadata message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

/// One audio chunk plus its stream metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioPayload {
    /// Raw audio bytes, base64 on the wire.
    #[serde(serialize_with = "serialize_audio_bytes", deserialize_with = "deserialize_audio_bytes")]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "participantRawID", default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
}
