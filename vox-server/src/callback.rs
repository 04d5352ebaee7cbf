//! Event Grid / call-automation callback handling.
//!
//! The callback endpoint accepts a single event object or an array. Event
//! types resolve through [`CallbackKind`]; unknown types are logged and
//! skipped so new upstream event kinds never fail the webhook. A
//! subscription-validation event short-circuits the whole batch with the
//! echo response Event Grid expects.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};
use vox_session::SessionStore;

const VALIDATION_EVENT_TYPE: &str = "Microsoft.EventGrid.SubscriptionValidationEvent";

/// The callback event types this server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackKind {
    SubscriptionValidation,
    IncomingCall,
    CallConnected,
    ParticipantsUpdated,
    CallDisconnected,
    Unknown,
}

impl CallbackKind {
    /// Resolve the `type`/`eventType` discriminator.
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type.trim() {
            VALIDATION_EVENT_TYPE => Self::SubscriptionValidation,
            "Microsoft.Communication.IncomingCall" => Self::IncomingCall,
            "Microsoft.Communication.CallConnected" => Self::CallConnected,
            "Microsoft.Communication.ParticipantsUpdated" => Self::ParticipantsUpdated,
            "Microsoft.Communication.CallDisconnected" => Self::CallDisconnected,
            _ => Self::Unknown,
        }
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SessionStore>,
}

/// `POST /api/callbacks`.
pub async fn post_callbacks(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    match process_callbacks(&state, body) {
        Ok(Some(validation_code)) => {
            (StatusCode::OK, Json(json!({ "validationResponse": validation_code })))
                .into_response()
        }
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => {
            warn!(error = %e, "callback processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error processing callbacks" })),
            )
                .into_response()
        }
    }
}

/// `GET /api/health`.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Walk the batch. Returns the validation code of the first
/// subscription-validation event, which short-circuits further processing.
fn process_callbacks(state: &AppState, body: Value) -> anyhow::Result<Option<String>> {
    let events: Vec<Value> = match body {
        Value::Array(events) => events,
        Value::Object(_) => vec![body],
        other => {
            warn!(?other, "skipping unsupported callback payload");
            return Ok(None);
        }
    };

    for event in events {
        let Some(event_obj) = event.as_object() else {
            warn!("skipping non-object callback event");
            continue;
        };
        let event_type = event_obj
            .get("type")
            .or_else(|| event_obj.get("eventType"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        let kind = CallbackKind::from_event_type(event_type);
        debug!(event_type, ?kind, "processing callback event");

        match kind {
            CallbackKind::SubscriptionValidation => {
                let code = event_obj
                    .get("data")
                    .and_then(|d| d.get("validationCode"))
                    .and_then(Value::as_str);
                match code {
                    Some(code) => {
                        info!("responding to subscription validation");
                        return Ok(Some(code.to_string()));
                    }
                    None => {
                        warn!("validation event missing code; continuing");
                    }
                }
            }
            CallbackKind::IncomingCall => {
                info!("incoming call event received");
            }
            CallbackKind::CallConnected => {
                let id = call_connection_id(event_obj).unwrap_or("unknown");
                info!(call_connection_id = id, "call connected");
            }
            CallbackKind::ParticipantsUpdated => {
                let count = event_obj
                    .get("data")
                    .and_then(|d| d.get("participants"))
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len);
                info!(participants = count, "participants updated");
            }
            CallbackKind::CallDisconnected => {
                if let Some(id) = call_connection_id(event_obj) {
                    state.store.end_session(id);
                    info!(call_connection_id = id, "call disconnected, session state dropped");
                } else {
                    warn!("call-disconnected event without connection id");
                }
            }
            CallbackKind::Unknown => {
                warn!(event_type, "unhandled callback event type");
            }
        }
    }

    Ok(None)
}

fn call_connection_id(event: &serde_json::Map<String, Value>) -> Option<&str> {
    event.get("data").and_then(|d| d.get("callConnectionId")).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_resolution() {
        assert_eq!(
            CallbackKind::from_event_type("Microsoft.EventGrid.SubscriptionValidationEvent"),
            CallbackKind::SubscriptionValidation
        );
        assert_eq!(
            CallbackKind::from_event_type(" Microsoft.Communication.CallDisconnected "),
            CallbackKind::CallDisconnected
        );
        assert_eq!(
            CallbackKind::from_event_type("Microsoft.Communication.RecordingStateChanged"),
            CallbackKind::Unknown
        );
        assert_eq!(CallbackKind::from_event_type(""), CallbackKind::Unknown);
    }

    #[test]
    fn test_validation_short_circuits() {
        let state = AppState { store: Arc::new(SessionStore::new()) };
        let body = json!([
            {
                "eventType": "Microsoft.EventGrid.SubscriptionValidationEvent",
                "data": {"validationCode": "abc-123"}
            },
            {
                "type": "Microsoft.Communication.CallDisconnected",
                "data": {"callConnectionId": "conn-1"}
            }
        ]);
        // Validation wins; the trailing event is never processed.
        let code = process_callbacks(&state, body).unwrap();
        assert_eq!(code.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_disconnect_evicts_session() {
        let store = Arc::new(SessionStore::new());
        store.set_preference("conn-9", "k", json!(1));
        assert_eq!(store.session_count(), 1);

        let state = AppState { store: Arc::clone(&store) };
        let body = json!({
            "type": "Microsoft.Communication.CallDisconnected",
            "data": {"callConnectionId": "conn-9"}
        });
        assert!(process_callbacks(&state, body).unwrap().is_none());
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_unknown_and_malformed_events_are_skipped() {
        let state = AppState { store: Arc::new(SessionStore::new()) };
        let body = json!([
            {"type": "Microsoft.Communication.RecordingStateChanged"},
            "not an object",
            {"no_type_field": true}
        ]);
        assert!(process_callbacks(&state, body).unwrap().is_none());
    }
}
