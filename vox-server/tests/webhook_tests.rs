use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use vox_server::{ServerConfig, create_app};
use vox_session::SessionStore;

fn app() -> axum::Router {
    create_app(&ServerConfig::default(), Arc::new(SessionStore::new()))
}

fn post_json(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/callbacks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_subscription_validation_echo() {
    let body = json!({
        "eventType": "Microsoft.EventGrid.SubscriptionValidationEvent",
        "data": {"validationCode": "code-42"}
    });
    let response = app().oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"validationResponse": "code-42"}));
}

#[tokio::test]
async fn test_validation_short_circuits_batch() {
    let store = Arc::new(SessionStore::new());
    store.set_preference("conn-1", "k", json!(1));
    let app = create_app(&ServerConfig::default(), Arc::clone(&store));

    let body = json!([
        {
            "eventType": "Microsoft.EventGrid.SubscriptionValidationEvent",
            "data": {"validationCode": "first"}
        },
        {
            "type": "Microsoft.Communication.CallDisconnected",
            "data": {"callConnectionId": "conn-1"}
        }
    ]);
    let response = app.oneshot(post_json(&body)).await.unwrap();
    assert_eq!(body_json(response).await["validationResponse"], json!("first"));
    // The disconnect after the validation event was never processed.
    assert_eq!(store.session_count(), 1);
}

#[tokio::test]
async fn test_call_disconnected_drops_session() {
    let store = Arc::new(SessionStore::new());
    store.set_preference("conn-7", "budget_max", json!(600));
    let app = create_app(&ServerConfig::default(), Arc::clone(&store));

    let body = json!({
        "type": "Microsoft.Communication.CallDisconnected",
        "data": {"callConnectionId": "conn-7"}
    });
    let response = app.oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.session_count(), 0);
}

#[tokio::test]
async fn test_unknown_event_types_are_accepted() {
    let body = json!([
        {"type": "Microsoft.Communication.RecordingStateChanged", "data": {}},
        {"type": "Microsoft.Communication.ParticipantsUpdated",
         "data": {"participants": [{"identifier": "a"}, {"identifier": "b"}]}}
    ]);
    let response = app().oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/callbacks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
