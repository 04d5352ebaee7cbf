use serde_json::json;
use std::sync::Arc;
use vox_session::SessionStore;

fn full() -> vox_tool::ToolRegistry {
    vox_tool::full_registry(Arc::new(SessionStore::new()))
}

#[tokio::test]
async fn test_registry_sizes() {
    let store = Arc::new(SessionStore::new());
    assert_eq!(vox_tool::travel_registry(Arc::clone(&store)).len(), 15);
    assert_eq!(vox_tool::betting_registry(Arc::clone(&store)).len(), 8);
    assert_eq!(vox_tool::full_registry(store).len(), 23);
}

#[tokio::test]
async fn test_definitions_are_function_shaped_and_sorted() {
    let defs = full().definitions();
    assert_eq!(defs.len(), 23);
    for def in &defs {
        assert_eq!(def.kind, "function");
        assert!(def.parameters.get("type").is_some());
    }
    for pair in defs.windows(2) {
        assert!(pair[0].name < pair[1].name);
    }
}

#[tokio::test]
async fn test_dispatch_unknown_tool() {
    let out = full().dispatch("order_pizza", json!({})).await;
    assert!(out["result"]["error"].as_str().unwrap().contains("order_pizza"));
}

#[tokio::test]
async fn test_dispatch_malformed_arguments() {
    // deal_ids must be an array of strings.
    let out = full().dispatch("compare_deals", json!({"deal_ids": "oops"})).await;
    assert!(out["result"]["error"].as_str().unwrap().contains("invalid arguments"));
}

#[tokio::test]
async fn test_dispatch_search_envelope_carries_visual() {
    let out = full().dispatch("search_deals", json!({"city": "Zakopane"})).await;
    assert_eq!(out["result"]["count"], json!(3));
    assert_eq!(out["visual"]["kind"], json!("deal_grid"));

    let out = full().dispatch("get_available_cities", json!({})).await;
    assert_eq!(out["result"]["count"], json!(4));
    // No hint on plain data lookups.
    assert!(out.get("visual").is_none());
}

#[tokio::test]
async fn test_cart_flow_through_dispatch() {
    let store = Arc::new(SessionStore::new());
    let registry = vox_tool::full_registry(Arc::clone(&store));

    let out = registry
        .dispatch(
            "add_to_cart",
            json!({"deal_id": "prague-castle-view-hotel", "check_in": "2025-11-10", "nights": 2}),
        )
        .await;
    assert_eq!(out["result"]["success"], json!(true));
    let item_id = out["result"]["cart_item"]["id"].as_str().unwrap().to_string();

    let out = registry.dispatch("view_cart", json!({})).await;
    assert_eq!(out["result"]["count"], json!(1));
    assert_eq!(out["visual"]["kind"], json!("cart_drawer"));

    let out = registry.dispatch("remove_from_cart", json!({"cart_item_id": item_id})).await;
    assert_eq!(out["result"]["count"], json!(0));
    assert_eq!(store.cart_summary(vox_session::DEFAULT_SESSION).count, 0);
}

#[tokio::test]
async fn test_betting_flow_through_dispatch() {
    let store = Arc::new(SessionStore::new());
    let registry = vox_tool::full_registry(Arc::clone(&store));

    let out = registry
        .dispatch(
            "add_to_bet_slip",
            json!({"event_id": "epl-ars-che-2025-09-13", "selection": "home", "stake": 20.0}),
        )
        .await;
    assert_eq!(out["result"]["success"], json!(true));

    let out = registry.dispatch("place_bet", json!({})).await;
    assert!(out["result"]["error"].as_str().unwrap().contains("Age verification"));
    assert_eq!(store.slip_summary(vox_session::DEFAULT_SESSION).count, 1);

    let out = registry.dispatch("place_bet", json!({"age_verified": true})).await;
    assert_eq!(out["result"]["success"], json!(true));
    assert_eq!(store.slip_summary(vox_session::DEFAULT_SESSION).count, 0);
}
