use serde_json::json;
use vox_session::{BetSelection, CartItem, SessionStore};

fn item(deal_id: &str, nights: u32, price: f64) -> CartItem {
    CartItem::new(deal_id, "Some Hotel", "Prague", "2025-10-01", nights, 2, price)
}

#[test]
fn test_add_then_remove_leaves_no_trace() {
    let store = SessionStore::new();

    let summary = store.add_cart_item("s1", item("d1", 2, 100.0));
    assert_eq!(summary.count, 1);
    assert_eq!(summary.total, 200.0);

    let added_id = summary.items[0].id.clone();
    let summary = store.remove_cart_item("s1", &added_id);
    assert_eq!(summary.count, 0);
    assert!(summary.items.iter().all(|i| i.id != added_id));
}

#[test]
fn test_aggregate_matches_recompute() {
    let store = SessionStore::new();
    store.add_cart_item("s1", item("d1", 2, 100.0));
    store.add_cart_item("s1", item("d2", 3, 80.0));
    let summary = store.add_cart_item("s1", item("d3", 1, 55.5));

    let direct: f64 = summary.items.iter().map(|i| i.price_per_night * i.nights as f64).sum();
    assert_eq!(summary.total, direct);

    // Removing one keeps the aggregate in sync with the remaining items.
    let victim = summary.items[1].id.clone();
    let summary = store.remove_cart_item("s1", &victim);
    let direct: f64 = summary.items.iter().map(|i| i.total_price).sum();
    assert_eq!(summary.total, direct);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let store = SessionStore::new();
    store.add_cart_item("s1", item("d1", 2, 100.0));
    let summary = store.remove_cart_item("s1", "cart-does-not-exist");
    assert_eq!(summary.count, 1);
}

#[test]
fn test_sessions_are_isolated() {
    let store = SessionStore::new();
    store.add_cart_item("alice", item("d1", 2, 100.0));
    store.add_cart_item("bob", item("d2", 1, 50.0));

    assert_eq!(store.cart_summary("alice").count, 1);
    assert_eq!(store.cart_summary("bob").count, 1);
    assert_eq!(store.cart_summary("alice").items[0].deal_id, "d1");
}

#[test]
fn test_clear_and_absent_session() {
    let store = SessionStore::new();
    store.clear_cart("never-seen"); // no-op, no bucket created
    assert_eq!(store.session_count(), 0);

    store.add_cart_item("s1", item("d1", 2, 100.0));
    store.clear_cart("s1");
    assert_eq!(store.cart_summary("s1").count, 0);
}

#[test]
fn test_slip_combined_odds() {
    let store = SessionStore::new();
    for odds in [2.0, 3.0, 1.5] {
        store.add_selection(
            "s1",
            BetSelection::new("e1", "A vs B", "match_winner", "home", odds, 10.0),
        );
    }
    let summary = store.slip_summary("s1");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.combined_odds, 9.0);
    assert_eq!(summary.potential_return, 90.0);
}

#[test]
fn test_slip_remove_recomputes() {
    let store = SessionStore::new();
    store.add_selection("s1", BetSelection::new("e1", "A vs B", "m", "home", 2.0, 10.0));
    let summary =
        store.add_selection("s1", BetSelection::new("e2", "C vs D", "m", "away", 3.0, 10.0));
    assert_eq!(summary.combined_odds, 6.0);

    let sel_id = summary.selections[1].id.clone();
    let summary = store.remove_selection("s1", &sel_id);
    assert_eq!(summary.combined_odds, 2.0);
    assert_eq!(summary.potential_return, 20.0);
}

#[test]
fn test_preferences_roundtrip() {
    let store = SessionStore::new();
    assert!(store.preferences("s1").is_empty());

    store.set_preference("s1", "budget_max", json!(600));
    store.set_preference("s1", "home_city", json!("Warsaw"));
    store.set_preference("s1", "budget_max", json!(500)); // overwrite

    let prefs = store.preferences("s1");
    assert_eq!(prefs.len(), 2);
    assert_eq!(prefs["budget_max"], json!(500));
}

#[test]
fn test_end_session_drops_bucket() {
    let store = SessionStore::new();
    store.add_cart_item("s1", item("d1", 2, 100.0));
    store.set_preference("s1", "k", json!(1));
    assert_eq!(store.session_count(), 1);

    store.end_session("s1");
    assert_eq!(store.session_count(), 0);
    assert_eq!(store.cart_summary("s1").count, 0);
    assert!(store.preferences("s1").is_empty());
}

#[test]
fn test_concurrent_adds_are_not_lost() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(SessionStore::new());
    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            store.add_cart_item("shared", item(&format!("d{i}"), 1, 10.0));
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.cart_summary("shared").count, 8);
}
