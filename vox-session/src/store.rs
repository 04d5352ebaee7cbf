//! The session state store.
//!
//! Per-session mutable collections (cart, bet slip, preferences) held in
//! process memory behind an `RwLock`-guarded table. Buckets are created
//! lazily on first write and dropped when the owning call disconnects;
//! there is no TTL and no persistence. The lock gives concurrent sessions
//! the mutual exclusion the original demo lacked.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::cart::{CartItem, CartSummary};
use crate::slip::{BetSelection, SlipSummary};

/// Session id used when a tool call carries none.
pub const DEFAULT_SESSION: &str = "default";

#[derive(Debug, Default, Clone)]
struct SessionData {
    cart: Vec<CartItem>,
    slip: Vec<BetSelection>,
    preferences: HashMap<String, Value>,
}

/// In-memory session state service.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, session_id: &str, f: impl FnOnce(Option<&SessionData>) -> T) -> T {
        let sessions = self.sessions.read().expect("session store lock poisoned");
        f(sessions.get(session_id))
    }

    fn write<T>(&self, session_id: &str, f: impl FnOnce(&mut SessionData) -> T) -> T {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        f(sessions.entry(session_id.to_string()).or_default())
    }

    // ── Cart ────────────────────────────────────────────────────────────

    /// Append a cart item, creating the session bucket on demand.
    pub fn add_cart_item(&self, session_id: &str, item: CartItem) -> CartSummary {
        self.write(session_id, |data| {
            data.cart.push(item);
            CartSummary::from_items(data.cart.clone())
        })
    }

    /// Remove a cart item by line-item id. Unknown ids are a no-op.
    pub fn remove_cart_item(&self, session_id: &str, item_id: &str) -> CartSummary {
        self.write(session_id, |data| {
            data.cart.retain(|i| i.id != item_id);
            CartSummary::from_items(data.cart.clone())
        })
    }

    /// Empty the cart. An absent session is a no-op.
    pub fn clear_cart(&self, session_id: &str) {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        if let Some(data) = sessions.get_mut(session_id) {
            data.cart.clear();
        }
    }

    pub fn cart_summary(&self, session_id: &str) -> CartSummary {
        self.read(session_id, |data| {
            CartSummary::from_items(data.map(|d| d.cart.clone()).unwrap_or_default())
        })
    }

    // ── Bet slip ────────────────────────────────────────────────────────

    pub fn add_selection(&self, session_id: &str, selection: BetSelection) -> SlipSummary {
        self.write(session_id, |data| {
            data.slip.push(selection);
            SlipSummary::from_selections(data.slip.clone())
        })
    }

    /// Remove a selection by id. Unknown ids are a no-op.
    pub fn remove_selection(&self, session_id: &str, selection_id: &str) -> SlipSummary {
        self.write(session_id, |data| {
            data.slip.retain(|s| s.id != selection_id);
            SlipSummary::from_selections(data.slip.clone())
        })
    }

    /// Empty the slip. An absent session is a no-op.
    pub fn clear_slip(&self, session_id: &str) {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        if let Some(data) = sessions.get_mut(session_id) {
            data.slip.clear();
        }
    }

    pub fn slip_summary(&self, session_id: &str) -> SlipSummary {
        self.read(session_id, |data| {
            SlipSummary::from_selections(data.map(|d| d.slip.clone()).unwrap_or_default())
        })
    }

    // ── Preferences ─────────────────────────────────────────────────────

    pub fn set_preference(&self, session_id: &str, key: impl Into<String>, value: Value) {
        self.write(session_id, |data| {
            data.preferences.insert(key.into(), value);
        })
    }

    pub fn preferences(&self, session_id: &str) -> HashMap<String, Value> {
        self.read(session_id, |data| data.map(|d| d.preferences.clone()).unwrap_or_default())
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Drop a session bucket entirely. Called when the owning call ends.
    pub fn end_session(&self, session_id: &str) {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.remove(session_id);
    }

    /// Number of live session buckets.
    pub fn session_count(&self) -> usize {
        self.sessions.read().expect("session store lock poisoned").len()
    }
}
