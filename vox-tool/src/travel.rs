//! Travel-agent tools: deal discovery, comparison, cart and preferences.
//!
//! Deliberately thin primitives. The model does the reasoning and picks the
//! filters; these executors run the catalog query, mutate session state, and
//! attach a presentation hint derived from the result.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use vox_catalog::{Deal, TravelMode};
use vox_core::{Result, Tool, ToolOutput, VisualHint};
use vox_query::DealFilter;
use vox_session::{CartItem, CartSummary, SessionStore};

use crate::registry::parse_args;

fn default_limit() -> usize {
    10
}

fn default_deal_type() -> String {
    "hotel".to_string()
}

fn default_session() -> String {
    vox_session::DEFAULT_SESSION.to_string()
}

/// Hint kind keyed off the result cardinality: nothing, one, or many.
fn search_visual(deals: &[Deal]) -> VisualHint {
    let kind = match deals.len() {
        0 => "empty_state",
        1 => "deal_hero",
        _ => "deal_grid",
    };
    VisualHint::new(kind, json!({ "deals": deals }))
}

fn cart_drawer(summary: &CartSummary) -> VisualHint {
    VisualHint::new("cart_drawer", json!({ "items": summary.items, "total": summary.total }))
}

// ── search_deals ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchDealsRequest {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    budget_min: Option<f64>,
    #[serde(default)]
    budget_max: Option<f64>,
    #[serde(default = "default_deal_type")]
    deal_type: String,
    #[serde(default)]
    suitable_for: Option<Vec<String>>,
    #[serde(default)]
    min_rating: Option<f64>,
    #[serde(default)]
    min_guests: Option<u32>,
    #[serde(default)]
    pets_allowed: Option<bool>,
    #[serde(default = "default_limit")]
    limit: usize,
}

pub struct SearchDealsTool;

#[async_trait]
impl Tool for SearchDealsTool {
    fn name(&self) -> &str {
        "search_deals"
    }

    fn description(&self) -> &str {
        "Search for travel deals with flexible filters. Use this for most search queries."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "Filter by destination city (Warsaw, Prague, Zakopane, or Sopot)"
                },
                "budget_min": { "type": "number", "description": "Minimum price in GBP" },
                "budget_max": { "type": "number", "description": "Maximum price in GBP" },
                "deal_type": {
                    "type": "string",
                    "enum": ["hotel"],
                    "description": "Type of deal (currently only hotel)"
                },
                "suitable_for": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Tags like 'romantic', 'beach', 'skiing', 'families', 'pets', 'budget', 'luxury', 'business'"
                },
                "min_rating": { "type": "number", "description": "Minimum rating (0-5)" },
                "min_guests": {
                    "type": "number",
                    "description": "Minimum guest capacity needed, e.g. 3 for a family of 3"
                },
                "pets_allowed": {
                    "type": "boolean",
                    "description": "Set to true to filter for pet-friendly properties only"
                },
                "limit": { "type": "number", "description": "Max results to return (default: 10)" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: SearchDealsRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let filter = DealFilter {
            city: req.city,
            budget_min: req.budget_min,
            budget_max: req.budget_max,
            deal_type: Some(req.deal_type),
            suitable_for: req.suitable_for,
            min_rating: req.min_rating,
            min_guests: req.min_guests,
            pets_allowed: req.pets_allowed,
            limit: Some(req.limit),
            ..Default::default()
        };
        let deals = vox_query::search_deals(vox_catalog::deals(), &filter);

        // Echo back the applied filters; the limit is mechanics, not intent.
        let mut filters_applied = serde_json::to_value(&filter)?;
        if let Some(obj) = filters_applied.as_object_mut() {
            obj.remove("limit");
        }

        let visual = search_visual(&deals);
        Ok(ToolOutput::with_visual(
            json!({ "deals": deals, "count": deals.len(), "filters_applied": filters_applied }),
            visual,
        ))
    }
}

// ── get_deal_details ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DealDetailsRequest {
    deal_id: String,
}

pub struct GetDealDetailsTool;

#[async_trait]
impl Tool for GetDealDetailsTool {
    fn name(&self) -> &str {
        "get_deal_details"
    }

    fn description(&self) -> &str {
        "Get full details about a specific deal"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "deal_id": {
                    "type": "string",
                    "description": "The deal ID (e.g., 'warsaw-royal-palace-hotel')"
                }
            },
            "required": ["deal_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: DealDetailsRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let Some(deal) = vox_catalog::deal_by_id(&req.deal_id) else {
            return Ok(ToolOutput::new(
                json!({ "error": "Deal not found", "deal_id": req.deal_id }),
            ));
        };

        let visual = VisualHint::new("deal_detail_page", json!({ "deal": deal }));
        Ok(ToolOutput::with_visual(json!({ "deal": deal }), visual))
    }
}

// ── preset searches ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LimitRequest {
    #[serde(default = "default_limit")]
    limit: usize,
}

pub struct GetUrgentDealsTool;

#[async_trait]
impl Tool for GetUrgentDealsTool {
    fn name(&self) -> &str {
        "get_urgent_deals"
    }

    fn description(&self) -> &str {
        "Get deals that are ending soon or have limited spots left"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": { "type": "number", "description": "Max results (default: 10)" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: LimitRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let deals = vox_query::urgent_deals(vox_catalog::deals(), req.limit);
        let visual =
            VisualHint::new("deal_grid", json!({ "deals": deals, "highlight_urgency": true }));
        Ok(ToolOutput::with_visual(
            json!({ "deals": deals, "count": deals.len(), "urgency_filter": "ending_soon" }),
            visual,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct BestValueRequest {
    #[serde(default = "default_min_discount")]
    min_discount: u32,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_min_discount() -> u32 {
    30
}

pub struct GetBestValueDealsTool;

#[async_trait]
impl Tool for GetBestValueDealsTool {
    fn name(&self) -> &str {
        "get_best_value_deals"
    }

    fn description(&self) -> &str {
        "Get deals with highest discounts (30%+ savings)"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "min_discount": {
                    "type": "number",
                    "description": "Minimum discount percentage (default: 30)"
                },
                "limit": { "type": "number", "description": "Max results (default: 10)" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: BestValueRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let deals = vox_query::best_value_deals(vox_catalog::deals(), req.min_discount, req.limit);
        let visual =
            VisualHint::new("deal_grid", json!({ "deals": deals, "highlight_savings": true }));
        Ok(ToolOutput::with_visual(
            json!({ "deals": deals, "count": deals.len(), "min_discount": req.min_discount }),
            visual,
        ))
    }
}

pub struct GetLuxuryDealsTool;

#[async_trait]
impl Tool for GetLuxuryDealsTool {
    fn name(&self) -> &str {
        "get_luxury_deals"
    }

    fn description(&self) -> &str {
        "Get premium 4-5 star hotel deals"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": { "type": "number", "description": "Max results (default: 10)" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: LimitRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let deals = vox_query::luxury_deals(vox_catalog::deals(), req.limit);
        let visual = VisualHint::new("deal_grid", json!({ "deals": deals }));
        Ok(ToolOutput::with_visual(json!({ "deals": deals, "count": deals.len() }), visual))
    }
}

#[derive(Debug, Deserialize)]
struct BudgetRequest {
    #[serde(default = "default_max_price")]
    max_price: f64,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_max_price() -> f64 {
    400.0
}

pub struct GetBudgetDealsTool;

#[async_trait]
impl Tool for GetBudgetDealsTool {
    fn name(&self) -> &str {
        "get_budget_deals"
    }

    fn description(&self) -> &str {
        "Get budget-friendly deals under a price threshold"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "max_price": {
                    "type": "number",
                    "description": "Maximum price in GBP (default: 400)"
                },
                "limit": { "type": "number", "description": "Max results (default: 10)" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: BudgetRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let deals = vox_query::budget_deals(vox_catalog::deals(), req.max_price, req.limit);
        let visual = VisualHint::new("deal_grid", json!({ "deals": deals }));
        Ok(ToolOutput::with_visual(
            json!({ "deals": deals, "count": deals.len(), "max_price": req.max_price }),
            visual,
        ))
    }
}

// ── compare_deals ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CompareDealsRequest {
    deal_ids: Vec<String>,
    #[serde(default = "default_aspects")]
    aspects: Vec<String>,
    #[serde(default)]
    price_params: Option<PriceParams>,
}

fn default_aspects() -> Vec<String> {
    ["overview", "ratings", "rooms", "facilities"].map(String::from).to_vec()
}

#[derive(Debug, Deserialize)]
struct PriceParams {
    #[serde(default = "default_price_nights")]
    nights: u32,
    #[serde(default = "default_guests")]
    guests: u32,
}

fn default_price_nights() -> u32 {
    1
}

fn default_guests() -> u32 {
    2
}

pub struct CompareDealsTool;

#[async_trait]
impl Tool for CompareDealsTool {
    fn name(&self) -> &str {
        "compare_deals"
    }

    fn description(&self) -> &str {
        "Compare 2 hotels side by side. You decide what to compare based on user needs: rooms, facilities, ratings, pricing."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "deal_ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Array of 2 deal IDs to compare side by side"
                },
                "aspects": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "What to compare: 'overview', 'ratings', 'rooms', 'facilities', 'pricing'. Defaults to all."
                },
                "price_params": {
                    "type": "object",
                    "description": "Optional: if comparing total prices, specify nights and guests",
                    "properties": {
                        "nights": { "type": "number", "description": "Number of nights" },
                        "guests": { "type": "number", "description": "Number of guests" }
                    }
                }
            },
            "required": ["deal_ids"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let mut req: CompareDealsRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        if req.deal_ids.len() < 2 {
            return Ok(ToolOutput::error("Need at least 2 deal IDs to compare"));
        }
        // Side-by-side view holds exactly two.
        req.deal_ids.truncate(2);

        let deals = vox_query::deals_by_ids(vox_catalog::deals(), &req.deal_ids);
        if deals.len() < 2 {
            return Ok(ToolOutput::error("Could not find enough deals to compare"));
        }

        let hotels: Vec<Value> = deals
            .iter()
            .map(|deal| {
                let mut hotel = json!({
                    "id": deal.id,
                    "name": deal.title,
                    "city": deal.destination.city,
                    "stars": deal.stars,
                    "rating": deal.rating,
                    "review_count": deal.review_count,
                    "price_per_night": deal.pricing.deal_price,
                });
                if req.aspects.iter().any(|a| a == "rooms") {
                    hotel["rooms"] = json!({
                        "room_type": deal.features.room_type,
                        "accommodation": deal.features.accommodation,
                        "max_guests": deal.features.max_guests,
                    });
                }
                if req.aspects.iter().any(|a| a == "facilities") {
                    hotel["facilities"] = json!(deal.features.amenities);
                }
                if let Some(params) = &req.price_params {
                    let base_price = deal.pricing.deal_price * params.nights as f64;
                    hotel["price_calculation"] = json!({
                        "nights": params.nights,
                        "guests": params.guests,
                        "price_per_night": deal.pricing.deal_price,
                        "base_price": base_price,
                        "total": base_price,
                    });
                }
                hotel
            })
            .collect();

        let comparison = json!({
            "hotels": hotels,
            "aspects": req.aspects,
            "has_price_calculation": req.price_params.is_some(),
        });
        let visual = VisualHint::new("deal_comparison", comparison.clone());
        Ok(ToolOutput::with_visual(json!({ "comparison": comparison, "count": 2 }), visual))
    }
}

// ── cart tools ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AddToCartRequest {
    #[serde(default = "default_session")]
    session_id: String,
    deal_id: String,
    /// Check-in date, YYYY-MM-DD.
    check_in: String,
    #[serde(default = "default_nights")]
    nights: u32,
    #[serde(default = "default_guests")]
    guests: u32,
}

fn default_nights() -> u32 {
    3
}

pub struct AddToCartTool {
    store: Arc<SessionStore>,
}

impl AddToCartTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AddToCartTool {
    fn name(&self) -> &str {
        "add_to_cart"
    }

    fn description(&self) -> &str {
        "Add a deal to the shopping cart with travel details"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" },
                "deal_id": { "type": "string", "description": "The deal ID to add" },
                "check_in": { "type": "string", "description": "Check-in date (YYYY-MM-DD format)" },
                "nights": { "type": "number", "description": "Number of nights" },
                "guests": { "type": "number", "description": "Number of guests" }
            },
            "required": ["deal_id", "check_in", "nights"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: AddToCartRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let Some(deal) = vox_catalog::deal_by_id(&req.deal_id) else {
            return Ok(ToolOutput::error("Deal not found"));
        };

        let item = CartItem::new(
            deal.id.clone(),
            deal.title.clone(),
            deal.destination.city.clone(),
            req.check_in,
            req.nights,
            req.guests,
            deal.pricing.deal_price,
        );
        let added = item.clone();
        let summary = self.store.add_cart_item(&req.session_id, item);

        let visual = VisualHint::new(
            "cart_confirmation",
            json!({ "item": added, "cart_count": summary.count }),
        );
        Ok(ToolOutput::with_visual(
            json!({
                "success": true,
                "cart_item": added,
                "cart_count": summary.count,
                "cart_total": summary.total,
            }),
            visual,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct SessionRequest {
    #[serde(default = "default_session")]
    session_id: String,
}

pub struct ViewCartTool {
    store: Arc<SessionStore>,
}

impl ViewCartTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ViewCartTool {
    fn name(&self) -> &str {
        "view_cart"
    }

    fn description(&self) -> &str {
        "View all items in the shopping cart"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: SessionRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let summary = self.store.cart_summary(&req.session_id);
        let visual = cart_drawer(&summary);
        Ok(ToolOutput::with_visual(
            json!({ "items": summary.items, "count": summary.count, "total": summary.total }),
            visual,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct RemoveFromCartRequest {
    #[serde(default = "default_session")]
    session_id: String,
    cart_item_id: String,
}

pub struct RemoveFromCartTool {
    store: Arc<SessionStore>,
}

impl RemoveFromCartTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for RemoveFromCartTool {
    fn name(&self) -> &str {
        "remove_from_cart"
    }

    fn description(&self) -> &str {
        "Remove an item from the cart"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" },
                "cart_item_id": { "type": "string", "description": "The cart item ID to remove" }
            },
            "required": ["cart_item_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: RemoveFromCartRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let summary = self.store.remove_cart_item(&req.session_id, &req.cart_item_id);
        let visual = cart_drawer(&summary);
        Ok(ToolOutput::with_visual(
            json!({
                "success": true,
                "items": summary.items,
                "count": summary.count,
                "total": summary.total,
            }),
            visual,
        ))
    }
}

pub struct ClearCartTool {
    store: Arc<SessionStore>,
}

impl ClearCartTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ClearCartTool {
    fn name(&self) -> &str {
        "clear_cart"
    }

    fn description(&self) -> &str {
        "Clear all items from the cart"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: SessionRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        self.store.clear_cart(&req.session_id);
        Ok(ToolOutput::new(
            json!({ "success": true, "message": "Cart cleared", "count": 0, "total": 0.0 }),
        ))
    }
}

// ── preference tools ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SavePreferenceRequest {
    #[serde(default = "default_session")]
    session_id: String,
    key: String,
    value: Value,
}

pub struct SavePreferenceTool {
    store: Arc<SessionStore>,
}

impl SavePreferenceTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for SavePreferenceTool {
    fn name(&self) -> &str {
        "save_preference"
    }

    fn description(&self) -> &str {
        "Save a user preference extracted from conversation (budget range, interests, home city, travel style, etc.)"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" },
                "key": {
                    "type": "string",
                    "description": "Preference key (e.g., 'budget_max', 'home_city', 'interests')"
                },
                "value": { "description": "Preference value (any type)" }
            },
            "required": ["key", "value"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: SavePreferenceRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        self.store.set_preference(&req.session_id, &req.key, req.value.clone());
        let all = self.store.preferences(&req.session_id);
        Ok(ToolOutput::new(json!({
            "success": true,
            "key": req.key,
            "value": req.value,
            "all_preferences": all,
        })))
    }
}

pub struct GetPreferencesTool {
    store: Arc<SessionStore>,
}

impl GetPreferencesTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetPreferencesTool {
    fn name(&self) -> &str {
        "get_preferences"
    }

    fn description(&self) -> &str {
        "Get all saved user preferences"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: SessionRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let prefs = self.store.preferences(&req.session_id);
        Ok(ToolOutput::new(
            json!({ "has_preferences": !prefs.is_empty(), "preferences": prefs }),
        ))
    }
}

// ── utility tools ───────────────────────────────────────────────────────

pub struct GetAvailableCitiesTool;

#[async_trait]
impl Tool for GetAvailableCitiesTool {
    fn name(&self) -> &str {
        "get_available_cities"
    }

    fn description(&self) -> &str {
        "Get list of all cities we have deals for"
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _args: Value) -> Result<ToolOutput> {
        let cities = vox_catalog::cities();
        Ok(ToolOutput::new(json!({ "count": cities.len(), "cities": cities })))
    }
}

#[derive(Debug, Deserialize)]
struct GetDistanceRequest {
    from: String,
    to: String,
    #[serde(default)]
    mode: TravelMode,
}

pub struct GetDistanceTool;

#[async_trait]
impl Tool for GetDistanceTool {
    fn name(&self) -> &str {
        "get_distance"
    }

    fn description(&self) -> &str {
        "Get the distance and estimated travel time between two cities"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "from": { "type": "string", "description": "Origin city" },
                "to": { "type": "string", "description": "Destination city" },
                "mode": {
                    "type": "string",
                    "enum": ["flight", "car", "train"],
                    "description": "Travel mode for the time estimate (default: flight)"
                }
            },
            "required": ["from", "to"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: GetDistanceRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        match vox_catalog::geo::route(&req.from, &req.to, req.mode) {
            Some(route) => Ok(ToolOutput::new(serde_json::to_value(&route)?)),
            None => Ok(ToolOutput::new(
                json!({ "error": "Unknown location", "from": req.from, "to": req.to }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_visual_by_cardinality() {
        let out = SearchDealsTool.execute(json!({"city": "Atlantis"})).await.unwrap();
        assert_eq!(out.visual.unwrap().kind, "empty_state");

        let out = SearchDealsTool.execute(json!({})).await.unwrap();
        assert_eq!(out.visual.unwrap().kind, "deal_grid");
        assert_eq!(out.result["count"], json!(vox_catalog::deals().len().min(10)));
    }

    #[tokio::test]
    async fn test_search_filters_applied_excludes_limit() {
        let out = SearchDealsTool
            .execute(json!({"city": "Prague", "budget_max": 600, "limit": 5}))
            .await
            .unwrap();
        let applied = &out.result["filters_applied"];
        assert_eq!(applied["city"], json!("Prague"));
        assert!(applied.get("limit").is_none());
    }

    #[tokio::test]
    async fn test_deal_details_not_found() {
        let out = GetDealDetailsTool.execute(json!({"deal_id": "nope"})).await.unwrap();
        assert!(out.is_error());
        assert_eq!(out.result["deal_id"], json!("nope"));
    }

    #[tokio::test]
    async fn test_compare_requires_two_ids() {
        let out = CompareDealsTool
            .execute(json!({"deal_ids": ["warsaw-royal-palace-hotel"]}))
            .await
            .unwrap();
        assert!(out.is_error());
    }

    #[tokio::test]
    async fn test_compare_truncates_to_two() {
        let ids: Vec<String> = vox_catalog::deals().iter().take(3).map(|d| d.id.clone()).collect();
        let out = CompareDealsTool.execute(json!({"deal_ids": ids})).await.unwrap();
        assert_eq!(out.result["count"], json!(2));
        assert_eq!(out.result["comparison"]["hotels"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_compare_price_calculation() {
        let ids: Vec<String> = vox_catalog::deals().iter().take(2).map(|d| d.id.clone()).collect();
        let out = CompareDealsTool
            .execute(json!({"deal_ids": ids, "price_params": {"nights": 3}}))
            .await
            .unwrap();
        let hotel = &out.result["comparison"]["hotels"][0];
        let per_night = hotel["price_per_night"].as_f64().unwrap();
        assert_eq!(hotel["price_calculation"]["total"], json!(per_night * 3.0));
        assert_eq!(hotel["price_calculation"]["guests"], json!(2));
    }

    #[tokio::test]
    async fn test_add_to_cart_defaults_and_total() {
        let store = Arc::new(SessionStore::new());
        let tool = AddToCartTool::new(Arc::clone(&store));
        let out = tool
            .execute(json!({"deal_id": "warsaw-royal-palace-hotel", "check_in": "2025-10-01"}))
            .await
            .unwrap();

        assert_eq!(out.result["success"], json!(true));
        assert_eq!(out.result["cart_item"]["nights"], json!(3));
        assert_eq!(out.visual.unwrap().kind, "cart_confirmation");
        assert_eq!(store.cart_summary(vox_session::DEFAULT_SESSION).count, 1);
    }

    #[tokio::test]
    async fn test_add_to_cart_missing_required_field() {
        let store = Arc::new(SessionStore::new());
        let tool = AddToCartTool::new(Arc::clone(&store));
        let out = tool.execute(json!({"deal_id": "warsaw-royal-palace-hotel"})).await.unwrap();

        assert!(out.is_error());
        // Malformed arguments leave no side effects behind.
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn test_preferences_roundtrip_via_tools() {
        let store = Arc::new(SessionStore::new());
        let save = SavePreferenceTool::new(Arc::clone(&store));
        let get = GetPreferencesTool::new(Arc::clone(&store));

        let out = get.execute(json!({})).await.unwrap();
        assert_eq!(out.result["has_preferences"], json!(false));

        save.execute(json!({"key": "budget_max", "value": 600})).await.unwrap();
        let out = get.execute(json!({})).await.unwrap();
        assert_eq!(out.result["has_preferences"], json!(true));
        assert_eq!(out.result["preferences"]["budget_max"], json!(600));
    }

    #[tokio::test]
    async fn test_get_distance_unknown_city() {
        let out =
            GetDistanceTool.execute(json!({"from": "Warsaw", "to": "Atlantis"})).await.unwrap();
        assert!(out.is_error());

        let out = GetDistanceTool
            .execute(json!({"from": "Warsaw", "to": "Prague", "mode": "train"}))
            .await
            .unwrap();
        assert!(out.result["distance_km"].as_f64().unwrap() > 0.0);
        assert_eq!(out.result["mode"], json!("train"));
    }
}
