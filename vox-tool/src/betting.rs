//! Sports-betting tools: fixture search, odds lookup, and the bet slip.
//!
//! `place_bet` is the only gated operation: it refuses to run without an
//! explicit age-verification confirmation, and a refusal leaves the slip
//! untouched.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;
use vox_core::{Result, Tool, ToolOutput, VisualHint};
use vox_query::EventFilter;
use vox_session::{BetSelection, SessionStore, SlipSummary};

use crate::registry::parse_args;

fn default_limit() -> usize {
    10
}

fn default_session() -> String {
    vox_session::DEFAULT_SESSION.to_string()
}

fn default_market() -> String {
    "match_winner".to_string()
}

fn default_stake() -> f64 {
    10.0
}

fn slip_panel(summary: &SlipSummary) -> VisualHint {
    VisualHint::new(
        "bet_slip_panel",
        json!({
            "selections": summary.selections,
            "combined_odds": summary.combined_odds,
            "total_stake": summary.total_stake,
            "potential_return": summary.potential_return,
        }),
    )
}

fn slip_result(summary: &SlipSummary) -> Value {
    json!({
        "selections": summary.selections,
        "count": summary.count,
        "combined_odds": summary.combined_odds,
        "total_stake": summary.total_stake,
        "potential_return": summary.potential_return,
    })
}

// ── search_events ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchEventsRequest {
    #[serde(default)]
    league: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default = "default_limit")]
    limit: usize,
}

pub struct SearchEventsTool;

#[async_trait]
impl Tool for SearchEventsTool {
    fn name(&self) -> &str {
        "search_events"
    }

    fn description(&self) -> &str {
        "Search upcoming football fixtures by league or team"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "league": {
                    "type": "string",
                    "description": "Filter by league name, e.g. 'Premier League'"
                },
                "team": { "type": "string", "description": "Filter by team name, either side" },
                "limit": { "type": "number", "description": "Max results (default: 10)" }
            }
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: SearchEventsRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let filter = EventFilter {
            league: req.league,
            team: req.team,
            limit: Some(req.limit),
            ..Default::default()
        };
        let events = vox_query::search_events(vox_catalog::events(), &filter);
        Ok(ToolOutput::new(json!({ "events": events, "count": events.len() })))
    }
}

// ── get_event_odds ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct EventOddsRequest {
    event_id: String,
}

pub struct GetEventOddsTool;

#[async_trait]
impl Tool for GetEventOddsTool {
    fn name(&self) -> &str {
        "get_event_odds"
    }

    fn description(&self) -> &str {
        "Get the full odds for a specific fixture"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "event_id": {
                    "type": "string",
                    "description": "The event ID (e.g., 'epl-ars-che-2025-09-13')"
                }
            },
            "required": ["event_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: EventOddsRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let Some(event) = vox_catalog::event_by_id(&req.event_id) else {
            return Ok(ToolOutput::new(
                json!({ "error": "Event not found", "event_id": req.event_id }),
            ));
        };

        Ok(ToolOutput::new(json!({
            "event_id": event.id,
            "fixture": event.fixture(),
            "league": event.league,
            "kickoff": event.kickoff,
            "venue": event.venue,
            "odds": event.odds,
        })))
    }
}

// ── get_bet_types ───────────────────────────────────────────────────────

pub struct GetBetTypesTool;

#[async_trait]
impl Tool for GetBetTypesTool {
    fn name(&self) -> &str {
        "get_bet_types"
    }

    fn description(&self) -> &str {
        "Explain the available bet types (single, accumulator, each-way, ...)"
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _args: Value) -> Result<ToolOutput> {
        let types = vox_catalog::bet_types();
        Ok(ToolOutput::new(json!({ "bet_types": types, "count": types.len() })))
    }
}

// ── bet slip tools ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AddToBetSlipRequest {
    #[serde(default = "default_session")]
    session_id: String,
    event_id: String,
    #[serde(default = "default_market")]
    market: String,
    /// The pick: "home", "draw", "away", or a named market selection.
    selection: String,
    #[serde(default = "default_stake")]
    stake: f64,
}

pub struct AddToBetSlipTool {
    store: Arc<SessionStore>,
}

impl AddToBetSlipTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AddToBetSlipTool {
    fn name(&self) -> &str {
        "add_to_bet_slip"
    }

    fn description(&self) -> &str {
        "Add a selection to the bet slip at the current odds"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" },
                "event_id": { "type": "string", "description": "The fixture to bet on" },
                "market": {
                    "type": "string",
                    "description": "Market name (default: 'match_winner')"
                },
                "selection": {
                    "type": "string",
                    "description": "'home', 'draw', 'away', or a named market selection like 'both_teams_to_score'"
                },
                "stake": { "type": "number", "description": "Stake in GBP (default: 10)" }
            },
            "required": ["event_id", "selection"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: AddToBetSlipRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let Some(event) = vox_catalog::event_by_id(&req.event_id) else {
            return Ok(ToolOutput::new(
                json!({ "error": "Event not found", "event_id": req.event_id }),
            ));
        };
        let Some(odds) = event.odds_for(&req.selection) else {
            return Ok(ToolOutput::new(json!({
                "error": "Unknown selection for this fixture",
                "selection": req.selection,
            })));
        };

        let selection = BetSelection::new(
            event.id.clone(),
            event.fixture(),
            req.market,
            req.selection,
            odds,
            req.stake,
        );
        let added = selection.clone();
        let summary = self.store.add_selection(&req.session_id, selection);

        let visual = slip_panel(&summary);
        Ok(ToolOutput::with_visual(
            json!({ "success": true, "selection": added, "slip": slip_result(&summary) }),
            visual,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct SessionRequest {
    #[serde(default = "default_session")]
    session_id: String,
}

pub struct ViewBetSlipTool {
    store: Arc<SessionStore>,
}

impl ViewBetSlipTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ViewBetSlipTool {
    fn name(&self) -> &str {
        "view_bet_slip"
    }

    fn description(&self) -> &str {
        "View the current bet slip with combined odds and potential return"
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

        let summary = self.store.slip_summary(&req.session_id);
        let visual = slip_panel(&summary);
        Ok(ToolOutput::with_visual(slip_result(&summary), visual))
    }
}

#[derive(Debug, Deserialize)]
struct RemoveFromBetSlipRequest {
    #[serde(default = "default_session")]
    session_id: String,
    selection_id: String,
}

pub struct RemoveFromBetSlipTool {
    store: Arc<SessionStore>,
}

impl RemoveFromBetSlipTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for RemoveFromBetSlipTool {
    fn name(&self) -> &str {
        "remove_from_bet_slip"
    }

    fn description(&self) -> &str {
        "Remove a selection from the bet slip"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" },
                "selection_id": { "type": "string", "description": "The selection ID to remove" }
            },
            "required": ["selection_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: RemoveFromBetSlipRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        let summary = self.store.remove_selection(&req.session_id, &req.selection_id);
        let visual = slip_panel(&summary);
        let mut result = slip_result(&summary);
        result["success"] = json!(true);
        Ok(ToolOutput::with_visual(result, visual))
    }
}

pub struct ClearBetSlipTool {
    store: Arc<SessionStore>,
}

impl ClearBetSlipTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ClearBetSlipTool {
    fn name(&self) -> &str {
        "clear_bet_slip"
    }

    fn description(&self) -> &str {
        "Clear all selections from the bet slip"
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

        self.store.clear_slip(&req.session_id);
        Ok(ToolOutput::new(
            json!({ "success": true, "message": "Bet slip cleared", "count": 0 }),
        ))
    }
}

// ── place_bet ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PlaceBetRequest {
    #[serde(default = "default_session")]
    session_id: String,
    /// Must be explicitly true; the agent asks the caller to confirm first.
    #[serde(default)]
    age_verified: bool,
}

pub struct PlaceBetTool {
    store: Arc<SessionStore>,
}

impl PlaceBetTool {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for PlaceBetTool {
    fn name(&self) -> &str {
        "place_bet"
    }

    fn description(&self) -> &str {
        "Place the bet slip as a single accumulator bet. Requires the caller to have confirmed they are 18 or over."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": { "type": "string", "description": "Session identifier" },
                "age_verified": {
                    "type": "boolean",
                    "description": "Set to true only after the caller confirms they are 18 or over"
                }
            },
            "required": ["age_verified"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let req: PlaceBetRequest = match parse_args(args) {
            Ok(req) => req,
            Err(out) => return Ok(out),
        };

        if !req.age_verified {
            // Refused before any state is touched; the slip survives intact.
            return Ok(ToolOutput::error(
                "Age verification required: confirm the caller is 18 or over before placing a bet",
            ));
        }

        let summary = self.store.slip_summary(&req.session_id);
        if summary.count == 0 {
            return Ok(ToolOutput::error("Bet slip is empty"));
        }

        let receipt = json!({
            "success": true,
            "bet_id": format!("bet-{}", Uuid::new_v4()),
            "placed_at": Utc::now(),
            "selections": summary.selections,
            "count": summary.count,
            "total_stake": summary.total_stake,
            "combined_odds": summary.combined_odds,
            "potential_return": summary.potential_return,
        });
        self.store.clear_slip(&req.session_id);

        let visual = slip_panel(&self.store.slip_summary(&req.session_id));
        Ok(ToolOutput::with_visual(receipt, visual))
    }
}
