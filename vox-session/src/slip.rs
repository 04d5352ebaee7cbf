//! Bet-slip selections and accumulator math.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One selection on a bet slip, referencing a fixture by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BetSelection {
    /// Selection id, e.g. "sel-9ac2…".
    pub id: String,
    pub event_id: String,
    /// "Home vs Away" label.
    pub fixture: String,
    /// Market name, e.g. "match_winner" or "both_teams_to_score".
    pub market: String,
    /// The pick within the market, e.g. "home" or "yes".
    pub selection: String,
    /// Decimal odds at add time.
    pub odds: f64,
    pub stake: f64,
}

impl BetSelection {
    pub fn new(
        event_id: impl Into<String>,
        fixture: impl Into<String>,
        market: impl Into<String>,
        selection: impl Into<String>,
        odds: f64,
        stake: f64,
    ) -> Self {
        Self {
            id: format!("sel-{}", Uuid::new_v4()),
            event_id: event_id.into(),
            fixture: fixture.into(),
            market: market.into(),
            selection: selection.into(),
            odds,
            stake,
        }
    }
}

/// Current slip contents with derived accumulator figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlipSummary {
    pub selections: Vec<BetSelection>,
    pub count: usize,
    /// Σ selection stakes.
    pub total_stake: f64,
    /// Π selection odds, 0.0 for an empty slip.
    pub combined_odds: f64,
    /// stake_per_selection × combined odds, using the first selection's
    /// stake as the accumulator stake.
    pub potential_return: f64,
}

impl SlipSummary {
    pub fn from_selections(selections: Vec<BetSelection>) -> Self {
        if selections.is_empty() {
            return Self {
                selections,
                count: 0,
                total_stake: 0.0,
                combined_odds: 0.0,
                potential_return: 0.0,
            };
        }
        let combined_odds = round2(selections.iter().map(|s| s.odds).product());
        let total_stake = round2(selections.iter().map(|s| s.stake).sum());
        let potential_return = round2(selections[0].stake * combined_odds);
        Self { count: selections.len(), selections, total_stake, combined_odds, potential_return }
    }
}
