//! Sport event (fixture) and bet-type records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An upcoming football fixture with its headline betting markets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SportEvent {
    /// Unique id, e.g. "epl-ars-che-2025-09-13".
    pub id: String,
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub kickoff: DateTime<Utc>,
    pub venue: String,
    pub odds: MatchOdds,
}

/// Decimal odds for the main match markets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchOdds {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    /// Named extra markets, e.g. "both_teams_to_score" or "over_2_5_goals".
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Market {
    pub name: String,
    pub selection: String,
    pub odds: f64,
}

/// A bet type explained for customers (single, accumulator, each-way, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BetType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub example: String,
}

impl SportEvent {
    /// "Home vs Away" label used on bet slips.
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// Odds for a named selection across the main and extra markets.
    pub fn odds_for(&self, selection: &str) -> Option<f64> {
        let sel = selection.trim().to_lowercase();
        match sel.as_str() {
            "home" | "home_win" | "1" => Some(self.odds.home_win),
            "draw" | "x" => Some(self.odds.draw),
            "away" | "away_win" | "2" => Some(self.odds.away_win),
            _ => self
                .odds
                .markets
                .iter()
                .find(|m| m.name.to_lowercase() == sel || m.selection.to_lowercase() == sel)
                .map(|m| m.odds),
        }
    }
}
