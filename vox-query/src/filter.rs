//! Query filter types.
//!
//! Every field is optional: a present field narrows the candidate set, an
//! absent field imposes no constraint. Filtering is a strict conjunction
//! across fields; the `suitable_for` tag list is an OR within its field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vox_catalog::{Deal, SportEvent};

/// Filter parameters for one deal query. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DealFilter {
    /// Destination city, case-insensitive exact match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Inclusive lower bound on the deal price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    /// Inclusive upper bound on the deal price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    /// Deal type, exact match (e.g. "hotel").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<String>,
    /// Audience tags; a record matches if it carries any of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitable_for: Option<Vec<String>>,
    /// Inclusive minimum rating, 0-5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Inclusive minimum guest capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_guests: Option<u32>,
    /// `true` keeps pet-friendly properties only; `false`/absent is no
    /// constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets_allowed: Option<bool>,
    /// Inclusive minimum discount percent (best-value preset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_discount: Option<u32>,
    /// Keep only deals flagged as ending soon (urgency preset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_soon: Option<bool>,
    /// Keep only 4/5-star properties rated 4.5+ (luxury preset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luxury: Option<bool>,
    /// Truncate the sorted result to the first N. Applied after sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl DealFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_budget_max(mut self, max: f64) -> Self {
        self.budget_max = Some(max);
        self
    }

    pub fn with_budget_min(mut self, min: f64) -> Self {
        self.budget_min = Some(min);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.suitable_for = Some(tags);
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a deal satisfies every supplied predicate.
    pub fn matches(&self, deal: &Deal) -> bool {
        if let Some(city) = &self.city {
            if !deal.destination.city.eq_ignore_ascii_case(city.trim()) {
                return false;
            }
        }
        if let Some(min) = self.budget_min {
            if deal.pricing.deal_price < min {
                return false;
            }
        }
        if let Some(max) = self.budget_max {
            if deal.pricing.deal_price > max {
                return false;
            }
        }
        if let Some(deal_type) = &self.deal_type {
            if deal.deal_type != *deal_type {
                return false;
            }
        }
        if let Some(tags) = &self.suitable_for {
            let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
            let any = deal
                .features
                .suitable_for
                .iter()
                .any(|t| wanted.iter().any(|w| w == &t.to_lowercase()));
            if !any {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if deal.rating < min_rating {
                return false;
            }
        }
        if let Some(min_guests) = self.min_guests {
            if deal.features.max_guests < min_guests {
                return false;
            }
        }
        if self.pets_allowed == Some(true) && !deal.features.pets_allowed {
            return false;
        }
        if let Some(min_discount) = self.min_discount {
            if deal.pricing.discount_percent < min_discount {
                return false;
            }
        }
        if self.ending_soon == Some(true) && !deal.urgency.ending_soon {
            return false;
        }
        if self.luxury == Some(true) && !deal.is_luxury() {
            return false;
        }
        true
    }
}

/// Filter parameters for one fixture query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventFilter {
    /// Case-insensitive substring match on the league name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    /// Case-insensitive substring match on either team name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Inclusive kickoff lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Inclusive kickoff upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league = Some(league.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, event: &SportEvent) -> bool {
        if let Some(league) = &self.league {
            if !event.league.to_lowercase().contains(&league.trim().to_lowercase()) {
                return false;
            }
        }
        if let Some(team) = &self.team {
            let wanted = team.trim().to_lowercase();
            let hit = event.home_team.to_lowercase().contains(&wanted)
                || event.away_team.to_lowercase().contains(&wanted);
            if !hit {
                return false;
            }
        }
        if let Some(from) = self.from {
            if event.kickoff < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if event.kickoff > to {
                return false;
            }
        }
        true
    }
}
