//! Travel deal records.
//!
//! Records are loaded once at process start and never mutated; "updates"
//! (live availability, price changes) would require a catalog reload, which
//! this demo does not do. Lookups hand out clones so callers can never
//! mutate catalog state through a result.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A travel deal: a discounted hotel stay in one of the catalog cities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    /// Unique id, stable for the process lifetime (e.g. "warsaw-royal-palace-hotel").
    pub id: String,
    /// Deal type; currently always "hotel".
    #[serde(rename = "type")]
    pub deal_type: String,
    pub title: String,
    pub destination: Destination,
    pub dates: DealDates,
    pub pricing: Pricing,
    /// Guest rating, 0-5.
    pub rating: f64,
    pub review_count: u32,
    /// Hotel star class, 0 if unclassified.
    pub stars: u8,
    pub features: Features,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub city: String,
    pub country: String,
    pub region: String,
    pub coordinates: GeoPoint,
}

/// Availability window. Dates are ISO `YYYY-MM-DD` strings, as on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DealDates {
    pub available_from: String,
    pub available_to: String,
    pub min_nights: u32,
    pub max_nights: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pricing {
    pub original_price: f64,
    pub deal_price: f64,
    pub discount_percent: u32,
    pub currency: String,
    /// What the price includes, e.g. "breakfast", "wifi".
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Features {
    /// Accommodation class, e.g. "4-star boutique hotel".
    pub accommodation: String,
    pub amenities: Vec<String>,
    pub room_type: String,
    /// Audience tags, e.g. "romantic", "families", "business".
    pub suitable_for: Vec<String>,
    /// Maximum guests the room sleeps.
    pub max_guests: u32,
    pub pets_allowed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Urgency {
    pub ending_soon: bool,
    pub spots_left: u32,
    /// Human-readable recency marker, e.g. "3 hours ago".
    pub last_booked: String,
}

impl Deal {
    /// Whether the deal is rated 4.5+ in a 4/5-star property.
    pub fn is_luxury(&self) -> bool {
        (self.stars >= 4) && self.rating >= 4.5
    }
}
