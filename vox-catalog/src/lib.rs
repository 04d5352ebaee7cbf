//! # vox-catalog
//!
//! Immutable in-memory catalogs for the Vox demo backend: travel deals,
//! football fixtures, bet types and telecom customer profiles, plus a
//! precomputed geo index over the catalog cities.
//!
//! All catalogs are loaded once behind `LazyLock` and never mutated;
//! lookups return clones so callers cannot reach back into catalog state.

pub mod data;
pub mod deal;
pub mod event;
pub mod geo;
pub mod profile;

pub use deal::{Deal, DealDates, Destination, Features, Pricing, Urgency};
pub use event::{BetType, Market, MatchOdds, SportEvent};
pub use geo::{CityInfo, GeoPoint, Route, TravelMode, TravelTime};
pub use profile::CustomerProfile;

/// The full deal catalog, in canonical catalog order.
pub fn deals() -> &'static [Deal] {
    &data::DEALS
}

/// A deal by id, cloned. `None` for unknown ids.
pub fn deal_by_id(id: &str) -> Option<Deal> {
    data::DEALS.iter().find(|d| d.id == id).cloned()
}

/// The fixture catalog, in canonical catalog order.
pub fn events() -> &'static [SportEvent] {
    &data::EVENTS
}

/// A fixture by id, cloned. `None` for unknown ids.
pub fn event_by_id(id: &str) -> Option<SportEvent> {
    data::EVENTS.iter().find(|e| e.id == id).cloned()
}

/// The supported bet types.
pub fn bet_types() -> &'static [BetType] {
    &data::BET_TYPES
}

/// A telecom customer profile by account number, cloned.
pub fn profile_by_account(account_number: &str) -> Option<CustomerProfile> {
    data::PROFILES.iter().find(|p| p.account_number == account_number).cloned()
}

/// Cities with at least one deal, in catalog order.
pub fn cities() -> Vec<String> {
    data::cities()
}

/// Deal counts per city, in catalog order.
pub fn deal_count_by_city() -> Vec<(String, usize)> {
    data::deal_count_by_city()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_ids_unique() {
        let mut ids: Vec<&str> = deals().iter().map(|d| d.id.as_str()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_event_ids_unique_and_kickoffs_distinct() {
        let evs = events();
        for (i, a) in evs.iter().enumerate() {
            for b in evs.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.kickoff, b.kickoff);
            }
        }
    }

    #[test]
    fn test_lookup_roundtrip() {
        let first = &deals()[0];
        assert_eq!(deal_by_id(&first.id).unwrap(), *first);
        assert!(deal_by_id("no-such-deal").is_none());
        assert!(event_by_id("no-such-event").is_none());
    }

    #[test]
    fn test_lookup_returns_copy() {
        let mut copy = deal_by_id("warsaw-royal-palace-hotel").unwrap();
        copy.pricing.deal_price = 1.0;
        // Catalog state unaffected by mutating the returned clone.
        assert_ne!(deal_by_id("warsaw-royal-palace-hotel").unwrap().pricing.deal_price, 1.0);
    }

    #[test]
    fn test_four_cities() {
        assert_eq!(cities(), vec!["Warsaw", "Prague", "Zakopane", "Sopot"]);
        let counts = deal_count_by_city();
        assert!(counts.iter().all(|(_, n)| *n == 3));
    }

    #[test]
    fn test_profiles_present() {
        let p = profile_by_account("VF001_HIGH_DATA_USER").unwrap();
        assert_eq!(p.name, "Sarah Chen");
        assert!(p.over_allowance());
        assert!(profile_by_account("VF999").is_none());
    }

    #[test]
    fn test_deal_coordinates_match_geo_index() {
        for d in deals() {
            let geocoded = geo::geocode(&d.destination.city).unwrap();
            assert_eq!(d.destination.coordinates, geocoded);
        }
    }
}
