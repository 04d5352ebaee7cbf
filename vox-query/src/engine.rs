//! The query engine: conjunctive filter, stable multi-key sort, then limit.
//!
//! Every deal query, including the derived presets, runs through
//! [`query_deals`]; presets differ only in their filter and sort
//! configuration, which keeps tie-break and copy semantics identical across
//! all of them. Sorts are stable, so ties fall back to catalog order and
//! nothing else.

use serde::{Deserialize, Serialize};
use vox_catalog::{Deal, SportEvent};

use crate::filter::{DealFilter, EventFilter};

/// Sort orders the engine knows. All stable; ties keep catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Discount percent desc, then rating desc, then spots-left asc.
    #[default]
    DealQuality,
    /// Spots-left ascending (fewest spots first).
    SpotsLeft,
    /// Discount percent descending.
    DiscountDesc,
    /// Deal price ascending.
    PriceAsc,
    /// Rating descending, then deal price descending.
    LuxuryRank,
}

fn sort_deals(deals: &mut [Deal], order: SortOrder) {
    match order {
        SortOrder::DealQuality => deals.sort_by(|a, b| {
            b.pricing
                .discount_percent
                .cmp(&a.pricing.discount_percent)
                .then_with(|| b.rating.total_cmp(&a.rating))
                .then_with(|| a.urgency.spots_left.cmp(&b.urgency.spots_left))
        }),
        SortOrder::SpotsLeft => {
            deals.sort_by(|a, b| a.urgency.spots_left.cmp(&b.urgency.spots_left))
        }
        SortOrder::DiscountDesc => {
            deals.sort_by(|a, b| b.pricing.discount_percent.cmp(&a.pricing.discount_percent))
        }
        SortOrder::PriceAsc => {
            deals.sort_by(|a, b| a.pricing.deal_price.total_cmp(&b.pricing.deal_price))
        }
        SortOrder::LuxuryRank => deals.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| b.pricing.deal_price.total_cmp(&a.pricing.deal_price))
        }),
    }
}

/// Filter, sort, and limit a deal catalog slice. Returns record copies.
pub fn query_deals(catalog: &[Deal], filter: &DealFilter, order: SortOrder) -> Vec<Deal> {
    let mut results: Vec<Deal> = catalog.iter().filter(|d| filter.matches(d)).cloned().collect();
    sort_deals(&mut results, order);
    if let Some(limit) = filter.limit {
        results.truncate(limit);
    }
    results
}

/// The general search entry point: deal-quality ordering.
pub fn search_deals(catalog: &[Deal], filter: &DealFilter) -> Vec<Deal> {
    query_deals(catalog, filter, SortOrder::DealQuality)
}

/// Deals flagged as ending soon, most urgent first.
pub fn urgent_deals(catalog: &[Deal], limit: usize) -> Vec<Deal> {
    let filter = DealFilter { ending_soon: Some(true), limit: Some(limit), ..Default::default() };
    query_deals(catalog, &filter, SortOrder::SpotsLeft)
}

/// Highest-discount deals at or above `min_discount` percent.
pub fn best_value_deals(catalog: &[Deal], min_discount: u32, limit: usize) -> Vec<Deal> {
    let filter =
        DealFilter { min_discount: Some(min_discount), limit: Some(limit), ..Default::default() };
    query_deals(catalog, &filter, SortOrder::DiscountDesc)
}

/// Premium 4/5-star deals rated 4.5+.
pub fn luxury_deals(catalog: &[Deal], limit: usize) -> Vec<Deal> {
    let filter = DealFilter { luxury: Some(true), limit: Some(limit), ..Default::default() };
    query_deals(catalog, &filter, SortOrder::LuxuryRank)
}

/// Deals priced at or under `max_price`, cheapest first.
pub fn budget_deals(catalog: &[Deal], max_price: f64, limit: usize) -> Vec<Deal> {
    let filter =
        DealFilter { budget_max: Some(max_price), limit: Some(limit), ..Default::default() };
    query_deals(catalog, &filter, SortOrder::PriceAsc)
}

/// Deals similar to an anchor: same city or overlapping audience tags,
/// excluding the anchor itself. `None` if the anchor id is unknown.
pub fn similar_deals(catalog: &[Deal], deal_id: &str, limit: usize) -> Option<Vec<Deal>> {
    let anchor = catalog.iter().find(|d| d.id == deal_id)?;

    let by_city = DealFilter::new().with_city(anchor.destination.city.clone());
    let by_tags = DealFilter::new().with_tags(anchor.features.suitable_for.clone());

    // Union of the two candidate sets in catalog order, then one pass
    // through the engine for ordering and limiting.
    let candidates: Vec<Deal> = catalog
        .iter()
        .filter(|d| d.id != anchor.id && (by_city.matches(d) || by_tags.matches(d)))
        .cloned()
        .collect();

    let filter = DealFilter { limit: Some(limit), ..Default::default() };
    Some(query_deals(&candidates, &filter, SortOrder::DealQuality))
}

/// Deals for a list of ids, in request order, silently skipping unknown ids.
pub fn deals_by_ids(catalog: &[Deal], ids: &[String]) -> Vec<Deal> {
    ids.iter().filter_map(|id| catalog.iter().find(|d| &d.id == id).cloned()).collect()
}

/// Filter and sort fixtures by kickoff ascending, then limit.
pub fn search_events(catalog: &[SportEvent], filter: &EventFilter) -> Vec<SportEvent> {
    let mut results: Vec<SportEvent> =
        catalog.iter().filter(|e| filter.matches(e)).cloned().collect();
    results.sort_by_key(|e| e.kickoff);
    if let Some(limit) = filter.limit {
        results.truncate(limit);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DealFilter, EventFilter};

    fn catalog() -> &'static [Deal] {
        vox_catalog::deals()
    }

    #[test]
    fn test_empty_filter_returns_full_catalog() {
        let results = search_deals(catalog(), &DealFilter::new());
        assert_eq!(results.len(), catalog().len());
        // Deterministic: a second run yields the same order.
        assert_eq!(results, search_deals(catalog(), &DealFilter::new()));
    }

    #[test]
    fn test_city_filter_exact_case_insensitive() {
        let results = search_deals(catalog(), &DealFilter::new().with_city("prague"));
        assert!(!results.is_empty());
        assert!(results.iter().all(|d| d.destination.city == "Prague"));
    }

    #[test]
    fn test_budget_bounds_inclusive() {
        let filter = DealFilter::new().with_budget_min(349.0).with_budget_max(349.0);
        let results = search_deals(catalog(), &filter);
        assert!(results.iter().all(|d| d.pricing.deal_price == 349.0));
        assert!(!results.is_empty());
    }

    #[test]
    fn test_tag_filter_or_within_field() {
        let filter =
            DealFilter::new().with_tags(vec!["skiing".to_string(), "beach".to_string()]);
        let results = search_deals(catalog(), &filter);
        assert!(results.iter().all(|d| {
            d.features.suitable_for.iter().any(|t| t == "skiing" || t == "beach")
        }));
        // Covers both Zakopane and Sopot records.
        assert!(results.iter().any(|d| d.destination.city == "Zakopane"));
        assert!(results.iter().any(|d| d.destination.city == "Sopot"));
    }

    #[test]
    fn test_quality_sort_discount_first() {
        let results = search_deals(catalog(), &DealFilter::new());
        for pair in results.windows(2) {
            assert!(pair[0].pricing.discount_percent >= pair[1].pricing.discount_percent);
        }
    }

    #[test]
    fn test_sort_idempotent() {
        let once = search_deals(catalog(), &DealFilter::new());
        let mut twice = once.clone();
        sort_deals(&mut twice, SortOrder::DealQuality);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_limit_is_prefix_of_unlimited() {
        for k in 0..=catalog().len() + 1 {
            let unlimited = search_deals(catalog(), &DealFilter::new());
            let limited = search_deals(catalog(), &DealFilter::new().with_limit(k));
            assert_eq!(limited.len(), k.min(unlimited.len()));
            assert_eq!(&unlimited[..limited.len()], &limited[..]);
        }
    }

    #[test]
    fn test_prague_budget_cap() {
        // Prague under £600 must exclude the high-discount suite above £600.
        let filter = DealFilter::new().with_city("Prague").with_budget_max(600.0);
        let results = search_deals(catalog(), &filter);
        assert!(!results.is_empty());
        assert!(results.iter().all(|d| d.destination.city == "Prague"));
        assert!(results.iter().all(|d| d.pricing.deal_price <= 600.0));
        assert!(results.iter().all(|d| d.id != "prague-golden-spires-grand"));
        for pair in results.windows(2) {
            assert!(pair[0].pricing.discount_percent >= pair[1].pricing.discount_percent);
        }
    }

    #[test]
    fn test_urgent_preset() {
        let results = urgent_deals(catalog(), 10);
        assert!(results.iter().all(|d| d.urgency.ending_soon));
        for pair in results.windows(2) {
            assert!(pair[0].urgency.spots_left <= pair[1].urgency.spots_left);
        }
    }

    #[test]
    fn test_best_value_preset() {
        let results = best_value_deals(catalog(), 35, 10);
        assert!(results.iter().all(|d| d.pricing.discount_percent >= 35));
        for pair in results.windows(2) {
            assert!(pair[0].pricing.discount_percent >= pair[1].pricing.discount_percent);
        }
    }

    #[test]
    fn test_luxury_preset() {
        let results = luxury_deals(catalog(), 10);
        assert!(!results.is_empty());
        assert!(results.iter().all(|d| d.stars >= 4 && d.rating >= 4.5));
        for pair in results.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_budget_preset_price_ascending() {
        let results = budget_deals(catalog(), 400.0, 10);
        assert!(results.iter().all(|d| d.pricing.deal_price <= 400.0));
        for pair in results.windows(2) {
            assert!(pair[0].pricing.deal_price <= pair[1].pricing.deal_price);
        }
    }

    #[test]
    fn test_similar_excludes_anchor() {
        let results = similar_deals(catalog(), "prague-castle-view-hotel", 10).unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|d| d.id != "prague-castle-view-hotel"));
        assert!(similar_deals(catalog(), "no-such-deal", 10).is_none());
    }

    #[test]
    fn test_deals_by_ids_keeps_order_skips_unknown() {
        let ids = vec![
            "sopot-pier-boutique".to_string(),
            "no-such-deal".to_string(),
            "warsaw-royal-palace-hotel".to_string(),
        ];
        let results = deals_by_ids(catalog(), &ids);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "sopot-pier-boutique");
        assert_eq!(results[1].id, "warsaw-royal-palace-hotel");
    }

    #[test]
    fn test_event_search_kickoff_ascending() {
        let results = search_events(vox_catalog::events(), &EventFilter::new());
        assert_eq!(results.len(), vox_catalog::events().len());
        for pair in results.windows(2) {
            assert!(pair[0].kickoff <= pair[1].kickoff);
        }
    }

    #[test]
    fn test_event_league_substring() {
        let filter = EventFilter::new().with_league("premier");
        let results = search_events(vox_catalog::events(), &filter);
        assert!(!results.is_empty());
        assert!(results.iter().all(|e| e.league == "Premier League"));
    }

    #[test]
    fn test_event_team_matches_either_side() {
        let filter = EventFilter::new().with_team("liverpool");
        let results = search_events(vox_catalog::events(), &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].away_team, "Liverpool");
    }

    #[test]
    fn test_zero_matches_not_an_error() {
        let filter = DealFilter::new().with_city("Atlantis");
        assert!(search_deals(catalog(), &filter).is_empty());
    }
}
