//! Property tests for the query engine over the fixed catalog.

use proptest::option;
use proptest::prelude::*;
use vox_query::{DealFilter, search_deals};

fn arb_filter() -> impl Strategy<Value = DealFilter> {
    let city = option::of(prop_oneof![
        Just("Warsaw".to_string()),
        Just("prague".to_string()),
        Just("Zakopane".to_string()),
        Just("Sopot".to_string()),
        Just("Atlantis".to_string()),
    ]);
    let tags = option::of(proptest::collection::vec(
        prop_oneof![
            Just("romantic".to_string()),
            Just("beach".to_string()),
            Just("skiing".to_string()),
            Just("families".to_string()),
            Just("business".to_string()),
            Just("luxury".to_string()),
        ],
        1..3,
    ));

    (
        city,
        option::of(200.0..900.0f64),
        option::of(200.0..900.0f64),
        tags,
        option::of(4.0..5.0f64),
        option::of(1u32..7),
        option::of(proptest::bool::ANY),
    )
        .prop_map(
            |(city, budget_min, budget_max, suitable_for, min_rating, min_guests, pets)| {
                DealFilter {
                    city,
                    budget_min,
                    budget_max,
                    suitable_for,
                    min_rating,
                    min_guests,
                    pets_allowed: pets,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    /// Soundness: every returned record satisfies every supplied predicate.
    #[test]
    fn search_is_sound(filter in arb_filter()) {
        for deal in search_deals(vox_catalog::deals(), &filter) {
            prop_assert!(filter.matches(&deal));
        }
    }

    /// Completeness: every record satisfying all predicates is returned.
    #[test]
    fn search_is_complete(filter in arb_filter()) {
        let results = search_deals(vox_catalog::deals(), &filter);
        for deal in vox_catalog::deals() {
            if filter.matches(deal) {
                prop_assert!(results.iter().any(|r| r.id == deal.id));
            }
        }
    }

    /// Limit is a prefix of the unlimited result and never reorders.
    #[test]
    fn limit_is_prefix(filter in arb_filter(), k in 0usize..20) {
        let unlimited = search_deals(vox_catalog::deals(), &filter);
        let mut limited_filter = filter.clone();
        limited_filter.limit = Some(k);
        let limited = search_deals(vox_catalog::deals(), &limited_filter);

        prop_assert!(limited.len() <= k);
        prop_assert_eq!(&unlimited[..limited.len()], &limited[..]);
    }

    /// Sorting an already-sorted result changes nothing (stability).
    #[test]
    fn sort_is_idempotent(filter in arb_filter()) {
        let once = search_deals(vox_catalog::deals(), &filter);
        let twice = search_deals(&once, &DealFilter::default());
        prop_assert_eq!(once, twice);
    }
}
