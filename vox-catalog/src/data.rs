//! The static mock catalogs. Built once at first use and read-only
//! thereafter; safe for unsynchronized concurrent reads.

use chrono::{TimeZone, Utc};
use std::sync::LazyLock;

use crate::deal::{Deal, DealDates, Destination, Features, Pricing, Urgency};
use crate::event::{BetType, Market, MatchOdds, SportEvent};
use crate::geo::geocode;
use crate::profile::{
    BillingRecord, Contract, CustomerProfile, Device, MonthlyUsage, Plan, ProfilePreferences,
};

fn destination(city: &str, country: &str, region: &str) -> Destination {
    Destination {
        city: city.to_string(),
        country: country.to_string(),
        region: region.to_string(),
        coordinates: geocode(city).unwrap_or(crate::geo::GeoPoint { lat: 0.0, lon: 0.0 }),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    title: &str,
    dest: Destination,
    (original_price, deal_price, discount_percent): (f64, f64, u32),
    (rating, review_count, stars): (f64, u32, u8),
    accommodation: &str,
    room_type: &str,
    amenities: &[&str],
    suitable_for: &[&str],
    (max_guests, pets_allowed): (u32, bool),
    (ending_soon, spots_left, last_booked): (bool, u32, &str),
) -> Deal {
    Deal {
        id: id.to_string(),
        deal_type: "hotel".to_string(),
        title: title.to_string(),
        destination: dest,
        dates: DealDates {
            available_from: "2025-09-01".to_string(),
            available_to: "2026-03-31".to_string(),
            min_nights: 2,
            max_nights: 14,
        },
        pricing: Pricing {
            original_price,
            deal_price,
            discount_percent,
            currency: "GBP".to_string(),
            includes: strings(&["breakfast", "wifi"]),
        },
        rating,
        review_count,
        stars,
        features: Features {
            accommodation: accommodation.to_string(),
            amenities: strings(amenities),
            room_type: room_type.to_string(),
            suitable_for: strings(suitable_for),
            max_guests,
            pets_allowed,
        },
        urgency: Urgency {
            ending_soon,
            spots_left,
            last_booked: last_booked.to_string(),
        },
    }
}

/// Travel deals, three per catalog city. Catalog order is the tie-break
/// order for every query, so entries are never reordered.
pub static DEALS: LazyLock<Vec<Deal>> = LazyLock::new(|| {
    vec![
        deal(
            "warsaw-royal-palace-hotel",
            "Royal Palace Boutique Hotel",
            destination("Warsaw", "Poland", "Mazovia"),
            (980.0, 649.0, 34),
            (4.7, 342, 4),
            "4-star boutique hotel",
            "Deluxe Room with Old Town View",
            &["restaurant", "spa", "conference_room", "bar", "parking"],
            &["business", "couples", "culture"],
            (2, false),
            (false, 8, "3 hours ago"),
        ),
        deal(
            "warsaw-modern-loft",
            "City Center Modern Loft Hotel",
            destination("Warsaw", "Poland", "Mazovia"),
            (520.0, 349.0, 33),
            (4.4, 189, 3),
            "3-star design hotel",
            "Loft Studio",
            &["restaurant", "gym", "bar"],
            &["business", "budget", "culture"],
            (3, true),
            (false, 14, "1 hour ago"),
        ),
        deal(
            "warsaw-vistula-apartments",
            "Vistula Riverside Aparthotel",
            destination("Warsaw", "Poland", "Mazovia"),
            (610.0, 399.0, 35),
            (4.5, 221, 3),
            "3-star aparthotel",
            "Two-Bedroom Apartment",
            &["kitchenette", "laundry", "parking", "playground"],
            &["families", "budget"],
            (5, true),
            (true, 3, "20 minutes ago"),
        ),
        deal(
            "prague-castle-view-hotel",
            "Castle View Heritage Hotel",
            destination("Prague", "Czech Republic", "Bohemia"),
            (890.0, 549.0, 38),
            (4.8, 512, 5),
            "5-star heritage hotel",
            "Junior Suite with Castle View",
            &["restaurant", "spa", "bar", "concierge"],
            &["romantic", "couples", "culture"],
            (2, false),
            (true, 5, "12 minutes ago"),
        ),
        deal(
            "prague-old-town-inn",
            "Old Town Courtyard Inn",
            destination("Prague", "Czech Republic", "Bohemia"),
            (540.0, 379.0, 30),
            (4.3, 267, 3),
            "3-star family-run inn",
            "Twin Room",
            &["breakfast_room", "luggage_storage"],
            &["budget", "culture", "families"],
            (4, true),
            (false, 12, "2 hours ago"),
        ),
        deal(
            "prague-golden-spires-grand",
            "Golden Spires Grand Hotel",
            destination("Prague", "Czech Republic", "Bohemia"),
            (1250.0, 799.0, 36),
            (4.9, 623, 5),
            "5-star luxury hotel",
            "Executive Suite",
            &["restaurant", "spa", "pool", "conference_room", "valet"],
            &["luxury", "romantic", "business"],
            (2, false),
            (false, 4, "35 minutes ago"),
        ),
        deal(
            "zakopane-mountain-lodge",
            "Tatra Mountain Lodge",
            destination("Zakopane", "Poland", "Lesser Poland"),
            (720.0, 459.0, 36),
            (4.6, 298, 4),
            "4-star mountain lodge",
            "Family Chalet Room",
            &["ski_storage", "sauna", "restaurant", "fireplace_lounge"],
            &["skiing", "families", "adventure"],
            (6, true),
            (true, 6, "8 minutes ago"),
        ),
        deal(
            "zakopane-tatra-chalet",
            "Highland Tatra Chalet",
            destination("Zakopane", "Poland", "Lesser Poland"),
            (480.0, 309.0, 36),
            (4.5, 176, 3),
            "3-star guesthouse",
            "Double Room with Mountain View",
            &["ski_storage", "garden", "parking"],
            &["skiing", "budget", "pets"],
            (4, true),
            (false, 9, "4 hours ago"),
        ),
        deal(
            "zakopane-highland-spa-resort",
            "Highland Spa & Wellness Resort",
            destination("Zakopane", "Poland", "Lesser Poland"),
            (980.0, 689.0, 30),
            (4.8, 401, 5),
            "5-star spa resort",
            "Wellness Suite",
            &["spa", "pool", "restaurant", "yoga_studio"],
            &["luxury", "wellness", "romantic"],
            (2, false),
            (false, 7, "1 hour ago"),
        ),
        deal(
            "sopot-grand-beach-resort",
            "Grand Beach Resort Sopot",
            destination("Sopot", "Poland", "Pomerania"),
            (1100.0, 699.0, 36),
            (4.7, 534, 5),
            "5-star beach resort",
            "Sea View Suite",
            &["private_beach", "pool", "spa", "restaurant", "bar"],
            &["beach", "luxury", "romantic"],
            (2, false),
            (true, 2, "5 minutes ago"),
        ),
        deal(
            "sopot-seaside-family-hotel",
            "Seaside Family Hotel",
            destination("Sopot", "Poland", "Pomerania"),
            (640.0, 419.0, 35),
            (4.4, 312, 3),
            "3-star seaside hotel",
            "Family Room",
            &["playground", "restaurant", "bike_rental"],
            &["beach", "families", "pets"],
            (5, true),
            (false, 11, "50 minutes ago"),
        ),
        deal(
            "sopot-pier-boutique",
            "Pier 41 Boutique Hotel",
            destination("Sopot", "Poland", "Pomerania"),
            (560.0, 365.0, 35),
            (4.6, 248, 4),
            "4-star boutique hotel",
            "Deluxe Double with Balcony",
            &["restaurant", "bar", "bike_rental"],
            &["romantic", "beach", "couples"],
            (2, false),
            (false, 5, "2 hours ago"),
        ),
    ]
});

fn market(name: &str, selection: &str, odds: f64) -> Market {
    Market { name: name.to_string(), selection: selection.to_string(), odds }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    league: &str,
    home: &str,
    away: &str,
    kickoff: (i32, u32, u32, u32, u32),
    venue: &str,
    (home_win, draw, away_win): (f64, f64, f64),
    markets: Vec<Market>,
) -> SportEvent {
    let (y, mo, d, h, mi) = kickoff;
    SportEvent {
        id: id.to_string(),
        league: league.to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        kickoff: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        venue: venue.to_string(),
        odds: MatchOdds { home_win, draw, away_win, markets },
    }
}

/// Upcoming fixtures. Kickoff times are distinct so kickoff-ascending
/// ordering is total.
pub static EVENTS: LazyLock<Vec<SportEvent>> = LazyLock::new(|| {
    vec![
        event(
            "epl-ars-che-2025-09-13",
            "Premier League",
            "Arsenal",
            "Chelsea",
            (2025, 9, 13, 16, 30),
            "Emirates Stadium",
            (2.10, 3.40, 3.60),
            vec![
                market("both_teams_to_score", "yes", 1.72),
                market("over_2_5_goals", "yes", 1.85),
            ],
        ),
        event(
            "epl-mci-liv-2025-09-14",
            "Premier League",
            "Manchester City",
            "Liverpool",
            (2025, 9, 14, 15, 0),
            "Etihad Stadium",
            (2.25, 3.50, 3.10),
            vec![
                market("both_teams_to_score", "yes", 1.57),
                market("over_2_5_goals", "yes", 1.62),
            ],
        ),
        event(
            "epl-tot-new-2025-09-20",
            "Premier League",
            "Tottenham",
            "Newcastle",
            (2025, 9, 20, 11, 30),
            "Tottenham Hotspur Stadium",
            (2.45, 3.45, 2.80),
            vec![market("over_2_5_goals", "yes", 1.70)],
        ),
        event(
            "ucl-rma-bay-2025-09-16",
            "Champions League",
            "Real Madrid",
            "Bayern Munich",
            (2025, 9, 16, 19, 0),
            "Santiago Bernabeu",
            (2.35, 3.60, 2.90),
            vec![
                market("both_teams_to_score", "yes", 1.53),
                market("over_2_5_goals", "yes", 1.55),
            ],
        ),
        event(
            "ucl-psg-int-2025-09-17",
            "Champions League",
            "Paris Saint-Germain",
            "Inter Milan",
            (2025, 9, 17, 19, 0),
            "Parc des Princes",
            (1.95, 3.55, 3.90),
            vec![market("both_teams_to_score", "yes", 1.68)],
        ),
        event(
            "laliga-bar-sev-2025-09-21",
            "La Liga",
            "Barcelona",
            "Sevilla",
            (2025, 9, 21, 18, 0),
            "Camp Nou",
            (1.55, 4.20, 5.50),
            vec![market("over_2_5_goals", "yes", 1.50)],
        ),
    ]
});

pub static BET_TYPES: LazyLock<Vec<BetType>> = LazyLock::new(|| {
    let bet = |id: &str, name: &str, description: &str, example: &str| BetType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        example: example.to_string(),
    };
    vec![
        bet(
            "single",
            "Single",
            "One selection on one event. The stake is returned times the odds if it wins.",
            "£10 on Arsenal to win at 2.10 returns £21.00.",
        ),
        bet(
            "accumulator",
            "Accumulator",
            "Two or more selections combined. Every leg must win; odds multiply together.",
            "£10 on three legs at 2.0, 3.0 and 1.5 returns £90.00.",
        ),
        bet(
            "each-way",
            "Each-Way",
            "Two bets in one: a win bet and a place bet at a fraction of the odds.",
            "£5 each-way is a £10 total stake, half on the win and half on the place.",
        ),
        bet(
            "btts",
            "Both Teams To Score",
            "A yes/no market on whether both sides score at least once.",
            "£10 on BTTS yes at 1.72 returns £17.20.",
        ),
    ]
});

fn usage(month: &str, data_gb: f64, minutes: u32, texts: u32) -> MonthlyUsage {
    MonthlyUsage { month: month.to_string(), data_gb, minutes, texts }
}

fn bill(month: &str, amount: f64, overage_charge: f64) -> BillingRecord {
    BillingRecord {
        month: month.to_string(),
        amount,
        status: "paid".to_string(),
        late: false,
        overage_charge,
    }
}

/// Telecom customer profiles keyed by account number.
pub static PROFILES: LazyLock<Vec<CustomerProfile>> = LazyLock::new(|| {
    vec![
        CustomerProfile {
            account_number: "VF001_HIGH_DATA_USER".to_string(),
            name: "Sarah Chen".to_string(),
            usage_history: vec![
                usage("2024-10", 88.0, 450, 200),
                usage("2024-09", 92.0, 520, 180),
                usage("2024-08", 95.0, 480, 220),
            ],
            billing_history: vec![
                bill("2024-10", 50.0, 15.0),
                bill("2024-09", 53.0, 18.0),
                bill("2024-08", 55.0, 20.0),
            ],
            current_plan: Plan {
                plan_id: "essential-50gb".to_string(),
                plan_name: "Essential 50GB".to_string(),
                data_allowance: 50,
                price_monthly: 35.0,
                international_roaming: false,
            },
            current_device: Device {
                model: "Samsung Galaxy S22".to_string(),
                purchase_date: "2022-11-15".to_string(),
                age_months: 24,
                trade_in_value: 180.0,
            },
            contract: Contract {
                start_date: "2022-11-15".to_string(),
                end_date: "2024-11-15".to_string(),
                months_remaining: 0,
                eligible_for_upgrade: true,
            },
            preferences: ProfilePreferences {
                brand_affinity: "Samsung".to_string(),
                price_sensitivity: "medium".to_string(),
                feature_priorities: strings(&["data_allowance", "5g"]),
                last_interaction: "2024-10-15".to_string(),
            },
        },
        CustomerProfile {
            account_number: "VF002_FREQUENT_TRAVELER".to_string(),
            name: "James Mitchell".to_string(),
            usage_history: vec![
                usage("2024-10", 35.0, 650, 120),
                usage("2024-09", 42.0, 720, 140),
                usage("2024-08", 38.0, 680, 130),
            ],
            billing_history: vec![
                bill("2024-10", 65.0, 0.0),
                bill("2024-09", 20.0, 0.0),
                bill("2024-08", 58.0, 0.0),
            ],
            current_plan: Plan {
                plan_id: "essential-50gb".to_string(),
                plan_name: "Essential 50GB".to_string(),
                data_allowance: 50,
                price_monthly: 20.0,
                international_roaming: false,
            },
            current_device: Device {
                model: "iPhone 14".to_string(),
                purchase_date: "2023-09-20".to_string(),
                age_months: 14,
                trade_in_value: 350.0,
            },
            contract: Contract {
                start_date: "2023-09-20".to_string(),
                end_date: "2025-09-20".to_string(),
                months_remaining: 10,
                eligible_for_upgrade: false,
            },
            preferences: ProfilePreferences {
                brand_affinity: "Apple".to_string(),
                price_sensitivity: "low".to_string(),
                feature_priorities: strings(&["international_roaming", "camera_quality"]),
                last_interaction: "2024-10-20".to_string(),
            },
        },
        CustomerProfile {
            account_number: "VF003_OLD_DEVICE".to_string(),
            name: "Michael Brown".to_string(),
            usage_history: vec![
                usage("2024-10", 25.0, 300, 150),
                usage("2024-09", 28.0, 320, 160),
                usage("2024-08", 22.0, 280, 140),
            ],
            billing_history: vec![
                bill("2024-10", 25.0, 0.0),
                bill("2024-09", 25.0, 0.0),
                bill("2024-08", 25.0, 0.0),
            ],
            current_plan: Plan {
                plan_id: "essential-30gb".to_string(),
                plan_name: "Essential 30GB".to_string(),
                data_allowance: 30,
                price_monthly: 25.0,
                international_roaming: false,
            },
            current_device: Device {
                model: "iPhone 11".to_string(),
                purchase_date: "2020-01-10".to_string(),
                age_months: 58,
                trade_in_value: 90.0,
            },
            contract: Contract {
                start_date: "2023-01-10".to_string(),
                end_date: "2025-01-10".to_string(),
                months_remaining: 2,
                eligible_for_upgrade: true,
            },
            preferences: ProfilePreferences {
                brand_affinity: "Apple".to_string(),
                price_sensitivity: "high".to_string(),
                feature_priorities: strings(&["battery_life", "price"]),
                last_interaction: "2024-09-30".to_string(),
            },
        },
    ]
});

/// Deal counts per city, preserving catalog city order.
pub fn deal_count_by_city() -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for d in DEALS.iter() {
        match counts.iter_mut().find(|(c, _)| *c == d.destination.city) {
            Some((_, n)) => *n += 1,
            None => counts.push((d.destination.city.clone(), 1)),
        }
    }
    counts
}

/// Cities with at least one deal, in catalog order, deduplicated.
pub fn cities() -> Vec<String> {
    deal_count_by_city().into_iter().map(|(c, _)| c).collect()
}
