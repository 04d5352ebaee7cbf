//! Geospatial utilities: coordinates for the catalog cities, a precomputed
//! pairwise distance index, and coarse travel-time estimates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Earth radius used for great-circle distances, in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// The fixed set of cities the catalog covers.
pub static CITY_COORDINATES: LazyLock<Vec<(&'static str, GeoPoint)>> = LazyLock::new(|| {
    vec![
        ("Warsaw", GeoPoint { lat: 52.2297, lon: 21.0122 }),
        ("Prague", GeoPoint { lat: 50.0755, lon: 14.4378 }),
        ("Zakopane", GeoPoint { lat: 49.2992, lon: 19.9496 }),
        ("Sopot", GeoPoint { lat: 54.4419, lon: 18.5602 }),
    ]
});

/// Pairwise distances between the catalog cities, built once at first use.
/// Keys are stored in both orders so lookup never needs to normalize.
static DISTANCE_INDEX: LazyLock<HashMap<(String, String), f64>> = LazyLock::new(|| {
    let cities = &*CITY_COORDINATES;
    let mut index = HashMap::new();
    for (i, (a, pa)) in cities.iter().enumerate() {
        for (b, pb) in cities.iter().skip(i + 1) {
            let d = haversine_km(*pa, *pb);
            index.insert((a.to_string(), b.to_string()), d);
            index.insert((b.to_string(), a.to_string()), d);
        }
    }
    index
});

/// Great-circle distance between two points, in kilometers (unrounded).
fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Coordinates for a location, case-insensitive. `None` outside the fixed set.
pub fn geocode(location: &str) -> Option<GeoPoint> {
    let wanted = location.trim().to_lowercase();
    CITY_COORDINATES.iter().find(|(name, _)| name.to_lowercase() == wanted).map(|(_, p)| *p)
}

/// Distance between two locations in km, rounded to one decimal place.
///
/// The precomputed index answers first; locations outside it fall back to a
/// live great-circle computation when coordinates are known. `None` means
/// one of the locations is unknown.
pub fn distance_km(from: &str, to: &str) -> Option<f64> {
    if from.trim().eq_ignore_ascii_case(to.trim()) && geocode(from).is_some() {
        return Some(0.0);
    }
    if let Some(d) = DISTANCE_INDEX.get(&(from.to_string(), to.to_string())) {
        return Some(round1(*d));
    }
    let (a, b) = (geocode(from)?, geocode(to)?);
    Some(round1(haversine_km(a, b)))
}

/// Travel mode for time estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// ~800 km/h cruise plus a fixed hour for takeoff and landing.
    #[default]
    Flight,
    /// ~100 km/h highway average.
    Car,
    /// ~150 km/h average.
    Train,
}

/// A coarse travel-time estimate. No traffic or schedule data involved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelTime {
    pub hours: f64,
    pub minutes: u32,
    /// E.g. "2h 30m".
    pub formatted: String,
}

/// Estimate travel time for a distance and mode.
pub fn estimate_travel_time(distance_km: f64, mode: TravelMode) -> TravelTime {
    let hours = match mode {
        TravelMode::Flight => distance_km / 800.0 + 1.0,
        TravelMode::Car => distance_km / 100.0,
        TravelMode::Train => distance_km / 150.0,
    };

    let total_minutes = (hours * 60.0) as u32;
    let (h, m) = (total_minutes / 60, total_minutes % 60);
    let formatted = match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    };

    TravelTime { hours: round1(hours), minutes: total_minutes, formatted }
}

/// Distance plus travel time between two locations, `None` if either is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub mode: TravelMode,
    pub distance_km: f64,
    pub travel_time: TravelTime,
}

pub fn route(from: &str, to: &str, mode: TravelMode) -> Option<Route> {
    let distance = distance_km(from, to)?;
    Some(Route {
        from: from.to_string(),
        to: to.to_string(),
        mode,
        distance_km: distance,
        travel_time: estimate_travel_time(distance, mode),
    })
}

/// A city's coordinates and its distances to the other catalog cities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityInfo {
    pub name: String,
    pub coordinates: GeoPoint,
    pub distances_to_other_cities: HashMap<String, f64>,
}

pub fn city_info(city: &str) -> Option<CityInfo> {
    let coordinates = geocode(city)?;
    let mut distances = HashMap::new();
    for (other, _) in CITY_COORDINATES.iter() {
        if !other.eq_ignore_ascii_case(city.trim()) {
            if let Some(d) = distance_km(city, other) {
                distances.insert(other.to_string(), d);
            }
        }
    }
    Some(CityInfo {
        name: city.trim().to_string(),
        coordinates,
        distances_to_other_cities: distances,
    })
}
