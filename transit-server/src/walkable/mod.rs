//! Walking links between nearby stops.
//!
//! Any two stops whose straight-line distance is within the walking
//! threshold are connected by a derived transfer edge. These edges are
//! computed at query time from stop coordinates and behave exactly like
//! the feed's scheduled transfers once derived.

use crate::domain::{Stop, TransferEdge};

/// Mean earth radius in meters, for the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two WGS84 coordinate pairs.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_METERS * 2.0 * a.sqrt().asin()
}

/// Walk duration in whole seconds for a distance at a given speed.
///
/// Floors to match deterministic integer-second arithmetic everywhere
/// else in the engine.
pub fn walk_duration_seconds(distance_meters: f64, walk_speed_mps: f64) -> u32 {
    (distance_meters / walk_speed_mps) as u32
}

/// Derive walking edges from `from` to every candidate stop within
/// `max_distance_meters`.
///
/// Pure function of its inputs: no state, and the candidate order is
/// preserved in the output. `from` itself is never linked to itself.
pub fn resolve<'a>(
    from: &Stop,
    candidates: impl IntoIterator<Item = &'a Stop>,
    max_distance_meters: f64,
    walk_speed_mps: f64,
) -> Vec<TransferEdge> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.id != from.id)
        .filter_map(|candidate| {
            let distance = haversine_meters(from.lat, from.lon, candidate.lat, candidate.lon);
            if distance <= max_distance_meters {
                Some(TransferEdge::new(
                    from.id,
                    candidate.id,
                    walk_duration_seconds(distance, walk_speed_mps),
                ))
            } else {
                None
            }
        })
        .collect()
}
