//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Leg, Stop};

/// A stop in the `/api/stops` listing.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Stop id
    pub id: u32,

    /// Human-readable name
    pub name: String,

    /// WGS84 latitude
    pub lat: f64,

    /// WGS84 longitude
    pub lon: f64,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.0,
            name: stop.name.clone(),
            lat: stop.lat,
            lon: stop.lon,
        }
    }
}

/// Response for the stop listing.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopResult>,
}

/// Request to compute journey options.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin stop id
    pub from: String,

    /// Destination stop id; omit for a one-to-all query
    pub to: Option<String>,

    /// Departure time in HH:MM:SS or HH:MM
    pub time: String,
}

/// One Pareto-optimal journey option.
#[derive(Debug, Serialize)]
pub struct JourneyOption {
    /// Departure time from the origin
    pub departure_time: String,

    /// Arrival time at the destination (GTFS-style, may pass 24:00:00)
    pub arrival_time: String,

    /// Number of vehicle boardings
    pub boardings: usize,
}

/// One stop's profile in a one-to-all response.
#[derive(Debug, Serialize)]
pub struct StopProfile {
    /// The reached stop
    pub stop: u32,

    /// Options sorted by arrival time
    pub results: Vec<JourneyOption>,
}

/// Response for a route query.
///
/// Carries `results` for a destination query and `profiles` for a
/// one-to-all query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Origin stop id
    pub from: u32,

    /// Destination stop id, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,

    /// Options sorted by arrival time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<JourneyOption>>,

    /// Per-stop profiles for a one-to-all query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<StopProfile>>,
}

/// Request to reconstruct one journey, leg by leg.
#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
    /// Origin stop id
    pub from: String,

    /// Destination stop id
    pub to: String,

    /// Departure time in HH:MM:SS or HH:MM
    pub time: String,

    /// Which Pareto option to reconstruct, by boarding count
    pub boardings: usize,
}

/// One leg of a reconstructed journey.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegResult {
    /// The journey origin.
    Start { stop: u32 },
    /// A walk or scheduled transfer.
    Walk {
        from: u32,
        to: u32,
        duration_seconds: u32,
    },
    /// One hop aboard a vehicle.
    Ride { trip: String, from: u32, to: u32 },
}

impl LegResult {
    pub fn from_leg(leg: &Leg) -> Self {
        match leg {
            Leg::Start { stop } => LegResult::Start { stop: stop.0 },
            Leg::Walk { from, to, duration } => LegResult::Walk {
                from: from.0,
                to: to.0,
                duration_seconds: *duration,
            },
            Leg::Ride { trip, from, to } => LegResult::Ride {
                trip: trip.as_str().to_string(),
                from: from.0,
                to: to.0,
            },
        }
    }
}

/// Response for a journey reconstruction.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    /// Legs in travel order
    pub legs: Vec<LegResult>,

    /// Departure time from the origin
    pub departure: String,

    /// Arrival time at the destination
    pub arrival: String,

    /// Number of vehicle boardings
    pub boardings: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
