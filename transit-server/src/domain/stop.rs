//! Stop types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A numeric stop identifier from the timetable feed.
///
/// Identifiers carry no structure beyond uniqueness; they are assigned by
/// whatever produced the feed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(pub u32);

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StopId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(StopId)
    }
}

/// A transit stop: identifier, display name and WGS84 coordinates.
///
/// Immutable after timetable load.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: StopId, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_id_parse() {
        assert_eq!("42".parse::<StopId>().unwrap(), StopId(42));
        assert!("not-a-number".parse::<StopId>().is_err());
        assert!("-1".parse::<StopId>().is_err());
    }

    #[test]
    fn stop_id_display() {
        assert_eq!(StopId(7).to_string(), "7");
        assert_eq!(format!("{:?}", StopId(7)), "StopId(7)");
    }

    #[test]
    fn stop_construction() {
        let stop = Stop::new(StopId(1), "Central Station", 48.1374, 11.5755);
        assert_eq!(stop.id, StopId(1));
        assert_eq!(stop.name, "Central Station");
    }
}
