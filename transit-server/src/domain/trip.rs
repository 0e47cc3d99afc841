//! Trip identifiers and scheduled stop visits.

use std::fmt;
use std::sync::Arc;

use super::{StopId, TimeOfDay};

/// A trip identifier from the timetable feed.
///
/// Backed by `Arc<str>` so that labels referencing a trip are cheap to
/// clone inside the engine's merge hot path.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripId(Arc<str>);

impl TripId {
    /// Creates a trip identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        TripId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TripId {
    fn from(s: &str) -> Self {
        TripId::new(s)
    }
}

/// One scheduled visit of a trip at a stop.
///
/// # Invariants (enforced by the timetable builder)
///
/// - `arrival <= departure`
/// - sequence numbers are strictly increasing along a trip
/// - arrival/departure times are non-decreasing along a trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopVisit {
    /// The visited stop.
    pub stop: StopId,
    /// Scheduled arrival time at the stop.
    pub arrival: TimeOfDay,
    /// Scheduled departure time from the stop.
    pub departure: TimeOfDay,
    /// Ordering key within the trip, from the feed.
    pub sequence: u32,
}

impl StopVisit {
    /// Creates a stop visit.
    pub fn new(stop: StopId, arrival: TimeOfDay, departure: TimeOfDay, sequence: u32) -> Self {
        Self {
            stop,
            arrival,
            departure,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_id_equality_by_content() {
        let a = TripId::new("T1");
        let b = TripId::new(String::from("T1"));
        let c = TripId::new("T2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn trip_id_cheap_clone_shares_storage() {
        let a = TripId::new("T1");
        let b = a.clone();
        assert_eq!(a.as_str().as_ptr(), b.as_str().as_ptr());
    }

    #[test]
    fn trip_id_display() {
        assert_eq!(TripId::new("T9").to_string(), "T9");
    }

    #[test]
    fn trip_id_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TripId::new("T1"));
        assert!(set.contains(&TripId::new("T1")));
        assert!(!set.contains(&TripId::new("T2")));
    }
}
