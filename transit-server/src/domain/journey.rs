//! Reconstructed journey legs for display.

use super::{StopId, TripId};

/// One leg of a reconstructed journey, in travel order.
///
/// A journey is a `Start` leg followed by `Ride` and `Walk` legs. `Ride`
/// legs cover one hop between consecutive stops in a trip's sequence, so
/// intermediate stops appear explicitly in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leg {
    /// The journey origin.
    Start { stop: StopId },
    /// A walk or scheduled transfer.
    Walk {
        from: StopId,
        to: StopId,
        /// Traversal duration in seconds.
        duration: u32,
    },
    /// One hop aboard a vehicle.
    Ride {
        trip: TripId,
        from: StopId,
        to: StopId,
    },
}

impl Leg {
    /// The stop this leg ends at.
    pub fn destination(&self) -> StopId {
        match self {
            Leg::Start { stop } => *stop,
            Leg::Walk { to, .. } => *to,
            Leg::Ride { to, .. } => *to,
        }
    }

    /// The stop this leg begins at.
    pub fn origin(&self) -> StopId {
        match self {
            Leg::Start { stop } => *stop,
            Leg::Walk { from, .. } => *from,
            Leg::Ride { from, .. } => *from,
        }
    }

    /// Returns true for vehicle hops.
    pub fn is_ride(&self) -> bool {
        matches!(self, Leg::Ride { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_endpoints() {
        let start = Leg::Start { stop: StopId(1) };
        assert_eq!(start.origin(), StopId(1));
        assert_eq!(start.destination(), StopId(1));

        let walk = Leg::Walk {
            from: StopId(1),
            to: StopId(2),
            duration: 120,
        };
        assert_eq!(walk.origin(), StopId(1));
        assert_eq!(walk.destination(), StopId(2));
        assert!(!walk.is_ride());

        let ride = Leg::Ride {
            trip: TripId::new("T1"),
            from: StopId(2),
            to: StopId(3),
        };
        assert!(ride.is_ride());
        assert_eq!(ride.destination(), StopId(3));
    }
}
