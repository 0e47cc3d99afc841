//! Journey labels: the multi-criteria value the engine propagates.

use super::{StopId, TimeOfDay, TripId};

/// How a label's stop was reached.
///
/// A closed variant set so that reconstruction can match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegKind {
    /// The query origin at the departure time.
    Start,
    /// A walk or scheduled transfer from `from`, taking `duration` seconds.
    Walk { from: StopId, duration: u32 },
    /// Riding `trip`, having boarded it at `boarded_at`. Intermediate
    /// stops ridden through are recovered from the trip's schedule, so a
    /// label never depends on labels at stops it only passed.
    Board { trip: TripId, boarded_at: StopId },
}

/// One Pareto-optimal way of reaching a stop.
///
/// Only `arrival` and `boardings` take part in dominance; `departure` is
/// the journey's overall departure time, carried through for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyLabel {
    /// Arrival time at the labelled stop.
    pub arrival: TimeOfDay,
    /// Number of vehicle boardings used so far.
    pub boardings: usize,
    /// Overall departure time of the journey from its origin.
    pub departure: TimeOfDay,
    /// How the stop was reached.
    pub leg: LegKind,
}

impl JourneyLabel {
    /// The label seeded at the query origin.
    pub fn start(departure: TimeOfDay) -> Self {
        Self {
            arrival: departure,
            boardings: 0,
            departure,
            leg: LegKind::Start,
        }
    }

    /// Weak dominance: at least as good on both criteria.
    ///
    /// Ties dominate in both directions; the merge set resolves them by
    /// keeping the incumbent, which bounds profile growth when many
    /// equal-quality journeys exist.
    pub fn dominates(&self, other: &JourneyLabel) -> bool {
        self.arrival <= other.arrival && self.boardings <= other.boardings
    }

    /// The stop this label was reached from, if any: the walk origin for
    /// a walk leg, the boarding stop for a ride.
    pub fn predecessor(&self) -> Option<StopId> {
        match &self.leg {
            LegKind::Start => None,
            LegKind::Walk { from, .. } => Some(*from),
            LegKind::Board { boarded_at, .. } => Some(*boarded_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(arrival_secs: u32, boardings: usize) -> JourneyLabel {
        JourneyLabel {
            arrival: TimeOfDay::from_seconds(arrival_secs),
            boardings,
            departure: TimeOfDay::from_seconds(0),
            leg: LegKind::Start,
        }
    }

    #[test]
    fn dominates_when_better_on_both() {
        assert!(label(100, 1).dominates(&label(200, 2)));
    }

    #[test]
    fn dominates_on_tie() {
        assert!(label(100, 1).dominates(&label(100, 1)));
    }

    #[test]
    fn incomparable_when_criteria_disagree() {
        let fast_many = label(100, 3);
        let slow_few = label(300, 1);
        assert!(!fast_many.dominates(&slow_few));
        assert!(!slow_few.dominates(&fast_many));
    }

    #[test]
    fn predecessor_per_leg_kind() {
        assert_eq!(JourneyLabel::start(TimeOfDay::from_seconds(0)).predecessor(), None);

        let walk = JourneyLabel {
            leg: LegKind::Walk {
                from: StopId(3),
                duration: 60,
            },
            ..label(100, 0)
        };
        assert_eq!(walk.predecessor(), Some(StopId(3)));

        let ride = JourneyLabel {
            leg: LegKind::Board {
                trip: TripId::new("T1"),
                boarded_at: StopId(5),
            },
            ..label(100, 1)
        };
        assert_eq!(ride.predecessor(), Some(StopId(5)));
    }
}
