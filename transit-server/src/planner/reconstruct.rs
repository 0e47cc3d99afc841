//! Journey reconstruction from the predecessor trace.

use crate::domain::{Leg, LegKind, StopId};
use crate::timetable::TimetableIndex;

use super::trace::PredecessorTrace;

/// Error produced when a journey cannot be rebuilt from the trace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// No label is recorded for the requested `(stop, boardings)` pair.
    #[error("no recorded journey reaches stop {stop} with {boardings} boardings")]
    BrokenTrace { stop: StopId, boardings: usize },
}

/// Rebuilds the journey that reaches `destination` with exactly
/// `boardings` vehicle boardings, as a forward-ordered leg list.
///
/// The backward walk only visits trace slots the labels themselves name:
/// the walk origin at the same boarding count for a walk leg, the
/// boarding stop at one count fewer for a ride. Intermediate stops a
/// trip rode through are expanded from the trip's schedule, so their
/// trace slots are never consulted. Re-running from the same trace is
/// side-effect free.
///
/// # Errors
///
/// Returns [`TraceError::BrokenTrace`] if any lookup lands on an empty
/// trace slot, which for a recorded label indicates an engine bug.
pub fn reconstruct(
    timetable: &TimetableIndex,
    trace: &PredecessorTrace,
    destination: StopId,
    boardings: usize,
) -> Result<Vec<Leg>, TraceError> {
    let mut legs = Vec::new();
    let mut stop = destination;
    let mut count = boardings;

    loop {
        let broken = TraceError::BrokenTrace { stop, boardings: count };
        let label = trace.get(stop, count).ok_or(broken.clone())?;

        match &label.leg {
            LegKind::Start => {
                legs.push(Leg::Start { stop });
                break;
            }
            LegKind::Walk { from, duration } => {
                legs.push(Leg::Walk {
                    from: *from,
                    to: stop,
                    duration: *duration,
                });
                stop = *from;
            }
            LegKind::Board { trip, boarded_at } => {
                let schedule = timetable.trip(trip).ok_or(broken.clone())?;

                // Alighting visit: the one this label's arrival came from.
                let alight = schedule
                    .iter()
                    .rposition(|visit| visit.stop == stop && visit.arrival == label.arrival)
                    .ok_or(broken.clone())?;
                let board = schedule[..alight]
                    .iter()
                    .rposition(|visit| visit.stop == *boarded_at)
                    .ok_or(broken.clone())?;

                // Legs are collected in reverse travel order.
                for hop in (board..alight).rev() {
                    legs.push(Leg::Ride {
                        trip: trip.clone(),
                        from: schedule[hop].stop,
                        to: schedule[hop + 1].stop,
                    });
                }

                count = count.checked_sub(1).ok_or(TraceError::BrokenTrace {
                    stop: *boarded_at,
                    boardings: 0,
                })?;
                stop = *boarded_at;
            }
        }
    }

    legs.reverse();
    Ok(legs)
}
