//! The immutable timetable the engine queries against.
//!
//! A [`TimetableIndex`] is built once (from CSV files via [`load_dir`],
//! or programmatically via [`TimetableBuilder`]) and is read-only for its
//! whole lifetime, so it can be shared across concurrent queries without
//! locking.

mod load;

pub use load::{LoadError, load_dir};

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Stop, StopId, StopVisit, TimeOfDay, TransferEdge, TripId};

/// Error produced while assembling a timetable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimetableError {
    /// A trip visit or transfer references a stop that was never added.
    #[error("trip or transfer references unknown stop {0}")]
    UnknownStop(StopId),

    /// A stop id appeared twice in the feed.
    #[error("duplicate stop {0}")]
    DuplicateStop(StopId),

    /// Two visits of one trip share a sequence number.
    #[error("trip {trip} repeats sequence number {sequence}")]
    DuplicateSequence { trip: TripId, sequence: u32 },

    /// A visit departs before it arrives.
    #[error("trip {trip} departs before arriving at stop {stop}")]
    DepartureBeforeArrival { trip: TripId, stop: StopId },

    /// Times run backward along a trip's stop sequence.
    #[error("trip {trip} travels backward in time at stop {stop}")]
    TimeTravel { trip: TripId, stop: StopId },
}

/// Immutable, pre-built view of the transit network.
///
/// Holds the stops, each trip's visit sequence (sorted by sequence
/// number), the set of trips serving each stop, and the scheduled
/// transfer adjacency.
#[derive(Debug, Clone, Default)]
pub struct TimetableIndex {
    stops: BTreeMap<StopId, Stop>,
    trips: BTreeMap<TripId, Vec<StopVisit>>,
    trips_by_stop: HashMap<StopId, Vec<TripId>>,
    transfers: HashMap<StopId, Vec<TransferEdge>>,
}

impl TimetableIndex {
    /// Looks up a stop by id.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(&id)
    }

    /// Returns true if the stop exists in this timetable.
    pub fn contains_stop(&self, id: StopId) -> bool {
        self.stops.contains_key(&id)
    }

    /// All stops, in ascending id order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// A trip's visits, sorted by sequence number.
    pub fn trip(&self, id: &TripId) -> Option<&[StopVisit]> {
        self.trips.get(id).map(Vec::as_slice)
    }

    /// Number of trips.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Trips with at least one visit at `stop`, sorted and deduplicated.
    pub fn trips_serving(&self, stop: StopId) -> &[TripId] {
        self.trips_by_stop
            .get(&stop)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Scheduled transfer edges out of `stop`.
    pub fn transfers_from(&self, stop: StopId) -> &[TransferEdge] {
        self.transfers
            .get(&stop)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Builder for a [`TimetableIndex`].
///
/// Collects raw feed rows in any order; [`build`](Self::build) sorts each
/// trip by sequence number and validates the data-model invariants.
#[derive(Debug, Default)]
pub struct TimetableBuilder {
    stops: BTreeMap<StopId, Stop>,
    trips: BTreeMap<TripId, Vec<StopVisit>>,
    transfers: HashMap<StopId, Vec<TransferEdge>>,
    duplicate_stop: Option<StopId>,
}

impl TimetableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop.
    pub fn stop(mut self, stop: Stop) -> Self {
        if self.stops.insert(stop.id, stop.clone()).is_some() {
            self.duplicate_stop.get_or_insert(stop.id);
        }
        self
    }

    /// Adds one scheduled visit to a trip.
    pub fn visit(
        mut self,
        trip: impl Into<TripId>,
        stop: StopId,
        arrival: TimeOfDay,
        departure: TimeOfDay,
        sequence: u32,
    ) -> Self {
        self.trips
            .entry(trip.into())
            .or_default()
            .push(StopVisit::new(stop, arrival, departure, sequence));
        self
    }

    /// Adds a scheduled transfer edge.
    pub fn transfer(mut self, from: StopId, to: StopId, duration_seconds: u32) -> Self {
        self.transfers
            .entry(from)
            .or_default()
            .push(TransferEdge::new(from, to, duration_seconds));
        self
    }

    /// Validates and assembles the index.
    ///
    /// # Errors
    ///
    /// Rejects duplicate stops, references to unknown stops, duplicate
    /// sequence numbers within a trip, and times that run backward along
    /// a trip (including departure before arrival at a single visit).
    pub fn build(self) -> Result<TimetableIndex, TimetableError> {
        if let Some(id) = self.duplicate_stop {
            return Err(TimetableError::DuplicateStop(id));
        }

        let mut trips = self.trips;
        let mut trips_by_stop: HashMap<StopId, Vec<TripId>> = HashMap::new();

        for (trip_id, visits) in trips.iter_mut() {
            visits.sort_by_key(|visit| visit.sequence);

            let mut previous: Option<&StopVisit> = None;
            for visit in visits.iter() {
                if !self.stops.contains_key(&visit.stop) {
                    return Err(TimetableError::UnknownStop(visit.stop));
                }
                if visit.departure < visit.arrival {
                    return Err(TimetableError::DepartureBeforeArrival {
                        trip: trip_id.clone(),
                        stop: visit.stop,
                    });
                }
                if let Some(prev) = previous {
                    if visit.sequence == prev.sequence {
                        return Err(TimetableError::DuplicateSequence {
                            trip: trip_id.clone(),
                            sequence: visit.sequence,
                        });
                    }
                    if visit.arrival < prev.departure {
                        return Err(TimetableError::TimeTravel {
                            trip: trip_id.clone(),
                            stop: visit.stop,
                        });
                    }
                }
                previous = Some(visit);
            }

            for visit in visits.iter() {
                trips_by_stop
                    .entry(visit.stop)
                    .or_default()
                    .push(trip_id.clone());
            }
        }

        for serving in trips_by_stop.values_mut() {
            serving.sort();
            serving.dedup();
        }

        for edges in self.transfers.values() {
            for edge in edges {
                if !self.stops.contains_key(&edge.from) {
                    return Err(TimetableError::UnknownStop(edge.from));
                }
                if !self.stops.contains_key(&edge.to) {
                    return Err(TimetableError::UnknownStop(edge.to));
                }
            }
        }

        Ok(TimetableIndex {
            stops: self.stops,
            trips,
            trips_by_stop,
            transfers: self.transfers,
        })
    }
}
