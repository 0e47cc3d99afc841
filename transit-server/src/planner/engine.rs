//! The round-based multi-criteria routing engine.
//!
//! Each round corresponds to one additional vehicle boarding. A round
//! scans every trip serving a stop improved in the previous round, then
//! relaxes scheduled transfers and derived walking links from every stop
//! improved in this round. Labels survive only if they are Pareto-optimal
//! over (arrival time, boarding count) at their stop.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::domain::{JourneyLabel, Leg, LegKind, StopId, TimeOfDay, TransferEdge, TripId};
use crate::timetable::TimetableIndex;
use crate::walkable;

use super::config::RaptorConfig;
use super::profile::Profile;
use super::reconstruct::{self, TraceError};
use super::trace::PredecessorTrace;

/// Error produced when a query cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The query references a stop absent from the timetable.
    #[error("unknown stop {0}")]
    UnknownStop(StopId),
}

/// A routing query.
///
/// With `destination` set the result additionally includes walking egress
/// to the destination; with it unset the query is one-to-all and the
/// result carries profiles for every reached stop.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: StopId,
    pub destination: Option<StopId>,
    pub departure: TimeOfDay,
}

impl RouteRequest {
    fn validate(&self, timetable: &TimetableIndex) -> Result<(), RouteError> {
        if !timetable.contains_stop(self.origin) {
            return Err(RouteError::UnknownStop(self.origin));
        }
        if let Some(destination) = self.destination {
            if !timetable.contains_stop(destination) {
                return Err(RouteError::UnknownStop(destination));
            }
        }
        Ok(())
    }
}

/// Per-stop Pareto profiles plus the predecessor trace for one query.
#[derive(Debug)]
pub struct RouteResult<'a> {
    timetable: &'a TimetableIndex,
    profiles: BTreeMap<StopId, Profile>,
    trace: PredecessorTrace,
}

impl RouteResult<'_> {
    /// The Pareto-optimal labels at `stop`.
    pub fn labels(&self, stop: StopId) -> &[JourneyLabel] {
        self.profiles
            .get(&stop)
            .map(Profile::labels)
            .unwrap_or_default()
    }

    /// Every reached stop with its profile, in ascending stop order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Profile)> {
        self.profiles.iter().map(|(stop, profile)| (*stop, profile))
    }

    /// Rebuilds the journey reaching `stop` with exactly `boardings`
    /// vehicle boardings.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::BrokenTrace`] when no such journey was
    /// recorded; other boarding counts may still be reconstructable.
    pub fn reconstruct(&self, stop: StopId, boardings: usize) -> Result<Vec<Leg>, TraceError> {
        reconstruct::reconstruct(self.timetable, &self.trace, stop, boardings)
    }
}

/// Mutable state for one query, owned by the round loop.
///
/// `best` accumulates every label that survived its profile's dominance
/// filter; profiles only ever grow across rounds (a later round cannot
/// dominate an earlier one, since boarding counts only increase).
/// `previous` and `current` hold the labels newly settled in the last
/// and the running round, which is what trip scanning and transfer
/// relaxation operate on. `links` memoizes each stop's outgoing transfer
/// and walking edges, which stay fixed for the whole query.
#[derive(Debug, Default)]
struct RoundState {
    best: BTreeMap<StopId, Profile>,
    previous: BTreeMap<StopId, JourneyLabel>,
    current: BTreeMap<StopId, JourneyLabel>,
    links: BTreeMap<StopId, Vec<TransferEdge>>,
}

impl RoundState {
    /// Ends the running round: its labels become the previous round's.
    /// Returns whether the round improved anything.
    fn advance(&mut self) -> bool {
        if self.current.is_empty() {
            return false;
        }
        self.previous = std::mem::take(&mut self.current);
        true
    }
}

/// The routing engine, borrowing an immutable timetable.
///
/// Queries share nothing mutable, so one engine value can serve
/// concurrent requests.
#[derive(Debug)]
pub struct RaptorEngine<'a> {
    timetable: &'a TimetableIndex,
    config: RaptorConfig,
}

impl<'a> RaptorEngine<'a> {
    pub fn new(timetable: &'a TimetableIndex, config: RaptorConfig) -> Self {
        Self { timetable, config }
    }

    /// Answers a routing query.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownStop`] if the origin or destination
    /// is not in the timetable.
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResult<'a>, RouteError> {
        request.validate(self.timetable)?;

        let mut state = RoundState::default();

        // Round 0: the traveller is at the origin and may walk.
        let start = JourneyLabel::start(request.departure);
        state
            .best
            .entry(request.origin)
            .or_default()
            .merge(start.clone());
        state.current.insert(request.origin, start);
        self.relax_transfers(&mut state);
        tracing::debug!(round = 0, improved = state.current.len(), "seeded departure");
        state.advance();

        for round in 1..=self.config.max_rounds {
            self.scan_trips(&mut state);
            self.relax_transfers(&mut state);
            tracing::debug!(round, improved = state.current.len(), "round complete");

            if !state.advance() {
                break;
            }
        }

        let mut best = state.best;
        if let Some(destination) = request.destination {
            self.relax_egress(destination, &mut best);
        }

        let mut trace = PredecessorTrace::new(self.config.max_rounds);
        for (stop, profile) in &best {
            for label in profile {
                trace.record(*stop, label.clone());
            }
        }

        Ok(RouteResult {
            timetable: self.timetable,
            profiles: best,
            trace,
        })
    }

    /// Scans every trip serving a stop improved in the previous round.
    ///
    /// One forward pass per trip, carrying the best boarding label seen
    /// so far. A visit first emits an arrival label (never at the
    /// boarding visit itself), then may replace the boarding label if
    /// the previous round reached this stop strictly earlier and in time
    /// for the departure.
    fn scan_trips(&self, state: &mut RoundState) {
        let RoundState {
            best,
            previous,
            current,
            ..
        } = state;

        let mut marked: BTreeSet<TripId> = BTreeSet::new();
        for stop in previous.keys() {
            marked.extend(self.timetable.trips_serving(*stop).iter().cloned());
        }

        for trip in marked {
            let Some(schedule) = self.timetable.trip(&trip) else {
                continue;
            };

            let mut riding: Option<(JourneyLabel, usize)> = None;
            for (i, visit) in schedule.iter().enumerate() {
                if let Some((base, board_idx)) = &riding {
                    if i > *board_idx {
                        let candidate = JourneyLabel {
                            arrival: visit.arrival,
                            boardings: base.boardings + 1,
                            departure: base.departure,
                            leg: LegKind::Board {
                                trip: trip.clone(),
                                boarded_at: schedule[*board_idx].stop,
                            },
                        };
                        if best.entry(visit.stop).or_default().merge(candidate.clone()) {
                            current.insert(visit.stop, candidate);
                        }
                    }
                }

                if let Some(prev) = previous.get(&visit.stop) {
                    let improves = riding
                        .as_ref()
                        .is_none_or(|(base, _)| prev.arrival < base.arrival);
                    if prev.arrival <= visit.departure && improves {
                        riding = Some((prev.clone(), i));
                    }
                }
            }
        }
    }

    /// Relaxes scheduled transfers and derived walking links from every
    /// stop improved in this round, to a fixed point.
    ///
    /// Walking keeps the boarding count unchanged. Chained walks are
    /// allowed; termination is guaranteed because a label only enters the
    /// queue when it strictly improves a profile.
    fn relax_transfers(&self, state: &mut RoundState) {
        let RoundState {
            best,
            current,
            links,
            ..
        } = state;

        let mut queue: VecDeque<StopId> = current.keys().copied().collect();

        while let Some(stop) = queue.pop_front() {
            let Some(label) = current.get(&stop).cloned() else {
                continue;
            };

            for edge in self.outgoing_links(links, stop).iter().copied() {
                let candidate = JourneyLabel {
                    arrival: label.arrival.plus_seconds(edge.duration),
                    boardings: label.boardings,
                    departure: label.departure,
                    leg: LegKind::Walk {
                        from: stop,
                        duration: edge.duration,
                    },
                };
                if best.entry(edge.to).or_default().merge(candidate.clone()) {
                    current.insert(edge.to, candidate);
                    queue.push_back(edge.to);
                }
            }
        }
    }

    /// Scheduled transfers out of `stop`, plus walking links derived from
    /// stop coordinates. Memoized per query: relaxation revisits the same
    /// stops every round and must not redo the geometry each time.
    fn outgoing_links<'s>(
        &self,
        cache: &'s mut BTreeMap<StopId, Vec<TransferEdge>>,
        stop: StopId,
    ) -> &'s [TransferEdge] {
        cache.entry(stop).or_insert_with(|| {
            let mut edges = self.timetable.transfers_from(stop).to_vec();
            if let Some(origin) = self.timetable.stop(stop) {
                edges.extend(walkable::resolve(
                    origin,
                    self.timetable.stops(),
                    self.config.max_walk_meters,
                    self.config.walk_speed_mps,
                ));
            }
            edges
        })
    }

    /// Final walking leg into the destination from every reached stop
    /// within walking range. The destination itself never walks to
    /// itself.
    fn relax_egress(&self, destination: StopId, best: &mut BTreeMap<StopId, Profile>) {
        let Some(dest) = self.timetable.stop(destination).cloned() else {
            return;
        };

        let mut candidates = Vec::new();
        for (stop, profile) in best.iter() {
            if *stop == destination {
                continue;
            }
            let Some(source) = self.timetable.stop(*stop) else {
                continue;
            };

            let distance =
                walkable::haversine_meters(source.lat, source.lon, dest.lat, dest.lon);
            if distance > self.config.max_walk_meters {
                continue;
            }
            let duration =
                walkable::walk_duration_seconds(distance, self.config.walk_speed_mps);

            for label in profile {
                candidates.push(JourneyLabel {
                    arrival: label.arrival.plus_seconds(duration),
                    boardings: label.boardings,
                    departure: label.departure,
                    leg: LegKind::Walk {
                        from: *stop,
                        duration,
                    },
                });
            }
        }

        candidates.sort_by_key(|label| (label.arrival, label.boardings));
        let profile = best.entry(destination).or_default();
        for candidate in candidates {
            profile.merge(candidate);
        }
    }
}
