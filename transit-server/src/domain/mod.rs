//! Domain types for the transit journey planner.
//!
//! This module contains the core model types the routing engine works
//! over: stops, trips and their scheduled visits, transfer edges, times
//! of day, and the multi-criteria journey labels the engine propagates.
//! Types enforce their invariants at construction or timetable-build
//! time, so code that receives them can trust their validity.

mod journey;
mod label;
mod stop;
mod time;
mod transfer;
mod trip;

pub use journey::Leg;
pub use label::{JourneyLabel, LegKind};
pub use stop::{Stop, StopId};
pub use time::{TimeError, TimeOfDay};
pub use transfer::TransferEdge;
pub use trip::{StopVisit, TripId};
