//! Journey planning over a timetable.
//!
//! The engine is round-based: round `k` finds journeys using exactly `k`
//! vehicle boardings, and per-stop profiles keep every journey that is
//! Pareto-optimal over (arrival time, boarding count).

mod config;
mod engine;
mod profile;
mod reconstruct;
mod trace;

pub use config::RaptorConfig;
pub use engine::{RaptorEngine, RouteError, RouteRequest, RouteResult};
pub use profile::Profile;
pub use reconstruct::TraceError;
pub use trace::PredecessorTrace;
