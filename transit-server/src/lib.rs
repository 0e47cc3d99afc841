//! A multi-criteria public transit journey planner.
//!
//! Journeys are Pareto-optimal over arrival time and the number of
//! vehicle boardings: a later arrival is only worth reporting if it uses
//! strictly fewer boardings. The engine is round-based, with one round
//! per additional boarding, and supports scheduled transfers as well as
//! walking links derived from stop coordinates.
//!
//! The crate is organised as:
//!
//! - [`domain`]: core model types (stops, trips, times, labels)
//! - [`timetable`]: the immutable timetable index and its CSV loader
//! - [`walkable`]: walking links derived from stop coordinates
//! - [`planner`]: the routing engine and journey reconstruction
//! - [`web`]: the HTTP API

pub mod domain;
pub mod planner;
pub mod timetable;
pub mod walkable;
pub mod web;
