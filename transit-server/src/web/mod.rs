//! Web layer for the transit journey planner.
//!
//! Provides HTTP endpoints for listing stops, computing Pareto-optimal
//! journey options and reconstructing individual journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
