//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::domain::{StopId, TimeOfDay};
use crate::planner::{RaptorEngine, RouteError, RouteRequest, TraceError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/route", get(route_options))
        .route("/api/journey", get(journey_detail))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every stop in the loaded timetable.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    let stops = state
        .timetable
        .stops()
        .map(StopResult::from_stop)
        .collect();
    Json(StopsResponse { stops })
}

fn parse_stop(value: &str, field: &str) -> Result<StopId, AppError> {
    value.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field} stop id: {value}"),
    })
}

fn parse_time(value: &str) -> Result<TimeOfDay, AppError> {
    TimeOfDay::parse(value).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

fn journey_options(labels: &[crate::domain::JourneyLabel]) -> Vec<JourneyOption> {
    let mut options: Vec<JourneyOption> = labels
        .iter()
        .map(|label| JourneyOption {
            departure_time: label.departure.to_string(),
            arrival_time: label.arrival.to_string(),
            boardings: label.boardings,
        })
        .collect();
    options.sort_by(|a, b| a.arrival_time.cmp(&b.arrival_time));
    options
}

/// Compute the Pareto-optimal journey options between two stops, or to
/// every reachable stop when no destination is given.
async fn route_options(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = parse_stop(&query.from, "origin")?;
    let destination = query
        .to
        .as_deref()
        .map(|to| parse_stop(to, "destination"))
        .transpose()?;
    let request = RouteRequest {
        origin,
        destination,
        departure: parse_time(&query.time)?,
    };

    let engine = RaptorEngine::new(&state.timetable, (*state.config).clone());
    let result = engine.route(&request).map_err(AppError::from)?;

    let response = match destination {
        Some(to) => RouteResponse {
            from: origin.0,
            to: Some(to.0),
            results: Some(journey_options(result.labels(to))),
            profiles: None,
        },
        None => RouteResponse {
            from: origin.0,
            to: None,
            results: None,
            profiles: Some(
                result
                    .stops()
                    .map(|(stop, profile)| StopProfile {
                        stop: stop.0,
                        results: journey_options(profile.labels()),
                    })
                    .collect(),
            ),
        },
    };

    Ok(Json(response))
}

/// Reconstruct one journey option, leg by leg.
async fn journey_detail(
    State(state): State<AppState>,
    Query(query): Query<JourneyQuery>,
) -> Result<Json<JourneyResponse>, AppError> {
    let destination = parse_stop(&query.to, "destination")?;
    let request = RouteRequest {
        origin: parse_stop(&query.from, "origin")?,
        destination: Some(destination),
        departure: parse_time(&query.time)?,
    };

    let engine = RaptorEngine::new(&state.timetable, (*state.config).clone());
    let result = engine.route(&request).map_err(AppError::from)?;

    let label = result
        .labels(destination)
        .iter()
        .find(|label| label.boardings == query.boardings)
        .cloned()
        .ok_or_else(|| AppError::NotFound {
            message: format!(
                "no journey with {} boardings from {} to {}",
                query.boardings, query.from, query.to
            ),
        })?;

    let legs = result
        .reconstruct(destination, query.boardings)
        .map_err(AppError::from)?;

    Ok(Json(JourneyResponse {
        legs: legs.iter().map(LegResult::from_leg).collect(),
        departure: label.departure.to_string(),
        arrival: label.arrival.to_string(),
        boardings: label.boardings,
    }))
}

/// Application-level errors.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStop(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<TraceError> for AppError {
    fn from(e: TraceError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
