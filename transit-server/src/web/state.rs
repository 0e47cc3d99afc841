//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RaptorConfig;
use crate::timetable::TimetableIndex;

/// Shared application state.
///
/// The timetable is immutable after loading, so handlers can share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded timetable.
    pub timetable: Arc<TimetableIndex>,

    /// Routing configuration.
    pub config: Arc<RaptorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: TimetableIndex, config: RaptorConfig) -> Self {
        Self {
            timetable: Arc::new(timetable),
            config: Arc::new(config),
        }
    }
}
