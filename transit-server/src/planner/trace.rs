//! Predecessor trace for journey reconstruction.

use std::collections::HashMap;

use crate::domain::{JourneyLabel, StopId};

/// Final labels keyed by `(stop, boardings)`.
///
/// Because each stop's final profile holds at most one label per boarding
/// count, a fixed slot per count suffices, and each slot is written at
/// most once. The trace is assembled after the rounds finish and is the
/// only structure reconstruction reads.
#[derive(Debug, Clone)]
pub struct PredecessorTrace {
    slots: HashMap<StopId, Vec<Option<JourneyLabel>>>,
    slots_per_stop: usize,
}

impl PredecessorTrace {
    /// Creates a trace with room for boarding counts `0..=max_boardings`.
    pub fn new(max_boardings: usize) -> Self {
        Self {
            slots: HashMap::new(),
            slots_per_stop: max_boardings + 1,
        }
    }

    /// Records the final label for `(stop, boardings)`.
    ///
    /// Each slot is write-once; recording into an occupied slot is a bug
    /// in the caller.
    pub fn record(&mut self, stop: StopId, label: JourneyLabel) {
        let boardings = label.boardings;
        let slots_per_stop = self.slots_per_stop;
        let slots = self
            .slots
            .entry(stop)
            .or_insert_with(|| vec![None; slots_per_stop]);

        debug_assert!(boardings < slots.len(), "boarding count out of range");
        debug_assert!(
            slots[boardings].is_none(),
            "slot ({stop}, {boardings}) written twice"
        );
        slots[boardings] = Some(label);
    }

    /// Looks up the label recorded for `(stop, boardings)`.
    pub fn get(&self, stop: StopId, boardings: usize) -> Option<&JourneyLabel> {
        self.slots.get(&stop)?.get(boardings)?.as_ref()
    }
}
