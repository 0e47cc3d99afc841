//! Fixed-duration transfer edges between stops.

use super::StopId;

/// A directed transfer edge with a fixed traversal duration in seconds.
///
/// Edges come from two sources: the feed's transfer table (loaded once),
/// and walking links derived at query time from stop coordinates. Both
/// behave identically once they exist. Edges are directed and not
/// assumed symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferEdge {
    /// Origin stop.
    pub from: StopId,
    /// Destination stop.
    pub to: StopId,
    /// Traversal duration in seconds.
    pub duration: u32,
}

impl TransferEdge {
    /// Creates a transfer edge.
    pub fn new(from: StopId, to: StopId, duration: u32) -> Self {
        Self { from, to, duration }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_directed() {
        let forward = TransferEdge::new(StopId(1), StopId(2), 300);
        let backward = TransferEdge::new(StopId(2), StopId(1), 300);
        assert_ne!(forward, backward);
    }
}
