//! Per-stop Pareto profiles.
//!
//! A [`Profile`] holds the non-dominated journey labels known for one
//! stop. [`Profile::merge`] is the single primitive through which every
//! label enters the engine's state, and it maintains the invariant that
//! no label in a profile dominates another.

use crate::domain::JourneyLabel;

/// The set of mutually non-dominated labels at one stop.
///
/// Backed by a plain vector: profiles stay small (one label per distinct
/// boarding count at most), so a linear scan beats anything fancier and
/// allocates nothing on the rejection path.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    labels: Vec<JourneyLabel>,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `candidate` unless an existing label dominates it.
    ///
    /// On acceptance, every existing label dominated by `candidate` is
    /// removed before the candidate is appended. Ties (equal arrival and
    /// equal boardings) keep the incumbent and drop the candidate, which
    /// bounds growth when many equal-quality journeys exist.
    ///
    /// Returns whether the candidate was accepted.
    pub fn merge(&mut self, candidate: JourneyLabel) -> bool {
        if self
            .labels
            .iter()
            .any(|existing| existing.dominates(&candidate))
        {
            return false;
        }

        self.labels.retain(|existing| !candidate.dominates(existing));
        self.labels.push(candidate);

        debug_assert!(self.is_pareto(), "profile holds mutually dominating labels");
        true
    }

    /// The labels, in insertion order.
    pub fn labels(&self) -> &[JourneyLabel] {
        &self.labels
    }

    /// Iterates over the labels.
    pub fn iter(&self) -> std::slice::Iter<'_, JourneyLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True when no label dominates another. Dominance-invariant check,
    /// used in debug assertions and tests.
    pub fn is_pareto(&self) -> bool {
        self.labels.iter().enumerate().all(|(i, a)| {
            self.labels
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.dominates(b))
        })
    }
}

impl<'a> IntoIterator for &'a Profile {
    type Item = &'a JourneyLabel;
    type IntoIter = std::slice::Iter<'a, JourneyLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LegKind, StopId, TimeOfDay};

    fn label(arrival_secs: u32, boardings: usize) -> JourneyLabel {
        JourneyLabel {
            arrival: TimeOfDay::from_seconds(arrival_secs),
            boardings,
            departure: TimeOfDay::from_seconds(0),
            leg: LegKind::Walk {
                from: StopId(0),
                duration: 0,
            },
        }
    }

    #[test]
    fn first_label_accepted() {
        let mut profile = Profile::new();
        assert!(profile.merge(label(100, 1)));
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn dominated_candidate_rejected_and_profile_unchanged() {
        let mut profile = Profile::new();
        profile.merge(label(100, 1));

        let before = profile.labels().to_vec();
        assert!(!profile.merge(label(150, 2)));
        assert_eq!(profile.labels(), before.as_slice());
    }

    #[test]
    fn tie_keeps_incumbent() {
        let mut profile = Profile::new();
        profile.merge(label(100, 1));
        assert!(!profile.merge(label(100, 1)));
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn accepted_candidate_evicts_dominated_labels() {
        let mut profile = Profile::new();
        profile.merge(label(300, 1));
        profile.merge(label(200, 2));

        // Dominates both incumbents
        assert!(profile.merge(label(150, 1)));
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.labels()[0].arrival, TimeOfDay::from_seconds(150));
    }

    #[test]
    fn incomparable_labels_coexist() {
        let mut profile = Profile::new();
        assert!(profile.merge(label(300, 1)));
        assert!(profile.merge(label(100, 3)));
        assert_eq!(profile.len(), 2);
        assert!(profile.is_pareto());
    }

    #[test]
    fn cleanup_leaves_nothing_dominated_by_candidate() {
        let mut profile = Profile::new();
        profile.merge(label(300, 2));
        profile.merge(label(100, 4));
        profile.merge(label(200, 3));

        profile.merge(label(150, 2));
        for existing in profile.iter() {
            assert!(
                !(label(150, 2).dominates(existing) && existing != &label(150, 2)),
                "dominated label survived: {existing:?}"
            );
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{LegKind, StopId, TimeOfDay};
    use proptest::prelude::*;

    fn label(arrival_secs: u32, boardings: usize) -> JourneyLabel {
        JourneyLabel {
            arrival: TimeOfDay::from_seconds(arrival_secs),
            boardings,
            departure: TimeOfDay::from_seconds(0),
            leg: LegKind::Walk {
                from: StopId(0),
                duration: 0,
            },
        }
    }

    fn candidates() -> impl Strategy<Value = Vec<(u32, usize)>> {
        // Small ranges force plenty of dominance and ties.
        prop::collection::vec((0u32..50, 0usize..6), 0..40)
    }

    proptest! {
        /// After any merge sequence, no label dominates another.
        #[test]
        fn profile_stays_pareto(seq in candidates()) {
            let mut profile = Profile::new();
            for (arrival, boardings) in seq {
                profile.merge(label(arrival, boardings));
            }
            prop_assert!(profile.is_pareto());
        }

        /// Every merged candidate is either in the profile or dominated
        /// by something that is (Pareto completeness of the merge set).
        #[test]
        fn rejected_candidates_are_dominated(seq in candidates()) {
            let mut profile = Profile::new();
            let all: Vec<JourneyLabel> = seq
                .into_iter()
                .map(|(arrival, boardings)| label(arrival, boardings))
                .collect();

            for candidate in &all {
                profile.merge(candidate.clone());
            }

            for candidate in &all {
                let covered = profile
                    .iter()
                    .any(|kept| kept.dominates(candidate));
                prop_assert!(covered, "candidate {candidate:?} neither kept nor dominated");
            }
        }

        /// At most one label per boarding count survives.
        #[test]
        fn one_label_per_boarding_count(seq in candidates()) {
            let mut profile = Profile::new();
            for (arrival, boardings) in seq {
                profile.merge(label(arrival, boardings));
            }

            let mut counts: Vec<usize> = profile.iter().map(|l| l.boardings).collect();
            counts.sort_unstable();
            let before = counts.len();
            counts.dedup();
            prop_assert_eq!(before, counts.len());
        }
    }
}
