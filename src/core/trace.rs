//! Complete, ordered record of one engine invocation.
//!
//! A trace always begins with a [`StepKind::Start`] marker holding the input
//! and ends with a [`StepKind::Complete`] marker holding the sorted result.

use serde::{Deserialize, Serialize};

use super::{AlgorithmKind, Step, StepKind, TraceError};

/// The ordered steps produced by one engine run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Algorithm that produced this trace.
    pub algorithm: AlgorithmKind,

    /// Steps in emission order.
    pub steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace. Engines fill it through a recorder.
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The start marker.
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// The complete marker.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The input sequence, as captured by the start marker.
    pub fn initial_array(&self) -> &[i64] {
        self.first().map_or(&[], |s| s.array.as_slice())
    }

    /// The sorted sequence, as captured by the complete marker.
    pub fn final_array(&self) -> &[i64] {
        self.last().map_or(&[], |s| s.array.as_slice())
    }

    /// Steps whose kind has the given label (e.g. `"compare"`).
    pub fn steps_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.steps.iter().filter(move |s| s.kind.label() == label)
    }

    /// Count steps by kind.
    #[must_use]
    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats::new();
        for step in &self.steps {
            match step.kind {
                StepKind::Compare => stats.comparisons += 1,
                StepKind::Move => stats.moves += 1,
                StepKind::Place => stats.placements += 1,
                StepKind::Divide { .. } => stats.divides += 1,
                StepKind::Merging { .. } => stats.merges += 1,
                StepKind::RunStart { .. } => stats.runs += 1,
                StepKind::Start | StepKind::Select | StepKind::Complete => {}
            }
        }
        stats.steps = self.steps.len() as u32;
        stats
    }

    /// Encode this trace for storage or transfer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TraceError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a trace produced by [`Trace::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TraceError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Step counts for a trace, by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    /// Total steps including markers.
    pub steps: u32,

    /// Comparisons that were narrated.
    pub comparisons: u32,

    /// Insertion sort shifts.
    pub moves: u32,

    /// Elements written into place.
    pub placements: u32,

    /// Merge sort splits.
    pub divides: u32,

    /// Merges of two sorted runs.
    pub merges: u32,

    /// Hybrid engine run blocks.
    pub runs: u32,
}

impl TraceStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Average comparisons per placed element.
    #[must_use]
    pub fn comparisons_per_placement(&self) -> f64 {
        if self.placements == 0 {
            0.0
        } else {
            self.comparisons as f64 / self.placements as f64
        }
    }
}
