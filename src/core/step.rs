//! A single instant of an algorithm's execution.
//!
//! Every step carries a full, independent snapshot of the working sequence,
//! the indices the algorithm is currently looking at, a narration line and a
//! [`StepKind`] tag naming what happened.

use serde::{Deserialize, Serialize};

/// What a step records.
///
/// Range-carrying kinds embed their inclusive bounds so a presenter can
/// highlight the affected region without parsing the description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// First step of every trace; array equals the input.
    Start,
    /// Insertion sort picked up the key at `active_index`.
    Select,
    /// Two elements are being compared.
    Compare,
    /// Insertion sort shifted an element one slot right.
    Move,
    /// An element was written into its slot for this pass.
    Place,
    /// Merge sort split `[left, right]` at `mid`.
    Divide { left: usize, mid: usize, right: usize },
    /// Sorted runs `[left, mid]` and `[mid + 1, right]` are about to merge.
    Merging { left: usize, mid: usize, right: usize },
    /// The hybrid engine started insertion sorting block `[start, end]`.
    RunStart { start: usize, end: usize },
    /// Last step of every trace; array is fully sorted.
    Complete,
}

impl StepKind {
    /// Short lowercase label, stable across versions.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Select => "select",
            Self::Compare => "compare",
            Self::Move => "move",
            Self::Place => "place",
            Self::Divide { .. } => "divide",
            Self::Merging { .. } => "merging",
            Self::RunStart { .. } => "run_start",
            Self::Complete => "complete",
        }
    }

    /// Returns true for kinds that mark a trace boundary.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::Start | Self::Complete)
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One snapshot-plus-narration unit of a trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Snapshot of the working sequence at this instant.
    pub array: Vec<i64>,

    /// Index currently held by the algorithm.
    pub active_index: Option<usize>,

    /// Index currently compared against.
    pub compare_index: Option<usize>,

    /// Human-readable narration.
    pub description: String,

    /// What this step records.
    pub kind: StepKind,
}

impl Step {
    /// Create a new step. The snapshot is copied out of `array`.
    pub fn new(
        kind: StepKind,
        array: &[i64],
        active_index: Option<usize>,
        compare_index: Option<usize>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            array: array.to_vec(),
            active_index,
            compare_index,
            description: description.into(),
            kind,
        }
    }

    /// Active index with `-1` standing in for "none".
    #[must_use]
    pub fn active_index_or_sentinel(&self) -> isize {
        to_sentinel(self.active_index)
    }

    /// Compare index with `-1` standing in for "none".
    #[must_use]
    pub fn compare_index_or_sentinel(&self) -> isize {
        to_sentinel(self.compare_index)
    }

    /// Returns true for start and complete markers.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.kind.is_marker()
    }
}

fn to_sentinel(index: Option<usize>) -> isize {
    index.map_or(-1, |i| i as isize)
}
