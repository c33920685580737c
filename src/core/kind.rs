//! Algorithm selection.

use serde::{Deserialize, Serialize};

/// Which engine produces a trace.
///
/// The kind only selects the engine; it has no other effect on the trace
/// contract.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlgorithmKind {
    /// Classic insertion sort.
    InsertionSort,
    /// Recursive top-down merge sort.
    MergeSort,
    /// Insertion-sorted runs followed by bottom-up merging.
    HybridRunSort,
}

impl AlgorithmKind {
    /// Every algorithm, in presentation order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::InsertionSort,
        AlgorithmKind::MergeSort,
        AlgorithmKind::HybridRunSort,
    ];

    /// Display title used in step narration.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::InsertionSort => "Insertion Sort",
            Self::MergeSort => "Merge Sort",
            Self::HybridRunSort => "Hybrid Run Sort",
        }
    }
}
