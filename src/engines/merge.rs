//! Recursive top-down merge sort with full step emission.

use crate::core::{AlgorithmKind, StepKind};

use super::{SortEngine, TraceRecorder};

/// Classic recursive merge sort over `[0, n - 1]`.
///
/// Splits at `left + (right - left) / 2` and takes the left element on ties,
/// which keeps the sort stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSortEngine;

impl MergeSortEngine {
    /// Create the engine.
    pub const fn new() -> Self {
        Self
    }
}

impl SortEngine for MergeSortEngine {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::MergeSort
    }

    fn sort_into(&self, values: &mut [i64], recorder: &mut TraceRecorder) {
        if let Some(last) = values.len().checked_sub(1) {
            merge_sort_range(values, 0, last, recorder);
        }
    }
}

fn merge_sort_range(values: &mut [i64], left: usize, right: usize, recorder: &mut TraceRecorder) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    recorder.record(
        StepKind::Divide { left, mid, right },
        values,
        None,
        None,
        format!("Divide [{left}..{right}] into [{left}..{mid}] and [{}..{right}]", mid + 1),
    );

    merge_sort_range(values, left, mid, recorder);
    merge_sort_range(values, mid + 1, right, recorder);
    merge_runs(values, left, mid, right, recorder);
}

/// Merge the sorted runs `values[left..=mid]` and `values[mid + 1..=right]`.
///
/// One compare step is recorded per comparison and one place step per
/// written element. Once either run is exhausted the rest of the other is
/// placed without comparisons.
///
/// Unconsumed left elements are kept directly after the write cursor, and
/// unconsumed right elements never move, so every snapshot is a permutation
/// of the input.
pub(crate) fn merge_runs(
    values: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
    recorder: &mut TraceRecorder,
) {
    debug_assert!(left <= mid && mid < right && right < values.len());

    let left_run = values[left..=mid].to_vec();
    let right_run = values[mid + 1..=right].to_vec();

    recorder.record(
        StepKind::Merging { left, mid, right },
        values,
        None,
        None,
        format!("Merging [{left}..{mid}] with [{}..{right}]", mid + 1),
    );
    tracing::trace!(
        "merging {} + {} elements at [{}..{}]",
        left_run.len(),
        right_run.len(),
        left,
        right
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        let (a, b) = (left_run[i], right_run[j]);
        recorder.record(
            StepKind::Compare,
            values,
            Some(left + i),
            Some(mid + 1 + j),
            format!("Compare {a} with {b}"),
        );

        let placed = if a <= b {
            i += 1;
            a
        } else {
            j += 1;
            b
        };
        values[k] = placed;

        let pending = &left_run[i..];
        values[k + 1..k + 1 + pending.len()].copy_from_slice(pending);

        recorder.record(
            StepKind::Place,
            values,
            Some(k),
            None,
            format!("Place {placed} at index {k}"),
        );
        k += 1;
    }

    let remainder = left_run[i..].iter().chain(&right_run[j..]);
    for &placed in remainder {
        values[k] = placed;
        recorder.record(
            StepKind::Place,
            values,
            Some(k),
            None,
            format!("Place remaining {placed} at index {k}"),
        );
        k += 1;
    }

    debug_assert_eq!(k, right + 1);
}
