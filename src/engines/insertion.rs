//! Insertion sort with full step emission.

use crate::core::{AlgorithmKind, StepKind};

use super::{SortEngine, TraceRecorder};

/// Classic insertion sort.
///
/// Comparison is strict greater-than, so equal elements never move past one
/// another and the sort is stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionSortEngine;

impl InsertionSortEngine {
    /// Create the engine.
    pub const fn new() -> Self {
        Self
    }
}

impl SortEngine for InsertionSortEngine {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::InsertionSort
    }

    fn sort_into(&self, values: &mut [i64], recorder: &mut TraceRecorder) {
        if values.len() > 1 {
            let last = values.len() - 1;
            insertion_sort_range(values, 0, last, recorder);
        }
    }
}

/// Insertion sort `values[lo..=hi]`, recording every select, compare, move
/// and place.
///
/// Indices in the recorded steps are absolute, not relative to `lo`. The held
/// key always sits in the open slot of the snapshot, so each snapshot is a
/// permutation of the input.
pub(crate) fn insertion_sort_range(
    values: &mut [i64],
    lo: usize,
    hi: usize,
    recorder: &mut TraceRecorder,
) {
    debug_assert!(hi < values.len());

    for i in (lo + 1)..=hi {
        let key = values[i];
        recorder.record(
            StepKind::Select,
            values,
            Some(i),
            None,
            format!("Select {key} at index {i} as the key"),
        );

        let mut hole = i;
        while hole > lo && values[hole - 1] > key {
            let j = hole - 1;
            let shifted = values[j];
            recorder.record(
                StepKind::Compare,
                values,
                Some(i),
                Some(j),
                format!("Compare {shifted} at index {j} with key {key}: {shifted} is larger"),
            );

            values.swap(j, hole);
            hole = j;

            recorder.record(
                StepKind::Move,
                values,
                Some(i),
                j.checked_sub(1),
                format!("Move {shifted} right to index {}", j + 1),
            );
        }

        values[hole] = key;
        recorder.record(
            StepKind::Place,
            values,
            Some(hole),
            None,
            format!("Place {key} at index {hole}"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[i64]) -> Vec<&'static str> {
        InsertionSortEngine
            .run(values)
            .iter()
            .map(|s| s.kind.label())
            .collect()
    }

    #[test]
    fn test_sorts_example() {
        let trace = InsertionSortEngine.run(&[5, 2, 9, 1, 6]);
        assert_eq!(trace.final_array(), &[1, 2, 5, 6, 9]);
        assert_eq!(trace.algorithm, AlgorithmKind::InsertionSort);
    }

    #[test]
    fn test_already_sorted_has_no_compares() {
        assert_eq!(
            labels(&[1, 2, 3]),
            vec!["start", "select", "place", "select", "place", "complete"]
        );
    }

    #[test]
    fn test_single_shift_sequence() {
        let trace = InsertionSortEngine.run(&[2, 1]);
        let steps = &trace.steps;
        assert_eq!(steps.len(), 6);

        // select key 1 at index 1
        assert_eq!(steps[1].kind, StepKind::Select);
        assert_eq!(steps[1].active_index, Some(1));

        // compare index 1 against 0
        assert_eq!(steps[2].kind, StepKind::Compare);
        assert_eq!(steps[2].active_index, Some(1));
        assert_eq!(steps[2].compare_index, Some(0));
        assert_eq!(steps[2].array, vec![2, 1]);

        // shift leaves j = -1
        assert_eq!(steps[3].kind, StepKind::Move);
        assert_eq!(steps[3].compare_index, None);
        assert_eq!(steps[3].array, vec![1, 2]);

        assert_eq!(steps[4].kind, StepKind::Place);
        assert_eq!(steps[4].active_index, Some(0));
        assert_eq!(steps[4].compare_index, None);
    }

    #[test]
    fn test_equal_keys_do_not_shift() {
        assert_eq!(
            labels(&[4, 4]),
            vec!["start", "select", "place", "complete"]
        );
    }

    #[test]
    fn test_move_reports_decremented_index() {
        let trace = InsertionSortEngine.run(&[3, 2, 1]);
        let moves: Vec<_> = trace
            .steps_labelled("move")
            .map(|s| s.compare_index)
            .collect();
        // key 2: one shift; key 1: two shifts
        assert_eq!(moves, vec![None, Some(0), None]);
    }

    #[test]
    fn test_move_description_names_the_step() {
        let trace = InsertionSortEngine.run(&[2, 1]);
        let mv = trace.steps_labelled("move").next().unwrap();
        assert_eq!(mv.description, "Move 2 right to index 1");
    }

    #[test]
    fn test_range_offsets_indices() {
        let mut values = vec![9, 3, 1, 2];
        let mut recorder = TraceRecorder::start(AlgorithmKind::HybridRunSort, &values);
        insertion_sort_range(&mut values, 2, 3, &mut recorder);
        let trace = recorder.finish(&values);

        assert_eq!(values, vec![9, 3, 1, 2]);
        let select = &trace.steps[1];
        assert_eq!(select.active_index, Some(3));
        let place = trace.steps_labelled("place").next().unwrap();
        assert_eq!(place.active_index, Some(3));
    }

    #[test]
    fn test_range_move_can_point_before_block() {
        let mut values = vec![0, 5, 4];
        let mut recorder = TraceRecorder::start(AlgorithmKind::HybridRunSort, &values);
        insertion_sort_range(&mut values, 1, 2, &mut recorder);
        let trace = recorder.finish(&values);

        let mv = trace.steps_labelled("move").next().unwrap();
        assert_eq!(mv.compare_index, Some(0));
        assert_eq!(values, vec![0, 4, 5]);
    }
}
