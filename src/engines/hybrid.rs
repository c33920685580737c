//! Hybrid run sort: insertion-sorted blocks merged bottom-up.
//!
//! A simplified TimSort. Phase A insertion sorts fixed-size blocks in place;
//! phase B merges adjacent blocks in passes of doubling width.
//!
//! A pair is only merged when its right block is non-empty (`mid < right`).
//! An undersized trailing block can therefore sit out a pass and be picked
//! up by a later, wider one.

use crate::core::{AlgorithmKind, StepKind, TraceConfig, TraceError, DEFAULT_RUN_SIZE};

use super::insertion::insertion_sort_range;
use super::merge::merge_runs;
use super::{SortEngine, TraceRecorder};

/// Run-partitioned insertion sort followed by iterative bottom-up merging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HybridRunSortEngine {
    run_size: usize,
}

impl Default for HybridRunSortEngine {
    fn default() -> Self {
        Self {
            run_size: DEFAULT_RUN_SIZE,
        }
    }
}

impl HybridRunSortEngine {
    /// Create the engine with the default run size of 32.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the engine with a custom run size.
    ///
    /// Returns [`TraceError::InvalidInput`] when `run_size` is zero.
    pub fn with_run_size(run_size: usize) -> Result<Self, TraceError> {
        Self::from_config(&TraceConfig::new().with_run_size(run_size))
    }

    /// Create the engine from a validated configuration.
    pub fn from_config(config: &TraceConfig) -> Result<Self, TraceError> {
        config.validate()?;
        Ok(Self {
            run_size: config.run_size,
        })
    }

    /// Block length used in the run phase.
    #[must_use]
    pub const fn run_size(&self) -> usize {
        self.run_size
    }
}

impl SortEngine for HybridRunSortEngine {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::HybridRunSort
    }

    fn sort_into(&self, values: &mut [i64], recorder: &mut TraceRecorder) {
        let n = values.len();
        if n <= 1 {
            return;
        }
        let run = self.run_size;

        for start in (0..n).step_by(run) {
            let end = start.saturating_add(run - 1).min(n - 1);
            recorder.record(
                StepKind::RunStart { start, end },
                values,
                None,
                None,
                format!("Run start: sorting [{start}..{end}] with insertion sort"),
            );
            insertion_sort_range(values, start, end, recorder);
        }

        let mut size = run;
        while size < n {
            let mut left = 0;
            while left < n {
                let mid = left + size - 1;
                let right = (left + 2 * size - 1).min(n - 1);
                if mid < right {
                    merge_runs(values, left, mid, right, recorder);
                }
                left += 2 * size;
            }
            size *= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descending(n: usize) -> Vec<i64> {
        (0..n as i64).rev().collect()
    }

    #[test]
    fn test_zero_run_size_rejected() {
        assert_eq!(
            HybridRunSortEngine::with_run_size(0),
            Err(TraceError::InvalidInput("run_size must be positive"))
        );
    }

    #[test]
    fn test_default_run_size() {
        assert_eq!(HybridRunSortEngine::new().run_size(), 32);
    }

    #[test]
    fn test_single_run_has_no_merges() {
        let trace = HybridRunSortEngine::new().run(&descending(32));
        let stats = trace.stats();
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.merges, 0);
        assert_eq!(trace.final_array(), (0..32).collect::<Vec<i64>>().as_slice());
    }

    #[test]
    fn test_one_past_run_merges_once() {
        let trace = HybridRunSortEngine::new().run(&descending(33));
        let merges: Vec<_> = trace.steps_labelled("merging").map(|s| s.kind).collect();
        assert_eq!(
            merges,
            vec![StepKind::Merging { left: 0, mid: 31, right: 32 }]
        );
        assert_eq!(trace.stats().runs, 2);
    }

    #[test]
    fn test_trailing_block_waits_for_wider_pass() {
        // Blocks of 2 over 5 elements: [0,1] [2,3] [4]. The first pass merges
        // [0..3] and skips [4]; the size-4 pass merges [0..3] with [4].
        let engine = HybridRunSortEngine::with_run_size(2).unwrap();
        let trace = engine.run(&[5, 4, 3, 2, 1]);
        let merges: Vec<_> = trace.steps_labelled("merging").map(|s| s.kind).collect();
        assert_eq!(
            merges,
            vec![
                StepKind::Merging { left: 0, mid: 1, right: 3 },
                StepKind::Merging { left: 0, mid: 3, right: 4 },
            ]
        );
        assert_eq!(trace.final_array(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_run_start_ranges() {
        let engine = HybridRunSortEngine::with_run_size(3).unwrap();
        let trace = engine.run(&[7, 6, 5, 4, 3, 2, 1]);
        let runs: Vec<_> = trace.steps_labelled("run_start").map(|s| s.kind).collect();
        assert_eq!(
            runs,
            vec![
                StepKind::RunStart { start: 0, end: 2 },
                StepKind::RunStart { start: 3, end: 5 },
                StepKind::RunStart { start: 6, end: 6 },
            ]
        );
    }

    #[test]
    fn test_short_inputs_emit_only_markers() {
        let engine = HybridRunSortEngine::new();
        for input in [vec![], vec![0]] {
            let trace = engine.run(&input);
            let labels: Vec<_> = trace.iter().map(|s| s.kind.label()).collect();
            assert_eq!(labels, vec!["start", "complete"]);
            assert_eq!(trace.final_array(), input.as_slice());
        }

        let tiny = HybridRunSortEngine::with_run_size(1).unwrap();
        assert_eq!(tiny.run(&[42]).len(), 2);
    }

    #[test]
    fn test_run_start_description_names_the_step() {
        let trace = HybridRunSortEngine::new().run(&[2, 1]);
        let run = trace.steps_labelled("run_start").next().unwrap();
        assert_eq!(run.description, "Run start: sorting [0..1] with insertion sort");
    }

    #[test]
    fn test_huge_run_size_is_single_run() {
        let engine = HybridRunSortEngine::with_run_size(usize::MAX).unwrap();
        let trace = engine.run(&[3, 1, 2]);
        assert_eq!(trace.stats().runs, 1);
        assert_eq!(trace.final_array(), &[1, 2, 3]);
    }
}
