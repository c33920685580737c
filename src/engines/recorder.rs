//! Step recording shared by all engines.

use crate::core::{AlgorithmKind, Step, StepKind, Trace};

/// Accumulates steps for one engine run.
///
/// Creating a recorder emits the start marker and [`TraceRecorder::finish`]
/// emits the complete marker, so every finished trace is bracketed by them.
#[derive(Debug)]
pub struct TraceRecorder {
    trace: Trace,
}

impl TraceRecorder {
    /// Begin a trace for `algorithm`, recording `input` as the start marker.
    pub fn start(algorithm: AlgorithmKind, input: &[i64]) -> Self {
        let mut trace = Trace::new(algorithm);
        trace.push(Step::new(
            StepKind::Start,
            input,
            None,
            None,
            format!("Starting {} on {} elements", algorithm.title(), input.len()),
        ));
        Self { trace }
    }

    /// Record one step against the current working array.
    pub fn record(
        &mut self,
        kind: StepKind,
        array: &[i64],
        active_index: Option<usize>,
        compare_index: Option<usize>,
        description: impl Into<String>,
    ) {
        self.trace
            .push(Step::new(kind, array, active_index, compare_index, description));
    }

    /// Number of steps recorded so far, including the start marker.
    pub fn step_count(&self) -> usize {
        self.trace.len()
    }

    /// Record the complete marker and hand back the trace.
    pub fn finish(mut self, sorted: &[i64]) -> Trace {
        let algorithm = self.trace.algorithm;
        self.trace.push(Step::new(
            StepKind::Complete,
            sorted,
            None,
            None,
            format!("{} complete", algorithm.title()),
        ));

        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                "{} traced {} elements in {} steps ({} comparisons)",
                algorithm,
                sorted.len(),
                self.trace.len(),
                self.trace.stats().comparisons
            );
        }

        self.trace
    }
}
