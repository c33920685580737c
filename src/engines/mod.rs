//! Sort engines and the dispatch entry points.
//!
//! Each engine is a stateless value implementing [`SortEngine`]. A run copies
//! the caller's sequence, sorts the copy while recording steps and returns
//! the finished [`Trace`]. The caller's slice is never touched.
//!
//! ## Example
//!
//! ```
//! use sort_trace::{run, AlgorithmKind};
//!
//! let trace = run(AlgorithmKind::InsertionSort, &[5, 2, 9, 1, 6]);
//! assert_eq!(trace.final_array(), &[1, 2, 5, 6, 9]);
//! assert_eq!(trace.first().unwrap().active_index, None);
//! ```

pub mod hybrid;
pub mod insertion;
pub mod merge;
pub mod recorder;

pub use hybrid::HybridRunSortEngine;
pub use insertion::InsertionSortEngine;
pub use merge::MergeSortEngine;
pub use recorder::TraceRecorder;

use crate::core::{AlgorithmKind, Trace, TraceConfig, TraceError};

/// A sorting algorithm that narrates its work as a [`Trace`].
///
/// Implementations only provide [`SortEngine::sort_into`]; the default
/// [`SortEngine::run`] takes care of the private copy and the start and
/// complete markers.
pub trait SortEngine: Send + Sync {
    /// Which algorithm this engine implements.
    fn kind(&self) -> AlgorithmKind;

    /// Sort `values` in place, recording every intermediate step.
    ///
    /// Must leave `values` sorted and record only permutations of the
    /// original contents.
    fn sort_into(&self, values: &mut [i64], recorder: &mut TraceRecorder);

    /// Produce the complete trace for `values`.
    fn run(&self, values: &[i64]) -> Trace {
        let mut working = values.to_vec();
        let mut recorder = TraceRecorder::start(self.kind(), &working);
        self.sort_into(&mut working, &mut recorder);
        recorder.finish(&working)
    }
}

/// Build the engine for `kind` under `config`.
pub fn engine_for(
    kind: AlgorithmKind,
    config: &TraceConfig,
) -> Result<Box<dyn SortEngine>, TraceError> {
    config.validate()?;
    let engine: Box<dyn SortEngine> = match kind {
        AlgorithmKind::InsertionSort => Box::new(InsertionSortEngine::new()),
        AlgorithmKind::MergeSort => Box::new(MergeSortEngine::new()),
        AlgorithmKind::HybridRunSort => Box::new(HybridRunSortEngine::from_config(config)?),
    };
    Ok(engine)
}

/// Trace `values` with the default configuration.
pub fn run(kind: AlgorithmKind, values: &[i64]) -> Trace {
    match kind {
        AlgorithmKind::InsertionSort => InsertionSortEngine::new().run(values),
        AlgorithmKind::MergeSort => MergeSortEngine::new().run(values),
        AlgorithmKind::HybridRunSort => HybridRunSortEngine::new().run(values),
    }
}

/// Trace `values` under `config`.
///
/// Fails with [`TraceError::InvalidInput`] if the configuration is out of
/// range.
pub fn run_with_config(
    kind: AlgorithmKind,
    values: &[i64],
    config: &TraceConfig,
) -> Result<Trace, TraceError> {
    Ok(engine_for(kind, config)?.run(values))
}
