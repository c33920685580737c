//! # sort-trace
//!
//! Deterministic, replayable step traces for teaching sorting algorithms.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Engines are stateless values. A run copies its input, sorts
//!    the copy and returns a finished trace. No timers, no callbacks, no
//!    global state.
//!
//! 2. **Exact**: Comparison counts, tie-break order and move sequencing are
//!    part of the contract. Animation and solution checking both replay
//!    traces step for step.
//!
//! 3. **Full snapshots**: Every step stores a complete copy of the working
//!    array, so any step can be rendered on its own.
//!
//! ## Modules
//!
//! - `core`: Steps, traces, algorithm kinds, configuration, errors
//! - `engines`: Insertion, merge and hybrid run sort engines
//! - `validate`: Positional solution checking
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engines;
pub mod validate;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    AlgorithmKind, Step, StepKind, Trace, TraceConfig, TraceError, TraceStats, DEFAULT_RUN_SIZE,
};

pub use crate::engines::{
    engine_for, run, run_with_config, HybridRunSortEngine, InsertionSortEngine, MergeSortEngine,
    SortEngine, TraceRecorder,
};

pub use crate::validate::{validate, validate_report, ValidationReport};
