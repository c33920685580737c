//! Value types exchanged with callers: steps, traces, algorithm kinds,
//! configuration and errors.
//!
//! Everything here is created once per engine invocation and immutable
//! afterwards from the caller's point of view.

pub mod config;
pub mod error;
pub mod kind;
pub mod step;
pub mod trace;

pub use config::{TraceConfig, DEFAULT_RUN_SIZE};
pub use error::TraceError;
pub use kind::AlgorithmKind;
pub use step::{Step, StepKind};
pub use trace::{Trace, TraceStats};
