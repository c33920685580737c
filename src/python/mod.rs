//! Python bindings for the sort-trace engines.
//!
//! # Quick Start
//!
//! ```python
//! import sort_trace as st
//!
//! trace = st.run("merge_sort", [12, 7, 3, 9, 15])
//! for step in trace.steps:
//!     print(step.kind, step.array, step.active_index)
//!
//! assert st.validate([1, 2, 3], [1, 2, 3])
//! ```

use pyo3::prelude::*;

mod py_core;

pub use py_core::*;

/// sort-trace: replayable sorting traces for teaching.
///
/// This module provides:
/// - `run(kind, values, run_size=None)` returning a `Trace`
/// - `validate(candidate, target)` for positional solution checks
#[pymodule]
fn sort_trace(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStep>()?;
    m.add_class::<PyTrace>()?;

    m.add_function(wrap_pyfunction!(py_run, m)?)?;
    m.add_function(wrap_pyfunction!(py_validate, m)?)?;

    Ok(())
}
