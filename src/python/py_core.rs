//! Trace type bindings and entry points for Python.

use std::str::FromStr;

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{AlgorithmKind, Step, Trace, TraceConfig, TraceError};
use crate::engines::run_with_config;
use crate::validate::validate;

impl From<TraceError> for PyErr {
    fn from(err: TraceError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn require<T>(value: Option<T>, what: &'static str) -> Result<T, TraceError> {
    value.ok_or(TraceError::InvalidInput(what))
}

/// Python wrapper for Step.
#[pyclass(name = "Step")]
#[derive(Clone)]
pub struct PyStep(pub Step);

#[pymethods]
impl PyStep {
    /// Snapshot of the working array.
    #[getter]
    fn array(&self) -> Vec<i64> {
        self.0.array.clone()
    }

    /// Held index, or -1.
    #[getter]
    fn active_index(&self) -> isize {
        self.0.active_index_or_sentinel()
    }

    /// Compared index, or -1.
    #[getter]
    fn compare_index(&self) -> isize {
        self.0.compare_index_or_sentinel()
    }

    #[getter]
    fn description(&self) -> String {
        self.0.description.clone()
    }

    /// Step kind label, e.g. "compare".
    #[getter]
    fn kind(&self) -> &'static str {
        self.0.kind.label()
    }

    /// Snapshot as a numpy array.
    fn array_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        PyArray1::from_slice_bound(py, &self.0.array)
    }

    fn __repr__(&self) -> String {
        format!(
            "Step(kind={}, active={}, compare={}, array={:?})",
            self.0.kind,
            self.0.active_index_or_sentinel(),
            self.0.compare_index_or_sentinel(),
            self.0.array
        )
    }
}

/// Python wrapper for Trace.
#[pyclass(name = "Trace")]
#[derive(Clone)]
pub struct PyTrace(pub Trace);

#[pymethods]
impl PyTrace {
    /// All steps in emission order.
    #[getter]
    fn steps(&self) -> Vec<PyStep> {
        self.0.iter().map(|s| PyStep(s.clone())).collect()
    }

    /// Algorithm name, e.g. "insertion_sort".
    #[getter]
    fn algorithm(&self) -> String {
        self.0.algorithm.to_string()
    }

    /// The sorted result.
    #[getter]
    fn final_array(&self) -> Vec<i64> {
        self.0.final_array().to_vec()
    }

    /// Step counts by kind.
    fn stats(&self) -> Vec<(&'static str, u32)> {
        let stats = self.0.stats();
        vec![
            ("steps", stats.steps),
            ("comparisons", stats.comparisons),
            ("moves", stats.moves),
            ("placements", stats.placements),
            ("divides", stats.divides),
            ("merges", stats.merges),
            ("runs", stats.runs),
        ]
    }

    /// Encode for storage.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.0.to_bytes()?)
    }

    /// Decode a trace produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        Ok(Self(Trace::from_bytes(&bytes)?))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("Trace(algorithm={}, steps={})", self.0.algorithm, self.0.len())
    }
}

/// Trace `values` with the named algorithm.
///
/// Raises ValueError for unknown algorithms, `None` values, or a
/// non-positive `run_size`.
#[pyfunction]
#[pyo3(name = "run", signature = (kind, values, run_size = None))]
pub fn py_run(kind: &str, values: Option<Vec<i64>>, run_size: Option<i64>) -> PyResult<PyTrace> {
    let kind = AlgorithmKind::from_str(kind)
        .map_err(|_| PyValueError::new_err(format!("unknown algorithm: {kind}")))?;
    let values = require(values, "values must not be None")?;

    let mut config = TraceConfig::default();
    if let Some(run_size) = run_size {
        let run_size = usize::try_from(run_size)
            .map_err(|_| TraceError::InvalidInput("run_size must be positive"))?;
        config = config.with_run_size(run_size);
    }

    Ok(PyTrace(run_with_config(kind, &values, &config)?))
}

/// Returns True iff `candidate` equals `target` at every index.
#[pyfunction]
#[pyo3(name = "validate", signature = (candidate, target))]
pub fn py_validate(candidate: Option<Vec<i64>>, target: Option<Vec<i64>>) -> PyResult<bool> {
    let candidate = require(candidate, "candidate must not be None")?;
    let target = require(target, "target must not be None")?;
    Ok(validate(&candidate, &target))
}
