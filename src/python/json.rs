//! JSON interface for batch processing
//!
//! Whole requests travel as one JSON string, so a batch of documents costs a
//! single Python↔Rust crossing.

use crate::errors::SummarizeError;
use crate::request::{summarize_batch_json, summarize_json};
use pyo3::prelude::*;

fn to_py_err(err: SummarizeError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Summarize a JSON request object, returning a JSON response object
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    py.allow_threads(|| summarize_json(json_input))
        .map_err(to_py_err)
}

/// Summarize a JSON array of requests, returning a JSON array of results
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    py.allow_threads(|| summarize_batch_json(json_input))
        .map_err(to_py_err)
}
