//! rust_revman — revenue-management protection levels with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the protection-level optimizers to Python via the
//! `_rust_revman` extension module. The crate computes booking-limit
//! protection levels for nested fare classes in a single
//! capacity-constrained resource (e.g. one flight leg) from per-class
//! fares, demand forecasts, and optional Gaussian demand uncertainty.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`optimizers`],
//!   [`fare_transformation`], [`helpers`]) as the public crate surface.
//! - When the `python-bindings` feature is enabled, define the
//!   `#[pyfunction]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_revman` extension, registering `optimizers` and
//!   `fare_transformation` submodules so dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - The Rust core never uses NaN for control flow; only at the Python
//!   boundary are inefficient classes rendered as NaN in the adjusted-fare
//!   vector, matching the numpy-ecosystem convention.
//! - Rust error values are converted to `ValueError` at the PyO3 boundary
//!   with their `Display` messages preserved.
//!
//! Conventions
//! -----------
//! - Class vectors are indexed by fare rank: index 0 is the highest fare,
//!   fares are non-increasing, and all vectors align index-for-index.
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the crate-level integration tests under `tests/`; binding
//!   smoke tests live on the Python side of the packaging layer.

pub mod fare_transformation;
pub mod helpers;
pub mod optimizers;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::utils::extract_f64_array;

/// Protection levels via the EMSRb heuristic, exposed to Python.
///
/// Accepts 1-D float64 numpy arrays, pandas Series, or sequences for
/// `fares`, `demands`, and the optional `sigmas`; returns the rounded
/// protection-level vector as a list of floats. Validation failures raise
/// `ValueError`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "emsrb",
    signature = (fares, demands, sigmas = None),
    text_signature = "(fares, demands, /, sigmas=None)"
)]
fn emsrb_py<'py>(
    py: Python<'py>, fares: &Bound<'py, PyAny>, demands: &Bound<'py, PyAny>,
    sigmas: Option<&Bound<'py, PyAny>>,
) -> PyResult<Vec<f64>> {
    let fares_arr = extract_f64_array(py, fares)?;
    let demands_arr = extract_f64_array(py, demands)?;
    let sigmas_arr = sigmas.map(|raw| extract_f64_array(py, raw)).transpose()?;

    let fares_slice = fares_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("fares must be a 1-D contiguous float64 array"))?;
    let demands_slice = demands_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("demands must be a 1-D contiguous float64 array"))?;
    let sigmas_slice = match &sigmas_arr {
        Some(arr) => Some(arr.as_slice().map_err(|_| {
            PyValueError::new_err("sigmas must be a 1-D contiguous float64 array")
        })?),
        None => None,
    };

    let levels = optimizers::emsrb(fares_slice, demands_slice, sigmas_slice)?;
    Ok(levels.to_vec())
}

/// Protection levels via EMSRb-MR, exposed to Python.
///
/// Same conventions as `emsrb`, plus an optional scalar capacity bound
/// forwarded to the fare transformation. Indices of classes excluded as
/// inefficient are zero-filled in the result.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "emsrb_mr",
    signature = (fares, demands, sigmas = None, cap = None),
    text_signature = "(fares, demands, /, sigmas=None, cap=None)"
)]
fn emsrb_mr_py<'py>(
    py: Python<'py>, fares: &Bound<'py, PyAny>, demands: &Bound<'py, PyAny>,
    sigmas: Option<&Bound<'py, PyAny>>, cap: Option<f64>,
) -> PyResult<Vec<f64>> {
    let fares_arr = extract_f64_array(py, fares)?;
    let demands_arr = extract_f64_array(py, demands)?;
    let sigmas_arr = sigmas.map(|raw| extract_f64_array(py, raw)).transpose()?;

    let fares_slice = fares_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("fares must be a 1-D contiguous float64 array"))?;
    let demands_slice = demands_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("demands must be a 1-D contiguous float64 array"))?;
    let sigmas_slice = match &sigmas_arr {
        Some(arr) => Some(arr.as_slice().map_err(|_| {
            PyValueError::new_err("sigmas must be a 1-D contiguous float64 array")
        })?),
        None => None,
    };

    let levels = optimizers::emsrb_mr(fares_slice, demands_slice, sigmas_slice, cap)?;
    Ok(levels.to_vec())
}

/// Marginal-revenue fare transformation, exposed to Python.
///
/// Returns `(adjusted_fares, adjusted_demand)` as lists of floats.
/// Inefficient classes carry NaN in `adjusted_fares` and 0.0 in
/// `adjusted_demand`, matching the numpy-ecosystem sentinel convention;
/// the Rust core itself represents them as an explicit tagged variant.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "fare_transformation",
    signature = (fares, demands, cap = None),
    text_signature = "(fares, demands, /, cap=None)"
)]
fn fare_transformation_py<'py>(
    py: Python<'py>, fares: &Bound<'py, PyAny>, demands: &Bound<'py, PyAny>, cap: Option<f64>,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let fares_arr = extract_f64_array(py, fares)?;
    let demands_arr = extract_f64_array(py, demands)?;

    let fares_slice = fares_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("fares must be a 1-D contiguous float64 array"))?;
    let demands_slice = demands_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("demands must be a 1-D contiguous float64 array"))?;

    let (adjusted_fares, adjusted_demand) =
        fare_transformation::fare_transformation(fares_slice, demands_slice, cap)?;

    let adjusted_fares_out: Vec<f64> =
        adjusted_fares.iter().map(|adjusted| adjusted.fare().unwrap_or(f64::NAN)).collect();
    Ok((adjusted_fares_out, adjusted_demand))
}

/// _rust_revman — PyO3 module initializer for the Python extension.
///
/// Creates the `optimizers` and `fare_transformation` submodules, attaches
/// them to the parent `_rust_revman` module, and registers them in
/// `sys.modules` so they are importable via dotted paths from Python. This
/// function is invoked automatically by Python when importing the compiled
/// extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_revman<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let optimizers_mod = PyModule::new(_py, "optimizers")?;
    let fare_transformation_mod = PyModule::new(_py, "fare_transformation")?;
    optimizers_submodule(_py, m, &optimizers_mod)?;
    fare_transformation_submodule(_py, m, &fare_transformation_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_revman.optimizers", optimizers_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_revman.fare_transformation", fare_transformation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn optimizers_submodule<'py>(
    _py: Python, rust_revman: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(emsrb_py, m)?)?;
    m.add_function(wrap_pyfunction!(emsrb_mr_py, m)?)?;
    rust_revman.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn fare_transformation_submodule<'py>(
    _py: Python, rust_revman: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fare_transformation_py, m)?)?;
    rust_revman.add_submodule(m)?;
    Ok(())
}
