//! optimizers::errors — shared error types for the protection-level optimizers.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the EMSRb and EMSRb-MR
//! entry points, wrap the errors of the subtrees they orchestrate (fare
//! transformation, sparse-to-dense fill), and map everything to Python
//! exceptions for the PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`OptimizerResult`] and [`OptimizerError`] as the canonical
//!   result and error types for the optimizer entry points and their
//!   validation helpers.
//! - Attach human-readable `Display` messages phrased in terms of domain
//!   constraints ("fares must be sorted in decreasing order") to each
//!   variant.
//! - Convert collaborator errors via `From<TransformError>` and
//!   `From<FillError>` so orchestration code propagates with `?`.
//! - Implement `From<OptimizerError> for PyErr` mapping all variants to
//!   `ValueError` with the Rust message preserved.
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizer entry points validate their inputs and return
//!   [`OptimizerResult<T>`] instead of panicking; degenerate numeric cases
//!   on validated input (zero demand, zero variance) are *not* errors and
//!   are clamped locally by the algorithms.
//! - Values are small and cloneable for comfortable use in tests and in
//!   higher-level orchestration code.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads and
//!   that collaborator errors survive the `From` conversions intact.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::fare_transformation::errors::TransformError;
use crate::helpers::FillError;

pub type OptimizerResult<T> = Result<T, OptimizerError>;

/// OptimizerError — error conditions for the protection-level optimizers.
///
/// Variants
/// --------
/// - `EmptyInput`
///   The class vectors are empty; at least one fare class is required.
/// - `LengthMismatch { fares, demands }`
///   The fare and demand vectors have different lengths.
/// - `SigmaLengthMismatch { expected, actual }`
///   A sigma vector was supplied with a length differing from the class
///   count.
/// - `InvalidFare(value)` / `InvalidDemand(value)` / `InvalidSigma(value)`
///   A non-finite or negative entry in the corresponding vector.
/// - `UnsortedFares { index }`
///   `fares[index]` exceeds `fares[index - 1]`; fares must be provided in
///   decreasing (non-increasing) order.
/// - `Transform(TransformError)`
///   The fare transformation rejected its inputs (EMSRb-MR only).
/// - `Fill(FillError)`
///   The sparse-to-dense re-expansion rejected its inputs (EMSRb-MR only;
///   unreachable for indices the orchestration constructs itself).
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - A feature-gated `From<OptimizerError> for PyErr` maps all variants to
///   `ValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizerError {
    //------ Input validation errors ------
    EmptyInput,
    LengthMismatch { fares: usize, demands: usize },
    SigmaLengthMismatch { expected: usize, actual: usize },
    InvalidFare(f64),
    InvalidDemand(f64),
    InvalidSigma(f64),
    UnsortedFares { index: usize },
    //------ Wrapped collaborator errors ------
    Transform(TransformError),
    Fill(FillError),
}

impl std::error::Error for OptimizerError {}

impl std::fmt::Display for OptimizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizerError::EmptyInput => {
                write!(f, "Need at least one fare class to compute protection levels.")
            }
            OptimizerError::LengthMismatch { fares, demands } => {
                write!(
                    f,
                    "Fare vector has length {fares} but demand vector has length {demands}. \
                     Lengths must match."
                )
            }
            OptimizerError::SigmaLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Sigma vector has length {actual} but {expected} fare classes were given. \
                     Lengths must match."
                )
            }
            OptimizerError::InvalidFare(value) => {
                write!(f, "Invalid fare: {value}. Must be finite and non-negative.")
            }
            OptimizerError::InvalidDemand(value) => {
                write!(f, "Invalid demand: {value}. Must be finite and non-negative.")
            }
            OptimizerError::InvalidSigma(value) => {
                write!(f, "Invalid sigma: {value}. Must be finite and non-negative.")
            }
            OptimizerError::UnsortedFares { index } => {
                write!(
                    f,
                    "Fare at index {index} exceeds the fare before it. \
                     Fares must be sorted in decreasing order."
                )
            }
            OptimizerError::Transform(err) => write!(f, "Fare transformation failed: {err}"),
            OptimizerError::Fill(err) => write!(f, "Protection-level re-expansion failed: {err}"),
        }
    }
}

impl From<TransformError> for OptimizerError {
    fn from(err: TransformError) -> Self {
        OptimizerError::Transform(err)
    }
}

impl From<FillError> for OptimizerError {
    fn from(err: FillError) -> Self {
        OptimizerError::Fill(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptimizerError> for PyErr {
    fn from(err: OptimizerError) -> PyErr {
        PyValueError::new_err(format!("{err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the Display formatting of the validation variants
    // and the From conversions that wrap collaborator errors. The conditions
    // producing the variants are exercised in `validation` and in the
    // optimizer modules.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure each payload-carrying variant's message embeds its payload so
    // logs remain meaningful without surrounding context.
    //
    // Given
    // -----
    // - One instance of each payload-carrying validation variant.
    //
    // Expect
    // ------
    // - The formatted message contains the offending value or index.
    fn optimizer_error_display_embeds_payload() {
        let cases: Vec<(OptimizerError, &str)> = vec![
            (OptimizerError::LengthMismatch { fares: 3, demands: 2 }, "3"),
            (OptimizerError::SigmaLengthMismatch { expected: 3, actual: 1 }, "1"),
            (OptimizerError::InvalidFare(-2.0), "-2"),
            (OptimizerError::InvalidDemand(f64::INFINITY), "inf"),
            (OptimizerError::InvalidSigma(-0.5), "-0.5"),
            (OptimizerError::UnsortedFares { index: 4 }, "index 4"),
        ];

        for (error, needle) in cases {
            let message = format!("{error}");
            assert!(message.contains(needle), "message {message:?} should contain {needle:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that collaborator errors survive the `From` conversions intact
    // and remain visible in the wrapped Display message.
    //
    // Given
    // -----
    // - A `TransformError::EmptyInput` and a `FillError::LengthMismatch`.
    //
    // Expect
    // ------
    // - The converted `OptimizerError` holds the original error and its
    //   message mentions the inner failure.
    fn optimizer_error_wraps_collaborator_errors() {
        let transform: OptimizerError = TransformError::EmptyInput.into();
        assert_eq!(transform, OptimizerError::Transform(TransformError::EmptyInput));
        assert!(format!("{transform}").contains("Fare transformation failed"));

        let fill: OptimizerError = FillError::LengthMismatch { indices: 2, values: 1 }.into();
        assert_eq!(fill, OptimizerError::Fill(FillError::LengthMismatch { indices: 2, values: 1 }));
        assert!(format!("{fill}").contains("re-expansion failed"));
    }
}
