//! fare_transformation::errors — error types for the fare transformation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the marginal-revenue fare
//! transformation, plus the conversion to Python exceptions for the
//! PyO3-based bindings. Transformation-specific validation failures stay
//! localized here; the optimizers wrap them via `From` when orchestrating.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("fares must
//!   be sorted in decreasing order") rather than low-level details.
//! - At the Python boundary all variants map to `ValueError` with the Rust
//!   `Display` message preserved.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload where one exists.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TransformResult<T> = Result<T, TransformError>;

/// TransformError — invalid inputs to the fare transformation.
///
/// Variants
/// --------
/// - `EmptyInput`
///   The fare/demand vectors are empty; there is no strategy to evaluate.
/// - `LengthMismatch { fares, demands }`
///   The fare and demand vectors have different lengths.
/// - `InvalidFare(value)`
///   A fare is non-finite or negative.
/// - `InvalidDemand(value)`
///   A demand is non-finite or negative.
/// - `UnsortedFares { index }`
///   `fares[index]` exceeds `fares[index - 1]`; fares must be provided in
///   decreasing (non-increasing) order.
/// - `InvalidCap(value)`
///   The capacity bound is non-finite or negative.
///
/// Notes
/// -----
/// - Small and cloneable so it can be embedded in the optimizer error type
///   and asserted on directly in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    EmptyInput,
    LengthMismatch { fares: usize, demands: usize },
    InvalidFare(f64),
    InvalidDemand(f64),
    UnsortedFares { index: usize },
    InvalidCap(f64),
}

impl std::error::Error for TransformError {}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::EmptyInput => {
                write!(f, "Need at least one fare class to transform.")
            }
            TransformError::LengthMismatch { fares, demands } => {
                write!(
                    f,
                    "Fare vector has length {fares} but demand vector has length {demands}. \
                     Lengths must match."
                )
            }
            TransformError::InvalidFare(value) => {
                write!(f, "Invalid fare: {value}. Must be finite and non-negative.")
            }
            TransformError::InvalidDemand(value) => {
                write!(f, "Invalid demand: {value}. Must be finite and non-negative.")
            }
            TransformError::UnsortedFares { index } => {
                write!(
                    f,
                    "Fare at index {index} exceeds the fare before it. \
                     Fares must be sorted in decreasing order."
                )
            }
            TransformError::InvalidCap(value) => {
                write!(f, "Invalid capacity: {value}. Must be finite and non-negative.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(format!("{err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the Display formatting of each error variant. The
    // conditions that *produce* the variants are exercised in
    // `efficient_frontier`'s validation tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure each variant's message embeds its payload so logs remain
    // meaningful without surrounding context.
    //
    // Given
    // -----
    // - One instance of each payload-carrying variant.
    //
    // Expect
    // ------
    // - The formatted message contains the offending value or index.
    fn transform_error_display_embeds_payload() {
        let cases: Vec<(TransformError, &str)> = vec![
            (TransformError::LengthMismatch { fares: 3, demands: 2 }, "3"),
            (TransformError::InvalidFare(-1.5), "-1.5"),
            (TransformError::InvalidDemand(f64::NAN), "NaN"),
            (TransformError::UnsortedFares { index: 2 }, "index 2"),
            (TransformError::InvalidCap(-10.0), "-10"),
        ];

        for (error, needle) in cases {
            let message = format!("{error}");
            assert!(message.contains(needle), "message {message:?} should contain {needle:?}");
        }
    }
}
