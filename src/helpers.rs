//! helpers — sparse-to-dense placement utilities shared across the crate.
//!
//! Purpose
//! -------
//! Provide the scatter-fill primitive used to re-expand results computed on
//! an index subset back onto full-length class vectors. EMSRb-MR runs the
//! protection-level recursion only on efficient fare classes and then places
//! the sub-results back at their original positions; this module owns that
//! placement step as a small, independently testable utility instead of
//! inlining index arithmetic into the optimizers.
//!
//! Key behaviors
//! -------------
//! - Build a dense `Array1<f64>` of a requested length, pre-filled with an
//!   explicit fill value, and scatter `values[k]` to position `indices[k]`.
//! - Reject mismatched index/value lengths and out-of-range indices with
//!   structured [`FillError`] values rather than panicking.
//!
//! Invariants & assumptions
//! ------------------------
//! - Indices are positions into the *target* vector; they do not need to be
//!   sorted or unique (later entries overwrite earlier ones).
//! - The fill value is caller-chosen; protection-level re-expansion uses
//!   `0.0` so that skipped classes read as "no protection".
//!
//! Downstream usage
//! ----------------
//! - `optimizers::emsrb_mr` re-expands efficient-subset protection levels
//!   with `scatter_fill(n, &efficient, sub_levels, 0.0)`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover placement, overwrite order, the fill value, and both
//!   error branches.

use ndarray::Array1;

pub type FillResult<T> = Result<T, FillError>;

/// FillError — failures of the sparse-to-dense placement helper.
///
/// Variants
/// --------
/// - `LengthMismatch { indices, values }`
///   The index and value vectors have different lengths, so the pairing
///   `(indices[k], values[k])` is ill-defined.
/// - `IndexOutOfBounds { index, target_len }`
///   An index points outside the target vector.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation; callers embedding this error wrap it
///   via their own `From` impls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    LengthMismatch { indices: usize, values: usize },
    IndexOutOfBounds { index: usize, target_len: usize },
}

impl std::error::Error for FillError {}

impl std::fmt::Display for FillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillError::LengthMismatch { indices, values } => {
                write!(
                    f,
                    "Index vector has length {indices} but value vector has length {values}. \
                     Lengths must match."
                )
            }
            FillError::IndexOutOfBounds { index, target_len } => {
                write!(f, "Index {index} is out of bounds for a target vector of length {target_len}.")
            }
        }
    }
}

/// Scatter values into a dense vector of a requested length.
///
/// Parameters
/// ----------
/// - `target_len`: `usize`
///   Length of the dense output vector.
/// - `indices`: `&[usize]`
///   Positions in the output at which to place the corresponding entries of
///   `values`. Must satisfy `indices[k] < target_len` for every `k`.
/// - `values`: `&[f64]`
///   Values to place; must have the same length as `indices`.
/// - `fill`: `f64`
///   Value written at every position not named by `indices`.
///
/// Returns
/// -------
/// `FillResult<Array1<f64>>`
///   A length-`target_len` vector with `values[k]` at `indices[k]` and
///   `fill` everywhere else.
///
/// Errors
/// ------
/// - `FillError::LengthMismatch`
///   When `indices.len() != values.len()`.
/// - `FillError::IndexOutOfBounds`
///   When some `indices[k] >= target_len`.
///
/// Panics
/// ------
/// - Never panics; all invalid usage is reported via [`FillError`].
///
/// Notes
/// -----
/// - Duplicate indices are permitted; the last pair wins. Callers that need
///   uniqueness enforce it upstream (EMSRb-MR passes strictly increasing
///   indices by construction).
///
/// Examples
/// --------
/// ```rust
/// use rust_revman::helpers::scatter_fill;
///
/// let dense = scatter_fill(3, &[0, 2], &[0.0, 5.0], 0.0).unwrap();
/// assert_eq!(dense.to_vec(), vec![0.0, 0.0, 5.0]);
/// ```
pub fn scatter_fill(
    target_len: usize, indices: &[usize], values: &[f64], fill: f64,
) -> FillResult<Array1<f64>> {
    if indices.len() != values.len() {
        return Err(FillError::LengthMismatch { indices: indices.len(), values: values.len() });
    }

    let mut dense = Array1::from_elem(target_len, fill);
    for (&index, &value) in indices.iter().zip(values) {
        if index >= target_len {
            return Err(FillError::IndexOutOfBounds { index, target_len });
        }
        dense[index] = value;
    }
    Ok(dense)
}
