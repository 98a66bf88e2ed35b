//! optimizers::emsrb_mr — EMSRb on marginal-revenue-transformed structures.
//!
//! Purpose
//! -------
//! Generalize EMSRb to fare structures where restrictions make some classes
//! inefficient to protect against, following Fiig et al. (2010): transform
//! fares and demands into their marginal equivalents, drop the inefficient
//! classes, run the EMSRb recursion on the efficient subset, and re-expand
//! the result onto the full class vector.
//!
//! Key behaviors
//! -------------
//! - Default an absent sigma vector to all zeros, forcing deterministic
//!   demand handling downstream.
//! - Delegate the structure conversion to
//!   [`fare_transformation`](crate::fare_transformation::fare_transformation)
//!   and gather adjusted fares, adjusted demands, and sigmas at the
//!   efficient indices, preserving relative order.
//! - Run [`emsrb`](crate::optimizers::emsrb::emsrb) on the gathered
//!   sub-vectors and scatter the resulting levels back to their original
//!   indices with zero fill; inefficient classes read as "no protection".
//! - Return an all-zero vector when no class survives the transformation —
//!   a valid business outcome (nothing worth protecting), not an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - EMSRb assumes a fully nested, fully differentiated structure where
//!   every boundary is meaningful; excluding inefficient classes entirely
//!   (filter, compute, re-expand) preserves that assumption instead of
//!   parameterizing the recursion itself.
//! - Adjusted fares on the efficient subset are strictly positive and
//!   non-increasing by construction, so the inner EMSRb call's own
//!   validation is satisfied whenever this function's is.
//! - Inputs are borrowed immutably; each call is independent and
//!   side-effect free.
//!
//! Downstream usage
//! ----------------
//! - Called by revenue-management pipelines whose fare structures may embed
//!   restrictions; pipelines with an already-efficient structure can call
//!   `emsrb` directly.
//!
//! Testing notes
//! -------------
//! - Unit tests pin down the all-efficient degeneration to plain EMSRb,
//!   zero-filled placement around an excluded middle class, the
//!   empty-efficient-set outcome, sigma defaulting and gathering, and
//!   error propagation from validation and transformation.

use ndarray::Array1;

use crate::fare_transformation::fare_transformation;
use crate::helpers::scatter_fill;
use crate::optimizers::emsrb::emsrb;
use crate::optimizers::errors::OptimizerResult;
use crate::optimizers::validation::validate_class_vectors;

/// Compute EMSRb-MR protection levels for one nested fare structure.
///
/// Parameters
/// ----------
/// - `fares`: `&[f64]`
///   Per-class fares in decreasing (non-increasing) order, finite and
///   non-negative, length N ≥ 1.
/// - `demands`: `&[f64]`
///   Per-class mean demand forecasts, finite and non-negative, length N.
/// - `sigmas`: `Option<&[f64]>`
///   Optional per-class demand standard deviations, length N. `None`
///   defaults to all zeros (deterministic demand).
/// - `cap`: `Option<f64>`
///   Optional capacity bound forwarded to the fare transformation, which
///   clips cumulative demand at this value.
///
/// Returns
/// -------
/// `OptimizerResult<Array1<f64>>`
///   Length-N protection levels with index 0 exactly 0. Indices of classes
///   excluded as inefficient are zero-filled; efficient indices carry the
///   EMSRb levels computed on the adjusted sub-structure.
///
/// Errors
/// ------
/// - `OptimizerError` validation variants on shape, range, or ordering
///   violations of the class vectors.
/// - `OptimizerError::Transform` when the fare transformation rejects its
///   inputs (e.g. a negative capacity bound).
///
/// Panics
/// ------
/// - Never panics on user-facing invalid input.
///
/// Examples
/// --------
/// ```rust
/// use rust_revman::optimizers::emsrb_mr;
///
/// // Strictly concave revenue curve: every class is efficient.
/// let levels = emsrb_mr(&[100.0, 75.0, 50.0], &[10.0, 20.0, 30.0], None, None).unwrap();
/// assert_eq!(levels.to_vec(), vec![0.0, 10.0, 30.0]);
/// ```
pub fn emsrb_mr(
    fares: &[f64], demands: &[f64], sigmas: Option<&[f64]>, cap: Option<f64>,
) -> OptimizerResult<Array1<f64>> {
    validate_class_vectors(fares, demands, sigmas)?;
    let class_count = fares.len();

    let sigmas: Vec<f64> = match sigmas {
        Some(sigmas) => sigmas.to_vec(),
        None => vec![0.0; class_count],
    };

    let (adjusted_fares, adjusted_demand) = fare_transformation(fares, demands, cap)?;

    let mut efficient: Vec<usize> = Vec::new();
    let mut sub_fares: Vec<f64> = Vec::new();
    for (index, adjusted) in adjusted_fares.iter().enumerate() {
        if let Some(fare) = adjusted.fare() {
            efficient.push(index);
            sub_fares.push(fare);
        }
    }

    if efficient.is_empty() {
        return Ok(Array1::zeros(class_count));
    }

    let sub_demand: Vec<f64> = efficient.iter().map(|&index| adjusted_demand[index]).collect();
    let sub_sigmas: Vec<f64> = efficient.iter().map(|&index| sigmas[index]).collect();

    let sub_levels = emsrb(&sub_fares, &sub_demand, Some(&sub_sigmas))?;
    let levels = scatter_fill(class_count, &efficient, &sub_levels.to_vec(), 0.0)?;

    Ok(levels)
}
