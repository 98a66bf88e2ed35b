//! optimizers::validation — shared input guards for the optimizers.
//!
//! Purpose
//! -------
//! Centralize the precondition checks for the protection-level entry points
//! so that shape, range, and ordering constraints are enforced once, in a
//! consistent way, before any numeric work starts.
//!
//! Key behaviors
//! -------------
//! - Enforce non-empty, length-aligned class vectors with finite,
//!   non-negative entries and fares sorted in decreasing (non-increasing)
//!   order.
//! - Map violations into structured [`OptimizerError`] values; never panic.
//!
//! Invariants & assumptions
//! ------------------------
//! - A successful return guarantees the shape/sort contract the algorithms
//!   rely on; degenerate-but-valid inputs (zero demand, zero sigmas) pass
//!   validation and are handled by the algorithms' local clamping rules.
//! - Tied fares are allowed: the marginal-revenue transformation can
//!   legitimately produce equal adjusted fares for adjacent efficient
//!   classes, and the EMSRb closed form resolves the tied boundary to 0
//!   through its quantile-at-zero path.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no allocation and
//!   no numeric work beyond the checks themselves.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_class_vectors`] at the top of `emsrb` / `emsrb_mr`;
//!   treat `Ok(())` as the shape guarantee for everything downstream.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and a success path including the
//!   tied-fare and zero-demand cases.

use crate::optimizers::errors::{OptimizerError, OptimizerResult};

/// Validate the class vectors shared by both optimizer entry points.
///
/// Parameters
/// ----------
/// - `fares`: `&[f64]`
///   Per-class fares; non-empty, finite, non-negative, non-increasing.
/// - `demands`: `&[f64]`
///   Per-class demand forecasts; same length as `fares`, finite,
///   non-negative.
/// - `sigmas`: `Option<&[f64]>`
///   Optional demand standard deviations; when present, same length as
///   `fares`, finite, non-negative.
///
/// Returns
/// -------
/// `OptimizerResult<()>`
///   `Ok(())` when all constraints hold, `Err(OptimizerError)` otherwise.
///
/// Errors
/// ------
/// - `OptimizerError::EmptyInput` when `fares` is empty.
/// - `OptimizerError::LengthMismatch` / `SigmaLengthMismatch` on
///   misaligned vector lengths.
/// - `OptimizerError::InvalidFare` / `InvalidDemand` / `InvalidSigma` on
///   non-finite or negative entries.
/// - `OptimizerError::UnsortedFares` when a fare exceeds its predecessor.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via [`OptimizerError`].
pub fn validate_class_vectors(
    fares: &[f64], demands: &[f64], sigmas: Option<&[f64]>,
) -> OptimizerResult<()> {
    if fares.is_empty() {
        return Err(OptimizerError::EmptyInput);
    }
    if fares.len() != demands.len() {
        return Err(OptimizerError::LengthMismatch {
            fares: fares.len(),
            demands: demands.len(),
        });
    }
    if let Some(sigmas) = sigmas {
        if sigmas.len() != fares.len() {
            return Err(OptimizerError::SigmaLengthMismatch {
                expected: fares.len(),
                actual: sigmas.len(),
            });
        }
        for &sigma in sigmas {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(OptimizerError::InvalidSigma(sigma));
            }
        }
    }
    for (index, &fare) in fares.iter().enumerate() {
        if !fare.is_finite() || fare < 0.0 {
            return Err(OptimizerError::InvalidFare(fare));
        }
        if index > 0 && fare > fares[index - 1] {
            return Err(OptimizerError::UnsortedFares { index });
        }
    }
    for &demand in demands {
        if !demand.is_finite() || demand < 0.0 {
            return Err(OptimizerError::InvalidDemand(demand));
        }
    }
    Ok(())
}
