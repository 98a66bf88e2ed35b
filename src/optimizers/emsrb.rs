//! optimizers::emsrb — EMSRb protection levels for nested fare classes.
//!
//! Purpose
//! -------
//! Implement the Expected Marginal Seat Revenue heuristic, version b, for a
//! single capacity-constrained resource: given per-class fares and demand
//! forecasts (optionally with Gaussian demand uncertainty), compute the
//! protection level at every class boundary. Notation follows "The Theory
//! and Practice of Revenue Management" by Talluri & van Ryzin, p. 48.
//!
//! Key behaviors
//! -------------
//! - Deterministic branch (no sigmas, or all sigmas zero): the protection
//!   level at boundary j is the cumulative demand of classes 0..j.
//! - Gaussian branch: at boundary j, pool the classes above into one
//!   Gaussian with mean Σd, standard deviation sqrt(Σσ²), and
//!   demand-weighted average fare p̄ⱼ; the level is
//!   Σd + z·sqrt(Σσ²) with z the standard-normal quantile of the critical
//!   ratio 1 − fares[j]/p̄ⱼ.
//! - Both branches advance running accumulators once per boundary, so the
//!   whole vector is produced in a single O(N) pass.
//! - Degenerate boundaries resolve locally to 0: zero cumulative demand or
//!   zero cumulative revenue above a boundary, negative levels (low demand,
//!   high variance), and tied fares (quantile −∞) all clamp to 0 rather
//!   than surfacing an error or a NaN.
//! - Index 0 is always exactly 0 (the top class is never protected against
//!   itself); all levels are rounded to the nearest integer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs satisfy the shape/sort contract enforced by
//!   `optimizers::validation`: equal lengths, finite non-negative entries,
//!   fares non-increasing. Validation runs on entry; nothing afterwards can
//!   produce a NaN in the output.
//! - With sorted fares and non-negative demands the critical ratio lies in
//!   [0, 1], so the quantile lookup is always well defined (±∞ at the
//!   endpoints flows through the clamping rules).
//! - Inputs are borrowed immutably; each call is independent and
//!   side-effect free.
//!
//! Downstream usage
//! ----------------
//! - Called directly by revenue-management pipelines with an
//!   undifferentiated, efficient fare structure, and by
//!   `optimizers::emsrb_mr` on the efficient subset produced by the fare
//!   transformation.
//!
//! Testing notes
//! -------------
//! - Unit tests pin down the deterministic cumulative-demand rule, the
//!   Gaussian closed form at hand-checkable quantiles, equivalence of
//!   absent and all-zero sigmas, the single-class case, zero-demand-prefix
//!   and negative-level clamping, tied fares, and validation failures.

use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::optimizers::errors::OptimizerResult;
use crate::optimizers::validation::validate_class_vectors;

/// Compute EMSRb protection levels for one nested fare structure.
///
/// Parameters
/// ----------
/// - `fares`: `&[f64]`
///   Per-class fares in decreasing (non-increasing) order, finite and
///   non-negative, length N ≥ 1. Index 0 is the highest fare.
/// - `demands`: `&[f64]`
///   Per-class mean demand forecasts, finite and non-negative, length N.
/// - `sigmas`: `Option<&[f64]>`
///   Optional per-class demand standard deviations, length N. `None` or an
///   all-zero vector selects the deterministic branch.
///
/// Returns
/// -------
/// `OptimizerResult<Array1<f64>>`
///   Length-N protection levels, rounded to the nearest integer, with
///   index 0 exactly 0. Element j (j ≥ 1) is the number of seats protected
///   for classes 0..j against class j.
///
/// Errors
/// ------
/// - `OptimizerError` variants from
///   [`validate_class_vectors`](crate::optimizers::validation::validate_class_vectors)
///   on shape, range, or ordering violations. Degenerate-but-valid numeric
///   cases (zero demand, zero variance) are never errors.
///
/// Panics
/// ------
/// - Never panics on validated input; all user-facing invalid inputs are
///   surfaced as error values.
///
/// Notes
/// -----
/// - A zero fare directly below a revenue-positive prefix drives the
///   critical ratio to 1 and the level to +∞ when the pooled variance is
///   positive; this is the closed form's limit (no finite number of seats
///   should be released to a free class) and is returned as-is.
///
/// Examples
/// --------
/// ```rust
/// use rust_revman::optimizers::emsrb;
///
/// let levels = emsrb(&[100.0, 75.0, 50.0], &[10.0, 20.0, 30.0], None).unwrap();
/// assert_eq!(levels.to_vec(), vec![0.0, 10.0, 30.0]);
/// ```
pub fn emsrb(
    fares: &[f64], demands: &[f64], sigmas: Option<&[f64]>,
) -> OptimizerResult<Array1<f64>> {
    validate_class_vectors(fares, demands, sigmas)?;

    let levels = match sigmas {
        Some(sigmas) if sigmas.iter().any(|&sigma| sigma != 0.0) => {
            gaussian_levels(fares, demands, sigmas)
        }
        _ => deterministic_levels(demands),
    };
    Ok(Array1::from(levels))
}

//
// ---------- Private helpers ----------
//

/// Protection levels under deterministic demand.
///
/// The level at boundary j is the cumulative demand of classes 0..j; the
/// running sum advances once per boundary.
fn deterministic_levels(demands: &[f64]) -> Vec<f64> {
    let mut levels = Vec::with_capacity(demands.len());
    levels.push(0.0);

    let mut cum_demand = 0.0;
    for &demand in &demands[..demands.len() - 1] {
        cum_demand += demand;
        levels.push(cum_demand.round());
    }
    levels
}

/// Protection levels under pooled Gaussian demand.
///
/// Per boundary j: mean Σd, pooled variance Σσ², demand-weighted average
/// fare p̄ⱼ = Σ(d·f)/Σd over classes 0..j, and level
/// Σd + z·sqrt(Σσ²) with z the standard-normal quantile of
/// 1 − fares[j]/p̄ⱼ. Boundaries with zero cumulative demand or revenue have
/// no meaningful weighted fare and resolve to 0 through [`clean_level`].
fn gaussian_levels(fares: &[f64], demands: &[f64], sigmas: &[f64]) -> Vec<f64> {
    let std_normal = Normal::new(0.0, 1.0).expect("unit normal");

    let mut levels = Vec::with_capacity(fares.len());
    levels.push(0.0);

    let mut cum_demand = 0.0;
    let mut cum_revenue = 0.0;
    let mut cum_variance = 0.0;
    for boundary in 1..fares.len() {
        cum_demand += demands[boundary - 1];
        cum_revenue += demands[boundary - 1] * fares[boundary - 1];
        cum_variance += sigmas[boundary - 1].powi(2);

        let level = if cum_demand > 0.0 && cum_revenue > 0.0 {
            let mean_fare = cum_revenue / cum_demand;
            // sorted fares keep the ratio inside [0, 1]
            let critical_ratio = 1.0 - fares[boundary] / mean_fare;
            cum_demand + std_normal.inverse_cdf(critical_ratio) * cum_variance.sqrt()
        } else {
            f64::NAN
        };

        levels.push(clean_level(level));
    }
    levels
}

/// Clamp a raw boundary level to the output contract.
///
/// Negative levels (low demand, high variance) and NaN levels (degenerate
/// weighted fare) become 0; everything else is rounded to the nearest
/// integer.
#[inline]
fn clean_level(level: f64) -> f64 {
    if level.is_nan() || level < 0.0 { 0.0 } else { level.round() }
}
