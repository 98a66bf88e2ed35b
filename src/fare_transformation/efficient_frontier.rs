//! fare_transformation::efficient_frontier — marginal-revenue fare transformation.
//!
//! Purpose
//! -------
//! Implement the fare transformation of Fiig et al. (2010, "Optimization of
//! Mixed Fare Structures: Theory and Applications") for fully
//! undifferentiated fare structures. The transformation converts a nested
//! fare structure into adjusted (marginal) fares and demands and flags the
//! classes that should never be protected against as inefficient, so that a
//! standard nested protection-level algorithm can run on the remainder.
//!
//! Key behaviors
//! -------------
//! - Form, per strategy i (= open classes 0..=i), the cumulative demand
//!   `Q_i` (clipped at the capacity bound when one is given) and the total
//!   revenue `TR_i = fares[i] · Q_i` under the lowest-open-fare purchase
//!   model.
//! - Scan the `(Q, TR)` points once with a vertex stack to obtain the
//!   concave efficient frontier anchored at the origin; a retained strategy
//!   is popped only when a later strategy's marginal revenue *strictly*
//!   exceeds its own, so ties survive.
//! - Emit the frontier-segment slope `ΔTR/ΔQ` as each efficient strategy's
//!   adjusted fare and `ΔQ` as its adjusted demand; everything off the
//!   frontier is [`AdjustedFare::Inefficient`] with adjusted demand 0.
//! - Drop frontier strategies whose marginal revenue is not strictly
//!   positive: a class that cannot add revenue is never protected against,
//!   and the surviving adjusted fares stay strictly positive and
//!   non-increasing, which the EMSRb preconditions require.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fares are finite, non-negative, and sorted in decreasing
//!   (non-increasing) order; demands are finite and non-negative; the
//!   optional capacity bound is finite and non-negative. All of this is
//!   validated on entry.
//! - Along the frontier, `Q` strictly increases and segment slopes are
//!   non-increasing; both follow from the scan itself and are relied on by
//!   the adjusted-fare emission step.
//! - Strategies that add no cumulative demand (zero demand, or `Q` already
//!   clipped at the capacity bound) are inefficient: there is no quantity
//!   increment to protect.
//!
//! Conventions
//! -----------
//! - Index 0 is the highest fare class; outputs are aligned index-for-index
//!   with the inputs.
//! - Errors use [`TransformError`] via the [`TransformResult`] alias; the
//!   function never panics on user-facing invalid input.
//!
//! Downstream usage
//! ----------------
//! - `optimizers::emsrb_mr` consumes the outputs, gathers the efficient
//!   subset, and runs the EMSRb recursion on it.
//! - The function is public and independently callable for fare-structure
//!   analysis outside the optimizers.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the all-efficient concave case, removal of a
//!   dominated middle class, tied fares, capacity clipping, zero-demand
//!   classes, the single-class case, and every validation branch.

use crate::fare_transformation::adjusted::AdjustedFare;
use crate::fare_transformation::errors::{TransformError, TransformResult};

/// One retained strategy during the frontier scan.
struct Vertex {
    index: usize,
    q: f64,
    tr: f64,
}

/// Run the marginal-revenue fare transformation on one fare structure.
///
/// Parameters
/// ----------
/// - `fares`: `&[f64]`
///   Per-class fares in decreasing (non-increasing) order, finite and
///   non-negative, length N ≥ 1.
/// - `demands`: `&[f64]`
///   Per-class demand forecasts, finite and non-negative, length N.
/// - `cap`: `Option<f64>`
///   Optional capacity bound. When present, cumulative demand is clipped at
///   this value before revenue is computed; strategies beyond the clip add
///   no quantity and become inefficient.
///
/// Returns
/// -------
/// `TransformResult<(Vec<AdjustedFare>, Vec<f64>)>`
///   - Adjusted fares, length N: `Efficient(marginal fare)` for classes on
///     the efficient frontier, `Inefficient` otherwise. Efficient entries
///     are strictly positive and non-increasing along increasing index; the
///     first efficient class's adjusted fare equals its own fare.
///   - Adjusted demand, length N: the frontier demand increment `ΔQ` for
///     efficient classes, `0.0` otherwise.
///
/// Errors
/// ------
/// - `TransformError::EmptyInput`, `LengthMismatch`
///   Shape violations.
/// - `TransformError::InvalidFare`, `InvalidDemand`, `InvalidCap`
///   Non-finite or negative entries.
/// - `TransformError::UnsortedFares`
///   A fare exceeding its predecessor.
///
/// Panics
/// ------
/// - Never panics; all invalid inputs are surfaced as [`TransformError`].
///
/// Examples
/// --------
/// ```rust
/// use rust_revman::fare_transformation::{AdjustedFare, fare_transformation};
///
/// let fares = [100.0, 75.0, 50.0];
/// let demands = [10.0, 20.0, 30.0];
///
/// let (adjusted_fares, adjusted_demand) =
///     fare_transformation(&fares, &demands, None).unwrap();
///
/// assert_eq!(adjusted_fares[0], AdjustedFare::Efficient(100.0));
/// assert_eq!(adjusted_fares[1], AdjustedFare::Efficient(62.5));
/// assert_eq!(adjusted_demand, vec![10.0, 20.0, 30.0]);
/// ```
pub fn fare_transformation(
    fares: &[f64], demands: &[f64], cap: Option<f64>,
) -> TransformResult<(Vec<AdjustedFare>, Vec<f64>)> {
    validate_inputs(fares, demands, cap)?;

    let frontier = efficient_frontier(fares, demands, cap);

    let mut adjusted_fares = vec![AdjustedFare::Inefficient; fares.len()];
    let mut adjusted_demand = vec![0.0; fares.len()];

    let mut prev_q = 0.0;
    let mut prev_tr = 0.0;
    for vertex in &frontier {
        let marginal_fare = (vertex.tr - prev_tr) / (vertex.q - prev_q);
        // slopes are non-increasing along the frontier; nothing past the
        // first non-positive one can carry revenue
        if marginal_fare <= 0.0 {
            break;
        }
        adjusted_fares[vertex.index] = AdjustedFare::Efficient(marginal_fare);
        adjusted_demand[vertex.index] = vertex.q - prev_q;
        prev_q = vertex.q;
        prev_tr = vertex.tr;
    }

    Ok((adjusted_fares, adjusted_demand))
}

/// Scan the `(Q, TR)` strategy points into the concave frontier.
///
/// Parameters
/// ----------
/// - `fares`, `demands`: validated class vectors.
/// - `cap`: optional capacity bound clipping cumulative demand.
///
/// Returns
/// -------
/// `Vec<Vertex>`
///   Frontier vertices in increasing `q`, anchored at a virtual origin
///   `(0, 0)`; segment slopes between consecutive vertices (and from the
///   origin to the first) are non-increasing.
///
/// Notes
/// -----
/// - A candidate whose `q` does not exceed the current frontier end is
///   skipped outright: with non-increasing fares its revenue cannot exceed
///   the frontier end's either.
/// - Pops use a strict comparison, so collinear vertices (tied marginal
///   revenue) are retained.
fn efficient_frontier(fares: &[f64], demands: &[f64], cap: Option<f64>) -> Vec<Vertex> {
    let mut frontier: Vec<Vertex> = Vec::new();

    let mut cum_demand = 0.0;
    for (index, (&fare, &demand)) in fares.iter().zip(demands).enumerate() {
        cum_demand += demand;
        let q = cap.map_or(cum_demand, |bound| cum_demand.min(bound));
        let tr = fare * q;

        if q <= frontier.last().map_or(0.0, |vertex| vertex.q) {
            continue;
        }

        while let Some(last) = frontier.last() {
            let (last_q, last_tr) = (last.q, last.tr);
            let (prev_q, prev_tr) = if frontier.len() >= 2 {
                let previous = &frontier[frontier.len() - 2];
                (previous.q, previous.tr)
            } else {
                (0.0, 0.0)
            };
            let slope_in = (last_tr - prev_tr) / (last_q - prev_q);
            let slope_out = (tr - last_tr) / (q - last_q);
            if slope_out > slope_in {
                frontier.pop();
            } else {
                break;
            }
        }

        frontier.push(Vertex { index, q, tr });
    }

    frontier
}

/// Validate basic shape and range constraints for the transformation.
///
/// Errors
/// ------
/// - `TransformError::EmptyInput` when `fares` is empty.
/// - `TransformError::LengthMismatch` when the vectors disagree in length.
/// - `TransformError::InvalidFare` / `InvalidDemand` on non-finite or
///   negative entries.
/// - `TransformError::UnsortedFares` when a fare exceeds its predecessor.
/// - `TransformError::InvalidCap` on a non-finite or negative bound.
fn validate_inputs(fares: &[f64], demands: &[f64], cap: Option<f64>) -> TransformResult<()> {
    if fares.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    if fares.len() != demands.len() {
        return Err(TransformError::LengthMismatch {
            fares: fares.len(),
            demands: demands.len(),
        });
    }
    for (index, &fare) in fares.iter().enumerate() {
        if !fare.is_finite() || fare < 0.0 {
            return Err(TransformError::InvalidFare(fare));
        }
        if index > 0 && fare > fares[index - 1] {
            return Err(TransformError::UnsortedFares { index });
        }
    }
    for &demand in demands {
        if !demand.is_finite() || demand < 0.0 {
            return Err(TransformError::InvalidDemand(demand));
        }
    }
    if let Some(bound) = cap {
        if !bound.is_finite() || bound < 0.0 {
            return Err(TransformError::InvalidCap(bound));
        }
    }
    Ok(())
}
