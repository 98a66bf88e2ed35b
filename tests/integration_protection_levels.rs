//! Integration tests for the protection-level pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end EMSRb-MR flow: fare transformation, efficient
//!   class filtering, the EMSRb recursion on the gathered sub-structure,
//!   and zero-filled re-expansion onto the full class vector.
//! - Exercise realistic fare structures (three-class ladders, capacity
//!   bounds, demand uncertainty) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `optimizers::emsrb`:
//!   - Deterministic and Gaussian branches on multi-class structures.
//! - `optimizers::emsrb_mr`:
//!   - Degeneration to plain EMSRb when every class is efficient.
//!   - Exclusion of dominated classes and the all-inefficient outcome.
//! - `fare_transformation`:
//!   - Adjusted fares/demands feeding the optimizer, including under a
//!     capacity bound.
//! - Output contract shared by both optimizers: length preservation,
//!   non-negativity, exact zero at index 0.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of the building blocks (guards, frontier
//!   construction, scatter placement) — covered by unit tests.
//! - Python bindings — exercised by the packaging layer's own harness.
//! - Revenue optimality of the heuristics themselves — a property of the
//!   algorithms, not of this implementation.

use approx::assert_relative_eq;
use ndarray::Array1;
use rust_revman::{
    fare_transformation::{AdjustedFare, fare_transformation},
    optimizers::{emsrb, emsrb_mr},
};

/// Purpose
/// -------
/// Assert the output contract both optimizers share for every valid input:
/// the vector keeps the class count, carries an exact 0 for the top class,
/// and contains no negative level.
///
/// Parameters
/// ----------
/// - `levels`: Protection-level vector returned by an optimizer.
/// - `class_count`: Number of classes in the input structure.
fn assert_output_contract(levels: &Array1<f64>, class_count: usize) {
    assert_eq!(levels.len(), class_count, "output must preserve the class count");
    assert_eq!(levels[0], 0.0, "top class must never be protected against itself");
    for (index, &level) in levels.iter().enumerate() {
        assert!(level >= 0.0, "level at index {index} is negative: {level}");
    }
}

#[test]
// Purpose
// -------
// Run the deterministic pipeline end-to-end on a strictly concave fare
// ladder and confirm both optimizers agree on the cumulative-demand rule.
//
// Given
// -----
// - fares = [100, 75, 50], demands = [10, 20, 30], no sigmas. Every class
//   is efficient, so EMSRb-MR degenerates to EMSRb.
//
// Expect
// ------
// - Both optimizers return [0, 10, 30] and satisfy the output contract.
fn deterministic_pipeline_agrees_across_optimizers() {
    let fares = [100.0, 75.0, 50.0];
    let demands = [10.0, 20.0, 30.0];

    let plain = emsrb(&fares, &demands, None).expect("EMSRb should succeed");
    let transformed = emsrb_mr(&fares, &demands, None, None).expect("EMSRb-MR should succeed");

    assert_eq!(plain.to_vec(), vec![0.0, 10.0, 30.0]);
    assert_eq!(plain, transformed);
    assert_output_contract(&plain, fares.len());
    assert_output_contract(&transformed, fares.len());
}

#[test]
// Purpose
// -------
// Run the Gaussian pipeline end-to-end: transform the structure, feed the
// adjusted vectors to EMSRb by hand, and confirm EMSRb-MR matches that
// composition exactly while hitting hand-checked levels.
//
// Given
// -----
// - fares = [100, 80, 60], demands = [20, 30, 40], sigmas = [5, 8, 10].
//   The revenue curve is strictly concave (adjusted fares
//   [100, 66.67, 35]), so every class stays efficient. At boundary 1 the
//   critical ratio is 1/3 (z ≈ −0.4307, sigma 5, raw ≈ 17.85); at
//   boundary 2 it is 0.5625 (z ≈ 0.1573, pooled sigma ≈ 9.434,
//   raw ≈ 51.48).
//
// Expect
// ------
// - Adjusted demand equals the original demand; adjusted fares match the
//   frontier slopes.
// - EMSRb-MR equals EMSRb on the adjusted structure and returns
//   [0, 18, 51].
fn gaussian_pipeline_matches_manual_composition() {
    let fares = [100.0, 80.0, 60.0];
    let demands = [20.0, 30.0, 40.0];
    let sigmas = [5.0, 8.0, 10.0];

    let (adjusted_fares, adjusted_demand) =
        fare_transformation(&fares, &demands, None).expect("transformation should succeed");

    let gathered: Vec<f64> =
        adjusted_fares.iter().map(|adjusted| adjusted.fare().expect("all efficient")).collect();
    assert_relative_eq!(gathered[0], 100.0);
    assert_relative_eq!(gathered[1], 2000.0 / 30.0);
    assert_relative_eq!(gathered[2], 35.0);
    assert_eq!(adjusted_demand, demands.to_vec());

    let manual =
        emsrb(&gathered, &adjusted_demand, Some(&sigmas)).expect("EMSRb should succeed");
    let transformed =
        emsrb_mr(&fares, &demands, Some(&sigmas), None).expect("EMSRb-MR should succeed");

    assert_eq!(manual, transformed);
    assert_eq!(transformed.to_vec(), vec![0.0, 18.0, 51.0]);
    assert_output_contract(&transformed, fares.len());
}

#[test]
// Purpose
// -------
// Confirm that a dominated class is excluded end-to-end: its index is
// zero-filled while the frontier bridges to the class below it.
//
// Given
// -----
// - fares = [100, 60, 58], demands = [10, 1, 20]: opening class 1 drops
//   total revenue, so it is inefficient; the adjusted structure is
//   fares [100, 38] / demands [10, 21] at indices {0, 2}.
//
// Expect
// ------
// - The transformation marks exactly class 1 inefficient.
// - EMSRb-MR returns [0, 0, 10] (deterministic sub-levels re-expanded).
fn dominated_class_is_excluded_and_zero_filled() {
    let fares = [100.0, 60.0, 58.0];
    let demands = [10.0, 1.0, 20.0];

    let (adjusted_fares, _) =
        fare_transformation(&fares, &demands, None).expect("transformation should succeed");
    assert!(adjusted_fares[0].is_efficient());
    assert_eq!(adjusted_fares[1], AdjustedFare::Inefficient);
    assert!(adjusted_fares[2].is_efficient());

    let levels = emsrb_mr(&fares, &demands, None, None).expect("EMSRb-MR should succeed");
    assert_eq!(levels.to_vec(), vec![0.0, 0.0, 10.0]);
    assert_output_contract(&levels, fares.len());
}

#[test]
// Purpose
// -------
// Confirm the all-inefficient outcome end-to-end: when the capacity bound
// clips every strategy to nothing, EMSRb-MR returns zeros rather than an
// error.
//
// Given
// -----
// - A valid three-class structure with cap = 0, and the same structure
//   with all-zero demand and no cap.
//
// Expect
// ------
// - All-zero protection levels of the original length in both cases.
fn all_inefficient_structures_return_zeros() {
    let fares = [100.0, 75.0, 50.0];

    let clipped = emsrb_mr(&fares, &[10.0, 20.0, 30.0], None, Some(0.0))
        .expect("EMSRb-MR should succeed");
    assert_eq!(clipped.to_vec(), vec![0.0, 0.0, 0.0]);

    let unsold = emsrb_mr(&fares, &[0.0, 0.0, 0.0], None, None).expect("EMSRb-MR should succeed");
    assert_eq!(unsold.to_vec(), vec![0.0, 0.0, 0.0]);
}

#[test]
// Purpose
// -------
// Exercise a capacity bound that bites mid-ladder: strategies past the
// clip add no quantity, and the optimizer still honors the output
// contract on the surviving structure.
//
// Given
// -----
// - fares = [100, 80, 60], demands = [20, 30, 40], cap = 45. Cumulative
//   demand clips to [20, 45, 45]; strategy 2 adds nothing. The clipped
//   frontier keeps classes 0 and 1 (slopes 100 and 64) and drops class 2.
//
// Expect
// ------
// - Deterministic levels [0, 20, 0]: boundary 1 protects the 20 seats of
//   demand above it, and the excluded class 2 is zero-filled.
fn capacity_bound_clips_mid_ladder() {
    let fares = [100.0, 80.0, 60.0];
    let demands = [20.0, 30.0, 40.0];

    let (adjusted_fares, adjusted_demand) =
        fare_transformation(&fares, &demands, Some(45.0)).expect("transformation should succeed");
    assert!(adjusted_fares[0].is_efficient());
    assert!(adjusted_fares[1].is_efficient());
    assert_eq!(adjusted_fares[2], AdjustedFare::Inefficient);
    assert_eq!(adjusted_demand, vec![20.0, 25.0, 0.0]);

    let levels =
        emsrb_mr(&fares, &demands, None, Some(45.0)).expect("EMSRb-MR should succeed");
    assert_eq!(levels.to_vec(), vec![0.0, 20.0, 0.0]);
    assert_output_contract(&levels, fares.len());
}
