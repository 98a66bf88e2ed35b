//! optimizers — protection-level algorithms for nested fare classes.
//!
//! Purpose
//! -------
//! Collect the booking-limit protection-level algorithms for a single
//! capacity-constrained resource together with their shared validation and
//! error handling: the EMSRb heuristic for undifferentiated fare structures
//! and its marginal-revenue generalization EMSRb-MR for structures with
//! inefficient classes.
//!
//! Key behaviors
//! -------------
//! - Expose [`emsrb`] — the EMSRb recursion with a deterministic branch
//!   (cumulative demand) and a Gaussian branch (closed-form standard-normal
//!   quantile over pooled class demand).
//! - Expose [`emsrb_mr`] — fare transformation, efficient-class filtering,
//!   EMSRb on the efficient subset, zero-filled re-expansion.
//! - Centralize input guards in [`validate_class_vectors`] and the error
//!   surface in [`OptimizerError`] / [`OptimizerResult`], including the
//!   conversions that wrap transformation and re-expansion failures.
//!
//! Invariants & assumptions
//! ------------------------
//! - Class vectors are index-aligned with rank 0 = highest fare and fares
//!   non-increasing; entry points validate this contract and return errors
//!   rather than panicking.
//! - Outputs are length-preserving, non-negative, rounded to integers, and
//!   carry an exact 0 at index 0 (the top class is never protected against
//!   itself).
//! - Degenerate numeric cases on validated input — zero demand, zero
//!   pooled variance, tied fares — clamp locally to 0 and are never
//!   surfaced as errors; an empty efficient set in EMSRb-MR yields zeros.
//! - Everything here is pure, synchronous, and free of shared state;
//!   callers may fan out across resources without coordination.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_revman::optimizers::{emsrb, emsrb_mr, OptimizerResult};
//!
//!   # fn run() -> OptimizerResult<()> {
//!   let levels = emsrb(&[100.0, 75.0, 50.0], &[10.0, 20.0, 30.0], None)?;
//!   let mr_levels = emsrb_mr(&[100.0, 75.0, 50.0], &[10.0, 20.0, 30.0], None, Some(80.0))?;
//!   # let _ = (levels, mr_levels);
//!   # Ok(())
//!   # }
//!   # run().unwrap();
//!   ```
//!
//! Testing notes
//! -------------
//! - Algorithm semantics are unit-tested in `emsrb` and `emsrb_mr`; the
//!   guards in `validation`; error formatting and wrapping in `errors`.
//!   End-to-end composition is exercised by the crate-level integration
//!   tests.

pub mod emsrb;
pub mod emsrb_mr;
pub mod errors;
pub mod validation;

pub use self::emsrb::emsrb;
pub use self::emsrb_mr::emsrb_mr;
pub use self::errors::{OptimizerError, OptimizerResult};
pub use self::validation::validate_class_vectors;

/// Everyday imports for working with the optimizers.
pub mod prelude {
    pub use super::emsrb::emsrb;
    pub use super::emsrb_mr::emsrb_mr;
    pub use super::errors::{OptimizerError, OptimizerResult};
}
