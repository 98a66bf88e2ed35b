//! fare_transformation — marginal-revenue transformation of fare structures.
//!
//! Purpose
//! -------
//! Convert a nested, possibly restricted fare structure into the adjusted
//! (marginal) fares and demands that make standard nested protection-level
//! algorithms applicable, flagging the classes that should never be
//! protected against as inefficient. This subtree owns the transformation
//! itself; the optimizers consume its outputs.
//!
//! Key behaviors
//! -------------
//! - Expose the transformation via [`fare_transformation`], which maps a
//!   fare/demand structure (and optional capacity bound) onto the efficient
//!   frontier of the cumulative-demand / total-revenue curve.
//! - Represent per-class outcomes as the tagged [`AdjustedFare`] variant —
//!   `Efficient(marginal fare)` or `Inefficient` — so no control flow
//!   depends on float NaN sentinels.
//! - Report invalid inputs through [`TransformError`] and the
//!   [`TransformResult`] alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs follow the class-rank convention: index 0 is the highest fare,
//!   fares are non-increasing, and all vectors are aligned index-for-index.
//! - Adjusted fares at efficient indices are strictly positive and
//!   non-increasing; the first efficient class's adjusted fare equals its
//!   own fare.
//! - All functions here are pure and synchronous; nothing caller-owned is
//!   mutated and no state survives a call.
//!
//! Downstream usage
//! ----------------
//! - `optimizers::emsrb_mr` calls [`fare_transformation`], filters to
//!   efficient indices, and runs the EMSRb recursion on the gathered
//!   sub-vectors.
//!
//!   ```rust
//!   use rust_revman::fare_transformation::fare_transformation;
//!
//!   let (adjusted_fares, adjusted_demand) =
//!       fare_transformation(&[100.0, 75.0, 50.0], &[10.0, 20.0, 30.0], None)?;
//!   let efficient: Vec<usize> = adjusted_fares
//!       .iter()
//!       .enumerate()
//!       .filter(|(_, fare)| fare.is_efficient())
//!       .map(|(index, _)| index)
//!       .collect();
//!   # assert_eq!(efficient.len(), 3);
//!   # let _ = adjusted_demand;
//!   # Ok::<(), rust_revman::fare_transformation::TransformError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Frontier semantics, capacity clipping, and validation are unit-tested
//!   in `efficient_frontier`; accessor behavior in `adjusted`; Display
//!   formatting in `errors`. The crate-level integration tests exercise the
//!   composition with the optimizers.

pub mod adjusted;
pub mod efficient_frontier;
pub mod errors;

pub use self::adjusted::AdjustedFare;
pub use self::efficient_frontier::fare_transformation;
pub use self::errors::{TransformError, TransformResult};

/// Everyday imports for working with the fare transformation.
pub mod prelude {
    pub use super::adjusted::AdjustedFare;
    pub use super::efficient_frontier::fare_transformation;
    pub use super::errors::{TransformError, TransformResult};
}
