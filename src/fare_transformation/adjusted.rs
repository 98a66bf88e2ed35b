//! fare_transformation::adjusted — tagged adjusted-fare values.
//!
//! Purpose
//! -------
//! Represent the per-class outcome of the marginal-revenue transformation as
//! an explicit tagged variant instead of a float NaN sentinel. Downstream
//! code filters classes by matching on the variant, so no control flow ever
//! depends on NaN comparison semantics.
//!
//! Conventions
//! -----------
//! - `Efficient(fare)` carries the adjusted (marginal) fare of a class that
//!   sits on the efficient frontier; the stored value is strictly positive
//!   by construction in `efficient_frontier`.
//! - `Inefficient` marks a class the transformation excluded; such a class
//!   receives no protection level of its own.
//!
//! Testing notes
//! -------------
//! - Accessor behavior is pinned down by unit tests below; frontier
//!   semantics are tested where the values are produced.

/// AdjustedFare — adjusted fare of one fare class after transformation.
///
/// Purpose
/// -------
/// Carry either the marginal fare of an efficient class or the explicit
/// marker that the class was excluded as inefficient.
///
/// Invariants
/// ----------
/// - Values produced by
///   [`fare_transformation`](crate::fare_transformation::fare_transformation)
///   hold a finite, strictly positive fare in every `Efficient` entry.
///
/// Notes
/// -----
/// - `Copy` and small by design; vectors of these are created and discarded
///   within a single optimizer call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustedFare {
    Efficient(f64),
    Inefficient,
}

impl AdjustedFare {
    /// Whether this class survived the transformation.
    pub fn is_efficient(&self) -> bool {
        matches!(self, AdjustedFare::Efficient(_))
    }

    /// The adjusted fare, or `None` for an inefficient class.
    pub fn fare(&self) -> Option<f64> {
        match self {
            AdjustedFare::Efficient(fare) => Some(*fare),
            AdjustedFare::Inefficient => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the accessor surface of `AdjustedFare`. Frontier
    // construction semantics live in `efficient_frontier`'s tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that both variants report their efficiency status and fare
    // payload consistently.
    //
    // Given
    // -----
    // - An `Efficient(62.5)` and an `Inefficient` value.
    //
    // Expect
    // ------
    // - `is_efficient` / `fare` agree with the variant.
    fn adjusted_fare_accessors_match_variant() {
        let efficient = AdjustedFare::Efficient(62.5);
        assert!(efficient.is_efficient());
        assert_eq!(efficient.fare(), Some(62.5));

        let inefficient = AdjustedFare::Inefficient;
        assert!(!inefficient.is_efficient());
        assert_eq!(inefficient.fare(), None);
    }
}
