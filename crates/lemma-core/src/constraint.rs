//! Inclusive-range constraints over the reals.
//!
//! A constraint bounds the values a symbol or expression may take. It has
//! two representations: [`Constraint::Domain`] names one of the canonical
//! domains whose bounds are fixed ahead of use and carries no bound
//! payload of its own, while [`Constraint::Interval`] stores bounds chosen
//! at run time. The two compare equal whenever their bounds do.

use std::any;
use std::fmt;

/// The scalar type of the constraint domain.
///
/// IEEE doubles stand in for the reals. This bounds the fidelity of the
/// constraint system, not the evaluation type of an expression.
pub type Scalar = f64;

/// Smallest positive subnormal, used to exclude zero from the signed
/// domains.
const SMALLEST_POSITIVE: Scalar = Scalar::from_bits(1);

/// Canonical domains whose bounds are fixed ahead of use.
///
/// A `Domain` carries no per-instance data; its bounds are functions of
/// the discriminant, so every use of a given domain shares one logical
/// instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// All reals: `[-inf, +inf]`.
    Real,
    /// Strictly negative reals: `[-inf, just below zero]`.
    Negative,
    /// Strictly positive reals: `[just above zero, +inf]`.
    Positive,
}

impl Domain {
    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(self) -> Scalar {
        match self {
            Domain::Real | Domain::Negative => Scalar::NEG_INFINITY,
            Domain::Positive => SMALLEST_POSITIVE,
        }
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(self) -> Scalar {
        match self {
            Domain::Real | Domain::Positive => Scalar::INFINITY,
            Domain::Negative => -SMALLEST_POSITIVE,
        }
    }
}

/// An inclusive range of reals attached to a symbol or expression.
///
/// Invariant: `min() <= max()`, enforced at construction.
///
/// Equality is exact numeric equality of both bounds, across
/// representations; it is not a subset or overlap test.
#[derive(Clone, Copy, Debug)]
pub enum Constraint {
    /// A canonical named domain.
    Domain(Domain),
    /// Bounds supplied at run time.
    ///
    /// Invariant: `min <= max`. Build through [`Constraint::interval`],
    /// which enforces it.
    Interval {
        /// Inclusive lower bound.
        min: Scalar,
        /// Inclusive upper bound.
        max: Scalar,
    },
}

impl Constraint {
    /// All reals.
    pub const REAL: Constraint = Constraint::Domain(Domain::Real);
    /// Strictly negative reals.
    pub const NEGATIVE: Constraint = Constraint::Domain(Domain::Negative);
    /// Strictly positive reals.
    pub const POSITIVE: Constraint = Constraint::Domain(Domain::Positive);

    /// Builds a constraint from runtime bounds.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` (which includes either bound being NaN).
    /// Out-of-order bounds are a defect in the caller, not input to
    /// sanitize.
    #[must_use]
    pub fn interval(min: Scalar, max: Scalar) -> Self {
        assert!(min <= max, "constraint bounds out of order: [{min}, {max}]");
        Constraint::Interval { min, max }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> Scalar {
        match self {
            Constraint::Domain(domain) => domain.min(),
            Constraint::Interval { min, .. } => *min,
        }
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> Scalar {
        match self {
            Constraint::Domain(domain) => domain.max(),
            Constraint::Interval { max, .. } => *max,
        }
    }

    /// True exactly when this constraint admits every real, i.e. equals
    /// [`Constraint::REAL`] bound for bound.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::REAL
    }

    /// True if `self` admits no value outside `other`.
    #[must_use]
    pub fn refines(&self, other: &Constraint) -> bool {
        self.min() >= other.min() && self.max() <= other.max()
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.min() == other.min() && self.max() == other.max()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}, {}]",
            any::type_name::<Scalar>(),
            self.min(),
            self.max()
        )
    }
}
