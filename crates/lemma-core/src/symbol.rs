//! Named symbolic variables.
//!
//! A [`Symbol`] pairs a name with a [`Constraint`] on the values it may
//! take. Symbols are immutable: [`Symbol::refine`] consumes the receiver
//! and returns a replacement carrying the narrower constraint.

use std::borrow::Cow;
use std::fmt;

use crate::constraint::Constraint;
use crate::error::ConstraintError;

/// A named variable with an attached domain constraint.
///
/// Two symbols are equal when their names and constraint bounds are.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    name: Cow<'static, str>,
    constraint: Constraint,
}

impl Symbol {
    /// Creates a symbol constrained to all reals.
    ///
    /// Takes either a `&'static str` (borrowed, no allocation) or an
    /// owned `String` for names only known at run time; the two behave
    /// identically.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            constraint: Constraint::REAL,
        }
    }

    /// The symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol's constraint.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// True exactly when the constraint equals [`Constraint::REAL`].
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.constraint.is_unconstrained()
    }

    /// Replaces the constraint with one that refines it.
    ///
    /// # Panics
    ///
    /// Panics if `constraint` widens the current one on either side.
    /// Widening a symbol's domain is a defect in the caller, never a
    /// condition to handle; use [`Symbol::try_refine`] to observe the
    /// violation without aborting.
    #[must_use]
    pub fn refine(self, constraint: Constraint) -> Self {
        match self.try_refine(constraint) {
            Ok(symbol) => symbol,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of [`Symbol::refine`].
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRefinement`] if `constraint`
    /// does not refine the current one.
    pub fn try_refine(self, constraint: Constraint) -> Result<Self, ConstraintError> {
        if !constraint.refines(&self.constraint) {
            return Err(ConstraintError::InvalidRefinement {
                name: self.name.into_owned(),
                existing: self.constraint,
                requested: constraint,
            });
        }
        Ok(Self {
            name: self.name,
            constraint,
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbol({}) [{}]", self.name, self.constraint)
    }
}
