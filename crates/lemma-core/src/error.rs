//! Contract-violation errors.
//!
//! Both kinds report programmer errors, not transient conditions. The
//! primary construction APIs ([`Symbol::refine`], [`compose`], the `+`
//! operators) treat them as fatal; the `try_` twins hand the same error
//! back for callers that verify ahead of the fatal path. Nothing retries.
//!
//! [`Symbol::refine`]: crate::symbol::Symbol::refine
//! [`compose`]: crate::expr::compose

use thiserror::Error;

use crate::constraint::Constraint;

/// Violations of the constraint contracts on symbols and expressions.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConstraintError {
    /// A replacement constraint widened the existing one.
    #[error("constraint `{requested}` does not refine `{existing}` on symbol `{name}`")]
    InvalidRefinement {
        /// Name of the symbol being refined.
        name: String,
        /// The constraint already attached to the symbol.
        existing: Constraint,
        /// The rejected replacement.
        requested: Constraint,
    },

    /// One name bound to two different constraints within a single tree.
    #[error("symbol `{name}` occurs with conflicting constraints `{first}` and `{second}`")]
    InconsistentConstraints {
        /// The doubly-bound name.
        name: String,
        /// Constraint of the earlier occurrence, in visit order.
        first: Constraint,
        /// Constraint of the later occurrence.
        second: Constraint,
    },
}
