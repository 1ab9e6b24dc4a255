//! # Lemma
//!
//! Constrained symbolic expressions: named variables carrying inclusive
//! numeric domains, composed into operator trees that propagate and
//! validate those domains.
//!
//! Building a tree guarantees two things: narrowing a symbol's domain
//! never widens it, and a tree that binds one symbol name to two
//! different domains does not construct at all.
//!
//! ## Quick Start
//!
//! ```
//! use lemma::prelude::*;
//!
//! let x = Symbol::new("x").refine(Constraint::NEGATIVE);
//! let y = Symbol::new("y").refine(Constraint::NEGATIVE);
//!
//! let sum = x + y;
//! assert_eq!(sum.constraint(), Constraint::NEGATIVE);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lemma_core as core;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lemma_core::{
        compose, plus, promote, try_compose, Constraint, ConstraintError, Domain, Expression,
        Identity, Operand, Operator, Plus, Scalar, Symbol, SymbolView,
    };
}
