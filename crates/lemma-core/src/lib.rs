//! # lemma-core
//!
//! Core engine of the Lemma constrained-symbol library.
//!
//! This crate provides:
//! - An inclusive-range constraint model over the reals, with a
//!   build-time-known and a type-erased runtime representation
//! - Named symbols carrying a constraint, refined only by narrowing
//! - Stateless operators that propagate constraints through composition
//! - Expression trees validated for cross-tree constraint consistency
//!
//! ## Design Principles
//!
//! - **Immutable values**: refinement and composition always build new
//!   values; nothing mutates after construction
//! - **Flyweight operators and domains**: stateless kinds shared by
//!   reference, interchangeable across the process
//! - **Fatal contract checks**: a widening refinement or an inconsistent
//!   tree is a defect in the caller, not a recoverable condition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constraint;
pub mod error;
pub mod expr;
pub mod op;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use constraint::{Constraint, Domain, Scalar};
pub use error::ConstraintError;
pub use expr::{compose, promote, try_compose, Expression, Operand, SymbolView};
pub use op::{plus, Identity, Operator, Plus};
pub use symbol::Symbol;
