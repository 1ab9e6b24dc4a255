//! The identity operator.

use crate::constraint::{Constraint, Scalar};
use crate::op::Operator;

/// One-operand identity: returns its operand, value and constraint alike.
///
/// Identity is what [`promote`](crate::expr::promote) wraps a bare symbol
/// in, so every node of a tree is an expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Operator for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn arity(&self) -> usize {
        1
    }

    fn combine(&self, operands: &[Constraint]) -> Constraint {
        debug_assert_eq!(operands.len(), 1);
        operands[0]
    }

    fn apply(&self, operands: &[Scalar]) -> Scalar {
        debug_assert_eq!(operands.len(), 1);
        operands[0]
    }
}
