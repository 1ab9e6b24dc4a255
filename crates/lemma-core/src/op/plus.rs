//! The addition operator and its infix forms.

use std::ops::Add;

use crate::constraint::{Constraint, Scalar};
use crate::expr::{compose, Expression};
use crate::op::Operator;
use crate::symbol::Symbol;

/// Two-operand addition.
///
/// The aggregate constraint is the bounding union of the operand ranges,
/// `[min(min1, min2), max(max1, max2)]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plus;

impl Operator for Plus {
    fn name(&self) -> &'static str {
        "plus"
    }

    fn arity(&self) -> usize {
        2
    }

    fn combine(&self, operands: &[Constraint]) -> Constraint {
        debug_assert_eq!(operands.len(), 2);
        let (lhs, rhs) = (operands[0], operands[1]);
        // TODO: the interval sum [min1 + min2, max1 + max2] is the tighter
        // propagation for addition; switch once evaluation lands and the
        // aggregate has a consumer to agree with.
        Constraint::interval(
            lhs.min().min(rhs.min()),
            lhs.max().max(rhs.max()),
        )
    }

    fn apply(&self, operands: &[Scalar]) -> Scalar {
        debug_assert_eq!(operands.len(), 2);
        operands[0] + operands[1]
    }
}

/// Adds two symbols or expressions.
///
/// Equivalent to `compose(&Plus, [lhs, rhs])` with both operands
/// promoted. Also available as the `+` operator.
///
/// # Panics
///
/// Panics if the resulting tree binds one symbol name to two different
/// constraints.
#[must_use]
pub fn plus(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
    compose(&Plus, [lhs.into(), rhs.into()])
}

impl<Rhs: Into<Expression>> Add<Rhs> for Symbol {
    type Output = Expression;

    fn add(self, rhs: Rhs) -> Expression {
        plus(self, rhs)
    }
}

impl<Rhs: Into<Expression>> Add<Rhs> for Expression {
    type Output = Expression;

    fn add(self, rhs: Rhs) -> Expression {
        plus(self, rhs)
    }
}
