//! Property-based tests for constraints, refinement, and composition.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::constraint::Constraint;
    use crate::error::ConstraintError;
    use crate::expr::{promote, try_compose};
    use crate::op::Plus;
    use crate::symbol::Symbol;

    // Strategy for ordered finite bounds
    fn bounds() -> impl Strategy<Value = (f64, f64)> {
        (-1.0e6..1.0e6, -1.0e6..1.0e6)
            .prop_map(|(a, b): (f64, f64)| if a <= b { (a, b) } else { (b, a) })
    }

    // Strategy for a constraint drawn from either representation
    fn constraint() -> impl Strategy<Value = Constraint> {
        prop_oneof![
            Just(Constraint::REAL),
            Just(Constraint::NEGATIVE),
            Just(Constraint::POSITIVE),
            bounds().prop_map(|(min, max)| Constraint::interval(min, max)),
        ]
    }

    proptest! {
        // Constraint invariants

        #[test]
        fn constructed_bounds_stay_ordered(c in constraint()) {
            prop_assert!(c.min() <= c.max());
        }

        #[test]
        fn equality_ignores_representation((min, max) in bounds()) {
            let a = Constraint::interval(min, max);
            let b = Constraint::interval(min, max);
            prop_assert_eq!(a, b);
        }

        // Refinement

        #[test]
        fn refinement_reflexive(c in constraint()) {
            let symbol = Symbol::new("s").refine(c);
            let refined = symbol.clone().refine(c);
            prop_assert_eq!(symbol.constraint(), refined.constraint());
        }

        #[test]
        fn refinement_succeeds_iff_narrowing((min, max) in bounds(), candidate in constraint()) {
            let symbol = Symbol::new("s").refine(Constraint::interval(min, max));
            let narrowing = candidate.min() >= min && candidate.max() <= max;
            prop_assert_eq!(symbol.try_refine(candidate).is_ok(), narrowing);
        }

        #[test]
        fn refinement_never_widens((min, max) in bounds(), candidate in constraint()) {
            let symbol = Symbol::new("s").refine(Constraint::interval(min, max));
            if let Ok(refined) = symbol.try_refine(candidate) {
                prop_assert!(refined.constraint().refines(&Constraint::interval(min, max)));
            }
        }

        // Promotion

        #[test]
        fn promotion_idempotent(c in constraint()) {
            let once = promote(Symbol::new("s").refine(c));
            let twice = promote(once.clone());
            prop_assert_eq!(once, twice);
        }

        // Composition

        #[test]
        fn plus_aggregate_is_the_bounding_union(a in constraint(), b in constraint()) {
            let sum = try_compose(
                &Plus,
                [Symbol::new("a").refine(a), Symbol::new("b").refine(b)],
            );
            prop_assert!(sum.is_ok());

            let aggregate = sum.unwrap().constraint();
            prop_assert_eq!(aggregate.min(), a.min().min(b.min()));
            prop_assert_eq!(aggregate.max(), a.max().max(b.max()));
        }

        #[test]
        fn one_name_two_constraints_is_consistent_iff_equal(a in constraint(), b in constraint()) {
            let sum = try_compose(
                &Plus,
                [Symbol::new("x").refine(a), Symbol::new("x").refine(b)],
            );
            if a == b {
                prop_assert!(sum.is_ok());
            } else {
                let is_inconsistent = matches!(
                    sum,
                    Err(ConstraintError::InconsistentConstraints { ref name, .. }) if name == "x"
                );
                prop_assert!(is_inconsistent);
            }
        }

        #[test]
        fn unconstrained_flag_agrees_with_traversal(a in constraint(), b in constraint()) {
            let sum = try_compose(
                &Plus,
                [Symbol::new("a").refine(a), Symbol::new("b").refine(b)],
            );
            prop_assert!(sum.is_ok());

            let sum = sum.unwrap();
            let traversed = sum
                .symbols()
                .iter()
                .all(|view| view.constraint().is_unconstrained());
            prop_assert_eq!(sum.is_unconstrained(), traversed);
        }
    }
}
