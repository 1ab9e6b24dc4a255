//! Walkthrough of the symbolic constraint surface.

use lemma::prelude::*;

fn main() {
    // a symbol with a borrowed literal name
    let x = Symbol::new("x");
    println!("{x}");

    // a symbol with a name only known at run time
    let name = String::from("x");
    let x = Symbol::new(name);
    println!("{x}");

    // manual promotion of a symbol to an expression
    let x = promote(Symbol::new("x"));
    println!("{x}");

    // an expression from two occurrences of one symbol
    let two_x = Symbol::new("x") + Symbol::new("x");
    println!("{two_x}");

    // equal constraints on distinct symbols
    let x = Symbol::new("x").refine(Constraint::NEGATIVE);
    let y = Symbol::new("y").refine(Constraint::NEGATIVE);
    println!("{}", x + y);

    // differing constraints on distinct symbols
    let x = Symbol::new("x").refine(Constraint::POSITIVE);
    let y = Symbol::new("y").refine(Constraint::NEGATIVE);
    println!("{}", x + y);

    // a refinement must narrow; widening is a defect, reported fatally by
    // `refine` and observable through `try_refine`
    let err = Symbol::new("x")
        .refine(Constraint::POSITIVE)
        .try_refine(Constraint::NEGATIVE)
        .unwrap_err();
    println!("rejected: {err}");

    // one name bound to two constraints: the tree does not construct
    let err = try_compose(
        &Plus,
        [
            Symbol::new("x").refine(Constraint::POSITIVE),
            Symbol::new("x").refine(Constraint::NEGATIVE),
        ],
    )
    .unwrap_err();
    println!("rejected: {err}");
}
