//! Demo binary: recover a discrete log on the 17-element teaching curve.
//!
//! Takes no arguments and writes a single integer to stdout: the recovered
//! scalar, or 0 when the search exhausts without a match.

use num_bigint::BigUint;

use ecdlp::{params, Curve, DiscreteLogSolver, SearchOutcome};

fn main() {
    match solve_demo() {
        Ok(SearchOutcome::Found(d)) => println!("{}", d),
        Ok(SearchOutcome::Exhausted) => println!("0"),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Solve Q = 7·P on y² = x³ + 2x + 2 over F₁₇ with generator P = (5, 1).
fn solve_demo() -> ecdlp::Result<SearchOutcome> {
    let (params, base) = params::tiny_f17();
    let curve = Curve::new(params)?;

    let target = curve.multiply(&base, &BigUint::from(7u32))?;
    let order = BigUint::from(19u32);

    DiscreteLogSolver::new(curve, base, target, order)?.run()
}
