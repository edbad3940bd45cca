//! Exhaustive search for elliptic-curve discrete logarithms
//!
//! Given a curve, a base point P and a target point Q = dP, the solver
//! recovers d by walking the cyclic group: the accumulator advances by one
//! group addition per candidate scalar, so a search over `[1, bound)`
//! costs O(bound) additions rather than O(bound · log bound) fresh scalar
//! multiplications.
//!
//! Exhaustive search is exponential in the curve size. That is the point:
//! it terminates quickly on teaching curves and illustrates why it cannot
//! terminate on cryptographic ones.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::thread;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::ec::{Curve, Point};
use crate::error::{validate, Error, Result};

/// Outcome of an exhaustive discrete-log search.
///
/// An explicit two-variant result: a recovered scalar is always ≥ 1, and
/// exhaustion is not an error, so neither can masquerade as the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The scalar d with d·P = Q, 1 ≤ d < bound
    Found(BigUint),
    /// No scalar below the bound maps the base point onto the target
    Exhausted,
}

/// Brute-force solver for d·P = Q over a validated curve.
///
/// Immutable once constructed; [`run`](Self::run) and
/// [`run_parallel`](Self::run_parallel) are pure functions of the solver
/// state, so repeated runs on identical inputs return identical results.
#[derive(Debug, Clone)]
pub struct DiscreteLogSolver {
    curve: Curve,
    base: Point,
    target: Point,
    bound: BigUint,
}

impl DiscreteLogSolver {
    /// Build a solver, validating both points against the curve.
    ///
    /// Fails fast with [`Error::PointNotOnCurve`](crate::Error) before any
    /// search work when the base or target point is off-curve.
    pub fn new(curve: Curve, base: Point, target: Point, bound: BigUint) -> Result<Self> {
        validate::on_curve(curve.is_valid_point(&base), "base point")?;
        validate::on_curve(curve.is_valid_point(&target), "target point")?;
        Ok(DiscreteLogSolver {
            curve,
            base,
            target,
            bound,
        })
    }

    /// The curve the search runs on
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The base point P
    pub fn base(&self) -> &Point {
        &self.base
    }

    /// The target point Q
    pub fn target(&self) -> &Point {
        &self.target
    }

    /// The exclusive upper bound on candidate scalars
    pub fn bound(&self) -> &BigUint {
        &self.bound
    }

    /// Sequential exhaustive search over d in `[1, bound)`.
    ///
    /// Each iteration advances the accumulator by one addition of the base
    /// point and compares it against the target. An accumulator that falls
    /// off the curve mid-search (impossible with a prime modulus and valid
    /// inputs) aborts with [`Error::PointNotOnCurve`](crate::Error).
    pub fn run(&self) -> Result<SearchOutcome> {
        let stop = AtomicBool::new(false);
        match self.scan_range(BigUint::one(), &self.bound, &stop)? {
            Some(d) => Ok(SearchOutcome::Found(d)),
            None => Ok(SearchOutcome::Exhausted),
        }
    }

    /// Parallel exhaustive search with `workers` threads.
    ///
    /// Partitions `[1, bound)` into contiguous sub-ranges, one per worker.
    /// Each worker seeds its accumulator with (lo − 1)·P by scalar
    /// multiplication, then walks its sub-range by repeated addition just
    /// like [`run`](Self::run). Workers share only the read-only solver
    /// state, a single-assignment result slot, and a stop flag raised by
    /// the first worker to finish the search.
    ///
    /// The discrete log is unique per (P, Q, bound), so the result does not
    /// depend on which worker reports it; a recovered scalar takes
    /// precedence over a concurrent abort in another sub-range.
    pub fn run_parallel(&self, workers: usize) -> Result<SearchOutcome> {
        validate::parameter(workers != 0, "workers", "must be at least 1")?;
        if self.bound <= BigUint::one() {
            return Ok(SearchOutcome::Exhausted);
        }

        let candidates = &self.bound - 1u32;
        let chunk = candidates.div_ceil(&BigUint::from(workers));
        let found: OnceLock<BigUint> = OnceLock::new();
        let failed: OnceLock<Error> = OnceLock::new();
        let stop = AtomicBool::new(false);

        thread::scope(|s| {
            let (found, failed, stop) = (&found, &failed, &stop);
            let mut lo = BigUint::one();
            for _ in 0..workers {
                if lo >= self.bound {
                    break;
                }
                let hi = (&lo + &chunk).min(self.bound.clone());
                let lo_range = std::mem::replace(&mut lo, hi.clone());
                s.spawn(move || match self.scan_range(lo_range, &hi, stop) {
                    Ok(Some(d)) => {
                        let _ = found.set(d);
                        stop.store(true, Ordering::Relaxed);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        let _ = failed.set(err);
                        stop.store(true, Ordering::Relaxed);
                    }
                });
            }
        });

        if let Some(d) = found.into_inner() {
            return Ok(SearchOutcome::Found(d));
        }
        if let Some(err) = failed.into_inner() {
            return Err(err);
        }
        Ok(SearchOutcome::Exhausted)
    }

    /// Walk candidates d in `[lo, hi)`, accumulator seeded at (lo − 1)·P.
    ///
    /// Returns the matching scalar, or `None` when the range is exhausted
    /// or the stop flag was raised by another worker.
    fn scan_range(
        &self,
        lo: BigUint,
        hi: &BigUint,
        stop: &AtomicBool,
    ) -> Result<Option<BigUint>> {
        if lo >= *hi {
            return Ok(None);
        }
        let mut acc = self.curve.multiply(&self.base, &(&lo - 1u32))?;
        let mut d = lo;
        while d < *hi {
            if stop.load(Ordering::Relaxed) {
                return Ok(None);
            }
            acc = self.curve.add(&self.base, &acc)?;
            validate::on_curve(self.curve.is_valid_point(&acc), "search accumulator")?;
            if acc == self.target {
                return Ok(Some(d));
            }
            d += 1u32;
        }
        Ok(None)
    }
}
