//! Brute-force solving of the elliptic curve discrete logarithm problem
//!
//! Given a short-Weierstrass curve over a prime field, a base point P and a
//! target point Q = dP, this crate recovers the scalar d by exhaustive
//! search. It is built for cryptographic education and algorithm study on
//! small curves: brute force is exponential in the curve size, and watching
//! it succeed instantly on a 17-element group while being hopeless on a
//! 256-bit one is the lesson.
//!
//! # Example
//!
//! ```
//! use ecdlp::{params, Curve, DiscreteLogSolver, SearchOutcome};
//! use num_bigint::BigUint;
//!
//! # fn main() -> ecdlp::Result<()> {
//! let (params, base) = params::tiny_f17();
//! let curve = Curve::new(params)?;
//! let target = curve.multiply(&base, &BigUint::from(7u32))?;
//!
//! let solver = DiscreteLogSolver::new(curve, base, target, BigUint::from(19u32))?;
//! assert_eq!(solver.run()?, SearchOutcome::Found(BigUint::from(7u32)));
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on [`CurveParams`] and [`Point`]
//!
//! # Crate structure
//!
//! - [`ec`]: curve parameters, points, and the arithmetic engine
//! - [`solver`]: the sequential and parallel exhaustive search
//! - [`params`]: named demo parameter sets
//! - [`error`]: error taxonomy and validation helpers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Curve arithmetic
pub mod ec;
pub use ec::{Curve, CurveParams, Point};

// Discrete-log search
pub mod solver;
pub use solver::{DiscreteLogSolver, SearchOutcome};

// Demo parameter sets
pub mod params;
