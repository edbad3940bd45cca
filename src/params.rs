//! Named demo curve parameter sets
//!
//! Each function returns the curve coefficients together with a standard
//! generator, ready to feed to [`Curve::new`](crate::Curve::new). Nothing
//! in the crate depends on these; they exist so the binary, tests and
//! benchmarks agree on their instances.

use num_bigint::BigInt;
use num_traits::One;

use crate::ec::{CurveParams, Point};

/// The 17-element teaching curve y² = x³ + 2x + 2 over F₁₇.
///
/// Returns the parameters and the generator (5, 1), which has order 19 —
/// the whole group, so every point is reachable and the discrete log of
/// any target can be recovered with bound 19.
pub fn tiny_f17() -> (CurveParams, Point) {
    let params = CurveParams {
        a: BigInt::from(2),
        b: BigInt::from(2),
        p: BigInt::from(17),
    };
    let generator = Point::affine(BigInt::from(5), BigInt::one());
    (params, generator)
}

/// The NIST P-256 curve y² = x³ − 3x + b over its 256-bit prime field.
///
/// Returns the SEC 2 / FIPS 186 parameters and base point. Exhaustive
/// search over a group of this order is computationally infeasible; the
/// instance is included to mark the far end of the spectrum the small
/// curves illustrate.
pub fn nist_p256() -> (CurveParams, Point) {
    let params = CurveParams {
        a: BigInt::from(-3),
        b: hex_int("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        p: hex_int("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    };
    let generator = Point::affine(
        hex_int("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex_int("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );
    (params, generator)
}

fn hex_int(digits: &str) -> BigInt {
    BigInt::parse_bytes(digits.as_bytes(), 16).expect("static hex literal must parse")
}
