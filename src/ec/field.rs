//! Modular arithmetic over a runtime modulus
//!
//! Unlike a fixed-modulus field with unrolled limb arithmetic, the modulus
//! here is a value chosen by the caller, so every helper takes it as an
//! explicit argument and works on `BigInt`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Canonical representative of `x` modulo `m`, in `[0, m)`.
///
/// Floor semantics, so negative inputs reduce correctly.
pub(super) fn reduce(x: &BigInt, m: &BigInt) -> BigInt {
    x.mod_floor(m)
}

/// Modular product `a · b mod m`, in `[0, m)`.
pub(super) fn mul(a: &BigInt, b: &BigInt, m: &BigInt) -> BigInt {
    (a * b).mod_floor(m)
}

/// Multiplicative inverse of `x` modulo `m` via the extended Euclidean
/// algorithm.
///
/// Fails with [`Error::InvalidInverse`] when `gcd(x, m) != 1`, which covers
/// both `x ≡ 0` and a composite modulus sharing a factor with `x`. With a
/// prime modulus and nonzero `x` the inverse always exists.
pub(super) fn inv(x: &BigInt, m: &BigInt, context: &'static str) -> Result<BigInt> {
    // Invariant: r_i = s_i·x (mod m); when r_0 reaches gcd(x, m),
    // s_0 is the Bézout coefficient of x.
    let (mut r0, mut r1) = (m.clone(), x.mod_floor(m));
    let (mut s0, mut s1) = (BigInt::zero(), BigInt::one());

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let s2 = &s0 - &q * &s1;
        s0 = std::mem::replace(&mut s1, s2);
    }

    if !r0.is_one() {
        return Err(Error::InvalidInverse { context });
    }
    Ok(s0.mod_floor(m))
}
