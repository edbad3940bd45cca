//! The curve arithmetic engine

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::{field, Point};
use crate::error::{validate, Error, Result};

/// Coefficients of a short-Weierstrass curve y² = x³ + ax + b (mod p).
///
/// Plain caller-supplied configuration; construct a [`Curve`] to obtain a
/// validated arithmetic engine. `a` and `b` may be negative (NIST curves
/// use a = −3), `p` must be an odd prime for the group law to be total —
/// primality is a caller contract, see [`Curve::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParams {
    /// Coefficient of the linear term
    pub a: BigInt,
    /// Constant term
    pub b: BigInt,
    /// Field modulus
    pub p: BigInt,
}

/// Arithmetic engine for a validated, non-singular curve.
///
/// Owns the curve parameters and implements the field and point-group
/// operations: modular reduction and inversion, the affine group law,
/// doubling, scalar multiplication, and point validity checking.
#[derive(Debug, Clone)]
pub struct Curve {
    params: CurveParams,
}

impl Curve {
    /// Validate parameters and build the engine.
    ///
    /// Rejects a modulus below 2 and any singular curve, i.e. one whose
    /// discriminant 4a³ + 27b² is zero. The discriminant is evaluated over
    /// the plain integers, not reduced modulo p, so a curve whose
    /// discriminant is a nonzero multiple of p is accepted.
    ///
    /// Primality of `p` is not checked. Every slope computation routes
    /// through [`Curve::inverse`], so a composite modulus surfaces as
    /// [`Error::InvalidInverse`] instead of a silently wrong result.
    pub fn new(params: CurveParams) -> Result<Self> {
        validate::parameter(
            params.p >= BigInt::from(2),
            "modulus",
            "must be at least 2",
        )?;
        let discriminant = BigInt::from(4) * &params.a * &params.a * &params.a
            + BigInt::from(27) * &params.b * &params.b;
        if discriminant.is_zero() {
            return Err(Error::InvalidCurve);
        }
        Ok(Curve { params })
    }

    /// The validated curve parameters
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Curve discriminant 4a³ + 27b², over the plain integers
    pub fn discriminant(&self) -> BigInt {
        BigInt::from(4) * &self.params.a * &self.params.a * &self.params.a
            + BigInt::from(27) * &self.params.b * &self.params.b
    }

    /// Canonical representative of `x` in the field, in `[0, p)`
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        field::reduce(x, &self.params.p)
    }

    /// Multiplicative inverse of `x` modulo p, via the extended Euclidean
    /// algorithm.
    ///
    /// Fails with [`Error::InvalidInverse`] when `gcd(x, p) != 1`; with a
    /// prime modulus this only happens for `x ≡ 0`.
    pub fn inverse(&self, x: &BigInt) -> Result<BigInt> {
        field::inv(x, &self.params.p, "modular inverse")
    }

    /// Does the point lie on the curve?
    ///
    /// The identity is always valid; an affine point is valid iff it
    /// satisfies y² ≡ x³ + ax + b (mod p). Singular curves are rejected at
    /// construction, so no point of a `Curve` can sit on one.
    pub fn is_valid_point(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let m = &self.params.p;
                let lhs = field::mul(y, y, m);
                let rhs = field::reduce(&(x * x * x + &self.params.a * x + &self.params.b), m);
                lhs == rhs
            }
        }
    }

    /// Additive inverse of a point: (x, −y mod p)
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: field::reduce(&(-y), &self.params.p),
            },
        }
    }

    /// Add two points under the group law.
    ///
    /// Case order: identity absorption, then doubling (equal points), then
    /// the chord rule. A doubling with a vertical tangent (y = 0) and a
    /// chord through inverse points (x₁ ≡ x₂ mod p) both yield the
    /// identity. Every branch returns a fully-specified point; the only
    /// failure mode is a non-invertible slope denominator, which cannot
    /// occur when p is prime.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        let (x1, y1) = match p {
            Point::Identity => return Ok(q.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            Point::Identity => return Ok(p.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let m = &self.params.p;

        if p == q {
            // Tangent slope λ = (3x² + a) / 2y
            if y1.is_zero() {
                return Ok(Point::Identity);
            }
            let numerator = field::reduce(&(BigInt::from(3) * x1 * x1 + &self.params.a), m);
            let denominator = field::inv(&(BigInt::from(2) * y1), m, "point doubling")?;
            let lambda = field::mul(&numerator, &denominator, m);
            let x3 = field::reduce(&(&lambda * &lambda - BigInt::from(2) * x1), m);
            let y3 = field::reduce(&(&lambda * (x1 - &x3) - y1), m);
            Ok(Point::Affine { x: x3, y: y3 })
        } else {
            // Chord slope λ = (y₂ − y₁) / (x₂ − x₁)
            if field::reduce(&(x2 - x1), m).is_zero() {
                return Ok(Point::Identity);
            }
            let numerator = field::reduce(&(y2 - y1), m);
            let denominator = field::inv(&(x2 - x1), m, "point addition")?;
            let lambda = field::mul(&numerator, &denominator, m);
            let x3 = field::reduce(&(&lambda * &lambda - x1 - x2), m);
            let y3 = field::reduce(&(&lambda * (x1 - &x3) - y1), m);
            Ok(Point::Affine { x: x3, y: y3 })
        }
    }

    /// Double a point: 2P
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    /// Scalar multiplication n·P by iterative double-and-add.
    ///
    /// MSB-first over the big-endian bytes of `n`: O(log n) group
    /// operations, no recursion. n = 0 yields the identity.
    pub fn multiply(&self, point: &Point, n: &BigUint) -> Result<Point> {
        let mut acc = Point::identity();
        for byte in n.to_bytes_be() {
            for shift in (0..8).rev() {
                acc = self.double(&acc)?;
                if (byte >> shift) & 1 == 1 {
                    acc = self.add(point, &acc)?;
                }
            }
        }
        Ok(acc)
    }
}
