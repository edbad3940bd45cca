//! Unit tests for field arithmetic and the curve group law
//!
//! Most cases run on the 17-element teaching curve y² = x³ + 2x + 2 whose
//! group is cyclic of order 19 with generator (5, 1); small enough that the
//! expected points are known by hand.

use super::*;
use crate::error::Error;
use crate::params;
use num_bigint::{BigInt, BigUint};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn curve_f17() -> (Curve, Point) {
    let (params, generator) = params::tiny_f17();
    (Curve::new(params).unwrap(), generator)
}

fn pt(x: i64, y: i64) -> Point {
    Point::affine(BigInt::from(x), BigInt::from(y))
}

mod field_tests {
    use super::*;

    #[test]
    fn test_reduce_canonical_range() {
        let (curve, _) = curve_f17();

        assert_eq!(curve.reduce(&BigInt::from(20)), BigInt::from(3));
        assert_eq!(curve.reduce(&BigInt::from(17)), BigInt::from(0));
        // Floor semantics for negative inputs
        assert_eq!(curve.reduce(&BigInt::from(-5)), BigInt::from(12));
        assert_eq!(curve.reduce(&BigInt::from(-17)), BigInt::from(0));
    }

    #[test]
    fn test_inverse_of_every_unit() {
        let (curve, _) = curve_f17();

        for x in 1..17 {
            let x = BigInt::from(x);
            let inv = curve.inverse(&x).unwrap();
            assert_eq!(curve.reduce(&(x * inv)), BigInt::from(1));
        }
    }

    #[test]
    fn test_inverse_of_zero_rejected() {
        let (curve, _) = curve_f17();

        let err = curve.inverse(&BigInt::from(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInverse { .. }));
        // Multiples of the modulus are the same residue
        let err = curve.inverse(&BigInt::from(34)).unwrap_err();
        assert!(matches!(err, Error::InvalidInverse { .. }));
    }

    #[test]
    fn test_inverse_shares_factor_with_composite_modulus() {
        // Constructor accepts a composite modulus (primality is the
        // caller's contract); the arithmetic reports the consequences.
        let curve = Curve::new(CurveParams {
            a: BigInt::from(1),
            b: BigInt::from(14),
            p: BigInt::from(15),
        })
        .unwrap();

        let err = curve.inverse(&BigInt::from(5)).unwrap_err();
        assert!(matches!(err, Error::InvalidInverse { .. }));
        // Units of Z/15 still invert
        let inv = curve.inverse(&BigInt::from(7)).unwrap();
        assert_eq!(curve.reduce(&(BigInt::from(7) * inv)), BigInt::from(1));
    }
}

mod curve_tests {
    use super::*;

    #[test]
    fn test_singular_curve_rejected() {
        // 4a³ + 27b² = 0 for (a, b) = (0, 0) and (−3, 2)
        let err = Curve::new(CurveParams {
            a: BigInt::from(0),
            b: BigInt::from(0),
            p: BigInt::from(17),
        })
        .unwrap_err();
        assert_eq!(err, Error::InvalidCurve);

        let err = Curve::new(CurveParams {
            a: BigInt::from(-3),
            b: BigInt::from(2),
            p: BigInt::from(17),
        })
        .unwrap_err();
        assert_eq!(err, Error::InvalidCurve);
    }

    #[test]
    fn test_discriminant_is_not_reduced_modulo_p() {
        // 4·3³ + 27·8² = 1836 = 17·108: zero mod p but nonzero as an
        // integer, so the curve is accepted.
        let curve = Curve::new(CurveParams {
            a: BigInt::from(3),
            b: BigInt::from(8),
            p: BigInt::from(17),
        })
        .unwrap();
        assert_eq!(curve.discriminant(), BigInt::from(1836));
    }

    #[test]
    fn test_modulus_below_two_rejected() {
        let err = Curve::new(CurveParams {
            a: BigInt::from(2),
            b: BigInt::from(2),
            p: BigInt::from(1),
        })
        .unwrap_err();
        assert!(matches!(err, Error::Parameter { .. }));
    }

    #[test]
    fn test_point_validity() {
        let (curve, generator) = curve_f17();

        assert!(curve.is_valid_point(&generator));
        assert!(curve.is_valid_point(&Point::identity()));
        assert!(curve.is_valid_point(&pt(0, 6)));
        // Wrong y for x = 5
        assert!(!curve.is_valid_point(&pt(5, 2)));
        // The reference's "zero point" is simply off this curve
        assert!(!curve.is_valid_point(&pt(0, 0)));
    }

    #[test]
    fn test_nist_p256_generator_is_on_curve() {
        let (params, generator) = params::nist_p256();
        let curve = Curve::new(params).unwrap();
        assert!(curve.is_valid_point(&generator));
    }
}

mod group_tests {
    use super::*;

    #[test]
    fn test_identity_laws() {
        let (curve, p) = curve_f17();

        assert_eq!(curve.add(&p, &Point::identity()).unwrap(), p);
        assert_eq!(curve.add(&Point::identity(), &p).unwrap(), p);
        assert_eq!(
            curve.add(&Point::identity(), &Point::identity()).unwrap(),
            Point::identity()
        );
    }

    #[test]
    fn test_inverse_law() {
        let (curve, p) = curve_f17();

        let neg = curve.negate(&p);
        assert_eq!(neg, pt(5, 16));
        assert_eq!(curve.add(&p, &neg).unwrap(), Point::identity());
        assert_eq!(curve.negate(&Point::identity()), Point::identity());
    }

    #[test]
    fn test_known_small_multiples() {
        let (curve, p) = curve_f17();

        assert_eq!(curve.double(&p).unwrap(), pt(6, 3));
        assert_eq!(curve.multiply(&p, &BigUint::from(3u32)).unwrap(), pt(10, 6));
        assert_eq!(curve.multiply(&p, &BigUint::from(7u32)).unwrap(), pt(0, 6));
        assert_eq!(curve.multiply(&p, &BigUint::from(18u32)).unwrap(), pt(5, 16));
    }

    #[test]
    fn test_doubling_matches_addition() {
        let (curve, p) = curve_f17();

        let mut q = p.clone();
        for _ in 0..25 {
            assert_eq!(curve.double(&q).unwrap(), curve.add(&q, &q).unwrap());
            q = curve.add(&p, &q).unwrap();
        }
    }

    #[test]
    fn test_doubling_with_zero_y_gives_identity() {
        // (1, 0) lies on y² = x³ + 2x + 14 over F₁₇; its tangent is vertical.
        let curve = Curve::new(CurveParams {
            a: BigInt::from(2),
            b: BigInt::from(14),
            p: BigInt::from(17),
        })
        .unwrap();
        let p = pt(1, 0);

        assert!(curve.is_valid_point(&p));
        assert_eq!(curve.double(&p).unwrap(), Point::identity());
    }

    #[test]
    fn test_chord_through_inverse_points_gives_identity() {
        let (curve, p) = curve_f17();

        // (5, 1) and (5, 16) share an x-coordinate: vertical chord
        assert_eq!(curve.add(&p, &pt(5, 16)).unwrap(), Point::identity());
    }

    #[test]
    fn test_multiply_matches_repeated_addition() {
        let (curve, p) = curve_f17();

        let mut acc = Point::identity();
        for n in 0u32..50 {
            assert_eq!(curve.multiply(&p, &BigUint::from(n)).unwrap(), acc);
            acc = curve.add(&p, &acc).unwrap();
        }
    }

    #[test]
    fn test_generator_has_order_nineteen() {
        let (curve, p) = curve_f17();

        assert_eq!(
            curve.multiply(&p, &BigUint::from(19u32)).unwrap(),
            Point::identity()
        );
        assert_eq!(curve.multiply(&p, &BigUint::from(20u32)).unwrap(), p);
        assert_eq!(
            curve.multiply(&p, &BigUint::from(0u32)).unwrap(),
            Point::identity()
        );
        assert_eq!(curve.multiply(&p, &BigUint::from(1u32)).unwrap(), p);
    }

    #[test]
    fn test_multiply_is_a_homomorphism() {
        let (curve, p) = curve_f17();
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        for _ in 0..20 {
            let i: u64 = rng.gen_range(0..100);
            let j: u64 = rng.gen_range(0..100);
            let lhs = curve.multiply(&p, &BigUint::from(i + j)).unwrap();
            let rhs = curve
                .add(
                    &curve.multiply(&p, &BigUint::from(i)).unwrap(),
                    &curve.multiply(&p, &BigUint::from(j)).unwrap(),
                )
                .unwrap();
            assert_eq!(lhs, rhs);
        }
    }
}
