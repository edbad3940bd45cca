//! Affine curve points with a tagged identity element

use std::fmt;

use num_bigint::BigInt;

/// A point on a short-Weierstrass curve, or the point at infinity.
///
/// The identity is a distinct variant rather than a reserved coordinate
/// pair, so no on-curve point can collide with it. Points are immutable
/// values: the group operations on [`Curve`](super::Curve) always construct
/// a fresh `Point`.
///
/// Equality is exact structural equality on the coordinates, with no
/// modular reduction; the curve operations keep coordinates canonical in
/// `[0, p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The point at infinity, the neutral element of the group
    Identity,
    /// An affine coordinate pair
    Affine {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

impl Point {
    /// Create an affine point from its coordinates
    pub fn affine(x: BigInt, y: BigInt) -> Self {
        Point::Affine { x, y }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("infinity"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
