//! Elliptic curve arithmetic over prime fields
//!
//! This module implements the short-Weierstrass group law for curves
//! y² = x³ + ax + b over the field of integers modulo a caller-supplied
//! prime p. Coordinates are arbitrary-precision integers, so the same code
//! serves the 17-element teaching curve and full-size standard curves.
//!
//! The arithmetic is deliberately variable-time: the crate exists to study
//! the discrete logarithm problem on curves small enough to search
//! exhaustively, not to protect secrets against side channels.

mod curve;
mod field;
mod point;

pub use curve::{Curve, CurveParams};
pub use point::Point;

#[cfg(test)]
mod tests;
