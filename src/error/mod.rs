//! Error handling for curve arithmetic and discrete-log search

use std::fmt;

pub mod validate;

/// The error type for curve and solver operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Curve discriminant 4a³ + 27b² is zero; the group law is undefined
    InvalidCurve,

    /// A supplied or computed point does not satisfy the curve equation
    PointNotOnCurve {
        /// Which point failed the membership check
        context: &'static str,
    },

    /// Modular inverse requested for a value not coprime with the modulus
    InvalidInverse {
        /// Operation that requested the inverse
        context: &'static str,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a `Parameter` error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for curve and solver operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurve => {
                write!(f, "Singular curve: discriminant 4a^3 + 27b^2 is zero")
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Invalid point: {} is not on the curve", context)
            }
            Error::InvalidInverse { context } => {
                write!(
                    f,
                    "No modular inverse in {}: operand shares a factor with the modulus",
                    context
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
