//! Validation utilities for curve and solver inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate curve membership of a point
#[inline(always)]
pub fn on_curve(is_on_curve: bool, context: &'static str) -> Result<()> {
    if !is_on_curve {
        return Err(Error::PointNotOnCurve { context });
    }
    Ok(())
}
