//! Argument validation helpers
//!
//! Every extension that takes a size, count or bound checks it through these
//! helpers so the error always names the offending parameter.

use crate::error::ArgumentError;
use std::fmt::Debug;

/// Ensure a size or count is greater than zero
pub fn ensure_positive(parameter: &'static str, value: usize) -> crate::Result<usize> {
    if value == 0 {
        return Err(ArgumentError::NotPositive { parameter }.into());
    }
    Ok(value)
}

/// Ensure `lower <= upper`
///
/// Incomparable bounds (for example `NaN`) are accepted, since no ordering
/// between them can be violated.
pub fn ensure_ordered<T>(lower: &T, upper: &T) -> crate::Result<()>
where
    T: PartialOrd + Debug,
{
    if lower > upper {
        return Err(ArgumentError::InvalidRange {
            lower: format!("{:?}", lower),
            upper: format!("{:?}", upper),
        }
        .into());
    }
    Ok(())
}
