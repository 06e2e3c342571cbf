//! Range checks and clamping over any `PartialOrd` type

use crate::utils::validation::ensure_ordered;
use std::fmt::Debug;

/// Whether range bounds are part of the range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    #[default]
    Inclusive,
    Exclusive,
}

impl Boundary {
    /// True when `lower` sits below `value` under this boundary mode
    #[inline]
    pub(crate) fn below<T: PartialOrd + ?Sized>(self, lower: &T, value: &T) -> bool {
        match self {
            Boundary::Inclusive => lower <= value,
            Boundary::Exclusive => lower < value,
        }
    }
}

pub trait ComparableExt: PartialOrd + Sized {
    /// Check whether `self` lies between `lower` and `upper`
    ///
    /// # Examples
    /// ```
    /// use extkit::ext::comparable::{Boundary, ComparableExt};
    /// assert!(5.is_between(&1, &5, Boundary::Inclusive));
    /// assert!(!5.is_between(&1, &5, Boundary::Exclusive));
    /// ```
    fn is_between(&self, lower: &Self, upper: &Self, boundary: Boundary) -> bool {
        boundary.below(lower, self) && boundary.below(self, upper)
    }

    /// Cap `self` at `max`
    fn limit_max(self, max: Self) -> Self {
        if self > max { max } else { self }
    }

    /// Raise `self` to at least `min`
    fn limit_min(self, min: Self) -> Self {
        if self < min { min } else { self }
    }

    /// Clamp `self` into `[min, max]`
    ///
    /// # Errors
    /// Returns [`ArgumentError::InvalidRange`](crate::error::ArgumentError::InvalidRange)
    /// when `min > max`.
    ///
    /// # Examples
    /// ```
    /// use extkit::ext::comparable::ComparableExt;
    /// assert_eq!(15.limit(0, 10).unwrap(), 10);
    /// assert_eq!((-3).limit(0, 10).unwrap(), 0);
    /// assert!(3.limit(10, 0).is_err());
    /// ```
    fn limit(self, min: Self, max: Self) -> crate::Result<Self>
    where
        Self: Debug,
    {
        ensure_ordered(&min, &max)?;
        Ok(self.limit_min(min).limit_max(max))
    }
}

impl<T: PartialOrd> ComparableExt for T {}
