//! Cyclic arithmetic over [`chrono::Weekday`]

use crate::utils::validation::ensure_positive;
use chrono::Weekday;

const DAYS_IN_WEEK: i64 = 7;

/// Weekdays indexed from Sunday, matching `Weekday::num_days_from_sunday`
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub trait WeekdayExt: Sized {
    /// Move `days` forward (or backward when negative), wrapping around the week
    ///
    /// # Examples
    /// ```
    /// use chrono::Weekday;
    /// use extkit::ext::weekday::WeekdayExt;
    /// assert_eq!(Weekday::Sat.add_days(2), Weekday::Mon);
    /// assert_eq!(Weekday::Mon.add_days(-8), Weekday::Sun);
    /// ```
    fn add_days(self, days: i64) -> Self;

    fn increment(self) -> Self {
        self.add_days(1)
    }

    fn decrement(self) -> Self {
        self.add_days(-1)
    }

    /// The `count` days following `self`, in order, not including `self`
    ///
    /// # Errors
    /// Returns [`ArgumentError::NotPositive`](crate::error::ArgumentError::NotPositive)
    /// when `count` is zero.
    fn next_days(self, count: usize) -> crate::Result<Vec<Self>>;
}

impl WeekdayExt for Weekday {
    fn add_days(self, days: i64) -> Self {
        // Reduce first so the sum cannot overflow, then normalise negatives.
        let index = i64::from(self.num_days_from_sunday()) + days.rem_euclid(DAYS_IN_WEEK);
        SUNDAY_FIRST[index.rem_euclid(DAYS_IN_WEEK) as usize]
    }

    fn next_days(self, count: usize) -> crate::Result<Vec<Self>> {
        ensure_positive("count", count)?;
        Ok(std::iter::successors(Some(self.increment()), |day| Some(day.increment()))
            .take(count)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ArgumentError};

    #[test]
    fn test_add_days_forward() {
        assert_eq!(Weekday::Mon.add_days(0), Weekday::Mon);
        assert_eq!(Weekday::Mon.add_days(1), Weekday::Tue);
        assert_eq!(Weekday::Sat.add_days(1), Weekday::Sun);
        assert_eq!(Weekday::Wed.add_days(7), Weekday::Wed);
        assert_eq!(Weekday::Wed.add_days(15), Weekday::Thu);
    }

    #[test]
    fn test_add_days_negative() {
        assert_eq!(Weekday::Sun.add_days(-1), Weekday::Sat);
        assert_eq!(Weekday::Mon.add_days(-2), Weekday::Sat);
        assert_eq!(Weekday::Tue.add_days(-7), Weekday::Tue);
        assert_eq!(Weekday::Tue.add_days(-15), Weekday::Mon);
    }

    #[test]
    fn test_add_days_is_congruent_mod_seven() {
        for day in SUNDAY_FIRST {
            for offset in -30_i64..=30 {
                let expected = (i64::from(day.num_days_from_sunday()) + offset).rem_euclid(7);
                assert_eq!(
                    i64::from(day.add_days(offset).num_days_from_sunday()),
                    expected,
                    "{:?} + {}",
                    day,
                    offset
                );
            }
        }
    }

    #[test]
    fn test_add_days_extremes() {
        assert_eq!(Weekday::Sun.add_days(i64::MAX), Weekday::Sun.add_days(i64::MAX % 7));
        assert_eq!(
            Weekday::Sun.add_days(i64::MIN),
            Weekday::Sun.add_days(i64::MIN.rem_euclid(7))
        );
    }

    #[test]
    fn test_increment_decrement() {
        assert_eq!(Weekday::Fri.increment(), Weekday::Sat);
        assert_eq!(Weekday::Sat.increment(), Weekday::Sun);
        assert_eq!(Weekday::Sun.decrement(), Weekday::Sat);
    }

    #[test]
    fn test_next_days() {
        assert_eq!(
            Weekday::Fri.next_days(3).unwrap(),
            vec![Weekday::Sat, Weekday::Sun, Weekday::Mon]
        );
        let fortnight = Weekday::Mon.next_days(14).unwrap();
        assert_eq!(fortnight.len(), 14);
        assert_eq!(fortnight[6], Weekday::Mon);
        assert_eq!(fortnight[13], Weekday::Mon);
    }

    #[test]
    fn test_next_days_rejects_zero_count() {
        let err = Weekday::Mon.next_days(0).unwrap_err();
        assert!(matches!(
            err,
            AppError::Argument(ArgumentError::NotPositive { parameter: "count" })
        ));
    }
}
