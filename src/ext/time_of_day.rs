//! Helpers over [`chrono::NaiveTime`] as a time of day

use crate::error::TimeError;
use crate::ext::comparable::Boundary;
use crate::storage::config::Settings;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveTime, TimeDelta};
use std::fmt::Write;

const MINUTES_PER_DAY: i64 = 24 * 60;

pub trait TimeOfDayExt: Sized {
    /// Add `minutes`, failing when the result falls outside the same day
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveTime;
    /// use extkit::ext::time_of_day::TimeOfDayExt;
    ///
    /// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// assert_eq!(nine.add_minutes(90).unwrap(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    /// assert!(nine.add_minutes(24 * 60).is_err());
    /// ```
    fn add_minutes(self, minutes: i64) -> crate::Result<Self>;

    /// Add `minutes`, wrapping around midnight
    fn wrapping_add_minutes(self, minutes: i64) -> Self;

    /// Whether `self` falls within `start..end`; `start > end` spans midnight
    fn is_within(&self, start: &Self, end: &Self, boundary: Boundary) -> bool;

    /// Whole minutes from `self` to `other`, negative when `other` is earlier
    fn minutes_until(&self, other: &Self) -> i64;

    fn is_past_at(&self, now: &Self) -> bool;

    fn is_future_at(&self, now: &Self) -> bool;

    /// Compared against the local wall clock
    fn is_past(&self) -> bool;

    /// Compared against the local wall clock
    fn is_future(&self) -> bool;

    /// Format with chrono strftime specifiers
    ///
    /// # Errors
    /// Returns [`TimeError::InvalidFormat`] for unknown specifiers or ones that
    /// need a date.
    fn format_with(&self, format: &str) -> crate::Result<String>;

    /// Format with the configured default format
    fn format_with_settings(&self, settings: &Settings) -> crate::Result<String> {
        self.format_with(&settings.time_format)
    }
}

impl TimeOfDayExt for NaiveTime {
    fn add_minutes(self, minutes: i64) -> crate::Result<Self> {
        let out_of_range = || TimeError::OutOfRange {
            time: self.to_string(),
            minutes,
        };
        let delta = TimeDelta::try_minutes(minutes).ok_or_else(out_of_range)?;
        match self.overflowing_add_signed(delta) {
            (time, 0) => Ok(time),
            _ => Err(out_of_range().into()),
        }
    }

    fn wrapping_add_minutes(self, minutes: i64) -> Self {
        let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
        self.overflowing_add_signed(TimeDelta::minutes(minutes)).0
    }

    fn is_within(&self, start: &Self, end: &Self, boundary: Boundary) -> bool {
        if start <= end {
            boundary.below(start, self) && boundary.below(self, end)
        } else {
            boundary.below(start, self) || boundary.below(self, end)
        }
    }

    fn minutes_until(&self, other: &Self) -> i64 {
        other.signed_duration_since(*self).num_minutes()
    }

    fn is_past_at(&self, now: &Self) -> bool {
        self < now
    }

    fn is_future_at(&self, now: &Self) -> bool {
        self > now
    }

    fn is_past(&self) -> bool {
        self.is_past_at(&Local::now().time())
    }

    fn is_future(&self) -> bool {
        self.is_future_at(&Local::now().time())
    }

    fn format_with(&self, format: &str) -> crate::Result<String> {
        let invalid = || TimeError::InvalidFormat {
            format: format.to_string(),
        };

        let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid().into());
        }

        let mut formatted = String::new();
        write!(formatted, "{}", self.format_with_items(items.iter())).map_err(|_| invalid())?;
        Ok(formatted)
    }
}
