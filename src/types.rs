use crate::consts::{DAYS_IN_MONTH, MAX_MONTH, MIN_DAY};
use crate::{ZodiacError, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self::from_offset(0);
    pub const DECEMBER: Self = Self::from_offset(MAX_MONTH - 1);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ZodiacError> {
        let non_zero = NonZeroU8::new(value).ok_or(ZodiacError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ZodiacError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month at `offset` months after January, wrapping every year
    pub(crate) const fn from_offset(offset: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(offset % MAX_MONTH))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position of the month within the year
    #[inline]
    pub const fn offset(self) -> usize {
        (self.get() - 1) as usize
    }

    /// The month before this one; January wraps to December
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::from_offset(self.get() + MAX_MONTH - 2)
    }

    /// The month after this one; December wraps to January
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_offset(self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = ZodiacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar position within a year, without a year.
///
/// Only the month is validated. The day is taken as given: `02-30` or `01-40`
/// are representable and simply compare after every real day of their month.
/// Ordering is lexicographic, month first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:02}-{:02}", "month.get()", day)]
pub struct MonthDay {
    month: Month,
    day:   u8,
}

impl MonthDay {
    /// Creates a new `MonthDay` from raw values.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidMonth` if the month is 0 or > `MAX_MONTH`.
    pub fn new(month: u8, day: u8) -> Result<Self, ZodiacError> {
        Ok(Self::from_parts(Month::new(month)?, day))
    }

    /// Creates a new `MonthDay` from an already validated month
    pub const fn from_parts(month: Month, day: u8) -> Self {
        Self { month, day }
    }

    /// Returns the typed month
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day as given
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The following day.
    ///
    /// A day at or past the end of its month rolls over to the first of the
    /// next month, and December rolls over to January.
    #[must_use]
    pub const fn next_day(self) -> Self {
        if self.day >= days_in_month(self.month) {
            Self::from_parts(self.month.next(), MIN_DAY)
        } else {
            Self::from_parts(self.month, self.day + 1)
        }
    }
}

// Helper functions

pub const fn days_in_month(month: Month) -> u8 {
    DAYS_IN_MONTH[month.get() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DECEMBER, FEBRUARY, JANUARY};

    fn md(month: u8, day: u8) -> MonthDay {
        MonthDay::new(month, day).expect("valid month in test fixture")
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(ZodiacError::InvalidMonth(0))));
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(13);
        assert!(matches!(result, Err(ZodiacError::InvalidMonth(13))));

        let result = Month::new(255);
        assert!(matches!(result, Err(ZodiacError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_consts() {
        assert_eq!(Month::JANUARY.get(), JANUARY);
        assert_eq!(Month::DECEMBER.get(), DECEMBER);
    }

    #[test]
    fn test_month_offset() {
        for m in 1..=12u8 {
            let month = Month::new(m).unwrap();
            assert_eq!(month.offset(), usize::from(m - 1));
            assert_eq!(Month::from_offset(m - 1), month);
        }
    }

    #[test]
    fn test_month_previous_and_next_wrap() {
        assert_eq!(Month::JANUARY.previous(), Month::DECEMBER);
        assert_eq!(Month::DECEMBER.next(), Month::JANUARY);
        assert_eq!(Month::new(2).unwrap().previous(), Month::JANUARY);
        assert_eq!(Month::new(11).unwrap().next(), Month::DECEMBER);

        for m in 1..=12 {
            let month = Month::new(m).unwrap();
            assert_eq!(month.next().previous(), month, "Month {m}");
        }
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_day_accepts_any_day() {
        // Days are not checked against the month
        let feb_30 = md(FEBRUARY, 30);
        assert_eq!(feb_30.day(), 30);

        let jan_40 = md(JANUARY, 40);
        assert_eq!(jan_40.day(), 40);
    }

    #[test]
    fn test_month_day_invalid_month() {
        assert!(matches!(MonthDay::new(0, 19), Err(ZodiacError::InvalidMonth(0))));
        assert!(matches!(MonthDay::new(13, 19), Err(ZodiacError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_day_ordering_is_lexicographic() {
        assert!(md(1, 31) < md(2, 1));
        assert!(md(1, 19) < md(1, 20));
        assert!(md(2, 40) < md(3, 1));
        assert!(md(12, 31) > md(1, 1));
    }

    #[test]
    fn test_next_day_cases() {
        struct TestCase {
            input:       (u8, u8),
            expected:    (u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       (1, 19),
                expected:    (1, 20),
                description: "mid-month",
            },
            TestCase {
                input:       (1, 31),
                expected:    (2, 1),
                description: "end of 31-day month",
            },
            TestCase {
                input:       (4, 30),
                expected:    (5, 1),
                description: "end of 30-day month",
            },
            TestCase {
                input:       (2, 28),
                expected:    (2, 29),
                description: "leap day is always allowed",
            },
            TestCase {
                input:       (2, 29),
                expected:    (3, 1),
                description: "end of February",
            },
            TestCase {
                input:       (12, 31),
                expected:    (1, 1),
                description: "year wrap",
            },
            TestCase {
                input:       (6, 45),
                expected:    (7, 1),
                description: "out-of-range day rolls over",
            },
        ];

        for case in &cases {
            let (m, d) = case.input;
            let (em, ed) = case.expected;
            assert_eq!(md(m, d).next_day(), md(em, ed), "{}", case.description);
        }
    }

    #[test]
    fn test_month_day_display() {
        assert_eq!(md(1, 9).to_string(), "01-09");
        assert_eq!(md(12, 22).to_string(), "12-22");
    }

    #[test]
    fn test_month_day_serde() {
        let value = md(1, 19);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"month":1,"day":19}"#);

        let parsed: MonthDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let result: Result<MonthDay, _> = serde_json::from_str(r#"{"month":0,"day":19}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for m in 1..=12u8 {
            assert_eq!(
                days_in_month(Month::new(m).unwrap()),
                expected[usize::from(m)],
                "Month {m} has incorrect day count"
            );
        }
    }
}
