//! Find the zodiac sign for a month and day.
//!
//! The lookup runs as a small pipeline: a fixed table of the day each sign
//! ends on ([`zodiac_boundaries`]), expanded into inclusive ranges
//! ([`create_zodiac_ranges`]), searched for the range holding a date
//! ([`find_sign`]). [`zodiac_sign`] runs all three on the standard table.
//!
//! ```
//! use zodiac_sign::{Sign, zodiac_sign};
//!
//! assert_eq!(zodiac_sign(1, 20).unwrap(), Sign::Aquarius);
//! assert_eq!(zodiac_sign(12, 28).unwrap(), Sign::Capricorn);
//! assert!(zodiac_sign(13, 1).is_err());
//! ```

mod consts;
mod prelude;
mod range;
mod sign;
mod table;
mod types;

pub use consts::*;
pub use range::{RangeKind, SignRange, ZodiacRanges, create_zodiac_ranges, find_sign};
pub use sign::Sign;
pub use table::{ZodiacBoundary, first_month_day_of_sign, zodiac_boundaries};
pub use types::{Month, MonthDay};

/// Error type for zodiac lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZodiacError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// No range contains the date.
    #[error("No zodiac range contains {0}")]
    Uncovered(MonthDay),
}

/// Returns the sign for `month`/`day` using the standard table.
///
/// The day is not checked against the month, so `(2, 30)` resolves the same
/// way any later February day would.
///
/// # Errors
/// Returns `ZodiacError::InvalidMonth` if `month` is 0 or > 12.
pub fn zodiac_sign(month: u8, day: u8) -> Result<Sign, ZodiacError> {
    let boundary = zodiac_boundaries();
    let ranges = create_zodiac_ranges(&boundary);
    find_sign(month, day, &ranges)
}

/// Returns the English name of the sign for `month`/`day`.
///
/// # Errors
/// Returns `ZodiacError::InvalidMonth` if `month` is 0 or > 12.
pub fn zodiac_sign_name(month: u8, day: u8) -> Result<&'static str, ZodiacError> {
    zodiac_sign(month, day).map(Sign::name)
}
