use crate::{
    SIGN_COUNT, ZodiacError,
    sign::Sign,
    types::{Month, MonthDay},
};

/// The last day of each sign's range, keyed by sign.
///
/// Entry `i` belongs to `Sign::ALL[i]` and always lies in that sign's
/// boundary month, so the table is ordered January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZodiacBoundary([MonthDay; SIGN_COUNT]);

/// Last day of each sign, Capricorn through Sagittarius
const STANDARD_BOUNDARY_DAYS: [u8; SIGN_COUNT] = [19, 18, 20, 19, 20, 21, 22, 22, 22, 23, 21, 21];

impl ZodiacBoundary {
    /// The conventional tropical zodiac table
    pub const STANDARD: Self = Self::from_days(STANDARD_BOUNDARY_DAYS);

    /// Builds a table from the last day of each sign, in `Sign::ALL` order.
    ///
    /// Each day is placed in its sign's boundary month. Days are not checked
    /// against month lengths.
    pub const fn from_days(days: [u8; SIGN_COUNT]) -> Self {
        let mut entries = [MonthDay::from_parts(Month::JANUARY, 0); SIGN_COUNT];
        let mut i = 0;
        while i < SIGN_COUNT {
            entries[i] = MonthDay::from_parts(Sign::ALL[i].boundary_month(), days[i]);
            i += 1;
        }
        Self(entries)
    }

    /// Last day of `sign`'s range
    #[inline]
    pub const fn get(&self, sign: Sign) -> MonthDay {
        self.0[sign.index()]
    }

    /// Iterates over `(sign, boundary)` in boundary-month order
    pub fn iter(&self) -> impl Iterator<Item = (Sign, MonthDay)> + '_ {
        Sign::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Default for ZodiacBoundary {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Returns the standard boundary table.
pub const fn zodiac_boundaries() -> ZodiacBoundary {
    ZodiacBoundary::STANDARD
}

/// First day of the range of the sign whose boundary falls in `month`.
///
/// That is the day after the previous month's boundary. For January the
/// previous boundary is December's, so the result lies in the prior year.
///
/// # Errors
/// Returns `ZodiacError::InvalidMonth` if `month` is 0 or > 12.
pub fn first_month_day_of_sign(month: u8, boundary: &ZodiacBoundary) -> Result<MonthDay, ZodiacError> {
    let month = Month::new(month)?;
    Ok(first_month_day(month, boundary))
}

pub const fn first_month_day(month: Month, boundary: &ZodiacBoundary) -> MonthDay {
    let previous = Sign::from_boundary_month(month.previous());
    boundary.get(previous).next_day()
}
