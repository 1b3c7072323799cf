use serde::{Deserialize, Serialize};

use crate::{
    RANGE_SEPARATOR, SIGN_COUNT, ZodiacError,
    prelude::*,
    sign::Sign,
    table::{ZodiacBoundary, first_month_day},
    types::MonthDay,
};

/// How a range's bounds are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    /// `from <= x <= to` within one calendar year
    Normal,
    /// `x >= from || x <= to`, crossing December 31
    Wrapping,
}

/// The inclusive span of days assigned to one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}{}{}", from, RANGE_SEPARATOR, to)]
pub struct SignRange {
    from: MonthDay,
    to:   MonthDay,
    kind: RangeKind,
}

impl SignRange {
    pub(crate) const fn normal(from: MonthDay, to: MonthDay) -> Self {
        Self {
            from,
            to,
            kind: RangeKind::Normal,
        }
    }

    pub(crate) const fn wrapping(from: MonthDay, to: MonthDay) -> Self {
        Self {
            from,
            to,
            kind: RangeKind::Wrapping,
        }
    }

    /// First day of the range (inclusive)
    pub const fn from(&self) -> MonthDay {
        self.from
    }

    /// Last day of the range (inclusive)
    pub const fn to(&self) -> MonthDay {
        self.to
    }

    pub const fn kind(&self) -> RangeKind {
        self.kind
    }

    pub const fn is_wrapping(&self) -> bool {
        matches!(self.kind, RangeKind::Wrapping)
    }

    /// Checks if the range contains `date`, inclusive at both ends
    pub fn contains(&self, date: MonthDay) -> bool {
        match self.kind {
            RangeKind::Normal => self.from <= date && date <= self.to,
            RangeKind::Wrapping => date >= self.from || date <= self.to,
        }
    }
}

/// Full ranges for every sign, keyed by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZodiacRanges([SignRange; SIGN_COUNT]);

impl ZodiacRanges {
    /// Range assigned to `sign`
    #[inline]
    pub const fn get(&self, sign: Sign) -> SignRange {
        self.0[sign.index()]
    }

    /// Iterates over `(sign, range)` in boundary-month order
    pub fn iter(&self) -> impl Iterator<Item = (Sign, SignRange)> + '_ {
        Sign::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// The first sign whose range contains `date`
    pub fn find(&self, date: MonthDay) -> Option<Sign> {
        self.iter()
            .find(|(_, range)| range.contains(date))
            .map(|(sign, _)| sign)
    }
}

/// Expands a boundary table into full ranges.
///
/// Each sign runs from the day after the previous sign's boundary through its
/// own boundary. A range starting in a later month than it ends crosses
/// December 31 and is the only wrapping one; only the January sign can start
/// in December. A December boundary on the 31st rolls that start into January
/// and the range is then normal. A start after the end within one month is an
/// empty range, not a wrapping one.
pub fn create_zodiac_ranges(boundary: &ZodiacBoundary) -> ZodiacRanges {
    ZodiacRanges(Sign::ALL.map(|sign| {
        let from = first_month_day(sign.boundary_month(), boundary);
        let to = boundary.get(sign);

        if from.month() > to.month() {
            SignRange::wrapping(from, to)
        } else {
            SignRange::normal(from, to)
        }
    }))
}

/// Finds the sign whose range in `ranges` contains `month`/`day`.
///
/// # Errors
/// Returns `ZodiacError::InvalidMonth` if `month` is 0 or > 12, and
/// `ZodiacError::Uncovered` if no range contains the date, which only a
/// boundary table with gaps can produce.
pub fn find_sign(month: u8, day: u8, ranges: &ZodiacRanges) -> Result<Sign, ZodiacError> {
    let date = MonthDay::new(month, day)?;
    ranges.find(date).ok_or(ZodiacError::Uncovered(date))
}
