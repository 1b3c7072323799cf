use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumCount, EnumIter, IntoStaticStr};

use crate::{SIGN_COUNT, types::Month};

/// The twelve zodiac signs.
///
/// Variants are declared in the order of the month their range ends in, so
/// Capricorn (ending in January) comes first and Sagittarius (ending in
/// December) last.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    StrumDisplay,
    EnumCount,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Sign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl Sign {
    /// All signs in boundary-month order
    pub const ALL: [Self; SIGN_COUNT] = [
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
    ];

    /// Position in [`Sign::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The month the sign's range ends in
    pub const fn boundary_month(self) -> Month {
        Month::from_offset(self as u8)
    }

    /// The sign whose range ends in `month`
    pub const fn from_boundary_month(month: Month) -> Self {
        Self::ALL[month.offset()]
    }

    /// The sign before this one; Capricorn wraps to Sagittarius
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::from_boundary_month(self.boundary_month().previous())
    }

    /// The sign after this one; Sagittarius wraps to Capricorn
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_boundary_month(self.boundary_month().next())
    }

    /// English name, e.g. `"Capricorn"`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Japanese name, e.g. `"山羊座"`
    pub const fn japanese_name(self) -> &'static str {
        match self {
            Self::Capricorn => "山羊座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "魚座",
            Self::Aries => "牡羊座",
            Self::Taurus => "牡牛座",
            Self::Gemini => "双子座",
            Self::Cancer => "蟹座",
            Self::Leo => "獅子座",
            Self::Virgo => "乙女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "蠍座",
            Self::Sagittarius => "射手座",
        }
    }
}
