use crate::DateError;
use crate::consts::{DAYS_IN_MONTH, ESFAND_DAYS_LEAP};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A month of the Persian calendar year, from Farvardin (1) to Esfand (12).
///
/// Each variant carries its ordinal position as the discriminant; the
/// maximum day count and the Persian-script name are static per-variant
/// lookups. `Display` prints the transliterated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    #[display(fmt = "Farvardin")]
    Farvardin = 1,
    #[display(fmt = "Ordibehesht")]
    Ordibehesht = 2,
    #[display(fmt = "Khordad")]
    Khordad = 3,
    #[display(fmt = "Tir")]
    Tir = 4,
    #[display(fmt = "Mordad")]
    Mordad = 5,
    #[display(fmt = "Shahrivar")]
    Shahrivar = 6,
    #[display(fmt = "Mehr")]
    Mehr = 7,
    #[display(fmt = "Aban")]
    Aban = 8,
    #[display(fmt = "Azar")]
    Azar = 9,
    #[display(fmt = "Dey")]
    Dey = 10,
    #[display(fmt = "Bahman")]
    Bahman = 11,
    #[display(fmt = "Esfand")]
    Esfand = 12,
}

impl Month {
    /// Looks up the month with the given ordinal, from 1 to 12.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the number is outside 1..=12.
    pub const fn of(month: u8) -> Result<Self, DateError> {
        match month {
            1 => Ok(Self::Farvardin),
            2 => Ok(Self::Ordibehesht),
            3 => Ok(Self::Khordad),
            4 => Ok(Self::Tir),
            5 => Ok(Self::Mordad),
            6 => Ok(Self::Shahrivar),
            7 => Ok(Self::Mehr),
            8 => Ok(Self::Aban),
            9 => Ok(Self::Azar),
            10 => Ok(Self::Dey),
            11 => Ok(Self::Bahman),
            12 => Ok(Self::Esfand),
            _ => Err(DateError::InvalidMonth(month)),
        }
    }

    /// Returns the ordinal of the month, from 1 to 12
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the maximum day count of the month in a non-leap year
    #[inline]
    pub const fn days(self) -> u8 {
        DAYS_IN_MONTH[self as usize]
    }

    /// Returns the Persian-script name of the month
    pub const fn persian_name(self) -> &'static str {
        match self {
            Self::Farvardin => "فروردین",
            Self::Ordibehesht => "اردیبهشت",
            Self::Khordad => "خرداد",
            Self::Tir => "تیر",
            Self::Mordad => "مرداد",
            Self::Shahrivar => "شهریور",
            Self::Mehr => "مهر",
            Self::Aban => "آبان",
            Self::Azar => "آذر",
            Self::Dey => "دی",
            Self::Bahman => "بهمن",
            Self::Esfand => "اسفند",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

// Helper functions

/// The 33-year arithmetic leap rule: 8 leap years per 33-year cycle.
/// This is the single source of truth for leap status; validation and
/// conversion both go through it. Accepts any year so the conversion
/// core can walk years before the epoch.
pub(crate) const fn is_leap(year: i64) -> bool {
    (25 * year + 11).rem_euclid(33) < 8
}

/// Returns whether `year` is a leap year in the Persian calendar.
///
/// # Errors
/// Returns `DateError::InvalidArgument` if `year` is negative; leap
/// status is defined only for non-negative years.
pub fn is_leap_year(year: i32) -> Result<bool, DateError> {
    if year < 0 {
        return Err(DateError::InvalidArgument(year));
    }
    Ok(is_leap(i64::from(year)))
}

/// Effective maximum day of `month` in `year`: the month's standard day
/// count, except Esfand in a leap year which extends to 30.
pub(crate) const fn days_in_month(year: i32, month: Month) -> u8 {
    debug_assert!(year >= 0);

    if matches!(month, Month::Esfand) && is_leap(year as i64) {
        ESFAND_DAYS_LEAP
    } else {
        month.days()
    }
}
