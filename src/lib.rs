mod consts;
mod jdn;
mod prelude;
mod types;

pub use consts::*;
pub use types::{Month, is_leap_year};

use crate::types::{days_in_month, is_leap};
use chrono::{Datelike, Local, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable date in the Persian (Solar Hijri) civil calendar,
/// viewed as year-month-day.
///
/// Every instance is constructed through a validating constructor, so a
/// live value always holds a well-formed triple together with its cached
/// Gregorian equivalent. Ordering compares the cached Gregorian dates;
/// equality and hashing use the Persian fields (the two agree because
/// the mapping between the calendars is one-to-one).
///
/// Values are `Copy` and never mutated; derive a changed date by
/// constructing a new one.
#[derive(Debug, Clone, Copy)]
pub struct PersianDate {
    year: i32,
    month: Month,
    day: u8,
    /// Gregorian equivalent, computed once at construction and used for
    /// all comparisons.
    gregorian: NaiveDate,
}

/// Validation failures for Persian date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `[MIN_YEAR, MAX_YEAR]`.
    #[error("year is out of range: {0} (must be {MIN_YEAR}-{MAX_YEAR})")]
    YearOutOfRange(i32),

    /// Month number outside 1..=12.
    #[error("invalid month number: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),

    /// Day outside the month's valid range for the given year.
    #[error("invalid date '{month} {day}' in year {year}")]
    DayOutOfRange { year: i32, month: Month, day: u8 },

    /// Day 30 of Esfand in a year that is not a leap year. Reported
    /// instead of the generic range failure so the message names the
    /// actual cause.
    #[error("invalid date 'Esfand 30' as {0} is not a leap year")]
    NotLeapYear(i32),

    /// Negative year passed to the standalone leap-year query.
    #[error("year must not be negative: {0}")]
    InvalidArgument(i32),

    /// Text that is not in the canonical `YYYY-MM-DD` form.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

impl PersianDate {
    /// Obtains a Persian date from year, month number and day of month.
    /// Month 1 is Farvardin and month 12 is Esfand.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first violated rule:
    /// `InvalidMonth`, `YearOutOfRange`, `NotLeapYear` or `DayOutOfRange`.
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(year, Month::of(month)?, day)
    }

    /// Obtains a Persian date from year, [`Month`] and day of month.
    ///
    /// # Errors
    /// Returns `YearOutOfRange`, `NotLeapYear` or `DayOutOfRange` if the
    /// triple does not form a valid date.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, DateError> {
        validate(year, month, day)?;
        let ordinal = jdn::persian_to_jdn(year, month.number(), day);
        let (gy, gm, gd) = jdn::jdn_to_gregorian(ordinal);
        // A validated Persian date always maps to exactly one Gregorian
        // date well inside chrono's range.
        let gregorian = NaiveDate::from_ymd_opt(gy, u32::from(gm), u32::from(gd))
            .expect("conversion of a valid Persian date yields a well-formed Gregorian date");
        Ok(Self {
            year,
            month,
            day,
            gregorian,
        })
    }

    /// Obtains the Persian date equivalent to the given Gregorian date.
    ///
    /// The input is trusted to be a well-formed Gregorian date (it
    /// originates from the system clock or an already-valid
    /// [`NaiveDate`]).
    ///
    /// # Errors
    /// Returns `YearOutOfRange` only for Gregorian dates whose Persian
    /// year falls outside `[MIN_YEAR, MAX_YEAR]`, i.e. before 21 March
    /// 621 CE or roughly ten millennia from now.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateError> {
        let ordinal = jdn::gregorian_to_jdn(date.year(), date.month() as u8, date.day() as u8);
        let (py, pm, pd) = jdn::jdn_to_persian(ordinal);
        Self::of(py, pm, pd)
    }

    /// Obtains the current Persian date from the system clock in the
    /// local time zone.
    pub fn now() -> Self {
        Self::from_gregorian(Local::now().date_naive())
            .expect("system clock is within the representable Persian year range")
    }

    /// Returns the year, from 0 to [`MAX_YEAR`]
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month-of-year as a [`Month`]
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the month-of-year, from 1 to 12
    #[inline]
    pub const fn month_value(&self) -> u8 {
        self.month.number()
    }

    /// Returns the day-of-month, from 1 to 31
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the equivalent Gregorian date
    #[inline]
    pub const fn to_gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    /// Returns whether the year of this date is a leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap(self.year as i64)
    }

    /// Checks whether this date and `other` represent the same day
    pub fn is_equal(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    /// Checks whether this date is before `other`
    pub fn is_before(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Checks whether this date is after `other`
    pub fn is_after(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

/// Checks that the triple forms a legal Persian date. Rules apply in
/// order: year bounds, then day bounds against the effective month
/// length (month validity is guaranteed by the enum; the numeric entry
/// point checks it when resolving the ordinal).
fn validate(year: i32, month: Month, day: u8) -> Result<(), DateError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    let max_day = days_in_month(year, month);
    if !(MIN_DAY..=max_day).contains(&day) {
        if month == Month::Esfand && day == ESFAND_DAYS_LEAP && !is_leap(i64::from(year)) {
            return Err(DateError::NotLeapYear(year));
        }
        return Err(DateError::DayOutOfRange { year, month, day });
    }
    Ok(())
}

impl PartialEq for PersianDate {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

impl Eq for PersianDate {}

impl Hash for PersianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.month.hash(state);
        self.day.hash(state);
    }
}

impl PartialOrd for PersianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Comparison delegates to the cached, already-converted
        // representation; a newer date is greater.
        self.gregorian.cmp(&other.gregorian)
    }
}

impl fmt::Display for PersianDate {
    /// Canonical `YYYY-MM-DD` form with zero-padded fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl FromStr for PersianDate {
    type Err = DateError;

    /// Parses exactly the canonical `YYYY-MM-DD` form produced by
    /// `Display`; anything else is `InvalidFormat`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.split(DATE_SEPARATOR);
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };
        let year = year
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        Self::of(year, month, day)
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn greg(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_of_known_fixed_point() {
        // 15 Khordad 1396 == 5 June 2017, pinning the absolute offset.
        let date = PersianDate::of(1396, 3, 15).unwrap();
        assert_eq!(date.to_gregorian(), greg(2017, 6, 5));
        assert_eq!(date.year(), 1396);
        assert_eq!(date.month(), Month::Khordad);
        assert_eq!(date.month_value(), 3);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_new_with_month_enum() {
        let by_number = PersianDate::of(1396, 3, 15).unwrap();
        let by_month = PersianDate::new(1396, Month::Khordad, 15).unwrap();
        assert_eq!(by_number, by_month);
    }

    #[test]
    fn test_from_gregorian() {
        let date = PersianDate::from_gregorian(greg(2017, 6, 5)).unwrap();
        assert_eq!(date, PersianDate::of(1396, 3, 15).unwrap());

        let nowruz = PersianDate::from_gregorian(greg(2024, 3, 20)).unwrap();
        assert_eq!(nowruz, PersianDate::of(1403, 1, 1).unwrap());
    }

    #[test]
    fn test_from_gregorian_before_epoch() {
        let result = PersianDate::from_gregorian(greg(500, 1, 1));
        assert!(matches!(result, Err(DateError::YearOutOfRange(_))));
    }

    #[test]
    fn test_round_trip_month_boundaries() {
        // First and last valid day of every month over a broad range.
        for year in 1..=1500 {
            for month in 1..=12 {
                let month = Month::of(month).unwrap();
                for day in [1, crate::types::days_in_month(year, month)] {
                    let date = PersianDate::new(year, month, day).unwrap();
                    let back = PersianDate::from_gregorian(date.to_gregorian()).unwrap();
                    assert_eq!(date, back, "{date}");
                    assert_eq!(back.to_gregorian(), date.to_gregorian());
                }
            }
        }
    }

    #[test]
    fn test_round_trip_exhaustive_band() {
        // Every single day of a band of years around the present.
        for year in 1390..=1410 {
            for month in 1..=12 {
                let month = Month::of(month).unwrap();
                for day in 1..=crate::types::days_in_month(year, month) {
                    let date = PersianDate::new(year, month, day).unwrap();
                    let back = PersianDate::from_gregorian(date.to_gregorian()).unwrap();
                    assert_eq!(date, back, "{date}");
                }
            }
        }
    }

    #[test]
    fn test_esfand_30_valid_only_in_leap_years() {
        for year in 1370..=1410 {
            let result = PersianDate::of(year, 12, 30);
            if is_leap_year(year).unwrap() {
                let date = result.unwrap();
                assert_eq!(date.day(), 30);
                assert!(date.is_leap_year());
            } else {
                assert_eq!(result, Err(DateError::NotLeapYear(year)), "year {year}");
            }
        }
    }

    #[test]
    fn test_esfand_31_is_generic_range_error() {
        // Day 31 is out of range even in a leap year; only day 30 in a
        // non-leap year gets the specific error.
        assert!(matches!(
            PersianDate::of(1399, 12, 31),
            Err(DateError::DayOutOfRange {
                year: 1399,
                month: Month::Esfand,
                day: 31
            })
        ));
    }

    #[test]
    fn test_invalid_year() {
        assert_eq!(
            PersianDate::of(-1, 1, 1),
            Err(DateError::YearOutOfRange(-1))
        );
        assert_eq!(
            PersianDate::of(MAX_YEAR + 1, 1, 1),
            Err(DateError::YearOutOfRange(MAX_YEAR + 1))
        );
        assert!(PersianDate::of(0, 1, 1).is_ok());
        assert!(PersianDate::of(MAX_YEAR, 12, 29).is_ok());
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            PersianDate::of(1396, 13, 1),
            Err(DateError::InvalidMonth(13))
        );
        assert_eq!(PersianDate::of(1396, 0, 1), Err(DateError::InvalidMonth(0)));
    }

    #[test]
    fn test_invalid_day() {
        for month in 1..=12 {
            assert!(matches!(
                PersianDate::of(1396, month, 32),
                Err(DateError::DayOutOfRange { day: 32, .. })
            ));
        }
        assert!(matches!(
            PersianDate::of(1396, 7, 31),
            Err(DateError::DayOutOfRange { day: 31, .. })
        ));
        assert!(matches!(
            PersianDate::of(1396, 1, 0),
            Err(DateError::DayOutOfRange { day: 0, .. })
        ));
    }

    #[test]
    fn test_ordering_predicates() {
        let a = PersianDate::of(1396, 3, 15).unwrap();
        let b = PersianDate::of(1396, 6, 10).unwrap();
        let c = PersianDate::of(1396, 6, 10).unwrap();

        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_before(&a));
        assert!(!a.is_after(&a));
        assert!(b.is_equal(&c));
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_ordering_across_year_boundary() {
        let end_of_year = PersianDate::of(1399, 12, 30).unwrap();
        let nowruz = PersianDate::of(1400, 1, 1).unwrap();
        assert!(end_of_year.is_before(&nowruz));
        assert_eq!(
            nowruz.to_gregorian(),
            end_of_year.to_gregorian().succ_opt().unwrap()
        );
    }

    #[test]
    fn test_equality_and_hash_over_persian_fields() {
        let a = PersianDate::of(1396, 6, 10).unwrap();
        let b = PersianDate::of(1396, 6, 10).unwrap();
        let c = PersianDate::of(1396, 6, 11).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let hash = |date: &PersianDate| {
            let mut hasher = DefaultHasher::new();
            date.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn test_display_zero_padding() {
        assert_eq!(PersianDate::of(5, 1, 1).unwrap().to_string(), "0005-01-01");
        assert_eq!(
            PersianDate::of(1396, 3, 15).unwrap().to_string(),
            "1396-03-15"
        );
    }

    #[test]
    fn test_from_str_canonical() {
        let date = "1396-03-15".parse::<PersianDate>().unwrap();
        assert_eq!(date, PersianDate::of(1396, 3, 15).unwrap());

        // Whitespace around the canonical form is tolerated.
        let date = " 1396-03-15 ".parse::<PersianDate>().unwrap();
        assert_eq!(date, PersianDate::of(1396, 3, 15).unwrap());
    }

    #[test]
    fn test_from_str_rejects_non_canonical() {
        for input in [
            "",
            "1396",
            "1396-03",
            "1396/03/15",
            "1396-03-15-1",
            "139A-03-15",
        ] {
            assert!(
                matches!(
                    input.parse::<PersianDate>(),
                    Err(DateError::InvalidFormat(_))
                ),
                "input {input:?}"
            );
        }

        // Well-formed text with an invalid date keeps the specific error.
        assert_eq!(
            "1396-13-01".parse::<PersianDate>(),
            Err(DateError::InvalidMonth(13))
        );
        assert_eq!(
            "1396-12-30".parse::<PersianDate>(),
            Err(DateError::NotLeapYear(1396))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PersianDate::of(1396, 12, 30).unwrap_err().to_string(),
            "invalid date 'Esfand 30' as 1396 is not a leap year"
        );
        assert_eq!(
            PersianDate::of(1396, 7, 31).unwrap_err().to_string(),
            "invalid date 'Mehr 31' in year 1396"
        );
        assert_eq!(
            PersianDate::of(-1, 1, 1).unwrap_err().to_string(),
            "year is out of range: -1 (must be 0-9999)"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let date = PersianDate::of(1396, 3, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1396-03-15""#);

        let parsed: PersianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        for json in [r#""1396-12-30""#, r#""1396-13-01""#, r#""not a date""#] {
            let result: Result<PersianDate, _> = serde_json::from_str(json);
            assert!(result.is_err(), "payload {json}");
        }
    }

    #[test]
    fn test_now_matches_clock() {
        let today = Local::now().date_naive();
        let date = PersianDate::now();
        // Allow one day of slack for a midnight rollover between calls.
        let expected = PersianDate::from_gregorian(today).unwrap();
        assert!(date.is_equal(&expected) || date.is_after(&expected));
        assert!(date.year() >= 1404);
    }

    #[test]
    fn test_instance_leap_query() {
        assert!(PersianDate::of(1399, 1, 1).unwrap().is_leap_year());
        assert!(!PersianDate::of(1400, 1, 1).unwrap().is_leap_year());
    }
}
