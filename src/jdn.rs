//! Day-ordinal conversion core.
//!
//! Both calendars convert through a single linear day count, the Julian
//! Day Number (JDN). Each direction is a pure function of that ordinal,
//! so the Persian -> Gregorian and Gregorian -> Persian paths share one
//! arithmetic core and cannot drift apart.

use crate::consts::{CYCLE_DAYS, FIRST_HALF_DAYS, PERSIAN_EPOCH_JDN, UNIX_EPOCH_JDN};
use crate::types::is_leap;

/// Number of leap years in `[1, year - 1]` under the 33-year rule.
///
/// Whole cycles contribute 8 leap years each; the partial cycle is
/// scanned by residue (at most 32 steps).
const fn leap_years_before(year: i64) -> i64 {
    let n = year - 1;
    if n <= 0 {
        return 0;
    }
    let mut count = (n / 33) * 8;
    let mut residue = 1;
    while residue <= n % 33 {
        if is_leap(residue) {
            count += 1;
        }
        residue += 1;
    }
    count
}

/// Day of the Persian year, 1-based. Months 1-6 have 31 days,
/// months 7-12 follow at 30 days each.
const fn persian_day_of_year(month: u8, day: u8) -> i64 {
    let m = month as i64;
    let d = day as i64;
    if m <= 6 {
        (m - 1) * 31 + d
    } else {
        FIRST_HALF_DAYS + (m - 7) * 30 + d
    }
}

/// Converts a valid Persian (year, month, day) to its Julian Day Number.
pub(crate) const fn persian_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    PERSIAN_EPOCH_JDN + 365 * (y - 1) + leap_years_before(y) + persian_day_of_year(month, day) - 1
}

/// Converts a Julian Day Number to the Persian (year, month, day)
/// containing it. Exact inverse of [`persian_to_jdn`].
pub(crate) const fn jdn_to_persian(jdn: i64) -> (i32, u8, u8) {
    // Day 0 is 1 Farvardin of year 1. Every 33-year cycle is exactly
    // CYCLE_DAYS long, so cycle and offset split without approximation.
    let days = jdn - PERSIAN_EPOCH_JDN;
    let cycle = days.div_euclid(CYCLE_DAYS);
    let mut rem = days.rem_euclid(CYCLE_DAYS);

    let mut year = cycle * 33 + 1;
    loop {
        let len = if is_leap(year) { 366 } else { 365 };
        if rem < len {
            break;
        }
        rem -= len;
        year += 1;
    }

    // rem is now the 0-based day of the year.
    let (month, day) = if rem < FIRST_HALF_DAYS {
        (rem / 31 + 1, rem % 31 + 1)
    } else {
        let second_half = rem - FIRST_HALF_DAYS;
        (second_half / 30 + 7, second_half % 30 + 1)
    };
    (year as i32, month as u8, day as u8)
}

/// Converts a proleptic Gregorian (year, month, day) to its Julian Day
/// Number, using the standard civil-calendar era decomposition.
pub(crate) const fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_JDN
}

/// Converts a Julian Day Number to the proleptic Gregorian
/// (year, month, day) containing it. Exact inverse of
/// [`gregorian_to_jdn`].
pub(crate) const fn jdn_to_gregorian(jdn: i64) -> (i32, u8, u8) {
    let z = jdn - UNIX_EPOCH_JDN + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}
