/// Maximum valid Persian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Minimum valid Persian year (inclusive)
pub const MIN_YEAR: i32 = 0;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Days in Esfand during a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each month of a non-leap year (index 0 is unused,
/// months are 1-indexed). Esfand shows 29 days (non-leap default,
/// adjusted by the leap-year check).
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand
];

/// Days in the first six months combined (the 31-day months)
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// The Persian leap cycle repeats every 33 years...
pub(crate) const LEAP_CYCLE_YEARS: i64 = 33;
/// ...and contains exactly 8 leap years
pub(crate) const LEAPS_PER_CYCLE: i64 = 8;
/// Total days in one full 33-year cycle
pub(crate) const CYCLE_DAYS: i64 = LEAP_CYCLE_YEARS * 365 + LEAPS_PER_CYCLE;

/// Julian Day Number of 1 Farvardin, year 1
pub(crate) const PERSIAN_EPOCH_JDN: i64 = 1_948_320;

/// Julian Day Number of Gregorian 1970-01-01
pub(crate) const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Date component separator for the canonical `YYYY-MM-DD` form
pub const DATE_SEPARATOR: char = '-';
