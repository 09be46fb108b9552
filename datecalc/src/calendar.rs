//! Proleptic Gregorian day counting, anchored at 0001-01-01 (a Monday).

use std::fmt;
use biguint::BigUint;
use biguint::error::Result;

pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Days before the first of each month in a common year, plus the year total.
pub const CUMULATIVE_MONTH_DAYS: [u32; 13] =
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

pub fn is_leap_year(year: u32) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Zero based day of the year. `month0` is 0 for January.
pub fn day_of_year(year: u32, month0: u32, day: u32) -> u32 {
  let leap = (month0 > 1 && is_leap_year(year)) as u32;
  CUMULATIVE_MONTH_DAYS[month0 as usize] + leap + day - 1
}

/// Number of days in the years `1 ..= year`.
pub fn days_in_years(year: u32) -> u64 {
  let year      = year as u64;
  let centuries = year / 100;
  let in_cent   = year % 100;
  centuries * 36524 + centuries / 4 + in_cent * 365 + in_cent / 4
}

/// Full days between 0001-01-01 and the given day of `year`.
pub fn days_since_epoch(year: u32, day_of_year: u32) -> u64 {
  days_in_years(year - 1) + day_of_year as u64
}

pub fn seconds_of_day(hour: u32, minute: u32, second: u32) -> u32 {
  second + 60 * minute + 3600 * hour
}

/// Seconds between 0001-01-01T00:00:00 and the given moment.
pub fn seconds_since_epoch(days: u64, hour: u32, minute: u32, second: u32)
  -> Result<BigUint> {
  let per_day = BigUint::from_u32(SECONDS_PER_DAY);
  let whole   = per_day.try_mul(&BigUint::from_u64(days))?;
  let today   = BigUint::from_u32(seconds_of_day(hour, minute, second));
  today.try_add(&whole)
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Weekday {
  Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday
}

impl Weekday {
  const ALL: [Weekday; 7] = [
    Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday,
    Weekday::Friday, Weekday::Saturday, Weekday::Sunday
  ];

  /// The weekday `days` after 0001-01-01.
  pub fn from_days(days: u64) -> Weekday {
    Weekday::ALL[(days % 7) as usize]
  }
}

impl fmt::Display for Weekday {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}
