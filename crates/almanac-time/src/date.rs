//! `Date` type.
//!
//! A date is stored as a day serial: the number of days since 1970-01-01 in
//! the proleptic Gregorian calendar.  The same serial can be read back in
//! either calendar system, which is how a Julian-calendar Easter is expressed
//! as a Gregorian date.
//!
//! # Conversions
//! Both calendars go through the Julian Day Number (JDN), using floor
//! division throughout so that years ≤ 0 behave like every other year.
//!
//! # Range
//! Years are limited to [`Date::MIN_YEAR`, `Date::MAX_YEAR`] in either
//! calendar; this keeps every intermediate value well inside `i64` and every
//! year inside `i32`.

use almanac_core::errors::{Error, Result};
use almanac_core::{Serial, Year};

use crate::easter::CalendarSystem;
use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Serial);

/// JDN of 1970-01-01 (Gregorian).
const UNIX_EPOCH_JDN: i64 = 2_440_588;

impl Date {
    /// Smallest supported year.
    pub const MIN_YEAR: Year = -999_999;

    /// Largest supported year.
    pub const MAX_YEAR: Year = 999_999;

    /// Serial of 1970-01-01.
    pub const UNIX_EPOCH: Date = Date(0);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial (days since 1970-01-01).
    pub fn from_serial(serial: Serial) -> Result<Self> {
        let (min, max) = serial_bounds();
        if !(min..=max).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{min}, {max}]"
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from a proleptic Gregorian year, month (1–12), and day.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        Self::from_calendar_ymd(year, month, day, CalendarSystem::Gregorian)
    }

    /// Create a date from a proleptic Julian year, month (1–12), and day.
    pub fn from_julian_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        Self::from_calendar_ymd(year, month, day, CalendarSystem::Julian)
    }

    /// Create a date from (year, month, day) read in the given calendar.
    pub fn from_calendar_ymd(
        year: Year,
        month: u8,
        day: u8,
        calendar: CalendarSystem,
    ) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        let month_enum = Month::try_from(month)?;
        let days_in = days_in_month(year, month_enum, calendar);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02} ({calendar})"
            )));
        }
        let jdn = match calendar {
            CalendarSystem::Gregorian => jdn_from_gregorian(year, month, day),
            CalendarSystem::Julian => jdn_from_julian(year, month, day),
        };
        Self::from_serial(jdn - UNIX_EPOCH_JDN)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial (days since 1970-01-01).
    pub fn serial(&self) -> Serial {
        self.0
    }

    /// Return the Julian Day Number of this date.
    pub fn julian_day_number(&self) -> i64 {
        self.0 + UNIX_EPOCH_JDN
    }

    /// Return (year, month, day) in the proleptic Gregorian calendar.
    pub fn ymd(&self) -> (Year, Month, u8) {
        self.ymd_in(CalendarSystem::Gregorian)
    }

    /// Return (year, month, day) in the proleptic Julian calendar.
    pub fn julian_ymd(&self) -> (Year, Month, u8) {
        self.ymd_in(CalendarSystem::Julian)
    }

    /// Return (year, month, day) in the given calendar.
    pub fn ymd_in(&self, calendar: CalendarSystem) -> (Year, Month, u8) {
        let jdn = self.julian_day_number();
        let (y, m, d) = match calendar {
            CalendarSystem::Gregorian => gregorian_from_jdn(jdn),
            CalendarSystem::Julian => julian_from_jdn(jdn),
        };
        let month = Month::from_number(m as u8).expect("JDN conversion yields a month in 1..=12");
        (y as Year, month, d as u8)
    }

    /// Return the Gregorian year.
    pub fn year(&self) -> Year {
        self.ymd().0
    }

    /// Return the Gregorian month.
    pub fn month(&self) -> Month {
        self.ymd().1
    }

    /// Return the Gregorian day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.  Weekdays do not depend on the calendar system.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_julian_day_number(self.julian_day_number())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::Date(format!(
                "date arithmetic: {} + {n} overflows",
                self.0
            ))),
        }
    }

    /// Return the number of days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{d} {m} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{:02}-{d:02})", m.number())
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether `year` is a leap year in the given calendar.
pub fn is_leap_year(year: Year, calendar: CalendarSystem) -> bool {
    match calendar {
        CalendarSystem::Gregorian => {
            (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
        }
        CalendarSystem::Julian => year.rem_euclid(4) == 0,
    }
}

/// Number of days in `month` of `year` in the given calendar.
pub fn days_in_month(year: Year, month: Month, calendar: CalendarSystem) -> u8 {
    match month {
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year, calendar) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn serial_bounds() -> (Serial, Serial) {
    // The Julian calendar runs ahead of the Gregorian one for large positive
    // years and behind it for large negative ones, so take the tighter bound
    // on each side.
    let min = jdn_from_gregorian(Date::MIN_YEAR, 1, 1).max(jdn_from_julian(Date::MIN_YEAR, 1, 1));
    let max =
        jdn_from_gregorian(Date::MAX_YEAR, 12, 31).min(jdn_from_julian(Date::MAX_YEAR, 12, 31));
    (min - UNIX_EPOCH_JDN, max - UNIX_EPOCH_JDN)
}

/// Shift (year, month) so the computational year starts in March.
fn march_based(year: Year, month: u8) -> (i64, i64) {
    let a = (14 - month as i64) / 12;
    (year as i64 + 4800 - a, month as i64 + 12 * a - 3)
}

fn jdn_from_gregorian(year: Year, month: u8, day: u8) -> i64 {
    let (y, m) = march_based(year, month);
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

fn jdn_from_julian(year: Year, month: u8, day: u8) -> i64 {
    let (y, m) = march_based(year, month);
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - 32_083
}

/// Split a day count `e` within a March-based year into (month, day).
fn month_day_from_march_offset(e: i64) -> (i64, i64) {
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    (m + 3 - 12 * (m / 10), day)
}

fn gregorian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let (month, day) = month_day_from_march_offset(e);
    let year = 100 * b + d - 4800 + (month <= 2) as i64;
    (year, month, day)
}

fn julian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let c = jdn + 32_082;
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let (month, day) = month_day_from_march_offset(e);
    let year = d - 4800 + (month <= 2) as i64;
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
