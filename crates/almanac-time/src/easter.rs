//! Easter Sunday, by the Gauss Easter formula in Heiner Lichtenberg's
//! corrected form.
//!
//! The formula yields Easter as a *day of March*: 1 is March 1, 32 is April 1.
//! [`EasterDate`] turns that into a (month, day) pair.  Everything here is
//! plain integer arithmetic with floor division, so [`compute_easter`] is total
//! over `i32` and never fails.  Results are only historically meaningful for
//! years in which the chosen calendar system was in use.

use std::str::FromStr;

use almanac_core::errors::{Error, Result};
use almanac_core::Year;

use crate::date::Date;
use crate::month::Month;

/// Calendar system the computation is carried out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarSystem {
    /// Gregorian calendar, with the secular lunar and solar corrections.
    #[default]
    Gregorian,
    /// Julian calendar, without secular corrections.
    Julian,
}

impl CalendarSystem {
    /// Return `true` for [`CalendarSystem::Gregorian`].
    pub fn is_gregorian(&self) -> bool {
        matches!(self, CalendarSystem::Gregorian)
    }

    /// Lower-case name, as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "gregorian",
            CalendarSystem::Julian => "julian",
        }
    }
}

/// `true` selects the Gregorian calendar, `false` the Julian one.
impl From<bool> for CalendarSystem {
    fn from(gregorian: bool) -> Self {
        if gregorian {
            CalendarSystem::Gregorian
        } else {
            CalendarSystem::Julian
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarSystem::Gregorian),
            "julian" => Ok(CalendarSystem::Julian),
            other => Err(Error::InvalidArgument(format!(
                "unknown calendar system {other:?} (expected \"gregorian\" or \"julian\")"
            ))),
        }
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Years whose Gregorian Easter was fixed by decree rather than by the
/// formula, as (year, day of March).
///
/// In 1724 and 1744 the Protestant states of the Holy Roman Empire, still on
/// their "improved" calendar, celebrated Easter on a date that differed from
/// the Gregorian computus.
const GREGORIAN_EXCEPTIONS: [(Year, i32); 2] = [(1724, 40), (1744, 29)];

fn exception_day_of_march(year: Year, calendar: CalendarSystem) -> Option<i32> {
    if !calendar.is_gregorian() {
        return None;
    }
    GREGORIAN_EXCEPTIONS
        .iter()
        .find(|(y, _)| *y == year)
        .map(|&(_, dom)| dom)
}

/// Return Easter Sunday of `year` as a day of March (22 ..= 56).
///
/// Values above 31 are in April.  The 1724 and 1744 exceptions are applied
/// for the Gregorian calendar.
///
/// ```
/// use almanac_time::{easter_day_of_march, CalendarSystem};
/// assert_eq!(easter_day_of_march(2025, CalendarSystem::Gregorian), 51);
/// assert_eq!(easter_day_of_march(1724, CalendarSystem::Gregorian), 40);
/// ```
pub fn easter_day_of_march(year: Year, calendar: CalendarSystem) -> i32 {
    if let Some(dom) = exception_day_of_march(year, calendar) {
        return dom;
    }

    // i64 so that `year + year / 4` cannot overflow near i32::MAX.
    let x = year as i64;
    let (m, s) = match calendar {
        CalendarSystem::Gregorian => {
            // secular number
            let k = x.div_euclid(100);
            // secular lunar correction
            let k3 = (3 * k + 3).div_euclid(4);
            let k8 = (8 * k + 13).div_euclid(25);
            // (lunar offset, secular solar correction)
            (15 + k3 - k8, 2 - k3)
        }
        CalendarSystem::Julian => (15, 0),
    };
    // lunar parameter
    let a = x.rem_euclid(19);
    // seed for the first full moon in spring
    let d = (19 * a + m).rem_euclid(30);
    let r = (d + a / 11) / 29;
    // paschal full moon limit
    let og = 21 + d - r;
    // first Sunday in March
    let sz = 7 - (x + x.div_euclid(4) + s).rem_euclid(7);
    // distance from the limit to Easter Sunday
    let oe = 7 - (og - sz).rem_euclid(7);

    (og + oe) as i32
}

/// Compute the date of Easter Sunday in `year`.
///
/// The result is expressed in `calendar`: a Julian result is a date in the
/// Julian calendar (use [`EasterDate::to_date`] to place it on a common time
/// line).
///
/// ```
/// use almanac_time::{compute_easter, CalendarSystem, Month};
/// let easter = compute_easter(2024, CalendarSystem::Gregorian);
/// assert_eq!((easter.month(), easter.day()), (Month::March, 31));
/// ```
pub fn compute_easter(year: Year, calendar: CalendarSystem) -> EasterDate {
    EasterDate::normalize(easter_day_of_march(year, calendar))
}

/// Easter Sunday as a (month, day) pair.  Always in March or April.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EasterDate {
    month: Month,
    day: u8,
}

impl EasterDate {
    /// Largest day-of-March value that still denotes a day in April.
    const LAST_DAY_OF_APRIL: i32 = 61;

    /// Convert a day-of-March value (1 = March 1, 32 = April 1) to a date.
    ///
    /// Returns an error outside 1 ..= 61 (March 1 – April 30).
    pub fn from_day_of_march(value: i32) -> Result<Self> {
        if !(1..=Self::LAST_DAY_OF_APRIL).contains(&value) {
            return Err(Error::Date(format!(
                "day of March {value} out of range [1, {}]",
                Self::LAST_DAY_OF_APRIL
            )));
        }
        Ok(Self::normalize(value))
    }

    /// Split a day-of-March value known to lie in 1 ..= 61.
    fn normalize(value: i32) -> Self {
        if value > 31 {
            EasterDate {
                month: Month::April,
                day: (value - 31) as u8,
            }
        } else {
            EasterDate {
                month: Month::March,
                day: value as u8,
            }
        }
    }

    /// Month (March or April).
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Day-of-March representation (1 = March 1, 32 = April 1).
    pub fn day_of_march(&self) -> i32 {
        match self.month {
            Month::April => self.day as i32 + 31,
            _ => self.day as i32,
        }
    }

    /// Place this date in `year`, reading (month, day) in `calendar`.
    pub fn to_date(&self, year: Year, calendar: CalendarSystem) -> Result<Date> {
        Date::from_calendar_ymd(year, self.month.number(), self.day, calendar)
    }
}

impl std::fmt::Display for EasterDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.day)
    }
}
