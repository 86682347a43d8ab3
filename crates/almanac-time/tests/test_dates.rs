//! Integration tests for `Date` and the calendar helpers.
//!
//! Covers day-by-day consistency of the serial representation, the leap-year
//! rules of both calendars, and the Gregorian reform.

use almanac_time::date::{days_in_month, is_leap_year};
use almanac_time::{CalendarSystem, Date, Month, Weekday};

const G: CalendarSystem = CalendarSystem::Gregorian;
const J: CalendarSystem = CalendarSystem::Julian;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn julian(y: i32, m: u8, d: u8) -> Date {
    Date::from_julian_ymd(y, m, d).unwrap()
}

fn next_weekday(w: Weekday) -> Weekday {
    Weekday::from_ordinal(w.ordinal() % 7 + 1).unwrap()
}

fn next_day(y: i32, m: Month, d: u8, calendar: CalendarSystem) -> (i32, Month, u8) {
    if d < days_in_month(y, m, calendar) {
        (y, m, d + 1)
    } else if m == Month::December {
        (y + 1, Month::January, 1)
    } else {
        (y, Month::from_number(m.number() + 1).unwrap(), 1)
    }
}

// ─── Consistency ──────────────────────────────────────────────────────────────

#[test]
fn consecutive_serials_are_consecutive_days() {
    let start = date(1899, 12, 31);
    let end = date(2101, 1, 1);

    let mut prev = start;
    let mut current = start + 1;
    while current <= end {
        assert_eq!(current.serial(), prev.serial() + 1);
        assert_eq!(current - prev, 1);

        for calendar in [G, J] {
            let (y, m, d) = prev.ymd_in(calendar);
            assert_eq!(
                current.ymd_in(calendar),
                next_day(y, m, d, calendar),
                "{calendar} day after {prev:?}"
            );
            let (cy, cm, cd) = current.ymd_in(calendar);
            assert_eq!(
                Date::from_calendar_ymd(cy, cm.number(), cd, calendar).unwrap(),
                current
            );
        }
        assert_eq!(current.weekday(), next_weekday(prev.weekday()));

        prev = current;
        current = current + 1;
    }
}

#[test]
fn year_lengths() {
    for year in [-401, -400, -100, -1, 0, 1, 1582, 1900, 2000, 2024, 2100] {
        for calendar in [G, J] {
            let total: u32 = (1..=12)
                .map(|m| days_in_month(year, Month::from_number(m).unwrap(), calendar) as u32)
                .sum();
            let expected = if is_leap_year(year, calendar) { 366 } else { 365 };
            assert_eq!(total, expected, "{year} {calendar}");

            let first = Date::from_calendar_ymd(year, 1, 1, calendar).unwrap();
            let next = Date::from_calendar_ymd(year + 1, 1, 1, calendar).unwrap();
            assert_eq!(first.days_between(next), expected as i64, "{year} {calendar}");
        }
    }
}

// ─── Leap years ───────────────────────────────────────────────────────────────

#[test]
fn leap_year_rules() {
    assert!(is_leap_year(2000, G));
    assert!(is_leap_year(2024, G));
    assert!(!is_leap_year(1900, G));
    assert!(!is_leap_year(2100, G));
    assert!(is_leap_year(1900, J));
    assert!(is_leap_year(2100, J));

    // Proleptic years: year 0 is 1 BC.
    assert!(is_leap_year(0, G));
    assert!(is_leap_year(0, J));
    assert!(!is_leap_year(-1, G));
    assert!(!is_leap_year(-100, G));
    assert!(is_leap_year(-100, J));
    assert!(is_leap_year(-400, G));

    assert_eq!(days_in_month(1900, Month::February, G), 28);
    assert_eq!(days_in_month(1900, Month::February, J), 29);
    assert!(Date::from_ymd(1900, 2, 29).is_err());
    assert!(Date::from_julian_ymd(1900, 2, 29).is_ok());
}

// ─── Calendar reform ──────────────────────────────────────────────────────────

#[test]
fn gregorian_reform() {
    // Thursday 4 October 1582 (Julian) was followed by Friday 15 October 1582.
    let last_julian = julian(1582, 10, 4);
    let first_gregorian = date(1582, 10, 15);
    assert_eq!(last_julian + 1, first_gregorian);
    assert_eq!(last_julian.weekday(), Weekday::Thursday);
    assert_eq!(first_gregorian.weekday(), Weekday::Friday);
}

#[test]
fn julian_lags_thirteen_days_in_20th_and_21st_centuries() {
    for year in 1901..=2099 {
        assert_eq!(date(year, 1, 1).days_between(julian(year, 1, 1)), 13, "{year}");
    }
    assert_eq!(julian(2024, 4, 22).ymd(), (2024, Month::May, 5));
}

// ─── Fixed points and range ───────────────────────────────────────────────────

#[test]
fn known_weekdays() {
    assert_eq!(Date::UNIX_EPOCH, date(1970, 1, 1));
    assert_eq!(Date::UNIX_EPOCH.weekday(), Weekday::Thursday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2025, 4, 20).weekday(), Weekday::Sunday);
}

#[test]
fn range_limits() {
    let max = date(Date::MAX_YEAR, 12, 31);
    let min = date(Date::MIN_YEAR, 1, 1);
    assert!(max.add_days(1).is_err());
    assert!(min.add_days(-1).is_err());
    assert!(Date::from_ymd(Date::MAX_YEAR + 1, 1, 1).is_err());
    assert!(Date::from_ymd(Date::MIN_YEAR - 1, 12, 31).is_err());
    assert!(max.add_days(i64::MAX).is_err());
    assert_eq!(max.ymd(), (Date::MAX_YEAR, Month::December, 31));
    assert_eq!(min.ymd(), (Date::MIN_YEAR, Month::January, 1));
}
