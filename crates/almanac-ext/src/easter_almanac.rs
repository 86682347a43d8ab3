//! The Easter almanac provider.
//!
//! Attributes:
//! * `easter`: Easter Sunday of the almanac's year
//! * `orthodox_easter`: Easter by the Julian computus, as a Gregorian date
//! * every [`MoveableFeast::attribute`] (`good_friday`, `pentecost`, …)
//!
//! Values are timestamps at the configured hour (UTC) of the day in question,
//! in the `ephem_year` display context.

use std::sync::Arc;

use almanac_core::errors::{Error, Result};
use almanac_core::{ensure, Timestamp};
use almanac_time::{easter_sunday, CalendarSystem, Date, MoveableFeast};
use tracing::debug;

use crate::almanac::Almanac;
use crate::formatter::EPHEM_YEAR;
use crate::provider::AlmanacProvider;
use crate::value::TimeValue;

const SECONDS_PER_DAY: i64 = 86_400;

/// Almanac provider for Easter and the feasts that depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct EasterAlmanac {
    calendar: CalendarSystem,
    hour: u32,
}

impl Default for EasterAlmanac {
    fn default() -> Self {
        Self {
            calendar: CalendarSystem::Gregorian,
            hour: Self::DEFAULT_HOUR,
        }
    }
}

impl EasterAlmanac {
    /// Hour of day (UTC) of returned timestamps unless configured otherwise.
    pub const DEFAULT_HOUR: u32 = 12;

    /// Attribute for Easter Sunday in the configured calendar system.
    pub const EASTER: &'static str = "easter";

    /// Attribute for Easter by the Julian computus.
    pub const ORTHODOX_EASTER: &'static str = "orthodox_easter";

    /// Provider computing in `calendar` with timestamps at `hour` UTC.
    pub fn new(calendar: CalendarSystem, hour: u32) -> Result<Self> {
        ensure!(hour < 24, "hour must be in [0, 23], got {hour}");
        Ok(Self { calendar, hour })
    }

    /// Calendar system of `easter` and the feasts.
    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// Hour of day (UTC) of returned timestamps.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Every attribute this provider answers.
    pub fn attributes() -> impl Iterator<Item = &'static str> {
        [Self::EASTER, Self::ORTHODOX_EASTER]
            .into_iter()
            .chain(MoveableFeast::ALL.into_iter().map(|f| f.attribute()))
    }

    fn timestamp(&self, date: Date) -> Timestamp {
        date.serial() * SECONDS_PER_DAY + self.hour as i64 * 3600
    }

    fn date_for(&self, almanac: &Almanac, attr: &str) -> Result<Date> {
        let year = almanac.year()?;
        match attr {
            Self::EASTER => easter_sunday(year, self.calendar),
            Self::ORTHODOX_EASTER => easter_sunday(year, CalendarSystem::Julian),
            other => match MoveableFeast::from_attribute(other) {
                Some(feast) => feast.date(year, self.calendar),
                None => Err(Error::UnknownAttribute(other.to_string())),
            },
        }
    }
}

impl AlmanacProvider for EasterAlmanac {
    fn name(&self) -> &str {
        "Easter"
    }

    fn get_almanac_data(&self, almanac: &Almanac, attr: &str) -> Result<TimeValue> {
        let date = self.date_for(almanac, attr)?;
        debug!(attr, %date, calendar = %self.calendar, "easter almanac");
        Ok(TimeValue::new(
            self.timestamp(date),
            EPHEM_YEAR,
            Arc::clone(almanac.formatter()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-01-01T00:00:00Z
    const JAN_2025: Timestamp = 1_735_689_600;

    #[test]
    fn easter_at_noon_utc() {
        let almanac = Almanac::utc(JAN_2025);
        let v = EasterAlmanac::default()
            .get_almanac_data(&almanac, "easter")
            .unwrap();
        assert_eq!(v.raw(), 1_745_150_400);
        assert_eq!(v.to_string(), "2025-04-20");
    }

    #[test]
    fn configured_hour() {
        let almanac = Almanac::utc(JAN_2025);
        let provider = EasterAlmanac::new(CalendarSystem::Gregorian, 0).unwrap();
        let v = provider.get_almanac_data(&almanac, "easter").unwrap();
        assert_eq!(v.raw(), 1_745_150_400 - 12 * 3600);
        assert!(EasterAlmanac::new(CalendarSystem::Gregorian, 24).is_err());
    }

    #[test]
    fn orthodox_and_feasts() {
        let almanac = Almanac::utc(JAN_2025);
        let provider = EasterAlmanac::default();
        let get = |attr: &str| {
            provider
                .get_almanac_data(&almanac, attr)
                .unwrap()
                .format("%Y-%m-%d")
                .unwrap()
        };
        // In 2025 both computations agree.
        assert_eq!(get("orthodox_easter"), "2025-04-20");
        assert_eq!(get("good_friday"), "2025-04-18");
        assert_eq!(get("pentecost"), "2025-06-08");
    }

    #[test]
    fn julian_calendar_provider() {
        let almanac = Almanac::utc(1_704_067_200); // 2024-01-01
        let provider = EasterAlmanac::new(CalendarSystem::Julian, 12).unwrap();
        let v = provider.get_almanac_data(&almanac, "easter").unwrap();
        assert_eq!(v.format("%Y-%m-%d").unwrap(), "2024-05-05");
    }

    #[test]
    fn unknown_attribute() {
        let almanac = Almanac::utc(JAN_2025);
        let err = EasterAlmanac::default()
            .get_almanac_data(&almanac, "sunrise")
            .unwrap_err();
        assert_eq!(err, Error::UnknownAttribute("sunrise".into()));
    }

    #[test]
    fn attribute_list() {
        let attrs: Vec<_> = EasterAlmanac::attributes().collect();
        assert_eq!(attrs.len(), 2 + MoveableFeast::ALL.len());
        assert!(attrs.contains(&"whit_monday"));
    }
}
