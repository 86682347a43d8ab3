//! Moveable feasts.
//!
//! Every moveable feast of the Easter cycle sits a fixed number of days from
//! Easter Sunday.  Calendars usually write these as `em - 3`, `em + 38`, …
//! relative to Easter Monday; here the offsets are relative to Easter Sunday.

use almanac_core::errors::Result;
use almanac_core::Year;

use crate::date::Date;
use crate::easter::{compute_easter, CalendarSystem};

/// A feast whose date follows Easter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveableFeast {
    /// Ash Wednesday, start of Lent.
    AshWednesday,
    /// Palm Sunday.
    PalmSunday,
    /// Maundy Thursday.
    MaundyThursday,
    /// Good Friday.
    GoodFriday,
    /// Holy Saturday.
    HolySaturday,
    /// Easter Sunday itself.
    EasterSunday,
    /// Easter Monday.
    EasterMonday,
    /// Ascension Thursday.
    Ascension,
    /// Pentecost (Whit Sunday).
    Pentecost,
    /// Whit Monday.
    WhitMonday,
    /// Trinity Sunday.
    TrinitySunday,
    /// Corpus Christi.
    CorpusChristi,
}

impl MoveableFeast {
    /// All feasts in calendar order.
    pub const ALL: [MoveableFeast; 12] = [
        MoveableFeast::AshWednesday,
        MoveableFeast::PalmSunday,
        MoveableFeast::MaundyThursday,
        MoveableFeast::GoodFriday,
        MoveableFeast::HolySaturday,
        MoveableFeast::EasterSunday,
        MoveableFeast::EasterMonday,
        MoveableFeast::Ascension,
        MoveableFeast::Pentecost,
        MoveableFeast::WhitMonday,
        MoveableFeast::TrinitySunday,
        MoveableFeast::CorpusChristi,
    ];

    /// Days from Easter Sunday (negative before Easter).
    pub fn offset(&self) -> i64 {
        match self {
            MoveableFeast::AshWednesday => -46,
            MoveableFeast::PalmSunday => -7,
            MoveableFeast::MaundyThursday => -3,
            MoveableFeast::GoodFriday => -2,
            MoveableFeast::HolySaturday => -1,
            MoveableFeast::EasterSunday => 0,
            MoveableFeast::EasterMonday => 1,
            MoveableFeast::Ascension => 39,
            MoveableFeast::Pentecost => 49,
            MoveableFeast::WhitMonday => 50,
            MoveableFeast::TrinitySunday => 56,
            MoveableFeast::CorpusChristi => 60,
        }
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            MoveableFeast::AshWednesday => "Ash Wednesday",
            MoveableFeast::PalmSunday => "Palm Sunday",
            MoveableFeast::MaundyThursday => "Maundy Thursday",
            MoveableFeast::GoodFriday => "Good Friday",
            MoveableFeast::HolySaturday => "Holy Saturday",
            MoveableFeast::EasterSunday => "Easter Sunday",
            MoveableFeast::EasterMonday => "Easter Monday",
            MoveableFeast::Ascension => "Ascension",
            MoveableFeast::Pentecost => "Pentecost",
            MoveableFeast::WhitMonday => "Whit Monday",
            MoveableFeast::TrinitySunday => "Trinity Sunday",
            MoveableFeast::CorpusChristi => "Corpus Christi",
        }
    }

    /// Almanac attribute under which the feast is published.
    pub fn attribute(&self) -> &'static str {
        match self {
            MoveableFeast::AshWednesday => "ash_wednesday",
            MoveableFeast::PalmSunday => "palm_sunday",
            MoveableFeast::MaundyThursday => "maundy_thursday",
            MoveableFeast::GoodFriday => "good_friday",
            MoveableFeast::HolySaturday => "holy_saturday",
            MoveableFeast::EasterSunday => "easter_sunday",
            MoveableFeast::EasterMonday => "easter_monday",
            MoveableFeast::Ascension => "ascension",
            MoveableFeast::Pentecost => "pentecost",
            MoveableFeast::WhitMonday => "whit_monday",
            MoveableFeast::TrinitySunday => "trinity_sunday",
            MoveableFeast::CorpusChristi => "corpus_christi",
        }
    }

    /// Look a feast up by its almanac attribute.
    pub fn from_attribute(attr: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.attribute() == attr)
    }

    /// Date of this feast in `year`, computed in `calendar`.
    pub fn date(&self, year: Year, calendar: CalendarSystem) -> Result<Date> {
        easter_sunday(year, calendar)?.add_days(self.offset())
    }
}

impl std::fmt::Display for MoveableFeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Easter Sunday of `year` as a [`Date`].
///
/// For [`CalendarSystem::Julian`] the (month, day) is read in the Julian
/// calendar, so `Date::ymd` returns the Gregorian equivalent.
pub fn easter_sunday(year: Year, calendar: CalendarSystem) -> Result<Date> {
    compute_easter(year, calendar).to_date(year, calendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use crate::weekday::Weekday;

    const G: CalendarSystem = CalendarSystem::Gregorian;

    fn ymd(d: Date) -> (Year, u8, u8) {
        let (y, m, dd) = d.ymd();
        (y, m.number(), dd)
    }

    #[test]
    fn feasts_2025() {
        let cases = [
            (MoveableFeast::AshWednesday, (2025, 3, 5)),
            (MoveableFeast::GoodFriday, (2025, 4, 18)),
            (MoveableFeast::EasterSunday, (2025, 4, 20)),
            (MoveableFeast::EasterMonday, (2025, 4, 21)),
            (MoveableFeast::Ascension, (2025, 5, 29)),
            (MoveableFeast::Pentecost, (2025, 6, 8)),
            (MoveableFeast::WhitMonday, (2025, 6, 9)),
            (MoveableFeast::CorpusChristi, (2025, 6, 19)),
        ];
        for (feast, expected) in cases {
            assert_eq!(ymd(feast.date(2025, G).unwrap()), expected, "{feast}");
        }
    }

    #[test]
    fn ash_wednesday_in_leap_february() {
        // Easter 2008 was on March 23, so Lent began on February 6.
        assert_eq!(
            ymd(MoveableFeast::AshWednesday.date(2008, G).unwrap()),
            (2008, 2, 6)
        );
    }

    #[test]
    fn weekdays() {
        for year in 1900..2100 {
            assert_eq!(
                MoveableFeast::GoodFriday.date(year, G).unwrap().weekday(),
                Weekday::Friday
            );
            assert_eq!(
                MoveableFeast::Ascension.date(year, G).unwrap().weekday(),
                Weekday::Thursday
            );
            assert_eq!(
                MoveableFeast::Pentecost.date(year, G).unwrap().weekday(),
                Weekday::Sunday
            );
        }
    }

    #[test]
    fn orthodox_easter_as_gregorian() {
        let d = easter_sunday(2024, CalendarSystem::Julian).unwrap();
        assert_eq!(d.ymd(), (2024, Month::May, 5));
        assert_eq!(d.julian_ymd(), (2024, Month::April, 22));
    }

    #[test]
    fn attributes_are_unique() {
        for feast in MoveableFeast::ALL {
            assert_eq!(MoveableFeast::from_attribute(feast.attribute()), Some(feast));
        }
        assert_eq!(MoveableFeast::from_attribute("sunrise"), None);
    }
}
