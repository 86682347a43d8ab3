//! Which UTC offset an almanac works in.
//!
//! The offset decides the calendar year of the reference time (a query at
//! 23:30 UTC on December 31 is already next year in Berlin) and the wall
//! clock used when values are formatted.

use std::fmt::Write as _;
use std::str::FromStr;

use almanac_core::errors::{Error, Result};
use almanac_core::{Timestamp, Year};
use chrono::{DateTime, Datelike, FixedOffset, Local, Utc};

/// Time zone of an almanac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlmanacTimeZone {
    /// The process' local time zone.
    #[default]
    Local,
    /// UTC.
    Utc,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl AlmanacTimeZone {
    /// Calendar year of `ts` in this time zone.
    pub fn year_of(&self, ts: Timestamp) -> Result<Year> {
        let utc = utc_date_time(ts)?;
        Ok(match self {
            AlmanacTimeZone::Local => utc.with_timezone(&Local).year(),
            AlmanacTimeZone::Utc => utc.year(),
            AlmanacTimeZone::Fixed(offset) => utc.with_timezone(offset).year(),
        })
    }

    /// Render `ts` in this time zone with a strftime-style format string.
    pub fn format(&self, ts: Timestamp, fmt: &str) -> Result<String> {
        let utc = utc_date_time(ts)?;
        let mut out = String::new();
        let written = match self {
            AlmanacTimeZone::Local => write!(out, "{}", utc.with_timezone(&Local).format(fmt)),
            AlmanacTimeZone::Utc => write!(out, "{}", utc.format(fmt)),
            AlmanacTimeZone::Fixed(offset) => {
                write!(out, "{}", utc.with_timezone(offset).format(fmt))
            }
        };
        written.map_err(|_| Error::InvalidArgument(format!("invalid time format {fmt:?}")))?;
        Ok(out)
    }
}

/// Convert a Unix timestamp to a UTC date-time.
pub(crate) fn utc_date_time(ts: Timestamp) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| Error::Date(format!("timestamp {ts} out of range")))
}

impl FromStr for AlmanacTimeZone {
    type Err = Error;

    /// Parse `"local"`, `"utc"`, or an offset such as `"+01:00"`, `"-0530"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(AlmanacTimeZone::Local),
            "utc" | "z" => return Ok(AlmanacTimeZone::Utc),
            _ => {}
        }
        parse_offset(s)
            .map(AlmanacTimeZone::Fixed)
            .ok_or_else(|| Error::InvalidArgument(format!("invalid time zone {s:?}")))
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first().copied()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl std::fmt::Display for AlmanacTimeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlmanacTimeZone::Local => f.write_str("local"),
            AlmanacTimeZone::Utc => f.write_str("utc"),
            AlmanacTimeZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
