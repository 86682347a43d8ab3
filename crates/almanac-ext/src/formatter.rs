//! Display formatting of almanac values.
//!
//! A [`Formatter`] maps a value *context* (such as `ephem_year`) to its
//! default strftime format and knows the time zone values are rendered in.

use std::collections::BTreeMap;

use almanac_core::errors::{Error, Result};
use almanac_core::Timestamp;
use chrono::format::{Item, StrftimeItems};

use crate::timezone::AlmanacTimeZone;

/// Context of values that are dates within a year (Easter, feasts).
pub const EPHEM_YEAR: &str = "ephem_year";

/// Format used for contexts without a configured format.
pub const FALLBACK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats timestamps for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatter {
    timezone: AlmanacTimeZone,
    time_formats: BTreeMap<String, String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(AlmanacTimeZone::default())
    }
}

impl Formatter {
    /// Formatter in `timezone` with the default `ephem_year` format.
    pub fn new(timezone: AlmanacTimeZone) -> Self {
        let mut time_formats = BTreeMap::new();
        time_formats.insert(EPHEM_YEAR.to_string(), "%Y-%m-%d".to_string());
        Self {
            timezone,
            time_formats,
        }
    }

    /// Set the default format of `context`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `fmt` is not a valid strftime
    /// format, so that rendering a value through its context cannot fail.
    pub fn with_format(
        mut self,
        context: impl Into<String>,
        fmt: impl Into<String>,
    ) -> Result<Self> {
        let fmt = fmt.into();
        validate_format(&fmt)?;
        self.time_formats.insert(context.into(), fmt);
        Ok(self)
    }

    /// Time zone values are rendered in.
    pub fn timezone(&self) -> AlmanacTimeZone {
        self.timezone
    }

    /// Default format of `context`.
    pub fn time_format(&self, context: &str) -> &str {
        self.time_formats
            .get(context)
            .map(String::as_str)
            .unwrap_or(FALLBACK_FORMAT)
    }

    /// Render `ts` with the default format of `context`.
    pub fn format_context(&self, ts: Timestamp, context: &str) -> Result<String> {
        self.format(ts, self.time_format(context))
    }

    /// Render `ts` with an explicit format.
    pub fn format(&self, ts: Timestamp, fmt: &str) -> Result<String> {
        self.timezone.format(ts, fmt)
    }
}

/// Check that `fmt` parses as a strftime format.
pub fn validate_format(fmt: &str) -> Result<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidArgument(format!("invalid time format {fmt:?}")));
    }
    Ok(())
}
