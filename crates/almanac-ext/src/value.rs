//! `TimeValue`: a timestamp together with the formatter that renders it.

use std::sync::Arc;

use almanac_core::errors::Result;
use almanac_core::Timestamp;
use chrono::{DateTime, Utc};

use crate::formatter::Formatter;
use crate::timezone::utc_date_time;

/// A point in time returned by an almanac provider.
///
/// The value carries its unit (`unix_epoch`), unit group (`group_time`) and
/// display context, and renders through the formatter of the almanac that
/// produced it.
#[derive(Debug, Clone)]
pub struct TimeValue {
    raw: Timestamp,
    context: &'static str,
    formatter: Arc<Formatter>,
}

impl TimeValue {
    /// Unit of [`TimeValue::raw`].
    pub const UNIT: &'static str = "unix_epoch";

    /// Unit group of time values.
    pub const GROUP: &'static str = "group_time";

    /// Wrap `raw` seconds since the Unix epoch.
    pub fn new(raw: Timestamp, context: &'static str, formatter: Arc<Formatter>) -> Self {
        Self {
            raw,
            context,
            formatter,
        }
    }

    /// Seconds since the Unix epoch.
    pub fn raw(&self) -> Timestamp {
        self.raw
    }

    /// Display context (selects the default format).
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// The value as a UTC date-time.
    pub fn date_time(&self) -> Result<DateTime<Utc>> {
        utc_date_time(self.raw)
    }

    /// Render with an explicit strftime-style format.
    pub fn format(&self, fmt: &str) -> Result<String> {
        self.formatter.format(self.raw, fmt)
    }

    /// Render with the default format of the value's context.
    pub fn render(&self) -> Result<String> {
        self.formatter.format_context(self.raw, self.context)
    }
}

/// Renders with the context format; timestamps chrono cannot represent are
/// shown as raw seconds.
impl std::fmt::Display for TimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.render() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{} {}", self.raw, Self::UNIT),
        }
    }
}

impl PartialEq for TimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.context == other.context
    }
}
