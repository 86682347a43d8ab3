//! `Almanac`: the context an almanac query is answered in.

use std::sync::Arc;

use almanac_core::errors::Result;
use almanac_core::{Settings, Timestamp, Year};
use chrono::Utc;

use crate::formatter::Formatter;
use crate::provider::AlmanacRegistry;
use crate::timezone::AlmanacTimeZone;
use crate::value::TimeValue;

/// Reference time plus formatter.  Providers derive everything they answer
/// from these two.
#[derive(Debug, Clone)]
pub struct Almanac {
    time_ts: Timestamp,
    formatter: Arc<Formatter>,
}

impl Almanac {
    /// Almanac at `time_ts` with the given formatter.
    pub fn new(time_ts: Timestamp, formatter: Formatter) -> Self {
        Self {
            time_ts,
            formatter: Arc::new(formatter),
        }
    }

    /// Almanac at `time_ts` that works in UTC.
    pub fn utc(time_ts: Timestamp) -> Self {
        Self::new(time_ts, Formatter::new(AlmanacTimeZone::Utc))
    }

    /// Almanac at the global almanac time, or at the current time if none is
    /// set.
    pub fn current(formatter: Formatter) -> Self {
        let time_ts = Settings::instance()
            .almanac_time()
            .unwrap_or_else(|| Utc::now().timestamp());
        Self::new(time_ts, formatter)
    }

    /// The same almanac at a different reference time.
    pub fn with_time(&self, time_ts: Timestamp) -> Self {
        Self {
            time_ts,
            formatter: Arc::clone(&self.formatter),
        }
    }

    /// Reference time in seconds since the Unix epoch.
    pub fn time_ts(&self) -> Timestamp {
        self.time_ts
    }

    /// Formatter shared by all values this almanac produces.
    pub fn formatter(&self) -> &Arc<Formatter> {
        &self.formatter
    }

    /// Calendar year of the reference time in the formatter's time zone.
    pub fn year(&self) -> Result<Year> {
        self.formatter.timezone().year_of(self.time_ts)
    }

    /// Ask `registry` for `attr`.
    pub fn get(&self, registry: &AlmanacRegistry, attr: &str) -> Result<TimeValue> {
        registry.query(self, attr)
    }
}
