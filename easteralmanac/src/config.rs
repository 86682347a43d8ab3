//! TOML configuration.
//!
//! ```toml
//! [easter]
//! calendar = "gregorian"   # or "julian"
//! hour = 12                # hour of day (UTC) of returned timestamps
//!
//! [format]
//! timezone = "local"       # "utc", "local" or a fixed offset such as "+01:00"
//! ephem_year = "%Y-%m-%d"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use almanac_core::errors::Result as AlmanacResult;
use almanac_ext::formatter::EPHEM_YEAR;
use almanac_ext::{AlmanacTimeZone, EasterAlmanac, Formatter};
use almanac_time::CalendarSystem;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Easter provider settings.
    #[serde(default)]
    pub easter: EasterToml,

    /// Display settings.
    #[serde(default)]
    pub format: FormatToml,
}

/// `[easter]` table.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EasterToml {
    /// `"gregorian"` or `"julian"`.
    #[serde(default = "default_calendar")]
    pub calendar: String,
    /// Hour of day (UTC) of returned timestamps.
    #[serde(default = "default_hour")]
    pub hour: u32,
}

impl Default for EasterToml {
    fn default() -> Self {
        Self {
            calendar: default_calendar(),
            hour: default_hour(),
        }
    }
}

fn default_calendar() -> String {
    "gregorian".to_string()
}
fn default_hour() -> u32 {
    EasterAlmanac::DEFAULT_HOUR
}

/// `[format]` table.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    /// `"local"`, `"utc"`, or a fixed offset such as `"+01:00"`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Default format of dates within a year.
    #[serde(default = "default_ephem_year")]
    pub ephem_year: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            ephem_year: default_ephem_year(),
        }
    }
}

fn default_timezone() -> String {
    "local".to_string()
}
fn default_ephem_year() -> String {
    "%Y-%m-%d".to_string()
}

impl AlmanacConfig {
    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml_str(&toml_str)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Parse a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Calendar system from `[easter].calendar`.
    pub fn calendar(&self) -> AlmanacResult<CalendarSystem> {
        self.easter.calendar.parse()
    }

    /// Build the Easter provider described by `[easter]`.
    pub fn easter_almanac(&self) -> AlmanacResult<EasterAlmanac> {
        EasterAlmanac::new(self.calendar()?, self.easter.hour)
    }

    /// Build the formatter described by `[format]`.
    pub fn formatter(&self) -> AlmanacResult<Formatter> {
        let timezone: AlmanacTimeZone = self.format.timezone.parse()?;
        Formatter::new(timezone).with_format(EPHEM_YEAR, self.format.ephem_year.clone())
    }
}
