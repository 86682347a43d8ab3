//! Global settings.
//!
//! [`Settings`] holds the **almanac time**, the reference timestamp that
//! almanac queries use when the caller does not supply one.  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the almanac time is stored behind a `Mutex` so that it can
//! be changed from any thread.  Tests that change it should use
//! [`ScopedAlmanacTime`] so the previous value is restored.

use std::sync::{Mutex, OnceLock};

use crate::Timestamp;

/// Process-wide settings used by easteralmanac.
///
/// When no almanac time is set, queries fall back to the current wall-clock
/// time.
pub struct Settings {
    almanac_time: Mutex<Option<Timestamp>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            almanac_time: Mutex::new(None),
        })
    }

    /// Return the configured almanac time, or `None` for "now".
    pub fn almanac_time(&self) -> Option<Timestamp> {
        *self.almanac_time.lock().expect("Settings mutex poisoned")
    }

    /// Set the almanac time (seconds since the Unix epoch).
    pub fn set_almanac_time(&self, ts: Timestamp) {
        *self.almanac_time.lock().expect("Settings mutex poisoned") = Some(ts);
    }

    /// Clear the almanac time, resetting it to "use now".
    pub fn reset_almanac_time(&self) {
        *self.almanac_time.lock().expect("Settings mutex poisoned") = None;
    }
}

/// Guard that sets the global almanac time and restores the previous value
/// when dropped.
pub struct ScopedAlmanacTime {
    previous: Option<Timestamp>,
}

impl ScopedAlmanacTime {
    /// Set the almanac time to `ts` until the guard is dropped.
    pub fn new(ts: Timestamp) -> Self {
        let settings = Settings::instance();
        let previous = settings.almanac_time();
        settings.set_almanac_time(ts);
        Self { previous }
    }
}

impl Drop for ScopedAlmanacTime {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(ts) => settings.set_almanac_time(ts),
            None => settings.reset_almanac_time(),
        }
    }
}
