//! # easteralmanac
//!
//! Easter Sunday by the Gauss/Lichtenberg formula, packaged as an almanac
//! provider.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! TOML configuration.  The `easteralmanac` binary is a command-line front
//! end to the same functionality.
//!
//! ```rust
//! use easteralmanac::time::{compute_easter, CalendarSystem, Month};
//!
//! let easter = compute_easter(2025, CalendarSystem::Gregorian);
//! assert_eq!((easter.month(), easter.day()), (Month::April, 20));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use almanac_core as core;

/// Dates, the Easter calculator, and moveable feasts.
pub use almanac_time as time;

/// Almanac registry and the Easter provider.
pub use almanac_ext as ext;

/// TOML configuration.
pub mod config;

pub use almanac_time::{compute_easter, CalendarSystem, EasterDate};
pub use config::AlmanacConfig;
