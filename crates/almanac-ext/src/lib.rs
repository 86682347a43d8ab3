//! # almanac-ext
//!
//! Almanac integration for the Easter calculator.
//!
//! An [`Almanac`] is a query context: a reference time plus a [`Formatter`].
//! Queries go to an [`AlmanacRegistry`], an ordered list of
//! [`AlmanacProvider`]s that is asked front to back until one of them
//! recognizes the attribute.  [`EasterService`] puts an [`EasterAlmanac`] at
//! the front of a registry and takes it out again on shutdown.
//!
//! ```
//! use std::sync::Arc;
//! use almanac_ext::{Almanac, AlmanacRegistry, EasterAlmanac, EasterService};
//!
//! let registry = Arc::new(AlmanacRegistry::new());
//! let service = EasterService::new(Arc::clone(&registry), EasterAlmanac::default());
//!
//! // 2025-01-01T00:00:00Z
//! let almanac = Almanac::utc(1_735_689_600);
//! let easter = almanac.get(&registry, "easter").unwrap();
//! assert_eq!(easter.format("%Y-%m-%d").unwrap(), "2025-04-20");
//!
//! service.shut_down().unwrap();
//! assert!(registry.is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Almanac` query context.
pub mod almanac;

/// The Easter almanac provider.
pub mod easter_almanac;

/// Display formatting of almanac values.
pub mod formatter;

/// `AlmanacProvider` trait and the ordered `AlmanacRegistry`.
pub mod provider;

/// Registration lifecycle of the Easter provider.
pub mod service;

/// Time zone used to derive years and render values.
pub mod timezone;

/// Timestamps bound to a formatter.
pub mod value;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use almanac::Almanac;
pub use easter_almanac::EasterAlmanac;
pub use formatter::Formatter;
pub use provider::{AlmanacProvider, AlmanacRegistry};
pub use service::EasterService;
pub use timezone::AlmanacTimeZone;
pub use value::TimeValue;
