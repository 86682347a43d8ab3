//! # almanac-time
//!
//! Month and weekday enums, a proleptic [`Date`], the Gauss/Lichtenberg
//! Easter calculator, and the moveable feasts that hang off Easter Sunday.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type (proleptic Gregorian / Julian).
pub mod date;

/// Easter Sunday calculation.
pub mod easter;

/// Moveable feasts defined relative to Easter Sunday.
pub mod feasts;

/// `Month` enum.
pub mod month;

/// `Weekday` enum.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{compute_easter, easter_day_of_march, CalendarSystem, EasterDate};
pub use feasts::{easter_sunday, MoveableFeast};
pub use month::Month;
pub use weekday::Weekday;
