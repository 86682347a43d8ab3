//! # almanac-core
//!
//! Core types, error definitions, and settings for easteralmanac.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: type aliases, the error type with its `ensure!` macro, and
//! the process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global settings (reference almanac time).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Proleptic calendar year.
pub type Year = i32;

/// Seconds since the Unix epoch (1970-01-01T00:00:00Z).
pub type Timestamp = i64;

/// Day serial: days since 1970-01-01 in the proleptic Gregorian calendar.
pub type Serial = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedAlmanacTime, Settings};
