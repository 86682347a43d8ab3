//! Error types for easteralmanac.
//!
//! Everything fallible in the workspace returns [`Result`] with the single
//! `thiserror`-derived [`Error`] enum.  The Easter calculation itself is total
//! and never produces one.

use thiserror::Error;

/// The top-level error type used throughout easteralmanac.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, typically a bad configuration value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The queried provider does not answer this attribute.
    ///
    /// The almanac registry treats this as "try the next provider".
    #[error("unknown almanac attribute: {0}")]
    UnknownAttribute(String),

    /// A provider was deregistered without having been registered.
    #[error("almanac provider not registered: {0}")]
    ProviderNotRegistered(String),
}

impl Error {
    /// Return `true` if this error only signals an unrecognized attribute.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self, Error::UnknownAttribute(_))
    }
}

/// Shorthand `Result` type used throughout easteralmanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if the condition is false.
///
/// # Example
/// ```
/// use almanac_core::{ensure, errors::Error};
/// fn valid_hour(h: u32) -> almanac_core::errors::Result<u32> {
///     ensure!(h < 24, "hour must be in [0, 23], got {h}");
///     Ok(h)
/// }
/// assert!(valid_hour(12).is_ok());
/// assert!(valid_hour(24).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
