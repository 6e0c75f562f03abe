//! Error types for civil-time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation and timezone resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The IANA timezone name is not recognized.
    UnknownTimezone(String),
    /// The civil date or time-of-day is malformed (month 13, 25:00, ...).
    InvalidCivilTime(String),
    /// The local date/time does not exist in the zone (spring-forward gap).
    NonexistentLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTimezone(name) => write!(f, "unknown IANA timezone: {name}"),
            Self::InvalidCivilTime(msg) => write!(f, "invalid civil date/time: {msg}"),
            Self::NonexistentLocalTime(msg) => {
                write!(f, "local time does not exist in zone: {msg}")
            }
        }
    }
}

impl Error for TimeError {}
