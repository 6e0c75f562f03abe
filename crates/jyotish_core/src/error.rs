//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_time::TimeError;

/// Errors from chart core calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from civil-time conversion.
    Time(TimeError),
    /// Input longitude is non-finite.
    InvalidLongitude(f64),
    /// No divisional mapping is registered for the requested harmonic.
    UnsupportedScheme(u16),
    /// Failure reported by the external ephemeris adapter.
    Ephemeris(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLongitude(lon) => write!(f, "invalid longitude: {lon}"),
            Self::UnsupportedScheme(code) => write!(f, "unsupported varga scheme: D{code}"),
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
