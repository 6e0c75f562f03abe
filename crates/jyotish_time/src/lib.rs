//! Civil-time conversion for the jyotish engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (proleptic Gregorian)
//! - `UtcTime`, the canonical UTC calendar representation
//! - Local civil time + IANA timezone → UTC + Julian Day resolution

pub mod error;
pub mod julian;
pub mod local;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, unix_seconds_to_jd,
};
pub use local::{Conversion, LocalMoment, convert_local_to_julian_day, utc_to_local};
pub use utc_time::UtcTime;
