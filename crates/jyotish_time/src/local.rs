//! Local civil time → UTC → Julian Day conversion.
//!
//! A birth moment arrives as a civil date, a 24-hour time-of-day, and an
//! IANA timezone name. Resolution through the zone's offset rules yields
//! the UTC instant and its continuous Julian Day.
//!
//! DST policy: a local time inside a spring-forward gap is rejected with
//! [`TimeError::NonexistentLocalTime`]; a fall-back ambiguous local time
//! resolves to the **earlier** UTC occurrence.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::unix_seconds_to_jd;
use crate::utc_time::UtcTime;

/// A civil moment: date + time-of-day in a named IANA zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub tz: Tz,
}

impl LocalMoment {
    pub fn new(date: NaiveDate, time: NaiveTime, tz: Tz) -> Self {
        Self { date, time, tz }
    }

    /// Build from raw civil fields plus an IANA timezone name.
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        tz_name: &str,
    ) -> Result<Self, TimeError> {
        let tz: Tz = tz_name
            .parse()
            .map_err(|_| TimeError::UnknownTimezone(tz_name.to_string()))?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| TimeError::InvalidCivilTime(format!("{year:04}-{month:02}-{day:02}")))?;
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidCivilTime(format!("second = {second}")));
        }
        let nanos = (second.fract() * 1e9).round() as u32;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second.floor() as u32, nanos)
            .ok_or_else(|| TimeError::InvalidCivilTime(format!("{hour:02}:{minute:02}")))?;
        Ok(Self::new(date, time, tz))
    }
}

/// Result of converting a civil moment: the UTC calendar time and its
/// continuous Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub utc: UtcTime,
    pub julian_day: f64,
}

/// Resolve a civil moment to UTC and Julian Day.
pub fn convert_local_to_julian_day(moment: &LocalMoment) -> Result<Conversion, TimeError> {
    let naive = NaiveDateTime::new(moment.date, moment.time);
    let zoned = match moment.tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        // Fall-back overlap: take the earlier UTC occurrence
        LocalResult::Ambiguous(earlier, _later) => earlier,
        LocalResult::None => {
            return Err(TimeError::NonexistentLocalTime(format!(
                "{naive} in {}",
                moment.tz
            )));
        }
    };
    Ok(conversion_from_utc(zoned.with_timezone(&Utc)))
}

/// Reconstruct the civil date/time of a UTC instant in a given zone.
///
/// Inverse of [`convert_local_to_julian_day`] for round-trip checks.
pub fn utc_to_local(utc: &UtcTime, tz: Tz) -> Result<(NaiveDate, NaiveTime), TimeError> {
    let date = NaiveDate::from_ymd_opt(utc.year, utc.month, utc.day).ok_or_else(|| {
        TimeError::InvalidCivilTime(format!("{:04}-{:02}-{:02}", utc.year, utc.month, utc.day))
    })?;
    let nanos = (utc.second.fract() * 1e9).round() as u32;
    let time = NaiveTime::from_hms_nano_opt(utc.hour, utc.minute, utc.second.floor() as u32, nanos)
        .ok_or_else(|| TimeError::InvalidCivilTime(format!("{:02}:{:02}", utc.hour, utc.minute)))?;
    let zoned = NaiveDateTime::new(date, time).and_utc().with_timezone(&tz);
    Ok((zoned.date_naive(), zoned.time()))
}

fn conversion_from_utc(utc_dt: DateTime<Utc>) -> Conversion {
    use chrono::Datelike;

    let unix_s = utc_dt.timestamp() as f64 + utc_dt.timestamp_subsec_nanos() as f64 * 1e-9;
    let julian_day = unix_seconds_to_jd(unix_s);
    let utc = UtcTime::new(
        utc_dt.year(),
        utc_dt.month(),
        utc_dt.day(),
        utc_dt.hour(),
        utc_dt.minute(),
        utc_dt.second() as f64 + utc_dt.nanosecond() as f64 * 1e-9,
    );
    Conversion { utc, julian_day }
}
