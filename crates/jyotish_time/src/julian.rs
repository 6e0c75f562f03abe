//! Julian Date ↔ calendar conversions.
//!
//! The Julian Day is the continuous day count used as the canonical time
//! axis for all chart computation: JD 0 falls at noon UTC, and the
//! calendar is proleptic Gregorian before its historical adoption.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a proleptic-Gregorian calendar date to Julian Date.
///
/// `day_frac` is the day-of-month with fractional time-of-day, so
/// `15.5` means the 15th at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor() as i64;
    let frac = day_frac - day as f64;

    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045;

    // jdn is the JD at noon of that day
    jdn as f64 - 0.5 + frac
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let jdn = shifted.floor() as i64;
    let frac = shifted - jdn as f64;

    let a = jdn + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as f64 + frac)
}

/// Convert seconds past the Unix epoch to Julian Date.
pub fn unix_seconds_to_jd(unix_s: f64) -> f64 {
    UNIX_EPOCH_JD + unix_s / SECONDS_PER_DAY
}
