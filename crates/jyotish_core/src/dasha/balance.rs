//! Birth balance and mahadasha row generation.
//!
//! The Moon's sidereal longitude at birth selects the starting lord: each
//! of the 27 nakshatras maps to a lord of the 9-lord cycle (every ninth
//! nakshatra shares a lord). The fraction of the nakshatra already
//! traversed is the fraction of the starting lord's period elapsed
//! before birth, so the first mahadasha is truncated accordingly.

use crate::graha::Graha;
use crate::util::normalize_360;

use super::types::{DashaError, DashaPeriod, VIMSHOTTARI_SEQUENCE};

/// Arc of one nakshatra in degrees (360 / 27).
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Starting lord and elapsed fraction of its period at birth.
///
/// Returns `(lord, elapsed_fraction)` with the fraction in [0, 1).
pub fn vimshottari_balance(moon_sidereal_lon: f64) -> (Graha, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let (lord, _) = VIMSHOTTARI_SEQUENCE[nak_idx % 9];
    let position_in_nak = lon - nak_idx as f64 * NAKSHATRA_SPAN;
    (lord, position_in_nak / NAKSHATRA_SPAN)
}

/// Generate the 9 mahadasha (depth-0) periods from birth inputs.
///
/// The first period is the starting lord's balance; the remaining eight
/// run their full weights, one `day_length`-day year per weight year.
pub fn mahadashas(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    day_length: f64,
) -> Result<Vec<DashaPeriod>, DashaError> {
    if !birth_jd.is_finite() {
        return Err(DashaError::InvalidPeriod("birth_jd must be finite"));
    }
    if !day_length.is_finite() || day_length <= 0.0 {
        return Err(DashaError::InvalidPeriod("day_length must be finite and positive"));
    }
    if !moon_sidereal_lon.is_finite() {
        return Err(DashaError::InvalidPeriod("moon longitude must be finite"));
    }

    let (start_lord, elapsed) = vimshottari_balance(moon_sidereal_lon);
    let start_pos = super::types::sequence_position(start_lord);

    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;
    for i in 0..9 {
        let (lord, weight) = VIMSHOTTARI_SEQUENCE[(start_pos + i) % 9];
        let full_days = weight as f64 * day_length;
        let duration = if i == 0 {
            full_days * (1.0 - elapsed)
        } else {
            full_days
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            depth: 0,
        });
        cursor = end;
    }

    Ok(periods)
}
