//! Ephemeris adapter boundary.
//!
//! The core never computes raw astronomical positions itself; it consumes
//! them through the [`Ephemeris`] trait. An adapter supplies the tropical
//! ecliptic longitude and speed of a body at a JD UTC epoch, and may
//! override the ayanamsha model. Adapter failures propagate to the caller
//! unchanged; the core performs no retries.

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::ChartError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// A body's tropical state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Tropical ecliptic longitude in degrees, always in [0, 360).
    pub longitude_deg: f64,
    /// Longitudinal speed in degrees per day (negative when retrograde).
    pub speed_deg_per_day: f64,
}

impl BodyPosition {
    /// Construct a position, normalizing the longitude into [0, 360).
    ///
    /// Fails with `InvalidLongitude` for non-finite input.
    pub fn new(longitude_deg: f64, speed_deg_per_day: f64) -> Result<Self, ChartError> {
        if !longitude_deg.is_finite() {
            return Err(ChartError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            longitude_deg: normalize_360(longitude_deg),
            speed_deg_per_day,
        })
    }
}

/// External position provider consumed by the core.
pub trait Ephemeris {
    /// Tropical longitude and speed of a graha at a JD UTC epoch.
    fn body_longitude(&self, jd_utc: f64, graha: Graha) -> Result<BodyPosition, ChartError>;

    /// Ayanamsha in degrees at a JD UTC epoch.
    ///
    /// Defaults to the built-in Lahiri reference model; adapters backed
    /// by a full ephemeris may supply their own value.
    fn ayanamsha_deg(&self, jd_utc: f64) -> f64 {
        ayanamsha_deg(AyanamshaSystem::Lahiri, jd_utc)
    }
}

/// Sidereal longitudes for a set of grahas at one instant.
///
/// One boundary call per body; the first adapter failure aborts the batch.
pub fn sidereal_positions<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_utc: f64,
    grahas: &[Graha],
) -> Result<Vec<(Graha, f64)>, ChartError> {
    let aya = eph.ayanamsha_deg(jd_utc);
    let mut out = Vec::with_capacity(grahas.len());
    for &g in grahas {
        let pos = eph.body_longitude(jd_utc, g)?;
        out.push((g, normalize_360(pos.longitude_deg - aya)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    /// Fixed-table adapter for tests.
    struct FixedEphemeris {
        aya: f64,
    }

    impl Ephemeris for FixedEphemeris {
        fn body_longitude(&self, _jd_utc: f64, graha: Graha) -> Result<BodyPosition, ChartError> {
            BodyPosition::new(graha.index() as f64 * 40.0 + 5.0, 1.0)
        }

        fn ayanamsha_deg(&self, _jd_utc: f64) -> f64 {
            self.aya
        }
    }

    #[test]
    fn position_normalizes() {
        let p = BodyPosition::new(-10.0, 0.5).unwrap();
        assert!((p.longitude_deg - 350.0).abs() < 1e-10);
    }

    #[test]
    fn position_rejects_non_finite() {
        assert!(BodyPosition::new(f64::NAN, 0.0).is_err());
        assert!(BodyPosition::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn batch_applies_ayanamsha() {
        let eph = FixedEphemeris { aya: 24.0 };
        let out = sidereal_positions(&eph, 2_451_545.0, &ALL_GRAHAS).unwrap();
        assert_eq!(out.len(), 9);
        // Surya: tropical 5.0 - 24.0 → 341.0 sidereal
        assert_eq!(out[0].0, Graha::Surya);
        assert!((out[0].1 - 341.0).abs() < 1e-10);
    }
}
