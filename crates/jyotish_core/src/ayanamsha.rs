//! Ayanamsha computation and tropical → sidereal conversion.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (defined by the vernal equinox) and a sidereal zodiac (anchored to
//! fixed stars). As the equinox precesses westward, the ayanamsha
//! increases over time.
//!
//! Each system is defined by its J2000.0 reference value; the value at
//! any epoch adds the IAU general precession in longitude to that
//! reference. Lahiri is the conventional default for Vedic charts.

use jyotish_time::J2000_JD;

use crate::util::normalize_360;

/// IAU 2006 general precession in longitude, degrees per Julian century.
pub const PRECESSION_DEG_PER_CENTURY: f64 = 5_028.796195 / 3600.0;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Sidereal reference systems for ayanamsha computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    /// Indian government standard (Calendar Reform Committee, 1957).
    #[default]
    Lahiri,
    /// Krishnamurti Paddhati (KP): minimal offset from Lahiri.
    KP,
    /// B.V. Raman: zero ayanamsha year approximately 397 CE.
    Raman,
    /// Fagan-Bradley: primary Western sidereal system.
    FaganBradley,
}

/// All supported systems in enum order.
pub const ALL_AYANAMSHA_SYSTEMS: [AyanamshaSystem; 4] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::KP => "KP",
            Self::Raman => "Raman",
            Self::FaganBradley => "Fagan-Bradley",
        }
    }

    /// Reverse lookup from system code.
    pub fn from_code(code: u8) -> Option<AyanamshaSystem> {
        ALL_AYANAMSHA_SYSTEMS.get(code as usize).copied()
    }
}

/// Ayanamsha in degrees at a JD UTC epoch.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd_utc: f64) -> f64 {
    let t = (jd_utc - J2000_JD) / DAYS_PER_CENTURY;
    system.reference_j2000_deg() + PRECESSION_DEG_PER_CENTURY * t
}

/// Convert a tropical longitude to sidereal given an ayanamsha value.
///
/// Total function: `normalize_360(tropical - ayanamsha)`.
pub fn sidereal_longitude(tropical_lon_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsha_deg)
}

/// Convenience: tropical → sidereal for a system at a JD UTC epoch.
pub fn sidereal_from_tropical(tropical_lon_deg: f64, system: AyanamshaSystem, jd_utc: f64) -> f64 {
    sidereal_longitude(tropical_lon_deg, ayanamsha_deg(system, jd_utc))
}
