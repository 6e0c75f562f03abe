//! Sidereal chart calculations for Vedic astrology.
//!
//! This crate provides:
//! - Ayanamsha computation and tropical-to-sidereal conversion
//! - Divisional (varga) chart construction for 15 harmonic schemes
//! - Whole-sign house layouts and vargottama detection
//! - Vimshottari dasha periods with lazy tree expansion
//!
//! Ephemeris access is abstracted behind the [`Ephemeris`] trait; the
//! crate performs no planetary integration of its own. All
//! implementations are clean-room, derived from BPHS conventions and
//! public astronomical formulas.

pub mod ayanamsha;
pub mod dasha;
pub mod ephemeris;
pub mod error;
pub mod graha;
pub mod houses;
pub mod rashi;
pub mod util;
pub mod varga;
pub mod vargottama;

pub use ayanamsha::{
    ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, PRECESSION_DEG_PER_CENTURY, ayanamsha_deg,
    sidereal_from_tropical, sidereal_longitude,
};
pub use dasha::{
    DEFAULT_YEAR_DAYS, DashaError, DashaPeriod, DashaTree, TOTAL_WEIGHT, VIMSHOTTARI_SEQUENCE,
    children_of, expand_children, find_active, mahadashas, vimshottari_balance,
};
pub use ephemeris::{BodyPosition, Ephemeris, sidereal_positions};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha};
pub use houses::{House, HouseAssignment, build_houses, build_houses_by_code};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use util::normalize_360;
pub use varga::{
    ALL_VARGAS, RashiElement, Varga, rashi_element, varga_longitude, varga_rashi_info, varga_sign,
};
pub use vargottama::detect_vargottama;
