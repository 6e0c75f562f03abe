//! Vimshottari dasha: planetary period calculations.
//!
//! Submodules split the pipeline: [`types`] holds the cycle constants and
//! period/error types, [`balance`] derives the birth balance and the
//! mahadasha row from the Moon's sidereal longitude, [`expand`] subdivides
//! any period into its nine children, and [`tree`] wraps the whole
//! hierarchy behind lazy path addressing.

pub mod balance;
pub mod expand;
pub mod tree;
pub mod types;

pub use balance::{NAKSHATRA_SPAN, mahadashas, vimshottari_balance};
pub use expand::{children_of, expand_children};
pub use tree::{DashaTree, find_active};
pub use types::{
    DEFAULT_YEAR_DAYS, DashaError, DashaPeriod, TOTAL_WEIGHT, VIMSHOTTARI_SEQUENCE, lord_weight,
    sequence_position,
};
