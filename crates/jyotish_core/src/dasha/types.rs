//! Core types for Vimshottari dasha (planetary period) calculations.
//!
//! The Vimshottari cycle assigns each of the 9 grahas a fixed integer
//! weight in years; the weights sum to 120. Every period at every depth
//! subdivides into nine children in the same cyclic order, scaled by
//! these weights.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::graha::Graha;

/// Vimshottari cycle: lords in order with their integer year weights.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, u32); 9] = [
    (Graha::Ketu, 7),
    (Graha::Shukra, 20),
    (Graha::Surya, 6),
    (Graha::Chandra, 10),
    (Graha::Mangal, 7),
    (Graha::Rahu, 18),
    (Graha::Guru, 16),
    (Graha::Shani, 19),
    (Graha::Buddh, 17),
];

/// Sum of all Vimshottari weights.
pub const TOTAL_WEIGHT: u32 = 120;

/// Conventional year length for nakshatra-based dasha, in days.
pub const DEFAULT_YEAR_DAYS: f64 = 360.0;

/// Position of a lord in the Vimshottari cycle (0-8).
pub fn sequence_position(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&(g, _)| g == lord)
        .expect("all 9 grahas appear in the Vimshottari cycle")
}

/// Vimshottari weight (years of the 120-year cycle) of a lord.
pub fn lord_weight(lord: Graha) -> u32 {
    VIMSHOTTARI_SEQUENCE[sequence_position(lord)].1
}

/// A single dasha period: one node of the period tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Nesting depth: 0 = mahadasha, 1 = antardasha, 2 = pratyantardasha, ...
    pub depth: u8,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration expressed in `day_length`-day years.
    pub fn duration_years(&self, day_length: f64) -> f64 {
        self.duration_days() / day_length
    }

    /// Whether a JD UTC instant falls inside this period.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Errors from dasha expansion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DashaError {
    /// Non-finite or non-positive duration, day length, or start epoch.
    InvalidPeriod(&'static str),
    /// A tree path index is outside 0..9 or addresses no node.
    ChildIndexOutOfRange(usize),
    /// A tree path was empty where a node address was required.
    EmptyPath,
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeriod(msg) => write!(f, "invalid dasha period: {msg}"),
            Self::ChildIndexOutOfRange(idx) => write!(f, "child index out of range: {idx}"),
            Self::EmptyPath => write!(f, "empty dasha tree path"),
        }
    }
}

impl Error for DashaError {}
