//! Varga (divisional chart) calculations.
//!
//! A varga divides each 30-degree rashi span into N equal parts and maps
//! each part to a target rashi through a scheme-specific rule. One
//! generic algorithm handles every scheme; the rules themselves are
//! data-driven per BPHS Shodashavarga definitions.

use serde::Serialize;

use crate::error::ChartError;
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Rashi element classification
// ---------------------------------------------------------------------------

/// Rashi element classification (for element-anchored starting rashi).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Determine the element of a rashi by 0-based index.
///
/// Fire: 0,4,8 (Mesha, Simha, Dhanu)
/// Earth: 1,5,9 (Vrishabha, Kanya, Makara)
/// Air: 2,6,10 (Mithuna, Tula, Kumbha)
/// Water: 3,7,11 (Karka, Vrischika, Meena)
pub fn rashi_element(rashi_index: u8) -> RashiElement {
    match rashi_index % 4 {
        0 => RashiElement::Fire,
        1 => RashiElement::Earth,
        2 => RashiElement::Air,
        3 => RashiElement::Water,
        _ => unreachable!(),
    }
}

// ---------------------------------------------------------------------------
// Varga enum
// ---------------------------------------------------------------------------

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varga {
    D1,
    D3,
    D5,
    D6,
    D8,
    D9,
    D10,
    D11,
    D16,
    D20,
    D24,
    D27,
    D40,
    D45,
    D60,
}

/// All supported vargas in order.
pub const ALL_VARGAS: [Varga; 15] = [
    Varga::D1,
    Varga::D3,
    Varga::D5,
    Varga::D6,
    Varga::D8,
    Varga::D9,
    Varga::D10,
    Varga::D11,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

impl Varga {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D3 => 3,
            Self::D5 => 5,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D11 => 11,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Numeric D-number code.
    pub const fn code(self) -> u16 {
        self.divisions()
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "D1_Rashi",
            Self::D3 => "D3_Drekkana",
            Self::D5 => "D5_Panchamsha",
            Self::D6 => "D6_Shashthamsha",
            Self::D8 => "D8_Ashtamsha",
            Self::D9 => "D9_Navamsha",
            Self::D10 => "D10_Dashamsha",
            Self::D11 => "D11_Rudramsha",
            Self::D16 => "D16_Shodashamsha",
            Self::D20 => "D20_Vimshamsha",
            Self::D24 => "D24_Chaturvimshamsha",
            Self::D27 => "D27_Bhamsha",
            Self::D40 => "D40_Khavedamsha",
            Self::D45 => "D45_Akshavedamsha",
            Self::D60 => "D60_Shashtiamsha",
        }
    }

    /// Reverse lookup from D-number code.
    pub fn from_code(code: u16) -> Option<Varga> {
        ALL_VARGAS.into_iter().find(|v| v.code() == code)
    }
}

// ---------------------------------------------------------------------------
// Sequence table (internal)
// ---------------------------------------------------------------------------

/// Determine the target rashi index for a given varga division.
///
/// # Arguments
/// * `varga` - The divisional chart type
/// * `natal_rashi_idx` - 0-based rashi index of the natal position (0=Mesha..11=Meena)
/// * `div_idx` - 0-based division index within the rashi
fn varga_target_rashi(varga: Varga, natal_rashi_idx: u8, div_idx: u16) -> u8 {
    match varga {
        // D1: identity
        Varga::D1 => natal_rashi_idx,

        // D3: trine progression (+4 step)
        Varga::D3 => {
            let start = natal_rashi_idx as u16;
            ((start + div_idx * 4) % 12) as u8
        }

        // INCREMENT vargas: odd rashi = natal start, even rashi = natal + offset
        Varga::D10 => increment_start(natal_rashi_idx, div_idx, 8),
        Varga::D24 => increment_start(natal_rashi_idx, div_idx, 4),
        Varga::D40 => increment_start(natal_rashi_idx, div_idx, 6),

        // Element-anchored vargas: fixed starting rashi per element
        Varga::D9 | Varga::D60 => {
            let start = match rashi_element(natal_rashi_idx) {
                RashiElement::Fire => 0,  // Mesha
                RashiElement::Earth => 9, // Makara
                RashiElement::Air => 6,   // Tula
                RashiElement::Water => 3, // Karka
            };
            ((start + div_idx) % 12) as u8
        }
        Varga::D16 => {
            let start: u16 = match rashi_element(natal_rashi_idx) {
                RashiElement::Fire => 0,  // Mesha
                RashiElement::Earth => 4, // Simha
                RashiElement::Air => 8,   // Dhanu
                RashiElement::Water => 0, // Mesha
            };
            ((start + div_idx) % 12) as u8
        }
        Varga::D20 => {
            let start: u16 = match rashi_element(natal_rashi_idx) {
                RashiElement::Fire => 0,  // Mesha
                RashiElement::Earth => 8, // Dhanu
                RashiElement::Air => 4,   // Simha
                RashiElement::Water => 0, // Mesha
            };
            ((start + div_idx) % 12) as u8
        }

        // Natal-anchored: start from natal rashi, step +1
        Varga::D5 | Varga::D6 | Varga::D8 | Varga::D11 | Varga::D27 | Varga::D45 => {
            let start = natal_rashi_idx as u16;
            ((start + div_idx) % 12) as u8
        }
    }
}

/// Helper for INCREMENT vargas: odd rashi starts from natal, even from natal+offset.
fn increment_start(natal_rashi_idx: u8, div_idx: u16, even_offset: u16) -> u8 {
    // 0-indexed: 0,2,4,6,8,10 are odd rashis (1-based 1,3,5,7,9,11)
    let is_odd = natal_rashi_idx % 2 == 0;
    let start = if is_odd {
        natal_rashi_idx as u16
    } else {
        (natal_rashi_idx as u16 + even_offset) % 12
    };
    ((start + div_idx) % 12) as u8
}

// ---------------------------------------------------------------------------
// Core transformation
// ---------------------------------------------------------------------------

/// Divisional sign (0-11) of a sidereal longitude under a varga scheme.
///
/// Fails with `InvalidLongitude` for non-finite input.
pub fn varga_sign(sidereal_lon: f64, varga: Varga) -> Result<u8, ChartError> {
    if !sidereal_lon.is_finite() {
        return Err(ChartError::InvalidLongitude(sidereal_lon));
    }

    let lon = normalize_360(sidereal_lon);
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let total_divisions = varga.divisions();
    let deg_per_div = 30.0 / total_divisions as f64;

    // Division index, clamped to guard the floating boundary at exactly 30
    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(total_divisions - 1);

    Ok(varga_target_rashi(varga, rashi_idx, div_idx))
}

/// Transform a sidereal longitude through a varga division.
///
/// Returns the varga-transformed sidereal longitude in [0, 360): the
/// divisional sign plus the position-within-division rescaled to a full
/// 30-degree sign.
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> Result<f64, ChartError> {
    if !sidereal_lon.is_finite() {
        return Err(ChartError::InvalidLongitude(sidereal_lon));
    }

    let lon = normalize_360(sidereal_lon);
    if varga == Varga::D1 {
        return Ok(lon);
    }

    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let total_divisions = varga.divisions();
    let deg_per_div = 30.0 / total_divisions as f64;
    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(total_divisions - 1);

    let target_rashi_idx = varga_target_rashi(varga, rashi_idx, div_idx);

    // Scale position within division to 0-30 range
    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled_pos = pos_in_div / deg_per_div * 30.0;

    Ok((target_rashi_idx as f64 * 30.0 + scaled_pos) % 360.0)
}

/// Transform from sidereal longitude, return full RashiInfo.
pub fn varga_rashi_info(sidereal_lon: f64, varga: Varga) -> Result<RashiInfo, ChartError> {
    let lon = varga_longitude(sidereal_lon, varga)?;
    Ok(rashi_from_longitude(lon))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
