//! House layout for a divisional chart.
//!
//! Once each body and the ascendant have a divisional sign, the chart is
//! a whole-sign layout: the ascendant's sign is house 1 and houses 2-12
//! follow in zodiacal order. Every supplied body lands in exactly one
//! house, the one whose sign equals its divisional sign.

use serde::Serialize;

use crate::error::ChartError;
use crate::graha::Graha;
use crate::varga::{Varga, varga_sign};

/// One house of a divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    /// House number, 1-12.
    pub number: u8,
    /// 0-based sign index occupying this house.
    pub sign: u8,
    /// Grahas placed in this house, in input order.
    pub grahas: Vec<Graha>,
}

/// A complete 12-house divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseAssignment {
    /// The scheme this layout was computed under.
    pub varga: Varga,
    /// Divisional sign of the ascendant (house 1's sign).
    pub asc_sign: u8,
    /// The 12 houses in zodiacal order from the ascendant.
    pub houses: [House; 12],
}

impl HouseAssignment {
    /// Divisional sign of a graha, if it was part of the input set.
    pub fn sign_of(&self, graha: Graha) -> Option<u8> {
        self.houses
            .iter()
            .find(|h| h.grahas.contains(&graha))
            .map(|h| h.sign)
    }

    /// House number (1-12) of a graha, if it was part of the input set.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.houses
            .iter()
            .find(|h| h.grahas.contains(&graha))
            .map(|h| h.number)
    }

    /// All grahas in the assignment, in house order.
    pub fn grahas(&self) -> impl Iterator<Item = Graha> + '_ {
        self.houses.iter().flat_map(|h| h.grahas.iter().copied())
    }
}

/// Build the 12-house layout for a varga scheme.
///
/// `bodies` pairs each graha with its sidereal longitude; `asc_lon` is the
/// ascendant's sidereal longitude. Fails with `InvalidLongitude` if any
/// input longitude is non-finite.
pub fn build_houses(
    varga: Varga,
    bodies: &[(Graha, f64)],
    asc_lon: f64,
) -> Result<HouseAssignment, ChartError> {
    let asc_sign = varga_sign(asc_lon, varga)?;

    let mut houses: [House; 12] = std::array::from_fn(|h| House {
        number: (h as u8) + 1,
        sign: (asc_sign + h as u8) % 12,
        grahas: Vec::new(),
    });

    for &(graha, lon) in bodies {
        let sign = varga_sign(lon, varga)?;
        let house_idx = ((sign + 12 - asc_sign) % 12) as usize;
        houses[house_idx].grahas.push(graha);
    }

    Ok(HouseAssignment {
        varga,
        asc_sign,
        houses,
    })
}

/// Build houses from a raw harmonic code.
///
/// Fails with `UnsupportedScheme` when no mapping is registered for the
/// requested harmonic.
pub fn build_houses_by_code(
    code: u16,
    bodies: &[(Graha, f64)],
    asc_lon: f64,
) -> Result<HouseAssignment, ChartError> {
    let varga = Varga::from_code(code).ok_or(ChartError::UnsupportedScheme(code))?;
    build_houses(varga, bodies, asc_lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    fn sample_bodies() -> Vec<(Graha, f64)> {
        ALL_GRAHAS
            .iter()
            .enumerate()
            .map(|(i, &g)| (g, i as f64 * 37.5 + 4.0))
            .collect()
    }

    #[test]
    fn houses_follow_zodiacal_order() {
        let assignment = build_houses(Varga::D1, &sample_bodies(), 100.0).unwrap();
        assert_eq!(assignment.asc_sign, 3); // 100 deg → Karka
        for (h, house) in assignment.houses.iter().enumerate() {
            assert_eq!(house.number, h as u8 + 1);
            assert_eq!(house.sign, (assignment.asc_sign + h as u8) % 12);
        }
    }

    #[test]
    fn every_body_in_exactly_one_house() {
        for &varga in &[Varga::D1, Varga::D9, Varga::D60] {
            let bodies = sample_bodies();
            let assignment = build_houses(varga, &bodies, 12.0).unwrap();
            let total: usize = assignment.houses.iter().map(|h| h.grahas.len()).sum();
            assert_eq!(total, bodies.len(), "varga {varga:?}");
            for &(g, _) in &bodies {
                assert!(assignment.sign_of(g).is_some(), "missing {g:?}");
            }
        }
    }

    #[test]
    fn placement_matches_varga_sign() {
        let bodies = sample_bodies();
        let assignment = build_houses(Varga::D9, &bodies, 12.0).unwrap();
        for &(g, lon) in &bodies {
            let expected = varga_sign(lon, Varga::D9).unwrap();
            assert_eq!(assignment.sign_of(g), Some(expected), "graha {g:?}");
        }
    }

    #[test]
    fn rashi_chart_house_1_holds_asc_sign_bodies() {
        // Asc at 10 deg (Mesha). Surya at 15 deg (Mesha) must be in house 1.
        let assignment = build_houses(Varga::D1, &[(Graha::Surya, 15.0)], 10.0).unwrap();
        assert_eq!(assignment.house_of(Graha::Surya), Some(1));
    }

    #[test]
    fn invalid_longitude_propagates() {
        let err = build_houses(Varga::D9, &[(Graha::Surya, f64::NAN)], 10.0).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLongitude(_)));
        let err = build_houses(Varga::D9, &[], f64::INFINITY).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLongitude(_)));
    }

    #[test]
    fn by_code_rejects_unknown_harmonic() {
        let err = build_houses_by_code(13, &[], 0.0).unwrap_err();
        assert_eq!(err, ChartError::UnsupportedScheme(13));
        assert!(build_houses_by_code(9, &[], 0.0).is_ok());
    }
}
