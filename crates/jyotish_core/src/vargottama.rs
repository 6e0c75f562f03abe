//! Vargottama detection.
//!
//! A graha is vargottama when it occupies the same sign in the base Rashi
//! chart (D1) and the Navamsha chart (D9). The comparison is exact
//! integer sign equality, never longitude proximity.

use crate::graha::Graha;
use crate::houses::HouseAssignment;

/// Flag each graha of the Rashi assignment that holds the same sign in
/// the Navamsha assignment.
///
/// Grahas absent from the Navamsha assignment are skipped; the output
/// order follows the Rashi chart's house order.
pub fn detect_vargottama(
    rashi: &HouseAssignment,
    navamsha: &HouseAssignment,
) -> Vec<(Graha, bool)> {
    rashi
        .houses
        .iter()
        .flat_map(|house| {
            house.grahas.iter().filter_map(|&graha| {
                navamsha
                    .sign_of(graha)
                    .map(|nav_sign| (graha, nav_sign == house.sign))
            })
        })
        .collect()
}
