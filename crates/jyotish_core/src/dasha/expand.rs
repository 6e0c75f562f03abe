//! Subdivision of one dasha period into its nine children.
//!
//! Child boundaries are computed from cumulative integer weights rather
//! than a running cursor: child i spans
//! `total_days * csum(w_0..i)/120 .. total_days * csum(w_0..=i)/120`
//! offset from the parent's start. Because the cumulative sum reaches
//! exactly 120, the ninth child's end equals the parent's end by
//! construction and consecutive children share a boundary exactly, at
//! any recursion depth.

use crate::graha::Graha;

use super::types::{DashaError, DashaPeriod, TOTAL_WEIGHT, VIMSHOTTARI_SEQUENCE, sequence_position};

/// Expand a period into its nine immediate children.
///
/// `lord` is the ruling lord of the period being subdivided; the child
/// sequence starts with it and proceeds through the cycle in wraparound
/// order. `duration_years` counts `day_length`-day years. `child_depth`
/// is the depth tag assigned to the children (parent depth + 1).
pub fn expand_children(
    lord: Graha,
    duration_years: f64,
    start_jd: f64,
    day_length: f64,
    child_depth: u8,
) -> Result<[DashaPeriod; 9], DashaError> {
    if !duration_years.is_finite() || duration_years <= 0.0 {
        return Err(DashaError::InvalidPeriod("duration_years must be finite and positive"));
    }
    if !day_length.is_finite() || day_length <= 0.0 {
        return Err(DashaError::InvalidPeriod("day_length must be finite and positive"));
    }
    if !start_jd.is_finite() {
        return Err(DashaError::InvalidPeriod("start_jd must be finite"));
    }

    let total_days = duration_years * day_length;
    let start_pos = sequence_position(lord);

    let mut csum: u32 = 0;
    let children = std::array::from_fn(|i| {
        let (child_lord, weight) = VIMSHOTTARI_SEQUENCE[(start_pos + i) % 9];
        let start = start_jd + total_days * (csum as f64 / TOTAL_WEIGHT as f64);
        csum += weight;
        let end = start_jd + total_days * (csum as f64 / TOTAL_WEIGHT as f64);
        DashaPeriod {
            lord: child_lord,
            start_jd: start,
            end_jd: end,
            depth: child_depth,
        }
    });

    Ok(children)
}

/// Expand an existing period one level deeper.
pub fn children_of(parent: &DashaPeriod, day_length: f64) -> Result<[DashaPeriod; 9], DashaError> {
    if parent.end_jd <= parent.start_jd {
        return Err(DashaError::InvalidPeriod("period end must follow its start"));
    }
    expand_children(
        parent.lord,
        parent.duration_days() / day_length,
        parent.start_jd,
        day_length,
        parent.depth.saturating_add(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DEFAULT_YEAR_DAYS;

    const J2000: f64 = 2_451_545.0;

    #[test]
    fn children_start_with_parent_lord() {
        let children =
            expand_children(Graha::Chandra, 10.0, J2000, DEFAULT_YEAR_DAYS, 1).unwrap();
        assert_eq!(children[0].lord, Graha::Chandra);
        assert_eq!(children[1].lord, Graha::Mangal);
        assert_eq!(children[8].lord, Graha::Surya); // wraps past Buddh to Ketu..Surya
    }

    #[test]
    fn ninth_child_end_is_exact() {
        let children = expand_children(Graha::Ketu, 7.0, J2000, 360.0, 1).unwrap();
        // csum reaches exactly 120, so the factor is exactly 1.0
        assert_eq!(children[8].end_jd, J2000 + 7.0 * 360.0);
    }

    #[test]
    fn children_are_contiguous() {
        let children = expand_children(Graha::Rahu, 18.0, J2000, 365.25, 2).unwrap();
        for i in 1..9 {
            assert_eq!(
                children[i].start_jd,
                children[i - 1].end_jd,
                "gap between children {} and {}",
                i - 1,
                i
            );
        }
    }

    #[test]
    fn durations_proportional_to_weights() {
        let children = expand_children(Graha::Chandra, 10.0, J2000, 360.0, 1).unwrap();
        // Moon child: 10y * 10/120 = 0.8333y = 300 days
        assert!((children[0].duration_days() - 300.0).abs() < 1e-9);
        // Mars child: 10y * 7/120 = 0.5833y = 210 days
        assert!((children[1].duration_days() - 210.0).abs() < 1e-9);
    }

    #[test]
    fn depth_tag_propagates() {
        let children = expand_children(Graha::Surya, 6.0, J2000, 360.0, 3).unwrap();
        assert!(children.iter().all(|c| c.depth == 3));
    }

    #[test]
    fn children_of_increments_depth() {
        let parent = DashaPeriod {
            lord: Graha::Guru,
            start_jd: J2000,
            end_jd: J2000 + 16.0 * 360.0,
            depth: 0,
        };
        let children = children_of(&parent, 360.0).unwrap();
        assert!(children.iter().all(|c| c.depth == 1));
        assert_eq!(children[0].lord, Graha::Guru);
        assert_eq!(children[8].end_jd, parent.end_jd);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(expand_children(Graha::Ketu, 0.0, J2000, 360.0, 1).is_err());
        assert!(expand_children(Graha::Ketu, -1.0, J2000, 360.0, 1).is_err());
        assert!(expand_children(Graha::Ketu, f64::NAN, J2000, 360.0, 1).is_err());
        assert!(expand_children(Graha::Ketu, 7.0, J2000, 0.0, 1).is_err());
        assert!(expand_children(Graha::Ketu, 7.0, f64::NAN, 360.0, 1).is_err());
        let inverted = DashaPeriod {
            lord: Graha::Ketu,
            start_jd: J2000,
            end_jd: J2000 - 1.0,
            depth: 0,
        };
        assert!(children_of(&inverted, 360.0).is_err());
    }

    #[test]
    fn conservation_across_two_levels() {
        let children = expand_children(Graha::Shani, 19.0, J2000, 360.0, 1).unwrap();
        for child in &children {
            let grand = children_of(child, 360.0).unwrap();
            assert_eq!(grand[0].start_jd, child.start_jd);
            // end snaps within floating tolerance of the child's end
            assert!((grand[8].end_jd - child.end_jd).abs() < 1e-6);
            let sum: f64 = grand.iter().map(|g| g.duration_days()).sum();
            assert!((sum - child.duration_days()).abs() / child.duration_days() < 1e-9);
        }
    }
}
