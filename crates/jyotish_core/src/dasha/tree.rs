//! Lazy dasha tree with path addressing.
//!
//! The full Vimshottari hierarchy is unbounded in depth, so nothing is
//! materialized eagerly. A tree holds only the nine mahadasha roots; any
//! deeper node is addressed by a path of child indices and re-derived on
//! demand. Derivation is deterministic, so the same path always yields
//! the same node and independent branches may be expanded concurrently.

use super::expand::children_of;
use super::types::{DashaError, DashaPeriod};

/// Lazily expanded Vimshottari period tree.
#[derive(Debug, Clone)]
pub struct DashaTree {
    birth_jd: f64,
    day_length: f64,
    roots: Vec<DashaPeriod>,
}

impl DashaTree {
    /// Build the tree for a birth moment.
    pub fn new(birth_jd: f64, moon_sidereal_lon: f64, day_length: f64) -> Result<Self, DashaError> {
        let roots = super::balance::mahadashas(birth_jd, moon_sidereal_lon, day_length)?;
        Ok(Self {
            birth_jd,
            day_length,
            roots,
        })
    }

    /// Birth epoch (JD UTC) the tree is anchored to.
    pub fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    /// Year-length convention in days, applied at every level.
    pub fn day_length(&self) -> f64 {
        self.day_length
    }

    /// The nine mahadasha (depth-0) periods.
    pub fn roots(&self) -> &[DashaPeriod] {
        &self.roots
    }

    /// Expand any period of this tree one level deeper.
    pub fn children_of(&self, parent: &DashaPeriod) -> Result<[DashaPeriod; 9], DashaError> {
        children_of(parent, self.day_length)
    }

    /// Node addressed by a path of child indices.
    ///
    /// `path[0]` selects a mahadasha (0-8); each further index selects a
    /// child at the next depth. Only the levels along the path are
    /// derived.
    pub fn node_at(&self, path: &[usize]) -> Result<DashaPeriod, DashaError> {
        let (&first, rest) = path.split_first().ok_or(DashaError::EmptyPath)?;
        let mut node = *self
            .roots
            .get(first)
            .ok_or(DashaError::ChildIndexOutOfRange(first))?;
        for &idx in rest {
            let children = self.children_of(&node)?;
            node = *children
                .get(idx)
                .ok_or(DashaError::ChildIndexOutOfRange(idx))?;
        }
        Ok(node)
    }

    /// Chain of active periods at `query_jd`, from depth 0 down to
    /// `max_depth` inclusive.
    ///
    /// Derives only the active branch: O(depth * 9) rather than the full
    /// 9^depth hierarchy. Empty when the query falls outside the cycle.
    pub fn snapshot(&self, query_jd: f64, max_depth: u8) -> Result<Vec<DashaPeriod>, DashaError> {
        let mut chain = Vec::with_capacity(max_depth as usize + 1);
        let Some(idx) = find_active(&self.roots, query_jd) else {
            return Ok(chain);
        };
        let mut current = self.roots[idx];
        chain.push(current);

        for _ in 0..max_depth {
            let children = self.children_of(&current)?;
            match find_active(&children, query_jd) {
                Some(i) => {
                    current = children[i];
                    chain.push(current);
                }
                None => break,
            }
        }
        Ok(chain)
    }
}

/// Index of the period containing `jd`, if any.
pub fn find_active(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    const J2000: f64 = 2_451_545.0;

    fn tree() -> DashaTree {
        DashaTree::new(J2000, 0.0, 360.0).unwrap()
    }

    #[test]
    fn roots_are_nine_mahadashas() {
        let t = tree();
        assert_eq!(t.roots().len(), 9);
        assert_eq!(t.roots()[0].lord, Graha::Ketu);
        assert!(t.roots().iter().all(|p| p.depth == 0));
    }

    #[test]
    fn node_at_single_index_is_root() {
        let t = tree();
        assert_eq!(t.node_at(&[2]).unwrap(), t.roots()[2]);
    }

    #[test]
    fn node_at_matches_manual_expansion() {
        let t = tree();
        let children = t.children_of(&t.roots()[1]).unwrap();
        let grand = t.children_of(&children[4]).unwrap();
        assert_eq!(t.node_at(&[1, 4, 7]).unwrap(), grand[7]);
    }

    #[test]
    fn node_at_is_deterministic() {
        let t = tree();
        let path = [3, 8, 0, 5];
        assert_eq!(t.node_at(&path).unwrap(), t.node_at(&path).unwrap());
    }

    #[test]
    fn deep_path_depth_tag() {
        let t = tree();
        let node = t.node_at(&[0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(node.depth, 5);
        assert_eq!(node.lord, Graha::Ketu); // first child repeats the lord
    }

    #[test]
    fn path_errors() {
        let t = tree();
        assert_eq!(t.node_at(&[]).unwrap_err(), DashaError::EmptyPath);
        assert_eq!(
            t.node_at(&[9]).unwrap_err(),
            DashaError::ChildIndexOutOfRange(9)
        );
        assert_eq!(
            t.node_at(&[0, 12]).unwrap_err(),
            DashaError::ChildIndexOutOfRange(12)
        );
    }

    #[test]
    fn snapshot_chain_is_nested() {
        let t = tree();
        let query = J2000 + 1000.0;
        let chain = t.snapshot(query, 3).unwrap();
        assert_eq!(chain.len(), 4);
        for (depth, period) in chain.iter().enumerate() {
            assert_eq!(period.depth, depth as u8);
            assert!(period.contains(query));
        }
        for pair in chain.windows(2) {
            assert!(pair[0].start_jd <= pair[1].start_jd);
            assert!(pair[1].end_jd <= pair[0].end_jd + 1e-9);
        }
    }

    #[test]
    fn snapshot_outside_cycle_is_empty() {
        let t = tree();
        assert!(t.snapshot(J2000 - 1.0, 2).unwrap().is_empty());
        let end = t.roots().last().unwrap().end_jd;
        assert!(t.snapshot(end + 1.0, 2).unwrap().is_empty());
    }

    #[test]
    fn snapshot_agrees_with_node_at() {
        let t = tree();
        let query = J2000 + 5000.0;
        let chain = t.snapshot(query, 2).unwrap();
        // Rebuild the same chain through explicit paths
        let root_idx = find_active(t.roots(), query).unwrap();
        let children = t.children_of(&chain[0]).unwrap();
        let child_idx = find_active(&children, query).unwrap();
        assert_eq!(chain[0], t.node_at(&[root_idx]).unwrap());
        assert_eq!(chain[1], t.node_at(&[root_idx, child_idx]).unwrap());
    }
}
