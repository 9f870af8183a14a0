//! Verification of candidate covers against a derived edge list.

use fxhash::FxHashSet;

/// Checks that every edge in `edges` has at least one endpoint in `cover`.
///
/// Stops at the first uncovered edge. An empty edge list verifies vacuously. Reads
/// both inputs only.
pub fn is_vertex_cover(cover: &FxHashSet<usize>, edges: &[(usize, usize)]) -> bool {
    edges.iter().all(|(v, w)| cover.contains(v) || cover.contains(w))
}

/// Bitmask form of [`is_vertex_cover`] with bit `i` standing for node `i`, used by the
/// exhaustive search. Node ids must fit the mask width.
pub fn mask_is_vertex_cover(mask: u64, edges: &[(usize, usize)]) -> bool {
    edges.iter().all(|&(v, w)| mask & (1 << v | 1 << w) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_vertex_cover_test() {
        let edges = vec![(0, 1), (1, 2), (2, 3)];
        assert!(is_vertex_cover(&vec![1, 2].into_iter().collect(), &edges));
        assert!(is_vertex_cover(&vec![0, 1, 2, 3].into_iter().collect(), &edges));
        assert!(!is_vertex_cover(&vec![0, 3].into_iter().collect(), &edges));
        assert!(!is_vertex_cover(&FxHashSet::default(), &edges));
    }

    #[test]
    fn empty_edge_list_test() {
        assert!(is_vertex_cover(&FxHashSet::default(), &[]));
        assert!(mask_is_vertex_cover(0, &[]));
    }

    #[test]
    fn mask_agrees_with_set_test() {
        let graph = crate::samples::graph351();
        let edges = graph.edges();
        for mask in 0u64..(1u64 << graph.num_nodes()) {
            let cover = crate::subsets::mask_to_nodes(mask).into_iter().collect();
            assert_eq!(
                mask_is_vertex_cover(mask, &edges),
                is_vertex_cover(&cover, &edges)
            );
        }
    }

}
