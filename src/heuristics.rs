//! Implementation of an approximation and a heuristic for the vertex cover problem.

use std::cmp::Reverse;

use fxhash::FxHashSet;

use crate::cover::is_vertex_cover;
use crate::graph::UGraph;

impl UGraph {

    /// Approximates a minimum vertex cover by scanning the derived edges in order and
    /// taking both endpoints of every edge that is not yet covered (the classical
    /// greedy edge elimination).
    ///
    /// Returns the cover in discovery order together with its size, which equals the
    /// cover length by construction and is at most twice the optimal size. Runs in
    /// O(E).
    pub fn approx_cover(&self) -> (Vec<usize>, usize) {
        let mut cover = Vec::new();
        let mut in_cover: FxHashSet<usize> = FxHashSet::default();
        let mut size = 0;
        for (v, w) in self.edges() {
            if !in_cover.contains(&v) && !in_cover.contains(&w) {
                in_cover.insert(v);
                in_cover.insert(w);
                cover.push(v);
                cover.push(w);
                size += 2;
            }
        }
        (cover, size)
    }

    /// Builds a cover greedily by degree: nodes are appended in order of descending
    /// degree, ties keeping node id order, until the accumulated set covers every
    /// edge.
    ///
    /// No approximation bound holds, the quality depends on the graph structure. Every
    /// append re-verifies against the full edge list, up to O(V * E) in total.
    pub fn degree_heuristic_cover(&self) -> Vec<usize> {
        let edges = self.edges();
        if edges.is_empty() {
            return Vec::new();
        }
        let degrees = self.degree_counts(&edges);
        let mut order: Vec<usize> = self.nodes().collect();
        // Stable sort so equal degrees keep node id order.
        order.sort_by_key(|node| Reverse(degrees[*node]));
        let mut cover = Vec::new();
        let mut in_cover: FxHashSet<usize> = FxHashSet::default();
        for node in order {
            cover.push(node);
            in_cover.insert(node);
            if is_vertex_cover(&in_cover, &edges) {
                break;
            }
        }
        cover
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn verifies(cover: &[usize], graph: &UGraph) -> bool {
        let cover: FxHashSet<usize> = cover.iter().copied().collect();
        is_vertex_cover(&cover, &graph.edges())
    }

    #[test]
    fn approx_graph351_test() {
        let graph = samples::graph351();
        let (cover, size) = graph.approx_cover();
        assert_eq!(size, cover.len());
        assert_eq!(size, 6);
        assert!(size % 2 == 0);
        assert!(verifies(&cover, &graph));
    }

    #[test]
    fn approx_bound_test() {
        // Optimum 5 for the bipartite sample, 6 for the complete one.
        let (cover, size) = samples::bipartite10().approx_cover();
        assert_eq!(size, cover.len());
        assert!(size <= 2 * 5);
        let (cover, size) = samples::complete7().approx_cover();
        assert_eq!(size, cover.len());
        assert!(size <= 2 * 6);
    }

    #[test]
    fn degree_heuristic_graph351_test() {
        let graph = samples::graph351();
        let cover = graph.degree_heuristic_cover();
        assert!(verifies(&cover, &graph));
        // D first (degree 4), then C before E on the degree 3 tie, then B closes the
        // A - B edge.
        assert_eq!(cover, vec![3, 2, 4, 1]);
    }

    #[test]
    fn degree_heuristic_samples_test() {
        for (_, graph) in samples::all() {
            let cover = graph.degree_heuristic_cover();
            assert!(verifies(&cover, &graph));
        }
    }

    #[test]
    fn edgeless_test() {
        let graph = UGraph::from_adj_list(vec![vec![], vec![], vec![]]);
        assert_eq!(graph.approx_cover(), (vec![], 0));
        assert_eq!(graph.degree_heuristic_cover(), Vec::<usize>::new());
    }

    #[test]
    fn random_graphs_test() {
        let mut rng = StdRng::seed_from_u64(351);
        for _ in 0..20 {
            let graph = UGraph::random_gnp(&mut rng, 12, 0.3);
            let optimum = graph.brute_force_cover().expect("covers exist below 64 nodes");
            assert!(verifies(&optimum, &graph));
            let (cover, size) = graph.approx_cover();
            assert!(verifies(&cover, &graph));
            assert_eq!(size, cover.len());
            assert!(size <= 2 * optimum.len());
            let cover = graph.degree_heuristic_cover();
            assert!(verifies(&cover, &graph));
            assert!(optimum.len() <= cover.len());
        }
    }

}
