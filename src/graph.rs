//! Implementation of a simple, static undirected graph data structure with edge and
//! degree derivation.

use fxhash::FxHashSet;
use rand::Rng;

/// A simple undirected graph stored as ordered adjacency lists over the node ids
/// `0..n`.
///
/// The raw adjacency lists need not be symmetric: an edge may be recorded on one side
/// only. [`UGraph::edges`] treats `(v, w)` and `(w, v)` as the same edge either way.
/// Solvers never mutate the graph.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct UGraph {
    adj_list: Vec<Vec<usize>>,
}

impl UGraph {

    /// Creates a graph from adjacency lists. Every entry must reference a node id
    /// smaller than `adj_list.len()`.
    pub fn from_adj_list(adj_list: Vec<Vec<usize>>) -> Self {
        UGraph {
            adj_list,
        }
    }

    /// Returns an `Iterator` over all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        0..self.adj_list.len()
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the neighborhood of `node` in recording order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj_list[node]
    }

    /// Derives the deduplicated edge list of `self`.
    ///
    /// For each node `v` in id order and each neighbor `w` in recording order, `(v, w)`
    /// is emitted unless the unordered pair was emitted before, so every edge appears
    /// exactly once no matter on how many sides it was recorded. The output order is
    /// deterministic and each edge keeps the orientation it was first encountered in.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
        let mut edges = Vec::new();
        for (node, neighbors) in self.adj_list.iter().enumerate() {
            for &neigh in neighbors {
                let key = if node < neigh { (node, neigh) } else { (neigh, node) };
                if seen.insert(key) {
                    edges.push((node, neigh));
                }
            }
        }
        edges
    }

    /// Counts the degree of every node from a derived edge list. Isolated nodes are
    /// covered with a count of 0.
    ///
    /// Raw adjacency lengths would inflate the counts for edges recorded on both
    /// sides, so the deduplicated edge list is the required input.
    pub fn degree_counts(&self, edges: &[(usize, usize)]) -> Vec<usize> {
        let mut degrees = vec![0; self.adj_list.len()];
        for &(v, w) in edges {
            degrees[v] += 1;
            degrees[w] += 1;
        }
        degrees
    }

    /// Samples a G(n, p) graph, recording each drawn edge on both endpoints.
    pub fn random_gnp<R: Rng>(rng: &mut R, n: usize, p: f64) -> Self {
        let mut adj_list: Vec<Vec<usize>> = vec![Vec::new(); n];
        for v in 0..n {
            for w in (v + 1)..n {
                if rng.gen_bool(p) {
                    adj_list[v].push(w);
                    adj_list[w].push(v);
                }
            }
        }
        UGraph {
            adj_list,
        }
    }

}
