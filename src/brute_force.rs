//! Exact minimum vertex cover by exhaustive search over subsets of increasing size.

use log::debug;

use crate::cover::mask_is_vertex_cover;
use crate::cust_error::ProcessingError;
use crate::graph::UGraph;
use crate::subsets::{mask_to_nodes, SizedSubsets};

impl UGraph {

    /// Finds a minimum vertex cover by testing every node subset of size `k` against
    /// the derived edge list, for `k` growing from 1 to `n - 1`, and returning the
    /// first subset of the smallest size that covers.
    ///
    /// Subset sizes are tried in increasing order, so the first hit has minimum size.
    /// Which of several same-sized optimal covers is returned is up to the enumeration
    /// order. A graph without edges is covered by the empty set in O(1). `None` is
    /// only reached when no tried size covers; since some size below `n` always covers
    /// a graph with at least one proper edge, that leaves degenerate inputs like a
    /// self-loop on a single node.
    ///
    /// Worst case O(2^n) subset tests of O(E) each, with no internal timeout. Intended
    /// for graphs of at most a few dozen nodes; callers impose any ceiling, see
    /// [`UGraph::bounded_brute_force_cover`].
    pub fn brute_force_cover(&self) -> Option<Vec<usize>> {
        let edges = self.edges();
        if edges.is_empty() {
            return Some(Vec::new());
        }
        let n = self.num_nodes();
        for k in 1..n {
            for mask in SizedSubsets::new(n, k) {
                if mask_is_vertex_cover(mask, &edges) {
                    return Some(mask_to_nodes(mask));
                }
            }
            debug!("no cover of size {} among {} nodes", k, n);
        }
        None
    }

    /// Size-guarded entry point for callers that must not run the exponential search
    /// unchecked. Refuses graphs with more than `max_nodes` nodes.
    pub fn bounded_brute_force_cover(
        &self,
        max_nodes: usize,
    ) -> Result<Option<Vec<usize>>, ProcessingError> {
        if self.num_nodes() > max_nodes {
            return Err(ProcessingError::SizeLimit(self.num_nodes(), max_nodes));
        }
        Ok(self.brute_force_cover())
    }

}
