//! A frozen CSR (compressed sparse row) snapshot of a multigraph.
//!
//! CSR stores all adjacency entries in one flat vector with per-node offsets,
//! trading mutability for compactness and cache-friendly scans.
//!
//! Memory layout:
//! - `ids`: node ids in the source graph's insertion order
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets, monotone)
//! - `targets`: flat neighbor entries, row-major
//! - `index`: node id → row, so queries stay keyed by the original ids

use std::collections::HashMap;

use super::multigraph::{Multigraph, NodeId, NodeNotFound};

/// An immutable compressed snapshot of a [`Multigraph`].
///
/// Node order, adjacency order, duplicate entries, and the
/// [`NodeNotFound`] contract all match the source graph; only mutation is
/// gone.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_multigraph` | \(O(n + m)\) | Single pass over the source |
/// | `neighbors` | \(O(1)\) expected | Row slice lookup |
/// | `degree` | \(O(1)\) expected | Offset subtraction |
/// | `degrees` | \(O(n)\) | Walks rows in insertion order |
#[derive(Debug, Clone)]
pub struct CsrMultigraph {
    ids: Vec<NodeId>,
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl CsrMultigraph {
    /// Builds a CSR snapshot from a dynamic multigraph.
    pub fn from_multigraph(graph: &Multigraph) -> Self {
        let n = graph.node_count();

        let mut ids = Vec::with_capacity(n);
        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::new();
        let mut index = HashMap::with_capacity(n);

        offsets.push(0);
        for (row, (id, nbrs)) in graph.iter().enumerate() {
            ids.push(id);
            index.insert(id, row);
            targets.extend_from_slice(nbrs);
            offsets.push(targets.len());
        }

        debug_assert!(offsets.len() == n + 1);
        debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));

        Self {
            ids,
            offsets,
            targets,
            index,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of edges, counting parallel edges and self-loops with
    /// multiplicity.
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Returns `true` if the snapshot has no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns `true` iff `id` is a node of the snapshot.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the adjacency entries of `u`, in the source graph's order.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `u` is not a node of the snapshot.
    pub fn neighbors(&self, u: NodeId) -> Result<&[NodeId], NodeNotFound> {
        let row = self.row(u)?;
        Ok(&self.targets[self.offsets[row]..self.offsets[row + 1]])
    }

    /// Returns the multiplicity-counted degree of `u`.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `u` is not a node of the snapshot.
    pub fn degree(&self, u: NodeId) -> Result<usize, NodeNotFound> {
        let row = self.row(u)?;
        Ok(self.offsets[row + 1] - self.offsets[row])
    }

    /// Returns `(node, degree)` pairs for every node, in the source graph's
    /// insertion order.
    pub fn degrees(&self) -> Vec<(NodeId, usize)> {
        self.ids
            .iter()
            .enumerate()
            .map(|(row, &id)| (id, self.offsets[row + 1] - self.offsets[row]))
            .collect()
    }

    /// Iterates over node ids in the source graph's insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    fn row(&self, id: NodeId) -> Result<usize, NodeNotFound> {
        self.index.get(&id).copied().ok_or(NodeNotFound { node: id })
    }
}

impl Multigraph {
    /// Freezes the graph into a [`CsrMultigraph`] snapshot.
    pub fn to_csr(&self) -> CsrMultigraph {
        CsrMultigraph::from_multigraph(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csr_empty() {
        let csr = Multigraph::new().to_csr();
        assert!(csr.is_empty());
        assert_eq!(csr.node_count(), 0);
        assert_eq!(csr.edge_count(), 0);
        assert_eq!(csr.degrees(), vec![]);
    }

    #[test]
    fn csr_preserves_order_and_degrees() {
        let mut graph = Multigraph::new();
        graph.add_edge(10, 3);
        graph.add_edge(3, 7);
        graph.add_node(-1);

        let csr = graph.to_csr();
        assert_eq!(csr.node_count(), graph.node_count());
        assert_eq!(csr.edge_count(), graph.edge_count());
        assert_eq!(csr.degrees(), graph.degrees());
        assert_eq!(csr.nodes().collect::<Vec<_>>(), vec![10, 3, 7, -1]);
        assert_eq!(csr.neighbors(3).unwrap(), graph.neighbors(3).unwrap());
    }

    #[test]
    fn csr_self_loop_and_parallel_edges() {
        let mut graph = Multigraph::new();
        graph.add_edge(2, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        let csr = graph.to_csr();
        assert_eq!(csr.neighbors(2).unwrap(), &[2, 2, 1, 1]);
        assert_eq!(csr.degree(2).unwrap(), 4);
        assert_eq!(csr.degree(1).unwrap(), 2);
        assert_eq!(csr.edge_count(), 3);
    }

    #[test]
    fn csr_missing_node_is_an_error() {
        let mut graph = Multigraph::new();
        graph.add_edge(1, 2);

        let csr = graph.to_csr();
        assert_eq!(csr.neighbors(9), Err(NodeNotFound { node: 9 }));
        assert_eq!(csr.degree(9), Err(NodeNotFound { node: 9 }));
    }
}
