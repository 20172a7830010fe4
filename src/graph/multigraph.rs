//! A dynamic append-only undirected multigraph.
//!
//! This representation prioritizes **cheap insertion** and **deterministic
//! iteration**:
//! - node ids and their adjacency lists live in dense vectors, in insertion
//!   order
//! - a hash index maps node id to its dense slot for O(1) lookup
//! - edges are stored symmetrically and never deduplicated, so the structure
//!   is a multigraph by construction
//!
//! There is no removal operation of any kind; adjacency lists only grow.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a graph node. Fixed-width 32-bit, no payload beyond identity.
pub type NodeId = i32;

/// Error returned when querying a node id that was never added to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeNotFound {
    /// The id that was queried.
    pub node: NodeId,
}

impl fmt::Display for NodeNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {} is not in the graph", self.node)
    }
}

impl std::error::Error for NodeNotFound {}

/// An append-only undirected multigraph over [`NodeId`]s.
///
/// `add_edge(u, v)` appends `v` to `u`'s adjacency list and then `u` to `v`'s,
/// so adjacency is always symmetric and a self-loop contributes two entries to
/// the same list (degree 2). Parallel edges simply accumulate.
///
/// Nodes iterate in **insertion order**: the order in which ids first became
/// part of the graph, whether via [`Multigraph::add_node`] or as an endpoint
/// of [`Multigraph::add_edge`].
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `has_node` | \(O(1)\) expected | Hash index lookup |
/// | `add_node` | \(O(1)\) amortized | Idempotent |
/// | `add_edge` | \(O(1)\) amortized | Two appends |
/// | `neighbors` | \(O(1)\) expected | Returns a slice |
/// | `degree` | \(O(1)\) expected | Returns `len` of the list |
/// | `degrees` | \(O(n)\) | Walks nodes in insertion order |
/// | `statistics` | \(O(n \log n)\) | Sorts the degree sequence |
#[derive(Debug, Clone, Default)]
pub struct Multigraph {
    /// Node ids in insertion order.
    nodes: Vec<NodeId>,
    /// Adjacency list for each node, parallel to `nodes`.
    adjacency: Vec<Vec<NodeId>>,
    /// Maps a node id to its slot in the dense vectors.
    index: HashMap<NodeId, usize>,
    /// Total adjacency entries across all lists (always even).
    entry_count: usize,
}

impl Multigraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            entry_count: 0,
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, counting parallel edges and self-loops
    /// with multiplicity.
    pub fn edge_count(&self) -> usize {
        // Every edge contributes exactly two adjacency entries.
        self.entry_count / 2
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` iff `id` has been added to the graph.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Adds a node with an empty adjacency list.
    ///
    /// Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, id: NodeId) {
        self.ensure_node(id);
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Both endpoints are inserted if missing. `v` is appended to `u`'s
    /// adjacency list, then `u` to `v`'s. For a self-loop both appends target
    /// the same list, so the node ends up with two new entries.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        #[cfg(feature = "tracing")]
        tracing::trace!(u, v, "add_edge");

        let su = self.ensure_node(u);
        let sv = self.ensure_node(v);
        self.adjacency[su].push(v);
        self.adjacency[sv].push(u);
        self.entry_count += 2;
    }

    /// Returns the adjacency list of `u` in insertion order, duplicates
    /// included.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `u` was never added.
    pub fn neighbors(&self, u: NodeId) -> Result<&[NodeId], NodeNotFound> {
        self.slot(u).map(|s| self.adjacency[s].as_slice())
    }

    /// Returns the degree of `u`, counted with multiplicity: parallel edges
    /// count once per copy and a self-loop counts 2.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `u` was never added.
    pub fn degree(&self, u: NodeId) -> Result<usize, NodeNotFound> {
        self.slot(u).map(|s| self.adjacency[s].len())
    }

    /// Returns `(node, degree)` pairs for every node, in insertion order.
    pub fn degrees(&self) -> Vec<(NodeId, usize)> {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .map(|(&id, nbrs)| (id, nbrs.len()))
            .collect()
    }

    /// Returns `(node, degree)` pairs computed in parallel.
    ///
    /// Same result and order as [`Multigraph::degrees`].
    #[cfg(feature = "parallel")]
    pub fn par_degrees(&self) -> Vec<(NodeId, usize)> {
        use rayon::prelude::*;

        self.nodes
            .par_iter()
            .zip(self.adjacency.par_iter())
            .map(|(&id, nbrs)| (id, nbrs.len()))
            .collect()
    }

    /// Iterates over node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Iterates over `(node, adjacency list)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.nodes
            .iter()
            .copied()
            .zip(self.adjacency.iter().map(Vec::as_slice))
    }

    /// Computes basic statistics over the degree sequence.
    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.node_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.adjacency.iter().map(Vec::len).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match degrees.as_slice() {
            [] => (0, 0),
            [only] => (*only, *only),
            [first, .., last] => (*first, *last),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        GraphStatistics {
            node_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if node_count == 0 {
                0.0
            } else {
                self.entry_count as f64 / node_count as f64
            },
        }
    }

    /// Returns the dense slot of `id`, or the not-found error.
    fn slot(&self, id: NodeId) -> Result<usize, NodeNotFound> {
        self.index.get(&id).copied().ok_or(NodeNotFound { node: id })
    }

    /// Inserts `id` if missing and returns its dense slot.
    fn ensure_node(&mut self, id: NodeId) -> usize {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        self.index.insert(id, slot);

        #[cfg(feature = "tracing")]
        tracing::trace!(id, slot, "add_node");

        slot
    }

    /// Inserts a node together with its full adjacency list.
    ///
    /// Used by deserialization; the caller is responsible for overall
    /// symmetry of the entries.
    fn insert_adjacency(&mut self, id: NodeId, neighbors: Vec<NodeId>) {
        let slot = self.nodes.len();
        self.nodes.push(id);
        self.entry_count += neighbors.len();
        self.adjacency.push(neighbors);
        self.index.insert(id, slot);
    }
}

/// Statistics about a graph's degree sequence.
///
/// Degrees are multiplicity-counted, so a self-loop adds 2 and parallel edges
/// add 1 per copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges, parallel edges counted per copy.
    pub edge_count: usize,
    /// Minimum degree over all nodes.
    pub min_degree: usize,
    /// Maximum degree over all nodes.
    pub max_degree: usize,
    /// Median degree over all nodes.
    pub median_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}

impl Serialize for Multigraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for (id, nbrs) in self.iter() {
            map.serialize_entry(&id, nbrs)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Multigraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AdjacencyVisitor;

        impl<'de> Visitor<'de> for AdjacencyVisitor {
            type Value = Multigraph;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from node id to neighbor list")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut graph =
                    Multigraph::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, neighbors)) =
                    access.next_entry::<NodeId, Vec<NodeId>>()?
                {
                    if graph.has_node(id) {
                        return Err(de::Error::custom(format!(
                            "duplicate node {id}"
                        )));
                    }
                    graph.insert_adjacency(id, neighbors);
                }
                validate_symmetry(&graph).map_err(de::Error::custom)?;
                Ok(graph)
            }
        }

        deserializer.deserialize_map(AdjacencyVisitor)
    }
}

/// Checks that the adjacency entries describe an undirected multigraph:
/// every neighbor is a known node, cross entries pair up `(u, v)` with
/// `(v, u)`, and self entries come in pairs.
fn validate_symmetry(graph: &Multigraph) -> Result<(), String> {
    let mut balance: HashMap<(NodeId, NodeId), i64> = HashMap::new();
    for (u, nbrs) in graph.iter() {
        let mut self_entries = 0usize;
        for &v in nbrs {
            if !graph.has_node(v) {
                return Err(format!("node {u} lists unknown neighbor {v}"));
            }
            if v == u {
                self_entries += 1;
            } else {
                *balance.entry((u, v)).or_insert(0) += 1;
                *balance.entry((v, u)).or_insert(0) -= 1;
            }
        }
        if self_entries % 2 != 0 {
            return Err(format!("node {u} has an odd number of self entries"));
        }
    }
    if let Some(((u, v), _)) = balance.iter().find(|(_, &count)| count != 0) {
        return Err(format!("entries for edge ({u}, {v}) are not symmetric"));
    }
    Ok(())
}
