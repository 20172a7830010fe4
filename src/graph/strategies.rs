//! Proptest strategies for generating graphs (behind the `proptest` feature).

use proptest::prelude::*;

use super::multigraph::{Multigraph, NodeId};

/// Strategy producing multigraphs built from up to `max_edges` random edges
/// over ids in `-bound..=bound`.
///
/// Self-loops and parallel edges occur naturally.
pub fn multigraph(bound: NodeId, max_edges: usize) -> impl Strategy<Value = Multigraph> {
    proptest::collection::vec((-bound..=bound, -bound..=bound), 0..=max_edges).prop_map(
        |edges| {
            let mut graph = Multigraph::new();
            for (u, v) in edges {
                graph.add_edge(u, v);
            }
            graph
        },
    )
}
