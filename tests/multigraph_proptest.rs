use proptest::prelude::*;
use skein::Multigraph;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Operation {
    AddNode(i8),
    AddEdge(i8, i8),
}

/// Applies the operation to the naive model: a map from node id to its
/// adjacency list, mirroring the documented insertion semantics.
fn apply_to_model(model: &mut BTreeMap<i32, Vec<i32>>, op: &Operation) {
    match *op {
        Operation::AddNode(id) => {
            model.entry(i32::from(id)).or_default();
        }
        Operation::AddEdge(u, v) => {
            let (u, v) = (i32::from(u), i32::from(v));
            model.entry(u).or_default();
            model.entry(v).or_default();
            model.get_mut(&u).unwrap().push(v);
            model.get_mut(&v).unwrap().push(u);
        }
    }
}

proptest! {
    #[test]
    fn multigraph_matches_naive_model(ops in proptest::collection::vec(
        prop_oneof![
            any::<i8>().prop_map(Operation::AddNode),
            (any::<i8>(), any::<i8>()).prop_map(|(u, v)| Operation::AddEdge(u, v)),
        ],
        1..200
    )) {
        let mut model: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        let mut graph = Multigraph::new();

        for op in &ops {
            apply_to_model(&mut model, op);
            match *op {
                Operation::AddNode(id) => graph.add_node(i32::from(id)),
                Operation::AddEdge(u, v) => graph.add_edge(i32::from(u), i32::from(v)),
            }
        }

        prop_assert_eq!(graph.node_count(), model.len());

        // Membership and exact adjacency sequences.
        for (&id, neighbors) in &model {
            prop_assert!(graph.has_node(id));
            prop_assert_eq!(graph.neighbors(id).unwrap(), neighbors.as_slice());
            prop_assert_eq!(graph.degree(id).unwrap(), neighbors.len());
        }

        // Handshake lemma with multiplicity: degrees sum to twice the edges.
        let degree_sum: usize = graph.degrees().iter().map(|&(_, d)| d).sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());

        // `degrees()` covers every node exactly once.
        let mut seen: Vec<i32> = graph.degrees().iter().map(|&(id, _)| id).collect();
        seen.sort_unstable();
        let expected: Vec<i32> = model.keys().copied().collect();
        prop_assert_eq!(seen, expected);

        // The frozen snapshot agrees with the dynamic graph.
        let csr = graph.to_csr();
        prop_assert_eq!(csr.degrees(), graph.degrees());
    }

    #[test]
    fn never_added_nodes_always_error(id in any::<i8>()) {
        let graph = Multigraph::new();
        prop_assert!(graph.neighbors(i32::from(id)).is_err());
        prop_assert!(graph.degree(i32::from(id)).is_err());
        prop_assert!(!graph.has_node(i32::from(id)));
    }
}
