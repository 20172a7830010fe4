//! # `skein` - Append-Only Undirected Multigraphs
//!
//! A small data-structures library built around one core type: [`Multigraph`],
//! an undirected multigraph over 32-bit integer node identifiers. The
//! structure is append-only: nodes and edges can be inserted but never
//! removed, which keeps every operation simple, amortized O(1), and easy to
//! reason about.
//!
//! ## Semantics
//!
//! - **Multigraph by construction**: parallel edges are not deduplicated.
//!   Inserting the same edge twice leaves two entries in both endpoint
//!   adjacency lists.
//! - **Symmetric insertion**: `add_edge(u, v)` appends `v` to `u`'s adjacency
//!   list and `u` to `v`'s, in that order. A self-loop appends twice to the
//!   same list and therefore contributes 2 to the node's degree.
//! - **Deterministic iteration**: nodes iterate in insertion order, so
//!   [`Multigraph::degrees`] is reproducible across runs.
//! - **Explicit failure**: querying a node that was never added is an error
//!   ([`NodeNotFound`]), not an empty result.
//!
//! ## Toolkit
//!
//! Around the core type the crate provides:
//!
//! 1. [`CsrMultigraph`]: a frozen compressed-sparse-row snapshot for compact,
//!    read-only access.
//! 2. An edge-list text format (`"u,v"` per line): [`parse_edge_list`],
//!    [`load_edge_list`], [`write_edge_list`].
//! 3. [`GraphStatistics`]: a degree-distribution summary.
//!
//! ## Cargo features
//!
//! - `parallel`: rayon-backed [`Multigraph::par_degrees`].
//! - `tracing`: trace-level events on mutation paths.
//! - `proptest`: strategies for generating random multigraphs
//!   (`graph::strategies`).
//!
//! ## Example
//!
//! ```rust
//! use skein::Multigraph;
//!
//! let mut graph = Multigraph::new();
//! graph.add_edge(1, 5);
//! graph.add_edge(1, 6);
//!
//! assert!(graph.has_node(1));
//! assert_eq!(graph.neighbors(1).unwrap(), &[5, 6]);
//! assert_eq!(graph.degrees(), vec![(1, 2), (5, 1), (6, 1)]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::edge_list::{
    load_edge_list, parse_edge_list, write_edge_list, EdgeListError,
};
pub use graph::{CsrMultigraph, GraphStatistics, Multigraph, NodeId, NodeNotFound};

// Compile-time layout assertions
const _: () = {
    use core::mem;

    // Node ids are fixed-width 32-bit integers.
    assert!(mem::size_of::<NodeId>() == 4);

    // `NodeNotFound` carries exactly the offending id.
    assert!(mem::size_of::<NodeNotFound>() == mem::size_of::<NodeId>());
};
