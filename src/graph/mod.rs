//! Graph representations and the edge-list text format.
//!
//! - `multigraph`: the dynamic append-only core
//! - `csr`: a frozen compressed snapshot
//! - `edge_list`: `"u,v"`-per-line parsing and writing
//! - `strategies`: proptest generators (behind the `proptest` feature)

pub mod csr;
pub mod edge_list;
pub mod multigraph;
#[cfg(feature = "proptest")]
pub mod strategies;

// Re-export commonly used types from submodules
pub use csr::CsrMultigraph;
pub use multigraph::{GraphStatistics, Multigraph, NodeId, NodeNotFound};
