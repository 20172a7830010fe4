//! Line-oriented `"u,v"` edge-list text format.
//!
//! One edge per line, endpoints separated by a comma. Blank lines and lines
//! starting with `#` are skipped; surrounding whitespace is tolerated. Each
//! parsed pair becomes one [`Multigraph::add_edge`] call in file order, so
//! repeated lines produce parallel edges and `u,u` lines produce self-loops.

use std::fmt;
use std::fs;
use std::path::Path;

use super::multigraph::{Multigraph, NodeId};

/// Error raised while reading or parsing an edge list.
///
/// Line numbers are 1-based and refer to the raw input, comments and blanks
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListError {
    /// A data line has no `,` separator.
    MissingSeparator {
        /// 1-based line number.
        line: usize,
    },
    /// An endpoint is not a valid 32-bit integer.
    InvalidNodeId {
        /// 1-based line number.
        line: usize,
        /// The offending token, as written.
        token: String,
    },
    /// I/O error (file not found, etc.).
    Io(String),
}

impl fmt::Display for EdgeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeListError::MissingSeparator { line } => {
                write!(f, "line {line}: expected \"u,v\", found no ','")
            }
            EdgeListError::InvalidNodeId { line, token } => {
                write!(f, "line {line}: {token:?} is not a valid node id")
            }
            EdgeListError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for EdgeListError {}

/// Parses an edge list from text.
///
/// # Errors
/// Returns an error on the first malformed line; the line number in the error
/// refers to the raw input.
pub fn parse_edge_list(text: &str) -> Result<Multigraph, EdgeListError> {
    let mut graph = Multigraph::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (u, v) = trimmed
            .split_once(',')
            .ok_or(EdgeListError::MissingSeparator { line })?;
        let u = parse_node(u, line)?;
        let v = parse_node(v, line)?;
        graph.add_edge(u, v);
    }
    Ok(graph)
}

/// Reads and parses an edge list from a file.
///
/// # Errors
/// Returns [`EdgeListError::Io`] if the file cannot be read, or a parse error
/// as in [`parse_edge_list`].
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<Multigraph, EdgeListError> {
    let text =
        fs::read_to_string(path).map_err(|e| EdgeListError::Io(e.to_string()))?;
    parse_edge_list(&text)
}

/// Writes a graph as edge-list text, one line per edge.
///
/// Each edge is emitted exactly once: cross edges as `u,v` with `u` the
/// earlier endpoint in its own adjacency list (`u < v`), self-loops once per
/// pair of adjacency entries. Parsing the output rebuilds the same edge
/// multiset, though not necessarily the same node insertion order.
pub fn write_edge_list(graph: &Multigraph) -> String {
    let mut out = String::new();
    for (u, nbrs) in graph.iter() {
        let mut self_entries = 0usize;
        for &v in nbrs {
            if u < v {
                out.push_str(&format!("{u},{v}\n"));
            } else if u == v {
                self_entries += 1;
            }
        }
        // Each self-loop put two entries in this list.
        for _ in 0..self_entries / 2 {
            out.push_str(&format!("{u},{u}\n"));
        }
    }
    out
}

fn parse_node(token: &str, line: usize) -> Result<NodeId, EdgeListError> {
    token
        .trim()
        .parse()
        .map_err(|_| EdgeListError::InvalidNodeId {
            line,
            token: token.trim().to_string(),
        })
}
