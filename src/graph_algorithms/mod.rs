//! Graph search and shortest-path engines
//!
//! Each engine reads an immutable [`GraphData`] snapshot and records how its
//! frontier evolves. [`GraphAlgorithmResult`] is a superset record: BFS fills
//! `queue`, DFS fills `stack`, Dijkstra fills `distances`; the rest stay empty.
//! Neighbours are edges with `edge.from == current`, in insertion order.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::{Dijkstra, UNREACHABLE};

use crate::errors::{Error, Result};
use crate::structures::GraphData;
use crate::trace::{Step, StepStatus, Trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Algorithm state captured in one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphAlgorithmResult<T> {
    pub graph: GraphData<T>,
    pub visited_nodes: Vec<usize>,
    pub current_node: Option<usize>,
    pub path: Vec<usize>,
    pub distances: BTreeMap<usize, f64>,
    pub queue: Vec<usize>,
    pub stack: Vec<usize>,
}

impl<T> GraphAlgorithmResult<T> {
    pub fn new(graph: GraphData<T>) -> Self {
        GraphAlgorithmResult {
            graph,
            visited_nodes: Vec::new(),
            current_node: None,
            path: Vec::new(),
            distances: BTreeMap::new(),
            queue: Vec::new(),
            stack: Vec::new(),
        }
    }
}

/// A graph algorithm that records its own execution
pub trait GraphAlgorithm {
    fn name(&self) -> &'static str;

    /// Run from `start`, stopping early once `end` (if any) is reached
    fn execute<T: Clone>(
        &self,
        graph: &GraphData<T>,
        start: usize,
        end: Option<usize>,
    ) -> Trace<GraphAlgorithmResult<T>>;
}

/// Tagged dispatch over the graph engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphAlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
}

impl GraphAlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            GraphAlgorithmKind::Bfs => BreadthFirstSearch.name(),
            GraphAlgorithmKind::Dfs => DepthFirstSearch.name(),
            GraphAlgorithmKind::Dijkstra => Dijkstra.name(),
        }
    }

    pub fn execute<T: Clone>(
        self,
        graph: &GraphData<T>,
        start: usize,
        end: Option<usize>,
    ) -> Trace<GraphAlgorithmResult<T>> {
        match self {
            GraphAlgorithmKind::Bfs => BreadthFirstSearch.execute(graph, start, end),
            GraphAlgorithmKind::Dfs => DepthFirstSearch.execute(graph, start, end),
            GraphAlgorithmKind::Dijkstra => Dijkstra.execute(graph, start, end),
        }
    }
}

impl FromStr for GraphAlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(GraphAlgorithmKind::Bfs),
            "dfs" => Ok(GraphAlgorithmKind::Dfs),
            "dijkstra" => Ok(GraphAlgorithmKind::Dijkstra),
            _ => Err(Error::unknown_algorithm(s)),
        }
    }
}

/// Two-step fail-soft trace when `start` or any edge endpoint is outside the graph
///
/// Engines keep ids in range, but a `GraphData` may also come from JSON.
fn reject_invalid<T: Clone>(
    graph: &GraphData<T>,
    name: &str,
    start: usize,
) -> Option<Trace<GraphAlgorithmResult<T>>> {
    let node_count = graph.node_count();
    let (id, message) = if start >= node_count {
        (
            start,
            format!(
                "Error: start node {} does not exist (the graph has {} nodes)",
                start, node_count
            ),
        )
    } else {
        let id = graph
            .edges
            .iter()
            .flat_map(|edge| [edge.from, edge.to])
            .find(|&id| id >= node_count)?;
        (
            id,
            format!(
                "Error: an edge refers to node {}, which does not exist (the graph has {} nodes)",
                id, node_count
            ),
        )
    };

    tracing::warn!(id, node_count, algorithm = name, "node reference out of range");
    let mut trace = Trace::new();
    trace.push(Step::new(
        GraphAlgorithmResult::new(graph.clone()),
        format!("Initial state of the graph. {} cannot start", name),
    ));
    trace.push(
        Step::new(GraphAlgorithmResult::new(graph.clone()), message)
            .with_status(StepStatus::InvalidReference { id, node_count }),
    );
    Some(trace)
}

fn join_ids(ids: &[usize], separator: &str) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
