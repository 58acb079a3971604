//! Directed and undirected graphs
//!
//! Node ids are insertion positions and never change; nodes cannot be removed.
//! An undirected edge is stored as two directed records, the logical edge
//! followed immediately by its reciprocal. [`GraphData::unique_edges`] undoes
//! that duplication for consumers.

use crate::trace::{Step, StepStatus, Trace};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode<T> {
    pub id: usize,
    pub value: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Immutable graph snapshot, also the input of the graph algorithms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData<T> {
    pub nodes: Vec<GraphNode<T>>,
    pub edges: Vec<GraphEdge>,
    pub directed: bool,
}

impl<T> GraphData<T> {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Outgoing edges of `id`, in insertion order
    pub fn outgoing(&self, id: usize) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// One record per logical edge: every edge of a directed graph, the first
    /// record of each reciprocal pair of an undirected one
    pub fn unique_edges(&self) -> Vec<GraphEdge> {
        if self.directed {
            self.edges.clone()
        } else {
            self.edges.iter().step_by(2).copied().collect()
        }
    }
}

/// Mutation interface shared by both graph engines
pub trait Graph<T> {
    fn add_node(&mut self, value: T) -> Trace<GraphData<T>>;

    /// Fails soft: an out-of-range id yields an error step and no mutation
    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Trace<GraphData<T>>;

    fn graph_data(&self) -> GraphData<T>;
}

#[derive(Debug, Clone)]
struct GraphStore<T> {
    nodes: Vec<GraphNode<T>>,
    edges: Vec<GraphEdge>,
    directed: bool,
}

impl<T: Clone + Display> GraphStore<T> {
    fn new(directed: bool) -> Self {
        GraphStore {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed,
        }
    }

    fn data(&self) -> GraphData<T> {
        GraphData {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            directed: self.directed,
        }
    }

    fn add_node(&mut self, value: T) -> Trace<GraphData<T>> {
        let mut trace = Trace::new();
        trace.push(Step::new(self.data(), "Initial state of the graph"));

        let id = self.nodes.len();
        tracing::debug!(%value, id, "graph add_node");
        self.nodes.push(GraphNode {
            id,
            value: value.clone(),
        });

        trace.push(
            Step::new(
                self.data(),
                format!("Adding node with value {} and ID {}", value, id),
            )
            .with_highlights([id]),
        );
        trace
    }

    /// Starts an edge trace; `Err` carries the finished error trace
    fn begin_edge(
        &self,
        from: usize,
        to: usize,
    ) -> std::result::Result<Trace<GraphData<T>>, Trace<GraphData<T>>> {
        let mut trace = Trace::new();
        trace.push(Step::new(self.data(), "Initial state of the graph"));

        let node_count = self.nodes.len();
        let invalid = [from, to].into_iter().find(|&id| id >= node_count);
        match invalid {
            Some(id) => {
                tracing::warn!(from, to, node_count, "edge endpoint out of range");
                trace.push(
                    Step::new(
                        self.data(),
                        format!(
                            "Error: invalid node ID {} (the graph has {} nodes)",
                            id, node_count
                        ),
                    )
                    .with_status(StepStatus::InvalidReference { id, node_count }),
                );
                Err(trace)
            }
            None => Ok(trace),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    store: GraphStore<T>,
}

impl<T: Clone + Display> DirectedGraph<T> {
    pub fn new() -> Self {
        DirectedGraph {
            store: GraphStore::new(true),
        }
    }
}

impl<T: Clone + Display> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Display> Graph<T> for DirectedGraph<T> {
    fn add_node(&mut self, value: T) -> Trace<GraphData<T>> {
        self.store.add_node(value)
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Trace<GraphData<T>> {
        let mut trace = match self.store.begin_edge(from, to) {
            Ok(trace) => trace,
            Err(error_trace) => return error_trace,
        };

        self.store.edges.push(GraphEdge { from, to, weight });
        trace.push(
            Step::new(
                self.store.data(),
                format!(
                    "Adding directed edge from node {} to node {} with weight {}",
                    from, to, weight
                ),
            )
            .with_highlights([from, to]),
        );
        trace
    }

    fn graph_data(&self) -> GraphData<T> {
        self.store.data()
    }
}

#[derive(Debug, Clone)]
pub struct UndirectedGraph<T> {
    store: GraphStore<T>,
}

impl<T: Clone + Display> UndirectedGraph<T> {
    pub fn new() -> Self {
        UndirectedGraph {
            store: GraphStore::new(false),
        }
    }
}

impl<T: Clone + Display> Default for UndirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Display> Graph<T> for UndirectedGraph<T> {
    fn add_node(&mut self, value: T) -> Trace<GraphData<T>> {
        self.store.add_node(value)
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Trace<GraphData<T>> {
        let mut trace = match self.store.begin_edge(from, to) {
            Ok(trace) => trace,
            Err(error_trace) => return error_trace,
        };

        self.store.edges.push(GraphEdge { from, to, weight });
        self.store.edges.push(GraphEdge {
            from: to,
            to: from,
            weight,
        });
        trace.push(
            Step::new(
                self.store.data(),
                format!(
                    "Adding undirected edge between nodes {} and {} with weight {}",
                    from, to, weight
                ),
            )
            .with_highlights([from, to]),
        );
        trace
    }

    fn graph_data(&self) -> GraphData<T> {
        self.store.data()
    }
}

/// The directed A..E graph used by graph-search sessions
pub fn sample_graph() -> DirectedGraph<String> {
    let mut graph = DirectedGraph::new();
    for label in ["A", "B", "C", "D", "E"] {
        graph.add_node(label.to_string());
    }
    for (from, to, weight) in [
        (0, 1, 4.0),
        (0, 2, 2.0),
        (1, 3, 3.0),
        (2, 1, 1.0),
        (2, 3, 5.0),
        (3, 4, 1.0),
    ] {
        graph.add_edge(from, to, weight);
    }
    graph
}
