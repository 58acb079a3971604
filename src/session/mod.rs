//! Engine sessions
//!
//! A [`Session`] owns one instance of every data-structure engine plus the sample
//! graph used for searches, and applies parsed [`Command`]s to them. Each
//! command yields one trace wrapped in [`Frame`]s. Sessions never share engines;
//! a [`SessionRegistry`] hands out isolated sessions by id.

mod command;
mod frame;
mod registry;

pub use command::{
    parse_script, Command, GraphKind, GraphOp, GraphSource, ListKind, ListOp, QueueOp, TreeOp,
};
pub use frame::Frame;
pub use registry::{SessionId, SessionRegistry};

use crate::structures::{
    sample_graph, BinaryTree, DirectedGraph, DoublyLinkedList, Graph, GraphData, PriorityQueue,
    SinglyLinkedList, UndirectedGraph,
};
use crate::trace::Trace;

/// One isolated set of engines
#[derive(Debug, Clone)]
pub struct Session {
    doubly: DoublyLinkedList<i64>,
    singly: SinglyLinkedList<i64>,
    tree: BinaryTree<i64>,
    directed: DirectedGraph<String>,
    undirected: UndirectedGraph<String>,
    queue: PriorityQueue<String>,
    sample: GraphData<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            doubly: DoublyLinkedList::new(),
            singly: SinglyLinkedList::new(),
            tree: BinaryTree::new(),
            directed: DirectedGraph::new(),
            undirected: UndirectedGraph::new(),
            queue: PriorityQueue::new(),
            sample: sample_graph().graph_data(),
        }
    }

    /// Run one command against this session's engines
    pub fn apply(&mut self, command: &Command) -> Trace<Frame> {
        tracing::debug!(?command, "applying command");
        match command {
            Command::Sort { kind, values } => kind.sort(values).map(Frame::Sequence),

            Command::List {
                kind: ListKind::Doubly,
                op,
            } => {
                let list = &mut self.doubly;
                let trace = match op {
                    ListOp::AddFirst(v) => list.add_first(*v),
                    ListOp::AddLast(v) => list.add_last(*v),
                    ListOp::RemoveFirst => list.remove_first(),
                    ListOp::Remove(v) => list.remove_by_value(v),
                    ListOp::Search(v) => list.search(v),
                    ListOp::Clear => list.clear(),
                };
                trace.map(Frame::DoublyList)
            }

            Command::List {
                kind: ListKind::Singly,
                op,
            } => {
                let list = &mut self.singly;
                let trace = match op {
                    ListOp::AddFirst(v) => list.add_first(*v),
                    ListOp::AddLast(v) => list.add_last(*v),
                    ListOp::RemoveFirst => list.remove_first(),
                    ListOp::Remove(v) => list.remove_by_value(v),
                    ListOp::Search(v) => list.search(v),
                    ListOp::Clear => list.clear(),
                };
                trace.map(Frame::SinglyList)
            }

            Command::Tree(TreeOp::Insert(v)) => self.tree.insert(*v).map(Frame::Tree),
            Command::Tree(TreeOp::Clear) => self.tree.clear().map(Frame::Tree),

            Command::Graph { kind, op } => {
                let graph: &mut dyn Graph<String> = match kind {
                    GraphKind::Directed => &mut self.directed,
                    GraphKind::Undirected => &mut self.undirected,
                };
                let trace = match op {
                    GraphOp::AddNode(label) => graph.add_node(label.clone()),
                    GraphOp::AddEdge { from, to, weight } => graph.add_edge(*from, *to, *weight),
                };
                trace.map(Frame::Graph)
            }

            Command::Queue(QueueOp::Enqueue { value, priority }) => self
                .queue
                .enqueue(value.clone(), *priority)
                .map(Frame::PriorityQueue),
            Command::Queue(QueueOp::Dequeue) => {
                let (trace, _removed) = self.queue.dequeue();
                trace.map(Frame::PriorityQueue)
            }

            Command::Search {
                algorithm,
                source,
                start,
                end,
            } => {
                let graph = match source {
                    GraphSource::Sample => self.sample.clone(),
                    GraphSource::Directed => self.directed.graph_data(),
                    GraphSource::Undirected => self.undirected.graph_data(),
                };
                algorithm.execute(&graph, *start, *end).map(Frame::Search)
            }
        }
    }

    /// Apply commands in order, one trace per command
    pub fn run(&mut self, commands: &[Command]) -> Vec<Trace<Frame>> {
        commands.iter().map(|command| self.apply(command)).collect()
    }

    pub fn doubly_list(&self) -> &DoublyLinkedList<i64> {
        &self.doubly
    }

    pub fn singly_list(&self) -> &SinglyLinkedList<i64> {
        &self.singly
    }

    pub fn tree(&self) -> &BinaryTree<i64> {
        &self.tree
    }

    pub fn directed_graph(&self) -> &DirectedGraph<String> {
        &self.directed
    }

    pub fn undirected_graph(&self) -> &UndirectedGraph<String> {
        &self.undirected
    }

    pub fn priority_queue(&self) -> &PriorityQueue<String> {
        &self.queue
    }
}

/// Concatenate per-command traces into one replayable trace
pub fn concat(traces: impl IntoIterator<Item = Trace<Frame>>) -> Trace<Frame> {
    let mut all = Trace::new();
    for trace in traces {
        all.extend(trace);
    }
    all
}
