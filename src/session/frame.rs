//! Uniform step payload
//!
//! Engines produce differently typed traces; [`Frame`] wraps each payload so a
//! single player (or a single JSON stream) can carry any of them.

use crate::graph_algorithms::GraphAlgorithmResult;
use crate::structures::{
    GraphData, ListNode, ListSnapshot, PriorityQueueItem, SinglyNode, TreeSnapshot,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "state", rename_all = "camelCase")]
pub enum Frame {
    Sequence(Vec<i64>),
    DoublyList(ListSnapshot<ListNode<i64>>),
    SinglyList(ListSnapshot<SinglyNode<i64>>),
    Tree(TreeSnapshot<i64>),
    Graph(GraphData<String>),
    PriorityQueue(Vec<PriorityQueueItem<String>>),
    Search(GraphAlgorithmResult<String>),
}

impl Frame {
    /// Short label for pane titles
    pub fn title(&self) -> &'static str {
        match self {
            Frame::Sequence(_) => "Array",
            Frame::DoublyList(_) => "Doubly Linked List",
            Frame::SinglyList(_) => "Singly Linked List",
            Frame::Tree(_) => "Binary Search Tree",
            Frame::Graph(data) if data.directed => "Directed Graph",
            Frame::Graph(_) => "Undirected Graph",
            Frame::PriorityQueue(_) => "Priority Queue",
            Frame::Search(_) => "Graph Search",
        }
    }
}
