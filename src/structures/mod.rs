//! Data-structure engines
//!
//! Every engine owns its backing store and returns a [`Trace`] from each
//! mutating operation:
//!
//! - [`linked_list`]: doubly linked list ([`DoublyLinkedList`])
//! - [`singly_linked_list`]: singly linked list ([`SinglyLinkedList`])
//! - [`tree`]: binary search tree ([`BinaryTree`])
//! - [`graph`]: directed and undirected graphs behind the [`Graph`] trait
//! - [`priority_queue`]: sorted-list priority queue ([`PriorityQueue`])
//!
//! # Index arenas
//!
//! Lists and the tree keep nodes in an append-only `Vec` and link them by index,
//! so "node #k" means the same slot in every step of every trace. Only the
//! explicit clear operations shrink a store.
//!
//! [`Trace`]: crate::trace::Trace

pub mod graph;
pub mod linked_list;
pub mod priority_queue;
pub mod singly_linked_list;
pub mod tree;

pub use graph::{
    sample_graph, DirectedGraph, Graph, GraphData, GraphEdge, GraphNode, UndirectedGraph,
};
pub use linked_list::{DoublyLinkedList, ListNode};
pub use priority_queue::{PriorityQueue, PriorityQueueItem};
pub use singly_linked_list::{SinglyLinkedList, SinglyNode};
pub use tree::{BinaryTree, TreeNode, TreeSnapshot};

use serde::{Deserialize, Serialize};

/// List state captured in a step: the whole store plus the end indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot<N> {
    pub nodes: Vec<N>,
    pub head: Option<usize>,
    pub tail: Option<usize>,
}
