//! Binary search tree over an index arena
//!
//! Ordering: left subtree `<` node `<=` right subtree (ties go right).

use crate::trace::{Step, Trace};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode<T> {
    pub value: T,
    pub left_index: Option<usize>,
    pub right_index: Option<usize>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Self {
        TreeNode {
            value,
            left_index: None,
            right_index: None,
        }
    }
}

/// Tree state captured in a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot<T> {
    pub nodes: Vec<TreeNode<T>>,
    pub root: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

impl<T: Ord + Clone + Display> BinaryTree<T> {
    pub fn new() -> Self {
        BinaryTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    fn step(&self, description: impl Into<String>) -> Step<TreeSnapshot<T>> {
        Step::new(
            TreeSnapshot {
                nodes: self.nodes.clone(),
                root: self.root,
            },
            description,
        )
    }

    pub fn insert(&mut self, value: T) -> Trace<TreeSnapshot<T>> {
        tracing::debug!(%value, "tree insert");
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the tree"));

        let Some(root) = self.root else {
            let new_index = self.nodes.len();
            self.nodes.push(TreeNode::leaf(value.clone()));
            self.root = Some(new_index);
            trace.push(
                self.step(format!("Inserting {} as the root of the tree", value))
                    .with_highlights([new_index]),
            );
            return trace;
        };

        let mut path = Vec::new();
        let mut current = root;

        loop {
            path.push(current);
            trace.push(
                self.step(format!(
                    "Comparing {} with {}",
                    value, self.nodes[current].value
                ))
                .with_highlights(path.clone()),
            );

            let goes_left = value < self.nodes[current].value;
            let child = if goes_left {
                self.nodes[current].left_index
            } else {
                self.nodes[current].right_index
            };

            match child {
                Some(next) => current = next,
                None => {
                    let new_index = self.nodes.len();
                    self.nodes.push(TreeNode::leaf(value.clone()));
                    let description = if goes_left {
                        self.nodes[current].left_index = Some(new_index);
                        format!(
                            "{} is less than {}, inserting on the left",
                            value, self.nodes[current].value
                        )
                    } else {
                        self.nodes[current].right_index = Some(new_index);
                        format!(
                            "{} is greater than or equal to {}, inserting on the right",
                            value, self.nodes[current].value
                        )
                    };
                    path.push(new_index);
                    trace.push(self.step(description).with_highlights(path));
                    break;
                }
            }
        }

        trace.push(self.step(format!("Tree after inserting {}", value)));
        trace
    }

    /// Drop every node and unset the root
    pub fn clear(&mut self) -> Trace<TreeSnapshot<T>> {
        let mut trace = Trace::new();
        trace.push(self.step("Current state of the tree before removing its nodes"));

        self.nodes.clear();
        self.root = None;

        trace.push(self.step("All nodes of the tree have been removed"));
        trace
    }

    pub fn nodes(&self) -> &[TreeNode<T>] {
        &self.nodes
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// In-order traversal of the nodes reachable from the root
    pub fn in_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left_index;
            }
            if let Some(index) = stack.pop() {
                out.push(self.nodes[index].value.clone());
                current = self.nodes[index].right_index;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_becomes_root_in_two_steps() {
        let mut tree = BinaryTree::new();
        let trace = tree.insert(50);
        assert_eq!(trace.len(), 2);
        assert_eq!(tree.root(), Some(0));
    }

    #[test]
    fn comparison_steps_accumulate_the_path() {
        let mut tree = BinaryTree::new();
        for v in [50, 30, 70] {
            tree.insert(v);
        }
        let trace = tree.insert(40);
        let highlights: Vec<Vec<usize>> = trace
            .iter()
            .map(|s| s.highlight_indices.clone())
            .collect();
        assert_eq!(
            highlights,
            vec![vec![], vec![0], vec![0, 1], vec![0, 1, 3], vec![]]
        );
        assert_eq!(
            trace.get(3).unwrap().description,
            "40 is greater than or equal to 30, inserting on the right"
        );
    }

    #[test]
    fn ties_go_right() {
        let mut tree = BinaryTree::new();
        tree.insert(5);
        tree.insert(5);
        assert_eq!(tree.nodes()[0].right_index, Some(1));
        assert_eq!(tree.nodes()[0].left_index, None);
    }

    #[test]
    fn in_order_is_sorted() {
        let mut tree = BinaryTree::new();
        for v in [50, 30, 70, 20, 40] {
            tree.insert(v);
        }
        assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 70]);
    }

    #[test]
    fn clear_is_before_and_after() {
        let mut tree = BinaryTree::new();
        tree.insert(1);
        let trace = tree.clear();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.first().unwrap().data.nodes.len(), 1);
        assert!(trace.last().unwrap().data.nodes.is_empty());
        assert_eq!(tree.root(), None);
        assert!(tree.in_order().is_empty());
    }
}
