//! Singly linked list over an index arena
//!
//! Same storage rules as the doubly linked list: append-only slots, removal by
//! relinking only, [`SinglyLinkedList::clear`] is the one operation that empties
//! the store.

use super::ListSnapshot;
use crate::trace::{Step, StepStatus, Trace};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglyNode<T> {
    pub value: T,
    pub next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SinglyLinkedList<T> {
    nodes: Vec<SinglyNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

type SinglyTrace<T> = Trace<ListSnapshot<SinglyNode<T>>>;

impl<T: Clone + PartialEq + Display> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    fn step(&self, description: impl Into<String>) -> Step<ListSnapshot<SinglyNode<T>>> {
        Step::new(
            ListSnapshot {
                nodes: self.nodes.clone(),
                head: self.head,
                tail: self.tail,
            },
            description,
        )
    }

    pub fn add_first(&mut self, value: T) -> SinglyTrace<T> {
        tracing::debug!(%value, "singly list add_first");
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the singly linked list"));

        let new_index = self.nodes.len();
        self.nodes.push(SinglyNode {
            value: value.clone(),
            next: self.head,
        });
        trace.push(
            self.step(format!("Creating new node with value {}", value))
                .with_highlights([new_index]),
        );

        if self.head.is_none() {
            self.tail = Some(new_index);
            trace.push(
                self.step("The list was empty, the new node is also the tail")
                    .with_highlights([new_index]),
            );
        }

        self.head = Some(new_index);
        trace.push(
            self.step("Updating head to point to the new node")
                .with_highlights([new_index]),
        );
        trace
    }

    pub fn add_last(&mut self, value: T) -> SinglyTrace<T> {
        tracing::debug!(%value, "singly list add_last");
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the singly linked list"));

        let new_index = self.nodes.len();
        self.nodes.push(SinglyNode {
            value: value.clone(),
            next: None,
        });
        trace.push(
            self.step(format!("Creating new node with value {}", value))
                .with_highlights([new_index]),
        );

        match self.tail {
            Some(old_tail) => {
                self.nodes[old_tail].next = Some(new_index);
                trace.push(
                    self.step("Updating the tail node so its next points to the new node")
                        .with_highlights([old_tail, new_index]),
                );
            }
            None => {
                self.head = Some(new_index);
                trace.push(
                    self.step("The list was empty, the new node is also the head")
                        .with_highlights([new_index]),
                );
            }
        }

        self.tail = Some(new_index);
        trace.push(
            self.step("Updating tail to point to the new node")
                .with_highlights([new_index]),
        );
        trace
    }

    pub fn remove_first(&mut self) -> SinglyTrace<T> {
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the singly linked list"));

        let Some(old_head) = self.head else {
            tracing::warn!("remove_first on an empty singly list");
            trace.push(
                self.step("The list is empty, nothing to remove")
                    .with_status(StepStatus::EmptyStructure),
            );
            return trace;
        };

        trace.push(
            self.step("Removing the head node")
                .with_highlights([old_head]),
        );

        self.head = self.nodes[old_head].next;
        match self.head {
            None => {
                self.tail = None;
                trace.push(self.step("The list is now empty, tail is null as well"));
            }
            Some(new_head) => {
                trace.push(
                    self.step("Moving head to the next node")
                        .with_highlights([new_head]),
                );
            }
        }

        trace.push(
            self.step("Final state of the list after removal")
                .with_highlights(self.head),
        );
        trace
    }

    pub fn remove_by_value(&mut self, value: &T) -> SinglyTrace<T> {
        let mut trace = Trace::new();
        trace.push(self.step(format!(
            "Starting removal of value {} from the singly linked list",
            value
        )));

        let Some(head) = self.head else {
            trace.push(
                self.step("The list is empty, nothing to remove")
                    .with_status(StepStatus::EmptyStructure),
            );
            return trace;
        };

        if self.nodes[head].value == *value {
            trace.push(
                self.step("The value to remove is at the head")
                    .with_highlights([head]),
            );
            trace.extend(self.remove_first());
            return trace;
        }

        // Walk with a one-node lookahead so the predecessor can be relinked
        let mut current = head;
        while let Some(next) = self.nodes[current].next {
            trace.push(
                self.step(format!("Checking whether the next node holds {}", value))
                    .with_highlights([current, next]),
            );

            if self.nodes[next].value == *value {
                trace.push(
                    self.step("Value found, updating links")
                        .with_highlights([next]),
                );

                self.nodes[current].next = self.nodes[next].next;
                if self.tail == Some(next) {
                    self.tail = Some(current);
                }

                trace.push(
                    self.step("Node removed from the singly linked list")
                        .with_highlights([current]),
                );
                return trace;
            }

            current = next;
        }

        trace.push(
            self.step(format!(
                "Value {} not found in the singly linked list",
                value
            ))
            .with_status(StepStatus::NotFound),
        );
        trace
    }

    pub fn search(&self, value: &T) -> SinglyTrace<T> {
        let mut trace = Trace::new();
        trace.push(self.step(format!(
            "Starting search for value {} in the singly linked list",
            value
        )));

        if self.head.is_none() {
            trace.push(
                self.step("The list is empty, element not found")
                    .with_status(StepStatus::NotFound),
            );
            return trace;
        }

        let mut current = self.head;
        let mut position = 0;
        while let Some(index) = current {
            trace.push(
                self.step(format!(
                    "Comparing with the node at position {} (value: {})",
                    position, self.nodes[index].value
                ))
                .with_highlights([index]),
            );

            if self.nodes[index].value == *value {
                trace.push(
                    self.step(format!("Element found at position {}!", position))
                        .with_highlights([index]),
                );
                return trace;
            }

            current = self.nodes[index].next;
            position += 1;
        }

        trace.push(
            self.step(format!(
                "Element {} not found in the singly linked list",
                value
            ))
            .with_status(StepStatus::NotFound),
        );
        trace
    }

    pub fn clear(&mut self) -> SinglyTrace<T> {
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the singly linked list"));

        if self.head.is_none() {
            self.nodes.clear();
            self.tail = None;
            trace.push(self.step("The list is already empty"));
            return trace;
        }

        self.head = None;
        self.tail = None;
        trace.push(
            self.step("Dropping the head and tail references (list is empty)")
                .with_highlights(0..self.nodes.len()),
        );

        self.nodes.clear();
        trace.push(self.step("Final state after removing every node"));
        trace
    }

    pub fn nodes(&self) -> &[SinglyNode<T>] {
        &self.nodes
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    pub fn values(&self) -> Vec<T> {
        let mut values = Vec::new();
        let mut current = self.head;
        while let Some(index) = current {
            values.push(self.nodes[index].value.clone());
            current = self.nodes[index].next;
        }
        values
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
        let mut list = SinglyLinkedList::new();
        for &v in values {
            list.add_last(v);
        }
        list
    }

    #[test]
    fn add_first_then_remove_first_round_trips() {
        let mut list = list_of(&[1, 2]);
        let (head, tail, len) = (list.head(), list.tail(), list.len());
        list.add_first(0);
        list.remove_first();
        assert_eq!((list.head(), list.tail(), list.len()), (head, tail, len));
    }

    #[test]
    fn removing_head_by_value_replays_remove_first() {
        let mut list = list_of(&[1, 2]);
        let trace = list.remove_by_value(&1);
        assert_eq!(
            trace.get(1).unwrap().description,
            "The value to remove is at the head"
        );
        assert_eq!(
            trace.get(2).unwrap().description,
            "Initial state of the singly linked list"
        );
        assert_eq!(list.values(), vec![2]);
        assert_eq!(list.head(), Some(1));
    }

    #[test]
    fn removing_tail_moves_tail_to_predecessor() {
        let mut list = list_of(&[1, 2, 3]);
        list.remove_by_value(&3);
        assert_eq!(list.tail(), Some(1));
        list.add_last(4);
        assert_eq!(list.values(), vec![1, 2, 4]);
    }

    #[test]
    fn missing_value_is_not_found() {
        let mut list = list_of(&[1, 2]);
        let trace = list.remove_by_value(&5);
        assert_eq!(trace.final_status(), StepStatus::NotFound);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_first_until_empty_resets_tail() {
        let mut list = list_of(&[1]);
        list.remove_first();
        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
        assert_eq!(list.nodes().len(), 1);
        let trace = list.remove_first();
        assert_eq!(trace.final_status(), StepStatus::EmptyStructure);
    }

    #[test]
    fn clear_on_empty_list_still_drops_orphans() {
        let mut list = list_of(&[1]);
        list.remove_first();
        let trace = list.clear();
        assert_eq!(trace.last().unwrap().description, "The list is already empty");
        assert!(list.nodes().is_empty());
    }
}
