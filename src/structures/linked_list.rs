//! Doubly linked list over an index arena
//!
//! Nodes live in one append-only `Vec`; `prev`/`next`/`head`/`tail` are indices
//! into it. Logical removal only relinks neighbours, so a removed node keeps its
//! slot (and its stale links) until [`DoublyLinkedList::clear`] empties the store.
//! Slots that are not reachable from `head` are never traversed.

use super::ListSnapshot;
use crate::trace::{Step, StepStatus, Trace};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode<T> {
    pub value: T,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<ListNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T: Clone + PartialEq + Display> DoublyLinkedList<T> {
    pub fn new() -> Self {
        DoublyLinkedList {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    fn snapshot(&self) -> ListSnapshot<ListNode<T>> {
        ListSnapshot {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
        }
    }

    fn step(&self, description: impl Into<String>) -> Step<ListSnapshot<ListNode<T>>> {
        Step::new(self.snapshot(), description)
    }

    pub fn add_first(&mut self, value: T) -> Trace<ListSnapshot<ListNode<T>>> {
        tracing::debug!(%value, "doubly list add_first");
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the list"));

        let new_index = self.nodes.len();
        self.nodes.push(ListNode {
            value: value.clone(),
            prev: None,
            next: self.head,
        });
        trace.push(
            self.step(format!("Creating new node with value {}", value))
                .with_highlights([new_index]),
        );

        match self.head {
            Some(old_head) => {
                self.nodes[old_head].prev = Some(new_index);
                trace.push(
                    self.step("Updating the old head so its prev points to the new node")
                        .with_highlights([old_head, new_index]),
                );
            }
            None => {
                self.tail = Some(new_index);
                trace.push(
                    self.step("The list was empty, the new node is also the tail")
                        .with_highlights([new_index]),
                );
            }
        }

        self.head = Some(new_index);
        trace.push(
            self.step("Updating head to point to the new node")
                .with_highlights([new_index]),
        );
        trace
    }

    pub fn add_last(&mut self, value: T) -> Trace<ListSnapshot<ListNode<T>>> {
        tracing::debug!(%value, "doubly list add_last");
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the list"));

        let new_index = self.nodes.len();
        self.nodes.push(ListNode {
            value: value.clone(),
            prev: self.tail,
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
                    self.step("Updating the old tail so its next points to the new node")
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

    pub fn remove_first(&mut self) -> Trace<ListSnapshot<ListNode<T>>> {
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the list"));

        let Some(old_head) = self.head else {
            tracing::warn!("remove_first on an empty doubly list");
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
            Some(new_head) => {
                self.nodes[new_head].prev = None;
                trace.push(
                    self.step("Updating the new head so its prev is null")
                        .with_highlights([new_head]),
                );
            }
            None => {
                self.tail = None;
                trace.push(self.step("The list is now empty, tail is null as well"));
            }
        }

        trace.push(
            self.step("Final state of the list after removal")
                .with_highlights(self.head),
        );
        trace
    }

    pub fn remove_by_value(&mut self, value: &T) -> Trace<ListSnapshot<ListNode<T>>> {
        let mut trace = Trace::new();
        trace.push(self.step(format!("Starting removal of value {}", value)));

        if self.head.is_none() {
            trace.push(
                self.step("The list is empty, nothing to remove")
                    .with_status(StepStatus::EmptyStructure),
            );
            return trace;
        }

        let mut current = self.head;
        let mut position = 0;

        while let Some(index) = current {
            trace.push(
                self.step(format!(
                    "Looking for value {}... checking position {}",
                    value, position
                ))
                .with_highlights([index]),
            );

            if self.nodes[index].value == *value {
                trace.push(
                    self.step(format!(
                        "Value found at position {}, removing it",
                        position
                    ))
                    .with_highlights([index]),
                );

                let prev = self.nodes[index].prev;
                let next = self.nodes[index].next;

                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.head = next,
                }
                match next {
                    Some(n) => self.nodes[n].prev = prev,
                    None => self.tail = prev,
                }

                trace.push(
                    self.step("Node removed, links updated")
                        .with_highlights(next.or(prev)),
                );
                return trace;
            }

            current = self.nodes[index].next;
            position += 1;
        }

        trace.push(
            self.step(format!("Value {} not found in the list", value))
                .with_status(StepStatus::NotFound),
        );
        trace
    }

    pub fn search(&self, value: &T) -> Trace<ListSnapshot<ListNode<T>>> {
        let mut trace = Trace::new();
        trace.push(self.step(format!("Starting search for value {}", value)));

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
            self.step(format!("Element {} not found in the list", value))
                .with_status(StepStatus::NotFound),
        );
        trace
    }

    /// Unlink every node and empty the backing store
    pub fn clear(&mut self) -> Trace<ListSnapshot<ListNode<T>>> {
        let mut trace = Trace::new();
        trace.push(self.step("Initial state of the list"));

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

    /// Every slot of the backing store, including unlinked ones
    pub fn nodes(&self) -> &[ListNode<T>] {
        &self.nodes
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Values reachable from `head`, in order
    pub fn values(&self) -> Vec<T> {
        let mut values = Vec::new();
        let mut current = self.head;
        while let Some(index) = current {
            values.push(self.nodes[index].value.clone());
            current = self.nodes[index].next;
        }
        values
    }

    /// Number of reachable nodes
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head;
        while let Some(index) = current {
            count += 1;
            current = self.nodes[index].next;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> DoublyLinkedList<i32> {
        let mut list = DoublyLinkedList::new();
        for &v in values {
            list.add_last(v);
        }
        list
    }

    #[test]
    fn add_first_on_empty_sets_head_and_tail() {
        let mut list = DoublyLinkedList::new();
        let trace = list.add_first(7);
        assert_eq!(trace.len(), 4);
        assert_eq!(list.head(), Some(0));
        assert_eq!(list.tail(), Some(0));
        assert!(trace.first().unwrap().data.nodes.is_empty());
        assert_eq!(trace.last().unwrap().data.head, Some(0));
    }

    #[test]
    fn add_first_links_both_directions() {
        let mut list = list_of(&[2]);
        list.add_first(1);
        assert_eq!(list.values(), vec![1, 2]);
        assert_eq!(list.nodes()[0].prev, Some(1));
        assert_eq!(list.nodes()[1].next, Some(0));
        assert_eq!(list.tail(), Some(0));
    }

    #[test]
    fn remove_first_keeps_slot_in_store() {
        let mut list = list_of(&[1, 2, 3]);
        list.remove_first();
        assert_eq!(list.values(), vec![2, 3]);
        assert_eq!(list.nodes().len(), 3);
        assert_eq!(list.nodes()[1].prev, None);
    }

    #[test]
    fn remove_first_on_empty_is_a_single_explanatory_step() {
        let mut list = DoublyLinkedList::<i32>::new();
        let trace = list.remove_first();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.final_status(), StepStatus::EmptyStructure);
        assert!(list.nodes().is_empty());
    }

    #[test]
    fn remove_tail_by_value_moves_tail_back() {
        let mut list = list_of(&[1, 2, 3]);
        let trace = list.remove_by_value(&3);
        assert_eq!(trace.final_status(), StepStatus::Ok);
        assert_eq!(list.tail(), Some(1));
        assert_eq!(list.nodes()[1].next, None);
        assert_eq!(list.values(), vec![1, 2]);
    }

    #[test]
    fn remove_head_by_value_moves_head() {
        let mut list = list_of(&[1, 2]);
        list.remove_by_value(&1);
        assert_eq!(list.head(), Some(1));
        assert_eq!(list.nodes()[1].prev, None);
    }

    #[test]
    fn remove_middle_patches_neighbours() {
        let mut list = list_of(&[1, 2, 3]);
        let trace = list.remove_by_value(&2);
        assert_eq!(list.nodes()[0].next, Some(2));
        assert_eq!(list.nodes()[2].prev, Some(0));
        assert_eq!(trace.last().unwrap().highlight_indices, vec![2]);
    }

    #[test]
    fn remove_missing_value_reports_not_found() {
        let mut list = list_of(&[1]);
        let trace = list.remove_by_value(&9);
        assert_eq!(trace.final_status(), StepStatus::NotFound);
        assert_eq!(list.values(), vec![1]);
    }

    #[test]
    fn search_ignores_orphaned_slots() {
        let mut list = list_of(&[4, 5]);
        list.remove_first();
        let trace = list.search(&4);
        assert_eq!(trace.final_status(), StepStatus::NotFound);
        let found = list.search(&5);
        assert_eq!(found.last().unwrap().description, "Element found at position 0!");
    }

    #[test]
    fn clear_empties_the_store() {
        let mut list = list_of(&[1, 2]);
        let trace = list.clear();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.get(1).unwrap().highlight_indices, vec![0, 1]);
        assert!(trace.last().unwrap().data.nodes.is_empty());
        assert!(list.nodes().is_empty());
        assert!(list.is_empty());
    }
}
