//! Priority queue kept as a list sorted by ascending priority
//!
//! Lower number means higher priority. Enqueue appends and then stable-sorts, so
//! equal priorities keep their insertion order. Dequeue always takes index 0.

use crate::trace::{Step, StepStatus, Trace};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityQueueItem<T> {
    pub value: T,
    pub priority: i64,
}

#[derive(Debug, Clone, Default)]
pub struct PriorityQueue<T> {
    items: Vec<PriorityQueueItem<T>>,
}

impl<T: Clone + Display> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue { items: Vec::new() }
    }

    pub fn enqueue(&mut self, value: T, priority: i64) -> Trace<Vec<PriorityQueueItem<T>>> {
        tracing::debug!(%value, priority, "priority queue enqueue");
        let mut trace = Trace::new();
        trace.push(Step::new(
            self.items.clone(),
            "Initial state of the priority queue",
        ));

        self.items.push(PriorityQueueItem {
            value: value.clone(),
            priority,
        });
        trace.push(
            Step::new(
                self.items.clone(),
                format!(
                    "Adding element with value {} and priority {}",
                    value, priority
                ),
            )
            .with_highlights([self.items.len() - 1]),
        );

        // Vec::sort_by_key is stable
        self.items.sort_by_key(|item| item.priority);
        trace.push(Step::new(
            self.items.clone(),
            "Reordering the queue by priority",
        ));
        trace
    }

    /// Remove the front item; `None` (and an explanatory step) when empty
    pub fn dequeue(
        &mut self,
    ) -> (
        Trace<Vec<PriorityQueueItem<T>>>,
        Option<PriorityQueueItem<T>>,
    ) {
        let mut trace = Trace::new();
        trace.push(Step::new(
            self.items.clone(),
            "Initial state of the priority queue",
        ));

        if self.items.is_empty() {
            tracing::warn!("dequeue on an empty priority queue");
            trace.push(
                Step::new(
                    self.items.clone(),
                    "The queue is empty, there is nothing to remove",
                )
                .with_status(StepStatus::EmptyStructure),
            );
            return (trace, None);
        }

        let removed = self.items.remove(0);
        trace.push(Step::new(
            self.items.clone(),
            format!(
                "Removing the highest-priority element: value {}, priority {}",
                removed.value, removed.priority
            ),
        ));
        (trace, Some(removed))
    }

    pub fn items(&self) -> &[PriorityQueueItem<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
