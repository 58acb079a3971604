//! Step traces and replay
//!
//! Every engine operation returns a [`Trace`]: an ordered list of [`Step`]s, each
//! holding an owned copy of the structure at that instant plus a description and
//! the indices worth highlighting. A [`Player`] walks a finished trace forward and
//! backward without re-running the operation.
//!
//! # Invariants
//!
//! - The first step (when present) shows the pre-operation state and the last
//!   step the post-operation state.
//! - Steps never alias engine state: `data` is cloned at capture time.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Structured outcome of a step, alongside its human-readable description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StepStatus {
    #[default]
    Ok,
    /// Operation needs at least one element and the structure had none
    EmptyStructure,
    /// A node id was outside `0..node_count`
    InvalidReference {
        id: usize,
        #[serde(rename = "nodeCount")]
        node_count: usize,
    },
    /// Searched value is not reachable
    NotFound,
}

impl StepStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, StepStatus::Ok)
    }
}

/// One unit of replayable state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step<T> {
    pub data: T,
    pub description: String,
    #[serde(default)]
    pub highlight_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "StepStatus::is_ok")]
    pub status: StepStatus,
}

impl<T> Step<T> {
    pub fn new(data: T, description: impl Into<String>) -> Self {
        Step {
            data,
            description: description.into(),
            highlight_indices: Vec::new(),
            status: StepStatus::Ok,
        }
    }

    pub fn with_highlights(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlight_indices = indices.into_iter().collect();
        self
    }

    pub fn with_status(mut self, status: StepStatus) -> Self {
        self.status = status;
        self
    }

    /// Convert the payload, keeping description, highlights and status
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Step<U> {
        Step {
            data: f(self.data),
            description: self.description,
            highlight_indices: self.highlight_indices,
            status: self.status,
        }
    }
}

/// Ordered, finite sequence of steps produced by one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    /// Append a step
    pub fn push(&mut self, step: Step<T>) {
        self.steps.push(step);
    }

    /// Append every step of another trace, in order
    pub fn extend(&mut self, other: Trace<T>) {
        self.steps.extend(other.steps);
    }

    pub fn get(&self, index: usize) -> Option<&Step<T>> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step<T>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step<T>> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// Status of the last step; `Ok` for an empty trace
    pub fn final_status(&self) -> StepStatus {
        self.steps.last().map(|s| s.status).unwrap_or_default()
    }

    /// Convert every payload, e.g. into a common frame type for the player
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Trace<U> {
        Trace {
            steps: self.steps.into_iter().map(|s| s.map(&mut f)).collect(),
        }
    }
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Step<T>>> for Trace<T> {
    fn from(steps: Vec<Step<T>>) -> Self {
        Trace { steps }
    }
}

impl<T> IntoIterator for Trace<T> {
    type Item = Step<T>;
    type IntoIter = std::vec::IntoIter<Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Replay cursor over a finished trace
#[derive(Debug, Clone)]
pub struct Player<T> {
    trace: Trace<T>,
    position: usize,
}

impl<T> Player<T> {
    /// Load a trace, refusing empty traces and traces longer than `max_steps`
    pub fn new(trace: Trace<T>, max_steps: usize) -> Result<Self> {
        if trace.is_empty() {
            return Err(Error::playback("Trace has no steps to replay"));
        }
        if trace.len() > max_steps {
            return Err(Error::invalid(format!(
                "Trace length limit exceeded: {} > {}",
                trace.len(),
                max_steps
            )));
        }
        Ok(Player { trace, position: 0 })
    }

    pub fn current(&self) -> &Step<T> {
        // position is always < len and len >= 1
        &self.trace.steps[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn trace(&self) -> &Trace<T> {
        &self.trace
    }

    pub fn step_forward(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Err(Error::playback("Already at the last step"));
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<()> {
        if self.position == 0 {
            return Err(Error::playback("Already at the first step"));
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len() - 1;
    }

    /// Move to an absolute step index
    pub fn seek(&mut self, index: usize) -> Result<()> {
        if index >= self.trace.len() {
            return Err(Error::playback(format!(
                "Step {} out of range (trace has {} steps)",
                index,
                self.trace.len()
            )));
        }
        self.position = index;
        Ok(())
    }
}
