//! # Introduction
//!
//! stepviz runs classic algorithms and data structures in a recording mode:
//! every operation returns an ordered trace of steps, each holding a copy of the
//! structure at that instant, a human-readable description, and the indices
//! worth highlighting. The traces are replayed forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui), or printed as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Command → Engine → Trace<T> → Frame → Player → TUI
//!                            ↘ JSON
//! ```
//!
//! 1. [`sorting`]: bubble, selection and quick sort with explicit work counters.
//! 2. [`structures`]: doubly and singly linked lists, a binary search tree,
//!    directed and undirected graphs, and a priority queue.
//! 3. [`graph_algorithms`]: BFS, DFS and Dijkstra over a graph snapshot.
//! 4. [`metrics`]: side-by-side comparison of two sorting runs.
//! 5. [`trace`]: the step and trace types plus the [`trace::Player`] cursor.
//! 6. [`session`]: isolated engine sets, a session registry and the command
//!    script language.
//! 7. [`ui`]: ratatui-based player; not part of the stable library API.
//!
//! ## Failure policy
//!
//! Structural problems (empty structure, bad node id, value not found) never
//! abort an operation. They end the trace with an explanatory step whose
//! [`trace::StepStatus`] says what went wrong. Only an unknown algorithm name,
//! bad CLI/script input, and player misuse surface as [`errors::Error`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph_algorithms;
pub mod metrics;
pub mod session;
pub mod sorting;
pub mod structures;
pub mod trace;
pub mod ui;
