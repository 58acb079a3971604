//! Line-oriented command scripts
//!
//! One operation per line, `#` starts a comment:
//!
//! ```text
//! sort quick 5 3 8 1
//! dlist add-first 4          # also: add-last, remove-first, remove, search, clear
//! slist add-last 9
//! bst insert 50              # also: clear
//! dgraph add-node A          # ugraph for the undirected engine
//! dgraph add-edge 0 1 4.5    # weight defaults to 1
//! pq enqueue job 2           # also: dequeue
//! search dijkstra sample 0 4 # graph: sample | dgraph | ugraph; end id optional
//! ```
//!
//! Parsing is where inputs are validated; engines only see well-typed values.

use crate::errors::{Error, Result};
use crate::graph_algorithms::GraphAlgorithmKind;
use crate::sorting::SortKind;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Doubly,
    Singly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    AddFirst(i64),
    AddLast(i64),
    RemoveFirst,
    Remove(i64),
    Search(i64),
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOp {
    Insert(i64),
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphOp {
    AddNode(String),
    AddEdge { from: usize, to: usize, weight: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue { value: String, priority: i64 },
    Dequeue,
}

/// Which graph a search reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSource {
    Sample,
    Directed,
    Undirected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sort {
        kind: SortKind,
        values: Vec<i64>,
    },
    List {
        kind: ListKind,
        op: ListOp,
    },
    Tree(TreeOp),
    Graph {
        kind: GraphKind,
        op: GraphOp,
    },
    Queue(QueueOp),
    Search {
        algorithm: GraphAlgorithmKind,
        source: GraphSource,
        start: usize,
        end: Option<usize>,
    },
}

/// Token cursor over one line
struct Tokens<'a> {
    words: std::str::SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.words
            .next()
            .ok_or_else(|| self.error(format!("expected {}", what)))
    }

    fn number<N: FromStr>(&mut self, what: &str) -> Result<N> {
        let word = self.word(what)?;
        word.parse()
            .map_err(|_| self.error(format!("expected {}, found '{}'", what, word)))
    }

    fn optional_number<N: FromStr>(&mut self, what: &str) -> Result<Option<N>> {
        match self.words.next() {
            None => Ok(None),
            Some(word) => word
                .parse()
                .map(Some)
                .map_err(|_| self.error(format!("expected {}, found '{}'", what, word))),
        }
    }

    fn rest_numbers(&mut self, what: &str) -> Result<Vec<i64>> {
        let mut values = Vec::new();
        while let Some(value) = self.optional_number(what)? {
            values.push(value);
        }
        Ok(values)
    }

    fn finish(&mut self) -> Result<()> {
        match self.words.next() {
            None => Ok(()),
            Some(extra) => Err(self.error(format!("unexpected '{}'", extra))),
        }
    }
}

impl Command {
    /// Parse one script line; `None` for blank and comment-only lines
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Command>> {
        let content = line.split('#').next().unwrap_or_default();
        let mut tokens = Tokens {
            words: content.split_whitespace(),
            line: line_number,
        };

        let Some(target) = tokens.words.next() else {
            return Ok(None);
        };

        let command = match target {
            "sort" => {
                let kind: SortKind = tokens.word("an algorithm name")?.parse()?;
                let values = tokens.rest_numbers("an integer")?;
                Command::Sort { kind, values }
            }
            "dlist" => Command::List {
                kind: ListKind::Doubly,
                op: parse_list_op(&mut tokens)?,
            },
            "slist" => Command::List {
                kind: ListKind::Singly,
                op: parse_list_op(&mut tokens)?,
            },
            "bst" => {
                let op = match tokens.word("a tree operation")? {
                    "insert" => TreeOp::Insert(tokens.number("an integer")?),
                    "clear" => TreeOp::Clear,
                    other => return Err(tokens.error(format!("unknown tree operation '{}'", other))),
                };
                tokens.finish()?;
                Command::Tree(op)
            }
            "dgraph" => Command::Graph {
                kind: GraphKind::Directed,
                op: parse_graph_op(&mut tokens)?,
            },
            "ugraph" => Command::Graph {
                kind: GraphKind::Undirected,
                op: parse_graph_op(&mut tokens)?,
            },
            "pq" => {
                let op = match tokens.word("a queue operation")? {
                    "enqueue" => {
                        let value = tokens.word("a value")?.to_string();
                        let priority = tokens.number("an integer priority")?;
                        QueueOp::Enqueue { value, priority }
                    }
                    "dequeue" => QueueOp::Dequeue,
                    other => {
                        return Err(tokens.error(format!("unknown queue operation '{}'", other)))
                    }
                };
                tokens.finish()?;
                Command::Queue(op)
            }
            "search" => {
                let algorithm: GraphAlgorithmKind = tokens.word("an algorithm name")?.parse()?;
                let source = match tokens.word("a graph name")? {
                    "sample" => GraphSource::Sample,
                    "dgraph" => GraphSource::Directed,
                    "ugraph" => GraphSource::Undirected,
                    other => return Err(tokens.error(format!("unknown graph '{}'", other))),
                };
                let start = tokens.number("a start node id")?;
                let end = tokens.optional_number("an end node id")?;
                tokens.finish()?;
                Command::Search {
                    algorithm,
                    source,
                    start,
                    end,
                }
            }
            other => return Err(tokens.error(format!("unknown target '{}'", other))),
        };

        Ok(Some(command))
    }
}

fn parse_list_op(tokens: &mut Tokens<'_>) -> Result<ListOp> {
    let op = match tokens.word("a list operation")? {
        "add-first" => ListOp::AddFirst(tokens.number("an integer")?),
        "add-last" => ListOp::AddLast(tokens.number("an integer")?),
        "remove-first" => ListOp::RemoveFirst,
        "remove" => ListOp::Remove(tokens.number("an integer")?),
        "search" => ListOp::Search(tokens.number("an integer")?),
        "clear" => ListOp::Clear,
        other => return Err(tokens.error(format!("unknown list operation '{}'", other))),
    };
    tokens.finish()?;
    Ok(op)
}

fn parse_graph_op(tokens: &mut Tokens<'_>) -> Result<GraphOp> {
    let op = match tokens.word("a graph operation")? {
        "add-node" => GraphOp::AddNode(tokens.word("a node label")?.to_string()),
        "add-edge" => {
            let from = tokens.number("a node id")?;
            let to = tokens.number("a node id")?;
            let weight = tokens.optional_number("a weight")?.unwrap_or(1.0);
            GraphOp::AddEdge { from, to, weight }
        }
        other => return Err(tokens.error(format!("unknown graph operation '{}'", other))),
    };
    tokens.finish()?;
    Ok(op)
}

/// Parse a whole script, skipping blank and comment lines
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(command) = Command::parse_line(line, index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
