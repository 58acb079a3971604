//! Structure view: draws the current step's payload with its highlights

use super::{border_style, clamp_scroll};
use crate::graph_algorithms::{GraphAlgorithmResult, UNREACHABLE};
use crate::session::Frame as StepFrame;
use crate::structures::{GraphData, PriorityQueueItem, TreeSnapshot};
use crate::trace::{Step, StepStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Widest bar drawn for an array element
const BAR_WIDTH: u128 = 32;

pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step<StepFrame>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ", step.data.title()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let mut lines = Vec::new();
    if let Some(problem) = status_line(step.status) {
        lines.push(problem);
        lines.push(Line::default());
    }
    lines.extend(structure_lines(&step.data, &step.highlight_indices));

    let visible_height = clamp_scroll(lines.len(), area.height, scroll_offset);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

fn status_line(status: StepStatus) -> Option<Line<'static>> {
    let text = match status {
        StepStatus::Ok => return None,
        StepStatus::EmptyStructure => "⚠ empty structure".to_string(),
        StepStatus::InvalidReference { id, node_count } => {
            format!("⚠ invalid node id {} (valid: 0..{})", id, node_count)
        }
        StepStatus::NotFound => "⚠ not found".to_string(),
    };
    Some(Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
    )))
}

/// Text rendering of one payload; `highlights` are slot indices or node ids
pub fn structure_lines(data: &StepFrame, highlights: &[usize]) -> Vec<Line<'static>> {
    match data {
        StepFrame::Sequence(values) => sequence_lines(values, highlights),
        StepFrame::DoublyList(list) => list_lines(
            list.nodes.iter().map(|n| (n.value, n.next)).collect(),
            list.head,
            list.tail,
            highlights,
            " ⇄ ",
            |index| {
                let node = &list.nodes[index];
                format!("prev={} next={}", slot(node.prev), slot(node.next))
            },
        ),
        StepFrame::SinglyList(list) => list_lines(
            list.nodes.iter().map(|n| (n.value, n.next)).collect(),
            list.head,
            list.tail,
            highlights,
            " → ",
            |index| format!("next={}", slot(list.nodes[index].next)),
        ),
        StepFrame::Tree(tree) => tree_lines(tree, highlights),
        StepFrame::Graph(graph) => graph_lines(graph, highlights),
        StepFrame::PriorityQueue(items) => queue_lines(items, highlights),
        StepFrame::Search(result) => search_lines(result, highlights),
    }
}

fn value_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    }
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(DEFAULT_THEME.comment))
}

fn label(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(DEFAULT_THEME.label))
}

fn placeholder(text: &str) -> Vec<Line<'static>> {
    vec![Line::from(muted(text.to_string()))]
}

fn slot(index: Option<usize>) -> String {
    index.map_or_else(|| "null".to_string(), |i| format!("#{}", i))
}

/// Integral weights print without a fraction
fn weight(w: f64) -> String {
    if w.fract() == 0.0 && w.abs() < 1e15 {
        format!("{}", w as i64)
    } else {
        format!("{}", w)
    }
}

fn sequence_lines(values: &[i64], highlights: &[usize]) -> Vec<Line<'static>> {
    if values.is_empty() {
        return placeholder("(empty array)");
    }
    let max = values
        .iter()
        .map(|v| u128::from(v.unsigned_abs()))
        .max()
        .unwrap_or(0)
        .max(1);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let highlighted = highlights.contains(&i);
            let width = (u128::from(v.unsigned_abs()) * BAR_WIDTH / max).max(1) as usize;
            Line::from(vec![
                muted(format!("[{:>2}] ", i)),
                Span::styled("█".repeat(width), value_style(highlighted)),
                Span::styled(format!(" {}", v), value_style(highlighted)),
            ])
        })
        .collect()
}

/// Nodes reachable from `head`, guarded against cycles in malformed input
fn chain(nexts: &[(i64, Option<usize>)], head: Option<usize>) -> Vec<usize> {
    let mut order = Vec::new();
    let mut current = head;
    while let Some(index) = current {
        if index >= nexts.len() || order.len() >= nexts.len() {
            break;
        }
        order.push(index);
        current = nexts[index].1;
    }
    order
}

fn list_lines(
    nodes: Vec<(i64, Option<usize>)>,
    head: Option<usize>,
    tail: Option<usize>,
    highlights: &[usize],
    arrow: &str,
    links: impl Fn(usize) -> String,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        label("head "),
        Span::raw(slot(head)),
        label("   tail "),
        Span::raw(slot(tail)),
    ])];

    let reachable = chain(&nodes, head);
    if reachable.is_empty() {
        lines.push(Line::from(muted("(empty list)")));
    } else {
        let mut spans = Vec::new();
        for (position, &index) in reachable.iter().enumerate() {
            if position > 0 {
                spans.push(muted(arrow.to_string()));
            }
            spans.push(Span::styled(
                format!("[{}]", nodes[index].0),
                value_style(highlights.contains(&index)),
            ));
        }
        lines.push(Line::from(spans));
    }

    if !nodes.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(muted("slots")));
        for (index, (value, _)) in nodes.iter().enumerate() {
            let mut spans = vec![
                muted(format!("#{:<3}", index)),
                Span::styled(format!("{:<6}", value), value_style(highlights.contains(&index))),
                Span::raw(links(index)),
            ];
            if !reachable.contains(&index) {
                spans.push(muted("  (unlinked)"));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn tree_lines(tree: &TreeSnapshot<i64>, highlights: &[usize]) -> Vec<Line<'static>> {
    let Some(root) = tree.root else {
        return placeholder("(empty tree)");
    };

    let mut lines = Vec::new();
    // (index, depth, edge label); right pushed first so left prints first
    let mut stack = vec![(root, 0usize, "root")];
    while let Some((index, depth, side)) = stack.pop() {
        if index >= tree.nodes.len() || lines.len() >= tree.nodes.len() {
            break;
        }
        let node = &tree.nodes[index];
        lines.push(Line::from(vec![
            Span::raw("  ".repeat(depth)),
            label(format!("{}: ", side)),
            Span::styled(node.value.to_string(), value_style(highlights.contains(&index))),
            muted(format!("  #{}", index)),
        ]));
        if let Some(right) = node.right_index {
            stack.push((right, depth + 1, "R"));
        }
        if let Some(left) = node.left_index {
            stack.push((left, depth + 1, "L"));
        }
    }
    lines
}

fn graph_lines(graph: &GraphData<String>, highlights: &[usize]) -> Vec<Line<'static>> {
    if graph.nodes.is_empty() {
        return placeholder("(empty graph)");
    }
    let mut lines = vec![Line::from(muted("nodes"))];
    for node in &graph.nodes {
        lines.push(Line::from(vec![
            muted(format!("({}) ", node.id)),
            Span::styled(node.value.clone(), value_style(highlights.contains(&node.id))),
        ]));
    }
    lines.extend(edge_lines(graph));
    lines
}

fn edge_lines(graph: &GraphData<String>) -> Vec<Line<'static>> {
    let edges = graph.unique_edges();
    let mut lines = vec![Line::default(), Line::from(muted("edges"))];
    if edges.is_empty() {
        lines.push(Line::from(muted("(none)")));
    }
    let arrow = if graph.directed { " → " } else { " — " };
    for edge in edges {
        lines.push(Line::from(vec![
            Span::raw(format!("{}{}{}", edge.from, arrow, edge.to)),
            muted(format!("  w={}", weight(edge.weight))),
        ]));
    }
    lines
}

fn queue_lines(items: &[PriorityQueueItem<String>], highlights: &[usize]) -> Vec<Line<'static>> {
    if items.is_empty() {
        return placeholder("(empty queue)");
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Line::from(vec![
                muted(format!("{:>2}. ", i)),
                Span::styled(format!("{:<12}", item.value), value_style(highlights.contains(&i))),
                label(format!("priority {}", item.priority)),
            ])
        })
        .collect()
}

fn id_list(ids: &[usize], separator: &str) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

fn search_lines(
    result: &GraphAlgorithmResult<String>,
    highlights: &[usize],
) -> Vec<Line<'static>> {
    let graph = &result.graph;
    if graph.nodes.is_empty() {
        return placeholder("(empty graph)");
    }

    let mut lines = vec![Line::from(muted("nodes"))];
    for node in &graph.nodes {
        let marker = if result.current_node == Some(node.id) {
            "▶ "
        } else if result.visited_nodes.contains(&node.id) {
            "✓ "
        } else {
            "  "
        };
        let mut spans = vec![
            label(marker),
            muted(format!("({}) ", node.id)),
            Span::styled(node.value.clone(), value_style(highlights.contains(&node.id))),
        ];
        if let Some(&distance) = result.distances.get(&node.id) {
            let text = if distance >= UNREACHABLE {
                "∞".to_string()
            } else {
                weight(distance)
            };
            spans.push(muted(format!("  dist {}", text)));
        }
        lines.push(Line::from(spans));
    }
    lines.extend(edge_lines(graph));

    lines.push(Line::default());
    lines.push(Line::from(vec![
        label("visited "),
        Span::raw(id_list(&result.visited_nodes, ", ")),
    ]));
    lines.push(Line::from(vec![
        label("path    "),
        Span::raw(id_list(&result.path, " → ")),
    ]));
    if !result.queue.is_empty() {
        lines.push(Line::from(vec![
            label("queue   "),
            Span::raw(format!("[{}]", id_list(&result.queue, ", "))),
        ]));
    }
    if !result.stack.is_empty() {
        lines.push(Line::from(vec![
            label("stack   "),
            Span::raw(format!("[{}]", id_list(&result.stack, ", "))),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algorithms::GraphAlgorithmKind;
    use crate::structures::{sample_graph, DoublyLinkedList, Graph};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(text).collect()
    }

    #[test]
    fn sequence_shows_every_value_in_order() {
        let lines = structure_lines(&StepFrame::Sequence(vec![3, -1, 0]), &[1]);
        assert_eq!(lines.len(), 3);
        assert!(text(&lines[0]).ends_with(" 3"));
        assert!(text(&lines[1]).ends_with(" -1"));
        let highlighted = &lines[1].spans[1];
        assert_eq!(highlighted.style.fg, Some(DEFAULT_THEME.highlight));
    }

    #[test]
    fn unlinked_slots_are_marked() {
        let mut list = DoublyLinkedList::new();
        list.add_last(1);
        list.add_last(2);
        let trace = list.remove_first();
        let frame = StepFrame::DoublyList(trace.last().unwrap().data.clone());
        let lines = all_text(&structure_lines(&frame, &[]));
        assert_eq!(lines[0], "head #1   tail #1");
        assert_eq!(lines[1], "[2]");
        assert!(lines.iter().any(|l| l.starts_with("#0") && l.ends_with("(unlinked)")));
    }

    #[test]
    fn empty_structures_have_placeholders() {
        let lines = all_text(&structure_lines(&StepFrame::PriorityQueue(Vec::new()), &[]));
        assert_eq!(lines, vec!["(empty queue)"]);
        let lines = all_text(&structure_lines(
            &StepFrame::Tree(TreeSnapshot {
                nodes: Vec::new(),
                root: None,
            }),
            &[],
        ));
        assert_eq!(lines, vec!["(empty tree)"]);
    }

    #[test]
    fn dijkstra_frame_lists_distances_and_path() {
        let graph = sample_graph().graph_data();
        let trace = GraphAlgorithmKind::Dijkstra.execute(&graph, 0, Some(4));
        let last = trace.last().unwrap();
        let lines = all_text(&structure_lines(
            &StepFrame::Search(last.data.clone()),
            &last.highlight_indices,
        ));
        assert!(lines.iter().any(|l| l.contains("(4) E") && l.ends_with("dist 7")));
        assert!(lines.contains(&"path    0 → 2 → 1 → 3 → 4".to_string()));
    }

    #[test]
    fn weights_print_without_trailing_zero() {
        assert_eq!(weight(4.0), "4");
        assert_eq!(weight(2.5), "2.5");
    }
}
