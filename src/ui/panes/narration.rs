//! Step narration pane: descriptions up to the current step

use super::{border_style, clamp_scroll};
use crate::session::Frame as StepFrame;
use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    trace: &Trace<StepFrame>,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let lines: Vec<Line> = trace
        .iter()
        .take(position + 1)
        .enumerate()
        .map(|(index, step)| {
            let is_current = index == position;
            let mut text_style = Style::default().fg(if step.status.is_ok() {
                DEFAULT_THEME.fg
            } else {
                DEFAULT_THEME.error
            });
            if is_current {
                text_style = text_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            } else {
                text_style = text_style.add_modifier(Modifier::DIM);
            }
            Line::from(vec![
                Span::styled(
                    format!("{:>4} ", index + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(step.description.clone(), text_style),
            ])
        })
        .collect();

    // Only counts unwrapped lines; long descriptions may push the cursor a bit low
    let visible_height = clamp_scroll(lines.len(), area.height, scroll_offset);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
