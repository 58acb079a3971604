//! TUI pane rendering
//!
//! - [`structure`]: the current step's data, drawn per frame kind with the
//!   step's highlights
//! - [`narration`]: descriptions of every step up to the cursor
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports one `render_*` function; scroll offsets are owned by the
//! [`App`](crate::ui::App) and clamped here.

pub mod narration;
pub mod status;
pub mod structure;

pub use narration::render_narration_pane;
pub use status::render_status_bar;
pub use structure::{render_structure_pane, structure_lines};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page stays full; returns the visible height
fn clamp_scroll(total: usize, area_height: u16, scroll_offset: &mut usize) -> usize {
    let visible_height = area_height.saturating_sub(2).max(1) as usize; // borders
    if total > visible_height {
        *scroll_offset = (*scroll_offset).min(total - visible_height);
    } else {
        *scroll_offset = 0;
    }
    visible_height
}
