//! Main TUI application state and logic

use crate::session::Frame as StepFrame;
use crate::trace::Player;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Structure,
    Narration,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Structure => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Structure,
        }
    }
}

/// The main application state
pub struct App {
    /// Replay cursor over the recorded trace
    pub player: Player<StepFrame>,

    /// What is being replayed, shown in the narration title
    pub title: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub structure_scroll: usize,
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between auto-play steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(player: Player<StepFrame>, title: String, play_interval: Duration) -> Self {
        App {
            player,
            title,
            focused_pane: FocusedPane::Structure,
            structure_scroll: 0,
            narration_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.advance_playback();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One auto-play tick; stops playing at the last step
    fn advance_playback(&mut self) {
        if self.player.step_forward().is_ok() {
            self.status_message = "Playing...".to_string();
            self.narration_scroll = usize::MAX;
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Structure view (left) | narration (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        super::panes::render_structure_pane(
            frame,
            columns[0],
            self.player.current(),
            self.focused_pane == FocusedPane::Structure,
            &mut self.structure_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            columns[1],
            &self.title,
            self.player.trace(),
            self.player.position(),
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.player.position(),
            self.player.len(),
            self.is_playing,
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.player.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_sub(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_add(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.play_interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.player.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.narration_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        match self.player.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.narration_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    fn step_backward(&mut self) {
        match self.player.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.narration_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}
