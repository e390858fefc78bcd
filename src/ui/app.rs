//! Main TUI application state and logic

use crate::algorithms::InvalidInputError;
use crate::config::{clamp_size, default_size};
use crate::input::AlgorithmInput;
use crate::playback::{Controller, PlaybackState};
use crate::ui::panes::{self, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// Longest time the loop waits for a key before checking the tick timer
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// Playback controller for the selected family
    pub controller: Controller,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a controller
    pub fn new(controller: Controller) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Ready!"),
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

            // Handle auto-play mode
            if self.controller.poll(Instant::now())
                && self.controller.current_state() == PlaybackState::Concluded
            {
                self.status_message = "Playback complete".to_string();
            }

            // Wake up early when the next tick is due sooner than the poll interval
            let timeout = self
                .controller
                .time_until_tick(Instant::now())
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Current input size: the size hint, or the family default
    fn current_size(&self) -> usize {
        let family = self.controller.family();
        match self.controller.input() {
            Some(AlgorithmInput::Graph(graph)) => graph.node_count(),
            Some(input) => input.values().map_or(default_size(family), <[_]>::len),
            None => self
                .controller
                .size_hint()
                .unwrap_or_else(|| default_size(family)),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        let family = self.controller.family();
        if let Some(snapshot) = self.controller.current_snapshot() {
            let title = format!("{} ({})", family.name(), self.controller.current_state());
            match (self.controller.input(), snapshot.sequence()) {
                (Some(AlgorithmInput::Graph(graph)), _) => {
                    panes::render_graph_pane(frame, columns[0], &title, graph, snapshot);
                }
                (_, Some(values)) => {
                    panes::render_sequence_pane(frame, columns[0], &title, values, snapshot);
                }
                _ => {}
            }
            panes::render_details_pane(frame, columns[1], family, snapshot);
        }

        let data = StatusRenderData {
            message: &self.status_message,
            cursor: self.controller.cursor(),
            total_steps: self.controller.history().map_or(0, |h| h.len()),
            state: self.controller.current_state(),
            size: self.current_size(),
        };
        panes::render_status_bar(frame, main_chunks[1], &data);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right => {
                self.controller.pause();
                self.status_message = if self.controller.step() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                // Jump to end of the run
                self.controller.pause();
                while self.controller.step() {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Char('r') | KeyCode::Backspace => {
                let result = self.controller.reset();
                self.report(result, "Reset to the first step");
            }
            KeyCode::Char('g') => {
                let result = self.controller.regenerate();
                self.report(result, "Generated a new input");
            }
            KeyCode::Tab => {
                let next = self.controller.family().next();
                let result = self.controller.set_family(next);
                self.report(result, next.name());
            }
            KeyCode::BackTab => {
                let prev = self.controller.family().prev();
                let result = self.controller.set_family(prev);
                self.report(result, prev.name());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.resize(-1),
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.controller.current_state() == PlaybackState::Playing {
            self.controller.pause();
            self.status_message = "Paused".to_string();
        } else if self.controller.start(Instant::now()) {
            self.status_message = "Playing...".to_string();
        }
    }

    fn resize(&mut self, delta: isize) {
        let family = self.controller.family();
        let current = self.current_size();
        let next = clamp_size(family, current.saturating_add_signed(delta));
        if next == current {
            self.status_message = format!("Size stays at {}", current);
            return;
        }
        self.controller.set_size_hint(Some(next));
        let result = self.controller.regenerate();
        self.report(result, &format!("Size set to {}", next));
    }

    fn report(&mut self, result: Result<(), InvalidInputError>, success: &str) {
        self.status_message = match result {
            Ok(()) => success.to_string(),
            Err(e) => {
                warn!(error = %e, "controller rejected input");
                format!("Error: {}", e)
            }
        };
    }
}
