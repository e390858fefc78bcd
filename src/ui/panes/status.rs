//! Status bar rendering with keybindings and playback state

use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows for one frame
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub cursor: Option<usize>,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub size: usize,
}

fn state_badge(state: PlaybackState, cursor: Option<usize>) -> Option<(&'static str, Color)> {
    match state {
        PlaybackState::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackState::Paused => Some((" ⏸ PAUSED ", DEFAULT_THEME.primary)),
        PlaybackState::Concluded => Some((" END ", DEFAULT_THEME.error)),
        PlaybackState::Ready if cursor == Some(0) => Some((" START ", DEFAULT_THEME.success)),
        PlaybackState::Ready | PlaybackState::Idle => None,
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let step_text = match data.cursor {
        Some(cursor) => format!(" Step {}/{} ", cursor + 1, data.total_steps),
        None => " Step -/- ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" n={} ", data.size),
            Style::default()
                .bg(DEFAULT_THEME.comment)
                .fg(Color::Black),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: [(&str, &str); 7] = [
        (" → ", " step "),
        (" ⎵ ", " play "),
        (" ↵ ", " end "),
        (" r ", " reset "),
        (" g ", " new input "),
        (" ⇥ ", " algorithm "),
        (" +/- ", " size "),
    ];

    let mut right_spans = Vec::new();
    for (key, desc) in bindings {
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(" ", desc_style));
    }
    right_spans.push(Span::styled("q", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    if let Some((label, color)) = state_badge(data.state, data.cursor) {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
