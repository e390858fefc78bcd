//! Details pane: step narration, auxiliary structures and active highlights

use crate::input::Family;
use crate::snapshot::{join_nodes, join_values, Auxiliary, Outcome, Snapshot, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn slot(value: Option<Value>) -> String {
    value.map_or_else(|| "_".to_string(), |v| v.to_string())
}

/// Values with a caret before the element at `cursor`
fn with_cursor(values: &[Value], cursor: usize) -> String {
    let mut parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    if let Some(part) = parts.get_mut(cursor) {
        *part = format!("›{}", part);
    }
    format!("[{}]", parts.join(", "))
}

fn auxiliary_lines(auxiliary: &Auxiliary) -> Vec<Line<'static>> {
    match auxiliary {
        Auxiliary::Counts { counts, output } => {
            let counts = counts
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}:{}", i, c))
                .collect::<Vec<_>>()
                .join(" ");
            let output = output
                .iter()
                .map(|v| slot(*v))
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                heading("Counting"),
                field("count", counts),
                field("output", format!("[{}]", output)),
            ]
        }
        Auxiliary::Buckets {
            buckets,
            pass,
            place,
        } => {
            let mut lines = vec![
                heading("Buckets"),
                field("pass", format!("{} (place {})", pass, place)),
            ];
            lines.extend(
                buckets
                    .iter()
                    .enumerate()
                    .map(|(digit, bucket)| field(&digit.to_string(), format!("[{}]", join_values(bucket)))),
            );
            lines
        }
        Auxiliary::MergeBuffers {
            left,
            right,
            left_cursor,
            right_cursor,
        } => vec![
            heading("Merge buffers"),
            field("left", with_cursor(left, *left_cursor)),
            field("right", with_cursor(right, *right_cursor)),
        ],
        Auxiliary::Heap { size } => vec![heading("Heap"), field("heap size", size.to_string())],
        Auxiliary::Target(target) => vec![heading("Search"), field("target", target.to_string())],
        Auxiliary::Queue(queue) => vec![
            heading("Queue"),
            field("front → back", format!("[{}]", join_nodes(queue, ", "))),
        ],
        Auxiliary::CallStack(stack) => vec![
            heading("Call stack"),
            field("bottom → top", format!("[{}]", join_nodes(stack, ", "))),
        ],
    }
}

fn outcome_line(outcome: &Outcome) -> Line<'static> {
    let text = match outcome {
        Outcome::Sorted => "sorted".to_string(),
        Outcome::Found { index } => format!("found at index {}", index),
        Outcome::NotFound => "not found".to_string(),
        Outcome::Traversed { order } => format!("visited {}", join_nodes(order, " -> ")),
    };
    let color = match outcome {
        Outcome::NotFound => DEFAULT_THEME.error,
        _ => DEFAULT_THEME.success,
    };
    Line::from(Span::styled(
        format!("✓ {}", text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

pub fn render_details_pane(frame: &mut Frame, area: Rect, family: Family, snapshot: &Snapshot) {
    let mut lines = vec![
        heading("Step"),
        Line::from(Span::styled(
            snapshot.status.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    if let Some(outcome) = &snapshot.outcome {
        lines.push(outcome_line(outcome));
    }

    if let Some(visit) = snapshot.graph() {
        lines.push(Line::default());
        lines.push(heading("Visit order"));
        lines.push(Line::from(visit.path()));
    }

    if let Some(auxiliary) = &snapshot.auxiliary {
        lines.push(Line::default());
        lines.extend(auxiliary_lines(auxiliary));
    }

    if !snapshot.highlights.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Highlights"));
        for (role, mark) in snapshot.highlights.sorted() {
            lines.push(field(role.as_str(), mark.to_string()));
        }
    }

    if matches!(family, Family::Bfs | Family::Dfs) {
        lines.push(Line::default());
        lines.push(super::graph::graph_legend());
    }

    let block = Block::default()
        .title(format!(" {} ", family.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_marks_next_element() {
        assert_eq!(with_cursor(&[3, 7, 9], 1), "[3, ›7, 9]");
        assert_eq!(with_cursor(&[3, 7], 2), "[3, 7]");
    }

    #[test]
    fn test_counting_lines_show_empty_output_slots() {
        let lines = auxiliary_lines(&Auxiliary::Counts {
            counts: vec![0, 2],
            output: vec![None, Some(1)],
        });
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[1], "count: 0:0 1:2");
        assert_eq!(text[2], "output: [_, 1]");
    }
}
