//! Bar chart of the integer sequence with per-index highlight colors

use crate::snapshot::{Auxiliary, Highlights, Outcome, Role, Snapshot, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding},
    Frame,
};

/// Roles checked in order; the first one covering an index picks its color
const BAR_ROLES: &[Role] = &[
    Role::Found,
    Role::Swapped,
    Role::Shifted,
    Role::Extracted,
    Role::Written,
    Role::Inserted,
    Role::Collected,
    Role::OutputIndex,
    Role::PivotPlaced,
    Role::Comparing,
    Role::Writing,
    Role::InputIndex,
    Role::PivotIndex,
    Role::Key,
    Role::MinIndex,
    Role::Current,
    Role::Mid,
    Role::HeapRoot,
    Role::Boundary,
    Role::Low,
    Role::High,
    Role::Merged,
    Role::ActiveRange,
];

fn role_color(role: Role) -> Color {
    match role {
        Role::Found | Role::PivotPlaced | Role::Merged => DEFAULT_THEME.success,
        Role::Swapped | Role::Shifted | Role::Extracted => DEFAULT_THEME.error,
        Role::Written | Role::Inserted | Role::Collected | Role::OutputIndex => {
            DEFAULT_THEME.secondary
        }
        Role::Comparing | Role::Writing | Role::InputIndex | Role::Current => {
            DEFAULT_THEME.compare
        }
        Role::PivotIndex | Role::Key | Role::MinIndex | Role::Mid | Role::HeapRoot => {
            DEFAULT_THEME.pivot
        }
        Role::Boundary | Role::Low | Role::High => DEFAULT_THEME.primary,
        _ => DEFAULT_THEME.range,
    }
}

/// First index of the sorted suffix, if the snapshot has one
fn sorted_from(snapshot: &Snapshot, len: usize) -> Option<usize> {
    if matches!(snapshot.outcome, Some(Outcome::Sorted)) {
        return Some(0);
    }
    if let Some(index) = snapshot.highlights.index(Role::SortedFrom) {
        return Some(index);
    }
    match snapshot.auxiliary {
        Some(Auxiliary::Heap { size }) if size < len => Some(size),
        _ => None,
    }
}

fn bar_color(highlights: &Highlights, index: usize, sorted_from: Option<usize>) -> Color {
    let marked = BAR_ROLES.iter().find(|role| {
        highlights
            .get(**role)
            .is_some_and(|mark| mark.covers(index))
    });
    match marked {
        Some(role) => role_color(*role),
        None if sorted_from.is_some_and(|from| index >= from) => DEFAULT_THEME.success,
        None => DEFAULT_THEME.bar,
    }
}

/// Widest bar that still fits `count` bars with one-cell gaps
fn bar_width(area: Rect, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(4) as usize;
    let width = inner.saturating_sub(count - 1) / count;
    width.clamp(1, 8) as u16
}

pub fn render_sequence_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[Value],
    snapshot: &Snapshot,
) {
    let sorted_from = sorted_from(snapshot, values.len());
    let target = match snapshot.auxiliary {
        Some(Auxiliary::Target(target)) => Some(target),
        _ => None,
    };

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = bar_color(&snapshot.highlights, i, sorted_from);
            let mut label_style = Style::default().fg(DEFAULT_THEME.comment);
            if target == Some(value) {
                label_style = label_style.fg(DEFAULT_THEME.pivot);
            }
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::styled(i.to_string(), label_style))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
        .padding(Padding::horizontal(1));

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, values.len()))
        .bar_gap(1);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Mark;

    #[test]
    fn test_comparison_beats_sorted_suffix() {
        let highlights = Highlights::new().with(Role::Comparing, Mark::Pair(2, 3));
        assert_eq!(bar_color(&highlights, 3, Some(3)), DEFAULT_THEME.compare);
        assert_eq!(bar_color(&highlights, 4, Some(3)), DEFAULT_THEME.success);
        assert_eq!(bar_color(&highlights, 0, Some(3)), DEFAULT_THEME.bar);
    }

    #[test]
    fn test_bar_width_fits_area() {
        let area = Rect::new(0, 0, 64, 20);
        assert_eq!(bar_width(area, 15), 3);
        assert_eq!(bar_width(area, 0), 1);
        assert_eq!(bar_width(Rect::new(0, 0, 10, 5), 40), 1);
    }
}
