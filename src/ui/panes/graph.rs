//! Graph pane: circular layout drawn on a braille canvas

use crate::config::{LAYOUT_HEIGHT, LAYOUT_WIDTH};
use crate::input::{Graph, NodeId};
use crate::snapshot::{Auxiliary, GraphVisit, Highlights, Role, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{self, Canvas},
        Block, Borders,
    },
    Frame,
};

const ACTIVE_NODE_ROLES: &[Role] = &[
    Role::Visiting,
    Role::Processing,
    Role::Dequeued,
    Role::BacktrackedFrom,
];

const TOUCHED_NODE_ROLES: &[Role] = &[
    Role::MovingTo,
    Role::Enqueued,
    Role::CheckingNeighbor,
    Role::NeighborVisited,
];

fn node_marked(highlights: &Highlights, roles: &[Role], node: NodeId) -> bool {
    roles
        .iter()
        .any(|role| highlights.node(*role) == Some(node))
}

fn node_color(snapshot: &Snapshot, visit: &GraphVisit, node: NodeId) -> Color {
    let highlights = &snapshot.highlights;
    if node_marked(highlights, ACTIVE_NODE_ROLES, node) {
        DEFAULT_THEME.secondary
    } else if node_marked(highlights, TOUCHED_NODE_ROLES, node) {
        DEFAULT_THEME.compare
    } else if highlights.node(Role::FinishedNode) == Some(node) || snapshot.is_complete() {
        DEFAULT_THEME.success
    } else if visit.is_visited(node) {
        DEFAULT_THEME.visited
    } else {
        DEFAULT_THEME.bar
    }
}

fn is_current_edge(highlights: &Highlights, a: NodeId, b: NodeId) -> bool {
    matches!(
        highlights.edge(Role::CurrentEdge),
        Some((from, to)) if (from, to) == (a, b) || (from, to) == (b, a)
    )
}

/// Nodes on the frontier (queue or call stack), shown underlined
fn frontier(snapshot: &Snapshot) -> &[NodeId] {
    match &snapshot.auxiliary {
        Some(Auxiliary::Queue(nodes)) | Some(Auxiliary::CallStack(nodes)) => nodes,
        _ => &[],
    }
}

pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    graph: &Graph,
    snapshot: &Snapshot,
) {
    let empty = GraphVisit::new(graph.node_count());
    let visit = snapshot.graph().unwrap_or(&empty);
    let frontier = frontier(snapshot);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, LAYOUT_WIDTH])
        .y_bounds([0.0, LAYOUT_HEIGHT])
        .paint(|ctx| {
            // Layout y grows downward, canvas y grows upward
            for (a, b) in graph.edges() {
                let (Some(pa), Some(pb)) = (graph.position(a), graph.position(b)) else {
                    continue;
                };
                let color = if is_current_edge(&snapshot.highlights, a, b) {
                    DEFAULT_THEME.compare
                } else {
                    DEFAULT_THEME.comment
                };
                ctx.draw(&canvas::Line {
                    x1: pa.x,
                    y1: LAYOUT_HEIGHT - pa.y,
                    x2: pb.x,
                    y2: LAYOUT_HEIGHT - pb.y,
                    color,
                });
            }

            ctx.layer();

            for node in graph.nodes() {
                let Some(point) = graph.position(node) else {
                    continue;
                };
                let mut style = Style::default()
                    .fg(Color::Black)
                    .bg(node_color(snapshot, visit, node))
                    .add_modifier(Modifier::BOLD);
                if frontier.contains(&node) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                let label = if node == graph.start() {
                    format!("[{}]", node)
                } else {
                    format!(" {} ", node)
                };
                ctx.print(point.x, LAYOUT_HEIGHT - point.y, Span::styled(label, style));
            }
        });

    frame.render_widget(canvas, area);
}

/// Legend line shared by both traversal families
pub fn graph_legend() -> Line<'static> {
    let swatch = |color: Color, text: &'static str| {
        [
            Span::styled("  ", Style::default().bg(color)),
            Span::styled(format!(" {}  ", text), Style::default().fg(DEFAULT_THEME.fg)),
        ]
    };
    Line::from(
        [
            swatch(DEFAULT_THEME.secondary, "current"),
            swatch(DEFAULT_THEME.compare, "neighbor"),
            swatch(DEFAULT_THEME.visited, "visited"),
            swatch(DEFAULT_THEME.success, "finished"),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Mark, PrimaryState};

    fn snapshot_with(highlights: Highlights) -> Snapshot {
        Snapshot {
            primary: PrimaryState::Graph(GraphVisit::new(3)),
            auxiliary: None,
            highlights,
            status: String::new(),
            outcome: None,
        }
    }

    #[test]
    fn test_current_edge_matches_either_direction() {
        let highlights =
            Highlights::new().with(Role::CurrentEdge, Mark::Edge(NodeId(0), NodeId(2)));
        assert!(is_current_edge(&highlights, NodeId(2), NodeId(0)));
        assert!(is_current_edge(&highlights, NodeId(0), NodeId(2)));
        assert!(!is_current_edge(&highlights, NodeId(0), NodeId(1)));
    }

    #[test]
    fn test_active_node_outranks_visited() {
        let snapshot = snapshot_with(Highlights::new().with(Role::Visiting, Mark::Node(NodeId(1))));
        let mut visit = GraphVisit::new(3);
        visit.mark(NodeId(1));
        visit.mark(NodeId(2));

        assert_eq!(node_color(&snapshot, &visit, NodeId(1)), DEFAULT_THEME.secondary);
        assert_eq!(node_color(&snapshot, &visit, NodeId(2)), DEFAULT_THEME.visited);
        assert_eq!(node_color(&snapshot, &visit, NodeId(0)), DEFAULT_THEME.bar);
    }
}
