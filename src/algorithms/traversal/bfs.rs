// Breadth-first traversal; nodes are marked visited when enqueued

use crate::algorithms::InvalidInputError;
use crate::input::{Family, Graph, NodeId};
use crate::snapshot::{Auxiliary, GraphVisit, Highlights, History, Mark, Outcome, Recorder, Role};
use std::collections::VecDeque;

fn queue_text(queue: &VecDeque<NodeId>) -> String {
    queue
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run(graph: &Graph) -> Result<History, InvalidInputError> {
    graph.validate()?;

    let start = graph.start();
    let mut visit = GraphVisit::new(graph.node_count());
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut rec = Recorder::new(Family::Bfs);
    let snapshot_queue =
        |queue: &VecDeque<NodeId>| Some(Auxiliary::Queue(queue.iter().copied().collect()));

    rec.record_graph(
        &visit,
        snapshot_queue(&queue),
        Highlights::new(),
        format!("Starting BFS from node {}", start),
    );

    queue.push_back(start);
    visit.mark(start);
    rec.record_graph(
        &visit,
        snapshot_queue(&queue),
        Highlights::new().with(Role::Enqueued, Mark::Node(start)),
        format!("Enqueued {}. Queue: [{}]", start, queue_text(&queue)),
    );

    while let Some(node) = queue.pop_front() {
        visit.record_visit(node);
        rec.record_graph(
            &visit,
            snapshot_queue(&queue),
            Highlights::new()
                .with(Role::Dequeued, Mark::Node(node))
                .with(Role::Processing, Mark::Node(node)),
            format!(
                "Dequeued {}. Path: {}. Queue: [{}]",
                node,
                visit.path(),
                queue_text(&queue)
            ),
        );

        for &neighbor in graph.neighbors(node) {
            let edge = Mark::Edge(node, neighbor);
            if visit.is_visited(neighbor) {
                rec.record_graph(
                    &visit,
                    snapshot_queue(&queue),
                    Highlights::new()
                        .with(Role::Processing, Mark::Node(node))
                        .with(Role::CurrentEdge, edge)
                        .with(Role::NeighborVisited, Mark::Node(neighbor)),
                    format!("Checking neighbor {} of {}: already visited", neighbor, node),
                );
                continue;
            }

            rec.record_graph(
                &visit,
                snapshot_queue(&queue),
                Highlights::new()
                    .with(Role::Processing, Mark::Node(node))
                    .with(Role::CurrentEdge, edge)
                    .with(Role::CheckingNeighbor, Mark::Node(neighbor)),
                format!("Checking neighbor {} of {}: unvisited", neighbor, node),
            );

            visit.mark(neighbor);
            queue.push_back(neighbor);
            rec.record_graph(
                &visit,
                snapshot_queue(&queue),
                Highlights::new()
                    .with(Role::Processing, Mark::Node(node))
                    .with(Role::CurrentEdge, edge)
                    .with(Role::Enqueued, Mark::Node(neighbor)),
                format!(
                    "Enqueued {}. Queue: [{}]",
                    neighbor,
                    queue_text(&queue)
                ),
            );
        }

        rec.record_graph(
            &visit,
            snapshot_queue(&queue),
            Highlights::new().with(Role::FinishedNode, Mark::Node(node)),
            format!("Finished processing neighbors of {}", node),
        );
    }

    let order = visit.order.clone();
    Ok(rec.finish_graph(
        &visit,
        snapshot_queue(&queue),
        Highlights::new(),
        format!("BFS complete. Path: {}", visit.path()),
        Outcome::Traversed { order },
    ))
}
