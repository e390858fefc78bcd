// Recursive depth-first traversal with an explicit call-stack model

use crate::algorithms::InvalidInputError;
use crate::input::{Family, Graph, NodeId};
use crate::snapshot::{
    join_nodes, Auxiliary, GraphVisit, Highlights, History, Mark, Outcome, Recorder, Role,
};

struct DepthFirst<'g> {
    graph: &'g Graph,
    visit: GraphVisit,
    /// Display-only model of the recursion, bottom first
    call_stack: Vec<NodeId>,
    rec: Recorder,
}

impl DepthFirst<'_> {
    fn record(&mut self, highlights: Highlights, status: String) {
        self.rec.record_graph(
            &self.visit,
            Some(Auxiliary::CallStack(self.call_stack.clone())),
            highlights,
            status,
        );
    }

    fn stack_text(&self) -> String {
        join_nodes(&self.call_stack, ", ")
    }

    fn explore(&mut self, node: NodeId) {
        self.visit.mark(node);
        self.visit.record_visit(node);
        self.call_stack.push(node);
        let status = format!(
            "Visiting {}. Path: {}. Stack: [{}]",
            node,
            self.visit.path(),
            self.stack_text()
        );
        self.record(Highlights::new().with(Role::Visiting, Mark::Node(node)), status);

        let graph = self.graph;
        for &neighbor in graph.neighbors(node) {
            let edge = Mark::Edge(node, neighbor);
            if self.visit.is_visited(neighbor) {
                self.record(
                    Highlights::new()
                        .with(Role::Visiting, Mark::Node(node))
                        .with(Role::CurrentEdge, edge)
                        .with(Role::NeighborVisited, Mark::Node(neighbor)),
                    format!("Checking neighbor {} of {}: already visited", neighbor, node),
                );
                continue;
            }

            self.record(
                Highlights::new()
                    .with(Role::Visiting, Mark::Node(node))
                    .with(Role::CurrentEdge, edge)
                    .with(Role::MovingTo, Mark::Node(neighbor)),
                format!("Moving from {} to unvisited neighbor {}", node, neighbor),
            );

            self.explore(neighbor);

            let status = format!(
                "Backtracked from {} to {}. Stack: [{}]",
                neighbor,
                node,
                self.stack_text()
            );
            self.record(
                Highlights::new()
                    .with(Role::Visiting, Mark::Node(node))
                    .with(Role::BacktrackedFrom, Mark::Node(neighbor)),
                status,
            );
        }

        self.call_stack.pop();
        let status = format!(
            "Finished exploring {}. Stack: [{}]",
            node,
            self.stack_text()
        );
        self.record(Highlights::new().with(Role::FinishedNode, Mark::Node(node)), status);
    }
}

pub fn run(graph: &Graph) -> Result<History, InvalidInputError> {
    graph.validate()?;

    let start = graph.start();
    let mut dfs = DepthFirst {
        graph,
        visit: GraphVisit::new(graph.node_count()),
        call_stack: Vec::new(),
        rec: Recorder::new(Family::Dfs),
    };

    // The stack model starts with the first visit
    dfs.rec.record_graph(
        &dfs.visit,
        None,
        Highlights::new(),
        format!("Starting DFS from node {}", start),
    );

    dfs.explore(start);

    let DepthFirst { visit, rec, .. } = dfs;
    let order = visit.order.clone();
    Ok(rec.finish_graph(
        &visit,
        Some(Auxiliary::CallStack(Vec::new())),
        Highlights::new(),
        format!("DFS complete. Path: {}", visit.path()),
        Outcome::Traversed { order },
    ))
}
