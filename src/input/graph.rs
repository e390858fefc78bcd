//! Undirected graph model and the random connected-graph generator.
//!
//! Generation runs in two phases that can be exercised independently:
//!
//! 1. [`add_random_edges`] gives every node 2–3 random edges to peers it is
//!    not yet connected to.
//! 2. [`repair_connectivity`] walks the nodes in identifier order and links
//!    each node to its predecessor whenever the two are in different
//!    components, which leaves exactly one component.

use crate::algorithms::InvalidInputError;
use crate::config::{clamp_node_count, LAYOUT_HEIGHT, LAYOUT_PADDING, LAYOUT_WIDTH};
use rand::Rng;
use std::collections::VecDeque;
use std::f64::consts::PI;
use std::fmt;

/// Node identifier; displayed as a letter (`A`, `B`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'A' + self.0 as u8) as char)
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// 2-D layout coordinate (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Undirected graph with ordered adjacency lists
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    positions: Vec<Point>,
    adjacency: Vec<Vec<NodeId>>,
    start: NodeId,
}

impl Graph {
    /// Build a graph from raw parts without validation
    pub fn from_parts(positions: Vec<Point>, adjacency: Vec<Vec<NodeId>>, start: NodeId) -> Self {
        Graph {
            positions,
            adjacency,
            start,
        }
    }

    /// Graph with `node_count` nodes on a circle and no edges
    pub fn with_nodes(node_count: usize) -> Self {
        Graph {
            positions: circular_layout(node_count),
            adjacency: vec![Vec::new(); node_count],
            start: NodeId(0),
        }
    }

    /// Circular layout plus the given undirected edges, inserted in order
    pub fn with_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Graph::with_nodes(node_count);
        for &(a, b) in edges {
            graph.add_edge(NodeId(a), NodeId(b));
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.adjacency.len()).map(NodeId)
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn set_start(&mut self, start: NodeId) {
        self.start = start;
    }

    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions.get(node.index()).copied()
    }

    /// Neighbors in insertion order
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Add an undirected edge; returns false for self-loops, unknown nodes
    /// or an edge that already exists
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        let count = self.node_count();
        if a == b || a.index() >= count || b.index() >= count || self.has_edge(a, b) {
            return false;
        }
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        true
    }

    /// Each undirected edge once, as `(lower, higher)`
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::new();
        for node in self.nodes() {
            for &neighbor in self.neighbors(node) {
                if node < neighbor {
                    edges.push((node, neighbor));
                }
            }
        }
        edges
    }

    /// Nodes reachable from `from`, indexed by node id
    pub fn reachable_from(&self, from: NodeId) -> Vec<bool> {
        let mut seen = vec![false; self.node_count()];
        if from.index() >= seen.len() {
            return seen;
        }
        let mut queue = VecDeque::from([from]);
        seen[from.index()] = true;
        while let Some(node) = queue.pop_front() {
            for &next in self.neighbors(node) {
                if let Some(slot) = seen.get_mut(next.index()) {
                    if !*slot {
                        *slot = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        seen
    }

    pub fn is_connected(&self) -> bool {
        self.node_count() > 0 && self.reachable_from(self.start).iter().all(|&r| r)
    }

    /// Check the structural preconditions of the traversal algorithms
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let count = self.node_count();
        if count == 0 {
            return Err(InvalidInputError::EmptyGraph);
        }
        if self.start.index() >= count {
            return Err(InvalidInputError::StartOutOfRange {
                start: self.start,
                nodes: count,
            });
        }
        for node in self.nodes() {
            for &neighbor in self.neighbors(node) {
                if neighbor.index() >= count {
                    return Err(InvalidInputError::DanglingNeighbor {
                        from: node,
                        to: neighbor,
                    });
                }
                if !self.has_edge(neighbor, node) {
                    return Err(InvalidInputError::AsymmetricEdge {
                        from: node,
                        to: neighbor,
                    });
                }
            }
        }
        let reachable = self.reachable_from(self.start);
        if let Some(index) = reachable.iter().position(|&r| !r) {
            return Err(InvalidInputError::DisconnectedGraph {
                node: NodeId(index),
                start: self.start,
            });
        }
        Ok(())
    }
}

/// Evenly spaced positions on a circle inside the layout canvas
pub fn circular_layout(node_count: usize) -> Vec<Point> {
    let radius = LAYOUT_WIDTH.min(LAYOUT_HEIGHT) / 2.0 - LAYOUT_PADDING;
    let center_x = LAYOUT_WIDTH / 2.0;
    let center_y = LAYOUT_HEIGHT / 2.0;

    (0..node_count)
        .map(|i| {
            let angle = (i as f64 / node_count as f64) * 2.0 * PI;
            Point {
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
            }
        })
        .collect()
}

/// Random connected graph; the node count is clamped to the supported range
pub fn generate_graph<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Graph {
    let mut graph = Graph::with_nodes(clamp_node_count(node_count));
    add_random_edges(&mut graph, rng);
    repair_connectivity(&mut graph);
    graph
}

/// Random phase: each node, in order, picks 2–3 peers it is not yet linked to
pub fn add_random_edges<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R) {
    for node in 0..graph.node_count() {
        let node = NodeId(node);
        let wanted = rng.random_range(2..=3usize);
        let mut available: Vec<NodeId> = graph
            .nodes()
            .filter(|&peer| peer != node && !graph.has_edge(node, peer))
            .collect();

        for _ in 0..wanted.min(available.len()) {
            let pick = rng.random_range(0..available.len());
            let peer = available.remove(pick);
            graph.add_edge(node, peer);
        }
    }
}

/// Repair phase: link each node to its predecessor when they sit in
/// different components. Returns the number of edges added.
pub fn repair_connectivity(graph: &mut Graph) -> usize {
    let mut components = DisjointSet::new(graph.node_count());
    for (a, b) in graph.edges() {
        components.union(a.index(), b.index());
    }

    let mut added = 0;
    for index in 1..graph.node_count() {
        if components.find(index) != components.find(index - 1) {
            graph.add_edge(NodeId(index), NodeId(index - 1));
            components.union(index, index - 1);
            added += 1;
        }
    }
    added
}

/// Union-find over node indices
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}
