// Snapshot history for step-by-step replay

use crate::input::graph::NodeId;
use crate::input::Family;
use rustc_hash::FxHashMap;
use std::fmt;

/// Element type of every integer sequence
pub type Value = i32;

/// Visitation state of a graph at one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphVisit {
    pub visited: Vec<bool>,
    pub order: Vec<NodeId>,
}

impl GraphVisit {
    pub fn new(node_count: usize) -> Self {
        GraphVisit {
            visited: vec![false; node_count],
            order: Vec::new(),
        }
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(false)
    }

    /// Mark a node as discovered
    pub fn mark(&mut self, node: NodeId) {
        if let Some(slot) = self.visited.get_mut(node.index()) {
            *slot = true;
        }
    }

    /// Append a node to the visit order
    pub fn record_visit(&mut self, node: NodeId) {
        self.order.push(node);
    }

    /// Visit order rendered as `A -> B -> C`
    pub fn path(&self) -> String {
        join_nodes(&self.order, " -> ")
    }
}

/// Full-value copy of the subject the algorithm works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryState {
    Sequence(Vec<Value>),
    Graph(GraphVisit),
}

/// Secondary structures shown alongside the subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auxiliary {
    /// Counting sort: count table and the output array being filled
    Counts {
        counts: Vec<usize>,
        output: Vec<Option<Value>>,
    },
    /// Radix sort: ten digit buckets for the current pass
    Buckets {
        buckets: Vec<Vec<Value>>,
        pass: usize,
        place: u64,
    },
    /// Merge sort: the two halves copied out before interleaving
    MergeBuffers {
        left: Vec<Value>,
        right: Vec<Value>,
        left_cursor: usize,
        right_cursor: usize,
    },
    /// Heap sort: indices below `size` are still inside the heap
    Heap { size: usize },
    /// Searches: the value being looked for
    Target(Value),
    /// Breadth-first traversal queue, front first
    Queue(Vec<NodeId>),
    /// Depth-first call stack, bottom first
    CallStack(Vec<NodeId>),
}

/// Semantic highlight roles understood by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    // Sequence positions
    Comparing,
    Swapped,
    Pass,
    SortedFrom,
    Current,
    MinIndex,
    Key,
    Shifted,
    Inserted,
    ActiveRange,
    Mid,
    Writing,
    Written,
    Merged,
    PivotIndex,
    Boundary,
    PivotPlaced,
    HeapRoot,
    HeapBuilt,
    Extracted,
    InputIndex,
    CountIndex,
    OutputIndex,
    Place,
    Bucket,
    Collected,
    Low,
    High,
    Found,
    // Graph traversal
    Enqueued,
    Dequeued,
    Processing,
    CheckingNeighbor,
    NeighborVisited,
    CurrentEdge,
    Visiting,
    MovingTo,
    BacktrackedFrom,
    FinishedNode,
}

impl Role {
    /// Stable role name used by renderers and debug output
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Comparing => "comparing",
            Role::Swapped => "swapped",
            Role::Pass => "pass",
            Role::SortedFrom => "sortedFrom",
            Role::Current => "current",
            Role::MinIndex => "minIndex",
            Role::Key => "key",
            Role::Shifted => "shifted",
            Role::Inserted => "inserted",
            Role::ActiveRange => "activeRange",
            Role::Mid => "mid",
            Role::Writing => "writing",
            Role::Written => "written",
            Role::Merged => "merged",
            Role::PivotIndex => "pivotIndex",
            Role::Boundary => "boundary",
            Role::PivotPlaced => "pivotPlaced",
            Role::HeapRoot => "heapRoot",
            Role::HeapBuilt => "heapBuilt",
            Role::Extracted => "extracted",
            Role::InputIndex => "inputIndex",
            Role::CountIndex => "countIndex",
            Role::OutputIndex => "outputIndex",
            Role::Place => "place",
            Role::Bucket => "bucket",
            Role::Collected => "collected",
            Role::Low => "low",
            Role::High => "high",
            Role::Found => "found",
            Role::Enqueued => "enqueued",
            Role::Dequeued => "dequeued",
            Role::Processing => "processing",
            Role::CheckingNeighbor => "checkingNeighbor",
            Role::NeighborVisited => "neighborVisited",
            Role::CurrentEdge => "currentEdge",
            Role::Visiting => "visiting",
            Role::MovingTo => "movingTo",
            Role::BacktrackedFrom => "backtrackedFrom",
            Role::FinishedNode => "finishedNode",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a highlight role points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Index(usize),
    Pair(usize, usize),
    /// Inclusive index range
    Range(usize, usize),
    Value(Value),
    Node(NodeId),
    Edge(NodeId, NodeId),
    Flag,
}

impl Mark {
    /// Whether this mark covers the given sequence index
    pub fn covers(&self, index: usize) -> bool {
        match *self {
            Mark::Index(i) => i == index,
            Mark::Pair(a, b) => a == index || b == index,
            Mark::Range(low, high) => (low..=high).contains(&index),
            _ => false,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Index(i) => write!(f, "{}", i),
            Mark::Pair(a, b) => write!(f, "({}, {})", a, b),
            Mark::Range(low, high) => write!(f, "[{}-{}]", low, high),
            Mark::Value(v) => write!(f, "{}", v),
            Mark::Node(n) => write!(f, "{}", n),
            Mark::Edge(from, to) => write!(f, "{}-{}", from, to),
            Mark::Flag => f.write_str("yes"),
        }
    }
}

/// Role -> mark table for one snapshot; an absent role is not applicable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights(FxHashMap<Role, Mark>);

impl Highlights {
    pub fn new() -> Self {
        Highlights(FxHashMap::default())
    }

    /// Builder-style insert
    pub fn with(mut self, role: Role, mark: Mark) -> Self {
        self.0.insert(role, mark);
        self
    }

    /// Insert only when a mark is present
    pub fn with_opt(self, role: Role, mark: Option<Mark>) -> Self {
        match mark {
            Some(mark) => self.with(role, mark),
            None => self,
        }
    }

    pub fn get(&self, role: Role) -> Option<&Mark> {
        self.0.get(&role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains_key(&role)
    }

    pub fn index(&self, role: Role) -> Option<usize> {
        match self.get(role) {
            Some(Mark::Index(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn pair(&self, role: Role) -> Option<(usize, usize)> {
        match self.get(role) {
            Some(Mark::Pair(a, b)) => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn node(&self, role: Role) -> Option<NodeId> {
        match self.get(role) {
            Some(Mark::Node(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn edge(&self, role: Role) -> Option<(NodeId, NodeId)> {
        match self.get(role) {
            Some(Mark::Edge(from, to)) => Some((*from, *to)),
            _ => None,
        }
    }

    /// Entries ordered by role, for stable display
    pub fn sorted(&self) -> Vec<(Role, Mark)> {
        let mut entries: Vec<(Role, Mark)> = self.0.iter().map(|(r, m)| (*r, *m)).collect();
        entries.sort_by_key(|(role, _)| *role);
        entries
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Summary carried by the terminal snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sorted,
    Found { index: usize },
    NotFound,
    Traversed { order: Vec<NodeId> },
}

/// One recorded instant of an algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub primary: PrimaryState,
    pub auxiliary: Option<Auxiliary>,
    pub highlights: Highlights,
    pub status: String,
    /// Set only on the terminal snapshot
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn sequence(&self) -> Option<&[Value]> {
        match &self.primary {
            PrimaryState::Sequence(values) => Some(values),
            PrimaryState::Graph(_) => None,
        }
    }

    pub fn graph(&self) -> Option<&GraphVisit> {
        match &self.primary {
            PrimaryState::Graph(visit) => Some(visit),
            PrimaryState::Sequence(_) => None,
        }
    }
}

/// Immutable, ordered snapshots of one run.
///
/// Only the `Recorder::finish_*` methods build a `History`, so every instance holds at
/// least one snapshot and its last snapshot is the terminal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    family: Family,
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for a sealed history
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    /// The terminal snapshot
    pub fn terminal(&self) -> &Snapshot {
        &self.snapshots[self.last_index()]
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.terminal().outcome.as_ref()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Append-only history builder.
///
/// Every `record_*` call takes the working state by reference and stores an
/// independent copy, so later mutation of the caller's buffers never reaches
/// a recorded snapshot.
#[derive(Debug)]
pub struct Recorder {
    family: Family,
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new(family: Family) -> Self {
        Recorder {
            family,
            snapshots: Vec::new(),
        }
    }

    /// Record a sequence snapshot
    pub fn record_sequence(
        &mut self,
        values: &[Value],
        auxiliary: Option<Auxiliary>,
        highlights: Highlights,
        status: impl Into<String>,
    ) {
        self.push(
            PrimaryState::Sequence(values.to_vec()),
            auxiliary,
            highlights,
            status.into(),
            None,
        );
    }

    /// Record a graph snapshot
    pub fn record_graph(
        &mut self,
        visit: &GraphVisit,
        auxiliary: Option<Auxiliary>,
        highlights: Highlights,
        status: impl Into<String>,
    ) {
        self.push(
            PrimaryState::Graph(visit.clone()),
            auxiliary,
            highlights,
            status.into(),
            None,
        );
    }

    /// Append the terminal sequence snapshot and seal the history
    pub fn finish_sequence(
        mut self,
        values: &[Value],
        auxiliary: Option<Auxiliary>,
        highlights: Highlights,
        status: impl Into<String>,
        outcome: Outcome,
    ) -> History {
        self.push(
            PrimaryState::Sequence(values.to_vec()),
            auxiliary,
            highlights,
            status.into(),
            Some(outcome),
        );
        self.seal()
    }

    /// Append the terminal graph snapshot and seal the history
    pub fn finish_graph(
        mut self,
        visit: &GraphVisit,
        auxiliary: Option<Auxiliary>,
        highlights: Highlights,
        status: impl Into<String>,
        outcome: Outcome,
    ) -> History {
        self.push(
            PrimaryState::Graph(visit.clone()),
            auxiliary,
            highlights,
            status.into(),
            Some(outcome),
        );
        self.seal()
    }

    /// Number of snapshots recorded so far
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn push(
        &mut self,
        primary: PrimaryState,
        auxiliary: Option<Auxiliary>,
        highlights: Highlights,
        status: String,
        outcome: Option<Outcome>,
    ) {
        self.snapshots.push(Snapshot {
            primary,
            auxiliary,
            highlights,
            status,
            outcome,
        });
    }

    fn seal(self) -> History {
        History {
            family: self.family,
            snapshots: self.snapshots,
        }
    }
}

/// Join node labels with a separator
pub fn join_nodes(nodes: &[NodeId], separator: &str) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Join values as `a, b, c`
pub fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
