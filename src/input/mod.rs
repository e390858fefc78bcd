//! Algorithm families and their random inputs.
//!
//! - [`Family`]: the catalogue of instrumented algorithms
//! - [`AlgorithmInput`]: what one run consumes
//! - [`generate_input`]: constrained random inputs per family
//! - [`graph`]: the connected-graph model and generator

pub mod graph;

pub use graph::{Graph, NodeId, Point};

use crate::config::{
    clamp_sequence_len, sequence_config, SequenceConfig, DEFAULT_NODES,
    TARGET_PRESENT_PROBABILITY,
};
use crate::snapshot::Value;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One instrumented algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Linear,
    Binary,
    Bfs,
    Dfs,
}

impl Family {
    pub const ALL: [Family; 12] = [
        Family::Bubble,
        Family::Selection,
        Family::Insertion,
        Family::Merge,
        Family::Quick,
        Family::Heap,
        Family::Counting,
        Family::Radix,
        Family::Linear,
        Family::Binary,
        Family::Bfs,
        Family::Dfs,
    ];

    /// Short identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            Family::Bubble => "bubble",
            Family::Selection => "selection",
            Family::Insertion => "insertion",
            Family::Merge => "merge",
            Family::Quick => "quick",
            Family::Heap => "heap",
            Family::Counting => "counting",
            Family::Radix => "radix",
            Family::Linear => "linear",
            Family::Binary => "binary",
            Family::Bfs => "bfs",
            Family::Dfs => "dfs",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Bubble => "Bubble Sort",
            Family::Selection => "Selection Sort",
            Family::Insertion => "Insertion Sort",
            Family::Merge => "Merge Sort",
            Family::Quick => "Quick Sort",
            Family::Heap => "Heap Sort",
            Family::Counting => "Counting Sort",
            Family::Radix => "Radix Sort",
            Family::Linear => "Linear Search",
            Family::Binary => "Binary Search",
            Family::Bfs => "Breadth-First Search",
            Family::Dfs => "Depth-First Search",
        }
    }

    /// Input shape this family consumes
    pub fn input_kind(self) -> InputKind {
        match self {
            Family::Linear | Family::Binary => InputKind::Search,
            Family::Bfs | Family::Dfs => InputKind::Graph,
            _ => InputKind::Sequence,
        }
    }

    /// Next family in catalogue order (wraps)
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous family in catalogue order (wraps)
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised family identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}'")]
pub struct UnknownFamily(pub String);

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Family::ALL
            .into_iter()
            .find(|family| family.id() == wanted)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

/// Shape of an [`AlgorithmInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Sequence,
    Search,
    Graph,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Sequence => "an integer sequence",
            InputKind::Search => "a sequence with a target",
            InputKind::Graph => "a graph",
        })
    }
}

/// Input consumed by one instrumented run
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmInput {
    Sequence(Vec<Value>),
    Search { values: Vec<Value>, target: Value },
    Graph(Graph),
}

impl AlgorithmInput {
    pub fn kind(&self) -> InputKind {
        match self {
            AlgorithmInput::Sequence(_) => InputKind::Sequence,
            AlgorithmInput::Search { .. } => InputKind::Search,
            AlgorithmInput::Graph(_) => InputKind::Graph,
        }
    }

    /// The integer sequence, for sequence and search inputs
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            AlgorithmInput::Sequence(values) | AlgorithmInput::Search { values, .. } => {
                Some(values)
            }
            AlgorithmInput::Graph(_) => None,
        }
    }
}

/// Draw a fresh input for `family`.
///
/// `size_hint` overrides the family's default length (or node count) and is
/// clamped into the supported range.
pub fn generate_input<R: Rng + ?Sized>(
    family: Family,
    size_hint: Option<usize>,
    rng: &mut R,
) -> AlgorithmInput {
    let Some(config) = sequence_config(family) else {
        let nodes = size_hint.unwrap_or(DEFAULT_NODES);
        return AlgorithmInput::Graph(graph::generate_graph(nodes, rng));
    };

    let len = clamp_sequence_len(size_hint.unwrap_or(config.len));
    let mut values = generate_sequence(config, len, rng);

    match family {
        Family::Linear => {
            let target = pick_target(&values, config, rng);
            AlgorithmInput::Search { values, target }
        }
        Family::Binary => {
            values.sort_unstable();
            let target = pick_target(&values, config, rng);
            AlgorithmInput::Search { values, target }
        }
        _ => AlgorithmInput::Sequence(values),
    }
}

/// `len` values drawn uniformly from `[config.min, config.max]`
pub fn generate_sequence<R: Rng + ?Sized>(
    config: SequenceConfig,
    len: usize,
    rng: &mut R,
) -> Vec<Value> {
    (0..len)
        .map(|_| rng.random_range(config.min..=config.max))
        .collect()
}

/// Pick a search target: a present value most of the time, otherwise a value
/// verified absent.
///
/// When every value in range is present no absent value exists, so a present
/// one is returned instead.
pub fn pick_target<R: Rng + ?Sized>(values: &[Value], config: SequenceConfig, rng: &mut R) -> Value {
    if values.is_empty() {
        return rng.random_range(config.min..=config.max);
    }
    if rng.random_bool(TARGET_PRESENT_PROBABILITY) {
        return values[rng.random_range(0..values.len())];
    }

    let range_size = (config.max as i64 - config.min as i64 + 1) as usize;
    if range_size <= values.len() && (config.min..=config.max).all(|v| values.contains(&v)) {
        return values[rng.random_range(0..values.len())];
    }

    loop {
        let candidate = rng.random_range(config.min..=config.max);
        if !values.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_family_round_trip_ids() {
        for family in Family::ALL {
            assert_eq!(family.id().parse::<Family>(), Ok(family));
        }
        assert!("shell".parse::<Family>().is_err());
        assert_eq!(Family::Dfs.next(), Family::Bubble);
        assert_eq!(Family::Bubble.prev(), Family::Dfs);
    }

    #[test]
    fn test_sequences_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for family in [Family::Bubble, Family::Counting, Family::Radix] {
            let config = sequence_config(family).unwrap();
            let input = generate_input(family, None, &mut rng);
            let values = input.values().unwrap();
            assert_eq!(values.len(), config.len);
            assert!(values.iter().all(|v| (config.min..=config.max).contains(v)));
        }
    }

    #[test]
    fn test_size_hint_is_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let input = generate_input(Family::Quick, Some(0), &mut rng);
        assert_eq!(input.values().unwrap().len(), 1);

        let input = generate_input(Family::Quick, Some(500), &mut rng);
        assert_eq!(input.values().unwrap().len(), 40);

        match generate_input(Family::Bfs, Some(100), &mut rng) {
            AlgorithmInput::Graph(graph) => assert_eq!(graph.node_count(), 15),
            other => panic!("expected graph, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_search_input_is_sorted() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let input = generate_input(Family::Binary, None, &mut rng);
            let values = input.values().unwrap();
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_pick_target_produces_both_cases() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = SequenceConfig {
            len: 5,
            min: 1,
            max: 100,
        };
        let values = vec![4, 8, 15, 16, 23];
        let mut present = 0;
        let mut absent = 0;
        for _ in 0..200 {
            if values.contains(&pick_target(&values, config, &mut rng)) {
                present += 1;
            } else {
                absent += 1;
            }
        }
        assert!(present > 0 && absent > 0);
        assert!(present > absent);
    }

    #[test]
    fn test_pick_target_when_range_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SequenceConfig {
            len: 3,
            min: 1,
            max: 3,
        };
        let values = vec![1, 2, 3];
        for _ in 0..50 {
            assert!(values.contains(&pick_target(&values, config, &mut rng)));
        }
    }
}
