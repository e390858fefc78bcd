// Generator and playback constants for each algorithm family

use crate::input::Family;
use crate::snapshot::Value;
use std::time::Duration;

/// Shortest sequence the generator will produce
pub const MIN_SEQUENCE_LEN: usize = 1;

/// Longest sequence the generator will produce
pub const MAX_SEQUENCE_LEN: usize = 40;

/// Graph size bounds (node count slider range)
pub const MIN_NODES: usize = 4;
pub const MAX_NODES: usize = 15;
pub const DEFAULT_NODES: usize = 6;

/// Layout canvas used for the circular graph placement
pub const LAYOUT_WIDTH: f64 = 300.0;
pub const LAYOUT_HEIGHT: f64 = 300.0;
pub const LAYOUT_PADDING: f64 = 30.0;

/// Chance that a picked search target is drawn from the sequence itself
pub const TARGET_PRESENT_PROBABILITY: f64 = 0.7;

/// Largest value counting sort accepts.
///
/// Every cumulative step records the whole count table, so the history
/// grows with the square of this bound.
pub const COUNTING_MAX_VALUE: Value = 1_000;

/// Shape of a generated integer sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    pub len: usize,
    pub min: Value,
    pub max: Value,
}

impl SequenceConfig {
    const fn new(len: usize, min: Value, max: Value) -> Self {
        SequenceConfig { len, min, max }
    }
}

/// Sequence shape for a family, `None` for graph families
pub fn sequence_config(family: Family) -> Option<SequenceConfig> {
    let config = match family {
        Family::Bubble
        | Family::Selection
        | Family::Insertion
        | Family::Merge
        | Family::Quick
        | Family::Heap => SequenceConfig::new(15, 5, 100),
        Family::Counting => SequenceConfig::new(15, 0, 20),
        Family::Radix => SequenceConfig::new(12, 0, 999),
        Family::Linear | Family::Binary => SequenceConfig::new(15, 1, 100),
        Family::Bfs | Family::Dfs => return None,
    };
    Some(config)
}

/// Delay between two playback ticks
pub fn tick_delay(family: Family) -> Duration {
    let millis = match family {
        Family::Bubble | Family::Insertion => 100,
        Family::Selection | Family::Linear => 150,
        Family::Merge | Family::Quick | Family::Heap => 200,
        Family::Counting | Family::Binary => 300,
        Family::Radix | Family::Bfs | Family::Dfs => 500,
    };
    Duration::from_millis(millis)
}

/// Clamp a requested sequence length into the supported range
pub fn clamp_sequence_len(len: usize) -> usize {
    len.clamp(MIN_SEQUENCE_LEN, MAX_SEQUENCE_LEN)
}

/// Clamp a requested node count into the supported range
pub fn clamp_node_count(count: usize) -> usize {
    count.clamp(MIN_NODES, MAX_NODES)
}

/// Default input size: sequence length or node count
pub fn default_size(family: Family) -> usize {
    sequence_config(family).map_or(DEFAULT_NODES, |config| config.len)
}

/// Clamp a size hint with the bounds that apply to `family`
pub fn clamp_size(family: Family, size: usize) -> usize {
    match sequence_config(family) {
        Some(_) => clamp_sequence_len(size),
        None => clamp_node_count(size),
    }
}
