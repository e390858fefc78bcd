//! Instrumented algorithms
//!
//! Each family is a pure function from its input to a [`History`]:
//! - [`sorts`]: bubble, selection, insertion, merge, quick, heap, counting, radix
//! - [`search`]: linear and binary search
//! - [`traversal`]: breadth-first and depth-first traversal
//!
//! # Recording model
//!
//! Every comparison, every data movement and every structural milestone
//! records exactly one snapshot, after the mutation it reports has been
//! applied to the working copy. The last snapshot carries the run's
//! [`Outcome`](crate::snapshot::Outcome).

pub mod errors;
pub mod search;
pub mod sorts;
pub mod traversal;

pub use errors::InvalidInputError;

use crate::input::{AlgorithmInput, Family};
use crate::snapshot::{History, Value};
use tracing::{debug, warn};

/// Run `family` against `input` and return its full history
pub fn build_history(family: Family, input: &AlgorithmInput) -> Result<History, InvalidInputError> {
    let result = match (family, input) {
        (Family::Bubble, AlgorithmInput::Sequence(values)) => Ok(sorts::bubble::run(values)),
        (Family::Selection, AlgorithmInput::Sequence(values)) => {
            Ok(sorts::selection::run(values))
        }
        (Family::Insertion, AlgorithmInput::Sequence(values)) => {
            Ok(sorts::insertion::run(values))
        }
        (Family::Merge, AlgorithmInput::Sequence(values)) => Ok(sorts::merge::run(values)),
        (Family::Quick, AlgorithmInput::Sequence(values)) => Ok(sorts::quick::run(values)),
        (Family::Heap, AlgorithmInput::Sequence(values)) => Ok(sorts::heap::run(values)),
        (Family::Counting, AlgorithmInput::Sequence(values)) => sorts::counting::run(values),
        (Family::Radix, AlgorithmInput::Sequence(values)) => sorts::radix::run(values),
        (Family::Linear, AlgorithmInput::Search { values, target }) => {
            Ok(search::linear::run(values, *target))
        }
        (Family::Binary, AlgorithmInput::Search { values, target }) => {
            search::binary::run(values, *target)
        }
        (Family::Bfs, AlgorithmInput::Graph(graph)) => traversal::bfs::run(graph),
        (Family::Dfs, AlgorithmInput::Graph(graph)) => traversal::dfs::run(graph),
        _ => Err(InvalidInputError::FamilyMismatch {
            family,
            expected: family.input_kind(),
            got: input.kind(),
        }),
    };

    match &result {
        Ok(history) => debug!(family = family.id(), snapshots = history.len(), "built history"),
        Err(err) => warn!(family = family.id(), error = %err, "rejected input"),
    }
    result
}

/// Reject negative values for families that index by value
pub(crate) fn require_non_negative(family: Family, values: &[Value]) -> Result<(), InvalidInputError> {
    match values.iter().position(|&v| v < 0) {
        Some(index) => Err(InvalidInputError::NegativeValue {
            family,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
