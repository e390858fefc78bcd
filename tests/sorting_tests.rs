// Integration tests for the instrumented sorting algorithms

use algoscope::algorithms::{build_history, InvalidInputError};
use algoscope::config::COUNTING_MAX_VALUE;
use algoscope::input::{AlgorithmInput, Family, InputKind};
use algoscope::snapshot::{Auxiliary, History, Mark, Outcome, Role, Value};

const SORTS: [Family; 8] = [
    Family::Bubble,
    Family::Selection,
    Family::Insertion,
    Family::Merge,
    Family::Quick,
    Family::Heap,
    Family::Counting,
    Family::Radix,
];

fn sort(family: Family, values: &[Value]) -> History {
    build_history(family, &AlgorithmInput::Sequence(values.to_vec()))
        .unwrap_or_else(|e| panic!("{} rejected {:?}: {}", family.id(), values, e))
}

fn terminal_values(history: &History) -> Vec<Value> {
    history
        .terminal()
        .sequence()
        .expect("sort history should hold a sequence")
        .to_vec()
}

#[test]
fn test_bubble_sort_compares_and_swaps_first_pair() {
    let history = sort(Family::Bubble, &[5, 3, 8, 1]);

    let compare = history
        .iter()
        .position(|s| s.highlights.get(Role::Comparing) == Some(&Mark::Pair(0, 1)))
        .expect("indices 0 and 1 should be compared");
    assert_eq!(history.get(compare).unwrap().sequence(), Some(&[5, 3, 8, 1][..]));

    // The swap is recorded right after the comparison, with the mutation applied
    let swap = history.get(compare + 1).unwrap();
    assert_eq!(swap.highlights.get(Role::Swapped), Some(&Mark::Pair(0, 1)));
    assert_eq!(swap.sequence(), Some(&[3, 5, 8, 1][..]));

    assert_eq!(terminal_values(&history), vec![1, 3, 5, 8]);
    assert_eq!(history.outcome(), Some(&Outcome::Sorted));
}

#[test]
fn test_bubble_sort_stops_after_a_pass_without_swaps() {
    let history = sort(Family::Bubble, &[1, 2, 3, 4]);

    // initial, pass start, three comparisons, pass end, terminal
    assert_eq!(history.len(), 7);
    assert!(history
        .iter()
        .all(|s| !s.highlights.contains(Role::Swapped)));
    assert!(history
        .get(5)
        .unwrap()
        .status
        .contains("made no swaps"));
}

#[test]
fn test_counting_sort_cumulative_table() {
    let history = sort(Family::Counting, &[4, 2, 2, 8, 3]);

    let cumulative = history
        .iter()
        .find(|s| s.status == "Finished building the cumulative count table")
        .expect("cumulative milestone should be recorded");
    match &cumulative.auxiliary {
        Some(Auxiliary::Counts { counts, output }) => {
            assert_eq!(counts, &vec![0, 0, 2, 3, 4, 4, 4, 4, 5]);
            assert!(output.iter().all(Option::is_none));
        }
        other => panic!("expected a count table, got {:?}", other),
    }

    assert_eq!(terminal_values(&history), vec![2, 2, 3, 4, 8]);
}

#[test]
fn test_counting_sort_places_right_to_left() {
    let history = sort(Family::Counting, &[1, 0, 1]);

    let placed: Vec<usize> = history
        .iter()
        .filter(|s| s.status.starts_with("Placed"))
        .filter_map(|s| s.highlights.index(Role::InputIndex))
        .collect();
    assert_eq!(placed, vec![2, 1, 0]);
}

#[test]
fn test_insertion_sort_shift_and_insert_steps() {
    let history = sort(Family::Insertion, &[3, 1, 2]);

    assert_eq!(history.len(), 11);
    let shifted = history
        .iter()
        .find(|s| s.highlights.contains(Role::Shifted))
        .unwrap();
    assert_eq!(shifted.sequence(), Some(&[3, 3, 2][..]));
    assert_eq!(terminal_values(&history), vec![1, 2, 3]);
}

#[test]
fn test_selection_sort_records_new_minimum() {
    let history = sort(Family::Selection, &[4, 9, 1]);

    let minimums: Vec<usize> = history
        .iter()
        .filter(|s| s.status.starts_with("New minimum"))
        .filter_map(|s| s.highlights.index(Role::MinIndex))
        .collect();
    assert_eq!(minimums, vec![2, 2]);
    assert_eq!(terminal_values(&history), vec![1, 4, 9]);
}

#[test]
fn test_merge_sort_fills_buffers() {
    let history = sort(Family::Merge, &[2, 1]);

    let buffers = history
        .iter()
        .find_map(|s| match &s.auxiliary {
            Some(Auxiliary::MergeBuffers { left, right, .. }) => Some((left.clone(), right.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(buffers, (vec![2], vec![1]));
    assert_eq!(terminal_values(&history), vec![1, 2]);
}

#[test]
fn test_merge_sort_is_stable_on_ties() {
    let history = sort(Family::Merge, &[5, 5, 1, 5]);
    assert_eq!(terminal_values(&history), vec![1, 5, 5, 5]);
}

#[test]
fn test_quick_sort_single_element_is_trivially_sorted() {
    let history = sort(Family::Quick, &[7]);

    assert_eq!(history.len(), 3);
    assert_eq!(
        history.get(1).unwrap().highlights.get(Role::PivotPlaced),
        Some(&Mark::Index(0))
    );
}

#[test]
fn test_quick_sort_pivot_is_last_element() {
    let history = sort(Family::Quick, &[3, 9, 1, 5]);

    let first_partition = history
        .iter()
        .find(|s| s.status.starts_with("Partitioning"))
        .unwrap();
    assert_eq!(
        first_partition.highlights.get(Role::PivotIndex),
        Some(&Mark::Index(3))
    );
    assert_eq!(terminal_values(&history), vec![1, 3, 5, 9]);
}

#[test]
fn test_heap_sort_heap_size_never_grows() {
    let history = sort(Family::Heap, &[4, 10, 3, 5, 1]);

    let sizes: Vec<usize> = history
        .iter()
        .map(|s| match s.auxiliary {
            Some(Auxiliary::Heap { size }) => size,
            _ => panic!("every heap sort snapshot carries the heap size"),
        })
        .collect();
    assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(sizes.first(), Some(&5));
    assert_eq!(sizes.last(), Some(&0));

    assert!(history
        .iter()
        .any(|s| s.highlights.contains(Role::HeapBuilt)));
    assert_eq!(terminal_values(&history), vec![1, 3, 4, 5, 10]);
}

/// Roots each sift-down starts from while the max heap is built
fn heap_build_roots(history: &History) -> Vec<usize> {
    let mut marks: Vec<usize> = Vec::new();
    for snapshot in history.iter() {
        if snapshot.highlights.contains(Role::HeapBuilt) {
            break;
        }
        if let Some(root) = snapshot.highlights.index(Role::HeapRoot) {
            if marks.last() != Some(&root) {
                marks.push(root);
            }
        }
    }
    // A sift that continues moves to a child of the previous root
    let mut starts = Vec::new();
    let mut previous: Option<usize> = None;
    for root in marks {
        let continues = previous.is_some_and(|p| root == 2 * p + 1 || root == 2 * p + 2);
        if !continues {
            starts.push(root);
        }
        previous = Some(root);
    }
    starts
}

#[test]
fn test_heap_sort_builds_from_last_parent_to_root() {
    // 4 sinks to index 1, then 3
    let history = sort(Family::Heap, &[4, 10, 3, 5, 1]);
    assert_eq!(heap_build_roots(&history), vec![1, 0]);

    let history = sort(Family::Heap, &[2, 7, 1, 8, 2, 8, 1, 8, 2]);
    assert_eq!(heap_build_roots(&history), vec![3, 2, 1, 0]);

    let history = sort(Family::Heap, &[9, 8, 7, 6, 5, 4, 3]);
    assert_eq!(heap_build_roots(&history), vec![2, 1, 0]);
}

#[test]
fn test_radix_sort_all_zero_input() {
    let history = sort(Family::Radix, &[0, 0, 0]);

    let passes: Vec<usize> = history
        .iter()
        .filter_map(|s| match s.auxiliary {
            Some(Auxiliary::Buckets { pass, .. }) => Some(pass),
            _ => None,
        })
        .collect();
    assert!(passes.iter().all(|&p| p == 1));
    assert_eq!(terminal_values(&history), vec![0, 0, 0]);
}

#[test]
fn test_radix_sort_runs_one_pass_per_digit() {
    let history = sort(Family::Radix, &[170, 45, 75, 90, 802, 24, 2, 66]);

    let last_pass = history
        .iter()
        .filter_map(|s| match s.auxiliary {
            Some(Auxiliary::Buckets { pass, .. }) => Some(pass),
            _ => None,
        })
        .max();
    assert_eq!(last_pass, Some(3));
    assert_eq!(
        terminal_values(&history),
        vec![2, 24, 45, 66, 75, 90, 170, 802]
    );
}

#[test]
fn test_empty_and_single_inputs_produce_terminal_snapshot() {
    for family in SORTS {
        for input in [&[][..], &[42][..]] {
            let history = sort(family, input);
            assert!(!history.is_empty());
            assert!(history.terminal().is_complete());
            assert_eq!(terminal_values(&history), input.to_vec());
            assert!(history
                .iter()
                .take(history.len() - 1)
                .all(|s| !s.is_complete()));
        }
    }
}

#[test]
fn test_negative_values_rejected_by_digit_sorts() {
    for family in [Family::Counting, Family::Radix] {
        let err = build_history(family, &AlgorithmInput::Sequence(vec![3, -1, 2])).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NegativeValue {
                family,
                index: 1,
                value: -1
            }
        );
    }

    // Comparison sorts handle negatives
    let history = sort(Family::Quick, &[3, -1, 2]);
    assert_eq!(terminal_values(&history), vec![-1, 2, 3]);
}

#[test]
fn test_counting_sort_rejects_oversized_values() {
    let err = build_history(Family::Counting, &AlgorithmInput::Sequence(vec![1, 20_000])).unwrap_err();
    assert!(matches!(
        err,
        InvalidInputError::ValueTooLarge { index: 1, value: 20_000, .. }
    ));
}

#[test]
fn test_counting_sort_value_bound_is_inclusive() {
    let at_limit = sort(Family::Counting, &[COUNTING_MAX_VALUE, 3]);
    assert_eq!(terminal_values(&at_limit), vec![3, COUNTING_MAX_VALUE]);

    let over = AlgorithmInput::Sequence(vec![2, COUNTING_MAX_VALUE + 1]);
    assert_eq!(
        build_history(Family::Counting, &over),
        Err(InvalidInputError::ValueTooLarge {
            index: 1,
            value: COUNTING_MAX_VALUE + 1,
            limit: COUNTING_MAX_VALUE,
        })
    );
}

#[test]
fn test_family_mismatch_is_rejected() {
    let input = AlgorithmInput::Search {
        values: vec![1, 2, 3],
        target: 2,
    };
    let err = build_history(Family::Bubble, &input).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::FamilyMismatch {
            family: Family::Bubble,
            expected: InputKind::Sequence,
            got: InputKind::Search,
        }
    );
}

#[test]
fn test_every_sort_records_the_initial_input_first() {
    let input = [9, 4, 7, 1, 8];
    for family in SORTS {
        let history = sort(family, &input);
        assert_eq!(history.family(), family);
        assert_eq!(history.first().sequence(), Some(&input[..]));
        assert_eq!(terminal_values(&history), vec![1, 4, 7, 8, 9]);
    }
}
