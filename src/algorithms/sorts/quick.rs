// Quick sort with Lomuto partitioning (last element as pivot)

use crate::input::Family;
use crate::snapshot::{Highlights, History, Mark, Outcome, Recorder, Role, Value};

struct QuickSort {
    array: Vec<Value>,
    rec: Recorder,
}

impl QuickSort {
    fn sort(&mut self, low: usize, high: usize) {
        if low == high {
            self.rec.record_sequence(
                &self.array,
                None,
                Highlights::new()
                    .with(Role::ActiveRange, Mark::Range(low, high))
                    .with(Role::PivotPlaced, Mark::Index(low)),
                format!(
                    "Element {} at [{}] is trivially sorted",
                    self.array[low], low
                ),
            );
            return;
        }

        self.rec.record_sequence(
            &self.array,
            None,
            Highlights::new().with(Role::ActiveRange, Mark::Range(low, high)),
            format!("Sorting subarray [{}-{}]", low, high),
        );

        let pivot_index = self.partition(low, high);

        if pivot_index > low {
            self.sort(low, pivot_index - 1);
        }
        if pivot_index < high {
            self.sort(pivot_index + 1, high);
        }
    }

    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.array[high];
        let range = Mark::Range(low, high);
        // Next slot for a value smaller than the pivot
        let mut boundary = low;

        self.rec.record_sequence(
            &self.array,
            None,
            Highlights::new()
                .with(Role::ActiveRange, range)
                .with(Role::PivotIndex, Mark::Index(high))
                .with(Role::Boundary, Mark::Index(boundary)),
            format!(
                "Partitioning [{}-{}] around pivot {} (index {})",
                low, high, pivot, high
            ),
        );

        for j in low..high {
            self.rec.record_sequence(
                &self.array,
                None,
                Highlights::new()
                    .with(Role::ActiveRange, range)
                    .with(Role::PivotIndex, Mark::Index(high))
                    .with(Role::Boundary, Mark::Index(boundary))
                    .with(Role::Comparing, Mark::Pair(j, high)),
                format!("Comparing {} with pivot {}", self.array[j], pivot),
            );

            if self.array[j] < pivot {
                self.array.swap(boundary, j);
                self.rec.record_sequence(
                    &self.array,
                    None,
                    Highlights::new()
                        .with(Role::ActiveRange, range)
                        .with(Role::PivotIndex, Mark::Index(high))
                        .with(Role::Boundary, Mark::Index(boundary + 1))
                        .with(Role::Swapped, Mark::Pair(boundary, j)),
                    format!(
                        "{} < pivot; swapped it to index {}",
                        self.array[boundary], boundary
                    ),
                );
                boundary += 1;
            }
        }

        self.array.swap(boundary, high);
        self.rec.record_sequence(
            &self.array,
            None,
            Highlights::new()
                .with(Role::ActiveRange, range)
                .with(Role::PivotIndex, Mark::Index(boundary))
                .with(Role::PivotPlaced, Mark::Index(boundary))
                .with(Role::Swapped, Mark::Pair(boundary, high)),
            format!("Pivot {} placed at index {}", pivot, boundary),
        );
        boundary
    }
}

pub fn run(input: &[Value]) -> History {
    let mut sorter = QuickSort {
        array: input.to_vec(),
        rec: Recorder::new(Family::Quick),
    };

    sorter
        .rec
        .record_sequence(&sorter.array, None, Highlights::new(), "Initial array");

    if !sorter.array.is_empty() {
        let high = sorter.array.len() - 1;
        sorter.sort(0, high);
    }

    let QuickSort { array, rec } = sorter;
    rec.finish_sequence(&array, None, Highlights::new(), "Array sorted", Outcome::Sorted)
}
