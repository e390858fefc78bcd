// Heap sort over an in-place max-heap

use crate::input::Family;
use crate::snapshot::{Auxiliary, Highlights, History, Mark, Outcome, Recorder, Role, Value};

struct HeapSort {
    array: Vec<Value>,
    /// Indices below this are inside the heap; the rest is the sorted suffix
    heap_size: usize,
    rec: Recorder,
}

impl HeapSort {
    fn record(&mut self, highlights: Highlights, status: String) {
        self.rec.record_sequence(
            &self.array,
            Some(Auxiliary::Heap {
                size: self.heap_size,
            }),
            highlights,
            status,
        );
    }

    /// Sift the value at `root` down until the heap property holds
    fn heapify_down(&mut self, mut root: usize) {
        loop {
            let mut largest = root;
            let left = 2 * root + 1;
            let right = 2 * root + 2;

            if left < self.heap_size {
                self.record(
                    Highlights::new()
                        .with(Role::HeapRoot, Mark::Index(root))
                        .with(Role::Comparing, Mark::Pair(largest, left)),
                    format!(
                        "Comparing {} with left child {}",
                        self.array[largest], self.array[left]
                    ),
                );
                if self.array[left] > self.array[largest] {
                    largest = left;
                }
            }

            if right < self.heap_size {
                self.record(
                    Highlights::new()
                        .with(Role::HeapRoot, Mark::Index(root))
                        .with(Role::Comparing, Mark::Pair(largest, right)),
                    format!(
                        "Comparing current largest {} with right child {}",
                        self.array[largest], self.array[right]
                    ),
                );
                if self.array[right] > self.array[largest] {
                    largest = right;
                }
            }

            if largest == root {
                self.record(
                    Highlights::new().with(Role::HeapRoot, Mark::Index(root)),
                    format!("Heap property holds at index {}", root),
                );
                return;
            }

            self.array.swap(root, largest);
            self.record(
                Highlights::new()
                    .with(Role::HeapRoot, Mark::Index(root))
                    .with(Role::Swapped, Mark::Pair(root, largest)),
                format!(
                    "Swapped {} down to index {}",
                    self.array[largest], largest
                ),
            );
            root = largest;
        }
    }
}

pub fn run(input: &[Value]) -> History {
    let n = input.len();
    let mut sorter = HeapSort {
        array: input.to_vec(),
        heap_size: n,
        rec: Recorder::new(Family::Heap),
    };

    sorter.record(Highlights::new(), "Building max heap".to_string());

    for root in (0..n / 2).rev() {
        sorter.heapify_down(root);
    }

    sorter.record(
        Highlights::new().with(Role::HeapBuilt, Mark::Flag),
        "Max heap built".to_string(),
    );

    for end in (1..n).rev() {
        sorter.array.swap(0, end);
        sorter.heap_size -= 1;
        sorter.record(
            Highlights::new()
                .with(Role::Extracted, Mark::Pair(0, end))
                .with(Role::SortedFrom, Mark::Index(end)),
            format!(
                "Moved max {} to sorted position {}; heap size is now {}",
                sorter.array[end], end, sorter.heap_size
            ),
        );

        sorter.heapify_down(0);

        sorter.record(
            Highlights::new()
                .with(Role::HeapBuilt, Mark::Flag)
                .with(Role::SortedFrom, Mark::Index(end)),
            format!("Heap re-established; sorted from index {}", end),
        );
    }

    let HeapSort { array, rec, .. } = sorter;
    rec.finish_sequence(
        &array,
        Some(Auxiliary::Heap { size: 0 }),
        Highlights::new().with(Role::SortedFrom, Mark::Index(0)),
        "Array sorted",
        Outcome::Sorted,
    )
}
