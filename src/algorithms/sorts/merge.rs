// Top-down merge sort with stable, left-biased merging

use crate::input::Family;
use crate::snapshot::{Auxiliary, Highlights, History, Mark, Outcome, Recorder, Role, Value};

struct MergeSort {
    array: Vec<Value>,
    rec: Recorder,
}

impl MergeSort {
    fn sort(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }
        let mid = low + (high - low) / 2;

        self.rec.record_sequence(
            &self.array,
            None,
            Highlights::new()
                .with(Role::ActiveRange, Mark::Range(low, high))
                .with(Role::Mid, Mark::Index(mid)),
            format!("Splitting [{}-{}] at mid {}", low, high, mid),
        );

        self.sort(low, mid);
        self.sort(mid + 1, high);
        self.merge(low, mid, high);

        self.rec.record_sequence(
            &self.array,
            None,
            Highlights::new()
                .with(Role::ActiveRange, Mark::Range(low, high))
                .with(Role::Merged, Mark::Range(low, high)),
            format!("Merged segment [{}-{}]", low, high),
        );
    }

    fn merge(&mut self, low: usize, mid: usize, high: usize) {
        let left: Vec<Value> = self.array[low..=mid].to_vec();
        let right: Vec<Value> = self.array[mid + 1..=high].to_vec();
        let range = Mark::Range(low, high);

        let buffers = |i: usize, j: usize| Auxiliary::MergeBuffers {
            left: left.clone(),
            right: right.clone(),
            left_cursor: i,
            right_cursor: j,
        };

        self.rec.record_sequence(
            &self.array,
            Some(buffers(0, 0)),
            Highlights::new()
                .with(Role::ActiveRange, range)
                .with(Role::Mid, Mark::Index(mid)),
            format!(
                "Copied [{}-{}] and [{}-{}] into the left and right buffers",
                low,
                mid,
                mid + 1,
                high
            ),
        );

        let (mut i, mut j, mut k) = (0, 0, low);
        while i < left.len() && j < right.len() {
            self.rec.record_sequence(
                &self.array,
                Some(buffers(i, j)),
                Highlights::new()
                    .with(Role::ActiveRange, range)
                    .with(Role::Writing, Mark::Index(k)),
                format!("Comparing L[{}] ({}) and R[{}] ({})", i, left[i], j, right[j]),
            );

            // Ties take from the left buffer to keep the sort stable
            if left[i] <= right[j] {
                self.array[k] = left[i];
                i += 1;
            } else {
                self.array[k] = right[j];
                j += 1;
            }
            self.rec.record_sequence(
                &self.array,
                Some(buffers(i, j)),
                Highlights::new()
                    .with(Role::ActiveRange, range)
                    .with(Role::Written, Mark::Index(k)),
                format!("Wrote {} to index {}", self.array[k], k),
            );
            k += 1;
        }

        while i < left.len() {
            self.array[k] = left[i];
            i += 1;
            self.rec.record_sequence(
                &self.array,
                Some(buffers(i, j)),
                Highlights::new()
                    .with(Role::ActiveRange, range)
                    .with(Role::Written, Mark::Index(k)),
                format!("Copied remaining {} from the left buffer to index {}", self.array[k], k),
            );
            k += 1;
        }

        while j < right.len() {
            self.array[k] = right[j];
            j += 1;
            self.rec.record_sequence(
                &self.array,
                Some(buffers(i, j)),
                Highlights::new()
                    .with(Role::ActiveRange, range)
                    .with(Role::Written, Mark::Index(k)),
                format!("Copied remaining {} from the right buffer to index {}", self.array[k], k),
            );
            k += 1;
        }
    }
}

pub fn run(input: &[Value]) -> History {
    let mut sorter = MergeSort {
        array: input.to_vec(),
        rec: Recorder::new(Family::Merge),
    };

    sorter
        .rec
        .record_sequence(&sorter.array, None, Highlights::new(), "Initial array");

    if !sorter.array.is_empty() {
        let high = sorter.array.len() - 1;
        sorter.sort(0, high);
    }

    let MergeSort { array, rec } = sorter;
    rec.finish_sequence(&array, None, Highlights::new(), "Array sorted", Outcome::Sorted)
}
