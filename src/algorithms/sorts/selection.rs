// Selection sort

use crate::input::Family;
use crate::snapshot::{Highlights, History, Mark, Outcome, Recorder, Role, Value};

pub fn run(input: &[Value]) -> History {
    let mut array = input.to_vec();
    let mut rec = Recorder::new(Family::Selection);
    let n = array.len();

    rec.record_sequence(&array, None, Highlights::new(), "Initial array");

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        let base = Highlights::new()
            .with(Role::Current, Mark::Index(i))
            .with(Role::Pass, Mark::Index(i));

        rec.record_sequence(
            &array,
            None,
            base.clone().with(Role::MinIndex, Mark::Index(min)),
            format!("Finding the minimum for position {}", i),
        );

        for j in i + 1..n {
            rec.record_sequence(
                &array,
                None,
                base.clone()
                    .with(Role::MinIndex, Mark::Index(min))
                    .with(Role::Comparing, Mark::Pair(j, min)),
                format!(
                    "Comparing {} with current minimum {}",
                    array[j], array[min]
                ),
            );

            if array[j] < array[min] {
                min = j;
                rec.record_sequence(
                    &array,
                    None,
                    base.clone().with(Role::MinIndex, Mark::Index(min)),
                    format!("New minimum {} at index {}", array[min], min),
                );
            }
        }

        if min != i {
            array.swap(i, min);
            rec.record_sequence(
                &array,
                None,
                base.with(Role::Swapped, Mark::Pair(i, min)),
                format!("Swapped {} into position {}", array[i], i),
            );
        } else {
            rec.record_sequence(
                &array,
                None,
                base.with(Role::MinIndex, Mark::Index(i)),
                format!("{} is already in position {}", array[i], i),
            );
        }
    }

    rec.finish_sequence(&array, None, Highlights::new(), "Array sorted", Outcome::Sorted)
}
