// Bubble sort with the early-exit optimisation

use crate::input::Family;
use crate::snapshot::{Highlights, History, Mark, Outcome, Recorder, Role, Value};

pub fn run(input: &[Value]) -> History {
    let mut array = input.to_vec();
    let mut rec = Recorder::new(Family::Bubble);
    let n = array.len();

    rec.record_sequence(&array, None, Highlights::new(), "Initial array");

    for pass in 0..n.saturating_sub(1) {
        let settled_from = n - pass;
        let mut swapped = false;

        rec.record_sequence(
            &array,
            None,
            Highlights::new()
                .with(Role::Pass, Mark::Index(pass))
                .with(Role::SortedFrom, Mark::Index(settled_from)),
            format!("Pass {}: bubbling the largest unsorted value to the end", pass + 1),
        );

        for j in 0..n - 1 - pass {
            rec.record_sequence(
                &array,
                None,
                Highlights::new()
                    .with(Role::Pass, Mark::Index(pass))
                    .with(Role::SortedFrom, Mark::Index(settled_from))
                    .with(Role::Comparing, Mark::Pair(j, j + 1)),
                format!("Comparing {} and {}", array[j], array[j + 1]),
            );

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                swapped = true;
                rec.record_sequence(
                    &array,
                    None,
                    Highlights::new()
                        .with(Role::Pass, Mark::Index(pass))
                        .with(Role::SortedFrom, Mark::Index(settled_from))
                        .with(Role::Swapped, Mark::Pair(j, j + 1)),
                    format!("Swapped {} and {}", array[j + 1], array[j]),
                );
            }
        }

        let highlights = Highlights::new()
            .with(Role::Pass, Mark::Index(pass))
            .with(Role::SortedFrom, Mark::Index(settled_from - 1));
        if swapped {
            rec.record_sequence(
                &array,
                None,
                highlights,
                format!(
                    "Pass {} complete; {} is in its final position",
                    pass + 1,
                    array[settled_from - 1]
                ),
            );
        } else {
            rec.record_sequence(
                &array,
                None,
                highlights,
                format!("Pass {} made no swaps; array is already sorted", pass + 1),
            );
            break;
        }
    }

    rec.finish_sequence(
        &array,
        None,
        Highlights::new().with(Role::SortedFrom, Mark::Index(0)),
        "Array sorted",
        Outcome::Sorted,
    )
}
