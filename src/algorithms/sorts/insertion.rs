// Insertion sort

use crate::input::Family;
use crate::snapshot::{Highlights, History, Mark, Outcome, Recorder, Role, Value};

pub fn run(input: &[Value]) -> History {
    let mut array = input.to_vec();
    let mut rec = Recorder::new(Family::Insertion);
    let n = array.len();

    rec.record_sequence(&array, None, Highlights::new(), "Initial array");

    for i in 1..n {
        let key = array[i];
        let key_mark = Mark::Value(key);

        rec.record_sequence(
            &array,
            None,
            Highlights::new()
                .with(Role::Current, Mark::Index(i))
                .with(Role::Key, key_mark),
            format!("Picked key {} at index {}", key, i),
        );

        // `hole` is where the key would go if inserted now
        let mut hole = i;
        while hole > 0 {
            rec.record_sequence(
                &array,
                None,
                Highlights::new()
                    .with(Role::Current, Mark::Index(i))
                    .with(Role::Key, key_mark)
                    .with(Role::Comparing, Mark::Index(hole - 1)),
                format!("Comparing {} with key {}", array[hole - 1], key),
            );

            if array[hole - 1] <= key {
                break;
            }

            array[hole] = array[hole - 1];
            rec.record_sequence(
                &array,
                None,
                Highlights::new()
                    .with(Role::Current, Mark::Index(i))
                    .with(Role::Key, key_mark)
                    .with(Role::Shifted, Mark::Pair(hole - 1, hole)),
                format!("Shifted {} right to index {}", array[hole], hole),
            );
            hole -= 1;
        }

        array[hole] = key;
        rec.record_sequence(
            &array,
            None,
            Highlights::new()
                .with(Role::Current, Mark::Index(i))
                .with(Role::Inserted, Mark::Index(hole)),
            format!("Inserted key {} at index {}", key, hole),
        );
    }

    rec.finish_sequence(&array, None, Highlights::new(), "Array sorted", Outcome::Sorted)
}
