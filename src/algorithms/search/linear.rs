// Linear search: scan left to right, stop at the first match

use crate::input::Family;
use crate::snapshot::{Auxiliary, Highlights, History, Mark, Outcome, Recorder, Role, Value};

pub fn run(input: &[Value], target: Value) -> History {
    let array = input.to_vec();
    let mut rec = Recorder::new(Family::Linear);
    let aux = || Some(Auxiliary::Target(target));

    rec.record_sequence(
        &array,
        aux(),
        Highlights::new(),
        format!("Starting search for target {}", target),
    );

    for (i, &value) in array.iter().enumerate() {
        rec.record_sequence(
            &array,
            aux(),
            Highlights::new()
                .with(Role::Current, Mark::Index(i))
                .with(Role::Comparing, Mark::Index(i)),
            format!("Comparing {} with target {}", value, target),
        );

        if value == target {
            return rec.finish_sequence(
                &array,
                aux(),
                Highlights::new().with(Role::Found, Mark::Index(i)),
                format!("Target {} found at index {}", target, i),
                Outcome::Found { index: i },
            );
        }
    }

    rec.finish_sequence(
        &array,
        aux(),
        Highlights::new(),
        format!("Target {} not found after checking {} elements", target, array.len()),
        Outcome::NotFound,
    )
}
