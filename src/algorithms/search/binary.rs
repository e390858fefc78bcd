// Binary search over an ascending sequence

use crate::algorithms::InvalidInputError;
use crate::input::Family;
use crate::snapshot::{Auxiliary, Highlights, History, Mark, Outcome, Recorder, Role, Value};

/// Bounds as signed indices so `high` can drop below zero
fn bounds(low: isize, high: isize) -> Highlights {
    let as_mark = |i: isize| usize::try_from(i).ok().map(Mark::Index);
    Highlights::new()
        .with_opt(Role::Low, as_mark(low))
        .with_opt(Role::High, as_mark(high))
}

pub fn run(input: &[Value], target: Value) -> Result<History, InvalidInputError> {
    if let Some(pos) = input.windows(2).position(|w| w[1] < w[0]) {
        return Err(InvalidInputError::UnsortedSequence {
            index: pos + 1,
            value: input[pos + 1],
        });
    }

    let array = input.to_vec();
    let mut rec = Recorder::new(Family::Binary);
    let aux = || Some(Auxiliary::Target(target));

    rec.record_sequence(
        &array,
        aux(),
        Highlights::new(),
        format!("Starting binary search for target {} in a sorted array", target),
    );

    let mut low: isize = 0;
    let mut high: isize = array.len() as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let mid_index = mid as usize;
        let value = array[mid_index];

        rec.record_sequence(
            &array,
            aux(),
            bounds(low, high)
                .with(Role::Mid, Mark::Index(mid_index))
                .with(Role::Comparing, Mark::Index(mid_index)),
            format!(
                "Searching [{}-{}]; middle element is {} at index {}",
                low, high, value, mid
            ),
        );

        if value == target {
            return Ok(rec.finish_sequence(
                &array,
                aux(),
                bounds(low, high).with(Role::Found, Mark::Index(mid_index)),
                format!("Target {} found at index {}", target, mid),
                Outcome::Found { index: mid_index },
            ));
        }

        let status = if value < target {
            low = mid + 1;
            format!("{} < {}; narrowing to [{}-{}]", value, target, low, high)
        } else {
            high = mid - 1;
            format!("{} > {}; narrowing to [{}-{}]", value, target, low, high)
        };
        rec.record_sequence(
            &array,
            aux(),
            bounds(low, high).with(Role::Mid, Mark::Index(mid_index)),
            status,
        );
    }

    Ok(rec.finish_sequence(
        &array,
        aux(),
        Highlights::new(),
        format!("Target {} not found in the array", target),
        Outcome::NotFound,
    ))
}
