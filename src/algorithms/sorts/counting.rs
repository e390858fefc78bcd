// Counting sort with a cumulative count table and a stable right-to-left placement

use crate::algorithms::{require_non_negative, InvalidInputError};
use crate::config::COUNTING_MAX_VALUE;
use crate::input::Family;
use crate::snapshot::{Auxiliary, Highlights, History, Mark, Outcome, Recorder, Role, Value};

pub fn run(input: &[Value]) -> Result<History, InvalidInputError> {
    require_non_negative(Family::Counting, input)?;
    if let Some(index) = input.iter().position(|&v| v > COUNTING_MAX_VALUE) {
        return Err(InvalidInputError::ValueTooLarge {
            index,
            value: input[index],
            limit: COUNTING_MAX_VALUE,
        });
    }

    let array = input.to_vec();
    let mut rec = Recorder::new(Family::Counting);

    let Some(&max) = array.iter().max() else {
        return Ok(rec.finish_sequence(
            &array,
            None,
            Highlights::new(),
            "Array is empty, already sorted",
            Outcome::Sorted,
        ));
    };

    let mut counts = vec![0usize; max as usize + 1];
    let mut output: Vec<Option<Value>> = vec![None; array.len()];
    let tables = |counts: &[usize], output: &[Option<Value>]| {
        Some(Auxiliary::Counts {
            counts: counts.to_vec(),
            output: output.to_vec(),
        })
    };

    rec.record_sequence(
        &array,
        tables(&counts, &output),
        Highlights::new(),
        format!(
            "Initial array. Max value is {}; count table has {} slots",
            max,
            counts.len()
        ),
    );

    for (i, &value) in array.iter().enumerate() {
        let slot = value as usize;
        counts[slot] += 1;
        rec.record_sequence(
            &array,
            tables(&counts, &output),
            Highlights::new()
                .with(Role::InputIndex, Mark::Index(i))
                .with(Role::CountIndex, Mark::Index(slot)),
            format!("Counted {}; count[{}] is now {}", value, slot, counts[slot]),
        );
    }
    rec.record_sequence(
        &array,
        tables(&counts, &output),
        Highlights::new(),
        "Finished counting elements",
    );

    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
        rec.record_sequence(
            &array,
            tables(&counts, &output),
            Highlights::new().with(Role::CountIndex, Mark::Index(i)),
            format!("Cumulative count[{}] is now {}", i, counts[i]),
        );
    }
    rec.record_sequence(
        &array,
        tables(&counts, &output),
        Highlights::new(),
        "Finished building the cumulative count table",
    );

    // Right to left keeps equal values in input order
    for i in (0..array.len()).rev() {
        let value = array[i];
        let slot = value as usize;
        let position = counts[slot] - 1;

        output[position] = Some(value);
        rec.record_sequence(
            &array,
            tables(&counts, &output),
            Highlights::new()
                .with(Role::InputIndex, Mark::Index(i))
                .with(Role::CountIndex, Mark::Index(slot))
                .with(Role::OutputIndex, Mark::Index(position)),
            format!("Placed {} from input index {} at output index {}", value, i, position),
        );

        counts[slot] -= 1;
        rec.record_sequence(
            &array,
            tables(&counts, &output),
            Highlights::new()
                .with(Role::CountIndex, Mark::Index(slot))
                .with(Role::OutputIndex, Mark::Index(position)),
            format!("Decremented count[{}] to {}", slot, counts[slot]),
        );
    }

    let sorted: Vec<Value> = output.iter().flatten().copied().collect();
    Ok(rec.finish_sequence(
        &sorted,
        tables(&counts, &output),
        Highlights::new(),
        "Array sorted",
        Outcome::Sorted,
    ))
}
