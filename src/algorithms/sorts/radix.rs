// LSD radix sort with ten digit buckets

use crate::algorithms::{require_non_negative, InvalidInputError};
use crate::input::Family;
use crate::snapshot::{Auxiliary, Highlights, History, Mark, Outcome, Recorder, Role, Value};

const RADIX: usize = 10;

/// Decimal digit count of the largest magnitude, at least 1
fn digit_count(values: &[Value]) -> usize {
    let mut max = values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
    let mut digits = 1;
    while max >= 10 {
        max /= 10;
        digits += 1;
    }
    digits
}

fn digit_at(value: Value, place: u64) -> usize {
    ((value as u64 / place) % RADIX as u64) as usize
}

pub fn run(input: &[Value]) -> Result<History, InvalidInputError> {
    require_non_negative(Family::Radix, input)?;

    let mut array = input.to_vec();
    let mut rec = Recorder::new(Family::Radix);

    if array.is_empty() {
        return Ok(rec.finish_sequence(
            &array,
            None,
            Highlights::new(),
            "Array is empty, already sorted",
            Outcome::Sorted,
        ));
    }

    let digits = digit_count(&array);
    rec.record_sequence(
        &array,
        None,
        Highlights::new(),
        format!("Initial array. Max digits: {}", digits),
    );

    let mut place: u64 = 1;
    for pass in 1..=digits {
        let mut buckets: Vec<Vec<Value>> = vec![Vec::new(); RADIX];
        let snapshot_buckets = |buckets: &[Vec<Value>]| {
            Some(Auxiliary::Buckets {
                buckets: buckets.to_vec(),
                pass,
                place,
            })
        };

        rec.record_sequence(
            &array,
            snapshot_buckets(&buckets),
            Highlights::new().with(Role::Place, Mark::Value(place as Value)),
            format!("Pass {}: sorting by the digit at place {}", pass, place),
        );

        for (i, &value) in array.iter().enumerate() {
            let digit = digit_at(value, place);
            buckets[digit].push(value);
            rec.record_sequence(
                &array,
                snapshot_buckets(&buckets),
                Highlights::new()
                    .with(Role::Place, Mark::Value(place as Value))
                    .with(Role::InputIndex, Mark::Index(i))
                    .with(Role::Bucket, Mark::Index(digit)),
                format!("Distributed {} (digit {}) into bucket {}", value, digit, digit),
            );
        }
        rec.record_sequence(
            &array,
            snapshot_buckets(&buckets),
            Highlights::new().with(Role::Place, Mark::Value(place as Value)),
            format!("Finished distributing for place {}", place),
        );

        let mut write = 0;
        for bucket in 0..RADIX {
            while !buckets[bucket].is_empty() {
                let value = buckets[bucket].remove(0);
                array[write] = value;
                rec.record_sequence(
                    &array,
                    snapshot_buckets(&buckets),
                    Highlights::new()
                        .with(Role::Place, Mark::Value(place as Value))
                        .with(Role::Bucket, Mark::Index(bucket))
                        .with(Role::Collected, Mark::Index(write)),
                    format!("Collected {} from bucket {} into index {}", value, bucket, write),
                );
                write += 1;
            }
        }

        rec.record_sequence(
            &array,
            None,
            Highlights::new().with(Role::Place, Mark::Value(place as Value)),
            format!("Pass {} for place {} complete", pass, place),
        );
        place *= RADIX as u64;
    }

    Ok(rec.finish_sequence(&array, None, Highlights::new(), "Array sorted", Outcome::Sorted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(&[0, 0]), 1);
        assert_eq!(digit_count(&[9]), 1);
        assert_eq!(digit_count(&[10, 3]), 2);
        assert_eq!(digit_count(&[999, 1000]), 4);
        assert_eq!(digit_count(&[]), 1);
    }

    #[test]
    fn test_digit_at() {
        assert_eq!(digit_at(472, 1), 2);
        assert_eq!(digit_at(472, 10), 7);
        assert_eq!(digit_at(472, 100), 4);
        assert_eq!(digit_at(472, 1000), 0);
    }
}
