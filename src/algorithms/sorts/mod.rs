//! Sorting families
//!
//! All sorts take the input sequence by reference, work on a private copy and
//! finish with [`Outcome::Sorted`](crate::snapshot::Outcome::Sorted) and the
//! sorted values as the terminal primary state.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
