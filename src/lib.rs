//! # Introduction
//!
//! algoscope runs classic algorithms against generated inputs and records
//! every comparison, data movement and milestone as an immutable
//! [`snapshot::Snapshot`]. The finished [`snapshot::History`] is then replayed
//! step by step by a [`playback::Controller`], and the bundled terminal UI
//! built with [ratatui](https://docs.rs/ratatui) renders the snapshot under
//! the cursor.
//!
//! ## Pipeline
//!
//! ```text
//! Input generator → Instrumented algorithm → History → Controller → TUI
//! ```
//!
//! 1. [`input`]: family catalogue, random integer sequences, search targets
//!    and connected random graphs.
//! 2. [`algorithms`]: [`algorithms::build_history`] validates the input and
//!    runs one of twelve instrumented algorithms to completion.
//! 3. [`snapshot`]: the snapshot data model and the copy-on-record
//!    [`snapshot::Recorder`].
//! 4. [`playback`]: Idle/Ready/Playing/Paused/Concluded state machine with
//!    a single-slot tick timer that rejects stale ticks.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Families
//!
//! Sorting: bubble, selection, insertion, merge, quick, heap, counting,
//! radix. Searching: linear, binary. Traversal: breadth-first, depth-first.
//!
//! ## Example
//!
//! ```
//! use algoscope::algorithms::build_history;
//! use algoscope::input::{AlgorithmInput, Family};
//!
//! let input = AlgorithmInput::Sequence(vec![5, 3, 8, 1]);
//! let history = build_history(Family::Bubble, &input).unwrap();
//! assert_eq!(history.terminal().sequence(), Some(&[1, 3, 5, 8][..]));
//! ```

pub mod algorithms;
pub mod config;
pub mod input;
pub mod playback;
pub mod snapshot;
pub mod ui;
