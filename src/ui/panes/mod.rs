//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over the snapshot under the
//! playback cursor; none of them touch the controller.
//!
//! # Pane Modules
//!
//! - [`sequence`]: Bar chart of the integer sequence, colored by highlight role
//! - [`graph`]: Circular graph layout with visitation and frontier state
//! - [`details`]: Step narration, auxiliary structures and the highlight table
//! - [`status`]: Status bar with keybindings and playback state

pub mod details;
pub mod graph;
pub mod sequence;
pub mod status;

// Re-export render functions for convenience
pub use details::render_details_pane;
pub use graph::render_graph_pane;
pub use sequence::render_sequence_pane;
pub use status::{render_status_bar, StatusRenderData};
