//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state and the keyboard event loop that drives
//!   the playback controller
//! - **[`panes`]**: stateless render functions for each visible pane (sequence,
//!   graph, details, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Controller`] and call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::playback::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
