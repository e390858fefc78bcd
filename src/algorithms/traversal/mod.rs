//! Graph traversal families
//!
//! Both traversals validate the graph up front (non-empty, symmetric,
//! connected from the start node) and finish with
//! [`Outcome::Traversed`](crate::snapshot::Outcome::Traversed) holding the
//! visit order.

pub mod bfs;
pub mod dfs;
