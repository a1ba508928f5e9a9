//! Shared types for the label-graph library.

pub mod error;
pub mod label;

pub use error::{ErrorKind, GraphError, GraphResult};
pub use label::Label;

/// Maximum number of nodes rendered by a node view's `Display`.
pub const MAX_NODES_DISPLAYED: usize = 20;

/// Maximum number of edges rendered by an edge view's `Display`.
pub const MAX_EDGES_DISPLAYED: usize = 10;
