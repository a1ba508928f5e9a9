//! Error types for the label-graph library.

use std::fmt;

use thiserror::Error;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A node or edge referenced by the operation does not exist.
    NotFound,
    /// The arguments describe something the graph cannot hold.
    InvalidArgument,
}

impl ErrorKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidArgument => "invalid_argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All errors that can occur when operating on a graph.
///
/// The offending labels are handed back to the caller, so `L` must be
/// `Debug` for the error to be displayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<L> {
    /// The node is not in the graph.
    #[error("The node {0:?} does not exist")]
    NodeNotFound(L),

    /// The edge is not in the graph.
    #[error("The edge ({0:?}, {1:?}) does not exist")]
    EdgeNotFound(L, L),

    /// The graph has no nodes.
    #[error("The graph is empty")]
    EmptyGraph,

    /// Undirected graphs reject edges from a node to itself.
    #[error("Undirected graphs have no self loops (node {0:?})")]
    SelfLoop(L),
}

impl<L> GraphError<L> {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeNotFound(_) | Self::EdgeNotFound(..) | Self::EmptyGraph => {
                ErrorKind::NotFound
            }
            Self::SelfLoop(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::NotFound`.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Convert the carried labels, e.g. to render them as strings.
    pub fn map_label<M, F>(self, mut f: F) -> GraphError<M>
    where
        F: FnMut(L) -> M,
    {
        match self {
            Self::NodeNotFound(l) => GraphError::NodeNotFound(f(l)),
            Self::EdgeNotFound(u, v) => GraphError::EdgeNotFound(f(u), f(v)),
            Self::EmptyGraph => GraphError::EmptyGraph,
            Self::SelfLoop(l) => GraphError::SelfLoop(f(l)),
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T, L> = Result<T, GraphError<L>>;
