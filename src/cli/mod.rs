//! Support code for the `lgraph` command-line tool.

pub mod commands;
pub mod edge_list;

use thiserror::Error;

use crate::types::{ErrorKind, GraphError};

pub use edge_list::EdgeList;

/// Errors reported by the `lgraph` tool.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list line (1-based).
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The graph rejected an operation.
    #[error(transparent)]
    Graph(#[from] GraphError<String>),

    /// The command needs a directed graph.
    #[error("`{0}` requires a directed graph (pass --directed)")]
    DirectedOnly(&'static str),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Json(_) => 1,
            Self::Parse { .. } => 2,
            Self::DirectedOnly(_) => 3,
            Self::Graph(e) => match e.kind() {
                ErrorKind::InvalidArgument => 3,
                ErrorKind::NotFound => 4,
            },
        }
    }
}

/// Convenience result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
