//! Plain-text edge lists: one `u v` edge or a lone `u` node per line.
//!
//! Everything after `#` is a comment; blank lines are ignored.

use std::path::Path;

use crate::graph::{DirectedGraph, GraphBuilder, UndirectedGraph};

use super::{CliError, CliResult};

/// A parsed edge list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Lines holding a single label.
    pub nodes: Vec<String>,
    /// Lines holding two labels.
    pub edges: Vec<(String, String)>,
}

impl EdgeList {
    /// Parse edge-list text.
    pub fn parse(text: &str) -> CliResult<Self> {
        let mut list = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("");
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [] => {}
                [node] => list.nodes.push((*node).to_string()),
                [u, v] => list.edges.push(((*u).to_string(), (*v).to_string())),
                _ => {
                    return Err(CliError::Parse {
                        line: index + 1,
                        message: format!("expected 1 or 2 labels, found {}", tokens.len()),
                    })
                }
            }
        }

        log::debug!(
            "parsed edge list: {} node lines, {} edge lines",
            list.nodes.len(),
            list.edges.len()
        );
        Ok(list)
    }

    /// Read and parse an edge-list file.
    pub fn read_from_file(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn into_builder(self) -> GraphBuilder<String> {
        let mut builder = GraphBuilder::new();
        for node in self.nodes {
            builder.node(node);
        }
        builder.edges(self.edges);
        builder
    }

    /// Build an undirected graph; a self-loop line is an error.
    pub fn into_undirected(self) -> CliResult<UndirectedGraph<String>> {
        Ok(self.into_builder().build_undirected()?)
    }

    /// Build a directed graph.
    pub fn into_directed(self) -> DirectedGraph<String> {
        self.into_builder().build_directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nodes_edges_and_comments() {
        let text = "# header\na b\n\nc   # isolated\n b  c \n";
        let list = EdgeList::parse(text).unwrap();
        assert_eq!(list.nodes, vec!["c".to_string()]);
        assert_eq!(
            list.edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_rejects_three_labels() {
        let err = EdgeList::parse("a b\na b c\n").unwrap_err();
        match err {
            CliError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_undirected_self_loop_is_invalid() {
        let list = EdgeList::parse("a a\n").unwrap();
        let err = list.into_undirected().unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
