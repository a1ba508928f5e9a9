//! Fluent API for building graphs.

use crate::types::{GraphResult, Label};

use super::{DirectedGraph, UndirectedGraph};

/// Fluent builder that collects nodes and edges, then produces either
/// graph variant.
///
/// ```
/// use label_graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.edge(1, 2).edge(2, 3).node(4);
///
/// let graph = builder.build_directed();
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<L> {
    nodes: Vec<L>,
    edges: Vec<(L, L)>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add an isolated node (or a node that also appears in an edge).
    pub fn node(&mut self, label: L) -> &mut Self {
        self.nodes.push(label);
        self
    }

    /// Add an edge between two nodes.
    pub fn edge(&mut self, u: L, v: L) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Add every edge from an iterator.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Number of nodes and edges queued so far, duplicates included.
    pub fn pending(&self) -> (usize, usize) {
        (self.nodes.len(), self.edges.len())
    }

    /// Build an undirected graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`](crate::GraphError::SelfLoop) for the first
    /// queued self-loop.
    pub fn build_undirected(self) -> GraphResult<UndirectedGraph<L>, L> {
        let mut graph = UndirectedGraph::with_capacity(self.nodes.len());
        for label in self.nodes {
            graph.add_node(label);
        }
        for (u, v) in self.edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Build a directed graph. Self-loops are kept.
    pub fn build_directed(self) -> DirectedGraph<L> {
        let mut graph = DirectedGraph::with_capacity(self.nodes.len());
        for label in self.nodes {
            graph.add_node(label);
        }
        graph.extend(self.edges);
        graph
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
