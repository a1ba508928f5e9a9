//! In-memory graph containers: the core data structures.

pub mod builder;
pub mod directed;
pub mod undirected;
pub mod views;

use std::collections::HashSet;

use crate::types::{GraphResult, Label};

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
pub use views::{
    DirectedEdges, DirectedEdgesIter, EdgeView, Nodes, NodesIter, UndirectedEdges,
    UndirectedEdgesIter,
};

/// Operations shared by [`UndirectedGraph`] and [`DirectedGraph`].
///
/// Code written against this trait works with either variant. For a
/// directed graph `neighbors` means successors, and `add_edge` never fails.
pub trait Graph {
    /// The node label type.
    type Node: Label;

    /// The edge view returned by [`Graph::edges`].
    type Edges<'a>: EdgeView<'a, Self::Node> + Copy
    where
        Self: 'a;

    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Add a node if it is not already present.
    fn add_node(&mut self, label: Self::Node);

    /// Add an edge, creating missing endpoints.
    fn add_edge(&mut self, u: Self::Node, v: Self::Node) -> GraphResult<(), Self::Node>;

    /// Remove a node and its incident edges.
    fn remove_node(&mut self, label: &Self::Node) -> GraphResult<(), Self::Node>;

    /// Remove an edge.
    fn remove_edge(&mut self, u: &Self::Node, v: &Self::Node) -> GraphResult<(), Self::Node>;

    /// Neighbors (undirected) or successors (directed) of a node.
    fn neighbors(&self, label: &Self::Node) -> GraphResult<&HashSet<Self::Node>, Self::Node>;

    /// Any node of the graph.
    fn arbitrary_node(&self) -> GraphResult<&Self::Node, Self::Node>;

    /// A view into the nodes.
    fn nodes(&self) -> Nodes<'_, Self::Node>;

    /// A view into the edges.
    fn edges(&self) -> Self::Edges<'_>;

    /// Number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Whether the edge is in the graph.
    fn contains_edge(&self, u: &Self::Node, v: &Self::Node) -> bool {
        self.edges().contains_edge(u, v)
    }
}
