//! label-graph: undirected and directed in-memory graphs over arbitrary
//! hashable labels.
//!
//! Nodes are any `Hash + Eq + Clone` value. Adding, removing and querying a
//! single node or edge is average case O(1); removing a node costs its
//! degree. Directed graphs keep a reverse adjacency map so predecessors are
//! as cheap to look up as successors.
//!
//! [`UndirectedGraph::nodes`] and [`UndirectedGraph::edges`] (and their
//! directed counterparts) return borrowed views: nothing is copied, and the
//! edge count is maintained rather than recounted.
//!
//! ```
//! use label_graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(1, 3);
//! graph.add_edge(5, 1);
//!
//! assert!(graph.edges().contains(&1, &3));
//! assert!(!graph.edges().contains(&3, &1));
//! assert!(graph.predecessors(&1).unwrap().contains(&5));
//! ```

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    DirectedEdges, DirectedGraph, EdgeView, Graph, GraphBuilder, Nodes, UndirectedEdges,
    UndirectedGraph,
};
pub use types::{
    ErrorKind, GraphError, GraphResult, Label, MAX_EDGES_DISPLAYED, MAX_NODES_DISPLAYED,
};
