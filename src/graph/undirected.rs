//! Undirected graph: one symmetric adjacency map plus an edge counter.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult, Label};

use super::views::{AdjacencyMap, Nodes, UndirectedEdges};
use super::Graph;

/// An undirected graph over labels of type `L`.
///
/// Self-loops are rejected and adding an existing edge (in either
/// orientation) does nothing.
///
/// # Example
///
/// ```
/// use label_graph::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge("Red", "Blue").unwrap();
/// graph.add_edge("Blue", "Green").unwrap();
///
/// assert!(graph.edges().contains(&"Blue", &"Red"));
/// assert!(!graph.edges().contains(&"Red", &"Green"));
/// assert_eq!(graph.nodes().len(), 3);
/// ```
#[derive(Clone)]
pub struct UndirectedGraph<L> {
    /// Node -> neighbors. `v ∈ adj[u]` iff `u ∈ adj[v]`.
    adj: AdjacencyMap<L>,
    /// Number of distinct unordered edges.
    edge_count: usize,
}

impl<L: Label> UndirectedGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adj: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adj: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Add a node. If the node already exists, nothing is done.
    pub fn add_node(&mut self, label: L) {
        self.adj.entry(label).or_default();
    }

    /// Add an edge between `u` and `v`, creating either node if needed.
    ///
    /// Adding an edge that already exists, in either orientation, does
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] if `u == v`. The graph is left untouched.
    pub fn add_edge(&mut self, u: L, v: L) -> GraphResult<(), L> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.contains_edge(&u, &v) {
            return Ok(());
        }

        self.adj.entry(u.clone()).or_default().insert(v.clone());
        self.adj.entry(v).or_default().insert(u);
        self.edge_count += 1;
        Ok(())
    }

    /// Remove a node together with every edge touching it.
    ///
    /// Average case O(degree).
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the node is not in the graph.
    pub fn remove_node(&mut self, label: &L) -> GraphResult<(), L> {
        let neighbors = self
            .adj
            .remove(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.clone()))?;

        for neighbor in &neighbors {
            if let Some(set) = self.adj.get_mut(neighbor) {
                set.remove(label);
            }
        }
        self.edge_count -= neighbors.len();

        log::trace!(
            "removed undirected node with {} incident edges, {} edges remain",
            neighbors.len(),
            self.edge_count
        );
        Ok(())
    }

    /// Remove the edge between `u` and `v`. Either orientation works.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`] if the edge is not in the graph.
    pub fn remove_edge(&mut self, u: &L, v: &L) -> GraphResult<(), L> {
        if !self.contains_edge(u, v) {
            return Err(GraphError::EdgeNotFound(u.clone(), v.clone()));
        }

        if let Some(set) = self.adj.get_mut(u) {
            set.remove(v);
        }
        if let Some(set) = self.adj.get_mut(v) {
            set.remove(u);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// The neighbors of a node, borrowed from the graph.
    ///
    /// The set's iteration order is unspecified.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the node is not in the graph.
    pub fn neighbors(&self, label: &L) -> GraphResult<&HashSet<L>, L> {
        self.adj
            .get(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.clone()))
    }

    /// The number of neighbors of a node.
    pub fn degree(&self, label: &L) -> GraphResult<usize, L> {
        self.neighbors(label).map(HashSet::len)
    }

    /// Return an arbitrary node. Which one is unspecified.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] if the graph has no nodes.
    pub fn arbitrary_node(&self) -> GraphResult<&L, L> {
        self.adj.keys().next().ok_or(GraphError::EmptyGraph)
    }

    /// Whether the node is in the graph.
    pub fn contains_node<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adj.contains_key(label)
    }

    /// Whether the edge is in the graph, in either orientation.
    pub fn contains_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges().contains(u, v)
    }

    /// A view into the graph's nodes.
    pub fn nodes(&self) -> Nodes<'_, L> {
        Nodes::new(&self.adj)
    }

    /// A view into the graph's edges.
    pub fn edges(&self) -> UndirectedEdges<'_, L> {
        UndirectedEdges::new(&self.adj, self.edge_count)
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.adj.clear();
        self.edge_count = 0;
    }
}

impl<L: Label> Default for UndirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> PartialEq for UndirectedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.adj == other.adj
    }
}

impl<L: Label> Eq for UndirectedGraph<L> {}

impl<L: Label> Extend<(L, L)> for UndirectedGraph<L> {
    /// Add every edge from the iterator. Self-loops are skipped.
    fn extend<I: IntoIterator<Item = (L, L)>>(&mut self, iter: I) {
        for (u, v) in iter {
            if self.add_edge(u, v).is_err() {
                log::warn!("skipping self loop while extending an undirected graph");
            }
        }
    }
}

impl<L: Label> FromIterator<(L, L)> for UndirectedGraph<L> {
    fn from_iter<I: IntoIterator<Item = (L, L)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<L: Label + fmt::Debug> fmt::Debug for UndirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndirectedGraph")
            .field("nodes", &self.nodes())
            .field("edges", &self.edges())
            .finish()
    }
}

impl<L: Label> fmt::Display for UndirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<UndirectedGraph with {} nodes and {} edges>",
            self.node_count(),
            self.edge_count
        )
    }
}

impl<L: Label> Graph for UndirectedGraph<L> {
    type Node = L;
    type Edges<'a>
        = UndirectedEdges<'a, L>
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        false
    }

    fn add_node(&mut self, label: L) {
        UndirectedGraph::add_node(self, label);
    }

    fn add_edge(&mut self, u: L, v: L) -> GraphResult<(), L> {
        UndirectedGraph::add_edge(self, u, v)
    }

    fn remove_node(&mut self, label: &L) -> GraphResult<(), L> {
        UndirectedGraph::remove_node(self, label)
    }

    fn remove_edge(&mut self, u: &L, v: &L) -> GraphResult<(), L> {
        UndirectedGraph::remove_edge(self, u, v)
    }

    fn neighbors(&self, label: &L) -> GraphResult<&HashSet<L>, L> {
        UndirectedGraph::neighbors(self, label)
    }

    fn arbitrary_node(&self) -> GraphResult<&L, L> {
        UndirectedGraph::arbitrary_node(self)
    }

    fn nodes(&self) -> Nodes<'_, L> {
        UndirectedGraph::nodes(self)
    }

    fn edges(&self) -> UndirectedEdges<'_, L> {
        UndirectedGraph::edges(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every stored adjacency is mirrored and the counter matches.
    fn assert_consistent(graph: &UndirectedGraph<u32>) {
        let mut entries = 0;
        for (u, neighbors) in &graph.adj {
            assert!(!neighbors.contains(u), "self loop on {}", u);
            for v in neighbors {
                assert!(graph.adj[v].contains(u), "asymmetric edge ({}, {})", u, v);
                entries += 1;
            }
        }
        assert_eq!(entries, 2 * graph.edge_count);
    }

    #[test]
    fn test_add_edge_creates_nodes() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(1, 3).unwrap();
        assert!(graph.contains_node(&1));
        assert!(graph.contains_node(&3));
        assert_consistent(&graph);
    }

    #[test]
    fn test_reverse_add_is_noop() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(3, 1).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_consistent(&graph);
    }

    #[test]
    fn test_self_loop_leaves_graph_untouched() {
        let mut graph = UndirectedGraph::new();
        assert_eq!(graph.add_edge(1, 1), Err(GraphError::SelfLoop(1)));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut graph: UndirectedGraph<u32> = [(1, 3), (5, 1), (1, 6), (5, 6)].into_iter().collect();
        graph.remove_node(&1).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(&3).unwrap().is_empty());
        assert_consistent(&graph);
    }

    #[test]
    fn test_degree() {
        let graph: UndirectedGraph<u32> = [(1, 2), (1, 3)].into_iter().collect();
        assert_eq!(graph.degree(&1), Ok(2));
        assert_eq!(graph.degree(&9), Err(GraphError::NodeNotFound(9)));
    }

    #[test]
    fn test_clear() {
        let mut graph: UndirectedGraph<u32> = [(1, 2)].into_iter().collect();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_display() {
        let graph: UndirectedGraph<u32> = [(1, 2), (2, 3)].into_iter().collect();
        assert_eq!(
            graph.to_string(),
            "<UndirectedGraph with 3 nodes and 2 edges>"
        );
    }
}
