//! Directed graph: forward and reverse adjacency maps kept in lock-step.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult, Label};

use super::views::{AdjacencyMap, DirectedEdges, Nodes};
use super::Graph;

/// A directed graph over labels of type `L`.
///
/// Self-loops are allowed. Predecessors are stored alongside successors, so
/// both lookups are average case O(1).
#[derive(Clone)]
pub struct DirectedGraph<L> {
    /// Node -> successors.
    adj: AdjacencyMap<L>,
    /// Node -> predecessors. Same key set as `adj`.
    back_adj: AdjacencyMap<L>,
    /// Number of distinct ordered edges.
    edge_count: usize,
}

impl<L: Label> DirectedGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adj: HashMap::new(),
            back_adj: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adj: HashMap::with_capacity(nodes),
            back_adj: HashMap::with_capacity(nodes),
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
        if !self.adj.contains_key(&label) {
            self.adj.insert(label.clone(), HashSet::new());
            self.back_adj.insert(label, HashSet::new());
        }
    }

    /// Add the edge `u -> v`, creating either node if needed.
    ///
    /// Adding an edge that already exists does nothing. Average case O(1).
    pub fn add_edge(&mut self, u: L, v: L) {
        if self.contains_edge(&u, &v) {
            return;
        }

        self.adj.entry(u.clone()).or_default().insert(v.clone());
        self.back_adj.entry(v.clone()).or_default().insert(u.clone());
        self.adj.entry(v).or_default();
        self.back_adj.entry(u).or_default();
        self.edge_count += 1;
    }

    /// Remove a node together with every edge entering or leaving it.
    ///
    /// Average case O(in-degree + out-degree).
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the node is not in the graph.
    pub fn remove_node(&mut self, label: &L) -> GraphResult<(), L> {
        let successors = self
            .adj
            .remove(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.clone()))?;
        let predecessors = self.back_adj.remove(label).unwrap_or_default();

        for parent in predecessors.iter().filter(|p| *p != label) {
            if let Some(set) = self.adj.get_mut(parent) {
                set.remove(label);
            }
        }
        for child in successors.iter().filter(|c| *c != label) {
            if let Some(set) = self.back_adj.get_mut(child) {
                set.remove(label);
            }
        }

        // A self-loop sits in both sets but is a single edge.
        let self_loop = usize::from(successors.contains(label));
        let removed = predecessors.len() + successors.len() - self_loop;
        self.edge_count -= removed;

        log::trace!(
            "removed directed node with {} in, {} out, {} self loop edges, {} edges remain",
            predecessors.len() - self_loop,
            successors.len() - self_loop,
            self_loop,
            self.edge_count
        );
        Ok(())
    }

    /// Remove the edge `u -> v`.
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
        if let Some(set) = self.back_adj.get_mut(v) {
            set.remove(u);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// The successors of a node, borrowed from the graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the node is not in the graph.
    pub fn successors(&self, label: &L) -> GraphResult<&HashSet<L>, L> {
        self.adj
            .get(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.clone()))
    }

    /// Alias of [`successors`](Self::successors).
    pub fn neighbors(&self, label: &L) -> GraphResult<&HashSet<L>, L> {
        self.successors(label)
    }

    /// The predecessors of a node, borrowed from the graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the node is not in the graph.
    pub fn predecessors(&self, label: &L) -> GraphResult<&HashSet<L>, L> {
        self.back_adj
            .get(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.clone()))
    }

    /// Number of edges leaving a node.
    pub fn out_degree(&self, label: &L) -> GraphResult<usize, L> {
        self.successors(label).map(HashSet::len)
    }

    /// Number of edges entering a node.
    pub fn in_degree(&self, label: &L) -> GraphResult<usize, L> {
        self.predecessors(label).map(HashSet::len)
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

    /// Whether the edge `u -> v` is in the graph.
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
    pub fn edges(&self) -> DirectedEdges<'_, L> {
        DirectedEdges::new(&self.adj, self.edge_count)
    }

    /// Flip every edge in place. O(1).
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.adj, &mut self.back_adj);
    }

    /// A copy of the graph with every edge flipped.
    pub fn reversed(&self) -> Self {
        let mut graph = self.clone();
        graph.reverse();
        graph
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.adj.clear();
        self.back_adj.clear();
        self.edge_count = 0;
    }
}

impl<L: Label> Default for DirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> PartialEq for DirectedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.adj == other.adj
    }
}

impl<L: Label> Eq for DirectedGraph<L> {}

impl<L: Label> Extend<(L, L)> for DirectedGraph<L> {
    fn extend<I: IntoIterator<Item = (L, L)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<L: Label> FromIterator<(L, L)> for DirectedGraph<L> {
    fn from_iter<I: IntoIterator<Item = (L, L)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<L: Label + fmt::Debug> fmt::Debug for DirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("nodes", &self.nodes())
            .field("edges", &self.edges())
            .finish()
    }
}

impl<L: Label> fmt::Display for DirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DirectedGraph with {} nodes and {} edges>",
            self.node_count(),
            self.edge_count
        )
    }
}

impl<L: Label> Graph for DirectedGraph<L> {
    type Node = L;
    type Edges<'a>
        = DirectedEdges<'a, L>
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn add_node(&mut self, label: L) {
        DirectedGraph::add_node(self, label);
    }

    fn add_edge(&mut self, u: L, v: L) -> GraphResult<(), L> {
        DirectedGraph::add_edge(self, u, v);
        Ok(())
    }

    fn remove_node(&mut self, label: &L) -> GraphResult<(), L> {
        DirectedGraph::remove_node(self, label)
    }

    fn remove_edge(&mut self, u: &L, v: &L) -> GraphResult<(), L> {
        DirectedGraph::remove_edge(self, u, v)
    }

    fn neighbors(&self, label: &L) -> GraphResult<&HashSet<L>, L> {
        self.successors(label)
    }

    fn arbitrary_node(&self) -> GraphResult<&L, L> {
        DirectedGraph::arbitrary_node(self)
    }

    fn nodes(&self) -> Nodes<'_, L> {
        DirectedGraph::nodes(self)
    }

    fn edges(&self) -> DirectedEdges<'_, L> {
        DirectedGraph::edges(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(graph: &DirectedGraph<u32>) {
        assert_eq!(graph.adj.len(), graph.back_adj.len());
        let mut forward = 0;
        for (u, successors) in &graph.adj {
            assert!(graph.back_adj.contains_key(u));
            for v in successors {
                assert!(graph.back_adj[v].contains(u), "missing back edge ({}, {})", u, v);
                forward += 1;
            }
        }
        let backward: usize = graph.back_adj.values().map(HashSet::len).sum();
        assert_eq!(forward, graph.edge_count);
        assert_eq!(backward, graph.edge_count);
    }

    #[test]
    fn test_duplicate_add_does_not_overcount() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(1, 3);
        graph.add_edge(1, 3);
        assert_eq!(graph.edge_count(), 1);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_node_with_self_loop() {
        let mut graph: DirectedGraph<u32> = [(1, 3), (3, 1), (5, 1), (1, 6), (1, 1)]
            .into_iter()
            .collect();
        assert_eq!(graph.edge_count(), 5);
        graph.remove_node(&1).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_node_clears_successor_back_edges() {
        let mut graph: DirectedGraph<u32> = [(1, 6), (2, 6)].into_iter().collect();
        graph.remove_node(&1).unwrap();
        assert_eq!(graph.predecessors(&6).unwrap().len(), 1);
        assert!(graph.predecessors(&6).unwrap().contains(&2));
        assert_consistent(&graph);
    }

    #[test]
    fn test_reverse() {
        let mut graph: DirectedGraph<u32> = [(1, 2), (2, 3)].into_iter().collect();
        let flipped = graph.reversed();
        assert!(flipped.contains_edge(&2, &1));
        assert!(!flipped.contains_edge(&1, &2));
        graph.reverse();
        assert_eq!(graph, flipped);
        assert_consistent(&graph);
    }

    #[test]
    fn test_degrees() {
        let graph: DirectedGraph<u32> = [(1, 2), (3, 2), (2, 2)].into_iter().collect();
        assert_eq!(graph.in_degree(&2), Ok(3));
        assert_eq!(graph.out_degree(&2), Ok(1));
        assert_eq!(graph.out_degree(&7), Err(GraphError::NodeNotFound(7)));
    }
}
