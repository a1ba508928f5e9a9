//! Borrowed, read-only views over a graph's nodes and edges.
//!
//! Views hold a shared borrow of the graph's adjacency maps, so they always
//! reflect the graph they came from and nothing is copied when one is taken.
//! The edge views report the graph's maintained edge counter instead of
//! counting adjacency entries.

use std::borrow::Borrow;
use std::collections::{hash_map, hash_set, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::types::{Label, MAX_EDGES_DISPLAYED, MAX_NODES_DISPLAYED};

pub(crate) type AdjacencyMap<L> = HashMap<L, HashSet<L>>;

/// Shared read-only behaviour of the undirected and directed edge views.
pub trait EdgeView<'a, L: 'a>: IntoIterator<Item = (&'a L, &'a L)> {
    /// Whether the edge `(u, v)` is in the graph. Never fails.
    fn contains_edge(&self, u: &L, v: &L) -> bool;

    /// The number of edges.
    fn len(&self) -> usize;

    /// Whether the graph has no edges.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write `<{total} {noun}: a, b, c...>`, listing at most `limit` items.
fn write_truncated<I>(
    f: &mut fmt::Formatter<'_>,
    noun: &str,
    total: usize,
    items: I,
    limit: usize,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Debug,
{
    write!(f, "<{} {}: ", total, noun)?;
    for (i, item) in items.into_iter().take(limit).enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:?}", item)?;
    }
    if total > limit {
        f.write_str("...")?;
    }
    f.write_str(">")
}

fn adjacency_contains<L, Q>(adj: &AdjacencyMap<L>, u: &Q, v: &Q) -> bool
where
    L: Label + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    adj.get(u).is_some_and(|related| related.contains(v))
}

// ==================== Nodes ====================

/// A view into a graph's nodes.
pub struct Nodes<'a, L> {
    adj: &'a AdjacencyMap<L>,
}

impl<'a, L> Clone for Nodes<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L> Copy for Nodes<'a, L> {}

impl<'a, L: Label> Nodes<'a, L> {
    pub(crate) fn new(adj: &'a AdjacencyMap<L>) -> Self {
        Self { adj }
    }

    /// Membership query. Average case O(1).
    pub fn contains<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adj.contains_key(label)
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Iterate over the node labels in the store's order.
    pub fn iter(&self) -> NodesIter<'a, L> {
        NodesIter {
            keys: self.adj.keys(),
        }
    }
}

impl<'a, L: Label> IntoIterator for Nodes<'a, L> {
    type Item = &'a L;
    type IntoIter = NodesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, L: Label> IntoIterator for &'b Nodes<'a, L> {
    type Item = &'a L;
    type IntoIter = NodesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Label + fmt::Debug> fmt::Debug for Nodes<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<L: Label + fmt::Debug> fmt::Display for Nodes<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_truncated(f, "nodes", self.len(), self.iter(), MAX_NODES_DISPLAYED)
    }
}

/// Iterator over node labels, created by [`Nodes::iter`].
pub struct NodesIter<'a, L> {
    keys: hash_map::Keys<'a, L, HashSet<L>>,
}

impl<'a, L> Clone for NodesIter<'a, L> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<'a, L> Iterator for NodesIter<'a, L> {
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<L> ExactSizeIterator for NodesIter<'_, L> {}

impl<L> FusedIterator for NodesIter<'_, L> {}

// ==================== Undirected edges ====================

/// A view into an undirected graph's edges.
///
/// Each edge is reported once, in whichever orientation the adjacency map
/// reaches it first.
pub struct UndirectedEdges<'a, L> {
    adj: &'a AdjacencyMap<L>,
    len: usize,
}

impl<'a, L> Clone for UndirectedEdges<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L> Copy for UndirectedEdges<'a, L> {}

impl<'a, L: Label> UndirectedEdges<'a, L> {
    pub(crate) fn new(adj: &'a AdjacencyMap<L>, len: usize) -> Self {
        Self { adj, len }
    }

    /// Edge query in either orientation. Average case O(1).
    ///
    /// Returns `false` when either endpoint is missing.
    pub fn contains<Q>(&self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        adjacency_contains(self.adj, u, v)
    }

    /// The number of edges. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the edges, yielding each one exactly once.
    ///
    /// The pair order is arbitrary: an edge between 1 and 2 may come out as
    /// `(1, 2)` or `(2, 1)`, never both.
    pub fn iter(&self) -> UndirectedEdgesIter<'a, L> {
        UndirectedEdgesIter {
            sources: self.adj.iter(),
            current: None,
            visited: HashSet::with_capacity(self.adj.len()),
            remaining: self.len,
        }
    }
}

impl<'a, L: Label> EdgeView<'a, L> for UndirectedEdges<'a, L> {
    fn contains_edge(&self, u: &L, v: &L) -> bool {
        self.contains(u, v)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, L: Label> IntoIterator for UndirectedEdges<'a, L> {
    type Item = (&'a L, &'a L);
    type IntoIter = UndirectedEdgesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, L: Label> IntoIterator for &'b UndirectedEdges<'a, L> {
    type Item = (&'a L, &'a L);
    type IntoIter = UndirectedEdgesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Label + fmt::Debug> fmt::Debug for UndirectedEdges<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<L: Label + fmt::Debug> fmt::Display for UndirectedEdges<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_truncated(f, "edges", self.len, self.iter(), MAX_EDGES_DISPLAYED)
    }
}

/// Iterator over undirected edges, created by [`UndirectedEdges::iter`].
///
/// An edge `(u, v)` is yielded while scanning `u` only if `v` has not been
/// scanned yet; when `v` is scanned later the same edge is skipped.
pub struct UndirectedEdgesIter<'a, L> {
    sources: hash_map::Iter<'a, L, HashSet<L>>,
    current: Option<(&'a L, hash_set::Iter<'a, L>)>,
    visited: HashSet<&'a L>,
    remaining: usize,
}

impl<'a, L: Label> Iterator for UndirectedEdgesIter<'a, L> {
    type Item = (&'a L, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, neighbors)) = &mut self.current {
                let u: &'a L = *u;
                for v in neighbors.by_ref() {
                    if !self.visited.contains(v) {
                        self.remaining = self.remaining.saturating_sub(1);
                        return Some((u, v));
                    }
                }
            }
            let (u, neighbors) = self.sources.next()?;
            self.visited.insert(u);
            self.current = Some((u, neighbors.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L: Label> ExactSizeIterator for UndirectedEdgesIter<'_, L> {}

impl<L: Label> FusedIterator for UndirectedEdgesIter<'_, L> {}

// ==================== Directed edges ====================

/// A view into a directed graph's edges, as ordered `(source, target)` pairs.
pub struct DirectedEdges<'a, L> {
    adj: &'a AdjacencyMap<L>,
    len: usize,
}

impl<'a, L> Clone for DirectedEdges<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L> Copy for DirectedEdges<'a, L> {}

impl<'a, L: Label> DirectedEdges<'a, L> {
    pub(crate) fn new(adj: &'a AdjacencyMap<L>, len: usize) -> Self {
        Self { adj, len }
    }

    /// Whether the edge `u -> v` exists. Average case O(1).
    ///
    /// Returns `false` when either endpoint is missing.
    pub fn contains<Q>(&self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        adjacency_contains(self.adj, u, v)
    }

    /// The number of edges. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the edges as ordered pairs.
    pub fn iter(&self) -> DirectedEdgesIter<'a, L> {
        DirectedEdgesIter {
            sources: self.adj.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

impl<'a, L: Label> EdgeView<'a, L> for DirectedEdges<'a, L> {
    fn contains_edge(&self, u: &L, v: &L) -> bool {
        self.contains(u, v)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, L: Label> IntoIterator for DirectedEdges<'a, L> {
    type Item = (&'a L, &'a L);
    type IntoIter = DirectedEdgesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, L: Label> IntoIterator for &'b DirectedEdges<'a, L> {
    type Item = (&'a L, &'a L);
    type IntoIter = DirectedEdgesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Label + fmt::Debug> fmt::Debug for DirectedEdges<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<L: Label + fmt::Debug> fmt::Display for DirectedEdges<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_truncated(f, "edges", self.len, self.iter(), MAX_EDGES_DISPLAYED)
    }
}

/// Iterator over directed edges, created by [`DirectedEdges::iter`].
pub struct DirectedEdgesIter<'a, L> {
    sources: hash_map::Iter<'a, L, HashSet<L>>,
    current: Option<(&'a L, hash_set::Iter<'a, L>)>,
    remaining: usize,
}

impl<'a, L> Clone for DirectedEdgesIter<'a, L> {
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, L> Iterator for DirectedEdgesIter<'a, L> {
    type Item = (&'a L, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, successors)) = &mut self.current {
                if let Some(v) = successors.next() {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some((*u, v));
                }
            }
            let (u, successors) = self.sources.next()?;
            self.current = Some((u, successors.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L> ExactSizeIterator for DirectedEdgesIter<'_, L> {}

impl<L> FusedIterator for DirectedEdgesIter<'_, L> {}
