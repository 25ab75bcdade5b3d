//! [`DiGraph`] is a directed graph whose vertices are identified by value.
//!
//! Vertices are kept in insertion order, and the successors of each vertex are
//! kept in the order their edges were added.  Every query that returns
//! vertices or edges therefore returns them in a deterministic order, and
//! depth-first traversal visits neighbors in edge insertion order.
//!
//! Edges are only accepted between vertices already in the graph: [`DiGraph::add_edge`]
//! reports [`GraphError::UnknownVertex`] rather than creating missing
//! endpoints.  Parallel edges are collapsed into one.  Bulk construction from
//! an edge list ([`DiGraph::from_edges`], [`FromIterator`], [`Extend`])
//! creates endpoints as it goes.
use std::{collections::HashMap, fmt::Debug, hash::Hash};

use derivative::Derivative;

use crate::{
    error::GraphError,
    search::{BfsIterator, DfsIterator},
    tracing_support::{debug, info_span},
};

/// A trait for types that can identify a vertex.
///
/// Identity is by value, so two equal values name the same vertex.  This is
/// implemented for every type with the required bounds.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

#[derive(Clone, Debug)]
struct Entry<V> {
    id: V,
    successors: Vec<V>,
}

/// A directed graph with vertices of type `V` and no edge data.
#[derive(Clone, Debug, Derivative)]
#[derivative(Default(bound = ""))]
pub struct DiGraph<V> {
    entries: Vec<Entry<V>>,
    index: HashMap<V, usize>,
}

impl<V: Vertex> DiGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a graph from a list of edges, adding each endpoint the first
    /// time it appears.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        edges.into_iter().collect()
    }

    /// Adds a vertex.  Returns `false`, leaving the graph unchanged, if the
    /// vertex is already present.
    pub fn add_vertex(&mut self, id: V) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        debug!(vertex = ?id, "add vertex");
        self.insert_vertex(id);
        true
    }

    /// Adds the edge `from -> to`.  Returns `Ok(false)` if the edge was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] for the first endpoint (checking
    /// `from` first) that is not in the graph.  The graph is not modified.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<bool, GraphError<V>> {
        let source = self.vertex_index(from)?;
        self.check_vertex(to)?;
        Ok(self.push_successor(source, to))
    }

    /// Gets the vertices reachable from `id` by a single edge, in the order
    /// the edges were added.  An unknown vertex has no neighbors.
    pub fn neighbors(&self, id: &V) -> &[V] {
        self.index
            .get(id)
            .map(|&i| self.entries[i].successors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `Ok(())` if `id` is a vertex of this graph.
    pub fn check_vertex(&self, id: &V) -> Result<(), GraphError<V>> {
        self.vertex_index(id).map(|_| ())
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).contains(to)
    }

    pub fn num_vertices(&self) -> usize {
        self.entries.len()
    }

    pub fn num_edges(&self) -> usize {
        self.entries.iter().map(|e| e.successors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|e| &e.id)
    }

    /// Gets an iterator over all edges as `(source, target)` pairs, grouped by
    /// source in vertex insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.successors.iter().map(move |s| (&e.id, s)))
    }

    /// Performs a lazy depth-first search starting from `start`.  Yields
    /// nothing if `start` is not in the graph.
    pub fn dfs(&self, start: &V) -> DfsIterator<'_, V> {
        DfsIterator::new(self, self.stored(start))
    }

    /// Performs a lazy breadth-first search starting from `start`.  Yields
    /// nothing if `start` is not in the graph.
    pub fn bfs(&self, start: &V) -> BfsIterator<'_, V> {
        BfsIterator::new(self, self.stored(start))
    }

    /// Returns the vertices reachable from `start` in depth-first order.
    /// Each vertex appears once, even when the graph has cycles or several
    /// paths lead to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn traverse(&self, start: &V) -> Result<Vec<V>, GraphError<V>> {
        self.check_vertex(start)?;
        let _span = info_span!("traverse", start = ?start).entered();
        let path: Vec<V> = self.dfs(start).cloned().collect();
        debug!(visited = path.len(), "traverse finished");
        Ok(path)
    }

    /// Like [`Self::traverse`], but in breadth-first order.
    pub fn traverse_breadth_first(&self, start: &V) -> Result<Vec<V>, GraphError<V>> {
        self.check_vertex(start)?;
        let _span = info_span!("traverse_breadth_first", start = ?start).entered();
        let path: Vec<V> = self.bfs(start).cloned().collect();
        debug!(visited = path.len(), "traverse finished");
        Ok(path)
    }

    fn vertex_index(&self, id: &V) -> Result<usize, GraphError<V>> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(id.clone()))
    }

    /// Gets the copy of `id` owned by the graph, so iterators can borrow it
    /// for the graph's lifetime.
    fn stored(&self, id: &V) -> Option<&V> {
        self.index.get(id).map(|&i| &self.entries[i].id)
    }

    fn insert_vertex(&mut self, id: V) -> usize {
        let i = self.entries.len();
        self.index.insert(id.clone(), i);
        self.entries.push(Entry {
            id,
            successors: Vec::new(),
        });
        i
    }

    fn index_or_insert(&mut self, id: V) -> usize {
        match self.index.get(&id) {
            Some(&i) => i,
            None => self.insert_vertex(id),
        }
    }

    fn push_successor(&mut self, source: usize, to: &V) -> bool {
        let entry = &mut self.entries[source];
        if entry.successors.contains(to) {
            return false;
        }
        debug!(from = ?entry.id, to = ?to, "add edge");
        entry.successors.push(to.clone());
        true
    }
}

impl<V: Vertex> Extend<(V, V)> for DiGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (from, to) in edges {
            let source = self.index_or_insert(from);
            self.index_or_insert(to.clone());
            self.push_successor(source, &to);
        }
    }
}

impl<V: Vertex> FromIterator<(V, V)> for DiGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}
