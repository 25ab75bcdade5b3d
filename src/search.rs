use std::collections::{HashSet, VecDeque};

use crate::{
    graph::{DiGraph, Vertex},
    tracing_support::trace,
};

/// Iterator returned by [`DiGraph::dfs`].
///
/// Vertices are yielded in the same order as a recursive depth-first visit
/// that explores neighbors in the order [`DiGraph::neighbors`] returns them.
pub struct DfsIterator<'g, V> {
    graph: &'g DiGraph<V>,
    visited: HashSet<&'g V>,
    stack: Vec<&'g V>,
}

impl<'g, V> DfsIterator<'g, V>
where
    V: Vertex,
{
    pub(crate) fn new(graph: &'g DiGraph<V>, start: Option<&'g V>) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(graph.num_vertices()),
            stack: start.into_iter().collect(),
        }
    }
}

impl<'g, V> Iterator for DfsIterator<'g, V>
where
    V: Vertex,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex) {
                // Reversed so the first neighbor is popped first.
                self.stack.extend(self.graph.neighbors(vertex).iter().rev());
                trace!(vertex = ?vertex, "dfs visit");
                return Some(vertex);
            }
        }
        None
    }
}

/// Iterator returned by [`DiGraph::bfs`].
pub struct BfsIterator<'g, V> {
    graph: &'g DiGraph<V>,
    visited: HashSet<&'g V>,
    queue: VecDeque<&'g V>,
}

impl<'g, V> BfsIterator<'g, V>
where
    V: Vertex,
{
    pub(crate) fn new(graph: &'g DiGraph<V>, start: Option<&'g V>) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(graph.num_vertices()),
            queue: start.into_iter().collect(),
        }
    }
}

impl<'g, V> Iterator for BfsIterator<'g, V>
where
    V: Vertex,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.queue.pop_front() {
            if self.visited.insert(vertex) {
                for neighbor in self.graph.neighbors(vertex) {
                    if !self.visited.contains(neighbor) {
                        self.queue.push_back(neighbor);
                    }
                }
                trace!(vertex = ?vertex, "bfs visit");
                return Some(vertex);
            }
        }
        None
    }
}
