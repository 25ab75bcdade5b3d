use std::{borrow::Cow, collections::HashMap, fmt::Display, io};

use crate::{
    DiGraph,
    dot::DotError,
    graph::Vertex,
};

const DEFAULT_GRAPH_NAME: &str = "G";

type Node = usize;
type Edge = (usize, usize);

/// A snapshot of a graph with vertices replaced by their positions, which is
/// what the `dot` crate walks.
struct DotView {
    name: String,
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl DotView {
    fn new<V: Vertex + Display>(graph: &DiGraph<V>, name: &str) -> Result<Self, DotError> {
        ::dot::Id::new(name).map_err(|()| DotError::InvalidId(name.to_string()))?;

        let positions: HashMap<&V, usize> = graph
            .vertices()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();
        let edges = graph
            .edges()
            .map(|(source, target)| (positions[source], positions[target]))
            .collect();
        Ok(Self {
            name: name.to_string(),
            labels: graph.vertices().map(|v| v.to_string()).collect(),
            edges,
        })
    }
}

impl<'a> ::dot::Labeller<'a, Node, Edge> for DotView {
    fn graph_id(&'a self) -> ::dot::Id<'a> {
        ::dot::Id::new(self.name.as_str()).expect("Graph name was pre-validated")
    }

    fn node_id(&'a self, n: &Node) -> ::dot::Id<'a> {
        ::dot::Id::new(format!("n{}", n)).expect("n<index> is a valid DOT identifier")
    }

    fn node_label(&'a self, n: &Node) -> ::dot::LabelText<'a> {
        ::dot::LabelText::LabelStr(Cow::Borrowed(self.labels[*n].as_str()))
    }
}

impl<'a> ::dot::GraphWalk<'a, Node, Edge> for DotView {
    fn nodes(&'a self) -> ::dot::Nodes<'a, Node> {
        (0..self.labels.len()).collect::<Vec<_>>().into()
    }

    fn edges(&'a self) -> ::dot::Edges<'a, Edge> {
        Cow::Borrowed(self.edges.as_slice())
    }

    fn source(&'a self, edge: &Edge) -> Node {
        edge.0
    }

    fn target(&'a self, edge: &Edge) -> Node {
        edge.1
    }
}

impl<V> DiGraph<V>
where
    V: Vertex + Display,
{
    /// Writes the graph as a DOT `digraph` named `G`.  Vertices are named
    /// `n0`, `n1`, ... in insertion order and labelled with their `Display`
    /// text.
    pub fn write_dot(&self, output: &mut impl io::Write) -> Result<(), DotError> {
        self.write_dot_named(DEFAULT_GRAPH_NAME, output)
    }

    /// Like [`Self::write_dot`], with a custom graph name.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::InvalidId`] if `name` is not a plain DOT
    /// identifier, or [`DotError::Io`] if writing fails.
    pub fn write_dot_named(&self, name: &str, output: &mut impl io::Write) -> Result<(), DotError> {
        let view = DotView::new(self, name)?;
        ::dot::render(&view, output)?;
        Ok(())
    }

    /// Renders the graph to a DOT string.
    pub fn to_dot_string(&self) -> Result<String, DotError> {
        let mut output = Vec::new();
        self.write_dot(&mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}
