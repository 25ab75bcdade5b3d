use std::collections::HashMap;

use dot_parser::ast::{
    EdgeStmt, Graph as DotGraph, ID, NodeID, NodeStmt, Stmt, StmtList, Subgraph, either::Either,
};

use crate::{
    DiGraph,
    dot::{DotError, unquote},
    tracing_support::debug,
};

impl DiGraph<String> {
    /// Parses DOT text into a graph.
    ///
    /// Node statements add vertices in the order they appear.  Nodes that are
    /// only mentioned in edge statements are added when first referenced.
    /// Each edge is added in the direction it is written, whether the input
    /// is a `graph` or a `digraph`; edge chains and subgraph endpoints expand
    /// to every pair they connect.  A node's `label` attribute becomes its
    /// vertex identifier; otherwise the node's DOT ID is used.  Other
    /// attributes are ignored.
    ///
    /// Because vertices are identified by value, nodes with different DOT IDs
    /// that resolve to the same identifier (for example two nodes with the
    /// same `label`) become a single vertex, and an edge between them becomes
    /// a self-loop.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::Parse`] if `data` is not valid DOT.
    pub fn from_dot(data: &str) -> Result<Self, DotError> {
        let dot_ast: DotGraph<(ID<'_>, ID<'_>)> = DotGraph::try_from(data)
            .map_err(|e| DotError::Parse(format!("{:?}", e)))?;

        let mut builder = Builder::default();
        builder.declare_nodes(&dot_ast.stmts);
        builder.add_edges(&dot_ast.stmts);
        debug!(
            vertices = builder.graph.num_vertices(),
            edges = builder.graph.num_edges(),
            "parsed DOT graph"
        );
        Ok(builder.graph)
    }
}

#[derive(Default)]
struct Builder {
    graph: DiGraph<String>,
    // DOT node ID -> vertex
    vertices: HashMap<String, String>,
}

impl Builder {
    /// Adds a vertex for every node statement, including those nested in
    /// subgraphs.
    fn declare_nodes(&mut self, stmts: &StmtList<(ID<'_>, ID<'_>)>) {
        for stmt in stmts {
            match stmt {
                Stmt::NodeStmt(node_stmt) => {
                    let name = node_stmt.node.id.to_string();
                    if !self.vertices.contains_key(&name) {
                        let vertex = node_label(node_stmt).unwrap_or_else(|| unquote(&name));
                        self.graph.add_vertex(vertex.clone());
                        self.vertices.insert(name, vertex);
                    }
                }
                Stmt::Subgraph(subgraph) => self.declare_nodes(&subgraph.stmts),
                _ => {}
            }
        }
    }

    fn add_edges(&mut self, stmts: &StmtList<(ID<'_>, ID<'_>)>) {
        for stmt in stmts {
            match stmt {
                Stmt::EdgeStmt(edge_stmt) => {
                    self.add_edge_chain(edge_stmt);
                }
                Stmt::Subgraph(subgraph) => self.add_edges(&subgraph.stmts),
                _ => {}
            }
        }
    }

    /// Adds the edges of `a -> b -> c ...`, returning every vertex the
    /// statement mentions.
    fn add_edge_chain(&mut self, edge_stmt: &EdgeStmt<(ID<'_>, ID<'_>)>) -> Vec<String> {
        let mut sources = self.endpoints(&edge_stmt.from);
        let mut mentioned = sources.clone();
        let mut current_rhs = Some(&edge_stmt.next);
        while let Some(rhs) = current_rhs {
            let targets = self.endpoints(&rhs.to);
            for source in &sources {
                self.graph
                    .extend(targets.iter().map(|target| (source.clone(), target.clone())));
            }
            push_unique(&mut mentioned, targets.iter().cloned());
            sources = targets;
            current_rhs = rhs.next.as_deref();
        }
        mentioned
    }

    fn endpoints(&mut self, end: &Either<NodeID, Subgraph<(ID<'_>, ID<'_>)>>) -> Vec<String> {
        match end {
            Either::Left(node_id) => vec![self.resolve(node_id.id.to_string())],
            Either::Right(subgraph) => {
                self.declare_nodes(&subgraph.stmts);
                let mut vertices = Vec::new();
                self.collect_subgraph(&subgraph.stmts, &mut vertices);
                vertices
            }
        }
    }

    fn collect_subgraph(&mut self, stmts: &StmtList<(ID<'_>, ID<'_>)>, out: &mut Vec<String>) {
        for stmt in stmts {
            match stmt {
                Stmt::NodeStmt(node_stmt) => {
                    let vertex = self.resolve(node_stmt.node.id.to_string());
                    push_unique(out, [vertex]);
                }
                Stmt::EdgeStmt(edge_stmt) => {
                    let mentioned = self.add_edge_chain(edge_stmt);
                    push_unique(out, mentioned);
                }
                Stmt::Subgraph(subgraph) => self.collect_subgraph(&subgraph.stmts, out),
                _ => {}
            }
        }
    }

    /// Gets the vertex for a DOT node ID, adding it if it was never declared.
    fn resolve(&mut self, name: String) -> String {
        if let Some(vertex) = self.vertices.get(&name) {
            return vertex.clone();
        }
        let vertex = unquote(&name);
        self.graph.add_vertex(vertex.clone());
        self.vertices.insert(name, vertex.clone());
        vertex
    }
}

fn push_unique(out: &mut Vec<String>, items: impl IntoIterator<Item = String>) {
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
}

/// Gets the last `label` attribute of a node statement.
fn node_label(node_stmt: &NodeStmt<(ID<'_>, ID<'_>)>) -> Option<String> {
    let attr_list = node_stmt.attr.as_ref()?;
    attr_list
        .elems
        .iter()
        .flat_map(|alist| alist.elems.iter())
        .filter_map(|(name, value)| {
            let name: String = name.clone().into();
            let value: String = value.clone().into();
            (unquote(&name) == "label").then(|| unquote(&value))
        })
        .last()
}
