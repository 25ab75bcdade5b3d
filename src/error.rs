use std::fmt::Debug;

/// Errors returned by [`DiGraph`](crate::DiGraph) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError<V: Debug> {
    /// The operation referenced a vertex that was never added to the graph.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(V),
}

impl<V: Debug> GraphError<V> {
    /// Gets the vertex the error refers to.
    pub fn vertex(&self) -> &V {
        match self {
            GraphError::UnknownVertex(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vertex_message() {
        let err = GraphError::UnknownVertex("Z".to_string());
        assert_eq!(err.to_string(), "unknown vertex: \"Z\"");
        assert_eq!(err.vertex(), "Z");
    }
}
