use std::collections::HashMap;

use crate::cs::graph::union_find::VertexRegistry;
use crate::error::{Error, Result};

/// An undirected edge between two registry indices.
///
/// `source` always carries the smaller vertex label; the orientation is only a canonical
/// form and does not make the edge directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: usize,
    dest: usize,
}

impl Edge {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn dest(&self) -> usize {
        self.dest
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.source, self.dest)
    }
}

/// A simple undirected graph prepared for contraction.
///
/// The edge list is fixed once built. Only the union-find state inside the vertex registry
/// changes, and [`reset`](Self::reset) puts it back to singletons.
#[derive(Debug, Clone)]
pub struct Graph {
    index: HashMap<u32, usize>,
    registry: VertexRegistry,
    edges: Vec<Edge>,
    components: usize,
}

impl Graph {
    /// Builds a graph from label pairs, failing on the first self-loop.
    pub fn from_edges<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut builder = GraphBuilder::new();
        for (a, b) in pairs {
            builder.add_edge(a, b)?;
        }
        Ok(builder.build())
    }

    /// Number of vertices (`V`).
    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of edges (`E`).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn registry(&self) -> &VertexRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut VertexRegistry {
        &mut self.registry
    }

    /// Borrows the mutable registry alongside the read-only edge list.
    pub fn split_mut(&mut self) -> (&mut VertexRegistry, &[Edge]) {
        (&mut self.registry, &self.edges)
    }

    /// Registry index of the vertex labelled `id`.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn label_of(&self, index: usize) -> u32 {
        self.registry.vertex(index).id()
    }

    /// Connected components of the loaded graph, independent of any contraction state.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn is_connected(&self) -> bool {
        self.components <= 1
    }

    pub fn reset(&mut self) {
        self.registry.reset();
    }
}

/// Incrementally assembles a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    index: HashMap<u32, usize>,
    registry: VertexRegistry,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` if it is new and returns its registry index either way.
    pub fn add_vertex(&mut self, id: u32) -> usize {
        if let Some(&index) = self.index.get(&id) {
            return index;
        }
        let index = self.registry.push(id);
        self.index.insert(id, index);
        index
    }

    /// Adds the undirected edge `{a, b}`, registering missing endpoints.
    ///
    /// Duplicates are kept as given.
    pub fn add_edge(&mut self, a: u32, b: u32) -> Result<()> {
        if a == b {
            return Err(Error::SelfLoop { vertex: a });
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let source = self.add_vertex(low);
        let dest = self.add_vertex(high);
        self.edges.push(Edge { source, dest });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn build(self) -> Graph {
        let mut scratch = self.registry.clone();
        for edge in &self.edges {
            scratch.merge(edge.source, edge.dest);
        }
        let components = scratch.root_count();
        log::debug!(
            "built graph: {} vertices, {} edges, {} components",
            self.registry.len(),
            self.edges.len(),
            components
        );

        Graph {
            index: self.index,
            registry: self.registry,
            edges: self.edges,
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_canonical() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(7, 3).unwrap();
        builder.add_edge(3, 9).unwrap();
        let graph = builder.build();

        for edge in graph.edges() {
            assert!(graph.label_of(edge.source()) < graph.label_of(edge.dest()));
        }
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut builder = GraphBuilder::new();
        let err = builder.add_edge(4, 4).unwrap_err();
        assert!(matches!(err, Error::SelfLoop { vertex: 4 }));
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex(10);
        let b = builder.add_vertex(20);
        assert_eq!(builder.add_vertex(10), a);
        assert_ne!(a, b);
        assert_eq!(builder.vertex_count(), 2);
    }

    #[test]
    fn test_components_counted_at_build() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(1, 2).unwrap();
        builder.add_edge(3, 4).unwrap();
        builder.add_vertex(5);
        let graph = builder.build();

        assert_eq!(graph.components(), 3);
        assert!(!graph.is_connected());
        // Counting components must not leave merges behind.
        assert!(graph.registry().is_reset());
    }

    #[test]
    fn test_from_edges() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1)]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.is_connected());
        assert_eq!(graph.index_of(2).map(|i| graph.label_of(i)), Some(2));
        assert_eq!(graph.index_of(42), None);

        assert!(Graph::from_edges([(1, 2), (2, 2)]).is_err());
    }
}
