use std::fmt;

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graphs::directed::Directed;
use crate::graphs::edges::{Arc, EdgeStore, Incident};
use crate::graphs::graph::{write_canonical, Graph};
use crate::graphs::vertices::{Vertex, VertexKey, VertexStore};

/// Directed graph over an insertion-ordered vertex arena and arc list.
///
/// Arcs between the same ordered pair may repeat, and arc ids are not
/// checked for uniqueness. Lookups by arc id return the first match.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    vertices: VertexStore,
    arcs: EdgeStore<Arc>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Targets of the arcs leaving one vertex.
pub struct Successors<'a> {
    arcs: Incident<'a, Arc>,
    source: VertexKey,
}

impl Iterator for Successors<'_> {
    type Item = VertexKey;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.arcs
            .by_ref()
            .find(|arc| arc.source() == source)
            .map(Arc::target)
    }
}

impl Graph for DirectedGraph {
    type Edge = Arc;

    type Neighbors<'a>
        = Successors<'a>
    where
        Self: 'a;

    fn vertex_store(&self) -> &VertexStore {
        &self.vertices
    }

    fn edge_store(&self) -> &EdgeStore<Arc> {
        &self.arcs
    }

    fn add_vertex(&mut self, id: impl Into<String>, weight: f64) -> bool {
        self.vertices.insert(id, weight).is_some()
    }

    fn remove_vertex(&mut self, id: &str) -> bool {
        match self.vertices.remove(id) {
            Some((key, _)) => {
                let dropped = self.arcs.detach(key);
                trace!(vertex = id, dropped, "removed vertex and its arcs");
                true
            }
            None => false,
        }
    }

    fn vertex_mut(&mut self, id: &str) -> Result<&mut Vertex> {
        self.vertices
            .by_id_mut(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_owned()))
    }

    fn vertex_at_mut(&mut self, key: VertexKey) -> Option<&mut Vertex> {
        self.vertices.get_mut(key)
    }

    /// Appends an arc from `u` to `v`.
    ///
    /// Only missing endpoints are rejected: repeated arcs and repeated ids
    /// are accepted.
    fn add_edge(&mut self, id: impl Into<String>, weight: f64, u: &str, v: &str) -> bool {
        let (Some(source), Some(target)) = (self.vertices.key(u), self.vertices.key(v)) else {
            return false;
        };
        self.arcs.push(Arc::new(id, weight, source, target));
        true
    }

    fn remove_edge(&mut self, id: &str) -> Result<Arc> {
        self.arcs
            .remove(id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_owned()))
    }

    fn neighbors(&self, vertex: VertexKey) -> Self::Neighbors<'_> {
        Successors {
            arcs: self.arcs.incident(vertex),
            source: vertex,
        }
    }
}

impl Directed for DirectedGraph {}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(self, f)
    }
}
