use std::fmt;

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graphs::edges::{Edge, EdgeStore, Incident, Link};
use crate::graphs::graph::{write_canonical, Graph};
use crate::graphs::undirected::Undirected;
use crate::graphs::vertices::{Vertex, VertexKey, VertexStore};

/// Simple undirected graph over an insertion-ordered vertex arena and link
/// list.
///
/// At most one link joins any unordered pair of vertices, and link ids are
/// unique. A loop (`u == v`) is allowed once per vertex.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    vertices: VertexStore,
    links: EdgeStore<Link>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Far endpoints of the links touching one vertex.
pub struct Neighbors<'a> {
    links: Incident<'a, Link>,
    vertex: VertexKey,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexKey;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.vertex;
        self.links.by_ref().find_map(|link| link.opposite(vertex))
    }
}

impl Graph for UndirectedGraph {
    type Edge = Link;

    type Neighbors<'a>
        = Neighbors<'a>
    where
        Self: 'a;

    fn vertex_store(&self) -> &VertexStore {
        &self.vertices
    }

    fn edge_store(&self) -> &EdgeStore<Link> {
        &self.links
    }

    fn add_vertex(&mut self, id: impl Into<String>, weight: f64) -> bool {
        self.vertices.insert(id, weight).is_some()
    }

    fn remove_vertex(&mut self, id: &str) -> bool {
        match self.vertices.remove(id) {
            Some((key, _)) => {
                let dropped = self.links.detach(key);
                trace!(vertex = id, dropped, "removed vertex and its links");
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

    /// Links `u` and `v`.
    ///
    /// Returns false when an endpoint is missing, when the pair is already
    /// linked in either order, or when the link id is taken.
    fn add_edge(&mut self, id: impl Into<String>, weight: f64, u: &str, v: &str) -> bool {
        let (Some(a), Some(b)) = (self.vertices.key(u), self.vertices.key(v)) else {
            return false;
        };

        if self.links.incident(a).any(|link| link.connects(a, b)) {
            return false;
        }

        let id = id.into();
        if self.links.contains_id(&id) {
            trace!(link = %id, "link id already in use");
            return false;
        }

        self.links.push(Link::new(id, weight, a, b));
        true
    }

    fn remove_edge(&mut self, id: &str) -> Result<Link> {
        self.links
            .remove(id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_owned()))
    }

    fn neighbors(&self, vertex: VertexKey) -> Self::Neighbors<'_> {
        Neighbors {
            links: self.links.incident(vertex),
            vertex,
        }
    }
}

impl Undirected for UndirectedGraph {}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(self, f)
    }
}
