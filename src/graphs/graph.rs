use std::fmt;

use tracing::warn;

use crate::error::{GraphError, Result};
use crate::graphs::edges::{Edge, EdgeStore};
use crate::graphs::vertices::{ReadVertices, Vertex, VertexKey, VertexStore};

/// High level abstraction for a finite graph with named vertices and edges.
///
/// A graph composes a [`VertexStore`] and an [`EdgeStore`]. Vertices and
/// edges are addressed by their string ids at this level, while traversal
/// code works with the [`VertexKey`] handles handed out by the vertex store.
///
/// The two implementations differ in how an edge relates its endpoints:
/// - [`DirectedGraph`](crate::graphs::digraph::DirectedGraph) stores arcs
///   with a source and a target, and allows repeated arcs.
/// - [`UndirectedGraph`](crate::graphs::ungraph::UndirectedGraph) stores
///   links with unordered endpoints and rejects a second link between an
///   already connected pair.
///
/// Both keep every edge attached to live vertices: removing a vertex removes
/// its incident edges.
pub trait Graph {
    /// Edge type stored by the graph.
    type Edge: Edge;

    /// Iterator over the neighbors reached in one step from a vertex.
    ///
    /// Neighbors come out in edge insertion order, once per edge.
    type Neighbors<'a>: Iterator<Item = VertexKey>
    where
        Self: 'a;

    /// Returns a shared reference to the vertex storage.
    fn vertex_store(&self) -> &VertexStore;

    /// Returns a shared reference to the edge storage.
    fn edge_store(&self) -> &EdgeStore<Self::Edge>;

    /// Inserts a vertex. Returns false, leaving the graph unchanged, when
    /// the id is already present.
    fn add_vertex(&mut self, id: impl Into<String>, weight: f64) -> bool;

    /// Removes a vertex and every edge touching it.
    ///
    /// Returns false when no vertex carries the id.
    fn remove_vertex(&mut self, id: &str) -> bool;

    /// Mutable access to a vertex, mostly to update its weight.
    fn vertex_mut(&mut self, id: &str) -> Result<&mut Vertex>;

    /// Mutable access to the vertex behind a key, `None` once removed.
    fn vertex_at_mut(&mut self, key: VertexKey) -> Option<&mut Vertex>;

    /// Inserts an edge between the vertices with ids `u` and `v`.
    ///
    /// Returns false when either endpoint is absent. Each implementation
    /// adds its own rejection rules on top.
    fn add_edge(&mut self, id: impl Into<String>, weight: f64, u: &str, v: &str) -> bool;

    /// Removes the first edge carrying `id` and returns it.
    fn remove_edge(&mut self, id: &str) -> Result<Self::Edge>;

    /// Vertices reachable from `vertex` by one edge traversal.
    fn neighbors(&self, vertex: VertexKey) -> Self::Neighbors<'_>;

    /// Number of live vertices.
    fn vertex_count(&self) -> usize {
        self.vertex_store().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edge_store().len()
    }

    /// Returns true when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    fn has_vertex(&self, id: &str) -> bool {
        self.vertex_store().contains(id)
    }

    /// Looks a vertex up by id.
    fn vertex(&self, id: &str) -> Result<&Vertex> {
        self.vertex_store()
            .by_id(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_owned()))
    }

    /// Key of the vertex with this id.
    fn key(&self, id: &str) -> Result<VertexKey> {
        self.vertex_store()
            .key(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_owned()))
    }

    /// Vertex behind a key, or `None` if it has been removed.
    fn vertex_at(&self, key: VertexKey) -> Option<&Vertex> {
        self.vertex_store().get(key)
    }

    /// Key of the vertex at a position in the vertex listing.
    fn key_at(&self, position: usize) -> Result<VertexKey> {
        self.vertex_store()
            .nth(position)
            .ok_or(GraphError::VertexIndexOutOfRange {
                index: position,
                len: self.vertex_count(),
            })
    }

    /// Sets the weight of a vertex.
    fn set_weight(&mut self, id: &str, weight: f64) -> Result<()> {
        self.vertex_mut(id)?.set_weight(weight);
        Ok(())
    }

    /// Returns true when some edge joins `u` to `v`.
    ///
    /// This checks for a single step edge only. Missing vertices yield false.
    fn has_edge(&self, u: &str, v: &str) -> bool {
        let (Some(u), Some(v)) = (self.vertex_store().key(u), self.vertex_store().key(v)) else {
            return false;
        };
        self.edge_store().incident(u).any(|edge| edge.connects(u, v))
    }

    /// Number of edges with the vertex as either endpoint.
    ///
    /// A loop edge counts once.
    fn degree(&self, id: &str) -> Result<usize> {
        let key = self.key(id)?;
        Ok(self.edge_store().incident(key).len())
    }

    /// Vertices reached in one step from `id`, in edge order.
    fn adjacent(&self, id: &str) -> Result<Vec<&Vertex>> {
        let key = self.key(id)?;
        Ok(self
            .neighbors(key)
            .filter_map(|neighbor| self.vertex_at(neighbor))
            .collect())
    }

    /// Looks an edge up by id.
    fn edge(&self, id: &str) -> Result<&Self::Edge> {
        self.edge_store()
            .get(id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_owned()))
    }

    /// All live vertices in insertion order.
    fn vertices(&self) -> Vec<&Vertex> {
        self.vertex_store().vertices().map(|(_, vertex)| vertex).collect()
    }

    /// All edges in insertion order.
    fn edges(&self) -> &[Self::Edge] {
        self.edge_store().as_slice()
    }

    /// Returns true when [`write_canonical`] output reads back unchanged.
    ///
    /// The text form separates fields by whitespace, so it only holds ids
    /// that are non-empty and contain no whitespace. Actor names usually
    /// fail this.
    fn has_plain_ids(&self) -> bool {
        let plain = |id: &str| !id.is_empty() && !id.contains(char::is_whitespace);
        self.vertex_store().vertices().all(|(_, vertex)| plain(vertex.id()))
            && self.edges().iter().all(|edge| plain(edge.id()))
    }

    /// Ids of both endpoints of an edge, in stored order.
    fn endpoint_ids<'a>(&'a self, edge: &Self::Edge) -> (&'a str, &'a str) {
        let (a, b) = edge.endpoints();
        let id = |key| self.vertex_at(key).map(Vertex::id).unwrap_or_default();
        (id(a), id(b))
    }
}

/// Writes the canonical text form of a graph.
///
/// The layout is the one accepted by [`read_graph`](crate::loader::read_graph):
/// vertex count, edge count, one `id weight` line per vertex, then one
/// `id endpoint endpoint weight` line per edge.
///
/// Ids are written as they are. When one is empty or contains whitespace
/// (see [`Graph::has_plain_ids`]) the lines holding it will not load back,
/// and a warning is logged.
pub fn write_canonical<G: Graph>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !graph.has_plain_ids() {
        warn!("graph has ids with whitespace, its text form will not load back");
    }

    writeln!(f, "{}", graph.vertex_count())?;
    writeln!(f, "{}", graph.edge_count())?;

    for (_, vertex) in graph.vertex_store().vertices() {
        writeln!(f, "{} {}", vertex.id(), vertex.weight())?;
    }

    for edge in graph.edges() {
        let (a, b) = graph.endpoint_ids(edge);
        writeln!(f, "{} {} {} {}", edge.id(), a, b, edge.weight())?;
    }

    Ok(())
}
