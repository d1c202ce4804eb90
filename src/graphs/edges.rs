use rustc_hash::FxHashMap;

use crate::graphs::vertices::VertexKey;

/// Shape shared by directed and undirected edges.
///
/// An edge has an id, a weight used only as auxiliary data, and two
/// endpoints identified by [`VertexKey`]. Implementations decide whether the
/// endpoint order carries meaning.
pub trait Edge {
    fn id(&self) -> &str;

    fn weight(&self) -> f64;

    fn set_weight(&mut self, weight: f64);

    /// The two endpoints in stored order.
    ///
    /// For a directed edge this is `(source, target)`.
    fn endpoints(&self) -> (VertexKey, VertexKey);

    /// Returns true when this edge joins `u` to `v`.
    ///
    /// Directed edges match only `u → v`, undirected edges match either order.
    fn connects(&self, u: VertexKey, v: VertexKey) -> bool;

    /// Returns true when `vertex` is one of the endpoints.
    fn touches(&self, vertex: VertexKey) -> bool {
        let (a, b) = self.endpoints();
        a == vertex || b == vertex
    }
}

/// Directed edge from `source` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    id: String,
    weight: f64,
    source: VertexKey,
    target: VertexKey,
}

impl Arc {
    pub fn new(id: impl Into<String>, weight: f64, source: VertexKey, target: VertexKey) -> Self {
        Self {
            id: id.into(),
            weight,
            source,
            target,
        }
    }

    pub fn source(&self) -> VertexKey {
        self.source
    }

    pub fn target(&self) -> VertexKey {
        self.target
    }
}

impl Edge for Arc {
    fn id(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    fn endpoints(&self) -> (VertexKey, VertexKey) {
        (self.source, self.target)
    }

    fn connects(&self, u: VertexKey, v: VertexKey) -> bool {
        self.source == u && self.target == v
    }
}

/// Undirected edge between `a` and `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    id: String,
    weight: f64,
    a: VertexKey,
    b: VertexKey,
}

impl Link {
    pub fn new(id: impl Into<String>, weight: f64, a: VertexKey, b: VertexKey) -> Self {
        Self {
            id: id.into(),
            weight,
            a,
            b,
        }
    }

    /// The endpoint across from `vertex`, or `None` if `vertex` is not on
    /// this link. A loop returns its single endpoint.
    pub fn opposite(&self, vertex: VertexKey) -> Option<VertexKey> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

impl Edge for Link {
    fn id(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    fn endpoints(&self) -> (VertexKey, VertexKey) {
        (self.a, self.b)
    }

    fn connects(&self, u: VertexKey, v: VertexKey) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

/// Insertion-ordered edge list with an incidence index.
///
/// `incidence[k]` holds, in ascending order, the positions of the edges
/// touching the vertex with key index `k`; a loop is listed once. `ids` maps
/// each id to the position of its first edge, which matters for directed
/// graphs where ids are not forced to be unique. Both tables are rebuilt
/// whenever a removal shifts positions.
#[derive(Debug, Clone)]
pub struct EdgeStore<E> {
    edges: Vec<E>,
    incidence: Vec<Vec<usize>>,
    ids: FxHashMap<String, usize>,
}

impl<E> Default for EdgeStore<E> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            incidence: Vec::new(),
            ids: FxHashMap::default(),
        }
    }
}

impl<E: Edge> EdgeStore<E> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn push(&mut self, edge: E) {
        let position = self.edges.len();
        self.index(position, &edge);
        self.edges.push(edge);
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.ids.get(id).map(|&position| &self.edges[position])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut E> {
        let position = *self.ids.get(id)?;
        self.edges.get_mut(position)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// Removes the first edge carrying `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<E> {
        let position = *self.ids.get(id)?;
        let edge = self.edges.remove(position);
        self.reindex();
        Some(edge)
    }

    /// Drops every edge touching `vertex` and returns how many went.
    pub fn detach(&mut self, vertex: VertexKey) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(vertex));
        let dropped = before - self.edges.len();
        if dropped > 0 {
            self.reindex();
        }
        dropped
    }

    /// Positions of the edges touching `vertex`, in insertion order.
    pub fn positions(&self, vertex: VertexKey) -> &[usize] {
        self.incidence
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edges touching `vertex`, in insertion order.
    pub fn incident(&self, vertex: VertexKey) -> Incident<'_, E> {
        Incident {
            edges: &self.edges,
            positions: self.positions(vertex).iter(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.edges
    }

    fn index(&mut self, position: usize, edge: &E) {
        let (a, b) = edge.endpoints();
        let needed = a.index().max(b.index()) + 1;
        if self.incidence.len() < needed {
            self.incidence.resize_with(needed, Vec::new);
        }

        self.incidence[a.index()].push(position);
        if b != a {
            self.incidence[b.index()].push(position);
        }
        self.ids.entry(edge.id().to_owned()).or_insert(position);
    }

    fn reindex(&mut self) {
        let edges = std::mem::take(&mut self.edges);
        self.incidence.iter_mut().for_each(Vec::clear);
        self.ids.clear();
        for (position, edge) in edges.iter().enumerate() {
            self.index(position, edge);
        }
        self.edges = edges;
    }
}

/// Edges touching one vertex, resolved from the incidence index.
pub struct Incident<'a, E> {
    edges: &'a [E],
    positions: std::slice::Iter<'a, usize>,
}

impl<'a, E> Iterator for Incident<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        self.positions.next().map(|&position| &edges[position])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<E> ExactSizeIterator for Incident<'_, E> {}
