use rustc_hash::FxHashMap;

/// Stable handle of a vertex inside one graph.
///
/// Keys are slot indices assigned at insertion time. A removed vertex leaves
/// its slot empty, so keys held by paths or edges never shift or get reused
/// while the graph lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(usize);

impl VertexKey {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named vertex with a mutable auxiliary weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: String,
    weight: f64,
}

impl Vertex {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

/// Read-only access to a vertex set.
pub trait ReadVertices {
    /// Iterator over all live vertices together with their keys.
    ///
    /// Vertices come out in insertion order.
    type Vertices<'a>: Iterator<Item = (VertexKey, &'a Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all live vertices.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of live vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// Insertion-ordered vertex arena with an id index.
///
/// `slots` only ever grows. Removal tombstones the slot and drops the id
/// from `index`, which always maps exactly the live vertices.
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    slots: Vec<Option<Vertex>>,
    index: FxHashMap<String, VertexKey>,
}

impl VertexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Upper bound on key indices handed out so far.
    ///
    /// Useful for sizing per-vertex side tables such as visited sets.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a vertex, or returns `None` when the id is already taken.
    pub fn insert(&mut self, id: impl Into<String>, weight: f64) -> Option<VertexKey> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return None;
        }

        let key = VertexKey(self.slots.len());
        self.index.insert(id.clone(), key);
        self.slots.push(Some(Vertex::new(id, weight)));
        Some(key)
    }

    #[inline]
    pub fn key(&self, id: &str) -> Option<VertexKey> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[inline]
    pub fn get(&self, key: VertexKey) -> Option<&Vertex> {
        self.slots.get(key.0).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, key: VertexKey) -> Option<&mut Vertex> {
        self.slots.get_mut(key.0).and_then(Option::as_mut)
    }

    pub fn by_id(&self, id: &str) -> Option<&Vertex> {
        self.key(id).and_then(|key| self.get(key))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Vertex> {
        let key = self.key(id)?;
        self.get_mut(key)
    }

    /// Key of the vertex at `position` in the listing order.
    pub fn nth(&self, position: usize) -> Option<VertexKey> {
        self.vertices().nth(position).map(|(key, _)| key)
    }

    /// Removes a vertex by id and returns its former key and value.
    pub fn remove(&mut self, id: &str) -> Option<(VertexKey, Vertex)> {
        let key = self.index.remove(id)?;
        let vertex = self.slots[key.0].take()?;
        Some((key, vertex))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (VertexKey, &mut Vertex)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, vertex)| vertex.as_mut().map(|v| (VertexKey(slot), v)))
    }
}

/// Iterator over the live slots of a [`VertexStore`].
pub struct VertexIter<'a> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Option<Vertex>>>,
}

impl<'a> Iterator for VertexIter<'a> {
    type Item = (VertexKey, &'a Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        for (slot, vertex) in self.slots.by_ref() {
            if let Some(vertex) = vertex {
                return Some((VertexKey(slot), vertex));
            }
        }
        None
    }
}

impl ReadVertices for VertexStore {
    type Vertices<'a>
        = VertexIter<'a>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        VertexIter {
            slots: self.slots.iter().enumerate(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.len()
    }
}
