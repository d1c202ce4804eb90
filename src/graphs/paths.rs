use crate::graphs::graph::Graph;
use crate::graphs::vertices::{Vertex, VertexKey};

/// A walk explored by breadth-first search.
///
/// Starts at the traversal root and adds one vertex per edge followed. Paths
/// hold keys rather than vertices, so they stay valid while the owning graph
/// has its weights updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    keys: Vec<VertexKey>,
}

impl Path {
    /// The single-vertex path at `root`.
    pub fn root(root: VertexKey) -> Self {
        Self { keys: vec![root] }
    }

    /// A copy of this path with `next` appended.
    pub fn extended(&self, next: VertexKey) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(next);
        Self { keys }
    }

    pub fn first(&self) -> VertexKey {
        self.keys[0]
    }

    pub fn last(&self) -> VertexKey {
        self.keys[self.keys.len() - 1]
    }

    /// Number of vertices on the path, never zero.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of edges followed, i.e. the hop distance of the last vertex.
    pub fn hops(&self) -> usize {
        self.keys.len() - 1
    }

    pub fn keys(&self) -> &[VertexKey] {
        &self.keys
    }

    /// Resolves the path against the graph it was computed on.
    pub fn vertices<'a, G: Graph>(&'a self, graph: &'a G) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.keys.iter().filter_map(move |&key| graph.vertex_at(key))
    }

    /// Vertex ids along the path.
    pub fn ids<'a, G: Graph>(&'a self, graph: &'a G) -> Vec<&'a str> {
        self.vertices(graph).map(Vertex::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::digraph::DirectedGraph;

    #[test]
    fn extension_keeps_the_prefix() {
        let mut g = DirectedGraph::new();
        for id in ["r", "a", "b"] {
            g.add_vertex(id, 0.0);
        }
        let (r, a, b) = (g.key("r").unwrap(), g.key("a").unwrap(), g.key("b").unwrap());

        let root = Path::root(r);
        assert_eq!(root.len(), 1);
        assert_eq!(root.hops(), 0);
        assert_eq!(root.first(), root.last());

        let longer = root.extended(a).extended(b);
        assert_eq!(longer.keys(), &[r, a, b]);
        assert_eq!(longer.hops(), 2);
        assert_eq!(longer.first(), r);
        assert_eq!(longer.last(), b);
        assert_eq!(longer.ids(&g), vec!["r", "a", "b"]);

        // The shorter path is left as it was.
        assert_eq!(root.keys(), &[r]);
    }
}
