use bit_vec::BitVec;
use tracing::debug;

use crate::error::Result;
use crate::graphs::frontier::{Frontier, LayeredFrontier};
use crate::graphs::graph::Graph;
use crate::graphs::paths::Path;
use crate::graphs::vertices::VertexKey;
use crate::graphs::visited::Visited;

/// Breadth-first traversal that yields one layer of paths per step.
///
/// Layer `k` holds one path per vertex at hop distance `k` from the root,
/// each path being a shortest walk from the root to that vertex. Within a
/// layer, paths keep discovery order: parents in layer order, and for each
/// parent its neighbors in the order [`Graph::neighbors`] returns them.
///
/// A vertex is marked visited when it is first discovered, so it ends exactly
/// one path. Vertices not reachable from the root never show up.
pub struct GraphBFS<'g, G, V = BitVec>
where
    G: Graph,
    V: Visited<VertexKey>,
{
    graph: &'g G,
    visited: V,
    frontier: LayeredFrontier<Path>,
}

impl<'g, G, V> GraphBFS<'g, G, V>
where
    G: Graph,
    V: Visited<VertexKey>,
{
    /// Starts a traversal at `root`, which must be a live key of `graph`.
    pub fn new(graph: &'g G, root: VertexKey) -> Self {
        Self::with_visited(graph, root, V::default())
    }

    /// Starts a traversal with a caller-provided (typically presized) visited
    /// set. Anything already marked in it is treated as unreachable.
    pub fn with_visited(graph: &'g G, root: VertexKey, mut visited: V) -> Self {
        visited.visit(root);

        Self {
            graph,
            visited,
            frontier: LayeredFrontier::new([Path::root(root)]),
        }
    }

    #[inline]
    pub fn into_visited(self) -> V {
        self.visited
    }

    /// Hop distance of the layer the next step returns.
    pub fn depth(&self) -> usize {
        self.frontier.depth()
    }

    pub fn step(&mut self) -> Option<Vec<Path>> {
        self.frontier.step(|current, next| {
            for path in current {
                for neighbor in self.graph.neighbors(path.last()) {
                    if self.visited.visit(neighbor) {
                        next.push(path.extended(neighbor));
                    }
                }
            }

            // debug invariants: every new path is one hop longer and ends visited
            debug_assert!(next
                .iter()
                .all(|p| self.visited.is_visited(&p.last())));
            debug_assert!(current
                .first()
                .is_none_or(|c| next.iter().all(|p| p.len() == c.len() + 1)));
        })
    }
}

impl<G, V> Iterator for GraphBFS<'_, G, V>
where
    G: Graph,
    V: Visited<VertexKey>,
{
    type Item = Vec<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Paths from `root` to every vertex it reaches, in level order.
///
/// The first path is `[root]`. Each reachable vertex ends exactly one path,
/// and that path's [`hops`](Path::hops) is its distance from the root.
pub fn breadth_first_paths<G: Graph>(graph: &G, root: &str) -> Result<Vec<Path>> {
    let root = graph.key(root)?;
    Ok(collect_paths(graph, root))
}

/// Same as [`breadth_first_paths`], with the root given by its position in
/// the vertex listing.
pub fn breadth_first_paths_from_index<G: Graph>(graph: &G, index: usize) -> Result<Vec<Path>> {
    let root = graph.key_at(index)?;
    Ok(collect_paths(graph, root))
}

/// Same as [`breadth_first_paths`], rooted at the first vertex inserted.
///
/// An empty graph yields no paths.
pub fn breadth_first_paths_from_first<G: Graph>(graph: &G) -> Vec<Path> {
    match graph.vertex_store().nth(0) {
        Some(root) => collect_paths(graph, root),
        None => Vec::new(),
    }
}

fn collect_paths<G: Graph>(graph: &G, root: VertexKey) -> Vec<Path> {
    let visited = BitVec::from_elem(graph.vertex_store().slot_count(), false);
    let mut bfs: GraphBFS<G> = GraphBFS::with_visited(graph, root, visited);

    let mut paths = Vec::new();
    for layer in bfs.by_ref() {
        paths.extend(layer);
    }

    debug!(
        reached = paths.len(),
        vertices = graph.vertex_count(),
        layers = bfs.depth(),
        "breadth-first search finished"
    );
    paths
}
