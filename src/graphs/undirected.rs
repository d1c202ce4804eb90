use crate::error::Result;
use crate::graphs::edges::{Edge, Link};
use crate::graphs::graph::Graph;

/// Queries specific to graphs made of [`Link`]s.
///
/// `Undirected` is the analogue of [`Directed`](crate::graphs::directed::Directed):
/// a link has no source or target, so the whole incidence of a vertex is one
/// set.
pub trait Undirected: Graph<Edge = Link> {
    /// Every link touching `id`, in insertion order.
    fn incident(&self, id: &str) -> Result<Vec<&Link>> {
        let key = self.key(id)?;
        Ok(self.edge_store().incident(key).collect())
    }

    /// Returns the link joining `a` and `b` in either order, if any.
    fn link_between(&self, a: &str, b: &str) -> Option<&Link> {
        let a = self.vertex_store().key(a)?;
        let b = self.vertex_store().key(b)?;
        self.edge_store().incident(a).find(|link| link.connects(a, b))
    }
}
