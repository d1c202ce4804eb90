use crate::error::Result;
use crate::graphs::edges::Arc;
use crate::graphs::graph::Graph;
use crate::graphs::vertices::Vertex;

/// Directional queries over a graph made of [`Arc`]s.
///
/// The incidence of a vertex splits into arcs leaving it and arcs entering
/// it. Both halves are exposed separately, together with the matching
/// degrees and neighbor sets. [`Graph::degree`] still reports the total.
pub trait Directed: Graph<Edge = Arc> {
    /// Arcs whose source is `id`, in insertion order.
    fn outgoing_edges(&self, id: &str) -> Result<Vec<&Arc>> {
        let key = self.key(id)?;
        Ok(self
            .edge_store()
            .incident(key)
            .filter(|arc| arc.source() == key)
            .collect())
    }

    /// Arcs whose target is `id`, in insertion order.
    fn incoming_edges(&self, id: &str) -> Result<Vec<&Arc>> {
        let key = self.key(id)?;
        Ok(self
            .edge_store()
            .incident(key)
            .filter(|arc| arc.target() == key)
            .collect())
    }

    /// Returns the number of arcs leaving `id`.
    fn out_degree(&self, id: &str) -> Result<usize> {
        let key = self.key(id)?;
        Ok(self
            .edge_store()
            .incident(key)
            .filter(|arc| arc.source() == key)
            .count())
    }

    /// Returns the number of arcs entering `id`.
    fn in_degree(&self, id: &str) -> Result<usize> {
        let key = self.key(id)?;
        Ok(self
            .edge_store()
            .incident(key)
            .filter(|arc| arc.target() == key)
            .count())
    }

    /// Targets of the arcs leaving `id`.
    fn successors(&self, id: &str) -> Result<Vec<&Vertex>> {
        self.adjacent(id)
    }

    /// Sources of the arcs entering `id`.
    fn predecessors(&self, id: &str) -> Result<Vec<&Vertex>> {
        Ok(self
            .incoming_edges(id)?
            .into_iter()
            .filter_map(|arc| self.vertex_at(arc.source()))
            .collect())
    }
}
