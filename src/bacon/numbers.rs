use std::fmt;

use bit_vec::BitVec;
use tracing::debug;

use crate::error::Result;
use crate::graphs::bfs::breadth_first_paths;
use crate::graphs::graph::Graph;
use crate::graphs::vertices::ReadVertices;
use crate::graphs::visited::Visited;

/// Root actor used when none is configured.
pub const DEFAULT_ROOT: &str = "Kevin Bacon (I)";

/// Settings for a Bacon number computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaconConfig {
    /// Vertex id every distance is measured from.
    pub root: String,
}

impl Default for BaconConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_owned(),
        }
    }
}

/// Hop distance from the root, or no connection at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaconNumber {
    Finite(usize),
    Infinite,
}

impl BaconNumber {
    /// Reads a label stored as a vertex weight.
    ///
    /// Infinite, negative and NaN weights all mean unreachable.
    pub fn from_weight(weight: f64) -> Self {
        if weight.is_finite() && weight >= 0.0 {
            BaconNumber::Finite(weight as usize)
        } else {
            BaconNumber::Infinite
        }
    }

    /// The weight this label is stored as.
    pub fn as_weight(self) -> f64 {
        match self {
            BaconNumber::Finite(hops) => hops as f64,
            BaconNumber::Infinite => f64::INFINITY,
        }
    }

    pub fn finite(self) -> Option<usize> {
        match self {
            BaconNumber::Finite(hops) => Some(hops),
            BaconNumber::Infinite => None,
        }
    }
}

impl fmt::Display for BaconNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaconNumber::Finite(hops) => write!(f, "{hops}"),
            BaconNumber::Infinite => f.write_str("infinito"),
        }
    }
}

/// Bacon numbers of every vertex, in graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaconNumbers {
    entries: Vec<(String, BaconNumber)>,
}

impl BaconNumbers {
    /// Reads the labels currently stored in the vertex weights.
    pub fn from_graph<G: Graph>(graph: &G) -> Self {
        let entries = graph
            .vertices()
            .into_iter()
            .map(|vertex| {
                (
                    vertex.id().to_owned(),
                    BaconNumber::from_weight(vertex.weight()),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, BaconNumber)> {
        self.entries
            .iter()
            .map(|(name, number)| (name.as_str(), *number))
    }

    pub fn get(&self, name: &str) -> Option<BaconNumber> {
        self.iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, number)| number)
    }

    /// Largest finite Bacon number, `None` when nobody has one.
    pub fn max_finite(&self) -> Option<usize> {
        self.iter().filter_map(|(_, number)| number.finite()).max()
    }

    /// Everyone whose Bacon number equals [`max_finite`](Self::max_finite).
    pub fn farthest(&self) -> Vec<&str> {
        let Some(max) = self.max_finite() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, number)| *number == BaconNumber::Finite(max))
            .map(|(name, _)| name)
            .collect()
    }

    /// Number of entries with no connection to the root.
    pub fn unreachable(&self) -> usize {
        self.iter()
            .filter(|(_, number)| *number == BaconNumber::Infinite)
            .count()
    }
}

/// One `name : number` line per entry.
impl fmt::Display for BaconNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, number) in self.iter() {
            writeln!(f, "{name} : {number}")?;
        }
        Ok(())
    }
}

/// Stores every vertex's hop distance from `root` in its weight.
///
/// Runs a breadth-first search from `root` and labels the last vertex of
/// each path with the path's hop count, so the root gets 0. Vertices the
/// search never reached get `f64::INFINITY`, whatever weight they had.
pub fn assign_bacon_numbers<G: Graph>(graph: &mut G, root: &str) -> Result<BaconNumbers> {
    let paths = breadth_first_paths(graph, root)?;

    let mut labeled = BitVec::from_elem(graph.vertex_store().slot_count(), false);
    for path in &paths {
        if labeled.visit(path.last()) {
            if let Some(vertex) = graph.vertex_at_mut(path.last()) {
                vertex.set_weight(path.hops() as f64);
            }
        }
    }

    let unreachable: Vec<_> = graph
        .vertex_store()
        .vertices()
        .map(|(key, _)| key)
        .filter(|key| !labeled.is_visited(key))
        .collect();
    for &key in &unreachable {
        if let Some(vertex) = graph.vertex_at_mut(key) {
            vertex.set_weight(BaconNumber::Infinite.as_weight());
        }
    }

    debug!(
        root,
        reached = paths.len(),
        unreachable = unreachable.len(),
        "bacon numbers assigned"
    );
    Ok(BaconNumbers::from_graph(graph))
}
