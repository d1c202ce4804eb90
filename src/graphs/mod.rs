pub mod bfs;
pub mod digraph;
pub mod directed;
pub mod edges;
pub mod frontier;
pub mod graph;
pub mod paths;
pub mod undirected;
pub mod ungraph;
pub mod vertices;
pub mod visited;

pub use bfs::{
    breadth_first_paths, breadth_first_paths_from_first, breadth_first_paths_from_index, GraphBFS,
};
pub use digraph::DirectedGraph;
pub use directed::Directed;
pub use edges::{Arc, Edge, Link};
pub use graph::Graph;
pub use paths::Path;
pub use undirected::Undirected;
pub use ungraph::UndirectedGraph;
pub use vertices::{Vertex, VertexKey};
