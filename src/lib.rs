//! Named, weighted graphs with breadth-first path trees.
//!
//! [`graphs`] holds the directed and undirected graph types, the shared
//! [`Graph`](graphs::Graph) interface and the breadth-first search that
//! produces one shortest path per reachable vertex. [`loader`] fills a graph
//! from its plain-text description, and [`bacon`] builds actor collaboration
//! graphs and labels them with Bacon numbers.

pub mod bacon;
pub mod error;
pub mod graphs;
pub mod loader;

pub use error::{GraphError, LoadError, Result};
