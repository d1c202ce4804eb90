//! Bacon numbers over actor collaboration graphs.
//!
//! A credit list is parsed into a [`Filmography`], turned into an undirected
//! [`collaboration_graph`] where co-stars are adjacent, and labeled by
//! [`assign_bacon_numbers`] with each actor's hop distance from a root actor.

pub mod collaboration;
pub mod credits;
pub mod numbers;

pub use collaboration::collaboration_graph;
pub use credits::{Actor, Filmography, Movie};
pub use numbers::{assign_bacon_numbers, BaconConfig, BaconNumber, BaconNumbers, DEFAULT_ROOT};
