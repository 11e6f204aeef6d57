//! Shortest path search over the co-star graph.
//!
//! People are the graph's vertices and a shared movie is an edge. The graph is
//! never materialized: [`ShortestPathSearch`] expands neighbors straight from
//! the [`Dataset`](crate::Dataset) as it goes, keeping a [`QueueFrontier`] of
//! discovered [`Node`]s and a set of explored people.

mod bfs;
mod frontier;
mod node;
mod path;

pub use bfs::{shortest_path, SearchStats, ShortestPathSearch};
pub use frontier::QueueFrontier;
pub use node::Node;
pub use path::{Path, PathStep};
