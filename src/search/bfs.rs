//! Breadth-first shortest path over the co-star graph.

use super::frontier::QueueFrontier;
use super::node::Node;
use super::path::Path;
use crate::dataset::{Dataset, PersonId};
use std::collections::HashSet;
use tracing::debug;

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub explored: usize,
    /// Nodes added to the frontier, the root included.
    pub enqueued: usize,
}

/// A breadth-first search over one dataset.
///
/// Holds only a shared reference to the dataset; the frontier, explored set
/// and node tree are created per [`run`](Self::run) and dropped when it returns.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathSearch<'a> {
    dataset: &'a Dataset,
}

impl<'a> ShortestPathSearch<'a> {
    /// Creates a search over `dataset`.
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Finds a shortest path from `source` to `target`, returning it with the
    /// run's counters. `None` means the two people are not connected.
    #[must_use]
    pub fn run(&self, source: &PersonId, target: &PersonId) -> (Option<Path>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut frontier = QueueFrontier::new();
        let mut explored: HashSet<PersonId> = HashSet::new();

        frontier.add(Node::root(source.clone()));
        stats.enqueued += 1;

        while !frontier.is_empty() {
            let Ok(node) = frontier.remove() else {
                break;
            };

            if node.state() == target {
                let path = node.path_from_root();
                debug!(
                    source = %source,
                    target = %target,
                    degrees = path.degrees(),
                    explored = stats.explored,
                    enqueued = stats.enqueued,
                    "path found"
                );
                return (Some(path), stats);
            }

            stats.explored += 1;
            explored.insert(node.state().clone());

            for (movie_id, co_star) in self.dataset.neighbors_for_person(node.state()) {
                if !frontier.contains_state(co_star) && !explored.contains(co_star) {
                    frontier.add(Node::child(&node, movie_id.clone(), co_star.clone()));
                    stats.enqueued += 1;
                }
            }
        }

        debug!(
            source = %source,
            target = %target,
            explored = stats.explored,
            enqueued = stats.enqueued,
            "not connected"
        );
        (None, stats)
    }
}

/// Returns the shortest list of `(movie, person)` steps connecting `source` to
/// `target`, or `None` if no chain of co-stars links them.
///
/// Ties between equally short paths are broken by discovery order, which
/// follows ascending movie id and then ascending co-star id.
#[must_use]
pub fn shortest_path(dataset: &Dataset, source: &PersonId, target: &PersonId) -> Option<Path> {
    ShortestPathSearch::new(dataset).run(source, target).0
}
