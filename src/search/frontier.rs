//! FIFO frontier for breadth-first search.

use super::node::Node;
use crate::dataset::PersonId;
use crate::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Queue of discovered but unexplored nodes.
///
/// Nodes leave in the order they arrived, which is what makes the search
/// breadth-first. A count of queued nodes per state is kept alongside the
/// queue so [`contains_state`](Self::contains_state) does not scan.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<Rc<Node>>,
    pending: HashMap<PersonId, usize>,
}

impl QueueFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the back of the queue. Duplicate states are allowed.
    pub fn add(&mut self, node: Rc<Node>) {
        *self.pending.entry(node.state().clone()).or_insert(0) += 1;
        self.queue.push_back(node);
    }

    /// True iff some queued node has this state.
    #[must_use]
    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.pending.contains_key(state)
    }

    /// True iff no nodes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Removes and returns the node at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFrontier`] if the frontier is empty.
    pub fn remove(&mut self) -> Result<Rc<Node>> {
        let node = self.queue.pop_front().ok_or(Error::EmptyFrontier)?;
        if let Some(count) = self.pending.get_mut(node.state()) {
            *count -= 1;
            if *count == 0 {
                self.pending.remove(node.state());
            }
        }
        Ok(node)
    }
}
