//! Search tree nodes.

use super::path::{Path, PathStep};
use crate::dataset::{MovieId, PersonId};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A node in the BFS tree.
///
/// Links a person (the state) to the node it was discovered from and the movie
/// that connects them. Nodes are shared through [`Rc`] so children can point at
/// their parent while the parent also sits in the frontier.
///
/// Equality and hashing look at `state` only: two nodes for the same person are
/// the same node no matter how they were reached.
#[derive(Debug)]
pub struct Node {
    state: PersonId,
    parent: Option<Rc<Node>>,
    action: Option<MovieId>,
}

impl Node {
    /// Creates the root node of a search.
    #[must_use]
    pub fn root(state: PersonId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
        })
    }

    /// Creates a node reached from `parent` through `action`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, action: MovieId, state: PersonId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
        })
    }

    /// The person this node stands for.
    #[must_use]
    pub fn state(&self) -> &PersonId {
        &self.state
    }

    /// The node this one was discovered from.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// The movie linking this node to its parent.
    #[must_use]
    pub fn action(&self) -> Option<&MovieId> {
        self.action.as_ref()
    }

    /// True for the search root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Walks parent links back to the root and returns the steps in
    /// root-to-node order. The root itself contributes no step.
    #[must_use]
    pub fn path_from_root(&self) -> Path {
        let mut steps = Vec::new();
        let mut node = self;
        while let (Some(parent), Some(action)) = (node.parent.as_deref(), node.action.as_ref()) {
            steps.push(PathStep {
                movie: action.clone(),
                person: node.state.clone(),
            });
            node = parent;
        }
        steps.reverse();
        Path::new(steps)
    }
}

// Unlinks the parent chain iteratively; the default drop recurses once per
// ancestor.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = match Rc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
