//! Search results.

use crate::dataset::{MovieId, PersonId};

/// One edge of a path: the movie shared with the previous person, and the
/// person reached through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathStep {
    /// Movie both people starred in.
    pub movie: MovieId,
    /// Person reached by this step.
    pub person: PersonId,
}

/// Shortest chain of co-stars, excluding the source person.
///
/// An empty path means source and target are the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Wraps a list of steps ordered from source to target.
    #[must_use]
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Degrees of separation (number of edges).
    #[must_use]
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    /// True when the path has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps in source-to-target order.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// The last person on the path, if any.
    #[must_use]
    pub fn target(&self) -> Option<&PersonId> {
        self.steps.last().map(|step| &step.person)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Path> for Vec<(MovieId, PersonId)> {
    fn from(path: Path) -> Self {
        path.steps
            .into_iter()
            .map(|step| (step.movie, step.person))
            .collect()
    }
}
