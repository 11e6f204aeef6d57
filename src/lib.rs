//! # degrees
//!
//! Degrees of separation between two people in a movie dataset.
//!
//! A dataset of people, movies and cast records is loaded from three CSV
//! tables into an immutable [`Dataset`]. Two people are connected when they
//! starred in the same movie, and [`shortest_path`] runs a breadth-first
//! search over that implicit graph to find the shortest chain of co-stars.
//!
//! ```rust,ignore
//! use degrees::{Dataset, DatasetLayout, shortest_path};
//!
//! let dataset = Dataset::load("small", &DatasetLayout::default())?;
//! let source = dataset.person_id_for_name("Kevin Bacon").unwrap();
//! let target = dataset.person_id_for_name("Tom Hanks").unwrap();
//! if let Some(path) = shortest_path(&dataset, source, target) {
//!     println!("{} degrees of separation.", path.degrees());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod dataset;
pub mod observability;
pub mod report;
pub mod search;

pub use config::DatasetLayout;
pub use dataset::{Dataset, DatasetBuilder, Movie, MovieId, Person, PersonId};
pub use search::{
    shortest_path, Node, Path, PathStep, QueueFrontier, SearchStats, ShortestPathSearch,
};

/// Error type for degrees operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `Dataset` | A dataset file is missing, unreadable or has a malformed row |
/// | `UnknownPerson` / `UnknownMovie` | A star record points at an id that was never loaded |
/// | `PersonNotFound` | A user supplied name has no match in the name index |
/// | `InvalidInput` | Input ended before both names were read |
/// | `Io` | Reading the prompt answers or writing the report failed |
/// | `EmptyFrontier` | `remove` was called on an empty frontier |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A dataset table could not be read or parsed.
    #[error("failed to read dataset file '{}'", path.display())]
    Dataset {
        /// The file being read.
        path: PathBuf,
        /// The underlying CSV (or I/O) error.
        #[source]
        source: csv::Error,
    },

    /// A star record references a person id that is not in the people table.
    #[error("star record references unknown person '{person_id}'")]
    UnknownPerson {
        /// The dangling id.
        person_id: PersonId,
    },

    /// A star record references a movie id that is not in the movies table.
    #[error("star record references unknown movie '{movie_id}'")]
    UnknownMovie {
        /// The dangling id.
        movie_id: MovieId,
    },

    /// No person with the given name exists.
    #[error("Person not found.")]
    PersonNotFound {
        /// The name as the user typed it.
        name: String,
    },

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Console I/O failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),

    /// The frontier was asked for a node while empty.
    #[error("frontier is empty")]
    EmptyFrontier,
}

/// Result type alias for degrees operations.
pub type Result<T> = std::result::Result<T, Error>;
