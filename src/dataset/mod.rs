//! In-memory movie dataset.
//!
//! People and movies are stored in hash tables keyed by id. The cast relation
//! is kept on both sides (a person's movies, a movie's stars) so neighbors can
//! be expanded from either end without a scan. Both sides use ordered sets,
//! which fixes the order in which co-stars are enumerated: ascending movie id,
//! then ascending person id.

mod loader;

use crate::{Error, Result};
use serde::Deserialize;
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::warn;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from any string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Identifier of a person in the people table.
    PersonId
}

string_id! {
    /// Identifier of a movie in the movies table.
    MovieId
}

/// A person and the movies they appear in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Person id.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Birth year, when known.
    pub birth: Option<u16>,
    /// Movies this person starred in.
    pub movies: BTreeSet<MovieId>,
}

/// A movie and the people who starred in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Movie id.
    pub id: MovieId,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: u16,
    /// People who starred in this movie.
    pub stars: BTreeSet<PersonId>,
}

/// Immutable, fully loaded movie dataset.
///
/// Built once through [`DatasetBuilder`] (or [`Dataset::load`]) and only read
/// afterwards, so it can be shared by reference across any number of searches.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, PersonId>,
}

impl Dataset {
    /// Starts building a dataset by hand.
    #[must_use]
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Looks up a person by id.
    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Looks up a movie by id.
    #[must_use]
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Resolves a name to a person id, ignoring case.
    #[must_use]
    pub fn person_id_for_name(&self, name: &str) -> Option<&PersonId> {
        self.names.get(&name.trim().to_lowercase())
    }

    /// Returns `(movie, co-star)` pairs for everyone who starred with `person`.
    ///
    /// Pairs come out ascending by movie id, then by co-star id. A person who
    /// shares several movies with `person` appears once per shared movie. The
    /// person is never their own neighbor; an unknown id has no neighbors.
    pub fn neighbors_for_person<'a>(
        &'a self,
        person: &'a PersonId,
    ) -> impl Iterator<Item = (&'a MovieId, &'a PersonId)> + 'a {
        self.people
            .get(person)
            .into_iter()
            .flat_map(|p| p.movies.iter())
            .filter_map(move |movie_id| self.movies.get(movie_id))
            .flat_map(move |movie| {
                movie
                    .stars
                    .iter()
                    .filter(move |co_star| *co_star != person)
                    .map(move |co_star| (&movie.id, co_star))
            })
    }

    /// Number of people.
    #[must_use]
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Number of movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of (person, movie) cast records.
    #[must_use]
    pub fn star_count(&self) -> usize {
        self.movies.values().map(|m| m.stars.len()).sum()
    }

    /// Iterates over all people, in no particular order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Iterates over all movies, in no particular order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }
}

/// Builder for [`Dataset`].
///
/// People and movies must be added before the star records that join them.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    /// Adds (or replaces) a person.
    ///
    /// If another person already owns the same lowercase name, the name now
    /// resolves to this person.
    #[must_use]
    pub fn with_person(
        mut self,
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth: Option<u16>,
    ) -> Self {
        let id = id.into();
        let name = name.into();
        let key = name.to_lowercase();

        if let Some(previous) = self.dataset.names.get(&key) {
            if *previous != id {
                warn!(name = %name, previous = %previous, id = %id, "duplicate name, later row wins");
            }
        }
        self.dataset.names.insert(key, id.clone());
        self.dataset.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                movies: BTreeSet::new(),
            },
        );
        self
    }

    /// Adds (or replaces) a movie.
    #[must_use]
    pub fn with_movie(mut self, id: impl Into<MovieId>, title: impl Into<String>, year: u16) -> Self {
        let id = id.into();
        self.dataset.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.into(),
                year,
                stars: BTreeSet::new(),
            },
        );
        self
    }

    /// Records that a person starred in a movie, on both sides of the relation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPerson`] or [`Error::UnknownMovie`] when either
    /// id has not been added yet.
    pub fn with_star(
        mut self,
        person_id: impl Into<PersonId>,
        movie_id: impl Into<MovieId>,
    ) -> Result<Self> {
        let person_id = person_id.into();
        let movie_id = movie_id.into();

        let Some(movie) = self.dataset.movies.get_mut(&movie_id) else {
            return Err(Error::UnknownMovie { movie_id });
        };
        let Some(person) = self.dataset.people.get_mut(&person_id) else {
            return Err(Error::UnknownPerson { person_id });
        };
        person.movies.insert(movie_id);
        movie.stars.insert(person_id);
        Ok(self)
    }

    /// Finishes the dataset.
    #[must_use]
    pub fn build(self) -> Dataset {
        self.dataset
    }
}
