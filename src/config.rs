//! Dataset layout configuration.

use std::path::{Path, PathBuf};

/// File names of the three tables inside a dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    /// People table: `id,name,birth`.
    pub people: String,
    /// Movies table: `id,title,year`.
    pub movies: String,
    /// Cast table: `person_id,movie_id`.
    pub stars: String,
}

impl DatasetLayout {
    /// Overrides the people table file name.
    #[must_use]
    pub fn with_people(mut self, file_name: impl Into<String>) -> Self {
        self.people = file_name.into();
        self
    }

    /// Overrides the movies table file name.
    #[must_use]
    pub fn with_movies(mut self, file_name: impl Into<String>) -> Self {
        self.movies = file_name.into();
        self
    }

    /// Overrides the stars table file name.
    #[must_use]
    pub fn with_stars(mut self, file_name: impl Into<String>) -> Self {
        self.stars = file_name.into();
        self
    }

    pub(crate) fn people_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.people)
    }

    pub(crate) fn movies_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.movies)
    }

    pub(crate) fn stars_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.stars)
    }
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            people: "people.csv".to_string(),
            movies: "movies.csv".to_string(),
            stars: "stars.csv".to_string(),
        }
    }
}
