//! CSV loading for [`Dataset`].

use super::{Dataset, MovieId, PersonId};
use crate::config::DatasetLayout;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: String,
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: MovieId,
    title: String,
    year: u16,
}

#[derive(Debug, Deserialize)]
struct StarRecord {
    person_id: PersonId,
    movie_id: MovieId,
}

/// Reads every row of a CSV table with a header line.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let dataset_error = |source| Error::Dataset {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(dataset_error)?;

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(dataset_error)?;

    debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}

impl Dataset {
    /// Loads the people, movies and stars tables from `directory`.
    ///
    /// People and movies are loaded first, then every star record is applied
    /// to both sides of the relation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] when a file is missing or a row is malformed,
    /// and [`Error::UnknownPerson`] / [`Error::UnknownMovie`] when a star
    /// record points at an id that is not in the other tables.
    pub fn load(directory: impl AsRef<Path>, layout: &DatasetLayout) -> Result<Self> {
        let directory = directory.as_ref();
        let mut builder = Self::builder();

        let people: Vec<PersonRecord> = read_table(&layout.people_path(directory))?;
        let movies: Vec<MovieRecord> = read_table(&layout.movies_path(directory))?;
        let stars: Vec<StarRecord> = read_table(&layout.stars_path(directory))?;

        for PersonRecord { id, name, birth } in people {
            builder = builder.with_person(id, name, birth);
        }
        for MovieRecord { id, title, year } in movies {
            builder = builder.with_movie(id, title, year);
        }
        for StarRecord { person_id, movie_id } in stars {
            builder = builder.with_star(person_id, movie_id)?;
        }

        let dataset = builder.build();
        info!(
            directory = %directory.display(),
            people = dataset.people_count(),
            movies = dataset.movie_count(),
            stars = dataset.star_count(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_dataset(people: &str, movies: &str, stars: &str) -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("people.csv"), people).expect("write people");
        fs::write(dir.path().join("movies.csv"), movies).expect("write movies");
        fs::write(dir.path().join("stars.csv"), stars).expect("write stars");
        dir
    }

    #[test]
    fn test_load_small_dataset() {
        let dir = write_dataset(
            "id,name,birth\n102,Kevin Bacon,1958\n129,Tom Cruise,1962\n163,Dustin Hoffman,\n",
            "id,title,year\n104257,\"A Few Good Men\",1992\n95953,Rain Man,1988\n",
            "person_id,movie_id\n102,104257\n129,104257\n129,95953\n163,95953\n",
        );

        let dataset = Dataset::load(dir.path(), &DatasetLayout::default()).expect("load");
        assert_eq!(dataset.people_count(), 3);
        assert_eq!(dataset.movie_count(), 2);
        assert_eq!(dataset.star_count(), 4);

        let hoffman = dataset.person("163").expect("hoffman");
        assert_eq!(hoffman.birth, None); // empty birth column
        assert_eq!(dataset.person("102").and_then(|p| p.birth), Some(1958));
        assert_eq!(dataset.movie("104257").map(|m| m.title.as_str()), Some("A Few Good Men"));

        let mut names: Vec<&str> = dataset.people().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Dustin Hoffman", "Kevin Bacon", "Tom Cruise"]);
        let mut years: Vec<u16> = dataset.movies().map(|m| m.year).collect();
        years.sort_unstable();
        assert_eq!(years, vec![1988, 1992]);
    }

    #[test]
    fn test_quoted_titles_keep_commas() {
        let dir = write_dataset(
            "id,name,birth\n1,Alice,\n",
            "id,title,year\n10,\"Crouching Tiger, Hidden Dragon\",2000\n",
            "person_id,movie_id\n1,10\n",
        );
        let dataset = Dataset::load(dir.path(), &DatasetLayout::default()).expect("load");
        assert_eq!(
            dataset.movie("10").map(|m| m.title.as_str()),
            Some("Crouching Tiger, Hidden Dragon")
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().expect("temp dir");
        let err = Dataset::load(dir.path(), &DatasetLayout::default()).expect_err("missing");

        // the csv cause is reachable through `source()`, not repeated in the message
        let cause = std::error::Error::source(&err).expect("csv cause").to_string();
        assert!(!err.to_string().contains(&cause));
        assert!(err.to_string().ends_with("people.csv'"));
        match err {
            Error::Dataset { path, .. } => assert!(path.ends_with("people.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_year_is_rejected() {
        let dir = write_dataset(
            "id,name,birth\n1,Alice,\n",
            "id,title,year\n10,X,soon\n",
            "person_id,movie_id\n",
        );
        let err = Dataset::load(dir.path(), &DatasetLayout::default()).expect_err("bad year");
        assert!(matches!(err, Error::Dataset { ref path, .. } if path.ends_with("movies.csv")));
    }

    #[test]
    fn test_dangling_star_is_rejected() {
        let dir = write_dataset(
            "id,name,birth\n1,Alice,\n",
            "id,title,year\n10,X,2000\n",
            "person_id,movie_id\n1,10\n2,10\n",
        );
        let err = Dataset::load(dir.path(), &DatasetLayout::default()).expect_err("dangling");
        assert!(matches!(err, Error::UnknownPerson { .. }));
    }

    #[test]
    fn test_custom_layout() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("actors.csv"), "id,name,birth\n1,Alice,\n").expect("write");
        fs::write(dir.path().join("films.csv"), "id,title,year\n10,X,2000\n").expect("write");
        fs::write(dir.path().join("cast.csv"), "person_id,movie_id\n1,10\n").expect("write");

        let layout = DatasetLayout::default()
            .with_people("actors.csv")
            .with_movies("films.csv")
            .with_stars("cast.csv");
        let dataset = Dataset::load(dir.path(), &layout).expect("load");
        assert_eq!(dataset.star_count(), 1);
    }
}
