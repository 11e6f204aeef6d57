//! Console output for search results.

use crate::dataset::{Dataset, PersonId};
use crate::search::Path;
use std::io::{self, Write};

/// Writes the result of a search.
///
/// `None` prints `Not connected.`. Otherwise a summary line with the degree
/// count is followed by one numbered line per step:
///
/// ```text
/// 2 degrees of separation.
/// 1: Alice and Bob starred in X
/// 2: Bob and Carol starred in Y
/// ```
///
/// Ids missing from the dataset are printed as-is.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    source: &PersonId,
    path: Option<&Path>,
) -> io::Result<()> {
    let Some(path) = path else {
        return writeln!(out, "Not connected.");
    };

    writeln!(out, "{} degrees of separation.", path.degrees())?;

    let mut previous = source;
    for (i, step) in path.steps().iter().enumerate() {
        let movie = dataset
            .movie(step.movie.as_str())
            .map_or(step.movie.as_str(), |m| m.title.as_str());
        writeln!(
            out,
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(dataset, previous),
            person_name(dataset, &step.person),
            movie
        )?;
        previous = &step.person;
    }
    Ok(())
}

fn person_name<'a>(dataset: &'a Dataset, id: &'a PersonId) -> &'a str {
    dataset.person(id.as_str()).map_or(id.as_str(), |p| p.name.as_str())
}
