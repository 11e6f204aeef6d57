//! Command-line surface.
//!
//! [`Cli`] holds the parsed arguments; [`run`] performs one query against a
//! dataset directory, reading any missing names from `input` and writing the
//! prompts and the report to `output`.

use crate::config::DatasetLayout;
use crate::dataset::{Dataset, PersonId};
use crate::observability::LogFormat;
use crate::report::write_report;
use crate::search::ShortestPathSearch;
use crate::{Error, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Degrees of separation between two people in a movie dataset.
#[derive(Debug, Parser)]
#[command(name = "degrees")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing people.csv, movies.csv and stars.csv.
    pub directory: PathBuf,

    /// Name of the first person (prompted for when omitted).
    #[arg(short, long)]
    pub source: Option<String>,

    /// Name of the second person (prompted for when omitted).
    #[arg(short, long)]
    pub target: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format: pretty or json.
    #[arg(long, env = "DEGREES_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Loads the dataset, resolves both names and prints the shortest path.
///
/// # Errors
///
/// Returns [`Error::Dataset`] and friends when loading fails,
/// [`Error::PersonNotFound`] for an unknown name, [`Error::InvalidInput`] if
/// `input` ends before a name is read, and [`Error::Io`] on console failures.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "Loading data...")?;
    let dataset = Dataset::load(&cli.directory, &DatasetLayout::default())?;
    writeln!(output, "Data loaded.")?;

    let source = resolve(&dataset, cli.source.as_deref(), input, output)?;
    let target = resolve(&dataset, cli.target.as_deref(), input, output)?;

    let (path, stats) = ShortestPathSearch::new(&dataset).run(&source, &target);
    info!(
        source = %source,
        target = %target,
        connected = path.is_some(),
        explored = stats.explored,
        "search finished"
    );

    write_report(output, &dataset, &source, path.as_ref())?;
    Ok(())
}

/// Uses the given name or prompts for one, then looks it up.
fn resolve<R: BufRead, W: Write>(
    dataset: &Dataset,
    name: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<PersonId> {
    let name = match name {
        Some(name) => name.to_string(),
        None => prompt_name(input, output)?,
    };

    match dataset.person_id_for_name(&name) {
        Some(id) => Ok(id.clone()),
        None => {
            debug!(name = %name, "person not found");
            Err(Error::PersonNotFound { name })
        },
    }
}

fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Name: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput("input ended before a name was entered".to_string()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["degrees", "small", "--source", "Kevin Bacon", "-v"])
            .expect("valid arguments");
        assert_eq!(cli.directory, PathBuf::from("small"));
        assert_eq!(cli.source.as_deref(), Some("Kevin Bacon"));
        assert!(cli.target.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Cli::try_parse_from(["degrees"]).is_err());
        assert!(Cli::try_parse_from(["degrees", "a", "b"]).is_err()); // exactly one directory
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = "Tom Hanks\r\nKevin Bacon\n".as_bytes();
        let mut output = Vec::new();
        assert_eq!(prompt_name(&mut input, &mut output).expect("name"), "Tom Hanks");
        assert_eq!(prompt_name(&mut input, &mut output).expect("name"), "Kevin Bacon");
        assert_eq!(output, b"Name: Name: ");
        assert!(matches!(
            prompt_name(&mut input, &mut output),
            Err(Error::InvalidInput(_))
        ));
    }
}
