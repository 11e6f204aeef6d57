//! End-to-end tests: CSV files on disk, names on stdin, report on stdout.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use clap::Parser;
use degrees::cli::{run, Cli};
use degrees::{Dataset, DatasetLayout, Error, PersonId};
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

const PEOPLE: &str = "\
id,name,birth
1,Alice,1970
2,Bob,
3,Carol,1985
4,Dave,1990
";

const MOVIES: &str = "\
id,title,year
10,X,2001
20,Y,2005
30,\"Z, the Sequel\",2010
";

const STARS: &str = "\
person_id,movie_id
1,10
2,10
2,20
3,20
4,30
";

/// Writes the three tables into a fresh directory.
fn create_dataset() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("people.csv"), PEOPLE).expect("write people");
    fs::write(dir.path().join("movies.csv"), MOVIES).expect("write movies");
    fs::write(dir.path().join("stars.csv"), STARS).expect("write stars");
    dir
}

/// Runs the CLI with `stdin` as input and returns stdout.
fn run_cli(dir: &TempDir, extra_args: &[&str], stdin: &str) -> Result<String, Error> {
    let mut args = vec!["degrees", dir.path().to_str().unwrap()];
    args.extend_from_slice(extra_args);
    let cli = Cli::try_parse_from(args).expect("valid arguments");

    let mut input = stdin.as_bytes();
    let mut output = Vec::new();
    run(&cli, &mut input, &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_two_degrees_via_prompts() {
    let dir = create_dataset();
    let output = run_cli(&dir, &[], "Alice\nCarol\n").expect("run");
    assert_eq!(
        output,
        "Loading data...\n\
         Data loaded.\n\
         Name: Name: 2 degrees of separation.\n\
         1: Alice and Bob starred in X\n\
         2: Bob and Carol starred in Y\n"
    );
}

#[test]
fn test_names_from_arguments_skip_prompts() {
    let dir = create_dataset();
    let output = run_cli(&dir, &["--source", "Carol", "--target", "Alice"], "").expect("run");
    assert!(!output.contains("Name: "));
    assert!(output.ends_with(
        "2 degrees of separation.\n\
         1: Carol and Bob starred in Y\n\
         2: Bob and Alice starred in X\n"
    ));
}

#[test]
fn test_not_connected() {
    let dir = create_dataset();
    let output = run_cli(&dir, &[], "Alice\nDave\n").expect("run");
    assert!(output.ends_with("Not connected.\n"));
}

#[test]
fn test_same_person() {
    let dir = create_dataset();
    let output = run_cli(&dir, &["-s", "Bob", "-t", "bob"], "").expect("run");
    assert!(output.ends_with("0 degrees of separation.\n"));
}

#[test_case("alice", "CAROL" ; "lowercase and uppercase")]
#[test_case("  Alice  ", "Carol" ; "surrounding whitespace")]
#[test_case("aLiCe", "cArOl" ; "mixed case")]
fn test_name_lookup_ignores_case(source: &str, target: &str) {
    let dir = create_dataset();
    let output = run_cli(&dir, &[], &format!("{source}\n{target}\n")).expect("run");
    assert!(output.contains("2 degrees of separation."));
}

#[test_case("Eve\nAlice\n" ; "unknown source")]
#[test_case("Alice\nEve\n" ; "unknown target")]
fn test_unknown_person(stdin: &str) {
    let dir = create_dataset();
    let err = run_cli(&dir, &[], stdin).expect_err("unknown name");
    assert!(matches!(err, Error::PersonNotFound { ref name } if name == "Eve"));
    assert_eq!(err.to_string(), "Person not found.");
}

#[test]
fn test_input_closed_before_second_name() {
    let dir = create_dataset();
    let err = run_cli(&dir, &[], "Alice\n").expect_err("missing name");
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_directory_without_tables() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = run_cli(&dir, &[], "Alice\nBob\n").expect_err("no tables");
    assert!(matches!(err, Error::Dataset { .. }));
}

#[test]
fn test_loaded_dataset_can_be_shared_across_threads() {
    let dir = create_dataset();
    let dataset = Dataset::load(dir.path(), &DatasetLayout::default()).expect("load");

    std::thread::scope(|scope| {
        let handles: Vec<_> = [("1", "3"), ("3", "1"), ("1", "4")]
            .into_iter()
            .map(|(source, target)| {
                let dataset = &dataset;
                scope.spawn(move || {
                    degrees::shortest_path(dataset, &PersonId::from(source), &PersonId::from(target))
                        .map(|path| path.degrees())
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Some(2), Some(2), None]);
    });
}
