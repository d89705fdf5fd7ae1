//! Friendship text format loader
//!
//! ```text
//! 4                 <- number of people
//! sam|y|rutgers     <- name|y|school for a student
//! jane|y|rutgers
//! kaitlin|n         <- name|n for everyone else
//! bob|y|cornell
//! 3                 <- optional number of friendships
//! sam|jane          <- one friendship per line
//! jane|kaitlin
//! kaitlin|bob
//! ```
//!
//! Blank lines are ignored. Fields are trimmed but otherwise taken verbatim.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::error::{GraphError, Result};
use crate::graph::{FriendGraph, GraphBuilder};

/// Where the parser is in the input
enum Section {
    PersonCount,
    People { remaining: usize },
    FriendshipCount,
    Friendships,
}

/// Load a friendship graph from a file
pub fn load_friend_data(path: impl AsRef<Path>) -> Result<FriendGraph> {
    let path = path.as_ref();
    log::info!("Reading friendship file: {}", path.display());

    let file = File::open(path)?;
    read_friend_data(BufReader::new(file))
}

/// Parse a friendship graph from text already in memory
pub fn parse_friend_data(input: &str) -> Result<FriendGraph> {
    read_friend_data(input.as_bytes())
}

/// Parse a friendship graph from any buffered reader
pub fn read_friend_data<R: BufRead>(reader: R) -> Result<FriendGraph> {
    let mut builder = GraphBuilder::with_capacity(0);
    let mut section = Section::PersonCount;
    let mut expected_friendships = None;
    let mut friendships = 0usize;
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        last_line = line_no;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        section = match section {
            Section::PersonCount => {
                let count = parse_count(line, line_no)?;
                builder = GraphBuilder::with_capacity(count);
                if count == 0 {
                    Section::FriendshipCount
                } else {
                    Section::People { remaining: count }
                }
            }
            Section::People { remaining } => {
                let (name, school) = parse_person(line, line_no)?;
                builder
                    .add_person(name, school)
                    .map_err(|e| GraphError::parse(line_no, e.to_string()))?;
                if remaining == 1 {
                    Section::FriendshipCount
                } else {
                    Section::People { remaining: remaining - 1 }
                }
            }
            Section::FriendshipCount if !line.contains('|') => {
                expected_friendships = Some(parse_count(line, line_no)?);
                Section::Friendships
            }
            Section::FriendshipCount | Section::Friendships => {
                let (a, b) = parse_friendship(line, line_no)?;
                builder
                    .add_friendship(a, b)
                    .map_err(|e| GraphError::parse(line_no, e.to_string()))?;
                friendships += 1;
                Section::Friendships
            }
        };
    }

    match section {
        Section::PersonCount => {
            return Err(GraphError::parse(last_line + 1, "missing person count"));
        }
        Section::People { remaining } => {
            return Err(GraphError::parse(
                last_line + 1,
                format!("input ended with {} people still expected", remaining),
            ));
        }
        Section::FriendshipCount | Section::Friendships => {}
    }

    if let Some(expected) = expected_friendships {
        if expected != friendships {
            log::warn!(
                "Friendship count line says {} but {} friendships were listed",
                expected,
                friendships
            );
        }
    }

    let graph = builder.build();
    log::info!(
        "Loaded graph with {} people and {} friendships",
        graph.len(),
        graph.friendship_count()
    );

    Ok(graph)
}

fn parse_count(line: &str, line_no: usize) -> Result<usize> {
    line.parse()
        .map_err(|_| GraphError::parse(line_no, format!("expected a count, found {:?}", line)))
}

/// `name|y|school` or `name|n`
fn parse_person(line: &str, line_no: usize) -> Result<(&str, Option<&str>)> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    match fields.as_slice() {
        [name, ..] if name.is_empty() => Err(GraphError::parse(line_no, "empty name")),
        [name, "y", school] if !school.is_empty() => Ok((*name, Some(*school))),
        [_, "y", ..] => Err(GraphError::parse(line_no, "student is missing a school")),
        [name, "n"] => Ok((*name, None)),
        _ => Err(GraphError::parse(
            line_no,
            format!("expected name|y|school or name|n, found {:?}", line),
        )),
    }
}

/// `name|name`
fn parse_friendship(line: &str, line_no: usize) -> Result<(&str, &str)> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    match fields.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok((*a, *b)),
        _ => Err(GraphError::parse(
            line_no,
            format!("expected name|name, found {:?}", line),
        )),
    }
}
