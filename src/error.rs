//! Error types for graph construction, loading and queries

use thiserror::Error;

/// Errors raised while building, loading or querying a friendship graph.
///
/// Queries that simply have no answer (no chain, no clique, no connector)
/// are not errors; they return `None`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A person with this name is already in the graph.
    #[error("person already exists: {0}")]
    DuplicatePerson(String),

    /// The name is not a key of the graph directory.
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    /// Friendship edges must join two different people.
    #[error("person cannot befriend themselves: {0}")]
    SelfFriendship(String),

    /// More people than a `PersonIndex` can address.
    #[error("graph is full: cannot add person {0}")]
    TooManyPeople(String),

    /// Malformed friendship text input.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// A specialized Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
