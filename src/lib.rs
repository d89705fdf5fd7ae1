//! Core library functions for the friend graph analyzer
//!
//! Three read-only queries over an undirected friendship graph: shortest
//! chains between people, same-school cliques, and connectors.

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod report;

pub use error::{GraphError, Result};
pub use graph::{FriendGraph, GraphBuilder, Person, PersonIndex};
pub use graph::algorithms::shortest_chain;
pub use graph::connectors::connectors;
pub use cluster::Clique;
pub use cluster::detection::{cliques, school_cliques};
