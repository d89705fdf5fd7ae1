//! Friendship graph representation and algorithms module

pub mod social;
pub mod builder;
pub mod algorithms;
pub mod connectors;

pub use social::{FriendGraph, Person, PersonIndex};
pub use builder::GraphBuilder;

/// Build a graph of non-students from names and friendships
#[cfg(test)]
pub(crate) fn test_graph(people: &[&str], friendships: &[(&str, &str)]) -> FriendGraph {
    let non_students: Vec<(&str, Option<&str>)> = people.iter().map(|&name| (name, None)).collect();
    test_school_graph(&non_students, friendships)
}

/// Build a graph from `(name, school)` pairs and friendships
#[cfg(test)]
pub(crate) fn test_school_graph(
    people: &[(&str, Option<&str>)],
    friendships: &[(&str, &str)],
) -> FriendGraph {
    let mut builder = GraphBuilder::with_capacity(people.len());
    for &(name, school) in people {
        builder.add_person(name, school).unwrap();
    }
    for &(a, b) in friendships {
        builder.add_friendship(a, b).unwrap();
    }
    builder.build()
}
