//! Adjacency-list friendship graph with a name directory

use std::collections::HashMap;
use itertools::Itertools;
use serde::{Serialize, Deserialize};

/// Dense index of a person in `FriendGraph::members`
pub type PersonIndex = u32;

/// A member of the friendship graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique display name, also the key in the graph directory
    pub name: String,

    /// School attended; `Some` exactly when the person is a student
    pub school: Option<String>,

    /// Friends in insertion order
    pub friends: Vec<PersonIndex>,
}

impl Person {
    pub fn new(name: impl Into<String>, school: Option<String>) -> Self {
        Self {
            name: name.into(),
            school,
            friends: Vec::new(),
        }
    }

    pub fn is_student(&self) -> bool {
        self.school.is_some()
    }

    /// True if this person is a student of `school`
    pub fn attends(&self, school: &str) -> bool {
        self.school.as_deref() == Some(school)
    }
}

/// Undirected friendship graph.
///
/// Every friendship appears in both endpoints' `friends` lists, and every
/// stored index is `< members.len()`. `GraphBuilder` maintains both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FriendGraph {
    /// Mapping from person name to index in `members`
    pub(crate) name_to_index: HashMap<String, PersonIndex>,

    /// People, indexed by `PersonIndex`
    pub(crate) members: Vec<Person>,
}

impl FriendGraph {
    /// Look up the index of a person by name
    pub fn index_of(&self, name: &str) -> Option<PersonIndex> {
        self.name_to_index.get(name).copied()
    }

    /// Get a person by index
    pub fn person(&self, index: PersonIndex) -> &Person {
        &self.members[index as usize]
    }

    /// Get a person by name
    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.index_of(name).map(|idx| self.person(idx))
    }

    /// Friends of a person, in insertion order
    pub fn friends(&self, index: PersonIndex) -> &[PersonIndex] {
        &self.members[index as usize].friends
    }

    /// Display name of a person
    pub fn name(&self, index: PersonIndex) -> &str {
        &self.members[index as usize].name
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of undirected friendships
    pub fn friendship_count(&self) -> usize {
        self.members.iter().map(|p| p.friends.len()).sum::<usize>() / 2
    }

    pub fn student_count(&self) -> usize {
        self.members.iter().filter(|p| p.is_student()).count()
    }

    /// Distinct schools, sorted
    pub fn schools(&self) -> Vec<&str> {
        self.members
            .iter()
            .filter_map(|p| p.school.as_deref())
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Resolve a list of indices to owned names
    pub(crate) fn names_of(&self, indices: &[PersonIndex]) -> Vec<String> {
        indices.iter().map(|&idx| self.name(idx).to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphBuilder;

    #[test]
    fn test_directory_lookup() {
        let mut builder = GraphBuilder::with_capacity(2);
        builder.add_person("sam", Some("rutgers")).unwrap();
        builder.add_person("kaitlin", None).unwrap();
        builder.add_friendship("sam", "kaitlin").unwrap();
        let graph = builder.build();

        assert_eq!(graph.index_of("sam"), Some(0));
        assert_eq!(graph.index_of("kaitlin"), Some(1));
        assert_eq!(graph.index_of("Sam"), None);
        assert_eq!(graph.person_by_name("kaitlin").map(|p| p.is_student()), Some(false));
        assert!(graph.person(0).attends("rutgers"));
        assert_eq!(graph.friends(0), &[1]);
        assert_eq!(graph.friends(1), &[0]);
    }

    #[test]
    fn test_counts_and_schools() {
        let mut builder = GraphBuilder::with_capacity(4);
        builder.add_person("a", Some("penn state")).unwrap();
        builder.add_person("b", Some("cornell")).unwrap();
        builder.add_person("c", Some("cornell")).unwrap();
        builder.add_person("d", None).unwrap();
        builder.add_friendship("a", "b").unwrap();
        builder.add_friendship("b", "c").unwrap();
        let graph = builder.build();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.friendship_count(), 2);
        assert_eq!(graph.student_count(), 3);
        assert_eq!(graph.schools(), vec!["cornell", "penn state"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::with_capacity(0).build();
        assert!(graph.is_empty());
        assert_eq!(graph.friendship_count(), 0);
        assert!(graph.schools().is_empty());
    }
}
