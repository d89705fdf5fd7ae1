//! Graph construction module

use crate::error::{GraphError, Result};
use crate::graph::social::{FriendGraph, Person, PersonIndex};
use std::collections::HashMap;

/// Index for the person stored at position `len`, if it fits a `PersonIndex`
fn next_index(len: usize) -> Option<PersonIndex> {
    PersonIndex::try_from(len).ok()
}

/// Builder for incrementally constructing a FriendGraph
pub struct GraphBuilder {
    /// Mapping from names to person indices
    name_to_index: HashMap<String, PersonIndex>,

    /// People in insertion order
    members: Vec<Person>,

    /// Friendships skipped because they were already recorded
    duplicate_friendships: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name_to_index: HashMap::with_capacity(capacity),
            members: Vec::with_capacity(capacity),
            duplicate_friendships: 0,
        }
    }

    /// Add a person; `school` is `Some` for students
    pub fn add_person(&mut self, name: &str, school: Option<&str>) -> Result<PersonIndex> {
        if self.name_to_index.contains_key(name) {
            return Err(GraphError::DuplicatePerson(name.to_string()));
        }

        let idx = next_index(self.members.len())
            .ok_or_else(|| GraphError::TooManyPeople(name.to_string()))?;
        self.name_to_index.insert(name.to_string(), idx);
        self.members.push(Person::new(name, school.map(str::to_string)));

        Ok(idx)
    }

    /// Record a friendship on both people's friend lists
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let a_idx = self.lookup(a)?;
        let b_idx = self.lookup(b)?;

        if a_idx == b_idx {
            return Err(GraphError::SelfFriendship(a.to_string()));
        }

        if self.members[a_idx as usize].friends.contains(&b_idx) {
            log::debug!("Skipping repeated friendship {}|{}", a, b);
            self.duplicate_friendships += 1;
            return Ok(());
        }

        self.members[a_idx as usize].friends.push(b_idx);
        self.members[b_idx as usize].friends.push(a_idx);

        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<PersonIndex> {
        self.name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownPerson(name.to_string()))
    }

    /// Build the friendship graph
    pub fn build(self) -> FriendGraph {
        let graph = FriendGraph {
            name_to_index: self.name_to_index,
            members: self.members,
        };

        log::debug!(
            "Built graph with {} people and {} friendships ({} repeats skipped)",
            graph.len(),
            graph.friendship_count(),
            self.duplicate_friendships
        );

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_person_rejected() {
        let mut builder = GraphBuilder::with_capacity(1);
        builder.add_person("sam", None).unwrap();
        let err = builder.add_person("sam", Some("rutgers")).unwrap_err();
        assert!(matches!(err, GraphError::DuplicatePerson(name) if name == "sam"));
    }

    #[test]
    fn test_unknown_friend_rejected() {
        let mut builder = GraphBuilder::with_capacity(1);
        builder.add_person("sam", None).unwrap();
        let err = builder.add_friendship("sam", "jane").unwrap_err();
        assert!(matches!(err, GraphError::UnknownPerson(name) if name == "jane"));
    }

    #[test]
    fn test_self_friendship_rejected() {
        let mut builder = GraphBuilder::with_capacity(1);
        builder.add_person("sam", None).unwrap();
        assert!(matches!(
            builder.add_friendship("sam", "sam"),
            Err(GraphError::SelfFriendship(_))
        ));
    }

    #[test]
    fn test_repeated_friendship_recorded_once() {
        let mut builder = GraphBuilder::with_capacity(2);
        builder.add_person("a", None).unwrap();
        builder.add_person("b", None).unwrap();
        builder.add_friendship("a", "b").unwrap();
        builder.add_friendship("b", "a").unwrap();
        let graph = builder.build();

        assert_eq!(graph.friends(0), &[1]);
        assert_eq!(graph.friends(1), &[0]);
        assert_eq!(graph.friendship_count(), 1);
    }

    #[test]
    fn test_index_space_is_bounded() {
        assert_eq!(next_index(0), Some(0));
        assert_eq!(next_index(u32::MAX as usize), Some(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(next_index(u32::MAX as usize + 1), None);
    }

    #[test]
    fn test_friend_order_is_insertion_order() {
        let mut builder = GraphBuilder::with_capacity(4);
        for name in ["hub", "x", "y", "z"] {
            builder.add_person(name, None).unwrap();
        }
        builder.add_friendship("hub", "z").unwrap();
        builder.add_friendship("x", "hub").unwrap();
        builder.add_friendship("hub", "y").unwrap();
        let graph = builder.build();

        assert_eq!(graph.friends(0), &[3, 1, 2]);
    }
}
