//! Clique statistics and metrics

use std::collections::HashSet;
use crate::cluster::Clique;
use crate::cluster::detection::clique_indices;
use crate::graph::{FriendGraph, PersonIndex};

/// Calculate density (actual friendships / potential friendships)
pub fn calculate_density(graph: &FriendGraph, members: &[PersonIndex]) -> f32 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton cliques have density 1
    }

    // Undirected: each friendship is seen from both ends
    let potential_edges = n * (n - 1);
    let member_set: HashSet<PersonIndex> = members.iter().copied().collect();

    let actual_edges: usize = members
        .iter()
        .map(|&idx| graph.friends(idx).iter().filter(|f| member_set.contains(*f)).count())
        .sum();

    actual_edges as f32 / potential_edges as f32
}

/// Member with the most friends inside the group; earliest member wins ties
pub fn best_connected(graph: &FriendGraph, members: &[PersonIndex]) -> Option<PersonIndex> {
    let member_set: HashSet<PersonIndex> = members.iter().copied().collect();

    members
        .iter()
        .map(|&idx| {
            let degree = graph.friends(idx).iter().filter(|f| member_set.contains(*f)).count();
            (idx, degree)
        })
        .fold(None, |best: Option<(PersonIndex, usize)>, (idx, degree)| match best {
            Some((_, best_degree)) if best_degree >= degree => best,
            _ => Some((idx, degree)),
        })
        .map(|(idx, _)| idx)
}

/// Enumerate the cliques at `school` together with their metrics
pub fn clique_stats(graph: &FriendGraph, school: &str) -> Vec<Clique> {
    clique_indices(graph, school)
        .into_iter()
        .enumerate()
        .filter_map(|(id, members)| {
            let best = best_connected(graph, &members)?;
            Some(Clique {
                id: id as u32,
                school: school.to_string(),
                size: members.len(),
                density: calculate_density(graph, &members),
                best_connected: graph.name(best).to_string(),
                members: graph.names_of(&members),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_school_graph;

    fn school_graph() -> FriendGraph {
        test_school_graph(
            &[
                ("a", Some("nyu")),
                ("b", Some("nyu")),
                ("c", Some("nyu")),
                ("d", Some("nyu")),
                ("e", Some("nyu")),
            ],
            &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")],
        )
    }

    #[test]
    fn test_density() {
        let graph = school_graph();
        assert_eq!(calculate_density(&graph, &[0, 1, 2]), 1.0);
        assert!((calculate_density(&graph, &[0, 1, 2, 3]) - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(calculate_density(&graph, &[4]), 1.0);
    }

    #[test]
    fn test_best_connected() {
        let graph = school_graph();
        assert_eq!(best_connected(&graph, &[0, 1, 2, 3]), Some(2));
        // Tie between a and b: earliest wins
        assert_eq!(best_connected(&graph, &[0, 1]), Some(0));
        assert_eq!(best_connected(&graph, &[]), None);
    }

    #[test]
    fn test_clique_stats() {
        let graph = school_graph();
        let stats = clique_stats(&graph, "nyu");

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].id, 0);
        assert_eq!(stats[0].size, 4);
        assert_eq!(stats[0].members, vec!["a", "b", "c", "d"]);
        assert_eq!(stats[0].best_connected, "c");
        assert!((stats[0].density - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(stats[1].members, vec!["e"]);
        assert_eq!(stats[1].school, "nyu");
    }

    #[test]
    fn test_clique_stats_unknown_school() {
        assert!(clique_stats(&school_graph(), "mit").is_empty());
    }
}
