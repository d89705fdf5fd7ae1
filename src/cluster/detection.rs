//! Clique detection

use std::collections::BTreeMap;
use rayon::prelude::*;
use crate::graph::{FriendGraph, PersonIndex};

/// Depth-first walk over same-school friendships from `start`, appending
/// each newly reached student to `group` in pre-order.
///
/// A friend qualifies when they attend the same school as the person being
/// expanded, which is the starting school carried transitively.
fn collect_group(
    graph: &FriendGraph,
    start: PersonIndex,
    visited: &mut [bool],
    group: &mut Vec<PersonIndex>,
) {
    visited[start as usize] = true;
    group.push(start);

    // (person, position of the next friend to examine)
    let mut stack = vec![(start, 0usize)];

    while let Some((curr, cursor)) = stack.last_mut() {
        let school = graph.person(*curr).school.as_deref();
        let friends = graph.friends(*curr);

        let next = friends[*cursor..].iter().position(|&friend| {
            let person = graph.person(friend);
            !visited[friend as usize] && person.is_student() && person.school.as_deref() == school
        });

        match next {
            Some(offset) => {
                let friend = friends[*cursor + offset];
                *cursor += offset + 1;
                visited[friend as usize] = true;
                group.push(friend);
                stack.push((friend, 0));
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Index groups of every clique at `school`, in order of each group's
/// lowest-indexed member.
pub fn clique_indices(graph: &FriendGraph, school: &str) -> Vec<Vec<PersonIndex>> {
    let mut visited = vec![false; graph.len()];
    let mut groups = Vec::new();

    for idx in 0..graph.len() as PersonIndex {
        if !visited[idx as usize] && graph.person(idx).attends(school) {
            let mut group = Vec::new();
            collect_group(graph, idx, &mut visited, &mut group);
            groups.push(group);
        }
    }

    groups
}

/// Find all cliques of students at `school`.
///
/// Returns `None` if nobody in the graph attends `school`.
pub fn cliques(graph: &FriendGraph, school: &str) -> Option<Vec<Vec<String>>> {
    log::debug!("Searching for cliques at {}", school);

    let groups = clique_indices(graph, school);
    log::debug!("Found {} cliques at {}", groups.len(), school);

    if groups.is_empty() {
        return None;
    }

    Some(groups.iter().map(|group| graph.names_of(group)).collect())
}

/// Cliques for every school in the graph, keyed by school.
///
/// Schools are processed in parallel; each query only reads the graph.
pub fn school_cliques(graph: &FriendGraph) -> BTreeMap<String, Vec<Vec<String>>> {
    let schools = graph.schools();
    log::info!("Finding cliques for {} schools", schools.len());

    schools
        .into_par_iter()
        .filter_map(|school| cliques(graph, school).map(|groups| (school.to_string(), groups)))
        .collect()
}
