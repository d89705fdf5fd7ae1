//! Shortest friendship chains

use std::collections::VecDeque;
use crate::error::{GraphError, Result};
use crate::graph::{FriendGraph, PersonIndex};

/// Find the shortest chain of people from `from` to `to`.
///
/// The chain starts with `from`, ends with `to`, and each consecutive pair of
/// names is a friendship. Returns `Ok(None)` when no chain exists and
/// `Err(GraphError::UnknownPerson)` when either name is not in the graph.
///
/// Each queue entry carries the whole chain so far. A person is marked
/// visited when their chain is dequeued, so several chains may reach the same
/// person before any is expanded; the first one dequeued is the shortest.
pub fn shortest_chain(graph: &FriendGraph, from: &str, to: &str) -> Result<Option<Vec<String>>> {
    let start = graph
        .index_of(from)
        .ok_or_else(|| GraphError::UnknownPerson(from.to_string()))?;
    let end = graph
        .index_of(to)
        .ok_or_else(|| GraphError::UnknownPerson(to.to_string()))?;

    log::debug!("Searching for shortest chain {} -> {}", from, to);

    let mut visited = vec![false; graph.len()];
    // (last person, whole chain ending at them)
    let mut queue: VecDeque<(PersonIndex, Vec<PersonIndex>)> = VecDeque::new();
    queue.push_back((start, vec![start]));

    while let Some((last, chain)) = queue.pop_front() {
        if last == end {
            log::debug!("Found chain of {} friendships", chain.len() - 1);
            return Ok(Some(graph.names_of(&chain)));
        }

        // Already expanded through an earlier, no longer chain
        if visited[last as usize] {
            continue;
        }
        visited[last as usize] = true;

        for &friend in graph.friends(last) {
            if !visited[friend as usize] {
                let mut next = Vec::with_capacity(chain.len() + 1);
                next.extend_from_slice(&chain);
                next.push(friend);
                queue.push_back((friend, next));
            }
        }
    }

    log::debug!("No chain between {} and {}", from, to);
    Ok(None)
}
