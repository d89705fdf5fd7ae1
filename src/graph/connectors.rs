//! Connector (articulation point) detection

use crate::graph::{FriendGraph, PersonIndex};

/// Depth-first search state shared by every tree of the traversal forest.
///
/// `counter` is global across components: discovery numbers keep increasing
/// when a new root is started, so low-link comparisons stay valid in
/// disconnected graphs.
struct ConnectorSearch<'g> {
    graph: &'g FriendGraph,
    visited: Vec<bool>,
    discovery: Vec<u32>,
    low: Vec<u32>,
    counter: u32,
    is_connector: Vec<bool>,
}

impl<'g> ConnectorSearch<'g> {
    fn new(graph: &'g FriendGraph) -> Self {
        let n = graph.len();
        Self {
            graph,
            visited: vec![false; n],
            discovery: vec![0; n],
            low: vec![0; n],
            counter: 0,
            is_connector: vec![false; n],
        }
    }

    fn discover(&mut self, person: PersonIndex) {
        let p = person as usize;
        self.visited[p] = true;
        self.counter += 1;
        self.discovery[p] = self.counter;
        self.low[p] = self.counter;
    }

    /// Depth-first search of the tree rooted at `root`.
    ///
    /// A frame's `low` and connector test are settled when its child frame
    /// is popped, in the same order a recursive walk would apply them.
    fn search_from(&mut self, root: PersonIndex) {
        let graph = self.graph;
        self.discover(root);
        let mut stack = vec![Frame::new(root, root)];

        while let Some(frame) = stack.last_mut() {
            let c = frame.curr as usize;
            if let Some(&next) = graph.friends(frame.curr).get(frame.cursor) {
                frame.cursor += 1;
                let n = next as usize;
                if !self.visited[n] {
                    frame.children += 1;
                    let curr = frame.curr;
                    self.discover(next);
                    stack.push(Frame::new(next, curr));
                } else if next != frame.parent {
                    // Back edge
                    self.low[c] = self.low[c].min(self.discovery[n]);
                }
                continue;
            }

            let child = frame.curr as usize;
            stack.pop();

            if let Some(parent) = stack.last() {
                let p = parent.curr as usize;
                self.low[p] = self.low[p].min(self.low[child]);

                let is_root = parent.parent == parent.curr;
                if (!is_root && self.discovery[p] <= self.low[child]) || (is_root && parent.children > 1) {
                    self.is_connector[p] = true;
                }
            }
        }
    }
}

/// One person on the depth-first stack (`parent == curr` for a root)
struct Frame {
    curr: PersonIndex,
    parent: PersonIndex,
    /// Position of the next friend to examine
    cursor: usize,
    /// Tree children discovered so far
    children: u32,
}

impl Frame {
    fn new(curr: PersonIndex, parent: PersonIndex) -> Self {
        Self {
            curr,
            parent,
            cursor: 0,
            children: 0,
        }
    }
}

/// Indices of all connectors, in index order
pub fn connector_indices(graph: &FriendGraph) -> Vec<PersonIndex> {
    let mut search = ConnectorSearch::new(graph);

    for root in 0..graph.len() as PersonIndex {
        if !search.visited[root as usize] {
            search.search_from(root);
        }
    }

    search
        .is_connector
        .iter()
        .enumerate()
        .filter(|&(_, &flagged)| flagged)
        .map(|(idx, _)| idx as PersonIndex)
        .collect()
}

/// Find every connector: a person whose removal would split their friends
/// into more groups than before.
///
/// Returns `None` when the graph has no connectors. Names are listed in index
/// order but callers should treat the result as a set.
pub fn connectors(graph: &FriendGraph) -> Option<Vec<String>> {
    log::debug!("Searching for connectors among {} people", graph.len());

    let found = connector_indices(graph);
    log::debug!("Found {} connectors", found.len());

    if found.is_empty() {
        return None;
    }

    Some(graph.names_of(&found))
}
