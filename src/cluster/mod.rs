//! Clique (same-school friend group) analysis module

pub mod detection;
pub mod metrics;

use serde::{Serialize, Deserialize};

/// A clique: a maximal group of students of one school connected through
/// friendships among themselves.
///
/// Not a complete subgraph; members need only be reachable from each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clique {
    /// Position of this clique in enumeration order
    pub id: u32,

    /// School shared by all members
    pub school: String,

    /// Member names, in discovery order
    pub members: Vec<String>,

    /// Size of the clique
    pub size: usize,

    /// Density: same-school friendships / potential friendships
    pub density: f32,

    /// Member with the most friends inside the clique
    pub best_connected: String,
}
