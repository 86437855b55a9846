use std::fmt::Debug;
use std::hash::Hash;

/// An edge to a neighbouring node, together with its cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<Node> {
    pub to: Node,
    pub cost: i64,
}

impl<Node> Edge<Node> {
    pub fn new(to: Node, cost: i64) -> Self {
        Edge { to, cost }
    }
}

/// The graph explored by a searcher.
pub trait SearchProblem {
    /// Nodes are hashed to avoid expanding the same node twice.
    type Node: Clone + Eq + Hash + Debug;

    fn start_node(&self) -> Self::Node;

    fn is_goal(&self, node: &Self::Node) -> bool;

    /// The outgoing edges of `node`.
    fn neighbours(&mut self, node: &Self::Node) -> Vec<Edge<Self::Node>>;

    /// An estimate of the cost from `node` to a goal.
    fn heuristic(&self, _node: &Self::Node) -> i64 {
        0
    }
}
