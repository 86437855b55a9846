//! Best-first search over the nodes of a [`SearchProblem`].
//!
//! The [`AStarSearcher`] orders its [`SearchFrontier`] by `f = g + h`, where `g` is the summed cost
//! of the edges from the start node and `h` is [`SearchProblem::heuristic`]. Goal nodes are
//! recognised when they are taken from the frontier, not when they are generated.
mod astar;
mod frontier;
mod path;
mod problem;

pub use astar::*;
pub use frontier::*;
pub use path::*;
pub use problem::*;
