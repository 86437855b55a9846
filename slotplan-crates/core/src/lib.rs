//! # slotplan-core
//! The generic building blocks of the slotplan scheduler: a container for binary constraint
//! satisfaction problems, arc consistency over such problems, and best-first search. None of these
//! modules know about tasks or timeslots; values and relations are type parameters.
//!
//! A [`csp::Csp`] holds the variables, their initial domains and the binary constraints between
//! them. Domains can be pruned with [`propagation::ArcConsistency`], and a
//! [`search::SearchProblem`] defined over the CSP can be solved with an
//! [`search::AStarSearcher`], which is stopped early by a [`termination::TerminationCondition`].
pub mod asserts;
pub mod containers;
pub mod csp;
pub mod propagation;
pub mod search;
pub mod statistics;
pub mod termination;

pub use convert_case;
