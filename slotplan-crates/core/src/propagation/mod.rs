//! Domain pruning for binary CSPs.
//!
//! A [`ConsistencyChecker`] takes the current [`Domains`](crate::csp::Domains) of a
//! [`Csp`](crate::csp::Csp) and removes values which cannot be part of a solution. The only level
//! of consistency provided is arc consistency ([`ArcConsistency`]), established with AC-3 over a
//! [`Worklist`] of directed arcs.
mod arc_consistency;
mod consistency_checker;
mod worklist;

pub use arc_consistency::*;
pub use consistency_checker::*;
use thiserror::Error;
pub use worklist::*;

use crate::csp::VariableId;

/// The result of establishing consistency; an `Err` means the problem has no solution under the
/// given domains.
pub type PropagationStatus = Result<(), EmptyDomain>;

/// Pruning removed every value of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the domain of {variable} became empty")]
pub struct EmptyDomain {
    pub variable: VariableId,
}
