use super::PropagationStatus;
use super::Worklist;
use crate::csp::Csp;
use crate::csp::Domains;

/// Establishes a level of consistency on a set of domains.
///
/// Implementations only ever remove values from `domains`; the [`Worklist`] tells them which
/// arcs may have lost support since the domains were last consistent.
pub trait ConsistencyChecker<Value, R> {
    fn make_consistent(
        &mut self,
        csp: &Csp<Value, R>,
        domains: &mut Domains<Value>,
        worklist: Worklist,
    ) -> PropagationStatus;
}
