use log::trace;

use super::ConsistencyChecker;
use super::EmptyDomain;
use super::PropagationStatus;
use super::Worklist;
use crate::create_statistics_struct;
use crate::csp::BinaryRelation;
use crate::csp::ConstraintId;
use crate::csp::Csp;
use crate::csp::Domains;
use crate::csp::VariableId;
use crate::slotplan_assert_moderate;

create_statistics_struct!(
    /// Counters of the work done while establishing arc consistency.
    pub PropagationStatistics {
        /// The number of times consistency was (re-)established
        num_calls: u64,
        /// The number of arcs which were revised
        num_revisions: u64,
        /// The number of values removed from the domains
        num_values_removed: u64,
});

/// Arc consistency through AC-3.
///
/// An arc `(x, c)` is revised by removing every value of `x` which has no supporting value in the
/// domain of the other variable of `c`. Whenever the domain of `x` shrinks, all arcs `(y, c')`
/// with `c' != c` a constraint on `x` and `y` its other variable are queued again. The fixpoint
/// reached is independent of the order in which arcs are revised.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArcConsistency {
    statistics: PropagationStatistics,
}

impl ArcConsistency {
    pub fn statistics(&self) -> &PropagationStatistics {
        &self.statistics
    }
}

impl<Value, R: BinaryRelation<Value>> ConsistencyChecker<Value, R> for ArcConsistency {
    fn make_consistent(
        &mut self,
        csp: &Csp<Value, R>,
        domains: &mut Domains<Value>,
        mut worklist: Worklist,
    ) -> PropagationStatus {
        self.statistics.num_calls += 1;

        if let Some(variable) = domains.first_empty() {
            return Err(EmptyDomain { variable });
        }

        while let Some(arc) = worklist.pop() {
            self.statistics.num_revisions += 1;

            let size_before = domains.size(arc.variable);
            if !revise(csp, domains, arc.variable, arc.constraint) {
                continue;
            }

            let size_after = domains.size(arc.variable);
            self.statistics.num_values_removed += (size_before - size_after) as u64;
            trace!(
                "revising {} against {} removed {} values",
                arc.variable,
                arc.constraint,
                size_before - size_after
            );

            if size_after == 0 {
                return Err(EmptyDomain {
                    variable: arc.variable,
                });
            }

            worklist.push_neighbours(csp, arc.variable, Some(arc.constraint));
        }

        slotplan_assert_moderate!(
            is_arc_consistent(csp, domains),
            "the AC-3 fixpoint should be arc consistent"
        );

        Ok(())
    }
}

/// Removes the values of `variable` without support in `constraint`. Returns `true` if the
/// domain changed.
fn revise<Value, R: BinaryRelation<Value>>(
    csp: &Csp<Value, R>,
    domains: &mut Domains<Value>,
    variable: VariableId,
    constraint_id: ConstraintId,
) -> bool {
    let constraint = csp.constraint(constraint_id);
    let other = constraint.other(variable);

    if other == variable {
        return domains.retain(variable, |value| constraint.relation().holds(value, value));
    }

    let supported = domains
        .domain(variable)
        .iter()
        .map(|value| {
            domains
                .domain(other)
                .iter()
                .any(|other_value| constraint.holds_for(variable, value, other_value))
        })
        .collect::<Vec<_>>();

    let mut supported = supported.into_iter();
    domains.retain(variable, |_| supported.next().unwrap_or(true))
}

/// Returns `true` if every value of every variable has a support in every constraint on it.
pub fn is_arc_consistent<Value, R: BinaryRelation<Value>>(
    csp: &Csp<Value, R>,
    domains: &Domains<Value>,
) -> bool {
    csp.constraints().all(|(_, constraint)| {
        constraint.scope().into_iter().all(|variable| {
            let other = constraint.other(variable);
            domains.domain(variable).iter().all(|value| {
                if other == variable {
                    constraint.relation().holds(value, value)
                } else {
                    domains
                        .domain(other)
                        .iter()
                        .any(|other_value| constraint.holds_for(variable, value, other_value))
                }
            })
        })
    })
}
