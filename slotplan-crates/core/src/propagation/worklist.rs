use std::collections::VecDeque;

use crate::containers::HashSet;
use crate::csp::ConstraintId;
use crate::csp::Csp;
use crate::csp::VariableId;

/// The arc which revises the domain of `variable` against the other variable of `constraint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedArc {
    pub variable: VariableId,
    pub constraint: ConstraintId,
}

/// A FIFO queue of [`DirectedArc`]s in which every arc is present at most once.
#[derive(Clone, Debug, Default)]
pub struct Worklist {
    queue: VecDeque<DirectedArc>,
    queued: HashSet<DirectedArc>,
}

impl Worklist {
    /// Every arc of every constraint, used to establish consistency from scratch.
    pub fn all_arcs<Value, R>(csp: &Csp<Value, R>) -> Worklist {
        let mut worklist = Worklist::default();

        for (constraint, binary_constraint) in csp.constraints() {
            for variable in binary_constraint.scope() {
                worklist.push(DirectedArc {
                    variable,
                    constraint,
                });
            }
        }

        worklist
    }

    /// The arcs which have to be revised after the domain of `variable` has changed: the other
    /// variable of every constraint on `variable`.
    pub fn arcs_touching<Value, R>(csp: &Csp<Value, R>, variable: VariableId) -> Worklist {
        let mut worklist = Worklist::default();
        worklist.push_neighbours(csp, variable, None);
        worklist
    }

    /// Queues the arcs towards `variable` over every constraint except `skip`.
    pub(crate) fn push_neighbours<Value, R>(
        &mut self,
        csp: &Csp<Value, R>,
        variable: VariableId,
        skip: Option<ConstraintId>,
    ) {
        for &constraint in csp.constraints_on(variable) {
            if Some(constraint) == skip {
                continue;
            }

            let other = csp.constraint(constraint).other(variable);
            if other != variable {
                self.push(DirectedArc {
                    variable: other,
                    constraint,
                });
            }
        }
    }

    pub fn push(&mut self, arc: DirectedArc) {
        if self.queued.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop(&mut self) -> Option<DirectedArc> {
        let arc = self.queue.pop_front()?;
        let _ = self.queued.remove(&arc);
        Some(arc)
    }
}
