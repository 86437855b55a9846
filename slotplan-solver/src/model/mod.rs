//! Builds the constraint satisfaction problem of a scheduling instance from its directives.
mod domain;
mod error;

pub use domain::evaluate_domain;
pub use error::*;
use log::info;
use log::warn;
use slotplan_core::containers::HashMap;
use slotplan_core::containers::KeyedVec;
use slotplan_core::csp::Assignment;
use slotplan_core::csp::Csp;
use slotplan_core::csp::VariableId;

use crate::cost::total_cost;
use crate::cost::SoftDeadline;
use crate::directives::Directive;
use crate::directives::Restriction;
use crate::directives::Spanned;
use crate::interval::Interval;
use crate::relations::Relation;

/// A scheduling instance: one variable per task, whose values are the intervals the task may
/// occupy, and the soft deadline of every task.
///
/// Tasks are numbered in the order in which they are declared.
#[derive(Clone, Debug)]
pub struct ScheduleModel {
    csp: Csp<Interval, Relation>,
    durations: KeyedVec<VariableId, u16>,
    deadlines: KeyedVec<VariableId, Option<SoftDeadline>>,
}

/// A declared task collecting its domain directives.
#[derive(Debug)]
struct TaskDeclaration<'a> {
    name: &'a str,
    duration: u16,
    restrictions: Vec<Restriction>,
    deadline: Option<Spanned<SoftDeadline>>,
}

impl ScheduleModel {
    /// Combines `directives` into a model. Directives may appear in any order.
    pub fn build(directives: &[Spanned<Directive>]) -> Result<ScheduleModel, ModelError> {
        let mut declarations: Vec<TaskDeclaration<'_>> = Vec::new();
        let mut index_of: HashMap<&str, usize> = HashMap::default();

        for directive in directives {
            if let Directive::Task { name, duration } = &directive.value {
                if index_of.contains_key(name.as_str()) {
                    return Err(ModelError::DuplicateTask {
                        name: name.clone(),
                        line: directive.line,
                    });
                }

                let _ = index_of.insert(name, declarations.len());
                declarations.push(TaskDeclaration {
                    name,
                    duration: *duration,
                    restrictions: Vec::new(),
                    deadline: None,
                });
            }
        }

        let mut constraints = Vec::new();
        for directive in directives {
            let line = directive.line;
            match &directive.value {
                Directive::Task { .. } => {}
                Directive::Domain { name, restriction } => {
                    let declaration = &mut declarations[task_index(&index_of, name, line)?];
                    declaration.restrict(*restriction, line);
                }
                Directive::Constraint {
                    first,
                    relation,
                    second,
                } => constraints.push((
                    task_index(&index_of, first, line)?,
                    *relation,
                    task_index(&index_of, second, line)?,
                )),
            }
        }

        let mut csp = Csp::new();
        let mut durations = KeyedVec::default();
        let mut deadlines = KeyedVec::default();
        let mut variables = Vec::with_capacity(declarations.len());

        for declaration in declarations {
            let domain = evaluate_domain(declaration.duration, &declaration.restrictions);
            if domain.is_empty() {
                warn!("task '{}' has no feasible interval", declaration.name);
            }

            variables.push(csp.add_variable(declaration.name, domain));
            let _ = durations.push(declaration.duration);
            let _ = deadlines.push(declaration.deadline.map(|deadline| deadline.value));
        }

        for (first, relation, second) in constraints {
            let _ = csp.add_constraint(variables[first], variables[second], relation);
        }

        info!(
            "built a model with {} tasks and {} constraints",
            csp.num_variables(),
            csp.num_constraints()
        );

        Ok(ScheduleModel {
            csp,
            durations,
            deadlines,
        })
    }

    pub fn csp(&self) -> &Csp<Interval, Relation> {
        &self.csp
    }

    pub fn num_tasks(&self) -> usize {
        self.csp.num_variables()
    }

    /// The tasks in declaration order.
    pub fn tasks(&self) -> impl Iterator<Item = VariableId> {
        self.csp.variables()
    }

    pub fn name(&self, task: VariableId) -> &str {
        self.csp.name(task)
    }

    pub fn task_named(&self, name: &str) -> Option<VariableId> {
        self.csp.variable_named(name)
    }

    pub fn duration(&self, task: VariableId) -> u16 {
        self.durations[task]
    }

    pub fn deadline(&self, task: VariableId) -> Option<SoftDeadline> {
        self.deadlines[task]
    }

    /// The intervals `task` may occupy, by ascending start.
    pub fn domain(&self, task: VariableId) -> &[Interval] {
        self.csp.domain(task)
    }

    /// The summed lateness penalty of the assigned tasks.
    pub fn cost(&self, assignment: &Assignment<Interval>) -> i64 {
        total_cost(assignment.iter().filter_map(|(task, interval)| {
            self.deadline(task)
                .map(|deadline| (deadline, interval.end()))
        }))
    }
}

fn task_index(
    index_of: &HashMap<&str, usize>,
    name: &str,
    line: usize,
) -> Result<usize, ModelError> {
    index_of
        .get(name)
        .copied()
        .ok_or_else(|| ModelError::UnknownTask {
            name: name.to_owned(),
            line,
        })
}

impl TaskDeclaration<'_> {
    fn restrict(&mut self, restriction: Restriction, line: usize) {
        match restriction {
            Restriction::EndsBy { rate: 0, .. } => {}
            Restriction::EndsBy { deadline, rate } => {
                if let Some(previous) = &self.deadline {
                    warn!(
                        "line {line}: the deadline of task '{}' overrides the one on line {}",
                        self.name, previous.line
                    );
                }
                self.deadline = Some(Spanned {
                    value: SoftDeadline { deadline, rate },
                    line,
                });
            }
            _ => self.restrictions.push(restriction),
        }
    }
}
