use std::fmt::Display;

use slotplan_core::csp::Assignment;

use crate::interval::Interval;
use crate::model::ScheduleModel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub name: String,
    pub interval: Interval,
}

/// A complete assignment of intervals to tasks together with its cost.
///
/// Tasks are listed by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
    cost: i64,
}

impl Schedule {
    pub fn new(model: &ScheduleModel, assignment: &Assignment<Interval>) -> Schedule {
        let mut tasks = assignment
            .iter()
            .map(|(task, interval)| ScheduledTask {
                name: model.name(task).to_owned(),
                interval: *interval,
            })
            .collect::<Vec<_>>();
        tasks.sort_by(|first, second| first.name.cmp(&second.name));

        Schedule {
            tasks,
            cost: model.cost(assignment),
        }
    }

    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn interval_of(&self, name: &str) -> Option<Interval> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .map(|task| task.interval)
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }
}

impl Display for Schedule {
    /// One `<task>:<start>` line per task followed by `cost:<cost>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for task in &self.tasks {
            writeln!(f, "{}:{}", task.name, task.interval.start())?;
        }
        write!(f, "cost:{}", self.cost)
    }
}

/// The result of solving one instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Schedule),
    /// The search space is exhausted without finding a schedule.
    NoSolution,
    /// The search was stopped before reaching a conclusion.
    Unknown,
}

impl Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveOutcome::Solved(schedule) => write!(f, "{schedule}"),
            SolveOutcome::NoSolution => write!(f, "No solution"),
            SolveOutcome::Unknown => write!(f, "Unknown"),
        }
    }
}
