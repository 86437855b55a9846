use log::debug;
use slotplan_core::csp::Assignment;
use slotplan_core::csp::VariableId;
use slotplan_core::search::Edge;
use slotplan_core::search::SearchProblem;

use crate::interval::Interval;
use crate::model::ScheduleModel;
use crate::timeslot::Timeslot;

/// Searches over partial assignments which extend one task at a time.
///
/// Tasks are assigned in order of the earliest start in their (unpruned) domain. A node assigns
/// the first `k` tasks of that order, and its children assign the next task to every interval of
/// its domain which keeps all constraints satisfied.
#[derive(Debug)]
pub struct IncrementalSearch<'model> {
    model: &'model ScheduleModel,
    order: Vec<VariableId>,
}

impl<'model> IncrementalSearch<'model> {
    pub fn new(model: &'model ScheduleModel) -> Self {
        let mut order = model.tasks().collect::<Vec<_>>();
        order.sort_by_key(|&task| model.domain(task).first().map(Interval::start));

        IncrementalSearch { model, order }
    }
}

impl SearchProblem for IncrementalSearch<'_> {
    type Node = Assignment<Interval>;

    fn start_node(&self) -> Assignment<Interval> {
        Assignment::new(self.model.num_tasks())
    }

    fn is_goal(&self, node: &Assignment<Interval>) -> bool {
        node.is_complete()
    }

    fn neighbours(&mut self, node: &Assignment<Interval>) -> Vec<Edge<Assignment<Interval>>> {
        let Some(&task) = self.order.get(node.num_assigned()) else {
            return Vec::new();
        };
        let csp = self.model.csp();

        let children = csp
            .domain(task)
            .iter()
            .map(|&interval| node.with(task, interval))
            .filter(|child| csp.consistent(child))
            .map(|child| Edge::new(child, 1))
            .collect::<Vec<_>>();

        debug!(
            "'{}' can be assigned {} of {} intervals",
            self.model.name(task),
            children.len(),
            csp.domain(task).len()
        );

        children
    }

    /// The penalty of the assigned tasks plus, for every unassigned task, the penalty of its first
    /// interval which starts after every assigned task has finished.
    fn heuristic(&self, node: &Assignment<Interval>) -> i64 {
        let realised = self.model.cost(node);

        let current = node
            .iter()
            .map(|(_, interval)| interval.end())
            .max()
            .unwrap_or(Timeslot::WEEK_START);

        let estimated = node
            .unassigned()
            .filter_map(|task| {
                let deadline = self.model.deadline(task)?;
                let first = self
                    .model
                    .domain(task)
                    .iter()
                    .find(|interval| interval.start() >= current)?;

                Some(deadline.cost(first.end()))
            })
            .sum::<i64>();

        realised + estimated
    }
}
