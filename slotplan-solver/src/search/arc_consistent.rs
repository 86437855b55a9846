use log::debug;
use log::warn;
use slotplan_core::csp::Domains;
use slotplan_core::csp::VariableId;
use slotplan_core::propagation::ArcConsistency;
use slotplan_core::propagation::ConsistencyChecker;
use slotplan_core::propagation::PropagationStatistics;
use slotplan_core::propagation::Worklist;
use slotplan_core::search::Edge;
use slotplan_core::search::SearchProblem;

use crate::interval::Interval;
use crate::model::ScheduleModel;

/// Searches over domain maps which are kept arc consistent.
///
/// The start node holds the domains of the model pruned to arc consistency. A node is expanded
/// by fixing the first task (in order of earliest start) whose domain holds more than one
/// interval; every child is made arc consistent again and dropped if a domain runs empty.
#[derive(Debug)]
pub struct ArcConsistentSearch<'model> {
    model: &'model ScheduleModel,
    arc_consistency: ArcConsistency,
    start: Domains<Interval>,
    /// The tasks by the earliest start in their pruned domain.
    order: Vec<VariableId>,
}

impl<'model> ArcConsistentSearch<'model> {
    pub fn new(model: &'model ScheduleModel) -> Self {
        let csp = model.csp();
        let mut arc_consistency = ArcConsistency::default();
        let mut start = csp.initial_domains().clone();

        if let Err(empty) =
            arc_consistency.make_consistent(csp, &mut start, Worklist::all_arcs(csp))
        {
            warn!(
                "arc consistency emptied the domain of task '{}'",
                model.name(empty.variable)
            );
        }

        let mut order = model.tasks().collect::<Vec<_>>();
        order.sort_by_key(|&task| start.domain(task).first().map(Interval::start));

        ArcConsistentSearch {
            model,
            arc_consistency,
            start,
            order,
        }
    }

    pub fn propagation_statistics(&self) -> PropagationStatistics {
        *self.arc_consistency.statistics()
    }
}

impl SearchProblem for ArcConsistentSearch<'_> {
    type Node = Domains<Interval>;

    fn start_node(&self) -> Domains<Interval> {
        self.start.clone()
    }

    fn is_goal(&self, node: &Domains<Interval>) -> bool {
        node.all_fixed()
    }

    fn neighbours(&mut self, node: &Domains<Interval>) -> Vec<Edge<Domains<Interval>>> {
        if node.first_empty().is_some() {
            return Vec::new();
        }

        let Some(&task) = self.order.iter().find(|&&task| node.size(task) > 1) else {
            return Vec::new();
        };
        debug!(
            "branching on '{}' over {} intervals",
            self.model.name(task),
            node.size(task)
        );

        let csp = self.model.csp();
        let mut children = Vec::new();

        for &interval in node.domain(task) {
            let mut child = node.clone();
            child.fix(task, interval);

            let arcs = Worklist::arcs_touching(csp, task);
            match self.arc_consistency.make_consistent(csp, &mut child, arcs) {
                Ok(()) => children.push(Edge::new(child, 1)),
                Err(empty) => debug!(
                    "fixing '{}' to {interval} empties '{}'",
                    self.model.name(task),
                    self.model.name(empty.variable)
                ),
            }
        }

        children
    }

    /// The summed penalty rate times the distance between the earliest possible finish and the
    /// deadline, where the distance is taken between encoded timeslots and may be negative.
    fn heuristic(&self, node: &Domains<Interval>) -> i64 {
        self.model
            .tasks()
            .filter_map(|task| {
                let deadline = self.model.deadline(task)?;
                let earliest_finish = node.domain(task).iter().map(Interval::end).min()?;
                let finish = i64::from(earliest_finish.encoded());
                let due = i64::from(deadline.deadline.encoded());

                Some((finish - due) * i64::from(deadline.rate))
            })
            .sum()
    }
}
