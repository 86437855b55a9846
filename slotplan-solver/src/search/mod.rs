//! The two ways in which a schedule is searched for.
//!
//! Both are A\* searches whose heuristics estimate the lateness penalty; neither heuristic is
//! admissible, so the schedule which is found is not guaranteed to have the lowest cost.
mod arc_consistent;
mod incremental;

use std::time::Duration;
use std::time::Instant;

pub use arc_consistent::ArcConsistentSearch;
use clap::ValueEnum;
pub use incremental::IncrementalSearch;
use log::info;
use slotplan_core::csp::Assignment;
use slotplan_core::propagation::PropagationStatistics;
use slotplan_core::search::AStarSearcher;
use slotplan_core::search::SearchResult;
use slotplan_core::search::SearchStatistics;
use slotplan_core::search::TieBreaking;
use slotplan_core::statistics::log_statistic;
use slotplan_core::statistics::log_statistic_postfix;
use slotplan_core::statistics::should_log_statistics;
use slotplan_core::statistics::Statistic;
use slotplan_core::statistics::StatisticLogger;
use slotplan_core::termination::TerminationCondition;

use crate::interval::Interval;
use crate::model::ScheduleModel;
use crate::schedule::Schedule;
use crate::schedule::SolveOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchPolicy {
    /// Prune the domains to arc consistency and branch on one task at a time, restoring arc
    /// consistency after every branch.
    #[default]
    ArcConsistent,
    /// Assign the tasks one by one, checking every constraint on the partial assignment.
    Incremental,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SolverOptions {
    pub policy: SearchPolicy,
    pub tie_breaking: TieBreaking,
}

/// Searches for a schedule of `model` until one is found, the search space is exhausted or
/// `termination` stops the search.
pub fn solve(
    model: &ScheduleModel,
    options: SolverOptions,
    termination: &mut impl TerminationCondition,
) -> SolveOutcome {
    let started_at = Instant::now();

    let (outcome, search_statistics, propagation_statistics) = match options.policy {
        SearchPolicy::ArcConsistent => {
            let mut searcher =
                AStarSearcher::new(ArcConsistentSearch::new(model), options.tie_breaking);
            let result = searcher.search(termination);
            let outcome = to_outcome(model, result, |domains| domains.to_assignment());

            (
                outcome,
                searcher.statistics(),
                Some(searcher.problem().propagation_statistics()),
            )
        }
        SearchPolicy::Incremental => {
            let mut searcher =
                AStarSearcher::new(IncrementalSearch::new(model), options.tie_breaking);
            let result = searcher.search(termination);
            let outcome = to_outcome(model, result, |assignment| Some(assignment.clone()));

            (outcome, searcher.statistics(), None)
        }
    };

    let solve_time = started_at.elapsed();
    info!("solving finished in {} ms", solve_time.as_millis());
    log_statistics(search_statistics, propagation_statistics, solve_time);

    outcome
}

fn to_outcome<Node>(
    model: &ScheduleModel,
    result: SearchResult<Node>,
    to_assignment: impl FnOnce(&Node) -> Option<Assignment<Interval>>,
) -> SolveOutcome {
    match result {
        SearchResult::Found(path) => match to_assignment(path.end()) {
            Some(assignment) => SolveOutcome::Solved(Schedule::new(model, &assignment)),
            None => SolveOutcome::NoSolution,
        },
        SearchResult::Exhausted => SolveOutcome::NoSolution,
        SearchResult::Unknown => SolveOutcome::Unknown,
    }
}

fn log_statistics(
    search: SearchStatistics,
    propagation: Option<PropagationStatistics>,
    solve_time: Duration,
) {
    if !should_log_statistics() {
        return;
    }

    search.log(StatisticLogger::new(["search"]));
    if let Some(propagation) = propagation {
        propagation.log(StatisticLogger::new(["propagation"]));
    }
    log_statistic("solveTimeMs", solve_time.as_millis());
    log_statistic_postfix();
}
