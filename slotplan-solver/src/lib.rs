//! # slotplan
//! Schedules tasks on a weekly grid of working hours, Monday to Friday from 9am to 5pm.
//!
//! An instance declares tasks with a duration in hours, restricts when each task may take place,
//! relates pairs of tasks with binary constraints, and attaches soft deadlines whose lateness is
//! penalised per hour:
//!
//! ```text
//! task, write 3
//! task, review 1
//! domain, write starts-after 11am
//! domain, review ends-by tue 12pm 10
//! constraint, review after write
//! ```
//!
//! [`instance::parse_instance`] turns such a text into a [`model::ScheduleModel`], a binary
//! constraint satisfaction problem over task [`interval::Interval`]s, which [`search::solve`]
//! schedules with one of the [`search::SearchPolicy`]s:
//!
//! ```rust
//! # use slotplan_solver::core::termination::Indefinite;
//! # use slotplan_solver::instance::parse_instance;
//! # use slotplan_solver::schedule::SolveOutcome;
//! # use slotplan_solver::search::solve;
//! # use slotplan_solver::search::SolverOptions;
//! let model = parse_instance("task, a 2\ntask, b 1\nconstraint, a before b").unwrap();
//!
//! let outcome = solve(&model, SolverOptions::default(), &mut Indefinite);
//!
//! let SolveOutcome::Solved(schedule) = outcome else {
//!     panic!("the instance is satisfiable");
//! };
//! let a = schedule.interval_of("a").unwrap();
//! let b = schedule.interval_of("b").unwrap();
//! assert!(a.end() <= b.start());
//! assert_eq!(schedule.cost(), 0);
//! ```
pub mod cost;
pub mod directives;
pub mod instance;
pub mod interval;
pub mod model;
pub mod relations;
pub mod schedule;
pub mod search;
pub mod timeslot;

pub use slotplan_core as core;
