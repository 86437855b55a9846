//! Runs the solver binary on the instances in `tests/instances` and reads back what it printed.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use regex::Regex;
use slotplan_solver::core::csp::Assignment;
use slotplan_solver::core::csp::BinaryRelation;
use slotplan_solver::instance::read_instance;
use slotplan_solver::interval::Interval;
use slotplan_solver::timeslot::Timeslot;
use wait_timeout::ChildExt;

pub(crate) const POLICIES: [&str; 2] = ["arc-consistent", "incremental"];

#[derive(Debug)]
pub(crate) struct SolverRun {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// What the solver printed for one instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Printed {
    Schedule {
        /// `(task, start)` in the order in which they were printed.
        starts: Vec<(String, Timeslot)>,
        cost: i64,
    },
    NoSolution,
    Unknown,
}

pub(crate) fn instance_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(format!("{name}.txt"))
}

/// Runs the solver on the named instances; `run_name` keeps the output files of concurrently
/// running tests apart.
pub(crate) fn run_solver(run_name: &str, instances: &[&str], args: &[&str]) -> SolverRun {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_slotplan-solver"));
    let output_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let log_file_path = output_dir.join(format!("{run_name}.log"));
    let err_file_path = output_dir.join(format!("{run_name}.err"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }
    for instance in instances {
        let _ = command.arg(instance_path(instance));
    }

    let mut child = command
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");
    std::fs::remove_file(log_file_path).unwrap();
    std::fs::remove_file(err_file_path).unwrap();

    SolverRun {
        status,
        stdout,
        stderr,
    }
}

/// Splits the output of the solver into one [`Printed`] per solved instance.
pub(crate) fn parse_output(stdout: &str) -> Vec<Printed> {
    let task_line =
        Regex::new(r"^(?<task>[^:\s]+):(?<start>(mon|tue|wed|thu|fri) \d{1,2}(am|pm))$").unwrap();
    let cost_line = Regex::new(r"^cost:(?<cost>-?\d+)$").unwrap();

    let mut printed = Vec::new();
    let mut starts = Vec::new();

    for line in stdout.lines() {
        if line == "No solution" {
            assert!(starts.is_empty(), "unterminated schedule before '{line}'");
            printed.push(Printed::NoSolution);
        } else if line == "Unknown" {
            assert!(starts.is_empty(), "unterminated schedule before '{line}'");
            printed.push(Printed::Unknown);
        } else if let Some(captures) = task_line.captures(line) {
            starts.push((
                captures["task"].to_owned(),
                captures["start"].parse::<Timeslot>().unwrap(),
            ));
        } else if let Some(captures) = cost_line.captures(line) {
            printed.push(Printed::Schedule {
                starts: std::mem::take(&mut starts),
                cost: captures["cost"].parse().unwrap(),
            });
        } else {
            panic!("unexpected output line '{line}'");
        }
    }
    assert!(starts.is_empty(), "schedule without a cost line");

    printed
}

/// Checks a printed schedule against its instance: every task is listed once in name order, every
/// start lies in the domain of its task, every constraint holds and the cost is correct.
pub(crate) fn check_schedule(instance: &str, printed: &Printed) {
    let Printed::Schedule { starts, cost } = printed else {
        panic!("expected a schedule for {instance}, got {printed:?}");
    };
    let model = read_instance(&instance_path(instance)).unwrap();

    assert_eq!(starts.len(), model.num_tasks());
    assert!(
        starts.windows(2).all(|pair| pair[0].0 < pair[1].0),
        "tasks are not listed by name"
    );

    let mut assignment = Assignment::new(model.num_tasks());
    for (name, start) in starts {
        let task = model.task_named(name).unwrap();
        let interval = Interval::new(*start, model.duration(task)).unwrap();
        assert!(
            model.domain(task).contains(&interval),
            "{name} starts outside of its domain"
        );
        assignment.assign(task, interval);
    }

    for (_, constraint) in model.csp().constraints() {
        let first = assignment.value(constraint.first()).unwrap();
        let second = assignment.value(constraint.second()).unwrap();
        assert!(
            constraint.relation().holds(first, second),
            "{} {} {} is violated",
            model.name(constraint.first()),
            constraint.relation().name(),
            model.name(constraint.second())
        );
    }

    assert_eq!(*cost, model.cost(&assignment));
}
