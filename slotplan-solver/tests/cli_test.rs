#![cfg(test)]

mod helpers;

use helpers::check_schedule;
use helpers::parse_output;
use helpers::run_solver;
use helpers::Printed;

#[test]
fn undeclared_task_prints_nothing() {
    let run = run_solver("undeclared_task", &["unknown_task"], &[]);

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("'ghost' has not been declared"));
}

#[test]
fn invalid_files_do_not_stop_later_files() {
    let run = run_solver(
        "invalid_then_valid",
        &["ordering", "malformed", "unknown_task", "deadline"],
        &[],
    );

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stderr.contains("is not a positive duration"));
    assert!(run.stderr.contains("2 instance(s) could not be loaded"));

    let printed = parse_output(&run.stdout);
    assert_eq!(printed.len(), 2);
    check_schedule("ordering", &printed[0]);
    check_schedule("deadline", &printed[1]);
}

#[test]
fn missing_file_stops_processing() {
    let run = run_solver(
        "missing_file",
        &["ordering", "does_not_exist", "deadline"],
        &[],
    );

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stderr.contains("does_not_exist.txt"));

    let printed = parse_output(&run.stdout);
    assert_eq!(printed.len(), 1);
    check_schedule("ordering", &printed[0]);
}

#[test]
fn node_limit_gives_unknown() {
    let run = run_solver("node_limit", &["release"], &["--node-limit", "0"]);

    assert!(run.status.success());
    assert_eq!(parse_output(&run.stdout), vec![Printed::Unknown]);
}

#[test]
fn time_limit_gives_unknown() {
    let run = run_solver("time_limit", &["release"], &["-t", "0"]);

    assert!(run.status.success());
    assert_eq!(parse_output(&run.stdout), vec![Printed::Unknown]);
}

#[test]
fn statistics_are_logged_to_stderr() {
    let run = run_solver("statistics", &["ordering"], &["--log-statistics"]);

    assert!(run.status.success());
    assert!(run.stderr.contains("%% searchNumNodesExpanded="));
    assert!(run.stderr.contains("%% propagationNumRevisions="));
    assert!(run.stderr.contains("%% solveTimeMs="));
    check_schedule("ordering", &parse_output(&run.stdout)[0]);
}

#[test]
fn verbose_logging_does_not_change_the_schedule() {
    let quiet = run_solver("quiet", &["deadline"], &[]);
    let verbose = run_solver("verbose", &["deadline"], &["--verbose"]);

    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(quiet.stderr.is_empty());
    assert!(!verbose.stderr.is_empty());
}
