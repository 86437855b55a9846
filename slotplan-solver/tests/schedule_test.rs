#![cfg(test)]

mod helpers;

use helpers::check_schedule;
use helpers::parse_output;
use helpers::run_solver;
use helpers::Printed;
use helpers::POLICIES;

macro_rules! schedule_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            run_schedule_test(stringify!($name));
        }
    };
}

schedule_test!(ordering);
schedule_test!(formatting);
schedule_test!(release);
schedule_test!(deadline);
schedule_test!(deadlines_compete);

/// Solves the instance with every search policy and checks the printed schedules.
fn run_schedule_test(instance: &str) {
    for policy in POLICIES {
        let run = run_solver(
            &format!("schedule_{instance}_{policy}"),
            &[instance],
            &["--search", policy],
        );
        assert!(run.status.success(), "{policy} failed: {}", run.stderr);

        let printed = parse_output(&run.stdout);
        assert_eq!(printed.len(), 1);
        check_schedule(instance, &printed[0]);
    }
}

#[test]
fn ordering_costs_nothing() {
    for policy in POLICIES {
        let run = run_solver(
            &format!("ordering_cost_{policy}"),
            &["ordering"],
            &["--search", policy],
        );
        let printed = parse_output(&run.stdout);

        let Printed::Schedule { starts, cost } = &printed[0] else {
            panic!("expected a schedule, got {printed:?}");
        };
        assert_eq!(*cost, 0);
        assert_eq!(starts[0].0, "a");
        assert_eq!(starts[1].0, "b");
    }
}

#[test]
fn lateness_is_charged_per_hour() {
    for policy in POLICIES {
        let run = run_solver(
            &format!("lateness_{policy}"),
            &["deadline"],
            &["--search", policy],
        );

        assert_eq!(run.stdout, "report:fri 2pm\ncost:40\n");
    }
}

#[test]
fn steep_deadline_is_served_first() {
    for policy in POLICIES {
        let run = run_solver(
            &format!("steep_deadline_{policy}"),
            &["deadlines_compete"],
            &["--search", policy],
        );

        assert_eq!(run.stdout, "relaxed:mon 12pm\nurgent:mon 9am\ncost:3\n");
    }
}

#[test]
fn tie_breaking_does_not_affect_validity() {
    for policy in POLICIES {
        let run = run_solver(
            &format!("fifo_{policy}"),
            &["release"],
            &["--search", policy, "--tie-breaking", "fifo"],
        );
        assert!(run.status.success());

        check_schedule("release", &parse_output(&run.stdout)[0]);
    }
}

#[test]
fn empty_domain_has_no_solution() {
    for policy in POLICIES {
        let run = run_solver(
            &format!("empty_domain_{policy}"),
            &["empty_domain"],
            &["--search", policy],
        );

        assert!(run.status.success());
        assert_eq!(parse_output(&run.stdout), vec![Printed::NoSolution]);
    }
}
