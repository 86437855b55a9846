mod os_signal_termination;
mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::SlotplanError;
use result::SlotplanResult;
use slotplan_solver::core::asserts::level_is_checked;
use slotplan_solver::core::asserts::SLOTPLAN_ASSERT_LEVEL_DEFINITION;
use slotplan_solver::core::asserts::SLOTPLAN_ASSERT_MODERATE;
use slotplan_solver::core::convert_case::Case;
use slotplan_solver::core::search::TieBreaking;
use slotplan_solver::core::statistics::configure_statistic_logging;
use slotplan_solver::core::termination::Combinator;
use slotplan_solver::core::termination::NodeBudget;
use slotplan_solver::core::termination::TimeBudget;
use slotplan_solver::instance::read_instance;
use slotplan_solver::instance::InstanceError;
use slotplan_solver::search::solve;
use slotplan_solver::search::SearchPolicy;
use slotplan_solver::search::SolverOptions;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance files to schedule, solved one after the other.
    ///
    /// Every line of an instance is one of
    ///  - 'task, <name> <duration>'
    ///  - 'domain, <name> <restriction>'
    ///  - 'constraint, <name> <before|after|same-day|start-at> <name>'
    #[arg(required = true, verbatim_doc_comment)]
    instance_paths: Vec<PathBuf>,

    /// How the schedule is searched for.
    ///
    /// - "arc-consistent" keeps the domains of all tasks arc consistent while branching on one
    ///   task at a time
    /// - "incremental" assigns tasks one after another, checking the constraints on every
    ///   partial schedule
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    search: SearchPolicy,

    /// Which of the nodes with the same estimated cost is expanded first.
    ///
    /// "lifo" expands the most recently generated node, "fifo" the oldest one.
    #[arg(long, value_enum, default_value_t)]
    tie_breaking: TieBreaking,

    /// The number of milliseconds the search may take per instance. When the limit is reached
    /// 'Unknown' is printed for that instance.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// The number of nodes the search may expand per instance. When the limit is reached
    /// 'Unknown' is printed for that instance.
    ///
    /// Possible values: u64
    #[arg(long = "node-limit")]
    node_limit: Option<u64>,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// The statistics are written to stderr after every instance, each line prefixed with '%%'.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%", None, Some(Case::Camel), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SlotplanResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if level_is_checked(SLOTPLAN_ASSERT_MODERATE) {
        warn!(
            "Moderate consistency checks are enabled (assert level {SLOTPLAN_ASSERT_LEVEL_DEFINITION}); expect slower searches."
        );
    }

    let options = SolverOptions {
        policy: args.search,
        tie_breaking: args.tie_breaking,
    };
    let signal = OsSignal::install()?;
    let mut num_failed = 0;

    for path in &args.instance_paths {
        let model = match read_instance(path) {
            Ok(model) => model,
            Err(source @ InstanceError::Io { .. }) => {
                return Err(SlotplanError::Instance {
                    path: path.clone(),
                    source,
                });
            }
            Err(e) => {
                error!("{}: {e}", path.display());
                num_failed += 1;
                continue;
            }
        };

        let mut termination = Combinator::new(
            signal.clone(),
            Combinator::new(
                args.time_limit
                    .map(|ms| TimeBudget::starting_now(Duration::from_millis(ms))),
                args.node_limit.map(NodeBudget::new),
            ),
        );

        let outcome = solve(&model, options, &mut termination);
        println!("{outcome}");
    }

    if num_failed > 0 {
        return Err(SlotplanError::FailedInstances(num_failed));
    }

    Ok(())
}
