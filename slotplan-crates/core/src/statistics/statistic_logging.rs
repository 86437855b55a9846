//! The process-wide destination of statistics. Nothing is written until
//! [`configure_statistic_logging`] has been called.

use std::fmt::Display;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistics are written: every statistic becomes a line `<prefix> <name>=<value>`, and a
/// block of statistics may be closed by a fixed line.
pub struct StatisticOptions {
    prefix: &'static str,
    closing_line: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl std::fmt::Debug for StatisticOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("closing_line", &self.closing_line)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

impl StatisticOptions {
    fn write_statistic(&mut self, name: &str, value: &dyn Display) {
        let name = match self.casing {
            Some(casing) => name.to_case(casing),
            None => name.to_owned(),
        };

        if let Err(e) = writeln!(self.writer, "{} {name}={value}", self.prefix) {
            debug!("could not write statistic {name}: {e}");
        }
    }

    fn write_closing_line(&mut self) {
        if let Some(closing_line) = self.closing_line {
            if let Err(e) = writeln!(self.writer, "{closing_line}") {
                debug!("could not close the statistics: {e}");
            }
        }
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Enables statistic logging. Statistics are prefixed with `prefix`, their names converted to
/// `casing` if given, and written to `writer`, or to stderr when it is `None`. `after` is the line
/// written by [`log_statistic_postfix`].
///
/// Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            prefix,
            closing_line: after,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(std::io::stderr())),
        })
    });
}

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(Ok(mut options)) = STATISTIC_OPTIONS.get().map(Mutex::lock) {
        action(&mut options);
    }
}

/// Writes the statistic `name` with `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| options.write_statistic(&name.to_string(), &value));
}

/// Writes the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    with_options(StatisticOptions::write_closing_line);
}

/// Returns `true` once statistic logging has been configured.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
