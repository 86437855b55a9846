use std::fmt::Display;

use itertools::Itertools;

use super::statistic_logging::log_statistic;

/// Logs statistics under a common name prefix, so that the counters of different components can
/// be told apart (`search_num_nodes_expanded`, `propagation_num_revisions`).
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    prefix: String,
}

impl StatisticLogger {
    /// A logger whose prefix is the given parts joined by `_`.
    pub fn new(parts: impl IntoIterator<Item = impl Display>) -> Self {
        StatisticLogger {
            prefix: parts.into_iter().join("_"),
        }
    }

    /// A logger for the nested statistic `name`.
    pub fn attach_to_prefix(&self, name: impl Display) -> Self {
        let prefix = if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}_{name}", self.prefix)
        };

        StatisticLogger { prefix }
    }

    pub fn log_statistic(&self, value: impl Display) {
        log_statistic(&self.prefix, value);
    }
}

#[cfg(test)]
mod tests {
    use super::StatisticLogger;

    #[test]
    fn prefixes_are_joined_with_underscores() {
        let logger = StatisticLogger::new(["search", "astar"]).attach_to_prefix("nodes");

        assert_eq!(logger.prefix, "search_astar_nodes");
    }

    #[test]
    fn empty_prefix_adds_no_separator() {
        let logger = StatisticLogger::default().attach_to_prefix("solve_time");

        assert_eq!(logger.prefix, "solve_time");
    }
}
