//! Statistics reported by the searchers and by arc consistency. Each statistic is written as one
//! `<prefix> <name>=<value>` line, see [`configure_statistic_logging`].
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// Something that can be written out through a [`StatisticLogger`]. Structs of counters get an
/// implementation from [`create_statistics_struct!`].
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Declares a struct of counters which starts zeroed and logs every field under its own name.
///
/// ```rust
/// # use slotplan_core::create_statistics_struct;
/// create_statistics_struct!(pub ExpansionCounts {
///     num_children: u64,
///     num_pruned: u64,
/// });
///
/// let counts = ExpansionCounts::default();
///
/// assert_eq!(counts.num_children + counts.num_pruned, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $vis:vis $name:ident { $($(#[$variable_documentation:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone)]
        $vis struct $name {
            $($(#[$variable_documentation])* $vis $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(&self.$field, statistic_logger.attach_to_prefix(stringify!($field))));+
            }
        }
    };
}
