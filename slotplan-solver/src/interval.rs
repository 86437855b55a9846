use std::fmt::Display;

use slotplan_core::slotplan_assert_simple;

use crate::timeslot::Timeslot;
use crate::timeslot::Weekday;

/// The hours occupied by a task: from `start` up to `end`, on one working day.
///
/// Intervals order by their start first, which is the order in which domains are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: Timeslot,
    end: Timeslot,
}

impl Interval {
    /// The interval of `duration` hours starting at `start`; `None` if it would run past 5pm.
    pub fn new(start: Timeslot, duration: u16) -> Option<Interval> {
        let end = start.offset(duration)?;
        slotplan_assert_simple!(
            end.weekday() == start.weekday() && end.hour() == start.hour() + duration,
            "{start} + {duration}h should stay within the day"
        );

        Some(Interval { start, end })
    }

    pub fn start(&self) -> Timeslot {
        self.start
    }

    pub fn end(&self) -> Timeslot {
        self.end
    }

    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
