//! Lateness penalties of soft deadlines.
use crate::timeslot::Timeslot;

/// A task should finish by `deadline`; every hour it finishes later costs `rate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoftDeadline {
    pub deadline: Timeslot,
    pub rate: u32,
}

impl SoftDeadline {
    /// The penalty when the task finishes at `finish`.
    pub fn cost(&self, finish: Timeslot) -> i64 {
        single_cost(self.deadline, finish, self.rate)
    }
}

/// The penalty of finishing at `actual_finish` for a task due at `deadline`.
///
/// Lateness counts elapsed hours, so finishing on Tuesday 9am for a Monday 5pm deadline is 16
/// hours late.
pub fn single_cost(deadline: Timeslot, actual_finish: Timeslot, rate: u32) -> i64 {
    let lateness = actual_finish.hours_since_epoch() - deadline.hours_since_epoch();
    lateness.max(0) * i64::from(rate)
}

/// Sums the penalties of the given deadlines and finishing times.
pub fn total_cost(finishes: impl IntoIterator<Item = (SoftDeadline, Timeslot)>) -> i64 {
    finishes
        .into_iter()
        .map(|(deadline, finish)| deadline.cost(finish))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(source: &str) -> Timeslot {
        source.parse().unwrap()
    }

    #[test]
    fn finishing_on_time_costs_nothing() {
        assert_eq!(single_cost(slot("tue 3pm"), slot("tue 3pm"), 10), 0);
        assert_eq!(single_cost(slot("tue 3pm"), slot("mon 5pm"), 10), 0);
    }

    #[test]
    fn lateness_is_counted_in_elapsed_hours() {
        assert_eq!(single_cost(slot("mon 5pm"), slot("tue 9am"), 1), 16);
        assert_eq!(single_cost(slot("mon 9am"), slot("mon 11am"), 5), 10);
    }

    #[test]
    fn cost_increases_with_lateness() {
        let deadline = slot("mon 9am");
        let costs = Timeslot::all()
            .skip(1)
            .map(|finish| single_cost(deadline, finish, 3))
            .collect::<Vec<_>>();

        assert!(costs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn zero_rate_costs_nothing() {
        assert_eq!(single_cost(slot("mon 9am"), slot("fri 5pm"), 0), 0);
    }

    #[test]
    fn total_cost_sums_all_deadlines() {
        let deadline = SoftDeadline {
            deadline: slot("mon 10am"),
            rate: 2,
        };

        let total = total_cost([(deadline, slot("mon 12pm")), (deadline, slot("mon 9am"))]);
        assert_eq!(total, 4);
    }
}
