use crate::directives::Restriction;
use crate::interval::Interval;
use crate::timeslot::Timeslot;

/// Every interval of `duration` hours which fits within one working day, by ascending start.
pub(crate) fn candidate_intervals(duration: u16) -> impl Iterator<Item = Interval> {
    Timeslot::all().filter_map(move |start| Interval::new(start, duration))
}

/// The intervals of `duration` hours admitted by all of the `restrictions`.
pub fn evaluate_domain<'a>(
    duration: u16,
    restrictions: impl IntoIterator<Item = &'a Restriction>,
) -> Vec<Interval> {
    let mut domain = candidate_intervals(duration).collect::<Vec<_>>();

    for restriction in restrictions {
        domain.retain(|interval| restriction.admits(interval));
    }

    domain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::TimePoint;
    use crate::directives::TimeRange;
    use crate::timeslot::Weekday;

    fn slot(source: &str) -> Timeslot {
        source.parse().unwrap()
    }

    #[test]
    fn unrestricted_domain_covers_the_week() {
        assert_eq!(evaluate_domain(1, []).len(), 40);
        assert_eq!(evaluate_domain(8, []).len(), 5);
        assert!(evaluate_domain(9, []).is_empty());
    }

    #[test]
    fn intervals_stay_within_one_day() {
        for duration in 1..=8 {
            for interval in evaluate_domain(duration, []) {
                assert_eq!(interval.start().weekday(), interval.end().weekday());
                assert_eq!(interval.start().offset(duration), Some(interval.end()));
            }
        }
    }

    #[test]
    fn domain_is_sorted_by_start() {
        let domain = evaluate_domain(3, []);

        let starts = domain.iter().map(Interval::start).collect::<Vec<_>>();

        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn restrictions_combine() {
        let restrictions = [
            Restriction::OnDay(Weekday::Tue),
            Restriction::StartsAfter(TimePoint::Hour(12)),
            Restriction::EndsBefore(TimePoint::Hour(16)),
        ];

        let starts = evaluate_domain(2, &restrictions)
            .into_iter()
            .map(|interval| interval.start().to_string())
            .collect::<Vec<_>>();

        assert_eq!(starts, vec!["tue 12pm", "tue 1pm", "tue 2pm"]);
    }

    #[test]
    fn absolute_range_spans_days() {
        let restriction = Restriction::EndsIn(TimeRange::Slots {
            from: slot("mon 5pm"),
            to: slot("tue 10am"),
        });

        let ends = evaluate_domain(1, [&restriction])
            .into_iter()
            .map(|interval| interval.end().to_string())
            .collect::<Vec<_>>();

        assert_eq!(ends, vec!["mon 5pm", "tue 10am"]);
    }

    #[test]
    fn deadlines_do_not_filter() {
        let restriction = Restriction::EndsBy {
            deadline: slot("mon 9am"),
            rate: 3,
        };

        assert_eq!(evaluate_domain(2, [&restriction]), evaluate_domain(2, []));
    }

    #[test]
    fn additional_restrictions_never_enlarge_the_domain() {
        let restrictions = [
            Restriction::StartsBefore(TimePoint::Slot(slot("thu 1pm"))),
            Restriction::AtHour(11),
            Restriction::StartsIn(TimeRange::Hours { from: 10, to: 14 }),
            Restriction::OnDay(Weekday::Wed),
        ];

        for count in 0..restrictions.len() {
            let fewer = evaluate_domain(2, &restrictions[..count]);
            let more = evaluate_domain(2, &restrictions[..=count]);

            assert!(more.iter().all(|interval| fewer.contains(interval)));
        }
    }
}
