use super::DirectiveError;
use crate::interval::Interval;
use crate::timeslot::parse_hour;
use crate::timeslot::TimeTokenKind;
use crate::timeslot::Timeslot;
use crate::timeslot::UnknownTimeToken;
use crate::timeslot::Weekday;

/// A moment used as the bound of a restriction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimePoint {
    /// A time of day which applies to every weekday, e.g. `11am`.
    Hour(u16),
    /// A single slot of the week, e.g. `tue 11am`.
    Slot(Timeslot),
}

/// A closed range of times; both ends are of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRange {
    Hours { from: u16, to: u16 },
    Slots { from: Timeslot, to: Timeslot },
}

impl TimeRange {
    pub fn contains(&self, slot: Timeslot) -> bool {
        match *self {
            TimeRange::Hours { from, to } => (from..=to).contains(&slot.hour()),
            TimeRange::Slots { from, to } => (from..=to).contains(&slot),
        }
    }
}

/// A restriction on the intervals a task may be scheduled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restriction {
    StartsBefore(TimePoint),
    EndsBefore(TimePoint),
    StartsAfter(TimePoint),
    EndsAfter(TimePoint),
    StartsIn(TimeRange),
    EndsIn(TimeRange),
    OnDay(Weekday),
    AtHour(u16),
    /// A soft deadline; it does not remove any interval.
    EndsBy {
        deadline: Timeslot,
        rate: u32,
    },
}

impl Restriction {
    /// Returns `true` if a task may be scheduled in `interval` under this restriction.
    pub fn admits(&self, interval: &Interval) -> bool {
        let start = interval.start();
        let end = interval.end();

        match *self {
            Restriction::StartsBefore(point) => at_or_before(start, point),
            Restriction::EndsBefore(point) => at_or_before(end, point),
            Restriction::StartsAfter(point) => at_or_after(start, point),
            Restriction::EndsAfter(point) => at_or_after(end, point),
            Restriction::StartsIn(range) => range.contains(start),
            Restriction::EndsIn(range) => range.contains(end),
            Restriction::OnDay(weekday) => start.weekday() == weekday,
            Restriction::AtHour(hour) => start.hour() == hour,
            Restriction::EndsBy { .. } => true,
        }
    }
}

fn at_or_before(slot: Timeslot, point: TimePoint) -> bool {
    match point {
        TimePoint::Hour(hour) => slot.hour() <= hour,
        TimePoint::Slot(bound) => slot <= bound,
    }
}

fn at_or_after(slot: Timeslot, point: TimePoint) -> bool {
    match point {
        TimePoint::Hour(hour) => slot.hour() >= hour,
        TimePoint::Slot(bound) => slot >= bound,
    }
}

/// Parses the tokens following the task name of a `domain` directive.
pub(crate) fn parse_restriction(
    tokens: &[&str],
    line: usize,
) -> Result<Restriction, DirectiveError> {
    let Some((&keyword, operands)) = tokens.split_first() else {
        return Err(DirectiveError::malformed("missing restriction", line));
    };

    let restriction = match keyword {
        "starts-before" => Restriction::StartsBefore(parse_time_point(operands, line)?),
        "ends-before" => Restriction::EndsBefore(parse_time_point(operands, line)?),
        "starts-after" => Restriction::StartsAfter(parse_time_point(operands, line)?),
        "ends-after" => Restriction::EndsAfter(parse_time_point(operands, line)?),
        "starts-in" => Restriction::StartsIn(parse_time_range(operands, line)?),
        "ends-in" => Restriction::EndsIn(parse_time_range(operands, line)?),
        "ends-by" => parse_deadline(operands, line)?,
        _ => {
            if let Ok(weekday) = keyword.parse::<Weekday>() {
                expect_no_operands(keyword, operands, line)?;
                Restriction::OnDay(weekday)
            } else if let Ok(hour) = parse_hour(keyword) {
                expect_no_operands(keyword, operands, line)?;
                Restriction::AtHour(hour)
            } else if operands.is_empty() {
                return Err(DirectiveError::UnknownTimeToken {
                    token: keyword.to_owned(),
                    expected: TimeTokenKind::WeekdayOrTimeOfDay,
                    line,
                });
            } else {
                return Err(DirectiveError::UnknownRestriction {
                    keyword: keyword.to_owned(),
                    line,
                });
            }
        }
    };

    Ok(restriction)
}

fn expect_no_operands(keyword: &str, operands: &[&str], line: usize) -> Result<(), DirectiveError> {
    if operands.is_empty() {
        return Ok(());
    }

    let reason = format!("'{keyword}' does not take operands");
    Err(DirectiveError::malformed(reason, line))
}

fn unknown_token(line: usize) -> impl Fn(UnknownTimeToken) -> DirectiveError {
    move |error| DirectiveError::UnknownTimeToken {
        token: error.token,
        expected: error.expected,
        line,
    }
}

/// Either `<time>` or `<weekday> <time>`.
fn parse_time_point(tokens: &[&str], line: usize) -> Result<TimePoint, DirectiveError> {
    match tokens {
        [time] => parse_hour(time)
            .map(TimePoint::Hour)
            .map_err(unknown_token(line)),
        [day, time] => parse_slot(day, time, line).map(TimePoint::Slot),
        _ => {
            let reason = format!("expected a time, found '{}'", tokens.join(" "));
            Err(DirectiveError::malformed(reason, line))
        }
    }
}

fn parse_slot(day: &str, time: &str, line: usize) -> Result<Timeslot, DirectiveError> {
    let weekday = day.parse::<Weekday>().map_err(unknown_token(line))?;
    let hour = parse_hour(time).map_err(unknown_token(line))?;

    Timeslot::encode(weekday, hour)
        .map_err(|_| DirectiveError::malformed("timeslot outside the grid", line))
}

/// `<point>-<point>`, where the dash may be surrounded by spaces.
fn parse_time_range(tokens: &[&str], line: usize) -> Result<TimeRange, DirectiveError> {
    let range = tokens.join(" ");
    let Some((from, to)) = range.split_once('-') else {
        let reason = format!("expected a range, found '{range}'");
        return Err(DirectiveError::malformed(reason, line));
    };

    let from = parse_time_point(&from.split_whitespace().collect::<Vec<_>>(), line)?;
    let to = parse_time_point(&to.split_whitespace().collect::<Vec<_>>(), line)?;

    match (from, to) {
        (TimePoint::Hour(from), TimePoint::Hour(to)) => Ok(TimeRange::Hours { from, to }),
        (TimePoint::Slot(from), TimePoint::Slot(to)) => Ok(TimeRange::Slots { from, to }),
        _ => Err(DirectiveError::MixedRange { range, line }),
    }
}

/// `<weekday> <time> <rate>`.
fn parse_deadline(tokens: &[&str], line: usize) -> Result<Restriction, DirectiveError> {
    let [day, time, rate] = tokens else {
        let reason = "ends-by expects a weekday, a time and a rate";
        return Err(DirectiveError::malformed(reason, line));
    };

    let deadline = parse_slot(day, time, line)?;
    let rate = rate.parse::<u32>().map_err(|_| DirectiveError::InvalidRate {
        value: (*rate).to_owned(),
        line,
    })?;

    Ok(Restriction::EndsBy { deadline, rate })
}
