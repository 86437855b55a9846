//! The weekly grid of working hours.
//!
//! A [`Timeslot`] is stored as `weekday * 100 + hour`, with weekdays Monday (1) to Friday (5) and
//! hours 9 to 17. The encoding orders slots by weekday first and by hour second, so comparing two
//! encoded slots compares them in time. Textually a slot is written as `<weekday> <time>`, e.g.
//! `tue 2pm`.
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// The first working hour of a day (9am).
pub const FIRST_HOUR: u16 = 9;
/// The last hour of the grid (5pm); tasks may end but not start at this hour.
pub const LAST_HOUR: u16 = 17;

const WEEKDAY_TOKENS: [(&str, Weekday); 5] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
];

const HOUR_TOKENS: [(&str, u16); 9] = [
    ("9am", 9),
    ("10am", 10),
    ("11am", 11),
    ("12pm", 12),
    ("1pm", 13),
    ("2pm", 14),
    ("3pm", 15),
    ("4pm", 16),
    ("5pm", 17),
];

/// What a time token was expected to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeTokenKind {
    Weekday,
    TimeOfDay,
    /// A complete `<weekday> <time>` pair.
    Timeslot,
    WeekdayOrTimeOfDay,
}

impl Display for TimeTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TimeTokenKind::Weekday => "a weekday",
            TimeTokenKind::TimeOfDay => "a time of day",
            TimeTokenKind::Timeslot => "a timeslot such as 'mon 9am'",
            TimeTokenKind::WeekdayOrTimeOfDay => "a weekday or a time of day",
        };
        write!(f, "{description}")
    }
}

/// A token outside the vocabulary of weekdays and times of day.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("'{token}' is not {expected}")]
pub struct UnknownTimeToken {
    pub token: String,
    pub expected: TimeTokenKind,
}

impl UnknownTimeToken {
    pub(crate) fn new(token: &str, expected: TimeTokenKind) -> Self {
        UnknownTimeToken {
            token: token.to_owned(),
            expected,
        }
    }
}

/// An encoded value outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{encoded} does not encode a slot of the weekly grid")]
pub struct InvalidTimeslot {
    pub encoded: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Mon = 1,
    Tue = 2,
    Wed = 3,
    Thu = 4,
    Fri = 5,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|weekday| weekday.code() == code)
    }

    pub fn token(self) -> &'static str {
        WEEKDAY_TOKENS[usize::from(self.code() - 1)].0
    }
}

impl FromStr for Weekday {
    type Err = UnknownTimeToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        WEEKDAY_TOKENS
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|&(_, weekday)| weekday)
            .ok_or_else(|| UnknownTimeToken::new(token, TimeTokenKind::Weekday))
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Parses a time of day such as `9am` or `12pm` into its hour on the grid.
pub fn parse_hour(token: &str) -> Result<u16, UnknownTimeToken> {
    HOUR_TOKENS
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|&(_, hour)| hour)
        .ok_or_else(|| UnknownTimeToken::new(token, TimeTokenKind::TimeOfDay))
}

/// The token of an hour on the grid, `None` outside working hours.
pub fn hour_token(hour: u16) -> Option<&'static str> {
    HOUR_TOKENS
        .iter()
        .find(|&&(_, candidate)| candidate == hour)
        .map(|&(token, _)| token)
}

/// One hour on the weekly grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timeslot {
    encoded: u16,
}

impl Timeslot {
    /// Monday 9am, the first slot of the week.
    pub const WEEK_START: Timeslot = Timeslot {
        encoded: 100 + FIRST_HOUR,
    };

    pub fn encode(weekday: Weekday, hour: u16) -> Result<Timeslot, InvalidTimeslot> {
        Timeslot::from_encoded(weekday.code() * 100 + hour)
    }

    pub fn from_encoded(encoded: u16) -> Result<Timeslot, InvalidTimeslot> {
        let hour = encoded % 100;
        let on_weekday = Weekday::from_code(encoded / 100).is_some();
        if !on_weekday || !(FIRST_HOUR..=LAST_HOUR).contains(&hour) {
            return Err(InvalidTimeslot { encoded });
        }

        Ok(Timeslot { encoded })
    }

    /// Every slot of the week in ascending order.
    pub fn all() -> impl Iterator<Item = Timeslot> {
        Weekday::ALL.into_iter().flat_map(|weekday| {
            (FIRST_HOUR..=LAST_HOUR).map(move |hour| Timeslot {
                encoded: weekday.code() * 100 + hour,
            })
        })
    }

    pub fn encoded(self) -> u16 {
        self.encoded
    }

    pub fn weekday(self) -> Weekday {
        // Only valid encodings are ever constructed.
        Weekday::from_code(self.encoded / 100).unwrap_or(Weekday::Mon)
    }

    pub fn hour(self) -> u16 {
        self.encoded % 100
    }

    pub fn decode(self) -> (Weekday, u16) {
        (self.weekday(), self.hour())
    }

    /// The number of hours since Monday 0am, counting nights and not only working hours.
    pub fn hours_since_epoch(self) -> i64 {
        i64::from(self.hour()) + 24 * i64::from(self.weekday().code() - 1)
    }

    /// The slot `hours` later on the same day; `None` when that is past the end of the day.
    pub fn offset(self, hours: u16) -> Option<Timeslot> {
        let hour = self.hour().checked_add(hours)?;
        (hour <= LAST_HOUR).then(|| Timeslot {
            encoded: self.weekday().code() * 100 + hour,
        })
    }
}

impl FromStr for Timeslot {
    type Err = UnknownTimeToken;

    /// Parses `<weekday> <time>`; any amount of whitespace may separate the two.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut tokens = source.split_whitespace();
        let (Some(day), Some(time), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            let expected = TimeTokenKind::Timeslot;
            return Err(UnknownTimeToken::new(source.trim(), expected));
        };

        let weekday = day.parse::<Weekday>()?;
        let hour = parse_hour(time)?;

        Ok(Timeslot {
            encoded: weekday.code() * 100 + hour,
        })
    }
}

impl Display for Timeslot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.weekday(),
            hour_token(self.hour()).unwrap_or("?")
        )
    }
}
