//! The binary relations which can hold between the intervals of two tasks.
use std::fmt::Display;
use std::str::FromStr;

use slotplan_core::csp::BinaryRelation;
use thiserror::Error;

use crate::interval::Interval;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("'{name}' is not one of before, after, same-day or start-at")]
pub struct UnknownRelation {
    pub name: String,
}

/// `first <relation> second` between two scheduled tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `first` ends before or when `second` starts.
    Before,
    /// `first` starts after or when `second` ends.
    After,
    /// Both start on the same weekday.
    SameDay,
    /// `first` starts exactly when `second` ends.
    StartAt,
}

const RELATION_NAMES: [(&str, Relation); 4] = [
    ("before", Relation::Before),
    ("after", Relation::After),
    ("same-day", Relation::SameDay),
    ("start-at", Relation::StartAt),
];

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::After => "after",
            Relation::SameDay => "same-day",
            Relation::StartAt => "start-at",
        }
    }
}

impl BinaryRelation<Interval> for Relation {
    fn holds(&self, first: &Interval, second: &Interval) -> bool {
        match self {
            Relation::Before => first.end() <= second.start(),
            Relation::After => first.start() >= second.end(),
            Relation::SameDay => first.weekday() == second.weekday(),
            Relation::StartAt => first.start() == second.end(),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RELATION_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, relation)| relation)
            .ok_or_else(|| UnknownRelation {
                name: name.to_owned(),
            })
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
