use thiserror::Error;

use crate::timeslot::TimeTokenKind;

/// A line which is not a well-formed directive.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("line {line}: '{token}' is not {expected}")]
    UnknownTimeToken {
        token: String,
        expected: TimeTokenKind,
        line: usize,
    },
    #[error("line {line}: malformed directive, {reason}")]
    MalformedDirective { reason: String, line: usize },
    #[error("line {line}: '{value}' is not a positive duration")]
    InvalidDuration { value: String, line: usize },
    #[error("line {line}: '{value}' is not a valid rate")]
    InvalidRate { value: String, line: usize },
    #[error("line {line}: unknown relation '{relation}'")]
    UnknownRelation { relation: String, line: usize },
    #[error("line {line}: unknown restriction '{keyword}'")]
    UnknownRestriction { keyword: String, line: usize },
    #[error("line {line}: the range '{range}' mixes a time of day with an absolute timeslot")]
    MixedRange { range: String, line: usize },
}

impl DirectiveError {
    pub(crate) fn malformed(reason: impl Into<String>, line: usize) -> Self {
        DirectiveError::MalformedDirective {
            reason: reason.into(),
            line,
        }
    }

    /// The line on which the error occurred.
    pub fn line(&self) -> usize {
        match self {
            DirectiveError::UnknownTimeToken { line, .. }
            | DirectiveError::MalformedDirective { line, .. }
            | DirectiveError::InvalidDuration { line, .. }
            | DirectiveError::InvalidRate { line, .. }
            | DirectiveError::UnknownRelation { line, .. }
            | DirectiveError::UnknownRestriction { line, .. }
            | DirectiveError::MixedRange { line, .. } => *line,
        }
    }
}
