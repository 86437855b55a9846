//! The directive language in which scheduling instances are written.
//!
//! Every non-blank line holds one directive:
//!
//! ```text
//! task, <name> <duration>
//! domain, <name> <restriction>
//! constraint, <name> <relation> <name>
//! ```
//!
//! `#` starts a comment which runs to the end of the line. Parsing only checks the shape of each
//! line; whether the names refer to declared tasks is checked when the model is built.
mod error;
mod parser;
mod restriction;

pub use error::*;
pub use parser::parse_directives;
pub use restriction::*;

use crate::relations::Relation;

/// A value together with the (1-based) line it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Task {
        name: String,
        duration: u16,
    },
    Domain {
        name: String,
        restriction: Restriction,
    },
    Constraint {
        first: String,
        relation: Relation,
        second: String,
    },
}
