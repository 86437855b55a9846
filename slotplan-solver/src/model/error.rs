use thiserror::Error;

/// Directives which are well-formed on their own but do not form a consistent instance.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("line {line}: task '{name}' has not been declared")]
    UnknownTask { name: String, line: usize },
    #[error("line {line}: task '{name}' has already been declared")]
    DuplicateTask { name: String, line: usize },
}
