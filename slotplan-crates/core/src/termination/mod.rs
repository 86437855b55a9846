//! Conditions that cut a search short. The searcher polls its condition before every expansion and
//! reports an unknown outcome when the condition fires. [`Indefinite`] never fires.

mod combinator;
mod indefinite;
mod node_budget;
mod time_budget;

pub use combinator::*;
pub use indefinite::*;
pub use node_budget::*;
pub use time_budget::*;

pub trait TerminationCondition {
    /// Whether the searcher should give up now.
    fn should_stop(&mut self) -> bool;

    /// Invoked once for each node the searcher expands.
    fn node_has_been_expanded(&mut self) {}
}

/// An absent condition never fires.
impl<Condition: TerminationCondition> TerminationCondition for Option<Condition> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(Condition::should_stop)
    }

    fn node_has_been_expanded(&mut self) {
        if let Some(condition) = self.as_mut() {
            condition.node_has_been_expanded();
        }
    }
}
