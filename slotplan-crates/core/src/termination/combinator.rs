use super::TerminationCondition;

/// Stops as soon as either of the two wrapped conditions asks to stop; both are informed of every
/// expansion. Nest combinators to combine more than two conditions.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Combinator<First, Second> {
    pub fn new(first: First, second: Second) -> Self {
        Combinator { first, second }
    }
}

impl<First, Second> TerminationCondition for Combinator<First, Second>
where
    First: TerminationCondition,
    Second: TerminationCondition,
{
    fn should_stop(&mut self) -> bool {
        self.first.should_stop() || self.second.should_stop()
    }

    fn node_has_been_expanded(&mut self) {
        self.first.node_has_been_expanded();
        self.second.node_has_been_expanded();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;

    #[test]
    fn stops_when_one_condition_stops() {
        let mut combined = Combinator::new(Indefinite, NodeBudget::new(1));

        assert!(!combined.should_stop());
        combined.node_has_been_expanded();
        assert!(combined.should_stop());
    }

    #[test]
    fn absent_conditions_never_stop() {
        let mut combined = Combinator::new(None::<NodeBudget>, None::<NodeBudget>);

        combined.node_has_been_expanded();
        assert!(!combined.should_stop());
    }
}
