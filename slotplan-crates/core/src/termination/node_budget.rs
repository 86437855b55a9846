use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a fixed number of nodes has been expanded.
#[derive(Debug, Copy, Clone)]
pub struct NodeBudget {
    budget: u64,
    num_expanded: u64,
}

impl NodeBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_expanded: 0,
        }
    }
}

impl TerminationCondition for NodeBudget {
    fn should_stop(&mut self) -> bool {
        self.num_expanded >= self.budget
    }

    fn node_has_been_expanded(&mut self) {
        self.num_expanded += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_after_budget_is_spent() {
        let mut budget = NodeBudget::new(2);

        assert!(!budget.should_stop());
        budget.node_has_been_expanded();
        assert!(!budget.should_stop());
        budget.node_has_been_expanded();
        assert!(budget.should_stop());
    }
}
