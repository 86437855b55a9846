//! The binary constraint satisfaction problem container.
//!
//! A [`Csp`] owns a set of variables, each with a name and an initial (ordered) domain, and a set
//! of [`BinaryConstraint`]s whose relation decides which pairs of values are compatible. The
//! container is immutable once it is handed to a searcher; all search state lives in
//! [`Assignment`]s and [`Domains`] which are cheap to clone and can be hashed.
mod assignment;
mod constraint;
mod domains;
mod relation;
mod variable_id;

pub use assignment::*;
pub use constraint::*;
pub use domains::*;
pub use relation::*;
pub use variable_id::*;

use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::slotplan_assert_simple;

#[derive(Clone, Debug)]
pub struct Csp<Value, R> {
    names: KeyedVec<VariableId, Box<str>>,
    initial_domains: Domains<Value>,
    constraints: KeyedVec<ConstraintId, BinaryConstraint<R>>,
    /// For every variable the constraints which have it in their scope.
    constraints_on: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl<Value, R> Default for Csp<Value, R> {
    fn default() -> Self {
        Self {
            names: KeyedVec::default(),
            initial_domains: Domains::default(),
            constraints: KeyedVec::default(),
            constraints_on: KeyedVec::default(),
        }
    }
}

impl<Value, R> Csp<Value, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable with the given domain. The domain is expected to be in the order in which
    /// the searchers should try its values.
    pub fn add_variable(&mut self, name: impl Into<Box<str>>, domain: Vec<Value>) -> VariableId {
        let variable = self.names.push(name.into());
        let _ = self.constraints_on.push(Vec::new());
        let domain_variable = self.initial_domains.push(domain);

        slotplan_assert_simple!(variable == domain_variable);

        variable
    }

    /// Adds the constraint `relation(first, second)`.
    pub fn add_constraint(
        &mut self,
        first: VariableId,
        second: VariableId,
        relation: R,
    ) -> ConstraintId {
        slotplan_assert_simple!(
            first.index() < self.num_variables() && second.index() < self.num_variables(),
            "constraint over unknown variables {first} and {second}"
        );

        let constraint_id = self
            .constraints
            .push(BinaryConstraint::new(first, second, relation));

        self.constraints_on[first].push(constraint_id);
        if second != first {
            self.constraints_on[second].push(constraint_id);
        }

        constraint_id
    }

    pub fn num_variables(&self) -> usize {
        self.names.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.names.keys()
    }

    pub fn name(&self, variable: VariableId) -> &str {
        &self.names[variable]
    }

    /// Looks up a variable by its name.
    pub fn variable_named(&self, name: &str) -> Option<VariableId> {
        self.names
            .iter_keyed()
            .find(|(_, candidate)| candidate.as_ref() == name)
            .map(|(variable, _)| variable)
    }

    pub fn domain(&self, variable: VariableId) -> &[Value] {
        self.initial_domains.domain(variable)
    }

    /// The domains the variables were created with.
    pub fn initial_domains(&self) -> &Domains<Value> {
        &self.initial_domains
    }

    pub fn constraint(&self, constraint_id: ConstraintId) -> &BinaryConstraint<R> {
        &self.constraints[constraint_id]
    }

    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &BinaryConstraint<R>)> {
        self.constraints.iter_keyed()
    }

    pub fn constraints_on(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_on[variable]
    }
}

impl<Value, R: BinaryRelation<Value>> Csp<Value, R> {
    /// Returns `true` if every constraint whose scope is fully assigned in `assignment` holds.
    /// Constraints with an unassigned variable are ignored.
    pub fn consistent(&self, assignment: &Assignment<Value>) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied(assignment).unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `first < second` on integers.
    #[derive(Clone, Copy, Debug)]
    struct LessThan;

    impl BinaryRelation<i32> for LessThan {
        fn holds(&self, first: &i32, second: &i32) -> bool {
            first < second
        }

        fn name(&self) -> &str {
            "less-than"
        }
    }

    fn two_variable_csp() -> (Csp<i32, LessThan>, VariableId, VariableId) {
        let mut csp = Csp::new();
        let x = csp.add_variable("x", vec![1, 2, 3]);
        let y = csp.add_variable("y", vec![1, 2, 3]);
        let _ = csp.add_constraint(x, y, LessThan);
        (csp, x, y)
    }

    #[test]
    fn constraints_are_indexed_by_both_variables() {
        let (csp, x, y) = two_variable_csp();

        assert_eq!(csp.constraints_on(x).len(), 1);
        assert_eq!(csp.constraints_on(y).len(), 1);
        assert_eq!(csp.num_constraints(), 1);
    }

    #[test]
    fn partial_assignment_is_consistent() {
        let (csp, x, _) = two_variable_csp();
        let assignment = Assignment::new(csp.num_variables()).with(x, 3);

        assert!(csp.consistent(&assignment));
    }

    #[test]
    fn violated_constraint_is_detected() {
        let (csp, x, y) = two_variable_csp();
        let assignment = Assignment::new(csp.num_variables()).with(x, 3).with(y, 1);

        assert!(!csp.consistent(&assignment));
    }

    #[test]
    fn variables_can_be_found_by_name() {
        let (csp, _, y) = two_variable_csp();

        assert_eq!(csp.variable_named("y"), Some(y));
        assert_eq!(csp.variable_named("z"), None);
    }
}
