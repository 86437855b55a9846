use super::Assignment;
use super::BinaryRelation;
use super::VariableId;

/// The constraint `relation(first, second)`.
#[derive(Clone, Copy, Debug)]
pub struct BinaryConstraint<R> {
    first: VariableId,
    second: VariableId,
    relation: R,
}

impl<R> BinaryConstraint<R> {
    pub fn new(first: VariableId, second: VariableId, relation: R) -> Self {
        BinaryConstraint {
            first,
            second,
            relation,
        }
    }

    pub fn first(&self) -> VariableId {
        self.first
    }

    pub fn second(&self) -> VariableId {
        self.second
    }

    pub fn relation(&self) -> &R {
        &self.relation
    }

    pub fn scope(&self) -> [VariableId; 2] {
        [self.first, self.second]
    }

    /// Given one variable in the scope, returns the other one.
    pub fn other(&self, variable: VariableId) -> VariableId {
        if variable == self.first {
            self.second
        } else {
            self.first
        }
    }

    /// Evaluates the relation with `value` assigned to `variable` and `other_value` to the other
    /// variable in the scope, respecting the argument order of the constraint.
    pub fn holds_for<Value>(&self, variable: VariableId, value: &Value, other_value: &Value) -> bool
    where
        R: BinaryRelation<Value>,
    {
        if variable == self.first {
            self.relation.holds(value, other_value)
        } else {
            self.relation.holds(other_value, value)
        }
    }

    /// Returns `None` if one of the variables in the scope is unassigned, otherwise whether the
    /// relation holds.
    pub fn is_satisfied<Value>(&self, assignment: &Assignment<Value>) -> Option<bool>
    where
        R: BinaryRelation<Value>,
    {
        let first = assignment.value(self.first)?;
        let second = assignment.value(self.second)?;

        Some(self.relation.holds(first, second))
    }
}
