use super::VariableId;
use crate::containers::KeyedVec;

/// A (partial) assignment of values to the variables of a [`Csp`](super::Csp).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment<Value> {
    values: KeyedVec<VariableId, Option<Value>>,
    num_assigned: usize,
}

impl<Value: Clone> Assignment<Value> {
    /// An assignment over `num_variables` variables in which nothing is assigned.
    pub fn new(num_variables: usize) -> Self {
        Assignment {
            values: KeyedVec::filled(num_variables, None),
            num_assigned: 0,
        }
    }

    /// Returns a copy of this assignment that additionally assigns `value` to `variable`.
    pub fn with(&self, variable: VariableId, value: Value) -> Self {
        let mut extended = self.clone();
        extended.assign(variable, value);
        extended
    }
}

impl<Value> Assignment<Value> {
    pub fn assign(&mut self, variable: VariableId, value: Value) {
        if self.values[variable].replace(value).is_none() {
            self.num_assigned += 1;
        }
    }

    pub fn value(&self, variable: VariableId) -> Option<&Value> {
        self.values.get(variable).and_then(Option::as_ref)
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.value(variable).is_some()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.values.len()
    }

    /// Iterates over the assigned variables and their values, in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Value)> {
        self.values
            .iter_keyed()
            .filter_map(|(variable, value)| value.as_ref().map(|value| (variable, value)))
    }

    /// The variables without a value, in variable order.
    pub fn unassigned(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.values
            .iter_keyed()
            .filter(|(_, value)| value.is_none())
            .map(|(variable, _)| variable)
    }
}

impl<Value> FromIterator<Value> for Assignment<Value> {
    /// Builds a complete assignment from the values of the variables in variable order.
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let values = iter.into_iter().map(Some).collect::<KeyedVec<_, _>>();
        let num_assigned = values.len();
        Assignment {
            values,
            num_assigned,
        }
    }
}
