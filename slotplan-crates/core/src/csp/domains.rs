use super::Assignment;
use super::VariableId;
use crate::containers::KeyedVec;

/// The current domain of every variable; the values keep the order of the initial domains.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Domains<Value> {
    domains: KeyedVec<VariableId, Vec<Value>>,
}

impl<Value> Default for Domains<Value> {
    fn default() -> Self {
        Domains {
            domains: KeyedVec::default(),
        }
    }
}

impl<Value> Domains<Value> {
    pub(crate) fn push(&mut self, domain: Vec<Value>) -> VariableId {
        self.domains.push(domain)
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, variable: VariableId) -> &[Value] {
        &self.domains[variable]
    }

    pub fn size(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    /// Replaces the domain of `variable` by the single `value`.
    pub fn fix(&mut self, variable: VariableId, value: Value) {
        self.domains[variable] = vec![value];
    }

    /// Keeps only the values of `variable` for which `predicate` holds. Returns `true` if the
    /// domain changed.
    pub fn retain(&mut self, variable: VariableId, predicate: impl FnMut(&Value) -> bool) -> bool {
        let domain = &mut self.domains[variable];
        let size_before = domain.len();
        domain.retain(predicate);
        domain.len() != size_before
    }

    /// The first variable with an empty domain, if any.
    pub fn first_empty(&self) -> Option<VariableId> {
        self.domains
            .iter_keyed()
            .find(|(_, domain)| domain.is_empty())
            .map(|(variable, _)| variable)
    }

    /// Returns `true` if every domain holds exactly one value.
    pub fn all_fixed(&self) -> bool {
        self.domains.iter().all(|domain| domain.len() == 1)
    }
}

impl<Value: Clone> Domains<Value> {
    /// Turns a map of singleton domains into a complete [`Assignment`]; `None` if some domain is
    /// not a singleton.
    pub fn to_assignment(&self) -> Option<Assignment<Value>> {
        self.domains
            .iter()
            .map(|domain| match domain.as_slice() {
                [value] => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}
