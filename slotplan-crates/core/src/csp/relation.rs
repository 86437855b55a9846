use std::fmt::Debug;

/// A relation between the values of two variables.
///
/// The relation is directional: `holds(first, second)` is evaluated with the value of the first
/// variable of a [`BinaryConstraint`](super::BinaryConstraint) as `first`.
pub trait BinaryRelation<Value>: Debug {
    /// Returns `true` if the pair of values is allowed by the relation.
    fn holds(&self, first: &Value, second: &Value) -> bool;

    /// A short name used when logging.
    fn name(&self) -> &str;
}
