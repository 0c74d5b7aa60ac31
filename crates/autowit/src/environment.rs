//! Runtime environment mapping variable names to field values

use indexmap::IndexMap;
use serde::Serialize;

use crate::field::Fq;

/// The mutable variable store threaded through a single execution run.
///
/// A name is bound at most once at a time; assigning to an existing name
/// overwrites its value (variables are mutable cells, not single-assignment).
/// Insertion order is preserved so the final witness lists variables in
/// first-assignment order.
///
/// An environment is owned by exactly one run. Independent runs must each
/// construct their own.
///
/// # Example
///
/// ```
/// use autowit::{Environment, Fq};
///
/// let mut env = Environment::new();
/// env.assign("x", Fq::from(1));
/// env.assign("x", Fq::from(10)); // Overwrites
///
/// assert_eq!(env.get("x"), Some(&Fq::from(10)));
/// assert_eq!(env.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: IndexMap<String, Fq>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, overwriting any existing binding.
    pub fn assign(&mut self, name: impl Into<String>, value: Fq) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Fq> {
        self.bindings.get(name)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterate over bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fq)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Remove all bindings (reset to initial state).
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
