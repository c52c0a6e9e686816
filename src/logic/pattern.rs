//! Atom patterns and variable environments.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Atom pattern
// ---------------------------------------------------------------------------

/// The schema-side shape of a rule premise or conclusion: a predicate name
/// plus an ordered tuple of variable names.
///
/// Every argument position is a variable. This representation cannot pin an
/// argument to a literal constant (there is no way to write
/// `located_in(A, "France")` as a premise); a premise constrains arguments
/// only through variable sharing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomPattern {
    pub predicate: String,
    /// Ordered variable names.
    #[serde(default)]
    pub args: Vec<String>,
}

impl AtomPattern {
    /// Build a pattern from a predicate name and its variables.
    pub fn new<P, A, S>(predicate: P, args: A) -> Self
    where
        P: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            predicate: predicate.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of argument positions.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl fmt::Display for AtomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.predicate, self.args.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

/// A variable → constant environment built incrementally while matching
/// premises.
///
/// Internally consistent: a variable bound twice must bind to the same
/// constant, which [`super::unify::unify`] enforces. Extension is
/// copy-on-write, so matching fans out many candidate environments from one
/// parent without interference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    map: HashMap<String, String>,
}

impl Bindings {
    /// The empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The constant bound to `var`, if any.
    pub fn lookup(&self, var: &str) -> Option<&str> {
        self.map.get(var).map(String::as_str)
    }

    /// Bind `var` to `constant`. Callers check consistency first.
    pub fn bind(&mut self, var: impl Into<String>, constant: impl Into<String>) {
        self.map.insert(var.into(), constant.into());
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (variable, constant) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
