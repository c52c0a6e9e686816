//! Ground facts and the set algebra over them.
//!
//! A [`Fact`] is an immutable ground atom: a predicate name plus an ordered
//! tuple of constants. Constants are opaque strings; equality is the only
//! operation the kernel performs on them. [`FactSet`] is the canonical
//! container: duplicates collapse, iteration order is irrelevant.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fact
// ---------------------------------------------------------------------------

/// A ground (variable-free) predicate application, e.g. `located_in(Paris, France)`.
///
/// Two facts are equal iff the predicate and the full argument tuple match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fact {
    pub predicate: String,
    /// Ordered constants. Absent in the wire shape means nullary.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Fact {
    /// Build a fact from a predicate name and its constants.
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

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.predicate, self.args.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Fact set
// ---------------------------------------------------------------------------

/// An unordered, duplicate-free collection of ground facts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    facts: HashSet<Fact>,
}

impl FactSet {
    /// An empty fact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact. Returns `false` if it was already present.
    pub fn insert(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact)
    }

    /// Membership test.
    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate in arbitrary order. No kernel algorithm depends on this order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Union another set into this one.
    pub fn merge(&mut self, other: FactSet) {
        self.facts.extend(other.facts);
    }

    /// Facts present in both sets.
    pub fn intersection(&self, other: &FactSet) -> FactSet {
        self.facts
            .iter()
            .filter(|f| other.contains(f))
            .cloned()
            .collect()
    }

    /// Facts present in `self` but not in `other`.
    pub fn difference(&self, other: &FactSet) -> FactSet {
        self.facts
            .iter()
            .filter(|f| !other.contains(f))
            .cloned()
            .collect()
    }

    /// `true` if every fact in `self` is also in `other`.
    pub fn is_subset(&self, other: &FactSet) -> bool {
        self.facts.iter().all(|f| other.contains(f))
    }

    /// The subset whose predicate is in `predicates`. Names absent from the
    /// set simply contribute nothing.
    pub fn with_predicates(&self, predicates: &[String]) -> FactSet {
        self.facts
            .iter()
            .filter(|f| predicates.iter().any(|p| p == &f.predicate))
            .cloned()
            .collect()
    }

    /// Deterministic export: facts sorted by predicate, then arguments.
    pub fn to_sorted_vec(&self) -> Vec<Fact> {
        let mut facts: Vec<Fact> = self.facts.iter().cloned().collect();
        facts.sort();
        facts
    }
}

impl FromIterator<Fact> for FactSet {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Fact> for FactSet {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        self.facts.extend(iter);
    }
}

impl IntoIterator for FactSet {
    type Item = Fact;
    type IntoIter = std::collections::hash_set::IntoIter<Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.into_iter()
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = std::collections::hash_set::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}

// Serialized as a sorted list of `{predicate, args}` records so output is
// stable across runs despite the unordered backing store.
impl Serialize for FactSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_sorted_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FactSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let facts = Vec::<Fact>::deserialize(deserializer)?;
        Ok(facts.into_iter().collect())
    }
}
