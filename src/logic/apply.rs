//! Single application of one rule over a fact set.

use super::fact::{Fact, FactSet};
use super::matcher::find_rule_matches;
use super::pattern::{AtomPattern, Bindings};
use crate::rules::Rule;

/// Apply `rule` to `facts` once, returning only the facts it derives that
/// are not already present.
///
/// Each satisfying environment instantiates the conclusion by substituting
/// its bound constants. An environment that leaves a conclusion variable
/// unbound (the variable never occurred in a premise) is dropped silently:
/// an under-constrained derivation is non-productive, not an error.
///
/// Callers fold the returned delta into their ambient fact set.
pub fn apply_rule_once(rule: &Rule, facts: &FactSet) -> FactSet {
    let mut delta = FactSet::new();
    for env in find_rule_matches(rule, facts) {
        let Some(derived) = instantiate(&rule.conclusion, &env) else {
            continue;
        };
        if !facts.contains(&derived) {
            delta.insert(derived);
        }
    }
    delta
}

/// Substitute bound constants into a conclusion pattern. `None` when some
/// conclusion variable has no binding (range-restriction violation).
fn instantiate(conclusion: &AtomPattern, env: &Bindings) -> Option<Fact> {
    let mut args = Vec::with_capacity(conclusion.args.len());
    for var in &conclusion.args {
        args.push(env.lookup(var)?.to_string());
    }
    Some(Fact {
        predicate: conclusion.predicate.clone(),
        args,
    })
}
