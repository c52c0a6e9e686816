//! Conjunctive matching of a rule's premises against a fact set.
//!
//! The premise conjunction is evaluated as a relational join: a working list
//! of environments with one join step per premise, each step
//! cross-multiplying the live environments against every fact. Brute force
//! with no indexing, O(premises × environments × facts) per rule. That is
//! fine for the small symbolic fact bases this crate targets; it is not a
//! query engine.

use super::fact::FactSet;
use super::pattern::{AtomPattern, Bindings};
use super::unify::unify;
use crate::rules::Rule;

/// All environments under which every premise of `rule` is simultaneously
/// satisfied by some fact in `facts`.
///
/// Premises are evaluated left to right; order affects only how fast the
/// working list shrinks, not the result. A rule with no premises yields no
/// matches: it is a no-op, not an unconditional fact.
pub fn find_rule_matches(rule: &Rule, facts: &FactSet) -> Vec<Bindings> {
    if rule.premises.is_empty() {
        return Vec::new();
    }

    let mut envs = vec![Bindings::new()];
    for premise in &rule.premises {
        envs = join_step(premise, &envs, facts);
        if envs.is_empty() {
            // This premise matched nothing: the rule cannot fire at all.
            return Vec::new();
        }
    }
    envs
}

/// One join step: extend every live environment against every fact.
fn join_step(premise: &AtomPattern, envs: &[Bindings], facts: &FactSet) -> Vec<Bindings> {
    let mut extended = Vec::new();
    for env in envs {
        for fact in facts.iter() {
            if let Some(ext) = unify(premise, fact, env) {
                extended.push(ext);
            }
        }
    }
    extended
}
