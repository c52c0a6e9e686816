//! Forward chaining to a fixpoint.

use std::collections::HashMap;

use super::apply::apply_rule_once;
use super::fact::FactSet;
use crate::rules::RuleSet;

/// Statistics from one saturation run.
#[derive(Debug, Clone, Default)]
pub struct SaturationStats {
    /// Full passes over the rule set, including the final pass that derived
    /// nothing and established the fixpoint.
    pub passes: usize,
    /// Facts derived beyond the initial set.
    pub derived: usize,
    /// Per-rule counts of facts each rule contributed.
    pub rule_firings: HashMap<String, usize>,
}

/// Compute the closure of `facts` under `rules`.
///
/// Repeatedly applies every rule to the growing closure until a full pass
/// derives nothing. Conclusions only reuse constants bound by premises and
/// arities are fixed, so the closure is bounded and the loop terminates
/// without an iteration cap. The result is the least fixpoint containing
/// `facts`: saturating it again is a no-op, and neither the rule order nor
/// the fact iteration order changes the outcome.
pub fn saturate(facts: &FactSet, rules: &RuleSet) -> FactSet {
    saturate_with_stats(facts, rules).0
}

/// [`saturate`], also reporting pass counts and per-rule firings.
pub fn saturate_with_stats(facts: &FactSet, rules: &RuleSet) -> (FactSet, SaturationStats) {
    let mut closure = facts.clone();
    let mut stats = SaturationStats::default();

    let mut changed = true;
    while changed {
        changed = false;
        stats.passes += 1;

        for rule in &rules.rules {
            let delta = apply_rule_once(rule, &closure);
            if delta.is_empty() {
                continue;
            }
            *stats.rule_firings.entry(rule.name.clone()).or_insert(0) += delta.len();
            stats.derived += delta.len();
            closure.merge(delta);
            changed = true;
        }

        tracing::debug!(
            pass = stats.passes,
            facts = closure.len(),
            "saturation pass complete"
        );
    }

    (closure, stats)
}
