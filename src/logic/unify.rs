//! Unification of one premise pattern against one ground fact.

use super::fact::Fact;
use super::pattern::{AtomPattern, Bindings};

/// Try to unify `pattern` against `fact` under an existing environment.
///
/// Fails (returns `None`) on a predicate mismatch, an arity mismatch, or a
/// binding conflict (a pattern variable already bound to a different
/// constant). On success returns an extended copy of `env`; the input
/// environment is never mutated, so a caller can fan out many candidate
/// extensions from the same parent.
///
/// Mismatches are ordinary match failures, not errors: the caller filters
/// them out silently.
pub fn unify(pattern: &AtomPattern, fact: &Fact, env: &Bindings) -> Option<Bindings> {
    if pattern.predicate != fact.predicate {
        return None;
    }
    if pattern.args.len() != fact.args.len() {
        return None;
    }

    let mut extended = env.clone();
    for (var, constant) in pattern.args.iter().zip(&fact.args) {
        match extended.lookup(var) {
            Some(bound) if bound != constant => return None,
            Some(_) => {}
            None => extended.bind(var.clone(), constant.clone()),
        }
    }
    Some(extended)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> AtomPattern {
        AtomPattern::new("located_in", ["A", "B"])
    }

    fn fact() -> Fact {
        Fact::new("located_in", ["Paris", "France"])
    }

    #[test]
    fn binds_fresh_variables() {
        let env = unify(&pattern(), &fact(), &Bindings::new()).unwrap();
        assert_eq!(env.lookup("A"), Some("Paris"));
        assert_eq!(env.lookup("B"), Some("France"));
    }

    #[test]
    fn predicate_mismatch_fails() {
        let other = Fact::new("capital_of", ["Paris", "France"]);
        assert!(unify(&pattern(), &other, &Bindings::new()).is_none());
    }

    #[test]
    fn arity_mismatch_fails() {
        let unary = Fact::new("located_in", ["Paris"]);
        assert!(unify(&pattern(), &unary, &Bindings::new()).is_none());
    }

    #[test]
    fn conflicting_binding_fails() {
        let env: Bindings = [("A", "Lyon")].into_iter().collect();
        assert!(unify(&pattern(), &fact(), &env).is_none());
    }

    #[test]
    fn consistent_binding_extends() {
        let env: Bindings = [("A", "Paris")].into_iter().collect();
        let extended = unify(&pattern(), &fact(), &env).unwrap();
        assert_eq!(extended.lookup("B"), Some("France"));
    }

    #[test]
    fn repeated_variable_must_match_both_positions() {
        let reflexive = AtomPattern::new("located_in", ["A", "A"]);
        assert!(unify(&reflexive, &fact(), &Bindings::new()).is_none());

        let self_loop = Fact::new("located_in", ["X", "X"]);
        let env = unify(&reflexive, &self_loop, &Bindings::new()).unwrap();
        assert_eq!(env.lookup("A"), Some("X"));
    }

    #[test]
    fn input_environment_is_untouched() {
        let env: Bindings = [("A", "Paris")].into_iter().collect();
        let _ = unify(&pattern(), &fact(), &env).unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env.lookup("B"), None);
    }
}
