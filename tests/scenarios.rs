//! End-to-end scenarios and algebraic properties of the scoring pipeline.
//!
//! These tests exercise the public API the way the experiment layer uses it:
//! build fact sets, saturate under a rule set, and score explanations.

use logiscore::logic::{
    AtomPattern, Fact, FactSet, apply_rule_once, logical_metrics, saturate, saturate_with_stats,
};
use logiscore::rules::{Rule, RuleSet};

fn located(a: &str, b: &str) -> Fact {
    Fact::new("located_in", [a, b])
}

fn transitivity() -> RuleSet {
    RuleSet::from_rules(vec![
        Rule::new(
            "located-in-transitive",
            AtomPattern::new("located_in", ["A", "C"]),
        )
        .with_premises(vec![
            AtomPattern::new("located_in", ["A", "B"]),
            AtomPattern::new("located_in", ["B", "C"]),
        ])
        .with_description("containment is transitive"),
    ])
}

fn paris_chunk() -> FactSet {
    [located("Paris", "France"), located("France", "Europe")]
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn correct_explanation_has_full_precision() {
    let explanation: FactSet = [located("Paris", "Europe")].into_iter().collect();
    let relevant = vec!["located_in".to_string()];
    let report = logical_metrics(&paris_chunk(), &explanation, &transitivity(), Some(&relevant));

    assert!(report.closure.contains(&located("Paris", "Europe")));
    assert_eq!(report.true_positives.len(), 1);
    assert!(report.true_positives.contains(&located("Paris", "Europe")));
    assert!(report.false_positives.is_empty());
    assert_eq!(report.precision, 1.0);

    // The chunk's own facts sit in the relevant closure, so an explanation
    // stating only the derived fact leaves them as false negatives.
    assert_eq!(report.false_negatives.len(), 2);
    assert!((report.recall - 1.0 / 3.0).abs() < 1e-12);
    assert!((report.f1 - 0.5).abs() < 1e-12);
}

#[test]
fn incorrect_explanation_scores_zero() {
    let explanation: FactSet = [located("Paris", "Brazil")].into_iter().collect();
    let relevant = vec!["located_in".to_string()];
    let report = logical_metrics(&paris_chunk(), &explanation, &transitivity(), Some(&relevant));

    assert!(report.true_positives.is_empty());
    assert_eq!(report.false_positives.len(), 1);
    assert!(report.false_positives.contains(&located("Paris", "Brazil")));
    assert!(report.false_negatives.contains(&located("Paris", "Europe")));
    assert!(report.false_negatives.contains(&located("Paris", "France")));
    assert!(report.false_negatives.contains(&located("France", "Europe")));
    assert_eq!(report.precision, 0.0);
    assert_eq!(report.recall, 0.0);
    assert_eq!(report.f1, 0.0);
}

#[test]
fn relevant_filter_excludes_other_predicates_from_the_metric() {
    // A chunk with a fact outside the located_in family: without the filter
    // it counts against recall, with the filter it does not.
    let mut chunk = paris_chunk();
    chunk.insert(Fact::new("capital_of", ["Paris", "France"]));
    let explanation: FactSet = [located("Paris", "Europe")].into_iter().collect();

    let unfiltered = logical_metrics(&chunk, &explanation, &transitivity(), None);
    assert_eq!(unfiltered.relevant_closure, unfiltered.closure);
    assert_eq!(unfiltered.closure.len(), 4);
    assert_eq!(unfiltered.false_negatives.len(), 3);
    assert!((unfiltered.recall - 0.25).abs() < 1e-12);

    let relevant = vec!["located_in".to_string()];
    let filtered = logical_metrics(&chunk, &explanation, &transitivity(), Some(&relevant));
    assert_eq!(filtered.relevant_closure.len(), 3);
    assert_eq!(filtered.false_negatives.len(), 2);
    assert!(filtered.recall > unfiltered.recall);
    assert_eq!(filtered.precision, unfiltered.precision);
}

// ---------------------------------------------------------------------------
// Closure properties
// ---------------------------------------------------------------------------

#[test]
fn closure_is_monotone() {
    let facts = paris_chunk();
    let closure = saturate(&facts, &transitivity());
    assert!(facts.is_subset(&closure));

    let empty_rules = RuleSet::from_rules(Vec::new());
    let unchanged = saturate(&facts, &empty_rules);
    assert_eq!(unchanged, facts);
}

#[test]
fn saturation_is_idempotent() {
    let rules = transitivity();
    let closure = saturate(&paris_chunk(), &rules);
    assert_eq!(saturate(&closure, &rules), closure);
}

#[test]
fn closure_is_independent_of_rule_order() {
    let rules = vec![
        Rule::new(
            "located-in-transitive",
            AtomPattern::new("located_in", ["A", "C"]),
        )
        .with_premises(vec![
            AtomPattern::new("located_in", ["A", "B"]),
            AtomPattern::new("located_in", ["B", "C"]),
        ]),
        Rule::new(
            "capital-implies-located",
            AtomPattern::new("located_in", ["A", "B"]),
        )
        .with_premises(vec![AtomPattern::new("capital_of", ["A", "B"])]),
    ];
    let mut reversed = rules.clone();
    reversed.reverse();

    let mut facts = paris_chunk();
    facts.insert(Fact::new("capital_of", ["Madrid", "Spain"]));
    facts.insert(located("Spain", "Europe"));

    let forward = saturate(&facts, &RuleSet::from_rules(rules));
    let backward = saturate(&facts, &RuleSet::from_rules(reversed));
    assert_eq!(forward, backward);
    // capital_of feeds the transitive chain regardless of which rule ran first.
    assert!(forward.contains(&located("Madrid", "Europe")));
}

#[test]
fn every_derived_fact_is_justified() {
    let mut facts = paris_chunk();
    facts.insert(located("Europe", "Earth"));
    let rules = transitivity();
    let closure = saturate(&facts, &rules);

    let derived = closure.difference(&facts);
    for fact in derived.iter() {
        let single: FactSet = [fact.clone()].into_iter().collect();
        let without = closure.difference(&single);
        let rederived = rules
            .rules
            .iter()
            .any(|rule| apply_rule_once(rule, &without).contains(fact));
        assert!(rederived, "{fact} has no justifying rule application");
    }
}

#[test]
fn stats_count_passes_and_firings() {
    let facts: FactSet = [
        located("a", "b"),
        located("b", "c"),
        located("c", "d"),
        located("d", "e"),
    ]
    .into_iter()
    .collect();
    let (closure, stats) = saturate_with_stats(&facts, &transitivity());

    // All 10 ordered containments of the 5-element chain.
    assert_eq!(closure.len(), 10);
    assert_eq!(stats.derived, 6);
    assert_eq!(stats.rule_firings["located-in-transitive"], 6);
    assert!(stats.passes >= 3);
}

// ---------------------------------------------------------------------------
// Metric bounds
// ---------------------------------------------------------------------------

#[test]
fn scores_stay_in_unit_interval() {
    let explanations = [
        FactSet::new(),
        [located("Paris", "Europe")].into_iter().collect(),
        [located("Paris", "Brazil")].into_iter().collect(),
        [located("Paris", "Europe"), located("Paris", "Brazil")]
            .into_iter()
            .collect(),
        paris_chunk(),
    ];

    for explanation in &explanations {
        let report = logical_metrics(&paris_chunk(), explanation, &transitivity(), None);
        for score in [report.precision, report.recall, report.f1] {
            assert!((0.0..=1.0).contains(&score));
        }
        assert_eq!(
            report.f1 == 0.0,
            report.precision + report.recall == 0.0,
            "f1 vanishes exactly when precision and recall both do"
        );
    }
}

#[test]
fn precision_one_requires_supported_nonempty_explanation() {
    // FP empty and TP nonempty: precision is exactly 1.
    let supported: FactSet = [located("Paris", "France")].into_iter().collect();
    let report = logical_metrics(&paris_chunk(), &supported, &transitivity(), None);
    assert_eq!(report.precision, 1.0);

    // TP and FP both empty: the zero-denominator rule yields 0, not 1.
    let report = logical_metrics(&paris_chunk(), &FactSet::new(), &transitivity(), None);
    assert!(report.true_positives.is_empty() && report.false_positives.is_empty());
    assert_eq!(report.precision, 0.0);
}

#[test]
fn unbound_conclusion_variable_never_produces_facts() {
    let rules = RuleSet::from_rules(vec![
        Rule::new("bad", AtomPattern::new("located_in", ["A", "D"])).with_premises(vec![
            AtomPattern::new("located_in", ["A", "B"]),
        ]),
    ]);

    let closure = saturate(&paris_chunk(), &rules);
    assert_eq!(closure, paris_chunk());

    let report = logical_metrics(&paris_chunk(), &FactSet::new(), &rules, None);
    assert_eq!(report.closure, paris_chunk());
}
