//! Precision/recall/F1 of a candidate explanation against a chunk's closure.

use serde::Serialize;

use super::fact::FactSet;
use super::saturate::saturate;
use crate::rules::RuleSet;

/// Confusion sets and scores for one (chunk, explanation) pair.
///
/// The three fact sets are kept for inspection and serialization; nothing in
/// the kernel persists them. Serializes with each set as a sorted list of
/// `{predicate, args}` records.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReport {
    /// Explanation facts supported by the relevant closure.
    pub true_positives: FactSet,
    /// Explanation facts the relevant closure does not support.
    pub false_positives: FactSet,
    /// Relevant closure facts the explanation fails to state.
    pub false_negatives: FactSet,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Full closure of the chunk facts.
    pub closure: FactSet,
    /// Closure restricted to the relevant predicates (the full closure when
    /// no filter was given).
    pub relevant_closure: FactSet,
}

/// Score how well `explanation_facts` is logically supported by
/// `chunk_facts` under `rules`.
///
/// The chunk facts are saturated to their closure; `relevant_predicates`
/// optionally restricts which closure facts count toward the metric
/// (predicates absent from the closure just contribute nothing). Then
///
/// - TP = explanation ∩ relevant closure
/// - FP = explanation − relevant closure
/// - FN = relevant closure − explanation
///
/// and precision, recall, and F1 are the usual ratios, each defined as 0.0
/// when its denominator is zero.
pub fn logical_metrics(
    chunk_facts: &FactSet,
    explanation_facts: &FactSet,
    rules: &RuleSet,
    relevant_predicates: Option<&[String]>,
) -> MetricReport {
    let closure = saturate(chunk_facts, rules);

    let relevant_closure = match relevant_predicates {
        None => closure.clone(),
        Some(predicates) => closure.with_predicates(predicates),
    };

    let true_positives = explanation_facts.intersection(&relevant_closure);
    let false_positives = explanation_facts.difference(&relevant_closure);
    let false_negatives = relevant_closure.difference(explanation_facts);

    let precision = ratio(
        true_positives.len(),
        true_positives.len() + false_positives.len(),
    );
    let recall = ratio(
        true_positives.len(),
        true_positives.len() + false_negatives.len(),
    );
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    MetricReport {
        true_positives,
        false_positives,
        false_negatives,
        precision,
        recall,
        f1,
        closure,
        relevant_closure,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
