//! Benchmarks for forward-chaining saturation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use logiscore::logic::{AtomPattern, Fact, FactSet, logical_metrics, saturate};
use logiscore::rules::{Rule, RuleSet};

fn transitivity() -> RuleSet {
    RuleSet::from_rules(vec![
        Rule::new(
            "located-in-transitive",
            AtomPattern::new("located_in", ["A", "C"]),
        )
        .with_premises(vec![
            AtomPattern::new("located_in", ["A", "B"]),
            AtomPattern::new("located_in", ["B", "C"]),
        ]),
    ])
}

fn chain(n: usize) -> FactSet {
    (0..n)
        .map(|i| Fact::new("located_in", [format!("n{i}"), format!("n{}", i + 1)]))
        .collect()
}

fn bench_saturate_chain(c: &mut Criterion) {
    let rules = transitivity();
    let facts = chain(20);

    c.bench_function("saturate_chain_20", |bench| {
        bench.iter(|| black_box(saturate(&facts, &rules)))
    });
}

fn bench_metrics(c: &mut Criterion) {
    let rules = transitivity();
    let facts = chain(10);
    let explanation: FactSet = [Fact::new("located_in", ["n0", "n10"])].into_iter().collect();

    c.bench_function("logical_metrics_chain_10", |bench| {
        bench.iter(|| black_box(logical_metrics(&facts, &explanation, &rules, None)))
    });
}

criterion_group!(benches, bench_saturate_chain, bench_metrics);
criterion_main!(benches);
