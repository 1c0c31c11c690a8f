use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use covenant_core::models::Severity;
use covenant_graph::TrustGraph;
use test_fixtures::{attestation, StaticVerifier};

/// Wide DAG: 500 nodes, each feeding up to 5 forward nodes.
fn build_wide_dag() -> TrustGraph<StaticVerifier> {
    let mut graph = TrustGraph::new(StaticVerifier::accept());
    let n = 500;
    for i in 0..n {
        for j in 1..=5 {
            let target = i + j;
            if target < n {
                graph.register_dependency(&format!("n{i}"), &format!("n{target}"));
            }
        }
    }
    graph
}

fn bench_critical_breach(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let att = attestation("n0", Severity::Critical);
    c.bench_function("process_breach_critical_wide_dag", |b| {
        b.iter_batched(
            build_wide_dag,
            |mut graph| rt.block_on(graph.process_breach(&att)).unwrap(),
            BatchSize::LargeInput,
        )
    });
}

fn bench_transitive_dependents(c: &mut Criterion) {
    let graph = build_wide_dag();
    c.bench_function("get_dependents_wide_dag", |b| {
        b.iter(|| graph.get_dependents("n0"))
    });
}

criterion_group!(benches, bench_critical_breach, bench_transitive_dependents);
criterion_main!(benches);
