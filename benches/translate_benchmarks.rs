// SPDX-License-Identifier: PMPL-1.0-or-later
// Criterion-based benchmarks for clause translation and script reconstruction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tstp2isar::exchange::translate;
use tstp2isar::parsers::parents;
use tstp2isar::{translate_str, Method};

/// Linear refutation chain of `n` derived clauses over two axioms
fn chain_trace(n: usize) -> String {
    let mut trace = String::from(
        "fof(c_0_0, axiom, (![X]:(p(X)=>q(f(X)))), file('bench.p', ax1)).\n\
         fof(c_0_1, axiom, (![X,Y]:(r(X,Y)<=>r(Y,X))), file('bench.p', ax2)).\n",
    );
    for i in 2..n + 2 {
        let prev = if i == 2 { "c_0_0".to_string() } else { format!("c_0_{}", i - 1) };
        trace.push_str(&format!(
            "cnf(c_0_{}, plain, (~p(X{})|q(f(X{}))|r(a,b)), inference(spm,[status(thm)],[{}, c_0_1, theory(equality)])).\n",
            i, i, i, prev
        ));
    }
    trace
}

fn bench_formula_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula_translation");

    group.bench_function("quantified_implication", |b| {
        b.iter(|| translate(black_box("![X]: (p(X) => q(X))")))
    });

    group.bench_function("nested_applications", |b| {
        b.iter(|| translate(black_box("![X,Y]:?[Z]:(r(f(X,g(Y)),h(Z))<=>(X!=Y|$false))")))
    });

    group.bench_function("annotation_parents", |b| {
        b.iter(|| {
            parents(black_box(
                "inference(sr,[status(thm)],[inference(spm,[status(thm)],[c_0_1, c_0_2]), c_0_3, theory(equality,[symmetry])]), ['proof']",
            ))
        })
    });

    group.finish();
}

fn bench_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction");

    for size in [10usize, 100, 1000] {
        let trace = chain_trace(size);
        for method in [Method::DirectChaining, Method::TableauEmbedding] {
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), size),
                &trace,
                |b, trace| b.iter(|| translate_str(black_box(trace), method)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_formula_translation, bench_reconstruction);
criterion_main!(benches);
