// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use onlyfounders_model::Catalog;
use onlyfounders_query::{discover, FilterState};

fn bench_discover(c: &mut Criterion) {
    let Ok(catalog) = Catalog::builtin() else {
        return;
    };
    let mut projects = Vec::new();
    for _ in 0..128 {
        projects.extend(catalog.projects.iter().cloned());
    }
    let Ok(state) = FilterState::from_params(Some("protocol"), Some("DeFi"), None, Some("most-funded"))
    else {
        return;
    };
    c.bench_function("discover_filter_sort_1k", |b| {
        b.iter(|| discover(black_box(&projects), black_box(&state)).len())
    });
}

criterion_group!(benches, bench_discover);
criterion_main!(benches);
