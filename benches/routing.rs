//! Benchmarks for route handling.
//!
//! These benchmarks measure:
//! - Normalizing raw address-bar fragments into routes
//! - Resolving routes against the site's route table
//! - A full navigation through a location, dispatcher and page render

use std::{hint::black_box, rc::Rc};

use bcbites::{App, Page, SiteConfig, pages::routes};
use bcbites_router::{MemoryLocation, Route};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const FRAGMENTS: &[&str] = &["", "#", "#/", "#/schedule", "##/contact", "#/no-such-page"];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_fragment");
    for fragment in FRAGMENTS {
        group.bench_with_input(BenchmarkId::from_parameter(fragment), fragment, |b, f| {
            b.iter(|| Route::from_fragment(black_box(f)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let table = routes();
    let hit = Route::from("/about");
    let miss = Route::from("/menu");

    let mut group = c.benchmark_group("resolve");
    group.bench_function("last_pattern", |b| {
        b.iter(|| table.resolve(black_box(&hit)));
    });
    group.bench_function("not_found", |b| {
        b.iter(|| table.resolve(black_box(&miss)));
    });
    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let location = Rc::new(MemoryLocation::new());
    let Ok(app) = App::new(location, SiteConfig::default()) else {
        return;
    };

    c.bench_function("navigate_and_mount", |b| {
        let mut pages = [Page::Schedule, Page::Contact].into_iter().cycle();
        b.iter(|| {
            if let Some(page) = pages.next() {
                app.navigate(page.path());
            }
            black_box(app.page())
        });
    });
}

criterion_group!(benches, bench_normalize, bench_resolve, bench_navigate);
criterion_main!(benches);
