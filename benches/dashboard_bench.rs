use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use gapminder_dash::api::Dashboard;
use gapminder_dash::charts::{render_bar, render_line};
use gapminder_dash::core::Dataset;
use gapminder_dash::interaction::ControlChange;

fn bench_dataset_load(c: &mut Criterion) {
    c.bench_function("dataset_load_bundled", |b| {
        b.iter(|| Dataset::load().expect("bundled dataset"))
    });
}

fn bench_line_render_all_countries(c: &mut Criterion) {
    let dataset = Dataset::load().expect("bundled dataset");
    let countries = dataset.distinct_countries().to_vec();

    c.bench_function("line_render_all_countries", |b| {
        b.iter(|| {
            render_line(black_box(&dataset), black_box(&countries), black_box("lifeExp"))
                .expect("render")
        })
    });
}

fn bench_bar_render(c: &mut Criterion) {
    let dataset = Dataset::load().expect("bundled dataset");

    c.bench_function("bar_render_top15", |b| {
        b.iter(|| render_bar(black_box(&dataset), black_box(1977)).expect("render"))
    });
}

fn bench_year_change_round_trip(c: &mut Criterion) {
    let mut dashboard = Dashboard::new(Arc::new(Dataset::load().expect("bundled dataset")));
    let years = [1952, 2007];
    let mut index = 0usize;

    c.bench_function("year_change_with_contract_json", |b| {
        b.iter(|| {
            index = (index + 1) % years.len();
            let batch = dashboard
                .apply(&ControlChange::year(years[index]))
                .expect("apply");
            let _ = batch
                .to_json_contract_v1()
                .to_json_string()
                .expect("json");
        })
    });
}

criterion_group!(
    benches,
    bench_dataset_load,
    bench_line_render_all_countries,
    bench_bar_render,
    bench_year_change_round_trip
);
criterion_main!(benches);
