use approx::assert_relative_eq;
use gapminder_dash::charts::{
    BUBBLE_SIZE_MAX, ChartKind, TOP_COUNTRIES, render_bar, render_bubble, render_pie,
};
use gapminder_dash::core::{Continent, Dataset, Record};

#[test]
fn bubble_1952_has_one_point_per_country() {
    let dataset = Dataset::load().expect("bundled dataset");
    let spec = render_bubble(&dataset, 1952, "gdpPercap", "lifeExp", "pop").expect("render");

    assert_eq!(spec.kind, ChartKind::Bubble);
    assert!(spec.title.contains("1952"));

    let trace = spec.bubble_trace().expect("bubble trace");
    let countries_1952 = dataset
        .records()
        .iter()
        .filter(|record| record.year == 1952)
        .count();
    assert_eq!(trace.labels.len(), countries_1952);
    assert_eq!(trace.x.len(), countries_1952);
    assert_eq!(trace.sizes.len(), countries_1952);

    let us = trace
        .labels
        .iter()
        .position(|label| label == "United States")
        .expect("united states point");
    assert_relative_eq!(trace.x[us], 13_990.482_08, max_relative = 1e-9);
    assert_relative_eq!(trace.y[us], 68.44, max_relative = 1e-9);
    assert_relative_eq!(trace.sizes[us], 157_553_000.0);
}

#[test]
fn bubble_figure_uses_area_sizing() {
    let dataset = Dataset::from_records(vec![
        Record::new("Chad", Continent::Africa, 1952, 100, 10.0, 40.0),
        Record::new("Peru", Continent::Americas, 1952, 400, 30.0, 50.0),
    ])
    .expect("dataset");
    let spec = render_bubble(&dataset, 1952, "gdpPercap", "lifeExp", "pop").expect("render");
    let figure = spec.to_plotly_figure();

    let marker = &figure["data"][0]["marker"];
    assert_eq!(marker["sizemode"], "area");
    let size_ref = marker["sizeref"].as_f64().expect("sizeref");
    assert_relative_eq!(size_ref, 2.0 * 400.0 / (BUBBLE_SIZE_MAX * BUBBLE_SIZE_MAX));
    assert_eq!(figure["data"][0]["hovertext"][1], "Peru");
}

#[test]
fn bubble_rejects_unknown_measure() {
    let dataset = Dataset::load().expect("bundled dataset");
    assert!(render_bubble(&dataset, 1952, "gdpPercap", "lifeExp", "size").is_err());
}

#[test]
fn bar_1952_lists_fifteen_most_populous_descending() {
    let dataset = Dataset::load().expect("bundled dataset");
    let spec = render_bar(&dataset, 1952).expect("render");

    assert_eq!(spec.title, "Top 15 countries by population in 1952");
    let trace = spec.bar_trace().expect("bar trace");
    assert_eq!(trace.categories.len(), TOP_COUNTRIES);
    assert_eq!(&trace.categories[..3], &["China", "India", "United States"]);
    assert_eq!(trace.categories[14], "Spain");
    assert!(trace.values.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn bar_keeps_dataset_order_on_ties() {
    let dataset = Dataset::from_records(vec![
        Record::new("Bhutan", Continent::Asia, 1952, 50, 1.0, 40.0),
        Record::new("Andorra", Continent::Europe, 1952, 50, 1.0, 40.0),
        Record::new("Chad", Continent::Africa, 1952, 90, 1.0, 40.0),
        Record::new("Chad", Continent::Africa, 1957, 1_000, 1.0, 40.0),
    ])
    .expect("dataset");

    let spec = render_bar(&dataset, 1952).expect("render");
    let trace = spec.bar_trace().expect("bar trace");
    assert_eq!(trace.categories, vec!["Chad", "Bhutan", "Andorra"]);
    assert_eq!(trace.values, vec![90.0, 50.0, 50.0]);
}

#[test]
fn pie_sums_population_per_continent() {
    let dataset = Dataset::load().expect("bundled dataset");
    let spec = render_pie(&dataset, 2007).expect("render");

    assert!(spec.title.contains("2007"));
    let trace = spec.pie_trace().expect("pie trace");
    assert_eq!(
        trace.labels,
        vec!["Africa", "Americas", "Asia", "Europe", "Oceania"]
    );

    let expected_total: u64 = dataset
        .records()
        .iter()
        .filter(|record| record.year == 2007)
        .map(|record| record.population)
        .sum();
    let total: f64 = trace.values.iter().sum();
    assert_eq!(total, expected_total as f64);

    let oceania = 20_434_176.0 + 4_115_771.0;
    assert_eq!(trace.values[4], oceania);
}

#[test]
fn year_without_rows_renders_empty_series() {
    let dataset = Dataset::load().expect("bundled dataset");
    let bar = render_bar(&dataset, 1900).expect("render");
    assert!(bar.bar_trace().expect("bar trace").categories.is_empty());
    let pie = render_pie(&dataset, 1900).expect("render");
    assert!(pie.pie_trace().expect("pie trace").values.is_empty());
}
