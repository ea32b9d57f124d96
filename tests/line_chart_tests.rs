use gapminder_dash::charts::{ChartKind, render_line};
use gapminder_dash::core::{Continent, Dataset, Record};
use gapminder_dash::DashError;

fn countries(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn empty_selection_renders_nothing() {
    let dataset = Dataset::load().expect("bundled dataset");
    let rendered = render_line(&dataset, &[], "pop").expect("render");
    assert!(rendered.is_none());
}

#[test]
fn us_and_china_population_has_two_full_series() {
    let dataset = Dataset::load().expect("bundled dataset");
    let spec = render_line(&dataset, &countries(&["United States", "China"]), "pop")
        .expect("render")
        .expect("chart");

    assert_eq!(spec.kind, ChartKind::Line);
    assert_eq!(spec.title, "Dynamics of pop by country");
    assert_eq!(spec.y_title.as_deref(), Some("pop"));

    let series: Vec<_> = spec.line_traces().collect();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "China");
    assert_eq!(series[1].name, "United States");
    for trace in series {
        assert_eq!(trace.x, dataset.distinct_years());
        assert_eq!(trace.x.len(), trace.y.len());
    }
}

#[test]
fn series_follow_dataset_order_not_selection_order() {
    let dataset = Dataset::from_records(vec![
        Record::new("Peru", Continent::Americas, 1952, 300, 30.0, 50.0),
        Record::new("Chad", Continent::Africa, 1952, 100, 10.0, 40.0),
        Record::new("Peru", Continent::Americas, 1957, 320, 31.0, 51.0),
        Record::new("Chad", Continent::Africa, 1957, 120, 12.0, 42.0),
    ])
    .expect("dataset");

    let spec = render_line(&dataset, &countries(&["Chad", "Atlantis", "Peru"]), "pop")
        .expect("render")
        .expect("chart");
    let names: Vec<&str> = spec.line_traces().map(|trace| trace.name.as_str()).collect();
    assert_eq!(names, vec!["Peru", "Chad"]);
}

#[test]
fn series_values_follow_the_selected_measure() {
    let dataset = Dataset::from_records(vec![
        Record::new("Chad", Continent::Africa, 1952, 100, 10.0, 40.0),
        Record::new("Chad", Continent::Africa, 1957, 120, 12.0, 42.0),
        Record::new("Peru", Continent::Americas, 1952, 300, 30.0, 50.0),
    ])
    .expect("dataset");

    let spec = render_line(&dataset, &countries(&["Chad"]), "lifeExp")
        .expect("render")
        .expect("chart");
    let series: Vec<_> = spec.line_traces().collect();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].x, vec![1952, 1957]);
    assert_eq!(series[0].y, vec![40.0, 42.0]);
}

#[test]
fn unknown_field_is_a_render_error() {
    let dataset = Dataset::load().expect("bundled dataset");
    let err = render_line(&dataset, &countries(&["China"]), "gdp").expect_err("must fail");
    assert!(matches!(err, DashError::UnknownMeasure(field) if field == "gdp"));
}

#[test]
fn plotly_figure_has_one_line_trace_per_country() {
    let dataset = Dataset::load().expect("bundled dataset");
    let spec = render_line(&dataset, &countries(&["India", "Japan", "Kenya"]), "gdpPercap")
        .expect("render")
        .expect("chart");
    let figure = spec.to_plotly_figure();

    let data = figure["data"].as_array().expect("data array");
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["type"], "scatter");
    assert_eq!(data[0]["mode"], "lines");
    assert_eq!(data[2]["name"], "Kenya");
    assert_eq!(figure["layout"]["title"]["text"], "Dynamics of gdpPercap by country");
    assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "year");
}
