use gapminder_dash::charts::{TOP_COUNTRIES, render_bar, render_bubble, render_line, render_pie};
use gapminder_dash::core::{Dataset, Measure};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

fn dataset() -> Dataset {
    Dataset::load().expect("bundled dataset")
}

fn measure_field() -> impl Strategy<Value = &'static str> {
    select(Measure::ALL.iter().map(|measure| measure.field()).collect::<Vec<_>>())
}

fn dataset_year() -> impl Strategy<Value = i32> {
    select(dataset().distinct_years().to_vec())
}

/// Any subset of the dataset's countries, in arbitrary order.
fn country_selection() -> impl Strategy<Value = Vec<String>> {
    let countries = dataset().distinct_countries().to_vec();
    let max_len = countries.len();
    subsequence(countries, 0..=max_len).prop_shuffle()
}

proptest! {
    #[test]
    fn line_series_cover_selection_in_dataset_order(
        selection in country_selection(),
        field in measure_field(),
    ) {
        let dataset = dataset();
        let rendered = render_line(&dataset, &selection, field).expect("render");
        match rendered {
            None => prop_assert!(selection.is_empty()),
            Some(spec) => {
                prop_assert!(!selection.is_empty());
                let names: Vec<&str> = spec.line_traces().map(|trace| trace.name.as_str()).collect();
                let expected: Vec<&str> = dataset
                    .distinct_countries()
                    .iter()
                    .filter(|country| selection.contains(country))
                    .map(String::as_str)
                    .collect();
                prop_assert_eq!(names, expected);
            }
        }
    }

    #[test]
    fn bar_entries_are_ranked_rows_of_the_year(year in dataset_year()) {
        let dataset = dataset();
        let spec = render_bar(&dataset, year).expect("render");
        let trace = spec.bar_trace().expect("bar trace");

        prop_assert!(trace.categories.len() <= TOP_COUNTRIES);
        prop_assert!(trace.values.windows(2).all(|pair| pair[0] >= pair[1]));
        for (country, value) in trace.categories.iter().zip(&trace.values) {
            let matching = dataset
                .records()
                .iter()
                .any(|record| &record.country == country
                    && record.year == year
                    && record.population as f64 == *value);
            prop_assert!(matching, "{} has no {} row with population {}", country, year, value);
        }
    }

    #[test]
    fn pie_total_matches_year_population(year in dataset_year()) {
        let dataset = dataset();
        let spec = render_pie(&dataset, year).expect("render");
        let trace = spec.pie_trace().expect("pie trace");

        let expected: u64 = dataset
            .records()
            .iter()
            .filter(|record| record.year == year)
            .map(|record| record.population)
            .sum();
        let total: f64 = trace.values.iter().sum();
        prop_assert_eq!(total, expected as f64);
    }

    #[test]
    fn renderers_are_idempotent(
        year in dataset_year(),
        x in measure_field(),
        y in measure_field(),
        size in measure_field(),
    ) {
        let dataset = dataset();

        let first = render_bubble(&dataset, year, x, y, size).expect("render");
        let second = render_bubble(&dataset, year, x, y, size).expect("render");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first.to_plotly_figure()).expect("json"),
            serde_json::to_string(&second.to_plotly_figure()).expect("json")
        );

        prop_assert_eq!(render_bar(&dataset, year).expect("bar"), render_bar(&dataset, year).expect("bar"));
        prop_assert_eq!(render_pie(&dataset, year).expect("pie"), render_pie(&dataset, year).expect("pie"));
    }
}
